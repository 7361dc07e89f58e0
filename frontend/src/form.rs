//! The reservation form: draft state and the submit path.

use crate::form_values::{NonEmptyString, ValidateFromFormInput};
use leptos::*;
use roomplan_types::{Reservation, Room};
use uuid::Uuid;

/// Transient draft of the four form fields.
///
/// All fields hold raw input strings; `room` holds the selected option's value
/// (a room id, or `""` while the placeholder is shown). The draft is reset to
/// empty strings after every successful submission and has no identity of its
/// own.
#[derive(Clone, Copy)]
pub struct ReservationDraft {
    pub room: RwSignal<String>,
    pub date: RwSignal<String>,
    pub time: RwSignal<String>,
    pub name: RwSignal<String>,
}

impl ReservationDraft {
    pub fn new() -> Self {
        ReservationDraft {
            room: create_rw_signal(String::new()),
            date: create_rw_signal(String::new()),
            time: create_rw_signal(String::new()),
            name: create_rw_signal(String::new()),
        }
    }

    /// Validate the current field values and build a reservation with a fresh
    /// id. Mirrors the browser's required-field gating: every field must be
    /// non-empty and the room value must be a known room id. The date and time
    /// strings are taken over verbatim.
    pub fn to_reservation(&self) -> Result<Reservation, String> {
        Ok(Reservation {
            id: Uuid::new_v4(),
            room: Room::from_form_value(&self.room.get())?,
            date: NonEmptyString::from_form_value(&self.date.get())?.into_inner(),
            time: NonEmptyString::from_form_value(&self.time.get())?.into_inner(),
            name: NonEmptyString::from_form_value(&self.name.get())?.into_inner(),
        })
    }

    pub fn clear(&self) {
        self.room.set(String::new());
        self.date.set(String::new());
        self.time.set(String::new());
        self.name.set(String::new());
    }
}

/// Append the drafted reservation to the list, then reset the form.
///
/// Returns false and leaves both the list and the draft untouched when
/// validation fails. Interactive submissions never reach that branch, since
/// the `required` attributes block them in the browser first.
pub fn submit(draft: ReservationDraft, reservations: WriteSignal<Vec<Reservation>>) -> bool {
    match draft.to_reservation() {
        Ok(reservation) => {
            log::debug!(
                "New reservation for {} on {}",
                reservation.room.label(),
                reservation.schedule_line()
            );
            reservations.update(|list| list.push(reservation));
            draft.clear();
            true
        }
        Err(reason) => {
            log::warn!("Ignoring form submission: {}", reason);
            false
        }
    }
}

#[component]
pub fn ReservationForm(reservations: WriteSignal<Vec<Reservation>>) -> impl IntoView {
    let draft = ReservationDraft::new();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        submit(draft, reservations);
    };

    view! {
        <section class="card">
            <h2>"Make a Reservation"</h2>
            <p class="card-description">"Fill out the form to reserve a conference room."</p>
            <form on:submit=on_submit>
                <div class="form-grid">
                    <div class="form-field">
                        <label for="room">"Room"</label>
                        <select
                            id="room"
                            required
                            prop:value=move || draft.room.get()
                            on:change=move |ev| draft.room.set(event_target_value(&ev))
                        >
                            <option value="">"Select a room"</option>
                            {Room::ALL
                                .iter()
                                .map(|room| view! { <option value=room.id()>{room.label()}</option> })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="form-field">
                        <label for="date">"Date"</label>
                        <input
                            id="date"
                            type="date"
                            required
                            prop:value=move || draft.date.get()
                            on:input=move |ev| draft.date.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-field">
                        <label for="time">"Time"</label>
                        <input
                            id="time"
                            type="time"
                            required
                            prop:value=move || draft.time.get()
                            on:input=move |ev| draft.time.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-field">
                        <label for="name">"Your Name"</label>
                        <input
                            id="name"
                            type="text"
                            required
                            placeholder="Enter your name"
                            prop:value=move || draft.name.get()
                            on:input=move |ev| draft.name.set(event_target_value(&ev))
                        />
                    </div>
                </div>
                <button type="submit" class="submit-button">"Reserve Room"</button>
            </form>
        </section>
    }
}
