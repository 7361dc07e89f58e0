//! Read-only rendering of the reservation list.

use leptos::*;
use roomplan_types::Reservation;

/// Pure projection of the reservation list, in insertion order. No sorting,
/// no filtering, no mutation.
#[component]
pub fn ReservationList(reservations: ReadSignal<Vec<Reservation>>) -> impl IntoView {
    view! {
        <section class="card">
            <h2>"Current Reservations"</h2>
            <p class="card-description">"List of all current room reservations."</p>
            <Show
                when=move || reservations.with(|list| !list.is_empty())
                fallback=|| view! { <p class="list-empty">"No reservations yet."</p> }
            >
                <ul class="reservation-list">
                    <For
                        each=move || reservations.get()
                        key=|reservation| reservation.id
                        children=reservation_row
                    />
                </ul>
            </Show>
        </section>
    }
}

fn reservation_row(reservation: Reservation) -> impl IntoView {
    view! {
        <li class="reservation-row">
            <span class="room-avatar">{reservation.room.avatar().to_string()}</span>
            <span class="reservation-text">
                <span class="reservation-name">{reservation.name.clone()}</span>
                <span class="reservation-schedule">{reservation.schedule_line()}</span>
            </span>
            <span class="room-badge">{reservation.room.badge_label()}</span>
        </li>
    }
}
