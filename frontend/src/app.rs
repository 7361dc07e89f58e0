//! Page shell wiring the form to the list.

use crate::form::ReservationForm;
use crate::list::ReservationList;
use leptos::*;
use roomplan_types::Reservation;

/// Root component, owner of the reservation list state.
///
/// The list starts empty on every page load, only ever grows, and is gone on
/// reload. The submit handler in [ReservationForm] is its only writer.
#[component]
pub fn App() -> impl IntoView {
    let (reservations, set_reservations) = create_signal(Vec::<Reservation>::new());

    view! {
        <div class="page">
            <h1>"Conference Room Reservation"</h1>
            <ReservationForm reservations=set_reservations/>
            <ReservationList reservations=reservations/>
        </div>
    }
}
