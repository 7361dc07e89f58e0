use leptos::*;

mod app;
mod form;
mod form_values;
mod list;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("could not initialize logging");
    log::info!("Mounting room reservation app");
    mount_to_body(|| view! { <App/> })
}
