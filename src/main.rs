use e_learning_app::app::App;
use e_learning_app::logging::setup_logging;

fn main() {
    console_error_panic_hook::set_once();
    setup_logging();

    log::info!("Starting e-learning app");
    leptos::mount::mount_to_body(App);
}
