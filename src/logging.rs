use log::Level;

/// Route `log` records to the browser console.
///
/// Debug builds log everything from this crate; release builds start at info.
pub fn setup_logging() {
    let level = if cfg!(debug_assertions) {
        Level::Debug
    } else {
        Level::Info
    };

    wasm_logger::init(wasm_logger::Config::new(level).module_prefix("e_learning_app"));

    log::info!("Logging initialized at {level} level");
}
