use app::App;
use logger::LoggerConfig;
use tracing::info;

pub mod app;
pub mod logger;
pub mod toolbox;

pub fn start() {
    console_error_panic_hook::set_once();

    if let Err(err) = logger::simple_logger_init(LoggerConfig::default()) {
        web_sys::console::error_1(&format!("logger init failed: {}", err).into());
    }
    info!("mounting");

    leptos::mount::mount_to_body(App);
}
