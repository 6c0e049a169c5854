#[cfg(not(target_arch = "wasm32"))]
use log::LevelFilter;

/// Environment variable that turns on debug logging in the CLI.
pub const DEBUG_ENV_VAR: &str = "WORDFINDER_DEBUG";

/// Initialize logging for wordfinder.
///
/// # Behavior
/// - **Native (CLI):** respects `debug_enabled` or `RUST_LOG`.
/// - **WASM:** uses `Debug` level if `debug_enabled` is true, otherwise `Info` level.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logger(debug_enabled: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        let level = if debug_enabled {
            log::Level::Debug
        } else {
            log::Level::Info
        };

        match console_log::init_with_level(level) {
            Ok(()) => {
                log::info!("WASM logger initialized at {level:?} level");
            }
            Err(e) => {
                let msg = format!("Failed to initialize console_log: {e}. Logging will be unavailable.");
                web_sys::console::error_1(&msg.into());
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let level = if debug_enabled {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };

        let mut builder = env_logger::Builder::new();
        builder
            .filter(None, level)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(false);

        // Let RUST_LOG override our defaults if explicitly set
        if let Ok(spec) = std::env::var("RUST_LOG") {
            builder.parse_filters(&spec);
        }

        if builder.try_init().is_ok() {
            log::debug!("Native logger initialized at {level:?} level");
        }
    }
}
