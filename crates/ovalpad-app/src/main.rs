//! Main application entry point (native).

use std::process::ExitCode;

#[cfg(feature = "native")]
fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Starting Ovalpad");

    match ovalpad_app::App::new().run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(not(feature = "native"))]
fn main() -> ExitCode {
    eprintln!("Native feature not enabled. Use `cargo run --features native`");
    ExitCode::FAILURE
}
