use std::process::ExitCode;

use hello_engine::logging::{init_logging, LoggingConfig};
use hello_engine::window::Runtime;

mod assets;
mod demo;

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());

    match Runtime::run(assets::runtime_config(), demo::TriangleDemo::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
