use std::process::ExitCode;

use kiln_engine::core::{App, UpdateCtx};
use kiln_engine::device::GpuInit;
use kiln_engine::logging::{LoggingConfig, init_logging};
use kiln_engine::window::{Runtime, RuntimeConfig};

/// Empty game: inherits the default render (clear to the background color)
/// and the no-op key hooks.
struct Game;

impl App for Game {
    fn update(&mut self, _ctx: &mut UpdateCtx<'_>) {}
}

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig::new("Title", 640.0, 480.0);

    if let Err(err) = Runtime::run(config, GpuInit::default(), Game) {
        log::error!("failed to start: {err:#}");
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}
