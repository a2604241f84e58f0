use std::process::ExitCode;

use jumping_ghost::{
    app::App,
    config::{LaunchOptions, USAGE},
    platform,
};
use tracing::{error, info};

pub fn main() -> ExitCode {
    let options = match LaunchOptions::parse(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{e}\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    if options.help {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    if let Err(e) = platform::init_logging() {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    let mut app = match App::new(&options) {
        Ok(app) => app,
        Err(e) => {
            error!(error = %e, "Failed to start");
            return ExitCode::FAILURE;
        }
    };

    info!(paused = options.paused, "Starting frame loop");
    while app.run() {}

    info!("Exited cleanly");
    ExitCode::SUCCESS
}
