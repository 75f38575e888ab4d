#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(coverage_nightly, coverage(off))]

use anyhow::{Context, Result};
use astronaut_rescue::app::App;
use astronaut_rescue::config::Options;
use astronaut_rescue::platform;
use astronaut_rescue::runtime::Runtime;
use tracing::info;

/// The main entry point of the application.
///
/// Sets up logging, brings up SDL, then runs frames until a quit is requested.
fn main() -> Result<()> {
    platform::init_logging().context("Could not initialize logging")?;

    let options = Options::from_env().context("Invalid command line")?;
    let runtime = Runtime::init().context("Could not initialize SDL")?;
    let mut app = App::new(runtime, &options).context("Could not create app")?;

    info!("Starting game loop");
    while app.run() {}

    app.shutdown();
    Ok(())
}
