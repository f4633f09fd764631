//! Network command - render store-to-facility assignments.

use std::path::PathBuf;

use flowmap::scenario::Scenario;
use tracing::info;

use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the network command.
pub struct NetworkArgs {
    pub scenario: PathBuf,
    pub output: Option<PathBuf>,
    pub debug: bool,
}

/// Run the network command.
pub fn run(args: NetworkArgs) -> Result<(), CliError> {
    let runner = CliRunner::with_debug(args.debug)?;
    runner.log_startup("network");

    let scenario = Scenario::load(&args.scenario)?;
    let deck = runner
        .renderer()
        .plot_network(&scenario.stores, &scenario.centers)?;

    info!(
        stores = scenario.stores.len(),
        centers = scenario.centers.len(),
        "Rendered network map"
    );
    runner.emit(&deck, args.output.as_deref(), "Network Assignments")
}
