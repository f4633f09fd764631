//! Flows command - render filtered transport lanes.

use std::path::PathBuf;

use flowmap::scenario::Scenario;
use flowmap::FlowOutcome;
use tracing::info;

use super::common::{resolve_brand, resolve_selection, FlowType};
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the flows command.
pub struct FlowsArgs {
    pub scenario: PathBuf,
    pub types: Vec<FlowType>,
    pub brand: Option<String>,
    pub output: Option<PathBuf>,
    pub debug: bool,
}

/// Run the flows command.
///
/// When nothing survives the filters the notice is printed to stderr and no
/// document is written.
pub fn run(args: FlowsArgs) -> Result<(), CliError> {
    let runner = CliRunner::with_debug(args.debug)?;
    runner.log_startup("flows");
    let config = runner.config();

    let selection = resolve_selection(&args.types, config);
    let brand = resolve_brand(args.brand.as_deref(), config);
    info!(selection = %selection, brand = %brand, "Flow filters");

    let scenario = Scenario::load(&args.scenario)?;
    match runner
        .renderer()
        .plot_flows(&scenario.lanes, &scenario.centers, &selection, &brand)
    {
        FlowOutcome::Rendered(deck) => runner.emit(&deck, args.output.as_deref(), "Network Flows"),
        FlowOutcome::NoData(notice) => {
            eprintln!("{}", notice);
            Ok(())
        }
    }
}
