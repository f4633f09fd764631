//! Summary command - print the cost and facility summary.

use std::io::Write;
use std::path::PathBuf;

use flowmap::scenario::Scenario;

use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the summary command.
pub struct SummaryArgs {
    pub scenario: PathBuf,
    pub debug: bool,
}

/// Run the summary command.
pub fn run(args: SummaryArgs) -> Result<(), CliError> {
    let runner = CliRunner::with_debug(args.debug)?;
    runner.log_startup("summary");

    let scenario = Scenario::load(&args.scenario)?;
    let report = runner.renderer().summary(
        &scenario.costs,
        &scenario.centers,
        &scenario.demand,
        scenario.summary_options(),
    )?;

    let mut stdout = std::io::stdout().lock();
    write!(stdout, "{}", report).map_err(CliError::Stdout)
}
