//! grid-invest entry point: CLI wiring and config-driven calculation.

mod cli;

use std::process;

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use grid_invest::config::ScenarioConfig;
use grid_invest::error::{Error, Result};
use grid_invest::finance::types::ProjectionResult;
use grid_invest::io::export::export_csv;
use grid_invest::report::ReportRequest;

use cli::{CliOptions, Command};

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("warning: failed to install logger: {e}");
    }
}

/// Loads the scenario (file or preset), applies overrides and validates it.
fn load_scenario(opts: &CliOptions) -> Result<ScenarioConfig> {
    let mut scenario = if let Some(ref path) = opts.scenario {
        ScenarioConfig::from_toml_file(path)?
    } else {
        let name = opts.preset.as_deref().unwrap_or("baseline");
        tracing::debug!(preset = name, "using preset");
        ScenarioConfig::from_preset(name)?
    };

    for assignment in &opts.overrides {
        scenario.apply_override(assignment)?;
    }

    let errors = scenario.validate();
    if !errors.is_empty() {
        return Err(Error::Config(errors));
    }

    for key in scenario.unresolved_keys() {
        tracing::warn!(%key, "catalog key not found, its value is taken as 0");
    }

    Ok(scenario)
}

fn print_result(opts: &CliOptions, result: &ProjectionResult) -> Result<()> {
    if opts.json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        println!("{result}");
    }

    if opts.report_payload {
        let payload = ReportRequest::from(result);
        println!("{}", serde_json::to_string_pretty(&payload)?);
    }

    Ok(())
}

fn run(opts: &CliOptions) -> Result<()> {
    let scenario = load_scenario(opts)?;
    let inputs = scenario.investment_inputs();
    let engine = scenario.engine();

    let result = engine.calculate(&inputs);
    tracing::info!(
        lifespan_years = inputs.lifespan_years,
        horizons = result.projections.len(),
        decision = ?result.decision,
        "calculation complete"
    );

    print_result(opts, &result)?;

    if let Some(ref path) = opts.csv_out {
        export_csv(&result.projections, path)?;
        tracing::info!(path = %path.display(), "projection table written");
    }

    #[cfg(feature = "api")]
    if opts.serve {
        use std::net::SocketAddr;
        use std::sync::Arc;

        let state = Arc::new(grid_invest::api::AppState::from_config(&scenario));
        let addr = SocketAddr::from(([0, 0, 0, 0], opts.port));
        let rt = tokio::runtime::Runtime::new()?;
        rt.block_on(grid_invest::api::serve(state, addr))?;
    }

    Ok(())
}

fn main() {
    let opts = match cli::parse_args() {
        Ok(Command::Run(opts)) => opts,
        Ok(Command::Help) => {
            cli::print_usage();
            return;
        }
        Err(e) => {
            eprintln!("error: {e}");
            cli::print_usage();
            process::exit(1);
        }
    };

    init_logging(opts.verbose);

    if let Err(e) = run(&opts) {
        eprintln!("{e}");
        process::exit(1);
    }
}
