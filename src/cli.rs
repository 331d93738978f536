use std::env;
use std::path::PathBuf;

pub struct CliOptions {
    pub scenario: Option<PathBuf>,
    pub preset: Option<String>,
    pub overrides: Vec<String>,
    pub csv_out: Option<PathBuf>,
    pub json: bool,
    pub report_payload: bool,
    pub verbose: bool,
    #[cfg(feature = "api")]
    pub serve: bool,
    #[cfg(feature = "api")]
    pub port: u16,
}

pub enum Command {
    Run(CliOptions),
    Help,
}

pub fn parse_args() -> Result<Command, String> {
    let args: Vec<String> = env::args().skip(1).collect();
    parse_args_from(&args)
}

fn parse_args_from(args: &[String]) -> Result<Command, String> {
    let mut i = 0usize;
    let mut scenario = None;
    let mut preset = None;
    let mut overrides = Vec::new();
    let mut csv_out = None;
    let mut json = false;
    let mut report_payload = false;
    let mut verbose = false;
    #[cfg(feature = "api")]
    let mut serve = false;
    #[cfg(feature = "api")]
    let mut port = 3000u16;

    while i < args.len() {
        match args[i].as_str() {
            "--scenario" => {
                i += 1;
                let path = args.next_or_err(
                    i,
                    "missing value for --scenario (expected a TOML file path)",
                )?;
                if scenario.replace(PathBuf::from(path)).is_some() {
                    return Err("--scenario provided more than once".to_string());
                }
            }
            "--preset" => {
                i += 1;
                let name =
                    args.next_or_err(i, "missing value for --preset (expected a preset name)")?;
                if preset.replace(name.to_string()).is_some() {
                    return Err("--preset provided more than once".to_string());
                }
            }
            "--input" => {
                i += 1;
                let assignment =
                    args.next_or_err(i, "missing value for --input (expected key=value)")?;
                overrides.push(assignment.to_string());
            }
            "--csv-out" => {
                i += 1;
                let path =
                    args.next_or_err(i, "missing value for --csv-out (expected a file path)")?;
                if csv_out.replace(PathBuf::from(path)).is_some() {
                    return Err("--csv-out provided more than once".to_string());
                }
            }
            "--json" => json = true,
            "--report-payload" => report_payload = true,
            "--verbose" | "-v" => verbose = true,
            #[cfg(feature = "api")]
            "--serve" => serve = true,
            #[cfg(feature = "api")]
            "--port" => {
                i += 1;
                let value = args.next_or_err(i, "missing value for --port (expected a u16)")?;
                port = value
                    .parse::<u16>()
                    .map_err(|_| format!("--port value \"{value}\" is not a valid u16"))?;
            }
            "--help" | "-h" => return Ok(Command::Help),
            other => return Err(format!("unknown argument: {other}")),
        }
        i += 1;
    }

    if scenario.is_some() && preset.is_some() {
        return Err(
            "arguments `--scenario` and `--preset` are mutually exclusive; choose one source"
                .to_string(),
        );
    }

    if scenario.is_none() && preset.is_none() {
        preset = Some("baseline".to_string());
    }

    Ok(Command::Run(CliOptions {
        scenario,
        preset,
        overrides,
        csv_out,
        json,
        report_payload,
        verbose,
        #[cfg(feature = "api")]
        serve,
        #[cfg(feature = "api")]
        port,
    }))
}

trait SliceArgExt {
    fn next_or_err(&self, index: usize, err: &str) -> Result<&str, String>;
}

impl SliceArgExt for [String] {
    fn next_or_err(&self, index: usize, err: &str) -> Result<&str, String> {
        self.get(index)
            .map(String::as_str)
            .ok_or_else(|| err.to_string())
    }
}

pub fn print_usage() {
    eprintln!("grid-invest: compare building a new plant with a smart-grid upgrade");
    eprintln!();
    eprintln!("Usage: grid-invest [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --scenario <path>        Load scenario from TOML config file");
    eprintln!("  --preset <name>          Use a built-in preset (baseline, custom_cost, dense_metro)");
    eprintln!("  --input <key=value>      Override one input field (repeatable)");
    eprintln!("  --csv-out <path>         Export the projection table to CSV");
    eprintln!("  --json                   Print the result as JSON");
    eprintln!("  --report-payload         Print the report request body as JSON");
    eprintln!("  --verbose, -v            Enable debug logging");
    #[cfg(feature = "api")]
    {
        eprintln!("  --serve                  Start REST API server after the calculation");
        eprintln!("  --port <u16>             API server port (default: 3000)");
    }
    eprintln!("  --help, -h               Show this help message");
    eprintln!();
    eprintln!("If no --scenario or --preset is given, the baseline preset is used.");
}
