use std::path::PathBuf;

use clap::ArgMatches;
use log::{error, LevelFilter};

use crate::frontend::config::{GeneralConfig, InputConfig, OutputConfig};
use crate::frontend::demos::Demo;
use crate::frontend::runner::MissionRunner;


pub const ARG_DEMO: &str    = "demo mission";
pub const ARG_OUTPUT: &str  = "output path";
pub const ARG_PLAN: &str    = "mission plan path";
pub const ARG_STDOUT: &str  = "print to stdout";
pub const ARG_VERBOSE: &str = "verbose";

pub const GROUP_INPUT: &str = "input";

pub const DEMO_BAI: &str      = "bai";
pub const DEMO_DEAD: &str     = "dead";
pub const DEMO_DEGRADED: &str = "degraded";
pub const DEMO_SEAD: &str     = "sead";
pub const DEMO_STRIKE: &str   = "strike";


pub fn handle_arguments(matches: &ArgMatches) {
    init_logger(verbose(matches));

    let Some(input_config) = input_config(matches) else {
        return;
    };

    let general_config = GeneralConfig::new(
        input_config,
        output_config(matches)
    );

    let result = MissionRunner::from_config(&general_config)
        .and_then(|runner| runner.run());

    if let Err(run_error) = result {
        error!("{run_error}");
        std::process::exit(1);
    }
}

// `RUST_LOG` takes precedence over the verbosity flag.
fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn input_config(matches: &ArgMatches) -> Option<InputConfig> {
    if let Some(plan_path) = matches.get_one::<PathBuf>(ARG_PLAN) {
        return Some(InputConfig::Plan(plan_path.clone()));
    }

    let demo = match matches.get_one::<String>(ARG_DEMO)?.as_str() {
        DEMO_BAI      => Demo::Bai,
        DEMO_DEAD     => Demo::Dead,
        DEMO_DEGRADED => Demo::Degraded,
        DEMO_SEAD     => Demo::Sead,
        DEMO_STRIKE   => Demo::Strike,
        _             => return None,
    };

    Some(InputConfig::Demo(demo))
}

fn output_config(matches: &ArgMatches) -> OutputConfig {
    OutputConfig::new(
        matches
            .get_one::<PathBuf>(ARG_OUTPUT)
            .map(PathBuf::as_path),
        matches.get_flag(ARG_STDOUT),
    )
}

fn verbose(matches: &ArgMatches) -> bool {
    matches.get_flag(ARG_VERBOSE)
}
