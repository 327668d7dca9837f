use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgGroup, Command, value_parser};

use args::{
    handle_arguments, ARG_DEMO, ARG_OUTPUT, ARG_PLAN, ARG_STDOUT, ARG_VERBOSE,
    DEMO_BAI, DEMO_DEAD, DEMO_DEGRADED, DEMO_SEAD, DEMO_STRIKE, GROUP_INPUT
};


mod args;


pub fn cli() {
    let matches = command().get_matches();

    handle_arguments(&matches);
}

fn command() -> Command {
    Command::new("mission_tasking")
        .version("0.1.0")
        .about("Compiles strike package waypoints into mission tasks.")
        .args([
            arg_plan(),
            arg_demo(),
            arg_output(),
            arg_stdout(),
            arg_verbose(),
        ])
        .group(
            ArgGroup::new(GROUP_INPUT)
                .args([ARG_PLAN, ARG_DEMO])
                .required(true)
        )
        .arg_required_else_help(true)
}

fn arg_plan() -> Arg {
    Arg::new(ARG_PLAN)
        .long("plan")
        .value_parser(value_parser!(PathBuf))
        .help("Read the scenario and packages from a `.json` mission plan")
}

fn arg_demo() -> Arg {
    Arg::new(ARG_DEMO)
        .short('x')
        .long("demo")
        .value_parser([
            DEMO_BAI,
            DEMO_DEAD,
            DEMO_DEGRADED,
            DEMO_SEAD,
            DEMO_STRIKE,
        ])
        .help("Compile a premade demo mission")
}

fn arg_output() -> Arg {
    Arg::new(ARG_OUTPUT)
        .short('o')
        .long("out")
        .value_parser(value_parser!(PathBuf))
        .conflicts_with(ARG_STDOUT)
        .help(
            "Write compiled tasks to this `.json` file \
            (a timestamped file in the working directory by default)"
        )
}

fn arg_stdout() -> Arg {
    Arg::new(ARG_STDOUT)
        .long("stdout")
        .action(ArgAction::SetTrue)
        .help("Print compiled tasks instead of writing a file")
}

fn arg_verbose() -> Arg {
    Arg::new(ARG_VERBOSE)
        .short('v')
        .long("verbose")
        .action(ArgAction::SetTrue)
        .help("Show full log output")
}


#[cfg(test)]
mod tests {
    use super::*;


    #[test]
    fn command_is_well_formed() {
        command().debug_assert();
    }

    #[test]
    fn plan_and_demo_are_mutually_exclusive() {
        let result = command().try_get_matches_from([
            "mission_tasking", "--plan", "plan.json", "--demo", "dead"
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn input_is_required() {
        let result = command().try_get_matches_from(["mission_tasking", "-v"]);

        assert!(result.is_err());
    }

    #[test]
    fn unknown_demo_is_rejected() {
        let result = command().try_get_matches_from([
            "mission_tasking", "--demo", "cap"
        ]);

        assert!(result.is_err());
    }
}
