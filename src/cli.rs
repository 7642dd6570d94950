//! Command-line glue: `--help` listing and exit codes

use crate::registry::Registry;
use argh::FromArgs;
use log::error;

/// Printed above the variable listing on `--help`
pub const HELP_BANNER: &str = "This program is configured through environment variables.";

/// Command-line arguments understood next to the declared variables
#[derive(FromArgs, Debug, Clone, PartialEq)]
/// Load configuration from environment variables.
///
/// Use --help to list every variable the program reads.
pub struct CliArgs {}

/// How the process should end instead of continuing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exit {
    pub code: i32,
    pub message: String,
}

/// Handle argv and then load `registry` from the process environment.
///
/// `--help` short-circuits before any variable is read.
pub fn run(registry: &mut Registry, args: &[&str]) -> Result<CliArgs, Exit> {
    let (command, rest) = match args.split_first() {
        Some((command, rest)) => (*command, rest),
        None => ("envreg", &[][..]),
    };

    let cli_args = match CliArgs::from_args(&[command], rest) {
        Ok(cli_args) => cli_args,
        Err(early_exit) => {
            return Err(match early_exit.status {
                Ok(()) => Exit {
                    code: 0,
                    message: format!(
                        "{}\n{}\n\n{}",
                        early_exit.output.trim_end(),
                        HELP_BANNER,
                        registry.help()
                    ),
                },
                Err(()) => Exit {
                    code: 1,
                    message: early_exit.output,
                },
            });
        }
    };

    registry.parse().map_err(|e| Exit {
        code: 1,
        message: e.to_string(),
    })?;

    Ok(cli_args)
}

/// [`run`] on `std::env::args()`, terminating the process on [`Exit`]
pub fn parse_or_exit(registry: &mut Registry) -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    match run(registry, &args) {
        Ok(cli_args) => cli_args,
        Err(exit) if exit.code == 0 => {
            print!("{}", exit.message);
            std::process::exit(0);
        }
        Err(exit) => {
            error!("Invalid configuration");
            eprintln!("{}", exit.message.trim_end());
            std::process::exit(exit.code);
        }
    }
}
