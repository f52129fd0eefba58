use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

/// Command-line arguments for the module-pack tool
#[derive(Debug)]
pub struct Args {
    /// Enable verbose output
    pub verbose: bool,

    /// Path to module.json or directory containing it
    pub path: Option<PathBuf>,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        let matches = Command::new("module-pack")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Packages a module's build artifacts into a versioned zip archive")
            .arg(
                Arg::new("path")
                    .short('p')
                    .long("path")
                    .value_name("PATH")
                    .help("Path to module.json or directory containing it")
            )
            .arg(
                Arg::new("verbose")
                    .short('v')
                    .long("verbose")
                    .action(ArgAction::SetTrue)
                    .help("Enable verbose output")
            )
            .get_matches();

        Self {
            verbose: matches.get_flag("verbose"),
            path: matches.get_one::<String>("path").map(PathBuf::from),
        }
    }
}
