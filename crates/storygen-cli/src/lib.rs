//! storygen command line
//!
//! ```text
//! storygen parse <FILE> [--json]
//! storygen topology <FILE> [--json]
//! storygen generate <FILE> [--package P] [--config C] [--out-dir D]
//! ```
//!
//! `FILE` may be `-` to read the story from stdin. Artifacts go to stdout,
//! logs to stderr.

#![warn(unreachable_pub)]

mod commands;
mod summary;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;

pub use commands::{generate, parse, read_story, topology, GenerateOptions, Written};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default log filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "storygen=info";

fn file_arg() -> Arg {
    Arg::new("file")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Story file, or - for stdin")
}

fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output as JSON")
}

/// Command line definition
#[must_use]
pub fn cli() -> Command {
    Command::new("storygen")
        .version(VERSION)
        .about("Generate Gherkin feature files and Cucumber step stubs from user stories")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log at debug level"),
        )
        .subcommand(
            Command::new("parse")
                .about("Parse a story and print its structure")
                .arg(file_arg())
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("topology")
                .about("Print the services, events and schemas a story touches")
                .arg(file_arg())
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("generate")
                .about("Generate the feature file and step definitions")
                .arg(file_arg())
                .arg(
                    Arg::new("package")
                        .long("package")
                        .short('p')
                        .help("Java package for the step class"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .value_parser(value_parser!(PathBuf))
                        .help("TOML render configuration"),
                )
                .arg(
                    Arg::new("out-dir")
                        .long("out-dir")
                        .short('o')
                        .value_parser(value_parser!(PathBuf))
                        .help("Write artifacts under this directory instead of stdout"),
                ),
        )
}

/// Run a parsed command line, writing artifacts to `out`
///
/// # Errors
/// Any read, parse, config or write failure, with context
pub fn run(matches: &ArgMatches, out: &mut dyn std::io::Write) -> anyhow::Result<()> {
    let Some((name, args)) = matches.subcommand() else {
        anyhow::bail!("no subcommand given");
    };
    let file = args
        .get_one::<PathBuf>("file")
        .ok_or_else(|| anyhow::anyhow!("missing story file"))?;
    let text = read_story(file)?;

    match name {
        "parse" => parse(&text, args.get_flag("json"), out),
        "topology" => topology(&text, args.get_flag("json"), out),
        "generate" => {
            let options = GenerateOptions {
                package: args.get_one::<String>("package").cloned(),
                config: args.get_one::<PathBuf>("config").cloned(),
                out_dir: args.get_one::<PathBuf>("out-dir").cloned(),
            };
            let written = generate(&text, &options, out)?;
            for path in written.paths() {
                tracing::info!(path = %path.display(), "wrote artifact");
            }
            Ok(())
        }
        other => anyhow::bail!("unknown subcommand: {other}"),
    }
}
