// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::{env, path::PathBuf};
use tracing_subscriber::EnvFilter;

use crate::core::{artifacts::NamingScheme, config::CliOverrides};
use crate::infra::t;

pub mod commands;

/// Parsed command line, before it is merged with the config file.
#[derive(Debug, Clone)]
pub struct CliArgs {
    pub path: PathBuf,
    pub config: Option<PathBuf>,
    pub lang: Option<String>,
    pub verbose: bool,
    pub overrides: CliOverrides,
}

impl CliArgs {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            path: matches
                .get_one::<PathBuf>("path")
                .cloned()
                .unwrap_or_default(), // Required by clap
            config: matches.get_one::<PathBuf>("config").cloned(),
            lang: matches.get_one::<String>("lang").cloned(),
            verbose: matches.get_flag("verbose"),
            overrides: CliOverrides {
                dry_run: matches.get_flag("dry"),
                interpreter: matches.get_one::<PathBuf>("interpreter").cloned(),
                output_dir: matches.get_one::<PathBuf>("output").cloned(),
                naming: matches.get_one::<NamingScheme>("naming").copied(),
                pacing_ms: matches.get_one::<u64>("pacing-ms").copied(),
                timeout_secs: matches.get_one::<u64>("timeout").copied(),
                sort: matches.get_flag("sort"),
            },
        }
    }
}

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for `--lang <VALUE>` or `--lang=<VALUE>`.
fn pre_parse_language() -> Option<String> {
    let args: Vec<String> = env::args().collect();
    if let Some(pos) = args.iter().position(|arg| arg == "--lang") {
        return args.get(pos + 1).cloned();
    }
    args.iter()
        .find_map(|arg| arg.strip_prefix("--lang="))
        .map(str::to_string)
}

pub fn build_cli(locale: &str) -> Command {
    Command::new("lox-harness")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli_about", locale = locale).to_string())
        .arg(
            Arg::new("path")
                .help(t!("arg_path", locale = locale).to_string())
                .value_name("PATH")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("dry")
                .short('d')
                .long("dry")
                .help(t!("arg_dry", locale = locale).to_string())
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help(t!("arg_output", locale = locale).to_string())
                .value_name("DIR")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("interpreter")
                .short('i')
                .long("interpreter")
                .help(t!("arg_interpreter", locale = locale).to_string())
                .value_name("EXE")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("naming")
                .short('n')
                .long("naming")
                .help(t!("arg_naming", locale = locale).to_string())
                .value_name("SCHEME")
                .value_parser(clap::value_parser!(NamingScheme))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help(t!("arg_config", locale = locale).to_string())
                .value_name("CONFIG")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("pacing-ms")
                .long("pacing-ms")
                .help(t!("arg_pacing", locale = locale).to_string())
                .value_name("MS")
                .value_parser(clap::value_parser!(u64))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .help(t!("arg_timeout", locale = locale).to_string())
                .value_name("SECS")
                .value_parser(clap::value_parser!(u64).range(1..))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("sort")
                .long("sort")
                .help(t!("arg_sort", locale = locale).to_string())
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help(t!("arg_verbose", locale = locale).to_string())
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli_lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .action(ArgAction::Set),
        )
}

/// Installs the stderr log subscriber. `RUST_LOG` takes precedence over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // A subscriber may already be installed when embedded; keep that one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

pub async fn run() -> Result<()> {
    // Pre-parse language and initialize i18n first.
    let language = crate::init_locale(pre_parse_language().as_deref());

    let matches = build_cli(&language).get_matches();
    let args = CliArgs::from_matches(&matches);
    init_tracing(args.verbose);
    tracing::debug!(locale = %language, ?args, "parsed command line");

    commands::run::execute(args).await
}
