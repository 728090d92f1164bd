//! uml-check: consistency checker between UML class diagrams and source models.
//!
//! Compares a model extracted from source code against a model extracted from
//! a class diagram and reports where the two disagree.

#![allow(clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uml_check::{
    cli,
    compare::{ComparisonMode, DifferenceKind, Severity},
    config::{AppConfig, CheckConfig, CheckPaths, ConfigPreset, GenerateConfig},
    pipeline::exit_codes,
    reports::ReportFormat,
};

/// Build long version string with supported inputs and outputs
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nModel documents:",
        "\n  JSON, YAML (interchange format)",
        "\n\nModes:",
        "\n  strict, relaxed, minimal",
        "\n\nOutput Formats:",
        "\n  summary, json, markdown; PlantUML for generate"
    )
}

#[derive(Parser)]
#[command(name = "uml-check")]
#[command(version, long_version = build_long_version())]
#[command(about = "Check UML class diagrams against source code models", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Diagram and code are consistent
    1  Differences at or above --fail-on were found
    3  Error occurred

EXAMPLES:
    # Strict check with auto-detected output
    uml-check check code-model.json diagram.yaml

    # Diagram trails the code; only fail on errors
    uml-check check code-model.json diagram.yaml --mode relaxed

    # Markdown report for a pull request
    uml-check check code-model.json diagram.yaml -o markdown -O uml-report.md

    # Draft a diagram from the code
    uml-check generate code-model.json -O classes.puml")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `check` subcommand
#[derive(Parser)]
struct CheckArgs {
    /// Model derived from source code
    code: PathBuf,

    /// Model derived from the class diagram
    diagram: PathBuf,

    /// Comparison mode (default: strict, or the config file setting)
    #[arg(short, long, value_enum)]
    mode: Option<ComparisonMode>,

    /// Start from a named preset: default, strict, relaxed, minimal, ci-cd
    #[arg(long, value_parser = parse_preset)]
    preset: Option<ConfigPreset>,

    /// Output format (auto: summary on a terminal, JSON when piped)
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Hide differences below this severity in the report
    #[arg(long, value_enum)]
    min_severity: Option<Severity>,

    /// Only report these kinds (comma-separated, e.g. METHOD_MISMATCH)
    #[arg(long, value_delimiter = ',', value_parser = parse_kind)]
    kinds: Vec<DifferenceKind>,

    /// Exit with code 1 on differences at or above this severity (default: error)
    #[arg(long, value_enum)]
    fail_on: Option<Severity>,

    /// Maximum differences listed per severity
    #[arg(long)]
    max_items: Option<usize>,

    /// Leave remediation tips out of the report
    #[arg(long)]
    no_tips: bool,
}

/// Arguments for the `generate` subcommand
#[derive(Parser)]
struct GenerateArgs {
    /// Model derived from source code
    code: PathBuf,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Diagram title
    #[arg(long)]
    title: Option<String>,

    /// Render classes without members as plain boxes
    #[arg(long)]
    hide_empty_members: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare a code model with a diagram model
    Check(CheckArgs),

    /// Generate a PlantUML class diagram from a code model
    Generate(GenerateArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .uml-check.yaml in the current directory
    Init,
}

fn parse_kind(s: &str) -> Result<DifferenceKind, String> {
    DifferenceKind::parse(s).ok_or_else(|| {
        let known: Vec<&str> = DifferenceKind::all().iter().map(DifferenceKind::name).collect();
        format!("unknown difference kind '{s}' (expected one of {})", known.join(", "))
    })
}

fn parse_preset(s: &str) -> Result<ConfigPreset, String> {
    ConfigPreset::from_name(s).ok_or_else(|| {
        let known: Vec<&str> = ConfigPreset::all().iter().map(ConfigPreset::name).collect();
        format!("unknown preset '{s}' (expected one of {})", known.join(", "))
    })
}

fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins over the verbosity flags.
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    match run(cli) {
        Ok(code) => {
            if code != exit_codes::SUCCESS {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Check(args) => {
            let overrides = AppConfig::builder()
                .output_file(args.output_file)
                .no_color(cli.no_color)
                .max_items(args.max_items)
                .include_tips(!args.no_tips)
                .min_severity(args.min_severity)
                .kinds(args.kinds)
                .quiet(cli.quiet);
            let overrides = match args.mode {
                Some(mode) => overrides.mode(mode),
                None => overrides,
            };
            let overrides = match args.output {
                Some(format) => overrides.output_format(format),
                None => overrides,
            };
            let overrides = match args.fail_on {
                Some(severity) => overrides.fail_on(severity),
                None => overrides,
            };

            // Precedence: preset, then config file, then command line.
            let (file_config, loaded_from) = uml_check::config::load_or_default(cli.config.as_deref());
            if let Some(path) = &loaded_from {
                tracing::debug!("Using config file {}", path.display());
            }
            let mut app_config = args.preset.map_or_else(AppConfig::default, AppConfig::from_preset);
            app_config.merge(&file_config);
            app_config.merge(&overrides.build());

            let config = CheckConfig::from_app_config(
                CheckPaths {
                    code: args.code,
                    diagram: args.diagram,
                },
                app_config,
            );
            cli::run_check(config)
        }

        Commands::Generate(args) => cli::run_generate(GenerateConfig {
            code_path: args.code,
            output_file: args.output_file,
            title: args.title,
            hide_empty_members: args.hide_empty_members,
            quiet: cli.quiet,
        }),

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "uml-check", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { output } => {
            let schema = uml_check::config::generate_json_schema()
                .context("failed to serialize config schema")?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => println!("{schema}"),
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => run_config_action(action, cli.config),
    }
}

fn run_config_action(action: ConfigAction, explicit: Option<PathBuf>) -> Result<i32> {
    match action {
        ConfigAction::Show => {
            let (config, loaded_from) = uml_check::config::load_or_default(explicit.as_deref());
            match &loaded_from {
                Some(path) => eprintln!("# Loaded from: {}", path.display()),
                None => eprintln!("# No config file found; showing defaults"),
            }
            let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
            print!("{yaml}");
        }
        ConfigAction::Path => {
            let search_paths = [
                std::env::current_dir().ok(),
                ::dirs::config_dir().map(|p| p.join("uml-check")),
                ::dirs::home_dir(),
            ];
            eprintln!("Config file search paths (in order, plus the git root):");
            for path in search_paths.iter().flatten() {
                eprintln!("  {}", path.display());
            }
            eprintln!();
            match uml_check::config::discover_config_file(explicit.as_deref()) {
                Some(path) => eprintln!("Active config file: {}", path.display()),
                None => eprintln!("No config file found."),
            }
        }
        ConfigAction::Init => {
            let target = explicit.unwrap_or_else(uml_check::config::default_config_path);
            if target.exists() {
                anyhow::bail!(
                    "{} already exists. Remove it first to re-initialize.",
                    target.display()
                );
            }
            std::fs::write(&target, uml_check::config::generate_example_config())
                .with_context(|| format!("failed to write {}", target.display()))?;
            eprintln!("Created {}", target.display());
        }
    }
    Ok(exit_codes::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_check_args() {
        let cli = Cli::try_parse_from([
            "uml-check",
            "check",
            "code.json",
            "diagram.yaml",
            "--mode",
            "minimal",
            "--kinds",
            "METHOD_MISMATCH,class-missing-in-code",
            "--fail-on",
            "warning",
            "--preset",
            "ci",
        ])
        .unwrap();
        let Commands::Check(args) = cli.command else {
            panic!("expected check");
        };
        assert_eq!(args.mode, Some(ComparisonMode::Minimal));
        assert_eq!(
            args.kinds,
            vec![DifferenceKind::MethodMismatch, DifferenceKind::ClassMissingInCode]
        );
        assert_eq!(args.fail_on, Some(Severity::Warning));
        assert_eq!(args.preset, Some(ConfigPreset::CiCd));
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let parsed = Cli::try_parse_from(["uml-check", "check", "a", "b", "--kinds", "NOPE"]);
        assert!(parsed.is_err());
    }
}
