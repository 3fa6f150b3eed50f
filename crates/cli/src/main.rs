use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use namecheck::commands::{
    check_command, export_command, init_config_command, CheckOptions, ExportOptions,
};
use namecheck::DEFAULT_CONFIG_FILE;

/// Foreign-name annotation checker.
///
/// This CLI is a thin wrapper around `namecheck-core`: it loads a declaration
/// graph dumped by a host compiler, validates its foreign-name annotations and
/// prints the names each declaration exports. All substantive logic lives in
/// the library so it can be tested thoroughly and reused from other frontends.
#[derive(Parser, Debug)]
#[command(
    name = "namecheck",
    version,
    about = "Validate foreign-name annotations and resolve exported names",
    long_about = None
)]
struct Cli {
    /// Log debug events to stderr (RUST_LOG takes precedence).
    #[arg(long, short, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate every declaration of a graph and print the diagnostics.
    ///
    /// Exits with a non-zero status when any diagnostic is reported.
    Check {
        /// Declaration graph (`.json`, or `.yaml`/`.yml`).
        #[arg(long)]
        input: String,

        /// Config file; defaults apply when omitted.
        #[arg(long)]
        config: Option<String>,

        /// Report invalid characters as one merged diagnostic.
        #[arg(long, default_value_t = false)]
        merged_chars: bool,

        /// Ignore `exact` when comparing names inherited from several bases.
        #[arg(long, default_value_t = false)]
        ignore_exact: bool,

        /// Emit a JSON report instead of rendered diagnostics.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Print the exported interface model of every class in a graph.
    Export {
        /// Declaration graph (`.json`, or `.yaml`/`.yml`).
        #[arg(long)]
        input: String,

        /// Config file; defaults apply when omitted.
        #[arg(long)]
        config: Option<String>,

        /// Prefix for exported class names (overrides the config file).
        #[arg(long)]
        prefix: Option<String>,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Write a default config file.
    InitConfig {
        /// Target path; the extension picks YAML or JSON.
        #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
        path: String,

        /// Overwrite an existing file.
        #[arg(long, default_value_t = false)]
        force: bool,
    },
}

fn setup_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("namecheck=debug,namecheck_core=debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    match cli.command {
        Command::Check { input, config, merged_chars, ignore_exact, json } => {
            let options = CheckOptions { input, config, merged_chars, ignore_exact, json };
            if !check_command(&options)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Export { input, config, prefix, json } => {
            export_command(&ExportOptions { input, config, prefix, json })?
        }
        Command::InitConfig { path, force } => init_config_command(&path, force)?,
    }

    Ok(ExitCode::SUCCESS)
}
