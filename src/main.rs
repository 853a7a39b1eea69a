mod analytics;
mod cli;
mod config;
mod constant;
mod jenkins;
mod notifier_error;
mod pretty_log;
mod run_source;

use crate::cli::{cli_do_debug, cli_do_init, cli_do_notify};
use crate::notifier_error::NotifierError;
use clap::{Parser, Subcommand};
use std::io::stdout;
use std::path::PathBuf;
use std::process::ExitCode;
use strum_macros::Display;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name="Build Analytics Notifier",
  author,
  version,
  about(env!("CARGO_PKG_DESCRIPTION")),
  long_about=None,
  arg_required_else_help=true
)]
struct Cli {
    /// config file, or a directory holding it.
    /// default: ~/.build-analytics.toml
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Display)]
enum Commands {
    /// Report a completed run to the analytics service.
    Notify {
        /// exported run record (api/json) or the run url.
        #[arg(short, long)]
        run: String,

        /// console log of the run.
        #[arg(short, long)]
        log_file: PathBuf,

        /// artifact root of the run.
        /// default: artifacts recorded in the run record.
        #[arg(short, long)]
        artifacts: Option<PathBuf>,
    },
    /// Write a config file.
    Init {
        /// analytics endpoint url.
        #[arg(long)]
        server_ip: String,

        /// stage label, like "unit" or "nightly".
        #[arg(long)]
        build_stage_type: String,

        /// directory watched by filebeat.
        #[arg(long)]
        filebeats_directory: String,

        #[arg(long)]
        user_prefix: String,

        /// Jenkins root URL.
        #[arg(long)]
        jenkins_server_ip: String,

        /// only report runs that did not succeed.
        #[arg(long)]
        upload_only_on_fail: bool,

        /// mark the build as failed after reporting.
        #[arg(long)]
        fail_build: bool,

        /// give up on the analytics server after this many seconds.
        #[arg(long, value_name = "SECONDS")]
        request_timeout: Option<u64>,
    },
    /// Show debug info.
    Debug,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("{}=info", env!("CARGO_CRATE_NAME")).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        return ExitCode::SUCCESS;
    };

    tracing::debug!(command = %command, "running");
    match main_cli(cli.config, command).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            err.colored_println(&mut stdout());
            ExitCode::FAILURE
        }
    }
}

async fn main_cli(config: Option<PathBuf>, command: Commands) -> Result<bool, NotifierError> {
    let mut stdout = stdout();
    match command {
        Commands::Notify {
            run,
            log_file,
            artifacts,
        } => {
            // ban notify
            cli_do_notify(&mut stdout, config.as_deref(), &run, log_file, artifacts).await
        }
        Commands::Init {
            server_ip,
            build_stage_type,
            filebeats_directory,
            user_prefix,
            jenkins_server_ip,
            upload_only_on_fail,
            fail_build,
            request_timeout,
        } => {
            // ban init
            cli_do_init(
                &mut stdout,
                config.as_deref(),
                server_ip,
                build_stage_type,
                filebeats_directory,
                user_prefix,
                jenkins_server_ip,
                upload_only_on_fail,
                fail_build,
                request_timeout,
            )?;
            Ok(true)
        }
        Commands::Debug => {
            // ban debug
            cli_do_debug(&mut stdout, config.as_deref())?;
            Ok(true)
        }
    }
}
