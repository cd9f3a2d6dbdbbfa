//! CLI entry point - the composition root.
//!
//! Command dispatch routes to handlers which delegate to AppCore. Only
//! commands that touch the store bootstrap a `CliContext`.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use qatrack_cli::handlers::web::WebArgs;
use qatrack_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};
use qatrack_core::CoreConfig;

fn init_tracing(verbose: bool) {
    // Priority: RUST_LOG env var > -v > default (warn)
    let default = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .ok();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let core = CoreConfig::from_timeout_ms(cli.backend_timeout_ms);
    let caller = cli.caller.as_deref();

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Web {
            port,
            cors_origins,
            static_dir,
            api_only,
            in_memory,
        } => {
            handlers::web::execute(WebArgs {
                port,
                cors_origins,
                static_dir,
                api_only,
                in_memory,
                core,
            })
            .await?;
        }
        Commands::Paths => handlers::paths::execute()?,
        command => {
            let ctx = bootstrap(CliConfig::with_defaults()?.with_core(core)).await?;
            let result = match command {
                Commands::Users { command } => handlers::users::execute(&ctx, command).await,
                Commands::Tests { command } => {
                    handlers::test_cases::execute(&ctx, caller, command).await
                }
                Commands::Progress { command } => {
                    handlers::progress::execute(&ctx, caller, command).await
                }
                Commands::Cards { command } => handlers::cards::execute(&ctx, command).await,
                Commands::Web { .. } | Commands::Paths => Ok(()),
            };
            ctx.shutdown().await;
            result?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env before parsing so env-backed flags see it
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(code)
        }
    }
}
