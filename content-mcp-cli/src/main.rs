use std::process;

use clap::CommandFactory;
use content_mcp_cli::cli::{Cli, Commands};
use content_mcp_cli::error::{handle_cli_result, CliError, CliResult};
use content_mcp_cli::exit_codes::{EXIT_ERROR, EXIT_SUCCESS, EXIT_WARNING};
use content_mcp_cli::{completions, doctor, logging};
use is_terminal::IsTerminal;

#[tokio::main]
async fn main() {
    let cli = Cli::parse_args();

    // Fast path for help - avoid initialization
    if cli.command.is_none() {
        let code = match Cli::command().print_help() {
            Ok(()) => EXIT_SUCCESS,
            Err(e) => {
                eprintln!("Failed to print help: {e}");
                EXIT_ERROR
            }
        };
        process::exit(code);
    }

    // stdout carries the protocol when a client drives `serve`
    let is_mcp_mode =
        matches!(cli.command, Some(Commands::Serve)) && !std::io::stdin().is_terminal();

    let log_level = std::env::var(content_mcp::config::LOG_LEVEL_VAR).unwrap_or_default();
    let directive = logging::filter_directive(cli.quiet, cli.debug, cli.verbose, &log_level);
    logging::init_logging(&directive, is_mcp_mode);

    let exit_code = match cli.command {
        Some(Commands::Serve) => {
            tracing::info!("Starting MCP server");
            handle_cli_result(run_server().await)
        }
        Some(Commands::Doctor) => {
            tracing::info!("Running diagnostics");
            run_doctor().await
        }
        Some(Commands::Completion { shell }) => {
            tracing::info!("Generating completion for {:?}", shell);
            run_completions(shell)
        }
        None => EXIT_SUCCESS,
    };

    process::exit(exit_code);
}

async fn run_server() -> CliResult<()> {
    use content_mcp::{McpServer, ServerConfig};
    use rmcp::serve_server;
    use rmcp::transport::io::stdio;
    use tokio_util::sync::CancellationToken;

    let config = ServerConfig::from_env()?;
    tracing::info!("Repository configuration: {:?}", config);
    let server = McpServer::from_config(&config)?;
    tracing::info!(
        "MCP server ready with {} tools",
        server.tool_registry().len()
    );

    let ct = CancellationToken::new();
    let ct_clone = ct.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => tracing::info!("Shutdown signal received"),
            Err(e) => tracing::warn!("Failed to listen for ctrl+c: {}", e),
        }
        ct_clone.cancel();
    });

    let running = serve_server(server, stdio())
        .await
        .map_err(|e| CliError::new(format!("MCP server error: {e}"), EXIT_WARNING))?;
    tracing::info!("MCP server started successfully");

    tokio::select! {
        quit = running.waiting() => match quit {
            Ok(reason) => tracing::info!("MCP server exited: {:?}", reason),
            Err(e) => return Err(CliError::from_error(e, EXIT_WARNING)),
        },
        _ = ct.cancelled() => tracing::info!("MCP server cancelled"),
    }

    Ok(())
}

async fn run_doctor() -> i32 {
    let mut doctor = doctor::Doctor::new();
    match doctor.run_diagnostics().await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            tracing::error!("Doctor error: {}", e);
            EXIT_ERROR
        }
    }
}

fn run_completions(shell: clap_complete::Shell) -> i32 {
    match completions::print_completion(shell) {
        Ok(_) => EXIT_SUCCESS,
        Err(e) => {
            tracing::error!("Completion error: {}", e);
            EXIT_WARNING
        }
    }
}
