use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;
use std::io;

#[derive(Parser, Debug)]
#[command(name = "content-mcp")]
#[command(version)]
#[command(about = "An MCP server for a GraphQL content repository")]
#[command(long_about = "
content-mcp is an MCP (Model Context Protocol) server that exposes a content
repository to AI assistants: class metadata, search, documents, folders,
annotations and legal holds.

The repository connection is configured through environment variables:
  SERVER_URL, USERNAME, PASSWORD, OBJECT_STORE (required)
  SSL_ENABLED, REQUEST_TIMEOUT, MAX_RETRIES, RETRY_DELAY, LOG_LEVEL (optional)

Example usage:
  content-mcp serve     # Run as MCP server
  content-mcp doctor    # Check configuration and connectivity
  content-mcp completion bash > ~/.bashrc.d/content-mcp  # Generate bash completions
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run as MCP server over stdio
    #[command(long_about = "
Runs content-mcp as an MCP server on stdin/stdout. The server will:

- Read the repository configuration from the environment
- Expose the repository tools via the MCP protocol
- Load class metadata lazily and cache it for the life of the process

Logs are written to ~/.content-mcp/mcp.log (override the file name with
CONTENT_MCP_LOG_FILE) so stdout stays reserved for the protocol.

Example:
  content-mcp serve
")]
    Serve,
    /// Diagnose configuration and connectivity issues
    #[command(long_about = "
Runs diagnostics to help troubleshoot setup issues.
The doctor command will check:

- Required environment variables are set
- Optional settings parse to valid values
- The log directory is writable
- The repository answers a class metadata query

Exit codes:
  0 - All checks passed
  1 - Warnings found
  2 - Errors found

Example:
  content-mcp doctor
")]
    Doctor,
    /// Generate shell completion scripts
    #[command(long_about = "
Generates shell completion scripts for various shells.

Examples:
  # Bash (add to ~/.bashrc or ~/.bash_profile)
  content-mcp completion bash > ~/.local/share/bash-completion/completions/content-mcp

  # Zsh (add to ~/.zshrc or a file in fpath)
  content-mcp completion zsh > ~/.zfunc/_content-mcp

  # Fish
  content-mcp completion fish > ~/.config/fish/completions/content-mcp.fish
")]
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    #[allow(dead_code)]
    pub fn try_parse_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(args)
    }

    pub fn is_tty() -> bool {
        io::stdout().is_terminal()
    }

    pub fn should_use_color() -> bool {
        Self::is_tty() && std::env::var("NO_COLOR").is_err()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_help_works() {
        let result = Cli::try_parse_from_args(["content-mcp", "--help"]);
        assert!(result.is_err());

        let error = result.unwrap_err();
        assert_eq!(error.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_cli_version_works() {
        let result = Cli::try_parse_from_args(["content-mcp", "--version"]);
        assert!(result.is_err());

        let error = result.unwrap_err();
        assert_eq!(error.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_cli_no_subcommand() {
        let cli = Cli::try_parse_from_args(["content-mcp"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
        assert!(!cli.debug);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_cli_serve_subcommand() {
        let cli = Cli::try_parse_from_args(["content-mcp", "serve"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Serve)));
    }

    #[test]
    fn test_cli_doctor_subcommand() {
        let cli = Cli::try_parse_from_args(["content-mcp", "doctor"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Doctor)));
    }

    #[test]
    fn test_cli_global_flags() {
        let cli = Cli::try_parse_from_args(["content-mcp", "--debug", "--quiet", "doctor"]).unwrap();
        assert!(cli.debug);
        assert!(cli.quiet);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_completion_subcommand() {
        let cli = Cli::try_parse_from_args(["content-mcp", "completion", "zsh"]).unwrap();
        match cli.command {
            Some(Commands::Completion { shell }) => assert_eq!(shell, clap_complete::Shell::Zsh),
            other => panic!("expected completion, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_shell() {
        let result = Cli::try_parse_from_args(["content-mcp", "completion", "tcsh"]);
        assert!(result.is_err());
    }
}
