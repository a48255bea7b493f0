//! Toolwire MCP Server — entry point.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use toolwire_mcp::config::ServerConfig;
use toolwire_mcp::protocol::ProtocolHandler;
use toolwire_mcp::tools::{shared_store, ToolRegistry};
use toolwire_mcp::transport::StdioTransport;
use toolwire_mcp::types::SUPPORTED_PROTOCOL_VERSIONS;

#[derive(Parser)]
#[command(
    name = "toolwire-mcp",
    about = "MCP server for Toolwire — typed tools over line-delimited JSON-RPC on stdio",
    version
)]
struct Cli {
    /// Server name advertised during the handshake.
    /// Also reads from TOOLWIRE_SERVER_NAME env var.
    #[arg(long)]
    name: Option<String>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start MCP server over stdio (default).
    Serve,

    /// Print server info and tools as JSON.
    Info,

    /// Generate shell completion scripts.
    ///
    /// Examples:
    ///   toolwire-mcp completions bash > ~/.local/share/bash-completion/completions/toolwire-mcp
    ///   toolwire-mcp completions zsh > ~/.zfunc/_toolwire-mcp
    Completions {
        /// Shell type (bash, zsh, fish, powershell, elvish).
        shell: Shell,
    },

    /// Launch interactive REPL mode.
    Repl,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    // stdout carries protocol bytes only.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = ServerConfig::resolve(cli.name.as_deref());

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            let registry = ToolRegistry::builtin(shared_store(), config.server_info())?;
            tracing::info!(
                "{} v{} serving {} tools",
                config.name,
                config.version,
                registry.len()
            );
            let handler = ProtocolHandler::new(registry, config);
            let mut transport = StdioTransport::new(handler);
            transport.run().await?;
        }

        Commands::Info => {
            let registry = ToolRegistry::builtin(shared_store(), config.server_info())?;
            let info = serde_json::json!({
                "server": config.server_info(),
                "protocol_versions": SUPPORTED_PROTOCOL_VERSIONS,
                "tools": registry.list().map(|t| &t.name).collect::<Vec<_>>(),
                "tool_count": registry.len(),
            });
            println!("{}", serde_json::to_string_pretty(&info)?);
        }

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "toolwire-mcp", &mut std::io::stdout());
        }

        Commands::Repl => {
            toolwire_mcp::repl::run(config)?;
        }
    }

    Ok(())
}
