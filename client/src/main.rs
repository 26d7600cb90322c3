// File: client/src/main.rs
use agent_client::{Agent, AgentClient, ConfigManager, ResourceItem};
use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, Parser)]
#[command(name = "agent-client", version, about = "Send requests to a transfer agent")]
struct Cli {
    /// TOML file with agent settings; AGENT_ADDRESS is used when absent
    #[arg(long, global = true)]
    config: Option<String>,

    /// Agent base address, overrides config and environment
    #[arg(long, global = true)]
    agent_address: Option<String>,

    /// Per-request deadline in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Register the local public key with a remote host
    ExchangeKeys {
        host: String,
        port: String,
        #[arg(long, env = "AGENT_SECRET", hide_env_values = true)]
        secret: String,
    },
    /// Query the agent version for a host
    Version { host: String, port: String },
    /// Fetch a resource from a host
    Resource {
        host: String,
        port: String,
        url: String,
        /// Decode the embedded listing instead of printing the raw payload
        #[arg(long)]
        listing: bool,
    },
    /// Start copying items to a host
    Copy {
        host: String,
        port: String,
        archive: String,
        /// SOURCE=DESTINATION pairs, copied in order
        #[arg(required = true, value_parser = parse_item)]
        items: Vec<(String, String)>,
        #[arg(long)]
        overwrite: bool,
        #[arg(long)]
        rename: bool,
    },
    /// Cancel a running transfer
    Cancel { transfer_id: String },
}

fn parse_item(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((source, destination)) if !source.is_empty() && !destination.is_empty() => {
            Ok((source.to_string(), destination.to_string()))
        }
        _ => Err(format!("expected SOURCE=DESTINATION, got '{}'", raw)),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays machine-readable
    let env_filter = EnvFilter::from_default_env()
        .add_directive("agent_client=info".parse()?)
        .add_directive("hyper=warn".parse()?)
        .add_directive("reqwest=warn".parse()?);

    fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config_manager = ConfigManager::new(cli.config.clone()).await?;
    let mut config = (*config_manager.get_current_config()).clone();
    if let Some(address) = cli.agent_address {
        config.agent_address = address;
    }
    if let Some(timeout) = cli.timeout {
        config.request_timeout_seconds = Some(timeout);
    }

    match cli.command {
        Command::ExchangeKeys { host, port, secret } => {
            let client = AgentClient::new(&config, Agent::new(&host, &port))?;
            client.exchange_keys(&host, &port, &secret).await?;
            info!("Public key registered with {}:{}", host, port);
        }
        Command::Version { host, port } => {
            let client = AgentClient::new(&config, Agent::new(host, port))?;
            let version = client.get_version().await;
            print_json(&version)?;
            if let Some(err) = version.error {
                return Err(anyhow!("version probe failed: {}", err));
            }
        }
        Command::Resource {
            host,
            port,
            url,
            listing,
        } => {
            let client = AgentClient::new(&config, Agent::new(&host, &port))?;
            let response = client.get_resource(&host, &port, &url).await?;
            if let Some(err) = &response.error {
                error!("Agent reported error for {}: {}", url, err);
            }
            if listing {
                let listing = response
                    .listing()
                    .map_err(|e| anyhow!("Failed to decode resource listing: {}", e))?;
                print_json(&listing)?;
            } else {
                print_json(&response)?;
            }
        }
        Command::Copy {
            host,
            port,
            archive,
            items,
            overwrite,
            rename,
        } => {
            let client = AgentClient::new(&config, Agent::new(&host, &port))?;
            let items = ResourceItem::batch(items, overwrite, rename);
            match client.remote_copy(&host, &port, &archive, &items).await {
                Ok(result) => print_json(&result)?,
                Err(e) => return Err(anyhow!("copy failed with status {}: {}", e.status_code(), e)),
            }
        }
        Command::Cancel { transfer_id } => {
            let client = AgentClient::new(&config, Agent::default())?;
            match client.cancel_transfer(&transfer_id).await {
                Ok(status) => info!("Transfer {} cancelled (status {})", transfer_id, status),
                Err(e) => return Err(anyhow!("cancel failed with status {}: {}", e.status_code(), e)),
            }
        }
    }

    Ok(())
}
