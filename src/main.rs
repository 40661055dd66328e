use anyhow::Result;
use clap::{Parser, Subcommand};
use devgraph::config::ServerConfig;
use devgraph::graphql::build_schema;
use devgraph::server;
use devgraph::store::EntityStore;
use std::sync::Arc;
use tracing::info;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(author, version, about)]
struct Cli {
    #[clap(short, long, global = true)]
    log_level: Option<String>,
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the GraphQL server
    Serve {
        /// YAML config file; flags below override its values
        #[clap(short, long)]
        config: Option<String>,
        #[clap(long)]
        host: Option<String>,
        #[clap(short, long)]
        port: Option<u16>,
        #[clap(long)]
        cors_origin: Option<String>,
        /// Start with empty developer and project lists
        #[clap(long)]
        no_seed: bool,
        /// Do not serve GraphiQL on GET /graphql
        #[clap(long)]
        no_graphiql: bool,
    },
    /// Print the GraphQL schema in SDL form
    Schema,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    setup_logging(&args.log_level);

    match args.command {
        Commands::Serve {
            config,
            host,
            port,
            cors_origin,
            no_seed,
            no_graphiql,
        } => {
            let mut server_config = match config {
                Some(path) => {
                    info!("Loading config from {}", path);
                    ServerConfig::load(&path)?
                }
                None => ServerConfig::default(),
            };
            if let Some(host) = host {
                server_config.host = host;
            }
            if let Some(port) = port {
                server_config.port = port;
            }
            if cors_origin.is_some() {
                server_config.cors_origin = cors_origin;
            }
            if no_seed {
                server_config.seed = false;
            }
            if no_graphiql {
                server_config.graphiql = false;
            }

            info!("Starting server on port {}", server_config.port);
            server::start_server(server_config).await?;
        }
        Commands::Schema => {
            let schema = build_schema(Arc::new(EntityStore::new()));
            println!("{}", schema.sdl());
        }
    }

    Ok(())
}

fn setup_logging(log_level: &Option<String>) {
    let log_level = match log_level
        .as_ref()
        .unwrap_or(&"info".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level.to_string()))
        .without_time()
        .init();
}
