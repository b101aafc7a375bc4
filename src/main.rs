//! Storefront footer service.
//!
//! # Architecture Overview
//!
//! ```text
//!     GET /footer ──▶ http::server ──▶ footer::renderer ──▶ resilience::with_deadline
//!                                           │                        │
//!                                           │                        ▼
//!                                           │               commerce::ShopifyMenuSource ──▶ Storefront API
//!                                           ▼
//!                                    footer::model (copyright, display name, links)
//!                                           │
//!     JSON RenderModel ◀────────────────────┘
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;

use storefront_footer::commerce::ShopifyMenuSource;
use storefront_footer::config::load_config;
use storefront_footer::observability::{logging, metrics};
use storefront_footer::{FooterRenderer, HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "storefront-footer")]
#[command(about = "Storefront footer renderer backed by the Shopify Storefront API", long_about = None)]
struct Cli {
    /// Path to a TOML config file. Defaults plus environment when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the footer model over HTTP
    Serve,
    /// Render the footer once and print it as JSON
    Render {
        /// Year to render the copyright range for (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    logging::init(&config.observability.log_level);

    let source = ShopifyMenuSource::new(&config.commerce);
    tracing::info!(
        endpoint = %source.endpoint(),
        menu_handle = %config.footer.menu_handle,
        fetch_timeout_ms = config.footer.fetch_timeout_ms,
        "Configuration loaded"
    );
    let renderer = FooterRenderer::new(config.footer.clone(), source);

    match cli.command {
        Commands::Render { year } => {
            let model = match year {
                Some(year) => renderer.render_for_year(year).await,
                None => renderer.render().await,
            };
            println!("{}", serde_json::to_string_pretty(&model)?);
        }
        Commands::Serve => {
            if config.observability.metrics_enabled {
                metrics::init_metrics(config.observability.metrics_address.parse()?);
            }

            let listener = TcpListener::bind(&config.listener.bind_address).await?;
            let shutdown = Shutdown::new();
            shutdown.trigger_on_ctrl_c();

            let server = HttpServer::new(&config.listener, renderer);
            server.run(listener, shutdown.subscribe()).await?;

            tracing::info!("Shutdown complete");
        }
    }

    Ok(())
}
