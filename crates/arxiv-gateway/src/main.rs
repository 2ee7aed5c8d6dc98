//! arXiv Query Gateway - Entry Point

use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use arxiv_gateway::{ArxivClient, config::Config, config::api, server::GatewayServer};

#[derive(Parser, Debug)]
#[command(name = "arxiv-gateway")]
#[command(about = "HTTP gateway for arXiv search, abstracts and full text")]
#[command(version)]
struct Cli {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0", env = "HOST")]
    host: IpAddr,

    /// HTTP server port
    #[arg(long, default_value_t = api::DEFAULT_PORT, env = "PORT")]
    port: u16,

    /// arXiv query endpoint
    #[arg(long, env = "ARXIV_API_URL")]
    api_url: Option<String>,

    /// Base URL PDFs are downloaded from
    #[arg(long, env = "ARXIV_PDF_BASE_URL")]
    pdf_base_url: Option<String>,

    /// Outbound request timeout in seconds
    #[arg(long)]
    request_timeout_secs: Option<u64>,

    /// Largest PDF /full will download, in bytes
    #[arg(long, env = "MAX_PDF_BYTES")]
    max_pdf_bytes: Option<u64>,

    /// Directory served under /static
    #[arg(long, env = "STATIC_DIR")]
    static_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

impl Cli {
    fn config(&self) -> Config {
        let mut config = Config::new();
        if let Some(url) = &self.api_url {
            config.api_url.clone_from(url);
        }
        if let Some(url) = &self.pdf_base_url {
            config.pdf_base_url.clone_from(url);
        }
        if let Some(secs) = self.request_timeout_secs {
            config.request_timeout = Duration::from_secs(secs);
        }
        if let Some(limit) = self.max_pdf_bytes {
            config.max_pdf_bytes = limit;
        }
        if let Some(dir) = &self.static_dir {
            config.static_dir.clone_from(dir);
        }
        config
    }
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer().compact()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    let config = cli.config();
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        api_url = %config.api_url,
        max_pdf_bytes = config.max_pdf_bytes,
        "Starting arXiv gateway"
    );

    let static_dir = config.static_dir.clone();
    let client = ArxivClient::new(config)?;
    let server = GatewayServer::new(client, static_dir);

    server.run(cli.host, cli.port).await
}
