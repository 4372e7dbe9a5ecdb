use catalog_viewer_core::ImageLibrary;
use catalog_viewer_server::{ServerState, start_server};
use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "catalog-viewer-server")]
#[command(about = "Serves image listings and image files for the catalog viewer")]
struct Args {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    bind: String,
    /// Port to listen on (0 picks a free port)
    #[arg(short, long, default_value = "8080")]
    port: u16,
    /// Directory whose sub-directories are the catalog entries
    #[arg(short, long, default_value = "images")]
    root: PathBuf,
    /// URL path prefix of listed and served images
    #[arg(long, default_value = "images")]
    url_prefix: String,
    /// JSON file served as the resource map (generated from the root when absent)
    #[arg(long)]
    resource_map: Option<PathBuf>,
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            // RUST_LOG overrides, e.g. RUST_LOG=catalog_viewer_server=debug
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog_viewer_core=info,catalog_viewer_server=info".into()),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let args = Args::parse();

    if !args.root.is_dir() {
        eprintln!("Image root {} is not a directory", args.root.display());
        std::process::exit(1);
    }

    let library = ImageLibrary::new(&args.root, args.url_prefix);
    let state = ServerState::new(library, args.resource_map);

    let listener = TcpListener::bind((args.bind.as_str(), args.port)).await?;
    let server = start_server(listener, state)?;
    info!(url = %server.url(), root = %args.root.display(), "Catalog server ready");

    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for Ctrl-C");
    }
    server.shutdown();
    server.wait_for_shutdown().await?;
    Ok(())
}
