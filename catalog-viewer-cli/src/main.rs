mod text;

use catalog_viewer_core::{
    CatalogViewer, FadeTransition, FetchFailurePolicy, ImageSource, MemorySurface,
    NavKind, NavState, PaginationControl, ViewFactory, ViewerConfig, ViewerError,
    compute_window, open_viewer, read_items_file,
};
use clap::{Parser, Subcommand};
use itertools::Itertools;
use std::path::PathBuf;
use text::TextViewFactory;
use tokio::io::{AsyncBufReadExt, BufReader};

type TextViewer = CatalogViewer<TextViewFactory, MemorySurface<String>, ImageSource, FadeTransition>;

#[derive(Parser)]
#[command(name = "catalog-viewer-cli")]
#[command(about = "Browse a paginated image catalog from the terminal")]
struct Cli {
    /// Viewer config file (JSON); defaults to the platform config location
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Image-resolution endpoint URL
    #[arg(long, global = true)]
    api: Option<String>,
    /// Resource map URL
    #[arg(long, global = true)]
    resource_map: Option<String>,
    /// Catalog JSON file with embedded or deferred items (used instead of the resource map)
    #[arg(long, global = true)]
    items: Option<PathBuf>,
    /// Items shown per page
    #[arg(long, global = true)]
    per_page: Option<usize>,
    /// What to do when an image list cannot be fetched: proceed, skip or abort
    #[arg(long, global = true)]
    fetch_failure: Option<FetchFailurePolicy>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Page through the catalog interactively
    Browse,
    /// Print a single page
    Page {
        /// Page number, starting at 1
        number: usize,
    },
    /// Show the pagination window for a position
    Window {
        #[arg(long)]
        current: usize,
        #[arg(long)]
        total: usize,
        #[arg(long, default_value = "2")]
        threshold: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BrowseCommand {
    Turn(NavKind),
    Goto(usize),
    Show,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Option<BrowseCommand> {
    let line = line.trim();
    if let Ok(page) = line.parse::<usize>() {
        return Some(BrowseCommand::Goto(page));
    }
    match line.to_lowercase().as_str() {
        "n" | "next" | ">" => Some(BrowseCommand::Turn(NavKind::Next)),
        "p" | "prev" | "<" => Some(BrowseCommand::Turn(NavKind::Prev)),
        "f" | "first" => Some(BrowseCommand::Turn(NavKind::First)),
        "l" | "last" => Some(BrowseCommand::Turn(NavKind::Last)),
        "" | "s" | "show" => Some(BrowseCommand::Show),
        "h" | "help" | "?" => Some(BrowseCommand::Help),
        "q" | "quit" | "exit" => Some(BrowseCommand::Quit),
        _ => None,
    }
}

fn load_config(cli: &Cli) -> Result<ViewerConfig, ViewerError> {
    let mut config = ViewerConfig::load_or_default(cli.config.as_deref())?;
    if let Some(api) = &cli.api {
        config.api = Some(api.clone());
    }
    if let Some(resource_map) = &cli.resource_map {
        config.resource_map = Some(resource_map.clone());
    }
    if let Some(per_page) = cli.per_page {
        config.items_per_page = per_page;
    }
    if let Some(policy) = cli.fetch_failure {
        config.fetch_failure = policy;
    }
    config.validate()?;
    Ok(config)
}

async fn open(cli: &Cli, config: &ViewerConfig) -> Result<TextViewer, ViewerError> {
    let embedded = match &cli.items {
        Some(path) => Some(read_items_file(path)?),
        None => None,
    };
    let viewer = open_viewer(config, embedded, TextViewFactory, MemorySurface::new()).await?;
    Ok(viewer.with_lightbox(|selector: &str| {
        log::debug!("Lightbox attached to {}", selector);
        Ok::<(), ViewerError>(())
    }))
}

async fn print_page(viewer: &TextViewer) {
    let state = viewer.state().await;
    let output = viewer
        .with_surface(|surface| {
            let items = surface.items().join("\n\n");
            let pagination = surface.pagination().cloned().unwrap_or_default();
            format!("{}\n\n{}", items, pagination)
        })
        .await;
    println!("--- page {}/{} ---", state.current_page, state.total_pages);
    println!("{}", output);
}

fn print_help() {
    println!("Commands: n(ext), p(rev), f(irst), l(ast), <page number>, s(how), q(uit)");
}

async fn browse(viewer: &TextViewer) -> Result<(), ViewerError> {
    viewer.launch().await?;
    print_page(viewer).await;
    print_help();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_command(&line) {
            Some(BrowseCommand::Turn(kind)) => {
                if viewer.navigate(kind).await? {
                    print_page(viewer).await;
                } else {
                    println!("'{}' is not available on this page", kind.label());
                }
            }
            Some(BrowseCommand::Goto(page)) => match viewer.goto(page).await {
                Ok(()) => print_page(viewer).await,
                Err(e @ ViewerError::PageOutOfRange { .. }) => println!("{}", e),
                Err(e) => return Err(e),
            },
            Some(BrowseCommand::Show) => print_page(viewer).await,
            Some(BrowseCommand::Help) => print_help(),
            Some(BrowseCommand::Quit) => break,
            None => {
                println!("Unknown command '{}'", line.trim());
                print_help();
            }
        }
    }
    Ok(())
}

fn print_window(current: usize, total: usize, threshold: usize) {
    let window = compute_window(current, total, threshold);
    let disabled = NavKind::all()
        .into_iter()
        .filter(|kind| window.disabled.get(*kind))
        .map(|kind| kind.label())
        .join(", ");

    println!("Window: {}..={} ({} pages)", window.start, window.end, window.width());
    if disabled.is_empty() {
        println!("Disabled: none");
    } else {
        println!("Disabled: {}", disabled);
    }

    let mut state = NavState::new(total);
    state.go_to_page(current.clamp(1, state.total_pages));
    let control = PaginationControl::build(&state, threshold);
    println!("{}", TextViewFactory.pagination(&control));
}

async fn run(cli: Cli) -> Result<(), ViewerError> {
    if let Commands::Window {
        current,
        total,
        threshold,
    } = cli.command
    {
        print_window(current, total, threshold);
        return Ok(());
    }

    let config = load_config(&cli)?;
    let viewer = open(&cli, &config).await?;
    println!(
        "Catalog has {} item(s) on {} page(s)",
        viewer.chunks().iter().map(|c| c.items.len()).sum::<usize>(),
        viewer.total_pages()
    );

    match cli.command {
        Commands::Browse => browse(&viewer).await,
        Commands::Page { number } => {
            if number == 0 || number > viewer.total_pages() {
                return Err(ViewerError::PageOutOfRange {
                    requested: number,
                    total_pages: viewer.total_pages(),
                });
            }
            viewer.launch().await?;
            if number != 1 {
                viewer.goto(number).await?;
            }
            print_page(&viewer).await;
            Ok(())
        }
        Commands::Window { .. } => Ok(()),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
    Ok(())
}
