use std::sync::Arc;

use clap::Parser;
use depin_dashboard::presenter::{
    client::{Dashboard, PricesClient},
    render::Renderer,
    state::Tab,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const PROMPT: &str = "tabs: overview | tokens | networks | quit";

/// Terminal view of the DePIN dashboard.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// URL of the prices endpoint served by `depin-dashboard`.
    #[arg(long, default_value = "http://127.0.0.1:3000/api/prices")]
    endpoint: String,

    /// Tab shown first: overview, tokens or networks.
    #[arg(long, default_value = "overview")]
    tab: Tab,

    /// Print the first tab once the data has settled, then exit.
    #[arg(long)]
    once: bool,

    /// Colorize output with 24-bit ANSI escapes.
    #[arg(long)]
    color: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,depin_dashboard=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let renderer = if args.color {
        Renderer::with_color()
    } else {
        Renderer::plain()
    };

    let client = PricesClient::new(args.endpoint);
    tracing::info!("Loading dashboard from {}", client.endpoint());

    let mut dashboard = Dashboard::mount(Arc::new(client));
    dashboard.select_tab(args.tab).await;

    if !args.once {
        println!("{}\n", renderer.render(&*dashboard.view().await));
    }

    dashboard.settled().await;
    println!("{}", renderer.render(&*dashboard.view().await));

    if args.once {
        return Ok(());
    }

    println!("\n{}", PROMPT);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = line.trim();
        if command.is_empty() {
            continue;
        }
        if matches!(command, "q" | "quit" | "exit") {
            break;
        }

        match command.parse::<Tab>() {
            Ok(tab) => {
                dashboard.select_tab(tab).await;
                println!("{}\n\n{}", renderer.render(&*dashboard.view().await), PROMPT);
            }
            Err(_) => eprintln!("unknown command '{}'; {}", command, PROMPT),
        }
    }

    Ok(())
}
