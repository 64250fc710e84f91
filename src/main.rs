use clap::Parser;
use tracing::info;

mod config;
mod error;
mod extract;
mod fetch;
mod fields;
mod logging;
mod pipeline;
mod registry;
mod resolver;
mod sailor;
mod source;

use crate::config::Config;
use crate::pipeline::Pipeline;
use crate::sailor::Sailor;

#[derive(Parser)]
#[command(name = "regatta_scraper")]
#[command(about = "Scrapes regatta result pages into a deduplicated sailor ranking")]
#[command(version)]
struct Cli {
    /// Result page URLs to scrape; read from the config file when omitted
    urls: Vec<String>,

    /// TOML config file with a `sources` list
    #[arg(long, default_value = "config.toml")]
    config: String,
}

fn print_sailor(sailor: &Sailor) {
    println!(
        "#{:<3} {:>5} {:<30} {:1} {:>3} {:<30.30}",
        sailor.id,
        sailor.sailno,
        sailor.name,
        sailor.gender.unwrap_or(' '),
        sailor.age.unwrap_or_default(),
        sailor.club.as_deref().unwrap_or(""),
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let cli = Cli::parse();
    let urls = if cli.urls.is_empty() {
        Config::load(&cli.config)?.sources
    } else {
        cli.urls
    };

    let pipeline = Pipeline::new();
    for url in &urls {
        pipeline.add_source(url);
    }

    info!(sources = pipeline.source_count(), "starting pipeline");
    pipeline.run().await;

    let sailors = pipeline.sailors();
    println!("{} sailors", sailors.len());
    for sailor in sailors.snapshot() {
        print_sailor(&sailor);
    }

    Ok(())
}
