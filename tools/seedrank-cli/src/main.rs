//! Seedrank CLI
//!
//! Ranks scraped torrent listings read from a file or stdin and prints
//! them best-first, either as a text report or as JSON.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use seedrank_core::{Listing, RankConfig, RankedListing, Ranker, Site, classify};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// CLI arguments
#[derive(Parser)]
#[command(name = "seedrank")]
#[command(about = "Classify and rank scraped torrent listings")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank listings given as a JSON array or one JSON object per line
    Rank {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Rank tab-separated table rows scraped from a known site
    Rows {
        /// Site whose row layout applies
        #[arg(short, long, env = "SEEDRANK_SITE", default_value = "rarbg")]
        site: String,

        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show the attributes derived from a release name and description
    Classify {
        /// Release name
        name: String,

        /// Free-text description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Uploader name, for the trusted flag
        #[arg(short, long, default_value = "")]
        uploader: String,

        #[arg(short, long, env = "SEEDRANK_FORMAT", value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

#[derive(clap::Args)]
struct InputArgs {
    /// Input file (defaults to stdin)
    #[arg(short, long)]
    input: Option<PathBuf>,
}

#[derive(clap::Args)]
struct OutputArgs {
    /// Output format
    #[arg(short, long, env = "SEEDRANK_FORMAT", value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Show only the best N listings
    #[arg(short = 'n', long, env = "SEEDRANK_LIMIT")]
    limit: Option<usize>,

    /// Drop listings with no seeders
    #[arg(long)]
    drop_dead: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::Rank { input, output } => {
            let text = read_input(&input)?;
            let listings = parse_listings(&text)?;
            info!("Read {} listings", listings.len());
            rank_and_print(listings, &output)
        }
        Commands::Rows {
            site,
            input,
            output,
        } => {
            let site = Site::from_name(&site)?;
            let text = read_input(&input)?;
            let listings = parse_rows(site, &text);
            info!("Read {} {} rows", listings.len(), site);
            rank_and_print(listings, &output)
        }
        Commands::Classify {
            name,
            description,
            uploader,
            format,
        } => {
            let attributes = classify(&name, &description).with_uploader(&uploader);
            match format {
                Format::Json => println!("{}", serde_json::to_string_pretty(&attributes)?),
                Format::Text => {
                    println!("Resolution : {}", attributes.resolution);
                    println!("Source     : {}", attributes.source);
                    println!("Video      : {}", attributes.video_codec);
                    println!("Audio      : {}", attributes.audio_codec);
                    println!("Container  : {}", attributes.container);
                    println!("Bit Depth  : {}", attributes.bit_depth);
                    println!("Trusted    : {}", attributes.trusted);
                }
            }
            Ok(())
        }
    }
}

fn read_input(args: &InputArgs) -> Result<String> {
    let mut text = String::new();
    match &args.input {
        Some(path) => {
            File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?
                .read_to_string(&mut text)
                .with_context(|| format!("Failed to read {}", path.display()))?;
        }
        None => {
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
        }
    }
    Ok(text)
}

/// Accepts either a JSON array or JSON lines.
fn parse_listings(text: &str) -> Result<Vec<Listing>> {
    if text.trim_start().starts_with('[') {
        return serde_json::from_str(text).context("Failed to parse listing array");
    }

    let mut listings = Vec::new();
    for (i, line) in BufReader::new(text.as_bytes()).lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let listing: Listing = serde_json::from_str(line)
            .with_context(|| format!("Failed to parse listing on line {}", i + 1))?;
        listings.push(listing);
    }
    Ok(listings)
}

/// One row per line, cells separated by tabs. Rows that do not fit the
/// site layout are skipped with a warning.
fn parse_rows(site: Site, text: &str) -> Vec<Listing> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .filter_map(|(i, line)| {
            let cells: Vec<&str> = line.split('\t').collect();
            match site.listing_from_cells(&cells) {
                Ok(listing) => Some(listing),
                Err(e) => {
                    warn!("Skipping line {}: {}", i + 1, e);
                    None
                }
            }
        })
        .collect()
}

fn rank_and_print(listings: Vec<Listing>, output: &OutputArgs) -> Result<()> {
    let mut config = RankConfig::new().with_dead(!output.drop_dead);
    if let Some(limit) = output.limit {
        config = config.with_limit(limit);
    }

    let ranked = Ranker::new(config)?.rank(listings);

    match output.format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&ranked)?),
        Format::Text => {
            if ranked.is_empty() {
                println!("No listings to rank.");
            }
            for entry in &ranked {
                print_entry(entry);
            }
        }
    }
    Ok(())
}

fn print_entry(entry: &RankedListing) {
    let listing = &entry.listing;
    println!("#{:<3} {:>14}  {}", entry.rank, entry.score.to_string(), listing.name);
    println!(
        "     {} | {} ({:.2} GB) | seeders {} / leechers {} | {}",
        entry.attributes,
        if listing.size.is_empty() { "?" } else { listing.size.as_str() },
        entry.size_gb,
        listing.seeders,
        listing.leechers,
        if listing.uploader.is_empty() { "-" } else { listing.uploader.as_str() },
    );
    let parts: Vec<String> = entry
        .score
        .breakdown()
        .iter()
        .map(|(label, value, max)| format!("{label} {value:.2}/{max}"))
        .collect();
    println!("     {}", parts.join("  "));
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_json_array_and_lines() {
        let array = r#"[{"name": "a", "seeders": 3}, {"name": "b"}]"#;
        let listings = parse_listings(array).unwrap();
        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].seeders, 3);

        let lines = "{\"name\": \"a\"}\n\n{\"name\": \"b\", \"size\": \"1 GB\"}\n";
        let listings = parse_listings(lines).unwrap();
        assert_eq!(listings.len(), 2);
        assert_eq!(listings[1].size, "1 GB");
    }

    #[test]
    fn bad_json_line_reports_line_number() {
        let err = parse_listings("{\"name\": \"a\"}\nnot json\n").unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn short_rows_are_skipped() {
        let text = "\tName.1080p\tMovies\t2024\t1 GB\t10\t2\tYTS\n\tbroken\n";
        let listings = parse_rows(Site::Rarbg, text);
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].uploader, "YTS");
    }
}
