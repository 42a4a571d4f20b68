//! Reviews CLI - scrape reviews and publish them to WordPress
//!
//! # Main Commands
//!
//! ```bash
//! reviews serve                          # Start HTTP server (port 5000)
//! reviews scrape --output reviews.json   # Scrape once, write JSON
//! reviews upload reviews.json            # Publish a review file
//! ```
//!
//! # Maintenance Commands
//!
//! ```bash
//! reviews merge-titles reviews.json titles.json -o merged.json
//! reviews archive list                   # Stored scrape snapshots
//! reviews archive show <id>
//! ```

use clap::{Parser, Subcommand};
use reviews::{
    merge_title_files, ParseOptions, Review, ReviewArchive, Scraper, Settings, WordPressClient,
};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "reviews")]
#[command(about = "Scrape business reviews and publish them to WordPress", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start HTTP server
    Serve {
        /// Port to listen on (default: REVIEWS_PORT or 5000)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Scrape a review page once
    Scrape {
        /// Page to scrape (default: REVIEWS_SOURCE_URL)
        #[arg(short, long)]
        url: Option<String>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Minimum star rating to keep (default: REVIEWS_MIN_RATING or 5.0)
        #[arg(long)]
        min_rating: Option<f64>,

        /// Don't write a snapshot to the archive
        #[arg(long)]
        no_archive: bool,
    },

    /// Replace titles using a {reviews: [{reviewer, title}]} file
    MergeTitles {
        /// Scraped reviews JSON file
        reviews: PathBuf,
        /// Titles JSON file
        titles: PathBuf,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Publish a review JSON file to WordPress
    Upload {
        /// Reviews JSON file (array of reviews)
        input: PathBuf,
    },

    /// Inspect stored scrape snapshots
    Archive {
        #[command(subcommand)]
        action: ArchiveAction,
    },
}

#[derive(Subcommand)]
enum ArchiveAction {
    /// List snapshots, newest first
    List,

    /// Print the reviews of a snapshot
    Show {
        /// Snapshot ID
        id: String,
    },

    /// Print the reviews of the newest snapshot
    Latest,

    /// Delete a snapshot
    Delete {
        /// Snapshot ID
        id: String,
    },
}

#[tokio::main]
async fn main() {
    let settings = Settings::from_env();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve { port } => cmd_serve(settings, port).await,

        Commands::Scrape {
            url,
            output,
            min_rating,
            no_archive,
        } => {
            cmd_scrape(
                &settings,
                url.as_deref(),
                output.as_deref(),
                min_rating,
                no_archive,
            )
            .await
        }

        Commands::MergeTitles {
            reviews,
            titles,
            output,
        } => cmd_merge_titles(&reviews, &titles, output.as_deref()),

        Commands::Upload { input } => cmd_upload(&settings, &input).await,

        Commands::Archive { action } => cmd_archive(&settings, action),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

async fn cmd_serve(mut settings: Settings, port: Option<u16>) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(port) = port {
        settings.port = port;
    }
    reviews::server::start_server(settings).await?;
    Ok(())
}

async fn cmd_scrape(
    settings: &Settings,
    url: Option<&str>,
    output: Option<&Path>,
    min_rating: Option<f64>,
    no_archive: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let url = url.unwrap_or(&settings.source_url);
    let options = ParseOptions::new(min_rating.unwrap_or(settings.min_rating));

    let reviews = Scraper::new(options).scrape(url).await?;

    if !no_archive {
        let mut archive = ReviewArchive::with_dir(&settings.archive_dir);
        let id = archive.save(url, &reviews)?;
        eprintln!("🗄️  Archived as {}", id);
    }

    let json = serde_json::to_string_pretty(&reviews)?;
    write_output(&json, output)?;

    Ok(())
}

fn cmd_merge_titles(
    reviews_path: &Path,
    titles_path: &Path,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📝 Merging titles from {}", titles_path.display());

    let (merged, changed) = merge_title_files(reviews_path, titles_path)?;
    eprintln!("   {} of {} reviews retitled", changed, merged.len());

    let json = serde_json::to_string_pretty(&merged)?;
    write_output(&json, output)?;

    Ok(())
}

async fn cmd_upload(settings: &Settings, input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let content = fs::read_to_string(input)?;
    let reviews: Vec<Review> = serde_json::from_str(&content)?;

    let client = WordPressClient::from_settings(settings)?;
    let uploaded = client.upload_reviews(&reviews).await?;

    eprintln!("✨ Uploaded {} reviews", uploaded);
    Ok(())
}

fn cmd_archive(settings: &Settings, action: ArchiveAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut archive = ReviewArchive::with_dir(&settings.archive_dir);

    match action {
        ArchiveAction::List => {
            let snapshots = archive.list();
            if snapshots.is_empty() {
                eprintln!("📋 No snapshots in {}", archive.dir().display());
                return Ok(());
            }

            eprintln!("📋 Stored snapshots ({}):\n", snapshots.len());
            for s in snapshots {
                println!("  📄 {}", s.id);
                println!("     Source: {}", s.source);
                println!("     Created: {}", s.created_at);
                println!("     Reviews: {}", s.reviews.len());
                println!();
            }
        }

        ArchiveAction::Show { id } => {
            let snapshot = archive
                .get(&id)
                .ok_or_else(|| format!("Snapshot not found: {}", id))?;
            println!("{}", serde_json::to_string_pretty(&snapshot.reviews)?);
        }

        ArchiveAction::Latest => {
            let snapshot = archive.latest().ok_or("No snapshots stored yet")?;
            eprintln!("📄 {} ({})", snapshot.id, snapshot.created_at);
            println!("{}", serde_json::to_string_pretty(&snapshot.reviews)?);
        }

        ArchiveAction::Delete { id } => {
            archive.delete(&id)?;
            eprintln!("🗑️  Snapshot deleted: {}", id);
        }
    }

    Ok(())
}

fn write_output(content: &str, path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            eprintln!("💾 Output written to: {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
