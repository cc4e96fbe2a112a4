//! Listings CLI - load and query the permit-request sheet
//!
//! # Main Commands
//!
//! ```bash
//! listings fetch                         # Load the sheet, print records as JSON
//! listings search --usage מגורים         # Filter by usage / area / free text
//! listings types                         # Usage categories in the data
//! listings show 2012212                  # One record
//! ```
//!
//! # Debug Commands (for development)
//!
//! ```bash
//! listings parse export.csv              # Map a local export, no fallback
//! listings columns                       # Print the column layout
//! ```
//!
//! Every loading command accepts `--url` or `--file`, and `--strict` to fail
//! instead of serving the sample records.

use clap::{Args, Parser, Subcommand};
use listings::{
    filter_records, find_record, ingest, ingest_text, logs, usage_categories, Config,
    DataOrigin, FallbackPolicy, FileSource, FilterCriteria, HttpSource, Ingested, COLUMN_LAYOUT,
};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "listings")]
#[command(about = "Load and query the building permit requests sheet", long_about = None)]
struct Cli {
    /// Show debug logs
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Where to load the sheet from.
#[derive(Args)]
struct SourceArgs {
    /// Sheet CSV URL (default: LISTINGS_SHEET_URL or the published sheet)
    #[arg(long, conflicts_with = "file")]
    url: Option<String>,

    /// Local CSV export instead of the network
    #[arg(long)]
    file: Option<PathBuf>,

    /// Fail instead of falling back to sample records
    #[arg(long)]
    strict: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the sheet and print all mappable records
    Fetch {
        #[command(flatten)]
        source: SourceArgs,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Filter records by usage, area and free text
    Search {
        #[command(flatten)]
        source: SourceArgs,

        /// Exact usage category
        #[arg(long)]
        usage: Option<String>,

        /// Minimum main area (m²)
        #[arg(long, default_value = "0")]
        min_area: f64,

        /// Maximum main area (m²), unbounded if omitted
        #[arg(long)]
        max_area: Option<f64>,

        /// Text matched against address, usage and description
        #[arg(short, long, default_value = "")]
        query: String,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List usage categories present in the data
    Types {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Show one record by id
    Show {
        /// Record id
        id: String,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Parse a local CSV export and output the mapped records
    Parse {
        /// Input CSV file
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the column layout
    Columns,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logs::init(cli.verbose);

    let result = match cli.command {
        Commands::Fetch { source, output } => cmd_fetch(&source, output.as_deref()).await,

        Commands::Search {
            source,
            usage,
            min_area,
            max_area,
            query,
            output,
        } => {
            let criteria = FilterCriteria::default()
                .with_usage(usage.unwrap_or_default())
                .with_area(min_area, max_area);
            cmd_search(&source, &criteria, &query, output.as_deref()).await
        }

        Commands::Types { source } => cmd_types(&source).await,

        Commands::Show { id, source } => cmd_show(&source, &id).await,

        Commands::Parse { input, output } => cmd_parse(&input, output.as_deref()),

        Commands::Columns => cmd_columns(),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

/// Run one ingestion cycle for the chosen source.
async fn load(args: &SourceArgs) -> Result<Ingested, Box<dyn std::error::Error>> {
    // Also loads .env
    let mut config = Config::from_env()?;
    if let Some(url) = &args.url {
        config = config.with_sheet_url(url.clone());
    }
    if args.strict {
        config = config.with_policy(FallbackPolicy::Fail);
    }

    let ingested = match &args.file {
        Some(path) => ingest(&FileSource::new(path), config.policy).await?,
        None => ingest(&HttpSource::from_config(&config)?, config.policy).await?,
    };

    match &ingested.origin {
        DataOrigin::Live => logs::success(format!("{} listings loaded", ingested.records.len())),
        DataOrigin::Fallback { reason, version } => {
            logs::warning(format!(
                "Showing {} sample listings (sample set v{})",
                ingested.records.len(),
                version
            ));
            logs::detail(format!("Reason: {}", reason));
        }
    }
    if ingested.dropped > 0 {
        logs::detail(format!("{} rows without coordinates skipped", ingested.dropped));
    }

    Ok(ingested)
}

async fn cmd_fetch(source: &SourceArgs, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let ingested = load(source).await?;

    let json = serde_json::to_string_pretty(&ingested.records)?;
    write_output(&json, output)?;

    Ok(())
}

async fn cmd_search(
    source: &SourceArgs,
    criteria: &FilterCriteria,
    query: &str,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let ingested = load(source).await?;

    let visible = filter_records(&ingested.records, criteria, query);
    eprintln!("🔍 {} of {} listings match", visible.len(), ingested.records.len());

    let json = serde_json::to_string_pretty(&visible)?;
    write_output(&json, output)?;

    Ok(())
}

async fn cmd_types(source: &SourceArgs) -> Result<(), Box<dyn std::error::Error>> {
    let ingested = load(source).await?;
    let categories = usage_categories(&ingested.records);

    if categories.is_empty() {
        eprintln!("📋 No usage categories in the data.");
        return Ok(());
    }

    eprintln!("📋 Usage categories ({}):\n", categories.len());
    for category in categories {
        let count = ingested
            .records
            .iter()
            .filter(|r| r.main_usage == category)
            .count();
        println!("  {} ({})", category, count);
    }

    Ok(())
}

async fn cmd_show(source: &SourceArgs, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let ingested = load(source).await?;

    let record = find_record(&ingested.records, id)
        .ok_or_else(|| format!("Listing not found: {}", id))?;

    println!("🏠 {} ({})\n", record.address, record.id);
    println!("Usage: {}", record.main_usage);
    println!("Main area: {} m²", listings::format_number(record.main_area));
    if let Some(units) = record.units_summary() {
        println!("Units: {}", units);
    }
    if !record.block_parcel().is_empty() {
        println!("Block/parcel: {}", record.block_parcel());
    }
    if !record.event.is_empty() {
        println!("Event: {} {}", record.event, record.event_date_label());
    }
    println!("Map: {}", record.google_maps_url());
    println!("\nRecord:");
    println!("{}", serde_json::to_string_pretty(record)?);

    Ok(())
}

fn cmd_parse(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Parsing CSV: {}", input.display());

    let bytes = fs::read(input)?;
    eprintln!("   Encoding: {}", listings::detect_encoding(&bytes));

    let text = listings::decode_content(&bytes)?;
    let ingested = ingest_text(&text)?;

    eprintln!("   Rows: {}", ingested.rows_read);
    eprintln!("   Without coordinates: {}", ingested.dropped);
    eprintln!("✅ Mapped {} records", ingested.records.len());

    let json = serde_json::to_string_pretty(&ingested.records)?;
    write_output(&json, output)?;

    Ok(())
}

fn cmd_columns() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(&COLUMN_LAYOUT[..])?);
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
