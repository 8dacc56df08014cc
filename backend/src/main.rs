//! fifacsv CLI - load, validate and store FIFA player datasets
//!
//! ```bash
//! fifacsv load players.csv           # Ranked active players as JSON
//! fifacsv load players.csv --year 2024 --extended -o out.json
//! fifacsv save upload.csv --name fifa23
//! fifacsv validate upload.csv        # Check the column contract
//! fifacsv list                       # Stored datasets
//! ```

use clap::{Parser, Subcommand};
use fifa_csv::{validate_fifa_csv, AppConfig, FeaturesPresenter};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fifacsv")]
#[command(about = "Load, validate and store FIFA player CSV datasets", long_about = None)]
struct Cli {
    /// Directory holding saved datasets (overrides FIFA_DATASETS_DIR)
    #[arg(long, global = true)]
    datasets_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a CSV, keep active players and print them ranked by overall
    Load {
        /// Input CSV file
        input: PathBuf,

        /// Keep contracts running until this year or later (default: current year)
        #[arg(short, long)]
        year: Option<i32>,

        /// Include the extended attributes
        #[arg(short, long)]
        extended: bool,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a CSV and store it in the datasets directory
    Save {
        /// Input CSV file
        input: PathBuf,

        /// Dataset name (default: input file stem)
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Check a CSV against the expected columns and types
    Validate {
        /// Input CSV file
        input: PathBuf,
    },

    /// List stored datasets
    List,
}

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let result = match build_config(cli.datasets_dir) {
        Ok(config) => match cli.command {
            Commands::Load {
                input,
                year,
                extended,
                output,
            } => cmd_load(config, input, year, extended, output.as_deref()).await,

            Commands::Save { input, name } => cmd_save(config, &input, name).await,

            Commands::Validate { input } => cmd_validate(&input),

            Commands::List => cmd_list(config),
        },
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn build_config(datasets_dir: Option<PathBuf>) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let mut config = AppConfig::from_env()?;
    if let Some(dir) = datasets_dir {
        config = config.with_datasets_dir(dir);
    }
    Ok(config)
}

async fn cmd_load(
    mut config: AppConfig,
    input: PathBuf,
    year: Option<i32>,
    extended: bool,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Loading: {}", input.display());

    if let Some(year) = year {
        config = config.with_reference_year(year);
    }
    let presenter = FeaturesPresenter::new(config);
    let records = presenter.load_csv_in_background(input, extended).await?;

    eprintln!("✅ {} active players", records.len());

    let json = serde_json::to_string_pretty(&records)?;
    write_output(&json, output)?;

    Ok(())
}

async fn cmd_save(
    config: AppConfig,
    input: &Path,
    name: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let name = match name {
        Some(n) => n,
        None => input
            .file_stem()
            .and_then(|s| s.to_str())
            .map(str::to_string)
            .ok_or_else(|| format!("Cannot derive a dataset name from {}", input.display()))?,
    };

    eprintln!("📥 Saving {} as '{}'", input.display(), name);
    let bytes = fs::read(input)?;

    let presenter = FeaturesPresenter::new(config);
    let path = presenter.save_csv_in_background(name, bytes).await?;

    eprintln!("✅ Saved");
    println!("{}", path.display());
    Ok(())
}

fn cmd_validate(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("✔️  Validating: {}", input.display());

    let bytes = fs::read(input)?;
    let report = validate_fifa_csv(&bytes);

    println!("{}", report.message);
    if !report.is_valid {
        std::process::exit(1);
    }

    Ok(())
}

fn cmd_list(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let presenter = FeaturesPresenter::new(config);
    let names = presenter.list_datasets()?;

    if names.is_empty() {
        eprintln!("📋 No datasets stored in {}", presenter.config().datasets_dir.display());
        eprintln!("   Use 'fifacsv save <file>' to add one.");
        return Ok(());
    }

    eprintln!("📋 Stored datasets ({}):\n", names.len());
    for name in names {
        println!("  📄 {}", name);
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
