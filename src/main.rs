use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use dotenvy::dotenv;

use ecom_synth::config::{DEFAULT_SEED, GenerationConfig, PaymentPolicy};
use ecom_synth::db::open_store;
use ecom_synth::files::DatasetFiles;
use ecom_synth::repository::DieselRepository;
use ecom_synth::repository::errors::RepositoryError;
use ecom_synth::services::generate::generate;
use ecom_synth::services::load::load_files;
use ecom_synth::services::payments::generate_payments;
use ecom_synth::services::reports::{ReportFormat, ReportKind, render_report, run_report};
use ecom_synth::services::{ServiceError, ServiceResult};

#[derive(Parser)]
#[command(name = "ecom-synth")]
#[command(about = "Generate a synthetic e-commerce dataset, load it into SQLite and report on it")]
#[command(long_about = None)]
struct Cli {
    /// Directory holding the CSV files
    #[arg(long, env = "ECOM_DATA_DIR", default_value = "data", global = true)]
    data_dir: PathBuf,

    /// SQLite store file
    #[arg(long, env = "DATABASE_URL", default_value = "ecom.db", global = true)]
    database_url: PathBuf,

    /// Seed of every random generator
    #[arg(long, env = "ECOM_SEED", default_value_t = DEFAULT_SEED, global = true)]
    seed: u64,

    /// Anchor date for every generated date range (YYYY-MM-DD)
    #[arg(long, env = "ECOM_AS_OF", default_value = "2025-06-30", global = true)]
    as_of: NaiveDate,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate categories, products, customers and orders
    Generate(GenerateArgs),
    /// Generate payments for the orders on disk and refresh the store's payments
    Payments(PaymentArgs),
    /// Rebuild the store from the CSV files
    Load,
    /// Run a report against the loaded store
    Report {
        #[arg(value_enum, default_value_t = ReportKind::default())]
        kind: ReportKind,

        #[arg(long, value_enum, default_value_t = ReportFormat::default())]
        format: ReportFormat,

        /// Maximum number of rows for ranked reports
        #[arg(long)]
        limit: Option<usize>,
    },
}

#[derive(Args)]
struct GenerateArgs {
    #[arg(long, default_value_t = 15)]
    categories: usize,
    #[arg(long, default_value_t = 200)]
    products: usize,
    #[arg(long, default_value_t = 500)]
    customers: usize,
    #[arg(long, default_value_t = 1000)]
    orders: usize,
    #[arg(long, default_value_t = 1)]
    min_order_items: usize,
    #[arg(long, default_value_t = 5)]
    max_order_items: usize,
}

#[derive(Args)]
struct PaymentArgs {
    /// Share of orders paid after failed attempts
    #[arg(long, default_value_t = 0.05)]
    retry_rate: f64,
    /// Upper bound of attempts for a retried order
    #[arg(long, default_value_t = 2)]
    max_attempts: u32,
}

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        log::error!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> ServiceResult<()> {
    let files = DatasetFiles::new(&cli.data_dir);

    match cli.command {
        Commands::Generate(args) => {
            let config = GenerationConfig {
                seed: cli.seed,
                as_of: cli.as_of,
                categories: args.categories,
                products: args.products,
                customers: args.customers,
                orders: args.orders,
                min_order_items: args.min_order_items,
                max_order_items: args.max_order_items,
            };
            generate(config, &files)?;
        }
        Commands::Payments(args) => {
            let policy = PaymentPolicy {
                seed: cli.seed,
                retry_rate: args.retry_rate,
                max_attempts: args.max_attempts,
            };
            let repo = match open_store(&cli.database_url) {
                Ok(pool) => Some(DieselRepository::new(pool)),
                Err(RepositoryError::StoreMissing(path)) => {
                    log::warn!("store not found at {}", path.display());
                    None
                }
                Err(err) => return Err(ServiceError::from(err)),
            };
            generate_payments(policy, &files, repo.as_ref())?;
        }
        Commands::Load => {
            load_files(&files, &cli.database_url)?;
        }
        Commands::Report {
            kind,
            format,
            limit,
        } => {
            let repo = DieselRepository::new(open_store(&cli.database_url)?);
            let report = run_report(&repo, kind, limit)?;
            println!("{}", render_report(&report, format)?);
        }
    }

    Ok(())
}
