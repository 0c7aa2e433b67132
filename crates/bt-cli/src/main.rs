use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "bt")]
#[command(about = "Best single buy/sell trade search", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a layered trade request, run the search, print the result
    Compute {
        /// Request paths in merge order (base -> overrides...)
        #[arg(long = "config", required = true)]
        config_paths: Vec<String>,

        /// Output format (pretty | json). Overrides `output.format`.
        #[arg(long)]
        format: Option<String>,

        /// Fail instead of warn when the request has unused keys.
        #[arg(long, default_value_t = false)]
        strict_keys: bool,
    },

    /// Print the trading dates a series of N days maps onto
    Dates {
        /// Calculation date (YYYY-MM-DD); the series ends strictly before it
        #[arg(long)]
        calculation_date: NaiveDate,

        /// Number of trading days
        #[arg(long)]
        days: usize,
    },

    /// Compute layered request hash + print canonical JSON
    ConfigHash {
        /// Paths in merge order
        #[arg(required = true)]
        paths: Vec<String>,
    },
}

fn main() -> Result<()> {
    // Dev convenience; silent when the file is absent.
    let _ = dotenvy::from_filename(".env.local");
    init_tracing();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Compute {
            config_paths,
            format,
            strict_keys,
        } => commands::compute::run(&config_paths, format.as_deref(), strict_keys)?,

        Commands::Dates {
            calculation_date,
            days,
        } => commands::dates::run(calculation_date, days),

        Commands::ConfigHash { paths } => {
            let loaded = bt_config::load_layered_yaml(&paths)?;
            println!("request_hash={}", loaded.request_hash);
            println!("{}", loaded.canonical_json);
        }
    }

    Ok(())
}

/// Logs go to stderr so stdout stays machine-readable.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}
