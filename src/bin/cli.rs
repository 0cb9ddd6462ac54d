//! NGO Reporting CLI
//!
//! Command-line companion to the web client:
//! - Submit a monthly report
//! - Show the dashboard for a month
//! - Generate a config file

use clap::{Parser, Subcommand, ValueEnum};
use ngo_reporting::config::{generate_default_config, Config, LoggingConfig};
use ngo_reporting::dashboard::{self, DashboardState, DashboardView, EMPTY_MESSAGE};
use ngo_reporting::form::{self, ReportForm, SubmitBlocked, SubmitOutcome};
use ngo_reporting::{HttpClient, Month, ReportField};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ngo-report")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Submit NGO monthly reports and view monthly dashboards")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Reporting API base URL (overrides config and NGO_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file (default: search standard locations)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Submit a monthly report
    Submit {
        /// NGO identifier
        #[arg(long)]
        ngo_id: String,
        /// Reporting month (YYYY-MM)
        #[arg(long)]
        month: String,
        /// Number of people helped
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        people_helped: String,
        /// Number of events conducted
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        events_conducted: String,
        /// Funds utilized
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        funds_utilized: String,
    },

    /// Show aggregated statistics for a month
    Dashboard {
        /// Month to show (YYYY-MM, default: current month)
        #[arg(short, long)]
        month: Option<String>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }

    init_logging(&config.logging);

    match cli.command {
        Commands::Submit {
            ngo_id,
            month,
            people_helped,
            events_conducted,
            funds_utilized,
        } => {
            let api = HttpClient::new(&config.api)?;

            let mut report = ReportForm::new();
            report.update(ReportField::NgoId, ngo_id);
            report.update(ReportField::Month, month);
            report.update(ReportField::PeopleHelped, people_helped);
            report.update(ReportField::EventsConducted, events_conducted);
            report.update(ReportField::FundsUtilized, funds_utilized);
            let entered = report.clone();

            match form::submit(&mut report, &api).await {
                Ok(SubmitOutcome::Accepted(message)) => {
                    println!("{}", message);
                }
                Ok(outcome) => {
                    eprintln!("Submission failed: {}", outcome.message());
                    print_entered(&entered);
                    std::process::exit(1);
                }
                Err(SubmitBlocked::Invalid(e)) => {
                    eprintln!("Invalid report: {}", e);
                    print_entered(&entered);
                    std::process::exit(1);
                }
                Err(e @ SubmitBlocked::InFlight) => {
                    eprintln!("{}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Dashboard { month, format } => {
            let api = HttpClient::new(&config.api)?;
            let month = month.unwrap_or_else(|| Month::current().to_string());

            let mut state = DashboardState::default();
            let view = dashboard::load(&mut state, &api, &month).await;

            match view {
                DashboardView::Error(message) => {
                    eprintln!("Dashboard unavailable for {}: {}", month, message);
                    std::process::exit(1);
                }
                DashboardView::Loading => {
                    eprintln!("No response received for {}", month);
                    std::process::exit(1);
                }
                DashboardView::Empty => match format {
                    OutputFormat::Json => println!("null"),
                    _ => println!("{}", EMPTY_MESSAGE),
                },
                DashboardView::Populated(cards) => match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&state.summary())?);
                    }
                    OutputFormat::Csv => {
                        let mut writer = csv::Writer::from_writer(std::io::stdout());
                        writer.write_record(["metric", "value"])?;
                        for card in &cards {
                            writer.write_record([card.label, card.value.as_str()])?;
                        }
                        writer.flush()?;
                    }
                    OutputFormat::Table => {
                        let title = state
                            .month()
                            .map(|m| format!("{} ({})", m.label(), m))
                            .unwrap_or(month);
                        println!("Dashboard for {}", title);
                        println!("{}", "-".repeat(40));
                        for card in &cards {
                            println!("{:<28} {:>11}", card.label, card.value);
                        }
                    }
                },
            }
        }

        Commands::Config { output } => {
            let config = generate_default_config();

            match output {
                Some(path) => {
                    // Create parent directory if needed
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("ngo_reporting={level},ngo_report={level}", level = logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

/// Echo the entered values so a failed submission can be corrected
fn print_entered(report: &ReportForm) {
    eprintln!();
    eprintln!("Entered values:");
    for field in ReportField::ALL {
        eprintln!("  {:<18} {}", field.label(), report.value(field));
    }
}
