//! tutor-quote: price a tutoring package from the command line.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tutor_core::log_quote;
use tutor_core::observability::{setup_logging, LogFormat};
use tutor_core::present::{format_colones, BookingRequest, QuoteBreakdown};
use tutor_core::pricing::Level;
use tutor_core::{PricingConfig, PricingEngine, Urgency};

#[derive(Parser, Debug)]
#[command(name = "tutor-quote", version, about = "Quote tutoring packages from the published rate card")]
struct Cli {
    /// Pricing TOML file (defaults to $TUTOR_PRICING_CONFIG, then the built-in rate card)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log output format: pretty or json
    #[arg(long, global = true, default_value = "pretty")]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Price a language/level/hours request
    Quote {
        language: String,
        level: String,
        /// Hours; anything that is not a positive number counts as one hour
        #[arg(default_value = "1")]
        hours: String,
        /// Apply the urgency surcharge to the final price
        #[arg(long)]
        urgent: bool,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the configured rates and package tiers
    Table,

    /// Render booking confirmation and tutor notification texts
    Message {
        #[arg(long)]
        name: String,
        #[arg(long)]
        contact: String,
        #[arg(long)]
        language: String,
        #[arg(long)]
        level: String,
        #[arg(long)]
        schedule: String,
        #[arg(long)]
        hours: Option<String>,
        #[arg(long)]
        goal: Option<String>,
    },

    /// Print the effective configuration as TOML
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.log_format);

    if let Err(e) = run(cli) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = PricingConfig::load(cli.config.as_deref()).context("loading pricing config")?;
    let engine = PricingEngine::from_config(&config);

    match cli.command {
        Commands::Quote {
            language,
            level,
            hours,
            urgent,
            format,
        } => {
            let quote = engine.calculate_price(&language, &level, hours.as_str());
            log_quote!(info, quote, "Quote calculated");

            match format {
                OutputFormat::Json => println!("{}", quote.to_json()?),
                OutputFormat::Text => {
                    let today = chrono::Local::now().date_naive();
                    let breakdown = QuoteBreakdown::from_quote(&quote, &config.contact, today);
                    print!("{}", breakdown.render_text());
                }
            }

            if urgent {
                let final_price = engine.final_price(&quote, Urgency::Urgent);
                println!(
                    "Recargo por urgencia: {}%  Total final: {}",
                    (engine.urgency_surcharge() * 100.0).round(),
                    format_colones(final_price as f64)
                );
            }
        }
        Commands::Table => {
            let prices = engine.prices();
            for language in prices.languages() {
                let Some(rates) = prices.get(language) else {
                    continue;
                };
                let cells: Vec<String> = Level::ALL
                    .iter()
                    .map(|level| format!("{}={}", level, format_colones(f64::from(rates.rate(*level)))))
                    .collect();
                println!("{:<12} {}  {}", language, cells.join("  "), rates.description);
            }
            println!();
            for tier in engine.discounts().tiers() {
                println!("{:>3} horas: {}% de descuento", tier.hours, tier.rate * 100.0);
            }
        }
        Commands::Message {
            name,
            contact,
            language,
            level,
            schedule,
            hours,
            goal,
        } => {
            let request = BookingRequest {
                name,
                contact,
                language,
                level,
                schedule,
                hours,
                goal,
            };
            let quote = request.quote(&engine);
            log_quote!(info, quote, "Booking messages rendered");
            println!("{}", request.student_confirmation(&quote, &config.contact));
            println!();
            println!("{}", request.tutor_notification(&quote));
        }
        Commands::Config => {
            print!("{}", config.to_toml_string()?);
        }
    }

    Ok(())
}
