use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use diarisk::scoring::Vitals;

const EXIT_SUCCESS: i32 = 0;
const EXIT_RUNTIME: i32 = 1;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Launch the interactive dashboard (default if no subcommand)
    Dashboard,
    /// Score one set of vitals and print the assessment
    Score {
        /// Age in years (18-90)
        #[arg(long, value_parser = clap::value_parser!(u32).range(18..=90))]
        age: u32,

        /// Body mass index (15.0-50.0)
        #[arg(long, value_parser = parse_bmi)]
        bmi: f64,

        /// Blood pressure (40-130)
        #[arg(long = "bp", alias = "blood-pressure", value_parser = clap::value_parser!(u32).range(40..=130))]
        bp: u32,

        /// Glucose level (40-200)
        #[arg(long, value_parser = clap::value_parser!(u32).range(40..=200))]
        glucose: u32,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "diarisk")]
#[command(about = "Diabetes risk dashboard and scoring CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/diarisk/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn parse_bmi(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    let (min, max) = diarisk::config::BMI_RANGE;
    if value < min || value > max {
        return Err(format!("BMI must be between {} and {}", min, max));
    }
    Ok(value)
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Dashboard);

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let mut config = match diarisk::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Out-of-domain defaults are clamped rather than fatal
    for warning in diarisk::config::clamp_defaults(&mut config) {
        eprintln!("Config warning: {}", warning);
    }

    if cli.verbose {
        eprintln!(
            "Config: theme={:?} tick_rate_ms={} defaults=({}, {:.1}, {}, {})",
            config.theme,
            config.tick_rate_ms,
            config.defaults.age,
            config.defaults.bmi,
            config.defaults.blood_pressure,
            config.defaults.glucose
        );
    }

    match command {
        Commands::Score {
            age,
            bmi,
            bp,
            glucose,
            format,
        } => {
            let vitals = Vitals {
                age,
                bmi,
                blood_pressure: bp,
                glucose,
            };
            let assessment = diarisk::scoring::evaluate(&vitals);

            match format {
                Format::Text => {
                    let use_colors = diarisk::output::should_use_colors();
                    println!(
                        "{}",
                        diarisk::output::format_report(&vitals, &assessment, use_colors)
                    );
                }
                Format::Json => match diarisk::output::format_json(&vitals, &assessment) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Failed to serialize report: {}", e);
                        std::process::exit(EXIT_RUNTIME);
                    }
                },
            }
        }
        Commands::Dashboard => {
            let app = diarisk::tui::App::new(&config);
            if let Err(e) = diarisk::tui::run_tui(app).await {
                eprintln!("Dashboard error: {}", e);
                std::process::exit(EXIT_RUNTIME);
            }
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
