use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use colombia_geogame::quiz::{Difficulty, Mode};

const EXIT_SUCCESS: i32 = 0;
const EXIT_TERMINAL: i32 = 1;
const EXIT_DATA: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ListFormat {
    Table,
    Tsv,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Play the interactive quiz (default if no subcommand)
    Play {
        /// Mode to start in
        #[arg(short, long, value_enum)]
        mode: Option<Mode>,

        /// Difficulty shown in the sidebar
        #[arg(short, long, value_enum)]
        difficulty: Option<Difficulty>,
    },
    /// Print the department table for study
    List {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = ListFormat::Table)]
        format: ListFormat,

        /// Print one question and its answer per record for this mode instead
        #[arg(short, long)]
        quiz: Option<String>,
    },
    /// Write a starter config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "colombia-geogame")]
#[command(about = "Colombian geography quiz in the terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/colombia-geogame/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// CSV table to quiz on (overrides data_path from the config)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    colombia_geogame::logging::init_tracing(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Play {
        mode: None,
        difficulty: None,
    });

    // Init needs no existing config or data
    if let Commands::Init { force } = command {
        let path = match cli.config.clone() {
            Some(p) => p,
            None => match colombia_geogame::config::get_config_path() {
                Ok(p) => p,
                Err(e) => {
                    eprintln!("Config error: {:#}", e);
                    std::process::exit(EXIT_CONFIG);
                }
            },
        };
        if let Err(e) = colombia_geogame::config::write_default_config(&path, force) {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
        println!("Wrote config to {}", path.display());
        std::process::exit(EXIT_SUCCESS);
    }

    // Load config
    let config = match colombia_geogame::config::load_config(cli.config.clone()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(errors) = colombia_geogame::config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    // Load the record table; any failure here is fatal
    let data_path = cli.data.clone().or_else(|| config.data_path.clone());
    let records = match colombia_geogame::data::load_records(data_path.as_deref())
        .context("Failed to load the department table")
    {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Data error: {:#}", e);
            std::process::exit(EXIT_DATA);
        }
    };
    tracing::info!(count = records.len(), "record table ready");

    match command {
        Commands::Play { mode, difficulty } => {
            let feedback_delay = match config.feedback_delay() {
                Ok(d) => d,
                Err(e) => {
                    eprintln!("Config error: feedback_delay: {}", e);
                    std::process::exit(EXIT_CONFIG);
                }
            };

            let theme = colombia_geogame::tui::resolve_theme(config.theme());
            let session = colombia_geogame::session::Session::new(records, feedback_delay);
            let app = colombia_geogame::tui::App::new(
                session,
                mode.unwrap_or_else(|| config.mode()),
                difficulty.unwrap_or_else(|| config.difficulty()),
                theme,
            );

            if let Err(e) = colombia_geogame::tui::run_tui(app, config.tick_rate_ms()).await {
                eprintln!("Terminal error: {:#}", e);
                std::process::exit(EXIT_TERMINAL);
            }
        }
        Commands::List { format, quiz } => {
            let use_colors = colombia_geogame::output::should_use_colors();

            let output = if let Some(mode_name) = quiz {
                if Mode::parse(&mode_name).is_none() {
                    tracing::warn!("unknown quiz mode '{}'", mode_name);
                }
                colombia_geogame::output::format_question_sheet(&records, &mode_name, use_colors)
            } else {
                match format {
                    ListFormat::Table => {
                        colombia_geogame::output::format_record_table(&records, use_colors)
                    }
                    ListFormat::Tsv => colombia_geogame::output::format_tsv(&records),
                    ListFormat::Json => match colombia_geogame::output::format_json(&records) {
                        Ok(json) => json,
                        Err(e) => {
                            eprintln!("Failed to serialize records: {}", e);
                            std::process::exit(EXIT_DATA);
                        }
                    },
                }
            };
            println!("{}", output);
        }
        Commands::Init { .. } => {}
    }

    std::process::exit(EXIT_SUCCESS);
}
