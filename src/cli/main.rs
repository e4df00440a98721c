//! Command-line interface entry point for `roster`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use student_roster::config::Config;
use student_roster::core::store::{LoadStatus, RecordStore};
use student_roster::logger::{self, Level};
use student_roster::{error, info, verbose};

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config; otherwise use config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| Level::parse(&config.logging.level))
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        logger::enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        logger::enable_verbose();
    }
    logger::set_level(level);

    // Initialize file logging: CLI flag wins, otherwise use config logging.file if set
    let config_log_path: Option<std::path::PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(std::path::PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if let Some(parent) = log_path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if logger::init_file_logging(log_path) {
            info!("File logging initialized at: {display_path}");
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    info!("Log level set to {:?}", logger::level());

    let command = match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
            return;
        }
        command => command,
    };

    let mut store = open_store(&config);

    let result = match command {
        Command::Config { .. } => Ok(()),
        Command::List => {
            commands::records::list(&store);
            Ok(())
        }
        Command::Show { id } => commands::records::show(&store, id),
        Command::Highest => {
            commands::records::highest(&store);
            Ok(())
        }
        Command::Lowest => {
            commands::records::lowest(&store);
            Ok(())
        }
        Command::Sort { descending } => {
            commands::records::sort(&mut store, Command::sort_order(descending));
            Ok(())
        }
        Command::Add {
            id,
            name,
            cw1,
            cw2,
            cw3,
            exam,
        } => commands::records::add(&mut store, id, name, [cw1, cw2, cw3], exam),
        Command::Delete { id } => commands::records::delete(&mut store, id),
        Command::Update { id, field } => commands::records::update(&mut store, id, field.into()),
        Command::Report { format, output } => {
            commands::report::run(&store, &format, output.as_deref(), &config)
        }
    };

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

/// Open the configured roster; a missing file starts an empty roster.
fn open_store(config: &Config) -> RecordStore {
    let path = std::path::PathBuf::from(&config.roster.file);
    match RecordStore::open(&path) {
        Ok((store, loaded)) => {
            if loaded.status == LoadStatus::NotFound {
                eprintln!(
                    "✗ {} not found. Starting with an empty roster.",
                    path.display()
                );
            }
            for skip in &loaded.skipped {
                verbose!("Skipped line {}: {}", skip.line_number, skip.reason);
            }
            store
        }
        Err(e) => {
            error!("Failed to open roster: {e}");
            eprintln!("✗ Failed to open roster: {e}");
            std::process::exit(1);
        }
    }
}
