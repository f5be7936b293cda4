use std::io;

use clap::Parser;
use env_logger::Env;
use log::{error, info};
use survey::configuration::cli::{Cli, Command};
use survey::configuration::config::Config;
use survey::error_handling::types::{ControllerError, FormError};
use survey::form_session::prompt::SAVED_MESSAGE;
use survey::summary::{SummaryBoard, SummaryCriteria};
use survey::Controller;

fn main() {
    // RUST_LOG overrides the default level
    // https://docs.rs/env_logger/latest/env_logger/
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_target(false)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        match &e {
            ControllerError::FormError(FormError::Invalid(_)) => eprintln!("{}", e),
            _ => error!("{}, exiting...", e),
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), ControllerError> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    cli.apply_overrides(&mut config);
    info!("Configuration imported successfully");

    let controller = Controller::new(config)?;

    match cli.command {
        Command::Submit(args) => {
            controller.submit(&args)?;
            println!("{}", SAVED_MESSAGE);
        }
        Command::Fill => {
            let stdin = io::stdin();
            controller.fill(stdin.lock(), io::stdout())?;
        }
        Command::Summary { faculty, min_grade } => {
            let defaults = controller.config().criteria();
            let criteria = SummaryCriteria {
                faculty: faculty.unwrap_or(defaults.faculty),
                min_grade: min_grade.unwrap_or(defaults.min_grade),
            };
            print_board(&controller.summary(&criteria)?);
        }
        Command::List => println!("{}", controller.records_json()?),
        Command::Clear => {
            let board = controller.clear()?;
            println!("Store cleared");
            print_board(&board);
        }
    }
    Ok(())
}

fn print_board(board: &SummaryBoard) {
    for (region, text) in board.regions() {
        println!("{}: {}", region, text);
    }
}
