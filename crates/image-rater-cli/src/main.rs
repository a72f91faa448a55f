mod commands;
mod logging;
mod prompt;

use std::process;

use clap::{CommandFactory, Parser};
use colored::*;
use commands::{Cli, Commands};
use dotenv::dotenv;
use image_rater_core::{AppConfig, RatingLog, RenderAction, StudyEngine};
use tracing::error;

fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let _guard = logging::init_logger();

    let config = match image_rater_core::config::load_configuration() {
        Ok(config) => config,
        Err(err) => {
            error!("Error loading configuration: {}", err);
            process::exit(1);
        }
    };

    let args = Cli::parse();

    match args.command {
        Some(Commands::Run { seed }) => {
            if let Err(err) = run_study(&config, seed) {
                error!("Error: {}", err);
                process::exit(1);
            }
        }
        Some(Commands::Tally) => {
            let log = RatingLog::new(&config.results_path);
            match log.count() {
                Ok(count) => println!("{} ratings recorded in {}", count, config.results_path),
                Err(err) => error!("Error reading rating log: {}", err),
            }
        }
        Some(Commands::PrintConfig) => {
            println!("Configuration: {:?}", config);
        }
        None => {
            let _ = Cli::command().print_long_help();
        }
    }

    Ok(())
}

/// The interactive loop: show the current image, collect both answers,
/// submit, and re-render until the engine reports completion. A failed
/// submission keeps the cursor where it is, so the same image is simply
/// presented again.
fn run_study(config: &AppConfig, seed: Option<u64>) -> anyhow::Result<()> {
    let engine = StudyEngine::new(config.clone());
    let mut state = engine.start_session(None, seed)?;

    prompt::print_intro();

    loop {
        let Some(image) = state.current() else { break };
        prompt::print_image_header(state.position() + 1, state.len(), image);

        let random_score = prompt::prompt_score("This image is random.")?;
        let organized_score = prompt::prompt_score("This image is organized.")?;

        match engine.submit(&mut state, random_score, organized_score) {
            Ok(outcome) => {
                if outcome.action == RenderAction::Complete {
                    break;
                }
            }
            Err(err) => {
                error!("Could not save that rating: {}", err);
                println!("{}", "Your answer was not saved. Please try again.".red());
            }
        }
    }

    println!();
    println!(
        "{}",
        "You have finished rating all images. Thank you for your participation!".green()
    );

    Ok(())
}
