use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use dotenv::dotenv;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use std::env;
use std::path::PathBuf;

use dish_finder::commands::{food_cmd, is_quit, system, CommandHandler};
use dish_finder::config::{ConfigError, HF_API_TOKEN};
use dish_finder::food::config::FoodConfig;
use dish_finder::food::DishFinder;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Recipe dataset CSV (overrides RECIPE_DATASET)
    #[arg(long)]
    dataset: Option<PathBuf>,

    /// Identify a single photo and exit
    #[arg(long, conflicts_with = "recipe")]
    image: Option<String>,

    /// Look up a single dish by name and exit
    #[arg(long)]
    recipe: Option<String>,

    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let mut food_config = FoodConfig::from_env()?;
    if let Some(dataset) = &args.dataset {
        food_config.dataset_path = dataset.clone();
    }
    let hf_token = env::var(HF_API_TOKEN).map_err(|_| ConfigError::MissingVar(HF_API_TOKEN))?;

    let finder = DishFinder::from_config(&food_config, hf_token)?;

    if let Some(image) = &args.image {
        return food_cmd::handle_photo(image, &finder)
            .await
            .map_err(anyhow::Error::msg);
    }
    if let Some(dish) = &args.recipe {
        return food_cmd::lookup_recipe(dish, &finder)
            .await
            .map_err(anyhow::Error::msg);
    }

    run_cli_mode(CommandHandler::new(finder)).await
}

async fn run_cli_mode(mut command_handler: CommandHandler) -> Result<()> {
    system::print_welcome();
    system::handle_command("help").ok();

    let mut rl = Editor::<(), DefaultHistory>::new()?;

    loop {
        match rl.readline("\n📷 Enter the path to your food image (or type 'q' to quit): ") {
            Ok(line) => {
                let input = line.trim();
                if input.is_empty() {
                    continue;
                }
                rl.add_history_entry(input)?;

                if is_quit(input) {
                    system::print_goodbye();
                    break;
                }

                if let Err(e) = command_handler.handle_command(input).await {
                    println!("{}", e.red());
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                system::print_goodbye();
                break;
            }
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}
