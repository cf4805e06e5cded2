use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

use crate::food::resolution::DishPrediction;
use crate::food::{DishFinder, Recipe};
use crate::providers::utils::load_rgb_image;

/// Classifies a food photo and prints the recipe for the predicted dish.
pub async fn handle_photo(path: &str, finder: &DishFinder) -> Result<(), String> {
    let path = Path::new(path);
    if !path.exists() {
        return Err(format!("❌ Error: File does not exist: {}", path.display()));
    }

    let image = load_rgb_image(path).map_err(|e| format!("Failed to open image: {}", e))?;

    let spinner = spinner("Identifying dish...");
    let prediction = finder.predict_dish(&image).await;
    spinner.finish_and_clear();
    let prediction = prediction.map_err(|e| format!("Classification failed: {}", e))?;

    print_prediction(&prediction);
    print_recipe(&finder.fetch_recipe(&prediction.dish).await);
    Ok(())
}

/// Handles `recipe <dish>` typed at the prompt.
pub async fn handle_recipe(input: &str, finder: &DishFinder) -> Result<(), String> {
    lookup_recipe(input.trim_start_matches("recipe"), finder).await
}

/// Looks a dish up by name, skipping classification.
pub async fn lookup_recipe(dish: &str, finder: &DishFinder) -> Result<(), String> {
    let dish = dish.trim();
    if dish.is_empty() {
        return Err("Please specify a recipe name to search.".to_string());
    }

    let spinner = spinner("Searching recipe sources...");
    let recipe = finder.fetch_recipe(dish).await;
    spinner.finish_and_clear();

    print_recipe(&recipe);
    Ok(())
}

fn spinner(message: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

fn print_prediction(prediction: &DishPrediction) {
    println!("\n🧠 Indian Model        : {}", prediction.raw.indian);
    println!("🍔 Western Model       : {}", prediction.raw.western);
    println!("📊 General Model       : {}", prediction.raw.general);
    println!(
        "\n🔍 Predicted Dish: {}",
        title_case(&prediction.dish).bold().green()
    );
}

fn print_recipe(recipe: &Recipe) {
    println!("{}", format_recipe(recipe));
}

pub fn format_recipe(recipe: &Recipe) -> String {
    let mut out = format!("\n🍛 Recipe for {}:\n\n📝 Ingredients:\n", recipe.name);
    for ingredient in &recipe.ingredients {
        out.push_str(&format!("  • {}\n", ingredient));
    }
    out.push_str("\n👨‍🍳 Instructions:\n");
    out.push_str(&recipe.instructions);
    out
}

/// Upper-cases the first letter of every run of letters.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_alpha = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}
