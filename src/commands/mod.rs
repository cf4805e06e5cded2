use crate::food::DishFinder;

pub mod food_cmd;
pub mod system;

pub use system::is_quit;

pub struct CommandHandler {
    finder: DishFinder,
}

impl CommandHandler {
    pub fn new(finder: DishFinder) -> Self {
        Self { finder }
    }

    pub async fn handle_command(&mut self, input: &str) -> Result<(), String> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(());
        }

        if input.eq_ignore_ascii_case("help") {
            return system::handle_command(input);
        }

        if input == "recipe" || input.starts_with("recipe ") {
            return food_cmd::handle_recipe(input, &self.finder).await;
        }

        // Anything else is treated as a path to a food photo
        food_cmd::handle_photo(input, &self.finder).await
    }
}
