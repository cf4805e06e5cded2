use colored::Colorize;

const QUIT_WORDS: [&str; 3] = ["q", "quit", "exit"];

pub fn is_quit(input: &str) -> bool {
    QUIT_WORDS.contains(&input.trim().to_lowercase().as_str())
}

pub fn print_welcome() {
    println!("{}", "🍽️ Welcome to the Food Classifier & Recipe Finder!".bold());
}

pub fn print_goodbye() {
    println!("👋 Goodbye! Thanks for using the app.");
}

pub fn handle_command(input: &str) -> Result<(), String> {
    match input.to_lowercase().as_str() {
        "help" => {
            println!("\n🍽️ Commands:");
            println!("  <path to image>   - Identify the dish in a photo and show its recipe");
            println!("  recipe <name>     - Look up a recipe by dish name");
            println!("  help              - Show this help");
            println!("  q | quit | exit   - Leave");
            println!();
            Ok(())
        }
        _ => Err(format!("Unknown command: {}", input)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_words() {
        assert!(is_quit("q"));
        assert!(is_quit(" QUIT "));
        assert!(is_quit("Exit"));
        assert!(!is_quit("quitter.jpg"));
    }
}
