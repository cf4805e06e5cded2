pub const NO_INGREDIENTS: &str = "No ingredients found.";
pub const NO_INSTRUCTIONS: &str = "No instructions available.";

/// A recipe as returned by one of the recipe sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
}

impl Recipe {
    pub fn new(name: impl Into<String>, ingredients: Vec<String>, instructions: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ingredients,
            instructions: instructions.into(),
        }
    }

    /// Placeholder returned when no source knows the dish. It carries the
    /// unresolved name and is never looked up again.
    pub fn not_found(dish: &str) -> Self {
        Self::new(dish, vec![NO_INGREDIENTS.to_string()], NO_INSTRUCTIONS)
    }
}
