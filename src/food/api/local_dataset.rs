use async_trait::async_trait;
use log::info;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

use super::source::{RecipeSource, SourceError, SourceKind};
use crate::food::recipe::Recipe;

pub const NAME_COLUMN: &str = "TranslatedRecipeName";
pub const INGREDIENTS_COLUMN: &str = "TranslatedIngredients";
pub const INSTRUCTIONS_COLUMN: &str = "TranslatedInstructions";

const INGREDIENT_SEPARATOR: &str = ", ";

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to open dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to read dataset: {0}")]
    Csv(#[from] csv::Error),
    #[error("Dataset is missing column '{0}'")]
    MissingColumn(&'static str),
}

#[derive(Debug, Clone)]
struct Row {
    name: String,
    ingredients: String,
    instructions: String,
}

/// Recipe table loaded once from CSV and read-only afterwards. Rows
/// without a name are not kept.
#[derive(Debug, Clone, Default)]
pub struct LocalDataset {
    rows: Vec<Row>,
    names: Vec<String>,
    // lower-cased name -> first row with that name
    index: HashMap<String, usize>,
}

impl LocalDataset {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let file = File::open(path.as_ref())?;
        let dataset = Self::from_reader(file)?;
        info!(
            "Loaded {} recipes from {}",
            dataset.len(),
            path.as_ref().display()
        );
        Ok(dataset)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let column = |name: &'static str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or(DatasetError::MissingColumn(name))
        };
        let name_idx = column(NAME_COLUMN)?;
        let ingredients_idx = column(INGREDIENTS_COLUMN)?;
        let instructions_idx = column(INSTRUCTIONS_COLUMN)?;

        let mut rows = Vec::new();
        let mut index = HashMap::new();
        for record in csv_reader.records() {
            let record = record?;
            let get = |idx: usize| record.get(idx).unwrap_or_default().to_string();
            let name = get(name_idx);
            if name.is_empty() {
                continue;
            }
            index.entry(name.to_lowercase()).or_insert(rows.len());
            rows.push(Row {
                name,
                ingredients: get(ingredients_idx),
                instructions: get(instructions_idx),
            });
        }

        let names = rows.iter().map(|r| r.name.clone()).collect();

        Ok(Self { rows, names, index })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Recipe names in file order, original casing.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// First row whose name equals `dish` ignoring case.
    pub fn find(&self, dish: &str) -> Option<Recipe> {
        self.index
            .get(&dish.to_lowercase())
            .map(|&i| &self.rows[i])
            .map(|row| {
                Recipe::new(
                    row.name.clone(),
                    split_ingredients(&row.ingredients),
                    row.instructions.clone(),
                )
            })
    }
}

fn split_ingredients(field: &str) -> Vec<String> {
    field
        .split(INGREDIENT_SEPARATOR)
        .map(|s| s.to_string())
        .collect()
}

#[async_trait]
impl RecipeSource for LocalDataset {
    fn kind(&self) -> SourceKind {
        SourceKind::LocalDataset
    }

    async fn lookup(&self, dish: &str) -> Result<Recipe, SourceError> {
        self.find(dish).ok_or(SourceError::NotFound)
    }

    fn known_names(&self) -> Option<&[String]> {
        Some(self.names())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "\
Srno,TranslatedRecipeName,TranslatedIngredients,TranslatedInstructions
1,Chicken Biryani,\"Rice, Chicken, Spices\",\"Marinate the chicken, then layer with rice.\"
2,Masala Dosa,\"Rice batter, Potato\",Spread and fold.
3,chicken biryani,\"Duplicate\",Ignored.
4,,\"Orphan\",No name.
";

    #[test]
    fn test_case_insensitive_lookup() {
        let dataset = LocalDataset::from_reader(SAMPLE.as_bytes()).unwrap();
        let recipe = dataset.find("chicken biryani").unwrap();
        assert_eq!(recipe.name, "Chicken Biryani");
        assert_eq!(recipe.ingredients, vec!["Rice", "Chicken", "Spices"]);
        assert_eq!(recipe.instructions, "Marinate the chicken, then layer with rice.");
    }

    #[test]
    fn test_first_matching_row_wins() {
        let dataset = LocalDataset::from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(dataset.find("CHICKEN BIRYANI").unwrap().name, "Chicken Biryani");
    }

    #[test]
    fn test_nameless_rows_are_dropped() {
        let dataset = LocalDataset::from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.find(""), None);
        assert_eq!(
            dataset.names(),
            &["Chicken Biryani", "Masala Dosa", "chicken biryani"]
        );
    }

    #[test]
    fn test_ingredients_split_only_on_comma_space() {
        let csv = "TranslatedRecipeName,TranslatedIngredients,TranslatedInstructions\n\
                   Raita,\"Curd,Cucumber, Salt\",Mix.\n";
        let dataset = LocalDataset::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(dataset.find("raita").unwrap().ingredients, vec!["Curd,Cucumber", "Salt"]);
    }

    #[test]
    fn test_missing_column() {
        let csv = "Name,Ingredients\nTea,Water\n";
        let err = LocalDataset::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::MissingColumn(NAME_COLUMN)));
    }

    #[tokio::test]
    async fn test_open_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let dataset = LocalDataset::open(file.path()).unwrap();
        assert!(dataset.lookup("masala dosa").await.is_ok());
        assert!(matches!(dataset.lookup("pizza").await, Err(SourceError::NotFound)));
    }
}
