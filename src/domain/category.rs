use serde::{Deserialize, Serialize};

/// Product department. Serialized as one row of `categories.csv`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier of the category.
    #[serde(rename = "category_id")]
    pub id: i32,
    /// Distinct human-readable name of the category.
    #[serde(rename = "category_name")]
    pub name: String,
    /// Short marketing description of the category.
    pub description: String,
}

impl Category {
    /// Build a category whose description is derived from its name.
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        let name = name.into();
        let description = format!("Browse our selection of {} products", name.to_lowercase());
        Self {
            id,
            name,
            description,
        }
    }
}
