//! Category model definitions

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Colors offered when creating or editing a category
pub const PRESET_COLORS: [&str; 8] = [
    "#9b87f5", "#F97316", "#0EA5E9", "#D946EF", "#8B5CF6", "#33C3F0", "#ea384c", "#1EAEDB",
];

/// A user-defined category. The name is its identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub name: String,
    /// Display color, opaque to the store
    pub color: String,
}

impl Category {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }
}

/// The categories a fresh board starts with
pub fn default_categories() -> Vec<Category> {
    vec![
        Category::new("Work", "#9b87f5"),
        Category::new("Personal", "#F97316"),
        Category::new("Shopping", "#0EA5E9"),
        Category::new("Health", "#D946EF"),
    ]
}

/// Request to create a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub name: String,
    pub color: String,
}

impl NewCategory {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }

    /// Trim the name and reject it if blank
    pub fn validate(mut self) -> Result<Self> {
        self.name = trimmed_name(&self.name)?;
        Ok(self)
    }
}

impl From<NewCategory> for Category {
    fn from(request: NewCategory) -> Self {
        Category::new(request.name, request.color)
    }
}

/// Request to rename and/or recolor a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryUpdate {
    pub old_name: String,
    pub new_name: String,
    pub color: String,
}

impl CategoryUpdate {
    pub fn new(
        old_name: impl Into<String>,
        new_name: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            old_name: old_name.into(),
            new_name: new_name.into(),
            color: color.into(),
        }
    }

    /// Check the edit against the category currently stored under `old_name`.
    ///
    /// A blank new name is rejected, and so is an edit that changes nothing.
    pub fn validate(mut self, current: &Category) -> Result<Self> {
        self.new_name = trimmed_name(&self.new_name)?;
        if self.new_name == current.name && self.color == current.color {
            return Err(Error::InvalidInput(format!(
                "Category '{}' is unchanged",
                current.name
            )));
        }
        Ok(self)
    }
}

fn trimmed_name(raw: &str) -> Result<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(Error::InvalidInput(
            "Category name cannot be empty".to_string(),
        ));
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_categories() {
        let names: Vec<_> = default_categories().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Work", "Personal", "Shopping", "Health"]);
    }

    #[test]
    fn test_default_colors_come_from_palette() {
        for category in default_categories() {
            assert!(PRESET_COLORS.contains(&category.color.as_str()));
        }
    }

    #[test]
    fn test_new_category_validate() {
        let request = NewCategory::new("  Errands ", PRESET_COLORS[2]).validate().unwrap();
        assert_eq!(request.name, "Errands");

        let err = NewCategory::new(" ", PRESET_COLORS[0]).validate().unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_update_validate_rejects_no_change() {
        let current = Category::new("Work", "#9b87f5");
        let err = CategoryUpdate::new("Work", " Work ", "#9b87f5")
            .validate(&current)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_update_validate_allows_recolor() {
        let current = Category::new("Work", "#9b87f5");
        let update = CategoryUpdate::new("Work", "Work", "#ea384c")
            .validate(&current)
            .unwrap();
        assert_eq!(update.new_name, "Work");
        assert_eq!(update.color, "#ea384c");
    }

    #[test]
    fn test_update_validate_rejects_blank_name() {
        let current = Category::new("Work", "#9b87f5");
        assert!(CategoryUpdate::new("Work", "", "#9b87f5")
            .validate(&current)
            .is_err());
    }
}
