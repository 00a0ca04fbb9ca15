//! Settings tab editing of the category list.

use serde::Deserialize;

use crate::editor::ordered;
use crate::errors::AppError;
use crate::models::{CategoryOption, SystemCategory};

/// One edit of the settings category list.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum CategoryAction {
    AddCategory { name: String },
    RenameCategory { category_id: String, name: String },
    RemoveCategory { category_id: String },
    AddOption { category_id: String, label: String },
    RenameOption {
        category_id: String,
        option_id: String,
        label: String,
    },
    RemoveOption {
        category_id: String,
        option_id: String,
    },
}

/// Which stored category an action touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookChange {
    Saved(String),
    Removed(String),
    Unchanged,
}

/// Working copy of the category collection.
#[derive(Debug, Clone, Default)]
pub struct CategoryBook {
    categories: Vec<SystemCategory>,
}

impl CategoryBook {
    pub fn new(categories: Vec<SystemCategory>) -> Self {
        Self { categories }
    }

    pub fn get(&self, id: &str) -> Option<&SystemCategory> {
        self.categories.iter().find(|c| c.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut SystemCategory, AppError> {
        self.categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))
    }

    pub fn add_category(&mut self, name: impl Into<String>) -> &SystemCategory {
        ordered::add(&mut self.categories, SystemCategory::new(name))
    }

    pub fn rename_category(&mut self, id: &str, name: impl Into<String>) -> Result<(), AppError> {
        self.get_mut(id)?.name = name.into();
        Ok(())
    }

    pub fn remove_category(&mut self, id: &str) -> bool {
        ordered::remove(&mut self.categories, id)
    }

    pub fn add_option(
        &mut self,
        category_id: &str,
        label: impl Into<String>,
    ) -> Result<&CategoryOption, AppError> {
        Ok(self.get_mut(category_id)?.add_option(label))
    }

    pub fn rename_option(
        &mut self,
        category_id: &str,
        option_id: &str,
        label: impl Into<String>,
    ) -> Result<bool, AppError> {
        Ok(self.get_mut(category_id)?.rename_option(option_id, label))
    }

    pub fn remove_option(&mut self, category_id: &str, option_id: &str) -> Result<bool, AppError> {
        Ok(self.get_mut(category_id)?.remove_option(option_id))
    }

    /// Apply an action and report which category has to be written back.
    pub fn apply(&mut self, action: CategoryAction) -> Result<BookChange, AppError> {
        let change = match action {
            CategoryAction::AddCategory { name } => {
                BookChange::Saved(self.add_category(name).id.clone())
            }
            CategoryAction::RenameCategory { category_id, name } => {
                self.rename_category(&category_id, name)?;
                BookChange::Saved(category_id)
            }
            CategoryAction::RemoveCategory { category_id } => {
                if !self.remove_category(&category_id) {
                    return Err(AppError::NotFound(format!(
                        "Category {} not found",
                        category_id
                    )));
                }
                BookChange::Removed(category_id)
            }
            CategoryAction::AddOption { category_id, label } => {
                self.add_option(&category_id, label)?;
                BookChange::Saved(category_id)
            }
            CategoryAction::RenameOption {
                category_id,
                option_id,
                label,
            } => match self.rename_option(&category_id, &option_id, label)? {
                true => BookChange::Saved(category_id),
                false => BookChange::Unchanged,
            },
            CategoryAction::RemoveOption {
                category_id,
                option_id,
            } => match self.remove_option(&category_id, &option_id)? {
                true => BookChange::Saved(category_id),
                false => BookChange::Unchanged,
            },
        };
        Ok(change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn action(value: serde_json::Value) -> CategoryAction {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_region_north_scenario() {
        let mut book = CategoryBook::default();
        let region = book.add_category("Region").id.clone();
        assert!(book.get(&region).unwrap().options.is_empty());

        let north = book.add_option(&region, "North").unwrap().id.clone();
        let options = &book.get(&region).unwrap().options;
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].label, "North");

        assert!(book.remove_option(&region, &north).unwrap());
        assert!(book.get(&region).unwrap().options.is_empty());
        assert_eq!(book.get(&region).unwrap().name, "Region");
    }

    #[test]
    fn test_unknown_category() {
        let mut book = CategoryBook::default();
        assert!(book.add_option("missing", "North").is_err());
        assert!(book.rename_category("missing", "x").is_err());
        assert!(!book.remove_category("missing"));
    }

    #[test]
    fn test_actions_report_the_touched_category() {
        let mut book = CategoryBook::default();
        let added = book.apply(action(json!({"type": "addCategory", "name": "Region"})));
        let BookChange::Saved(id) = added.unwrap() else {
            panic!("expected a saved category");
        };

        let rename = json!({"type": "renameCategory", "categoryId": id, "name": "Area"});
        assert_eq!(
            book.apply(action(rename)).unwrap(),
            BookChange::Saved(id.clone())
        );
        assert_eq!(book.get(&id).unwrap().name, "Area");

        let missing_option = json!({
            "type": "removeOption",
            "categoryId": id,
            "optionId": "missing"
        });
        assert_eq!(
            book.apply(action(missing_option)).unwrap(),
            BookChange::Unchanged
        );

        let remove = json!({"type": "removeCategory", "categoryId": id});
        assert_eq!(
            book.apply(action(remove.clone())).unwrap(),
            BookChange::Removed(id)
        );
        assert!(matches!(
            book.apply(action(remove)),
            Err(AppError::NotFound(_))
        ));
    }
}
