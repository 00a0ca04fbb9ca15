//! System category model used to tag pages and campaigns.

use serde::{Deserialize, Serialize};

use super::{new_id, ActivityStatus, Entity, Identified};
use crate::editor::ordered;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryOption {
    pub id: String,
    pub label: String,
}

impl Identified for CategoryOption {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A named category with selectable options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SystemCategory {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub options: Vec<CategoryOption>,
    #[serde(default)]
    pub status: ActivityStatus,
    #[serde(default)]
    pub updated_at: String,
}

impl SystemCategory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::blank()
        }
    }

    pub fn add_option(&mut self, label: impl Into<String>) -> &CategoryOption {
        ordered::add(
            &mut self.options,
            CategoryOption {
                id: new_id(),
                label: label.into(),
            },
        )
    }

    pub fn rename_option(&mut self, option_id: &str, label: impl Into<String>) -> bool {
        let label = label.into();
        ordered::update(&mut self.options, option_id, |o| o.label = label)
    }

    pub fn remove_option(&mut self, option_id: &str) -> bool {
        ordered::remove(&mut self.options, option_id)
    }
}

impl Identified for SystemCategory {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for SystemCategory {
    const STORAGE_KEY: &'static str = "system_categories";
    const LABEL: &'static str = "Category";
    const LIST_ROUTE: &'static str = "/settings";

    fn blank() -> Self {
        Self {
            id: new_id(),
            name: String::new(),
            description: String::new(),
            options: Vec::new(),
            status: ActivityStatus::Active,
            updated_at: String::new(),
        }
    }

    fn seed() -> Vec<Self> {
        crate::seed::system_categories()
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.description.as_str()];
        fields.extend(self.options.iter().map(|o| o.label.as_str()));
        fields
    }

    fn status_key(&self) -> &'static str {
        self.status.as_str()
    }

    fn updated_at(&self) -> &str {
        &self.updated_at
    }

    fn touch(&mut self, now: &str) {
        self.updated_at = now.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_category_options() {
        let mut category = SystemCategory::new("Region");
        assert!(category.options.is_empty());

        let north = category.add_option("North").id.clone();
        assert_eq!(category.options.len(), 1);
        assert_eq!(category.options[0].label, "North");

        assert!(category.rename_option(&north, "Northern"));
        assert_eq!(category.options[0].label, "Northern");

        assert!(category.remove_option(&north));
        assert!(category.options.is_empty());
        assert_eq!(category.name, "Region");
    }
}
