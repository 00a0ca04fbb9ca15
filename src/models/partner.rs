//! Partner model.

use serde::{Deserialize, Serialize};

use super::{new_id, ActivityStatus, Entity, Identified};

/// A partner brand shown on the site.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub status: ActivityStatus,
    #[serde(default)]
    pub updated_at: String,
}

impl Identified for Partner {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Partner {
    const STORAGE_KEY: &'static str = "partners";
    const LABEL: &'static str = "Partner";
    const LIST_ROUTE: &'static str = "/partners";

    fn blank() -> Self {
        Self {
            id: new_id(),
            name: String::new(),
            logo_url: None,
            website: None,
            description: String::new(),
            category: String::new(),
            status: ActivityStatus::Inactive,
            updated_at: String::new(),
        }
    }

    fn seed() -> Vec<Self> {
        crate::seed::partners()
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
    }

    fn status_key(&self) -> &'static str {
        self.status.as_str()
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }

    fn updated_at(&self) -> &str {
        &self.updated_at
    }

    fn touch(&mut self, now: &str) {
        self.updated_at = now.to_string();
    }
}
