//! Email template model.

use serde::{Deserialize, Serialize};

use super::{new_id, ActivityStatus, Entity, Identified};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmailTemplate {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub body_html: String,
    #[serde(default)]
    pub category: String,
    /// Placeholder names usable as `{{name}}` in subject and body
    #[serde(default)]
    pub variables: Vec<String>,
    #[serde(default)]
    pub status: ActivityStatus,
    #[serde(default)]
    pub updated_at: String,
}

impl Identified for EmailTemplate {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for EmailTemplate {
    const STORAGE_KEY: &'static str = "email_templates";
    const LABEL: &'static str = "Email template";
    const LIST_ROUTE: &'static str = "/email-templates";

    fn blank() -> Self {
        Self {
            id: new_id(),
            name: String::new(),
            subject: String::new(),
            body_html: String::new(),
            category: String::new(),
            variables: Vec::new(),
            status: ActivityStatus::Inactive,
            updated_at: String::new(),
        }
    }

    fn seed() -> Vec<Self> {
        crate::seed::email_templates()
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.subject.as_str()]
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
