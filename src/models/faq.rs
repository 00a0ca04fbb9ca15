//! FAQ entry model.

use serde::{Deserialize, Serialize};

use super::{new_id, Entity, Identified, PublishStatus};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Faq {
    pub id: String,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub order: u32,
    #[serde(default)]
    pub status: PublishStatus,
    #[serde(default)]
    pub updated_at: String,
}

impl Identified for Faq {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Faq {
    const STORAGE_KEY: &'static str = "faqs";
    const LABEL: &'static str = "FAQ";
    const LIST_ROUTE: &'static str = "/faq";

    fn blank() -> Self {
        Self {
            id: new_id(),
            question: String::new(),
            answer: String::new(),
            category: "General".to_string(),
            order: 0,
            status: PublishStatus::Draft,
            updated_at: String::new(),
        }
    }

    fn seed() -> Vec<Self> {
        crate::seed::faqs()
    }

    fn title(&self) -> &str {
        &self.question
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.question.as_str(), self.answer.as_str()]
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
