//! Banner model.

use serde::{Deserialize, Serialize};

use super::{new_id, Entity, Identified, PublishStatus};

/// A promotional banner, optionally pointing at a campaign.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_campaign_id: Option<String>,
    #[serde(default)]
    pub placement: String,
    #[serde(default)]
    pub status: PublishStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_at: Option<String>,
    #[serde(default)]
    pub updated_at: String,
}

impl Identified for Banner {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Banner {
    const STORAGE_KEY: &'static str = "banners";
    const LABEL: &'static str = "Banner";
    const LIST_ROUTE: &'static str = "/campaigns/banners";

    fn blank() -> Self {
        Self {
            id: new_id(),
            title: String::new(),
            image_url: String::new(),
            link_url: None,
            linked_campaign_id: None,
            placement: "home".to_string(),
            status: PublishStatus::Draft,
            start_at: None,
            end_at: None,
            updated_at: String::new(),
        }
    }

    fn seed() -> Vec<Self> {
        crate::seed::banners()
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.placement.as_str()]
    }

    fn status_key(&self) -> &'static str {
        self.status.as_str()
    }

    fn category(&self) -> Option<&str> {
        Some(&self.placement)
    }

    fn updated_at(&self) -> &str {
        &self.updated_at
    }

    fn touch(&mut self, now: &str) {
        self.updated_at = now.to_string();
    }
}
