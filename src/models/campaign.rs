//! Campaign model with reward configuration, paragraphs and quota periods.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{new_id, Entity, Identified, SeoMetadata};
use crate::editor::ordered;

/// Campaign lifecycle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum CampaignStatus {
    #[default]
    Draft,
    Published,
    Scheduled,
    Ended,
}

impl CampaignStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignStatus::Draft => "Draft",
            CampaignStatus::Published => "Published",
            CampaignStatus::Scheduled => "Scheduled",
            CampaignStatus::Ended => "Ended",
        }
    }
}

/// How a reward is delivered.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum RewardType {
    #[default]
    OFFLINE,
    ONLINE,
    PHYSICAL,
}

/// When a claimed reward stops being redeemable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpiryPolicy {
    #[default]
    #[serde(rename = "NONE")]
    NoExpiry,
    FixedDate {
        date: String,
    },
    DaysAfterClaim {
        days: u32,
    },
}

/// How redemption codes reach the user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CodeDistribution {
    #[default]
    NoCode,
    PublicCode,
    UniqueCode,
    UniqueLink,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RewardConfig {
    #[serde(default)]
    pub reward_type: RewardType,
    #[serde(default)]
    pub expiry: ExpiryPolicy,
    #[serde(default)]
    pub code_distribution: CodeDistribution,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_code: Option<String>,
}

/// Free-text paragraph of the campaign description.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Paragraph {
    pub id: String,
    #[serde(default)]
    pub text: String,
}

impl Identified for Paragraph {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Quota allotted to one redemption period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuotaPeriod {
    pub id: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub quota_per_period: u32,
    #[serde(default)]
    pub quota_per_user: u32,
}

impl Identified for QuotaPeriod {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A promotional campaign owned by a LINE account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: String,
    #[serde(default)]
    pub account_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub status: CampaignStatus,
    #[serde(default)]
    pub reward: RewardConfig,
    #[serde(default)]
    pub paragraphs: Vec<Paragraph>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_quota: Option<u32>,
    #[serde(default)]
    pub quota_periods: Vec<QuotaPeriod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unpublish_at: Option<String>,
    #[serde(default)]
    pub seo: SeoMetadata,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub category_values: BTreeMap<String, String>,
    #[serde(default)]
    pub updated_at: String,
}

impl Campaign {
    /// Text of the quota column in the campaign list.
    pub fn quota_label(&self) -> String {
        match self.total_quota {
            Some(quota) => quota.to_string(),
            None => "Unlimited".to_string(),
        }
    }

    pub fn add_paragraph(&mut self, text: impl Into<String>) -> &Paragraph {
        ordered::add(
            &mut self.paragraphs,
            Paragraph {
                id: new_id(),
                text: text.into(),
            },
        )
    }

    pub fn update_paragraph(&mut self, id: &str, text: impl Into<String>) -> bool {
        let text = text.into();
        ordered::update(&mut self.paragraphs, id, |p| p.text = text)
    }

    pub fn remove_paragraph(&mut self, id: &str) -> bool {
        ordered::remove(&mut self.paragraphs, id)
    }

    pub fn add_quota_period(
        &mut self,
        date: impl Into<String>,
        quota_per_period: u32,
        quota_per_user: u32,
    ) -> &QuotaPeriod {
        ordered::add(
            &mut self.quota_periods,
            QuotaPeriod {
                id: new_id(),
                date: date.into(),
                quota_per_period,
                quota_per_user,
            },
        )
    }

    pub fn update_quota_period(&mut self, id: &str, change: impl FnOnce(&mut QuotaPeriod)) -> bool {
        ordered::update(&mut self.quota_periods, id, change)
    }

    pub fn remove_quota_period(&mut self, id: &str) -> bool {
        ordered::remove(&mut self.quota_periods, id)
    }
}

impl Identified for Campaign {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Campaign {
    const STORAGE_KEY: &'static str = "campaigns";
    const LABEL: &'static str = "Campaign";
    const LIST_ROUTE: &'static str = "/campaigns/list";

    fn blank() -> Self {
        Self {
            id: new_id(),
            account_id: String::new(),
            title: String::new(),
            description: String::new(),
            image: None,
            status: CampaignStatus::Draft,
            reward: RewardConfig::default(),
            paragraphs: Vec::new(),
            total_quota: None,
            quota_periods: Vec::new(),
            start_at: None,
            end_at: None,
            publish_at: None,
            unpublish_at: None,
            seo: SeoMetadata::default(),
            tags: Vec::new(),
            category_values: BTreeMap::new(),
            updated_at: String::new(),
        }
    }

    fn seed() -> Vec<Self> {
        crate::seed::campaigns()
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.description.as_str()];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }

    fn status_key(&self) -> &'static str {
        self.status.as_str()
    }

    fn account_id(&self) -> Option<&str> {
        Some(&self.account_id)
    }

    fn updated_at(&self) -> &str {
        &self.updated_at
    }

    fn touch(&mut self, now: &str) {
        self.updated_at = now.to_string();
    }
}
