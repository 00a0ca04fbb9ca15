//! LINE official account model.

use serde::{Deserialize, Serialize};

use super::{new_id, Entity, Identified};

/// Connection state of a LINE account.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum AccountStatus {
    Connected,
    #[default]
    Pending,
    Disconnected,
}

impl AccountStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Connected => "Connected",
            AccountStatus::Pending => "Pending",
            AccountStatus::Disconnected => "Disconnected",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LineAccount {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Public handle such as `@shop`
    #[serde(default)]
    pub basic_id: String,
    #[serde(default)]
    pub channel_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture_url: Option<String>,
    #[serde(default)]
    pub status: AccountStatus,
    #[serde(default)]
    pub updated_at: String,
}

impl Identified for LineAccount {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for LineAccount {
    const STORAGE_KEY: &'static str = "line_accounts";
    const LABEL: &'static str = "LINE account";
    const LIST_ROUTE: &'static str = "/settings";

    fn blank() -> Self {
        Self {
            id: new_id(),
            name: String::new(),
            basic_id: String::new(),
            channel_id: String::new(),
            picture_url: None,
            status: AccountStatus::Pending,
            updated_at: String::new(),
        }
    }

    fn seed() -> Vec<Self> {
        crate::seed::line_accounts()
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.basic_id.as_str()]
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
