//! Campaign table endpoint.

use axum::extract::{Query, State};
use serde::Serialize;

use super::{success, ApiResult};
use crate::listing::{ListQuery, Page};
use crate::models::{Campaign, CampaignStatus};
use crate::AppState;

/// One row of the campaign table.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignRow {
    pub id: String,
    pub account_id: String,
    pub title: String,
    pub status: CampaignStatus,
    pub quota: String,
    pub updated_at: String,
}

impl From<Campaign> for CampaignRow {
    fn from(campaign: Campaign) -> Self {
        Self {
            quota: campaign.quota_label(),
            id: campaign.id,
            account_id: campaign.account_id,
            title: campaign.title,
            status: campaign.status,
            updated_at: campaign.updated_at,
        }
    }
}

/// GET /api/campaigns/list - Campaign table rows.
pub async fn list_campaign_rows(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Page<CampaignRow>> {
    let page = state
        .repo
        .list::<Campaign>(&query, state.config.page_size)
        .await?;

    success(Page {
        items: page.items.into_iter().map(CampaignRow::from).collect(),
        page: page.page,
        page_size: page.page_size,
        total: page.total,
        total_pages: page.total_pages,
    })
}
