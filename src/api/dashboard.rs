//! Dashboard summary endpoint.

use std::collections::BTreeMap;

use axum::extract::State;
use serde::Serialize;

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{
    Banner, Campaign, EmailTemplate, Entity, Faq, FormTemplate, LandingPage, Partner, RichMenu,
};
use crate::store::Repository;
use crate::AppState;

/// Record count of one content type, split by status.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityCount {
    pub total: usize,
    pub by_status: BTreeMap<&'static str, usize>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub selected_account_id: Option<String>,
    pub pages: EntityCount,
    pub campaigns: EntityCount,
    pub rich_menus: EntityCount,
    pub banners: EntityCount,
    pub forms: EntityCount,
    pub faqs: EntityCount,
    pub partners: EntityCount,
    pub email_templates: EntityCount,
}

async fn count<T: Entity>(repo: &Repository) -> Result<EntityCount, AppError> {
    let items = repo.merged::<T>().await?;
    let mut by_status = BTreeMap::new();
    for item in &items {
        *by_status.entry(item.status_key()).or_insert(0) += 1;
    }
    Ok(EntityCount {
        total: items.len(),
        by_status,
    })
}

/// GET /api/dashboard - Record counts for the landing screen.
pub async fn get_dashboard(State(state): State<AppState>) -> ApiResult<DashboardSummary> {
    let repo = &state.repo;
    success(DashboardSummary {
        selected_account_id: repo.selected_account_id().await?,
        pages: count::<LandingPage>(repo).await?,
        campaigns: count::<Campaign>(repo).await?,
        rich_menus: count::<RichMenu>(repo).await?,
        banners: count::<Banner>(repo).await?,
        forms: count::<FormTemplate>(repo).await?,
        faqs: count::<Faq>(repo).await?,
        partners: count::<Partner>(repo).await?,
        email_templates: count::<EmailTemplate>(repo).await?,
    })
}
