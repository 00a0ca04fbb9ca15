//! Settings endpoints: overview, selected account, account verification and
//! category options.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use super::{success, ApiResult};
use crate::editor::categories::{BookChange, CategoryAction, CategoryBook};
use crate::editor::SaveOutcome;
use crate::errors::AppError;
use crate::models::{Entity, LineAccount, SystemCategory};
use crate::settings::{verify_account, VerifyAccountRequest};
use crate::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsOverview {
    pub accounts: Vec<LineAccount>,
    pub categories: Vec<SystemCategory>,
    pub selected_account_id: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedAccount {
    pub account_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AddOptionRequest {
    pub label: String,
}

/// GET /api/settings - Accounts, categories and the selected account.
pub async fn get_settings(State(state): State<AppState>) -> ApiResult<SettingsOverview> {
    success(SettingsOverview {
        accounts: state.repo.merged::<LineAccount>().await?,
        categories: state.repo.merged::<SystemCategory>().await?,
        selected_account_id: state.repo.selected_account_id().await?,
    })
}

/// GET /api/settings/selected-account
pub async fn get_selected_account(State(state): State<AppState>) -> ApiResult<SelectedAccount> {
    success(SelectedAccount {
        account_id: state.repo.selected_account_id().await?,
    })
}

/// PUT /api/settings/selected-account
///
/// The id is stored as given; it is not checked against the account list.
pub async fn set_selected_account(
    State(state): State<AppState>,
    Json(request): Json<SelectedAccount>,
) -> ApiResult<SelectedAccount> {
    state
        .repo
        .set_selected_account_id(request.account_id.as_deref())
        .await?;
    success(request)
}

/// POST /api/settings/accounts/verify - Verify credentials and store the account.
pub async fn verify_line_account(
    State(state): State<AppState>,
    Json(request): Json<VerifyAccountRequest>,
) -> ApiResult<SaveOutcome<LineAccount>> {
    let account = verify_account(&request, state.config.verify_delay).await?;
    let entity = state.repo.upsert(account).await?;
    success(SaveOutcome {
        entity,
        redirect: LineAccount::LIST_ROUTE,
    })
}

async fn load_book(state: &AppState) -> Result<CategoryBook, AppError> {
    Ok(CategoryBook::new(state.repo.merged::<SystemCategory>().await?))
}

async fn save_category(
    state: &AppState,
    book: &CategoryBook,
    id: &str,
) -> Result<SystemCategory, AppError> {
    let category = book
        .get(id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))?;
    state.repo.upsert(category).await
}

/// POST /api/settings/categories/:id/options - Append an option.
pub async fn add_category_option(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<AddOptionRequest>,
) -> ApiResult<SystemCategory> {
    let mut book = load_book(&state).await?;
    book.add_option(&id, request.label)?;
    success(save_category(&state, &book, &id).await?)
}

/// DELETE /api/settings/categories/:id/options/:option_id - Remove an option.
pub async fn remove_category_option(
    State(state): State<AppState>,
    Path((id, option_id)): Path<(String, String)>,
) -> ApiResult<SystemCategory> {
    let mut book = load_book(&state).await?;
    if !book.remove_option(&id, &option_id)? {
        return Err(AppError::NotFound(format!("Option {} not found", option_id)));
    }
    success(save_category(&state, &book, &id).await?)
}

/// POST /api/settings/categories/actions - Apply one category list edit.
///
/// The touched category is written back at once; the full list is returned.
pub async fn edit_categories(
    State(state): State<AppState>,
    Json(action): Json<CategoryAction>,
) -> ApiResult<Vec<SystemCategory>> {
    let mut book = load_book(&state).await?;
    match book.apply(action)? {
        BookChange::Saved(id) => {
            save_category(&state, &book, &id).await?;
        }
        BookChange::Removed(id) => state.repo.delete::<SystemCategory>(&id).await?,
        BookChange::Unchanged => {}
    }
    success(state.repo.merged::<SystemCategory>().await?)
}
