//! Generic content endpoints shared by every content type.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use super::{success, ApiResult};
use crate::editor::{DraftAction, EditOutcome, Editor, SaveOutcome};
use crate::errors::AppError;
use crate::listing::{ListQuery, Page};
use crate::models::Entity;
use crate::AppState;

/// Editor initial state.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorView<T> {
    pub entity: T,
    pub is_new: bool,
}

impl<T: Entity> From<Editor<T>> for EditorView<T> {
    fn from(editor: Editor<T>) -> Self {
        let is_new = editor.is_new();
        Self {
            entity: editor.into_draft(),
            is_new,
        }
    }
}

/// GET /api/{collection} - Filtered, paginated list.
pub async fn list_entities<T: Entity>(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Page<T>> {
    let page = state.repo.list::<T>(&query, state.config.page_size).await?;
    success(page)
}

/// GET /api/{collection}/new - Blank record for the create editor.
pub async fn new_entity<T: Entity>() -> ApiResult<EditorView<T>> {
    success(Editor::<T>::create().into())
}

/// GET /api/{collection}/:id - Editor state for an existing record.
///
/// Unknown ids open a blank record instead of failing.
pub async fn open_entity<T: Entity>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<EditorView<T>> {
    let editor = Editor::<T>::open(&state.repo, Some(&id)).await?;
    success(editor.into())
}

/// POST /api/{collection} - Save a record built by the create editor.
pub async fn create_entity<T: Entity>(
    State(state): State<AppState>,
    Json(entity): Json<T>,
) -> ApiResult<SaveOutcome<T>> {
    let outcome = Editor::from_draft(entity).save(&state.repo).await?;
    success(outcome)
}

/// PUT /api/{collection}/:id - Save the editor's copy of a record.
pub async fn save_entity<T: Entity>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(entity): Json<T>,
) -> ApiResult<SaveOutcome<T>> {
    let editor = Editor::from_draft(entity);
    if editor.draft().id() != id {
        return Err(AppError::BadRequest(format!(
            "Body id {} does not match path id {}",
            editor.draft().id(),
            id
        )));
    }

    let outcome = editor.save(&state.repo).await?;
    success(outcome)
}

/// Working copy plus the action to run against it.
#[derive(Debug, Deserialize)]
pub struct EditRequest<T, A> {
    pub entity: T,
    pub action: A,
}

/// POST /api/{collection}/edit - Apply one editor action to a client copy.
///
/// The store is not touched; the client saves the returned copy.
pub async fn edit_entity<T, A>(Json(request): Json<EditRequest<T, A>>) -> ApiResult<EditOutcome<T>>
where
    T: Entity,
    A: DraftAction<T>,
{
    let mut editor = Editor::from_draft(request.entity);
    let changed = editor.apply(request.action)?;
    success(EditOutcome {
        entity: editor.into_draft(),
        changed,
    })
}

/// DELETE /api/{collection}/:id - Remove a record.
pub async fn delete_entity<T: Entity>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    state.repo.delete::<T>(&id).await?;
    success(())
}
