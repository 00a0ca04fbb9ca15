//! Rich menu wizard endpoints.
//!
//! The client holds the menu and the current step; every call sends both and
//! gets the updated wizard back.

use axum::Json;
use serde::{Deserialize, Serialize};

use super::{success, ApiResult};
use crate::editor::rich_menu::{RichMenuWizard, WizardStep};
use crate::models::{MenuAction, RichMenu, RichMenuTemplate, TEMPLATES};

#[derive(Debug, Deserialize)]
pub struct WizardState {
    pub menu: RichMenu,
    #[serde(default)]
    pub step: WizardStep,
}

impl WizardState {
    fn into_wizard(self) -> RichMenuWizard {
        RichMenuWizard::new(self.menu, self.step)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectTemplateRequest {
    #[serde(flatten)]
    pub state: WizardState,
    pub template_id: String,
}

#[derive(Debug, Deserialize)]
pub struct SetActionRequest {
    #[serde(flatten)]
    pub state: WizardState,
    pub area: String,
    pub action: MenuAction,
}

/// Wizard state as the client renders it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardView {
    pub step: WizardStep,
    pub unconfigured_areas: Vec<&'static str>,
    pub menu: RichMenu,
}

impl From<RichMenuWizard> for WizardView {
    fn from(wizard: RichMenuWizard) -> Self {
        Self {
            step: wizard.step(),
            unconfigured_areas: wizard.unconfigured_areas(),
            menu: wizard.into_menu(),
        }
    }
}

/// GET /api/campaigns/rich-menus/templates - Layout catalogue.
pub async fn list_rich_menu_templates() -> ApiResult<&'static [RichMenuTemplate]> {
    success(&TEMPLATES[..])
}

/// POST /api/campaigns/rich-menus/wizard/template - Step 1: bind a layout.
///
/// The returned menu has an empty action mapping.
pub async fn select_rich_menu_template(
    Json(request): Json<SelectTemplateRequest>,
) -> ApiResult<WizardView> {
    let mut wizard = request.state.into_wizard();
    wizard.select_template(&request.template_id)?;
    success(wizard.into())
}

/// POST /api/campaigns/rich-menus/wizard/next - Continue to the action step.
pub async fn next_rich_menu_step(Json(state): Json<WizardState>) -> ApiResult<WizardView> {
    let mut wizard = state.into_wizard();
    wizard.next()?;
    success(wizard.into())
}

/// POST /api/campaigns/rich-menus/wizard/back - Return to template selection.
pub async fn previous_rich_menu_step(Json(state): Json<WizardState>) -> ApiResult<WizardView> {
    let mut wizard = state.into_wizard();
    wizard.back();
    success(wizard.into())
}

/// POST /api/campaigns/rich-menus/wizard/action - Step 2: bind an area's action.
pub async fn set_rich_menu_action(Json(request): Json<SetActionRequest>) -> ApiResult<WizardView> {
    let mut wizard = request.state.into_wizard();
    wizard.set_action(&request.area, request.action)?;
    success(wizard.into())
}
