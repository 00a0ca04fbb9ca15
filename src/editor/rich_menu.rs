//! Two-step rich menu wizard: pick a layout, then bind an action to each area.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{find_template, MenuAction, RichMenu, RichMenuTemplate};

const TEMPLATE_REQUIRED: &str = "Select a template before configuring actions";

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum WizardStep {
    #[default]
    SelectTemplate,
    ConfigureActions,
}

#[derive(Debug, Clone)]
pub struct RichMenuWizard {
    menu: RichMenu,
    step: WizardStep,
}

/// Bind `menu` to a template. Previously configured actions are always dropped,
/// even when the same template is picked again.
pub fn apply_template(
    menu: &mut RichMenu,
    template_id: &str,
) -> Result<&'static RichMenuTemplate, AppError> {
    let template = find_template(template_id).ok_or_else(|| {
        AppError::Validation(format!("Unknown rich menu template {}", template_id))
    })?;

    menu.template_id = Some(template.id.to_string());
    menu.size = template.size;
    menu.actions = BTreeMap::new();
    Ok(template)
}

/// Set the action of one area declared by the menu's template.
pub fn apply_action(menu: &mut RichMenu, area: &str, action: MenuAction) -> Result<(), AppError> {
    let template = menu
        .template()
        .ok_or_else(|| AppError::Validation(TEMPLATE_REQUIRED.to_string()))?;

    if !template.has_area(area) {
        return Err(AppError::Validation(format!(
            "Template {} has no area {}",
            template.id, area
        )));
    }

    menu.actions.insert(area.to_string(), action);
    Ok(())
}

impl RichMenuWizard {
    /// Resume the wizard at `step`. Without a template only the first step is
    /// reachable.
    pub fn new(menu: RichMenu, step: WizardStep) -> Self {
        let step = match menu.template() {
            Some(_) => step,
            None => WizardStep::SelectTemplate,
        };
        Self { menu, step }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn into_menu(self) -> RichMenu {
        self.menu
    }

    pub fn select_template(
        &mut self,
        template_id: &str,
    ) -> Result<&'static RichMenuTemplate, AppError> {
        apply_template(&mut self.menu, template_id)
    }

    /// Move to the action step. Requires a selected template.
    pub fn next(&mut self) -> Result<(), AppError> {
        if self.menu.template().is_none() {
            return Err(AppError::Validation(TEMPLATE_REQUIRED.to_string()));
        }
        self.step = WizardStep::ConfigureActions;
        Ok(())
    }

    pub fn back(&mut self) {
        self.step = WizardStep::SelectTemplate;
    }

    pub fn set_action(&mut self, area: &str, action: MenuAction) -> Result<(), AppError> {
        apply_action(&mut self.menu, area, action)
    }

    /// Declared areas of the current template that still have no action.
    pub fn unconfigured_areas(&self) -> Vec<&'static str> {
        self.menu
            .template()
            .map(|t| {
                t.areas
                    .iter()
                    .copied()
                    .filter(|area| !self.menu.actions.contains_key(*area))
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActionType, Entity, MenuSize};

    fn uri(data: &str) -> MenuAction {
        MenuAction {
            action_type: ActionType::Uri,
            data: data.to_string(),
        }
    }

    #[test]
    fn test_switching_template_resets_actions() {
        let mut wizard = RichMenuWizard::new(RichMenu::blank(), WizardStep::default());
        wizard.select_template("large-6").unwrap();
        wizard.next().unwrap();
        wizard.set_action("A", uri("https://a.example")).unwrap();
        wizard.set_action("F", uri("https://f.example")).unwrap();
        assert_eq!(wizard.unconfigured_areas(), vec!["B", "C", "D", "E"]);

        wizard.back();
        wizard.select_template("compact-2").unwrap();
        assert_eq!(wizard.unconfigured_areas(), vec!["A", "B"]);
        let menu = wizard.into_menu();
        assert!(menu.actions.is_empty());
        assert_eq!(menu.size, MenuSize::Compact);
    }

    #[test]
    fn test_reselecting_same_template_also_resets() {
        let mut menu = RichMenu::blank();
        apply_template(&mut menu, "large-4").unwrap();
        apply_action(&mut menu, "B", uri("x")).unwrap();
        apply_template(&mut menu, "large-4").unwrap();
        assert!(menu.actions.is_empty());
    }

    #[test]
    fn test_next_requires_template() {
        let mut wizard = RichMenuWizard::new(RichMenu::blank(), WizardStep::default());
        assert!(wizard.next().is_err());
        assert_eq!(wizard.step(), WizardStep::SelectTemplate);
        wizard.select_template("large-1").unwrap();
        wizard.next().unwrap();
        assert_eq!(wizard.step(), WizardStep::ConfigureActions);
    }

    #[test]
    fn test_resumed_step_needs_a_template() {
        let blank = RichMenuWizard::new(RichMenu::blank(), WizardStep::ConfigureActions);
        assert_eq!(blank.step(), WizardStep::SelectTemplate);

        let mut menu = RichMenu::blank();
        apply_template(&mut menu, "compact-1").unwrap();
        let resumed = RichMenuWizard::new(menu, WizardStep::ConfigureActions);
        assert_eq!(resumed.step(), WizardStep::ConfigureActions);
        assert_eq!(resumed.unconfigured_areas(), vec!["A"]);
    }

    #[test]
    fn test_undeclared_area_is_rejected() {
        let mut wizard = RichMenuWizard::new(RichMenu::blank(), WizardStep::default());
        wizard.select_template("large-2-rows").unwrap();
        assert!(wizard.set_action("C", uri("x")).is_err());
        assert!(wizard.select_template("nope").is_err());
        assert_eq!(wizard.unconfigured_areas(), vec!["A", "B"]);

        wizard.set_action("A", uri("x")).unwrap();
        assert_eq!(wizard.unconfigured_areas(), vec!["B"]);
    }
}
