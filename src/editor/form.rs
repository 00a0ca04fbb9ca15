//! Section and field editing for form templates.

use serde::Deserialize;

use super::{ordered, DraftAction};
use crate::errors::AppError;
use crate::models::{FieldType, FormField, FormTemplate};

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum FormAction {
    AddSection {
        #[serde(default)]
        title: String,
    },
    UpdateSection {
        section_id: String,
        #[serde(default)]
        title: String,
        #[serde(default)]
        description: String,
    },
    RemoveSection { section_id: String },
    MoveSectionUp { index: usize },
    MoveSectionDown { index: usize },
    AddField {
        section_id: String,
        #[serde(default)]
        field_type: FieldType,
    },
    UpdateField {
        section_id: String,
        field: FormField,
    },
    RemoveField {
        section_id: String,
        field_id: String,
    },
    MoveFieldUp { section_id: String, index: usize },
    MoveFieldDown { section_id: String, index: usize },
}

impl DraftAction<FormTemplate> for FormAction {
    fn apply(self, form: &mut FormTemplate) -> Result<bool, AppError> {
        match self {
            FormAction::AddSection { title } => {
                form.add_section(title);
                Ok(true)
            }
            FormAction::UpdateSection {
                section_id,
                title,
                description,
            } => Ok(form.update_section(&section_id, |s| {
                s.title = title;
                s.description = description;
            })),
            FormAction::RemoveSection { section_id } => Ok(form.remove_section(&section_id)),
            FormAction::MoveSectionUp { index } => Ok(ordered::move_up(&mut form.sections, index)),
            FormAction::MoveSectionDown { index } => {
                Ok(ordered::move_down(&mut form.sections, index))
            }
            FormAction::AddField {
                section_id,
                field_type,
            } => form.add_field(&section_id, field_type).map(|_| true),
            FormAction::UpdateField { section_id, field } => form.update_field(&section_id, field),
            FormAction::RemoveField {
                section_id,
                field_id,
            } => form.remove_field(&section_id, &field_id),
            FormAction::MoveFieldUp { section_id, index } => {
                Ok(ordered::move_up(form.fields_mut(&section_id)?, index))
            }
            FormAction::MoveFieldDown { section_id, index } => {
                Ok(ordered::move_down(form.fields_mut(&section_id)?, index))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Entity;
    use serde_json::json;

    fn action(value: serde_json::Value) -> FormAction {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_section_and_field_actions() {
        let mut form = FormTemplate::blank();
        let add_section = action(json!({"type": "addSection", "title": "Contact"}));
        assert!(add_section.apply(&mut form).unwrap());
        let section = form.sections[0].id.clone();

        for field_type in ["email", "select"] {
            let add = json!({"type": "addField", "sectionId": section, "fieldType": field_type});
            assert!(action(add).apply(&mut form).unwrap());
        }
        assert_eq!(form.sections[0].fields.len(), 2);

        let up = action(json!({"type": "moveFieldUp", "sectionId": section, "index": 1}));
        assert!(up.apply(&mut form).unwrap());
        assert_eq!(form.sections[0].fields[0].field_type, FieldType::Select);

        let field_id = form.sections[0].fields[1].id.clone();
        let remove = FormAction::RemoveField {
            section_id: section.clone(),
            field_id,
        };
        assert!(remove.apply(&mut form).unwrap());
        assert_eq!(form.sections[0].fields.len(), 1);
    }

    #[test]
    fn test_unknown_section_is_an_error() {
        let mut form = FormTemplate::blank();
        let add = action(json!({"type": "addField", "sectionId": "missing"}));
        assert!(matches!(add.apply(&mut form), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_update_section_text() {
        let mut form = FormTemplate::blank();
        form.add_section("Draft title");
        let section_id = form.sections[0].id.clone();
        let update = FormAction::UpdateSection {
            section_id,
            title: "About you".into(),
            description: "Tell us more".into(),
        };
        assert!(update.apply(&mut form).unwrap());
        assert_eq!(form.sections[0].title, "About you");
        assert_eq!(form.sections[0].description, "Tell us more");
    }
}
