//! Form template model: sections holding ordered fields.

use serde::{Deserialize, Serialize};

use super::{new_id, Entity, Identified};
use crate::editor::ordered;
use crate::errors::AppError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Draft,
    Active,
    Archived,
}

impl FormStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormStatus::Draft => "Draft",
            FormStatus::Active => "Active",
            FormStatus::Archived => "Archived",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[default]
    Text,
    Email,
    Phone,
    Number,
    Textarea,
    Select,
    Checkbox,
    Radio,
    Date,
}

impl FieldType {
    /// Whether the field offers a fixed list of choices.
    pub fn has_options(&self) -> bool {
        matches!(
            self,
            FieldType::Select | FieldType::Checkbox | FieldType::Radio
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub field_type: FieldType,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub options: Vec<String>,
}

impl FormField {
    pub fn new(field_type: FieldType) -> Self {
        Self {
            id: new_id(),
            label: String::new(),
            field_type,
            required: false,
            placeholder: None,
            options: Vec::new(),
        }
    }
}

impl Identified for FormField {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormSection {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub fields: Vec<FormField>,
}

impl Identified for FormSection {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FormTemplate {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: FormStatus,
    #[serde(default)]
    pub sections: Vec<FormSection>,
    #[serde(default)]
    pub submit_label: String,
    #[serde(default)]
    pub updated_at: String,
}

impl FormTemplate {
    pub fn add_section(&mut self, title: impl Into<String>) -> &FormSection {
        ordered::add(
            &mut self.sections,
            FormSection {
                id: new_id(),
                title: title.into(),
                description: String::new(),
                fields: Vec::new(),
            },
        )
    }

    pub fn update_section(&mut self, id: &str, change: impl FnOnce(&mut FormSection)) -> bool {
        ordered::update(&mut self.sections, id, change)
    }

    pub fn remove_section(&mut self, id: &str) -> bool {
        ordered::remove(&mut self.sections, id)
    }

    /// Fields of one section, for use with the ordered list helpers.
    pub fn fields_mut(&mut self, section_id: &str) -> Result<&mut Vec<FormField>, AppError> {
        self.sections
            .iter_mut()
            .find(|s| s.id == section_id)
            .map(|s| &mut s.fields)
            .ok_or_else(|| AppError::NotFound(format!("Section {} not found", section_id)))
    }

    pub fn add_field(
        &mut self,
        section_id: &str,
        field_type: FieldType,
    ) -> Result<&FormField, AppError> {
        let fields = self.fields_mut(section_id)?;
        Ok(ordered::add(fields, FormField::new(field_type)))
    }

    /// Replace a field. Types without a choice list keep no options.
    pub fn update_field(
        &mut self,
        section_id: &str,
        mut field: FormField,
    ) -> Result<bool, AppError> {
        if !field.field_type.has_options() {
            field.options.clear();
        }
        let fields = self.fields_mut(section_id)?;
        let id = field.id.clone();
        Ok(ordered::update(fields, &id, |f| *f = field))
    }

    pub fn remove_field(&mut self, section_id: &str, field_id: &str) -> Result<bool, AppError> {
        let fields = self.fields_mut(section_id)?;
        Ok(ordered::remove(fields, field_id))
    }
}

impl Identified for FormTemplate {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for FormTemplate {
    const STORAGE_KEY: &'static str = "forms";
    const LABEL: &'static str = "Form";
    const LIST_ROUTE: &'static str = "/forms";

    fn blank() -> Self {
        Self {
            id: new_id(),
            name: String::new(),
            description: String::new(),
            status: FormStatus::Draft,
            sections: Vec::new(),
            submit_label: "Submit".to_string(),
            updated_at: String::new(),
        }
    }

    fn seed() -> Vec<Self> {
        crate::seed::forms()
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_and_fields() {
        let mut form = FormTemplate::blank();
        let contact = form.add_section("Contact").id.clone();
        let extra = form.add_section("Extra").id.clone();

        let email = form
            .add_field(&contact, FieldType::Email)
            .unwrap()
            .id
            .clone();
        form.add_field(&contact, FieldType::Phone).unwrap();
        assert_eq!(form.sections[0].fields.len(), 2);

        let fields = form.fields_mut(&contact).unwrap();
        assert!(ordered::update(fields, &email, |f| f.required = true));
        assert!(ordered::move_down(fields, 0));
        assert_eq!(fields[1].id, email);
        assert!(fields[1].required);

        assert!(form.add_field("missing", FieldType::Text).is_err());
        assert!(form.remove_section(&extra));
        assert_eq!(form.sections.len(), 1);
    }

    #[test]
    fn test_choice_field_types() {
        assert!(FieldType::Radio.has_options());
        assert!(!FieldType::Email.has_options());
    }

    #[test]
    fn test_update_field_drops_options_of_plain_types() {
        let mut form = FormTemplate::blank();
        let section = form.add_section("Survey").id.clone();
        let mut field = form.add_field(&section, FieldType::Select).unwrap().clone();
        field.options = vec!["Yes".into(), "No".into()];
        assert!(form.update_field(&section, field.clone()).unwrap());
        assert_eq!(form.sections[0].fields[0].options.len(), 2);

        field.field_type = FieldType::Text;
        assert!(form.update_field(&section, field).unwrap());
        assert!(form.sections[0].fields[0].options.is_empty());

        assert!(!form.remove_field(&section, "missing").unwrap());
        assert!(form.remove_field("missing", "x").is_err());
    }
}
