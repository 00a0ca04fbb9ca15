//! Rich menu model and the fixed layout template catalogue.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{new_id, Entity, Identified, PublishStatus};

/// Canvas size of a rich menu image.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum MenuSize {
    #[default]
    Large,
    Compact,
}

impl MenuSize {
    /// Pixel width and height.
    pub const fn dimensions(self) -> (u32, u32) {
        match self {
            MenuSize::Large => (2500, 1686),
            MenuSize::Compact => (2500, 843),
        }
    }
}

/// A fixed layout: named areas and their grid-area partition.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RichMenuTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub size: MenuSize,
    pub width: u32,
    pub height: u32,
    pub areas: &'static [&'static str],
    pub grid: &'static str,
}

const fn template(
    id: &'static str,
    name: &'static str,
    size: MenuSize,
    areas: &'static [&'static str],
    grid: &'static str,
) -> RichMenuTemplate {
    let (width, height) = size.dimensions();
    RichMenuTemplate {
        id,
        name,
        size,
        width,
        height,
        areas,
        grid,
    }
}

/// The nine selectable layouts.
pub const TEMPLATES: [RichMenuTemplate; 9] = [
    template(
        "large-6",
        "Large 6 areas",
        MenuSize::Large,
        &["A", "B", "C", "D", "E", "F"],
        "\"A B C\" \"D E F\"",
    ),
    template(
        "large-4",
        "Large 4 areas",
        MenuSize::Large,
        &["A", "B", "C", "D"],
        "\"A B\" \"C D\"",
    ),
    template(
        "large-3-top",
        "Large 1 top, 2 bottom",
        MenuSize::Large,
        &["A", "B", "C"],
        "\"A A\" \"B C\"",
    ),
    template(
        "large-3-left",
        "Large 1 left, 2 right",
        MenuSize::Large,
        &["A", "B", "C"],
        "\"A B\" \"A C\"",
    ),
    template(
        "large-2-rows",
        "Large 2 rows",
        MenuSize::Large,
        &["A", "B"],
        "\"A\" \"B\"",
    ),
    template(
        "large-2-columns",
        "Large 2 columns",
        MenuSize::Large,
        &["A", "B"],
        "\"A B\"",
    ),
    template(
        "large-1",
        "Large single area",
        MenuSize::Large,
        &["A"],
        "\"A\"",
    ),
    template(
        "compact-2",
        "Compact 2 areas",
        MenuSize::Compact,
        &["A", "B"],
        "\"A B\"",
    ),
    template(
        "compact-1",
        "Compact single area",
        MenuSize::Compact,
        &["A"],
        "\"A\"",
    ),
];

pub fn find_template(id: &str) -> Option<&'static RichMenuTemplate> {
    TEMPLATES.iter().find(|t| t.id == id)
}

impl RichMenuTemplate {
    pub fn has_area(&self, area: &str) -> bool {
        self.areas.contains(&area)
    }
}

/// What tapping an area does.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    #[default]
    Uri,
    Message,
    Postback,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct MenuAction {
    #[serde(rename = "type")]
    pub action_type: ActionType,
    #[serde(default)]
    pub data: String,
}

/// A rich menu bound to a LINE account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RichMenu {
    pub id: String,
    #[serde(default)]
    pub account_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub chat_bar_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    #[serde(default)]
    pub size: MenuSize,
    #[serde(default)]
    pub actions: BTreeMap<String, MenuAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub status: PublishStatus,
    #[serde(default)]
    pub updated_at: String,
}

impl RichMenu {
    pub fn template(&self) -> Option<&'static RichMenuTemplate> {
        self.template_id.as_deref().and_then(find_template)
    }
}

impl Identified for RichMenu {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for RichMenu {
    const STORAGE_KEY: &'static str = "rich_menus";
    const LABEL: &'static str = "Rich menu";
    const LIST_ROUTE: &'static str = "/campaigns/rich-menus";

    fn blank() -> Self {
        Self {
            id: new_id(),
            account_id: String::new(),
            name: String::new(),
            chat_bar_text: "Menu".to_string(),
            template_id: None,
            size: MenuSize::Large,
            actions: BTreeMap::new(),
            image: None,
            status: PublishStatus::Draft,
            updated_at: String::new(),
        }
    }

    fn seed() -> Vec<Self> {
        crate::seed::rich_menus()
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.chat_bar_text.as_str()]
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_shape() {
        let count = |size: MenuSize| TEMPLATES.iter().filter(|t| t.size == size).count();
        let large = count(MenuSize::Large);
        let compact = count(MenuSize::Compact);
        assert_eq!(large, 7);
        assert_eq!(compact, 2);

        for t in TEMPLATES.iter() {
            assert_eq!((t.width, t.height), t.size.dimensions());
            for area in t.areas {
                assert!(t.grid.contains(area), "{} grid misses {}", t.id, area);
            }
        }
    }

    #[test]
    fn test_template_ids_are_unique() {
        for (i, a) in TEMPLATES.iter().enumerate() {
            for b in TEMPLATES.iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_find_template() {
        assert_eq!(find_template("compact-2").map(|t| t.areas.len()), Some(2));
        assert!(find_template("huge-12").is_none());
    }

    #[test]
    fn test_action_wire_format() {
        let action = MenuAction {
            action_type: ActionType::Postback,
            data: "action=buy".into(),
        };
        assert_eq!(
            serde_json::to_value(&action).unwrap(),
            serde_json::json!({"type": "postback", "data": "action=buy"})
        );
    }
}
