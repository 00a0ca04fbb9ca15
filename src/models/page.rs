//! Landing page model with multi-language content and ordered blocks.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{new_id, Entity, Identified, PublishStatus, SeoMetadata};
use crate::editor::ordered;
use crate::errors::AppError;

/// Language every page must carry content for.
pub const DEFAULT_LANGUAGE: &str = "th";

/// One slide of a carousel block.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CarouselSlide {
    pub id: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub caption: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl CarouselSlide {
    pub fn new() -> Self {
        Self {
            id: new_id(),
            ..Default::default()
        }
    }
}

impl Identified for CarouselSlide {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Block type tag.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Hero,
    Text,
    Image,
    Form,
    Video,
    RichText,
    Carousel,
    Custom,
}

/// Typed payload of a content block, keyed by its `type` tag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum BlockContent {
    Hero {
        #[serde(default)]
        title: String,
        #[serde(default)]
        subtitle: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        background_image: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        cta_text: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        cta_link: Option<String>,
    },
    Text {
        #[serde(default)]
        body: String,
    },
    Image {
        #[serde(default)]
        url: String,
        #[serde(default)]
        alt: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
    },
    Form {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        form_id: Option<String>,
    },
    Video {
        #[serde(default)]
        url: String,
        #[serde(default)]
        autoplay: bool,
    },
    RichText {
        #[serde(default)]
        html: String,
    },
    Carousel {
        #[serde(default)]
        slides: Vec<CarouselSlide>,
        #[serde(default)]
        autoplay: bool,
    },
    Custom {
        #[serde(default)]
        html: String,
        #[serde(default)]
        css: String,
    },
}

impl BlockContent {
    /// Empty payload for a freshly added block.
    pub fn empty(kind: BlockKind) -> Self {
        match kind {
            BlockKind::Hero => BlockContent::Hero {
                title: String::new(),
                subtitle: String::new(),
                background_image: None,
                cta_text: None,
                cta_link: None,
            },
            BlockKind::Text => BlockContent::Text {
                body: String::new(),
            },
            BlockKind::Image => BlockContent::Image {
                url: String::new(),
                alt: String::new(),
                caption: None,
            },
            BlockKind::Form => BlockContent::Form { form_id: None },
            BlockKind::Video => BlockContent::Video {
                url: String::new(),
                autoplay: false,
            },
            BlockKind::RichText => BlockContent::RichText {
                html: String::new(),
            },
            BlockKind::Carousel => BlockContent::Carousel {
                slides: Vec::new(),
                autoplay: true,
            },
            BlockKind::Custom => BlockContent::Custom {
                html: String::new(),
                css: String::new(),
            },
        }
    }

    pub fn kind(&self) -> BlockKind {
        match self {
            BlockContent::Hero { .. } => BlockKind::Hero,
            BlockContent::Text { .. } => BlockKind::Text,
            BlockContent::Image { .. } => BlockKind::Image,
            BlockContent::Form { .. } => BlockKind::Form,
            BlockContent::Video { .. } => BlockKind::Video,
            BlockContent::RichText { .. } => BlockKind::RichText,
            BlockContent::Carousel { .. } => BlockKind::Carousel,
            BlockContent::Custom { .. } => BlockKind::Custom,
        }
    }

    pub fn slides_mut(&mut self) -> Option<&mut Vec<CarouselSlide>> {
        match self {
            BlockContent::Carousel { slides, .. } => Some(slides),
            _ => None,
        }
    }
}

/// A content block within a page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComponentData {
    pub id: String,
    pub content: BlockContent,
}

impl ComponentData {
    pub fn new(kind: BlockKind) -> Self {
        Self {
            id: new_id(),
            content: BlockContent::empty(kind),
        }
    }
}

impl Identified for ComponentData {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Page content for one language.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageContent {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub seo: SeoMetadata,
    #[serde(default)]
    pub blocks: Vec<ComponentData>,
}

/// Entry of the append-only revision history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Revision {
    pub date: String,
    pub note: String,
}

/// A landing page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LandingPage {
    pub id: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub status: PublishStatus,
    pub default_language: String,
    pub contents: BTreeMap<String, PageContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unpublish_at: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub category_values: BTreeMap<String, String>,
    #[serde(default)]
    pub revisions: Vec<Revision>,
    #[serde(default)]
    pub updated_at: String,
}

impl LandingPage {
    pub fn content(&self, lang: &str) -> Option<&PageContent> {
        self.contents.get(lang)
    }

    fn content_mut(&mut self, lang: &str) -> Result<&mut PageContent, AppError> {
        self.contents
            .get_mut(lang)
            .ok_or_else(|| AppError::NotFound(format!("Language {} not found", lang)))
    }

    /// Add an empty content entry. Returns false when the language already exists.
    pub fn add_language(&mut self, lang: &str) -> bool {
        if self.contents.contains_key(lang) {
            return false;
        }
        self.contents
            .insert(lang.to_string(), PageContent::default());
        true
    }

    /// Drop a translation. The default language always stays.
    pub fn remove_language(&mut self, lang: &str) -> Result<(), AppError> {
        if lang == DEFAULT_LANGUAGE {
            return Err(AppError::Validation(format!(
                "Default language {} cannot be removed",
                lang
            )));
        }
        self.contents
            .remove(lang)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Language {} not found", lang)))
    }

    /// Pin the default language and restore its content if a client dropped it.
    pub fn ensure_default_language(&mut self) {
        if self.default_language != DEFAULT_LANGUAGE {
            self.default_language = DEFAULT_LANGUAGE.to_string();
        }
        self.contents
            .entry(DEFAULT_LANGUAGE.to_string())
            .or_default();
    }

    pub fn add_block(&mut self, lang: &str, kind: BlockKind) -> Result<&ComponentData, AppError> {
        let content = self.content_mut(lang)?;
        Ok(ordered::add(&mut content.blocks, ComponentData::new(kind)))
    }

    /// Replace a block's payload. A block keeps the type it was created with.
    pub fn update_block(
        &mut self,
        lang: &str,
        block_id: &str,
        block: BlockContent,
    ) -> Result<bool, AppError> {
        let content = self.content_mut(lang)?;
        let Some(existing) = content.blocks.iter_mut().find(|b| b.id == block_id) else {
            return Ok(false);
        };
        if existing.content.kind() != block.kind() {
            return Err(AppError::Validation(format!(
                "Block {} cannot change its type",
                block_id
            )));
        }
        existing.content = block;
        Ok(true)
    }

    pub fn remove_block(&mut self, lang: &str, block_id: &str) -> Result<bool, AppError> {
        let content = self.content_mut(lang)?;
        Ok(ordered::remove(&mut content.blocks, block_id))
    }

    /// Drag-and-drop reorder of blocks within one language.
    pub fn move_block(
        &mut self,
        lang: &str,
        source_id: &str,
        dest_id: &str,
    ) -> Result<bool, AppError> {
        let content = self.content_mut(lang)?;
        Ok(ordered::move_to(&mut content.blocks, source_id, dest_id))
    }

    /// Slides of a carousel block, for use with the ordered list helpers.
    pub fn carousel_slides_mut(
        &mut self,
        lang: &str,
        block_id: &str,
    ) -> Result<&mut Vec<CarouselSlide>, AppError> {
        let content = self.content_mut(lang)?;
        let block = content
            .blocks
            .iter_mut()
            .find(|b| b.id == block_id)
            .ok_or_else(|| AppError::NotFound(format!("Block {} not found", block_id)))?;
        block
            .content
            .slides_mut()
            .ok_or_else(|| AppError::Validation(format!("Block {} is not a carousel", block_id)))
    }

    pub fn record_revision(&mut self, date: &str, note: impl Into<String>) {
        self.revisions.push(Revision {
            date: date.to_string(),
            note: note.into(),
        });
    }
}

impl Identified for LandingPage {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for LandingPage {
    const STORAGE_KEY: &'static str = "pages";
    const LABEL: &'static str = "Page";
    const LIST_ROUTE: &'static str = "/pages";

    fn blank() -> Self {
        let mut contents = BTreeMap::new();
        contents.insert(DEFAULT_LANGUAGE.to_string(), PageContent::default());
        Self {
            id: new_id(),
            slug: String::new(),
            status: PublishStatus::Draft,
            default_language: DEFAULT_LANGUAGE.to_string(),
            contents,
            publish_at: None,
            unpublish_at: None,
            tags: Vec::new(),
            category_values: BTreeMap::new(),
            revisions: Vec::new(),
            updated_at: String::new(),
        }
    }

    fn seed() -> Vec<Self> {
        crate::seed::pages()
    }

    fn title(&self) -> &str {
        self.content(&self.default_language)
            .map(|c| c.title.as_str())
            .unwrap_or("")
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.slug.as_str()];
        fields.extend(self.contents.values().map(|c| c.title.as_str()));
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }

    fn status_key(&self) -> &'static str {
        self.status.as_str()
    }

    fn updated_at(&self) -> &str {
        &self.updated_at
    }

    fn touch(&mut self, now: &str) {
        self.ensure_default_language();
        let note = if self.revisions.is_empty() {
            "Created"
        } else {
            "Updated"
        };
        self.record_revision(now, note);
        self.updated_at = now.to_string();
    }
}
