//! Block editor actions for landing pages.

use serde::Deserialize;

use super::{ordered, DraftAction};
use crate::errors::AppError;
use crate::models::{BlockContent, BlockKind, CarouselSlide, LandingPage};

/// One edit of the page builder, addressed by language and block id.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum PageAction {
    AddLanguage { lang: String },
    RemoveLanguage { lang: String },
    AddBlock { lang: String, kind: BlockKind },
    UpdateBlock {
        lang: String,
        block_id: String,
        content: BlockContent,
    },
    RemoveBlock { lang: String, block_id: String },
    /// Drag-and-drop: drop `source_id` onto `dest_id`.
    MoveBlock {
        lang: String,
        source_id: String,
        dest_id: String,
    },
    AddSlide { lang: String, block_id: String },
    UpdateSlide {
        lang: String,
        block_id: String,
        slide: CarouselSlide,
    },
    RemoveSlide {
        lang: String,
        block_id: String,
        slide_id: String,
    },
    MoveSlideUp {
        lang: String,
        block_id: String,
        index: usize,
    },
    MoveSlideDown {
        lang: String,
        block_id: String,
        index: usize,
    },
}

impl DraftAction<LandingPage> for PageAction {
    fn apply(self, page: &mut LandingPage) -> Result<bool, AppError> {
        match self {
            PageAction::AddLanguage { lang } => Ok(page.add_language(&lang)),
            PageAction::RemoveLanguage { lang } => page.remove_language(&lang).map(|_| true),
            PageAction::AddBlock { lang, kind } => page.add_block(&lang, kind).map(|_| true),
            PageAction::UpdateBlock {
                lang,
                block_id,
                content,
            } => page.update_block(&lang, &block_id, content),
            PageAction::RemoveBlock { lang, block_id } => page.remove_block(&lang, &block_id),
            PageAction::MoveBlock {
                lang,
                source_id,
                dest_id,
            } => page.move_block(&lang, &source_id, &dest_id),
            PageAction::AddSlide { lang, block_id } => {
                let slides = page.carousel_slides_mut(&lang, &block_id)?;
                ordered::add(slides, CarouselSlide::new());
                Ok(true)
            }
            PageAction::UpdateSlide {
                lang,
                block_id,
                slide,
            } => {
                let slides = page.carousel_slides_mut(&lang, &block_id)?;
                let id = slide.id.clone();
                Ok(ordered::update(slides, &id, |s| *s = slide))
            }
            PageAction::RemoveSlide {
                lang,
                block_id,
                slide_id,
            } => {
                let slides = page.carousel_slides_mut(&lang, &block_id)?;
                Ok(ordered::remove(slides, &slide_id))
            }
            PageAction::MoveSlideUp {
                lang,
                block_id,
                index,
            } => {
                let slides = page.carousel_slides_mut(&lang, &block_id)?;
                Ok(ordered::move_up(slides, index))
            }
            PageAction::MoveSlideDown {
                lang,
                block_id,
                index,
            } => {
                let slides = page.carousel_slides_mut(&lang, &block_id)?;
                Ok(ordered::move_down(slides, index))
            }
        }
    }
}
