//! Data models for the CMS admin backend.
//!
//! Every content type is a plain record owned by its collection. Links between
//! records (campaign -> account, banner -> campaign) are identifier strings only.

mod account;
mod banner;
mod campaign;
mod category;
mod common;
mod email_template;
mod faq;
mod form;
mod page;
mod partner;
mod rich_menu;

pub use account::*;
pub use banner::*;
pub use campaign::*;
pub use category::*;
pub use common::*;
pub use email_template::*;
pub use faq::*;
pub use form::*;
pub use page::*;
pub use partner::*;
pub use rich_menu::*;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// A record addressable by a string identifier inside an ordered collection.
pub trait Identified {
    fn id(&self) -> &str;
}

/// A top-level content type stored as one JSON array under a fixed key.
pub trait Entity: Identified + Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Store key holding the whole collection.
    const STORAGE_KEY: &'static str;
    /// Human readable name used in messages.
    const LABEL: &'static str;
    /// Client route the editor returns to after a save.
    const LIST_ROUTE: &'static str;

    /// A fresh record with a new identifier and draft-like status.
    fn blank() -> Self;

    /// Sample records bundled with the application.
    fn seed() -> Vec<Self>;

    /// Primary display text, used for title sorting.
    fn title(&self) -> &str;

    /// Fields matched by the list search box.
    fn search_fields(&self) -> Vec<&str>;

    fn status_key(&self) -> &'static str;

    fn account_id(&self) -> Option<&str> {
        None
    }

    fn category(&self) -> Option<&str> {
        None
    }

    fn updated_at(&self) -> &str;

    /// Stamp the record right before it is written.
    fn touch(&mut self, now: &str);
}
