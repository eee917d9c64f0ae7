//! View-models for the two catalog pages.

use katalog_artifact::Artifact;
use katalog_core::{Entry, SiteConfig};
use serde::Serialize;

use crate::truncate::{truncate_description, SUMMARY_CHARS};

/// One entry on the listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingCard {
    /// Entry name, shown as the card heading.
    pub name: String,
    /// Link target of the heading.
    pub detail_href: String,
    /// Description, truncated for the listing.
    pub summary: String,
    /// Display image source.
    pub image_reference: String,
    /// QR code encoding the entry's absolute detail address.
    pub artifact: Artifact,
}

impl ListingCard {
    /// Build a card, applying the summary truncation rule.
    pub fn from_entry(entry: &Entry, detail_href: impl Into<String>, artifact: Artifact) -> Self {
        Self {
            name: entry.name.clone(),
            detail_href: detail_href.into(),
            summary: truncate_description(&entry.description, SUMMARY_CHARS).into_owned(),
            image_reference: entry.image_reference.clone(),
            artifact,
        }
    }
}

/// The listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingView {
    /// Header text.
    pub site: SiteConfig,
    /// Cards in display order.
    pub cards: Vec<ListingCard>,
}

/// The detail page of one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailView {
    /// Header text.
    pub site: SiteConfig,
    /// Entry name.
    pub name: String,
    /// Full, untruncated description.
    pub description: String,
    /// Display image source.
    pub image_reference: String,
    /// QR code encoding this page's absolute address.
    pub artifact: Artifact,
    /// Link target back to the listing.
    pub back_href: String,
}

impl DetailView {
    /// Build the detail view of `entry`.
    pub fn from_entry(
        site: SiteConfig,
        entry: &Entry,
        artifact: Artifact,
        back_href: impl Into<String>,
    ) -> Self {
        Self {
            site,
            name: entry.name.clone(),
            description: entry.description.clone(),
            image_reference: entry.image_reference.clone(),
            artifact,
            back_href: back_href.into(),
        }
    }
}
