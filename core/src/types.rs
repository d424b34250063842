//! Content records mirrored from the content store.
//!
//! # Design
//! Records are read-only projections. Field names follow the store's JSON
//! (snake_case attributes, camelCase system fields). Schema drift between
//! the REST and GraphQL iterations of the site is absorbed with serde
//! aliases rather than duplicate types. Media lists tolerate `null`.

use serde::{Deserialize, Deserializer, Serialize};

use crate::rich_text::RichText;

/// Availability of a puppy or stud.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Availability {
    Available,
    Reserved,
    Sold,
    Pending,
    Busy,
    #[serde(other)]
    Unknown,
}

impl Availability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::Available => "Available",
            Availability::Reserved => "Reserved",
            Availability::Sold => "Sold",
            Availability::Pending => "Pending",
            Availability::Busy => "Busy",
            Availability::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    #[serde(other)]
    Unknown,
}

/// One resized rendition of an uploaded image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaFormat {
    pub url: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

/// Named renditions generated by the store for images.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaFormats {
    pub thumbnail: Option<MediaFormat>,
    pub small: Option<MediaFormat>,
    pub medium: Option<MediaFormat>,
    pub large: Option<MediaFormat>,
}

/// An uploaded image or video.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Media {
    pub id: Option<u64>,
    #[serde(rename = "documentId")]
    pub document_id: Option<String>,
    pub name: Option<String>,
    pub url: String,
    /// MIME type, e.g. `image/jpeg` or `video/mp4`. Missing in older
    /// GraphQL selections.
    pub mime: Option<String>,
    #[serde(rename = "alternativeText")]
    pub alternative_text: Option<String>,
    pub caption: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// Size in kilobytes as reported by the store.
    pub size: Option<f64>,
    #[serde(deserialize_with = "nullable")]
    pub formats: MediaFormats,
    pub provider: Option<String>,
}

/// A puppy listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Puppy {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(rename = "documentId")]
    pub document_id: String,
    pub name: String,
    #[serde(default)]
    pub status: Option<Availability>,
    /// Misspelled `avaliable` key from an older content model. Kept as its
    /// own field so a record carrying both keys still deserializes.
    #[serde(default, rename = "avaliable", skip_serializing_if = "Option::is_none")]
    pub legacy_status: Option<Availability>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub age: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub description: Option<RichText>,
    #[serde(default)]
    pub parents: Option<String>,
    #[serde(default)]
    pub healthrecords: Option<RichText>,
    #[serde(default, deserialize_with = "nullable")]
    pub images: Vec<Media>,
    #[serde(default, deserialize_with = "nullable")]
    pub page_gallery: Vec<Media>,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<String>,
    #[serde(default, rename = "updatedAt")]
    pub updated_at: Option<String>,
    #[serde(default, rename = "publishedAt")]
    pub published_at: Option<String>,
}

impl Puppy {
    /// `status`, else the legacy `avaliable` key.
    pub fn current_status(&self) -> Option<Availability> {
        self.status.or(self.legacy_status)
    }

    pub fn is_available(&self) -> bool {
        self.current_status() == Some(Availability::Available)
    }
}

/// A stud listing. Older schemas call `availability` `status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stud {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(rename = "documentId")]
    pub document_id: String,
    pub name: String,
    #[serde(default)]
    pub age: Option<String>,
    #[serde(default)]
    pub availability: Option<Availability>,
    /// `status` key from the older stud model.
    #[serde(default, rename = "status", skip_serializing_if = "Option::is_none")]
    pub legacy_status: Option<Availability>,
    #[serde(default)]
    pub fee: Option<f64>,
    #[serde(default)]
    pub description: Option<RichText>,
    #[serde(default)]
    pub bloodlines: Option<String>,
    #[serde(default)]
    pub specialties: Option<String>,
    #[serde(default)]
    pub individuality: Option<RichText>,
    #[serde(default, deserialize_with = "nullable")]
    pub images: Vec<Media>,
    #[serde(default, deserialize_with = "nullable")]
    pub page_gallery: Vec<Media>,
    #[serde(default)]
    pub background_video: Option<Media>,
    #[serde(default)]
    pub background_color: Option<String>,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<String>,
    #[serde(default, rename = "updatedAt")]
    pub updated_at: Option<String>,
    #[serde(default, rename = "publishedAt")]
    pub published_at: Option<String>,
}

impl Stud {
    /// `availability`, else the legacy `status` key.
    pub fn current_availability(&self) -> Option<Availability> {
        self.availability.or(self.legacy_status)
    }

    pub fn is_available(&self) -> bool {
        self.current_availability() == Some(Availability::Available)
    }
}

/// Homepage singleton.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Homepage {
    pub id: Option<u64>,
    pub hero_headline: Option<String>,
    pub hero_subheadline: Option<String>,
    pub hero_video: Option<Media>,
    pub hero_poster_image: Option<Media>,
    pub featured_section_title: Option<String>,
    pub featured_section_description: Option<RichText>,
}

/// Breeding-program singleton. Most fields were added over time by editors
/// and are optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreedingProgram {
    pub id: Option<u64>,
    #[serde(rename = "documentId")]
    pub document_id: Option<String>,
    pub title: Option<String>,
    pub subtext: Option<RichText>,
    pub description: Option<RichText>,
    pub description_long: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub hero_media: Vec<Media>,
    #[serde(rename = "Featured_IMAGE", deserialize_with = "one_or_many")]
    pub featured_image: Vec<Media>,
    #[serde(deserialize_with = "nullable")]
    pub photo_gallery: Vec<Media>,
    pub partnership_note: Option<String>,
    pub partnership_gallery_title: Option<String>,
    pub partnership_gallery_description: Option<RichText>,
    pub partnership_featured_title: Option<String>,
    pub partnership_highlights_title: Option<String>,
    pub partnership_highlights_description: Option<String>,
    pub partnership_legacy_title: Option<String>,
    pub partnership_legacy_description: Option<RichText>,
    pub partnership_brand_name: Option<String>,
    pub partnership_theme_enabled: Option<bool>,
    pub partnership_featured_main_title: Option<String>,
    pub partnership_featured_brand_line: Option<String>,
    pub partnership_featured_tagline: Option<String>,
    pub partnership_coming_soon_message: Option<String>,
}

impl BreedingProgram {
    /// First hero media item, used as the page background.
    pub fn hero(&self) -> Option<&Media> {
        self.hero_media.first()
    }
}

/// One entry of the photo gallery.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryItem {
    pub id: Option<u64>,
    #[serde(rename = "documentId")]
    pub document_id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<Media>,
    pub alt_text: Option<String>,
    pub order: i64,
}

/// Shared shape of the privacy policy and terms of service singletons.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegalDocument {
    pub id: Option<u64>,
    #[serde(rename = "documentId")]
    pub document_id: Option<String>,
    pub title: Option<String>,
    pub content: Option<RichText>,
    pub company_logo: Option<Media>,
    #[serde(rename = "lastupdated")]
    pub last_updated: Option<String>,
}

pub type PrivacyPolicy = LegalDocument;
pub type TermsOfService = LegalDocument;

/// Logo shown in the site header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteLogo {
    pub url: String,
    pub alt: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, rename = "pageSize", skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(default, rename = "pageCount", skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u32>,
    #[serde(default)]
    pub total: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

/// A page of records plus paging metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Collection<T> {
    #[serde(default, deserialize_with = "nullable")]
    pub data: Vec<T>,
    #[serde(default)]
    pub meta: Meta,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Collection<T> {
    /// `{data: [], meta: {pagination: {total: 0}}}`.
    pub fn empty() -> Self {
        Self::counted(Vec::new())
    }

    /// Collection whose total is the number of records held.
    pub fn counted(data: Vec<T>) -> Self {
        let total = data.len() as u64;
        Self {
            data,
            meta: Meta { pagination: Some(Pagination { total, ..Pagination::default() }) },
        }
    }

    pub fn total(&self) -> u64 {
        self.meta.pagination.as_ref().map_or(self.data.len() as u64, |p| p.total)
    }

    /// Keep records matching `keep`. The total is recomputed only when
    /// something was dropped, so server paging totals survive a no-op filter.
    pub fn retain(mut self, keep: impl Fn(&T) -> bool) -> Self {
        let before = self.data.len();
        self.data.retain(|item| keep(item));
        if self.data.len() != before {
            let total = self.data.len() as u64;
            self.meta.pagination.get_or_insert_with(Pagination::default).total = total;
        }
        self
    }
}

/// `{"data": T | null}` envelope of single-record REST responses.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub data: Option<T>,
}

/// Treat `null` as the type's default (empty list, default struct).
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept a single media record, a list of them, or `null`.
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<Media>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        Many(Vec<Media>),
        One(Box<Media>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        Some(OneOrMany::One(media)) => vec![*media],
        Some(OneOrMany::Many(list)) => list,
        None => Vec::new(),
    })
}
