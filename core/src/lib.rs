//! Content-access client for the kennel website.
//!
//! # Overview
//! Fetches puppy and stud listings, homepage and breeding-program copy,
//! gallery items and legal documents from a headless content store, and
//! provides the formatting helpers pages apply before display.
//!
//! # Design
//! - `ContentClient` is constructed explicitly from a `Configuration` and a
//!   `Transport` and passed to callers; there is no global instance.
//! - The REST or GraphQL backend is chosen once, at construction. Both
//!   produce the same record types.
//! - Each operation is split into `build_*` (produces an `HttpRequest`) and
//!   `parse_*` (consumes an `HttpResponse`); the transport runs in between.
//! - `try_*` accessors propagate `ApiError`; plain accessors log and degrade
//!   to empty values.
//!
//! ```no_run
//! use kennel_content::{format_price, ContentClient, ImageSize};
//!
//! let client = ContentClient::from_env()?;
//! for puppy in client.available_puppies().data {
//!     let photo = client.media_url(puppy.images.first(), ImageSize::Small);
//!     let price = puppy.price.map(format_price).unwrap_or_default();
//!     println!("{} {price} {photo}", puppy.name);
//! }
//! # Ok::<(), kennel_content::ApiError>(())
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod graphql;
pub mod http;
pub mod media;
pub mod query;
pub mod resource;
pub mod rest;
pub mod rich_text;
pub mod transport;
pub mod types;

pub use client::ContentClient;
pub use config::{Backend, Configuration, Environment};
pub use error::ApiError;
pub use format::{format_date, format_price};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use media::{resolve_asset_path, resolve_media_url, ImageSize};
pub use query::ListParams;
pub use resource::{CollectionKind, SingletonKind};
pub use rich_text::{Block, RichText};
pub use transport::{Transport, UreqTransport};
pub use types::{
    Availability, BreedingProgram, Collection, GalleryItem, Gender, Homepage, LegalDocument, Media,
    MediaFormat, MediaFormats, Meta, Pagination, PrivacyPolicy, Puppy, SiteLogo, Stud,
    TermsOfService,
};
