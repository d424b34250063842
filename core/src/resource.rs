//! Content types addressable through the client, with their REST paths and
//! GraphQL documents.

use crate::graphql::{self, GraphQlDocument};

/// Content types with many records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    Puppies,
    Studs,
    GalleryItems,
}

impl CollectionKind {
    pub fn rest_path(self) -> &'static str {
        match self {
            CollectionKind::Puppies => "puppies",
            CollectionKind::Studs => "studs",
            CollectionKind::GalleryItems => "gallery-items",
        }
    }

    pub fn list_document(self) -> &'static GraphQlDocument {
        match self {
            CollectionKind::Puppies => &graphql::PUPPIES,
            CollectionKind::Studs => &graphql::STUDS,
            CollectionKind::GalleryItems => &graphql::GALLERY_ITEMS,
        }
    }

    pub fn item_document(self) -> &'static GraphQlDocument {
        match self {
            CollectionKind::Puppies => &graphql::PUPPY,
            CollectionKind::Studs => &graphql::STUD,
            CollectionKind::GalleryItems => &graphql::GALLERY_ITEM,
        }
    }
}

/// Content types with exactly one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SingletonKind {
    Homepage,
    BreedingProgram,
    PrivacyPolicy,
    TermsOfService,
}

impl SingletonKind {
    pub fn rest_path(self) -> &'static str {
        match self {
            SingletonKind::Homepage => "homepage",
            SingletonKind::BreedingProgram => "breeding-program",
            SingletonKind::PrivacyPolicy => "privacy-policy",
            SingletonKind::TermsOfService => "terms-of-service",
        }
    }

    pub fn document(self) -> &'static GraphQlDocument {
        match self {
            SingletonKind::Homepage => &graphql::HOMEPAGE,
            SingletonKind::BreedingProgram => &graphql::BREEDING_PROGRAM,
            SingletonKind::PrivacyPolicy => &graphql::PRIVACY_POLICY,
            SingletonKind::TermsOfService => &graphql::TERMS_OF_SERVICE,
        }
    }
}
