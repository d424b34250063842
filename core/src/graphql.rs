//! Fixed GraphQL documents and response unwrapping.
//!
//! Each content type has one document per access shape. List documents
//! declare `$filters`, `$pagination` and `$sort`; single-item documents
//! declare one `$documentId: ID!`. Selection sets replace REST's `populate`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ApiError;

/// A named query document and the root field its data lives under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphQlDocument {
    pub operation_name: &'static str,
    pub root_field: &'static str,
    pub query: &'static str,
}

macro_rules! media {
    () => {
        "documentId name url mime alternativeText caption width height size formats provider"
    };
}

pub const PUPPIES: GraphQlDocument = GraphQlDocument {
    operation_name: "GetPuppies",
    root_field: "puppies",
    query: concat!(
        "query GetPuppies($filters: PuppyFiltersInput, $pagination: PaginationArg, $sort: [String]) { ",
        "puppies(filters: $filters, pagination: $pagination, sort: $sort) { ",
        "documentId name status date_of_birth age price gender color weight description parents healthrecords ",
        "images { ", media!(), " } page_gallery { ", media!(), " } ",
        "createdAt updatedAt publishedAt } }"
    ),
};

pub const PUPPY: GraphQlDocument = GraphQlDocument {
    operation_name: "GetPuppy",
    root_field: "puppy",
    query: concat!(
        "query GetPuppy($documentId: ID!) { puppy(documentId: $documentId) { ",
        "documentId name status date_of_birth age price gender color weight description parents healthrecords ",
        "images { ", media!(), " } page_gallery { ", media!(), " } ",
        "createdAt updatedAt publishedAt } }"
    ),
};

pub const STUDS: GraphQlDocument = GraphQlDocument {
    operation_name: "GetStuds",
    root_field: "studs",
    query: concat!(
        "query GetStuds($filters: StudFiltersInput, $pagination: PaginationArg, $sort: [String]) { ",
        "studs(filters: $filters, pagination: $pagination, sort: $sort) { ",
        "documentId name age availability fee description bloodlines specialties individuality background_color ",
        "images { ", media!(), " } page_gallery { ", media!(), " } background_video { ", media!(), " } ",
        "createdAt updatedAt publishedAt } }"
    ),
};

pub const STUD: GraphQlDocument = GraphQlDocument {
    operation_name: "GetStud",
    root_field: "stud",
    query: concat!(
        "query GetStud($documentId: ID!) { stud(documentId: $documentId) { ",
        "documentId name age availability fee description bloodlines specialties individuality background_color ",
        "images { ", media!(), " } page_gallery { ", media!(), " } background_video { ", media!(), " } ",
        "createdAt updatedAt publishedAt } }"
    ),
};

pub const GALLERY_ITEMS: GraphQlDocument = GraphQlDocument {
    operation_name: "GetGalleryItems",
    root_field: "galleryItems",
    query: concat!(
        "query GetGalleryItems($filters: GalleryItemFiltersInput, $pagination: PaginationArg, $sort: [String]) { ",
        "galleryItems(filters: $filters, pagination: $pagination, sort: $sort) { ",
        "documentId title description alt_text order image { ", media!(), " } } }"
    ),
};

pub const GALLERY_ITEM: GraphQlDocument = GraphQlDocument {
    operation_name: "GetGalleryItem",
    root_field: "galleryItem",
    query: concat!(
        "query GetGalleryItem($documentId: ID!) { galleryItem(documentId: $documentId) { ",
        "documentId title description alt_text order image { ", media!(), " } } }"
    ),
};

pub const HOMEPAGE: GraphQlDocument = GraphQlDocument {
    operation_name: "GetHomepage",
    root_field: "homepage",
    query: concat!(
        "query GetHomepage { homepage { ",
        "hero_headline hero_subheadline featured_section_title featured_section_description ",
        "hero_video { ", media!(), " } hero_poster_image { ", media!(), " } } }"
    ),
};

pub const BREEDING_PROGRAM: GraphQlDocument = GraphQlDocument {
    operation_name: "GetBreedingProgram",
    root_field: "breedingProgram",
    query: concat!(
        "query GetBreedingProgram { breedingProgram { ",
        "documentId title subtext description description_long partnership_note ",
        "partnership_gallery_title partnership_gallery_description partnership_featured_title ",
        "partnership_highlights_title partnership_highlights_description partnership_legacy_title ",
        "partnership_legacy_description partnership_brand_name partnership_theme_enabled ",
        "partnership_featured_main_title partnership_featured_brand_line partnership_featured_tagline ",
        "partnership_coming_soon_message ",
        "hero_media { ", media!(), " } Featured_IMAGE { ", media!(), " } photo_gallery { ", media!(), " } } }"
    ),
};

pub const PRIVACY_POLICY: GraphQlDocument = GraphQlDocument {
    operation_name: "GetPrivacyPolicy",
    root_field: "privacyPolicy",
    query: concat!(
        "query GetPrivacyPolicy { privacyPolicy { ",
        "documentId title content lastupdated company_logo { ", media!(), " } } }"
    ),
};

pub const TERMS_OF_SERVICE: GraphQlDocument = GraphQlDocument {
    operation_name: "GetTermsOfService",
    root_field: "termsOfService",
    query: concat!(
        "query GetTermsOfService { termsOfService { ",
        "documentId title content lastupdated company_logo { ", media!(), " } } }"
    ),
};

/// Root query fields and their arguments, for checking which content types
/// the endpoint exposes.
pub const INTROSPECTION: GraphQlDocument = GraphQlDocument {
    operation_name: "IntrospectionQuery",
    root_field: "__schema",
    query: concat!(
        "query IntrospectionQuery { __schema { queryType { name fields { ",
        "name type { name kind } args { name type { name kind } } } } } }"
    ),
};

/// Request body posted to the GraphQL endpoint.
#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a> {
    pub query: &'a str,
    #[serde(rename = "operationName")]
    pub operation_name: &'a str,
    pub variables: Value,
}

impl<'a> GraphQlRequest<'a> {
    pub fn new(document: &'a GraphQlDocument, variables: Value) -> Self {
        Self {
            query: document.query,
            operation_name: document.operation_name,
            variables,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    #[serde(default)]
    data: Option<Map<String, Value>>,
    #[serde(default)]
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

/// Pull `data.{root_field}` out of a GraphQL response body.
///
/// A non-empty `errors` array fails the whole response. A missing or `null`
/// root field is `Ok(None)`.
pub fn extract<T: DeserializeOwned>(body: &str, root_field: &str) -> Result<Option<T>, ApiError> {
    let response: GraphQlResponse = serde_json::from_str(body)?;

    if let Some(errors) = response.errors.filter(|e| !e.is_empty()) {
        let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
        return Err(ApiError::GraphQl(messages.join("; ")));
    }

    match response.data.and_then(|mut data| data.remove(root_field)) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => Ok(Some(serde_json::from_value(value)?)),
    }
}
