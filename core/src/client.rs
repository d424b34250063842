//! Content client: request primitive, build/parse pairs and typed accessors.
//!
//! # Design
//! `ContentClient` holds only its `Configuration` and a `Transport`. Each
//! operation is split into a `build_*` method producing an `HttpRequest`
//! and a `parse_*` method consuming an `HttpResponse`, so request shapes and
//! response handling are testable without a network. The backend (REST or
//! GraphQL) is fixed at construction and only changes how requests are
//! built and responses unwrapped; callers see one accessor interface.
//!
//! Every accessor comes in two forms. `try_*` returns the categorized
//! `ApiError`. The plain form logs the failure and degrades to an empty
//! collection or `None`, so one failed fetch empties a page section
//! instead of failing the whole render.

use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::{debug, error, warn};
use uuid::Uuid;

use crate::config::{Backend, Configuration};
use crate::error::ApiError;
use crate::graphql::{self, GraphQlDocument, GraphQlRequest};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::media::{self, ImageSize};
use crate::query::ListParams;
use crate::resource::{CollectionKind, SingletonKind};
use crate::rest;
use crate::transport::{Transport, UreqTransport};
use crate::types::{
    Availability, BreedingProgram, Collection, GalleryItem, Homepage, LegalDocument, Media,
    PrivacyPolicy, Puppy, SiteLogo, Stud, TermsOfService,
};

/// Static logo served by the site itself, the last tier of the logo lookup.
pub const DEFAULT_LOGO_PATH: &str = "/logos/MLBlogo2Transparent.png";
pub const DEFAULT_LOGO_ALT: &str = "Max Line HorrorBullz";

const PUPPY_STATUS_FIELD: &str = "status";
const STUD_STATUS_FIELD: &str = "availability";
const AVAILABLE_POPULATE: &str = "images";
const NEWEST_FIRST: &str = "createdAt:desc";
const LOGO_POPULATE: &str = "company_logo";

impl SiteLogo {
    pub fn fallback() -> Self {
        Self {
            url: DEFAULT_LOGO_PATH.to_string(),
            alt: DEFAULT_LOGO_ALT.to_string(),
        }
    }
}

/// Client for the content store.
#[derive(Debug, Clone)]
pub struct ContentClient<T = UreqTransport> {
    config: Configuration,
    transport: T,
}

impl ContentClient<UreqTransport> {
    /// Client configured from the environment, talking over `ureq`.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::new(Configuration::from_env(), UreqTransport::new())
    }
}

impl<T: Transport> ContentClient<T> {
    /// Fails only if the base URL cannot carry API paths.
    pub fn new(config: Configuration, transport: T) -> Result<Self, ApiError> {
        rest::endpoint(&config.api_base(), &[], "")?;
        Ok(Self { config, transport })
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn backend(&self) -> Backend {
        self.config.backend
    }

    // -----------------------------------------------------------------------
    // Request primitive
    // -----------------------------------------------------------------------

    /// JSON headers, bearer auth when a token is set, and a correlation id.
    fn headers(&self) -> Vec<(String, String)> {
        let mut headers = vec![
            ("content-type".to_string(), "application/json".to_string()),
            ("accept".to_string(), "application/json".to_string()),
        ];
        if let Some(token) = self.config.token.as_deref().filter(|_| self.config.has_token()) {
            headers.push(("authorization".to_string(), format!("Bearer {}", token.trim())));
        }
        headers.push(("x-request-id".to_string(), Uuid::new_v4().to_string()));
        headers
    }

    /// `GET` against an absolute URL.
    pub fn build_get(&self, url: String) -> HttpRequest {
        self.build_get_with(url, &[])
    }

    /// `GET` with caller headers on top of the defaults. A caller header
    /// replaces a default of the same name.
    pub fn build_get_with(&self, url: String, extra_headers: &[(&str, &str)]) -> HttpRequest {
        let mut headers = self.headers();
        for (name, value) in extra_headers {
            headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case(name));
            headers.push((name.to_ascii_lowercase(), value.to_string()));
        }
        HttpRequest {
            method: HttpMethod::Get,
            url,
            headers,
            body: None,
        }
    }

    /// `POST` of `document` with `variables` to the GraphQL endpoint.
    pub fn build_graphql(
        &self,
        document: &GraphQlDocument,
        variables: serde_json::Value,
    ) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(&GraphQlRequest::new(document, variables))
            .map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: self.config.graphql_url(),
            headers: self.headers(),
            body: Some(body),
        })
    }

    /// Categorize non-success statuses.
    fn check_status(&self, response: &HttpResponse) -> Result<(), ApiError> {
        if response.is_success() {
            return Ok(());
        }
        Err(ApiError::from_status(
            response.status,
            response.body.clone(),
            self.config.has_token(),
        ))
    }

    /// Execute `request` and hand the response to `parse`. Failures are
    /// logged with the request context before being returned.
    pub fn execute<R>(
        &self,
        request: HttpRequest,
        parse: impl FnOnce(HttpResponse) -> Result<R, ApiError>,
    ) -> Result<R, ApiError> {
        let request_id = request.header("x-request-id").unwrap_or_default().to_string();
        debug!(method = request.method.as_str(), url = %request.url, %request_id, "content request");

        let mut status = None;
        let result = self.transport.execute(&request).and_then(|response| {
            status = Some(response.status);
            parse(response)
        });

        if let Err(err) = &result {
            error!(
                url = %request.url,
                %request_id,
                has_token = self.config.has_token(),
                status = ?status,
                error = %err,
                "content request failed"
            );
        }
        result
    }

    // -----------------------------------------------------------------------
    // Build / parse
    // -----------------------------------------------------------------------

    pub fn build_list(&self, kind: CollectionKind, params: &ListParams) -> Result<HttpRequest, ApiError> {
        match self.config.backend {
            Backend::Rest => {
                let url = rest::endpoint(
                    &self.config.api_base(),
                    &[kind.rest_path()],
                    &params.to_query_string(),
                )?;
                Ok(self.build_get(url))
            }
            Backend::GraphQl => self.build_graphql(kind.list_document(), params.to_graphql_variables()),
        }
    }

    pub fn parse_list<D: DeserializeOwned>(
        &self,
        kind: CollectionKind,
        response: HttpResponse,
    ) -> Result<Collection<D>, ApiError> {
        self.check_status(&response)?;
        match self.config.backend {
            Backend::Rest => rest::parse_collection(&response.body),
            Backend::GraphQl => {
                let root = kind.list_document().root_field;
                let data: Option<Vec<D>> = graphql::extract(&response.body, root)?;
                Ok(Collection::counted(data.unwrap_or_default()))
            }
        }
    }

    pub fn build_item(
        &self,
        kind: CollectionKind,
        document_id: &str,
        populate: Option<&str>,
    ) -> Result<HttpRequest, ApiError> {
        match self.config.backend {
            Backend::Rest => {
                let url = rest::endpoint(
                    &self.config.api_base(),
                    &[kind.rest_path(), document_id],
                    &rest::populate_query(populate),
                )?;
                Ok(self.build_get(url))
            }
            Backend::GraphQl => {
                self.build_graphql(kind.item_document(), json!({ "documentId": document_id }))
            }
        }
    }

    /// A 404 is a missing record, not an error.
    pub fn parse_item<D: DeserializeOwned>(
        &self,
        kind: CollectionKind,
        response: HttpResponse,
    ) -> Result<Option<D>, ApiError> {
        if response.status == 404 {
            return Ok(None);
        }
        self.check_status(&response)?;
        match self.config.backend {
            Backend::Rest => rest::parse_single(&response.body),
            Backend::GraphQl => graphql::extract(&response.body, kind.item_document().root_field),
        }
    }

    pub fn build_singleton(
        &self,
        kind: SingletonKind,
        populate: Option<&str>,
    ) -> Result<HttpRequest, ApiError> {
        match self.config.backend {
            Backend::Rest => {
                let url = rest::endpoint(
                    &self.config.api_base(),
                    &[kind.rest_path()],
                    &rest::populate_query(populate),
                )?;
                Ok(self.build_get(url))
            }
            Backend::GraphQl => self.build_graphql(kind.document(), json!({})),
        }
    }

    /// A 404 means the singleton was never published.
    pub fn parse_singleton<D: DeserializeOwned>(
        &self,
        kind: SingletonKind,
        response: HttpResponse,
    ) -> Result<Option<D>, ApiError> {
        if response.status == 404 {
            return Ok(None);
        }
        self.check_status(&response)?;
        match self.config.backend {
            Backend::Rest => rest::parse_single(&response.body),
            Backend::GraphQl => graphql::extract(&response.body, kind.document().root_field),
        }
    }

    // -----------------------------------------------------------------------
    // Generic fetches
    // -----------------------------------------------------------------------

    pub fn try_list<D: DeserializeOwned>(
        &self,
        kind: CollectionKind,
        params: &ListParams,
    ) -> Result<Collection<D>, ApiError> {
        let request = self.build_list(kind, params)?;
        self.execute(request, |response| self.parse_list(kind, response))
    }

    pub fn try_item<D: DeserializeOwned>(
        &self,
        kind: CollectionKind,
        document_id: &str,
        populate: Option<&str>,
    ) -> Result<Option<D>, ApiError> {
        let request = self.build_item(kind, document_id, populate)?;
        self.execute(request, |response| self.parse_item(kind, response))
    }

    pub fn try_singleton<D: DeserializeOwned>(
        &self,
        kind: SingletonKind,
        populate: Option<&str>,
    ) -> Result<Option<D>, ApiError> {
        let request = self.build_singleton(kind, populate)?;
        self.execute(request, |response| self.parse_singleton(kind, response))
    }

    // -----------------------------------------------------------------------
    // Puppies
    // -----------------------------------------------------------------------

    pub fn try_puppies(&self, params: &ListParams) -> Result<Collection<Puppy>, ApiError> {
        self.try_list(CollectionKind::Puppies, params)
    }

    pub fn puppies(&self, params: &ListParams) -> Collection<Puppy> {
        degrade("puppies", self.try_puppies(params), Collection::empty)
    }

    pub fn try_puppy(&self, document_id: &str, populate: Option<&str>) -> Result<Option<Puppy>, ApiError> {
        self.try_item(CollectionKind::Puppies, document_id, populate)
    }

    pub fn puppy(&self, document_id: &str) -> Option<Puppy> {
        degrade("puppy", self.try_puppy(document_id, None), || None)
    }

    /// Available puppies, newest first. The server filters; the result is
    /// filtered again in case the store ignored the filter.
    pub fn try_available_puppies(&self) -> Result<Collection<Puppy>, ApiError> {
        let params = ListParams::new()
            .filter(PUPPY_STATUS_FIELD, Availability::Available.as_str())
            .populate(AVAILABLE_POPULATE)
            .sort(NEWEST_FIRST);
        Ok(self.try_puppies(&params)?.retain(Puppy::is_available))
    }

    pub fn available_puppies(&self) -> Collection<Puppy> {
        degrade("available puppies", self.try_available_puppies(), Collection::empty)
    }

    // -----------------------------------------------------------------------
    // Studs
    // -----------------------------------------------------------------------

    pub fn try_studs(&self, params: &ListParams) -> Result<Collection<Stud>, ApiError> {
        self.try_list(CollectionKind::Studs, params)
    }

    pub fn studs(&self, params: &ListParams) -> Collection<Stud> {
        degrade("studs", self.try_studs(params), Collection::empty)
    }

    pub fn try_stud(&self, document_id: &str, populate: Option<&str>) -> Result<Option<Stud>, ApiError> {
        self.try_item(CollectionKind::Studs, document_id, populate)
    }

    pub fn stud(&self, document_id: &str) -> Option<Stud> {
        degrade("stud", self.try_stud(document_id, None), || None)
    }

    pub fn try_available_studs(&self) -> Result<Collection<Stud>, ApiError> {
        let params = ListParams::new()
            .filter(STUD_STATUS_FIELD, Availability::Available.as_str())
            .populate(AVAILABLE_POPULATE)
            .sort(NEWEST_FIRST);
        Ok(self.try_studs(&params)?.retain(Stud::is_available))
    }

    pub fn available_studs(&self) -> Collection<Stud> {
        degrade("available studs", self.try_available_studs(), Collection::empty)
    }

    // -----------------------------------------------------------------------
    // Gallery
    // -----------------------------------------------------------------------

    pub fn try_gallery_items(&self, params: &ListParams) -> Result<Collection<GalleryItem>, ApiError> {
        self.try_list(CollectionKind::GalleryItems, params)
    }

    pub fn gallery_items(&self, params: &ListParams) -> Collection<GalleryItem> {
        degrade("gallery items", self.try_gallery_items(params), Collection::empty)
    }

    pub fn try_gallery_item(
        &self,
        document_id: &str,
        populate: Option<&str>,
    ) -> Result<Option<GalleryItem>, ApiError> {
        self.try_item(CollectionKind::GalleryItems, document_id, populate)
    }

    pub fn gallery_item(&self, document_id: &str) -> Option<GalleryItem> {
        degrade("gallery item", self.try_gallery_item(document_id, None), || None)
    }

    // -----------------------------------------------------------------------
    // Singletons
    // -----------------------------------------------------------------------

    pub fn try_homepage(&self) -> Result<Option<Homepage>, ApiError> {
        self.try_singleton(SingletonKind::Homepage, None)
    }

    pub fn homepage(&self) -> Option<Homepage> {
        degrade("homepage", self.try_homepage(), || None)
    }

    pub fn try_breeding_program(&self) -> Result<Option<BreedingProgram>, ApiError> {
        self.try_singleton(SingletonKind::BreedingProgram, None)
    }

    pub fn breeding_program(&self) -> Option<BreedingProgram> {
        degrade("breeding program", self.try_breeding_program(), || None)
    }

    pub fn try_privacy_policy(&self) -> Result<Option<PrivacyPolicy>, ApiError> {
        self.try_singleton(SingletonKind::PrivacyPolicy, None)
    }

    pub fn privacy_policy(&self) -> Option<PrivacyPolicy> {
        degrade("privacy policy", self.try_privacy_policy(), || None)
    }

    pub fn try_terms_of_service(&self) -> Result<Option<TermsOfService>, ApiError> {
        self.try_singleton(SingletonKind::TermsOfService, None)
    }

    pub fn terms_of_service(&self) -> Option<TermsOfService> {
        degrade("terms of service", self.try_terms_of_service(), || None)
    }

    /// Company logo from the privacy policy, else from the terms of service,
    /// else the static asset. Each document is fetched at most once and a
    /// failed fetch counts as "no logo there".
    pub fn site_logo(&self) -> SiteLogo {
        [SingletonKind::PrivacyPolicy, SingletonKind::TermsOfService]
            .into_iter()
            .find_map(|kind| {
                match self.try_singleton::<LegalDocument>(kind, Some(LOGO_POPULATE)) {
                    Ok(document) => document
                        .and_then(|d| d.company_logo)
                        .filter(|logo| !logo.url.is_empty()),
                    Err(err) => {
                        warn!(source = kind.rest_path(), error = %err, "logo lookup failed");
                        None
                    }
                }
            })
            .map(|logo| SiteLogo {
                url: self.media_url(Some(&logo), ImageSize::Medium),
                alt: logo
                    .alternative_text
                    .filter(|alt| !alt.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_LOGO_ALT.to_string()),
            })
            .unwrap_or_else(SiteLogo::fallback)
    }

    /// Root query fields the GraphQL endpoint exposes. Always goes to the
    /// GraphQL endpoint, whatever the configured backend.
    pub fn try_introspect_schema(&self) -> Result<Option<serde_json::Value>, ApiError> {
        let request = self.build_graphql(&graphql::INTROSPECTION, json!({}))?;
        self.execute(request, |response| {
            self.check_status(&response)?;
            graphql::extract(&response.body, graphql::INTROSPECTION.root_field)
        })
    }

    pub fn introspect_schema(&self) -> Option<serde_json::Value> {
        degrade("schema introspection", self.try_introspect_schema(), || None)
    }

    // -----------------------------------------------------------------------
    // Media
    // -----------------------------------------------------------------------

    /// Absolute URL for `media`, relative uploads resolved against this
    /// client's base URL.
    pub fn media_url(&self, media: Option<&Media>, size: ImageSize) -> String {
        media::resolve_media_url(&self.config.base_url, media, size)
    }

    pub fn asset_url(&self, path: &str) -> String {
        media::resolve_asset_path(&self.config.base_url, path)
    }
}

/// Swap a failed fetch for `fallback`, keeping a trace of what was lost.
fn degrade<V>(what: &str, result: Result<V, ApiError>, fallback: impl FnOnce() -> V) -> V {
    result.unwrap_or_else(|err| {
        warn!(content = what, error = %err, "serving fallback content");
        fallback()
    })
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use serde_json::Value;

    use super::*;

    const BASE: &str = "http://localhost:1337";

    fn ok(body: &str) -> HttpResponse {
        HttpResponse { status: 200, headers: Vec::new(), body: body.to_string() }
    }

    fn status(code: u16) -> HttpResponse {
        HttpResponse { status: code, headers: Vec::new(), body: format!("status {code}") }
    }

    type FnTransport = fn(&HttpRequest) -> Result<HttpResponse, ApiError>;

    fn refuse(_: &HttpRequest) -> Result<HttpResponse, ApiError> {
        Err(ApiError::Transport("connection refused".to_string()))
    }

    /// REST client whose transport can never connect.
    fn rest_client() -> ContentClient<FnTransport> {
        ContentClient::new(Configuration::new(BASE), refuse as FnTransport).unwrap()
    }

    /// Client whose transport answers every request with `respond` and
    /// records the requests it saw.
    fn scripted<F>(
        config: Configuration,
        respond: F,
    ) -> (ContentClient<impl Transport>, std::rc::Rc<RefCell<Vec<HttpRequest>>>)
    where
        F: Fn(&HttpRequest) -> Result<HttpResponse, ApiError>,
    {
        let seen = std::rc::Rc::new(RefCell::new(Vec::new()));
        let log = seen.clone();
        let transport = move |req: &HttpRequest| {
            log.borrow_mut().push(req.clone());
            respond(req)
        };
        (ContentClient::new(config, transport).unwrap(), seen)
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = ContentClient::new(Configuration::new("not a url"), UreqTransport::new());
        assert!(matches!(result, Err(ApiError::InvalidUrl(_))));
    }

    #[test]
    fn headers_without_token() {
        let req = rest_client().build_get(format!("{BASE}/api/puppies"));
        assert_eq!(req.header("content-type"), Some("application/json"));
        assert_eq!(req.header("authorization"), None);
        assert!(req.header("x-request-id").is_some());
    }

    #[test]
    fn headers_with_token() {
        let client = ContentClient::new(
            Configuration::new(BASE).with_token("s3cret"),
            UreqTransport::new(),
        )
        .unwrap();
        let req = client.build_get(format!("{BASE}/api/puppies"));
        assert_eq!(req.header("authorization"), Some("Bearer s3cret"));
    }

    #[test]
    fn extra_headers_add_and_override() {
        let req = rest_client().build_get_with(
            format!("{BASE}/api/homepage"),
            &[("Accept-Language", "en-US"), ("Accept", "application/vnd.api+json")],
        );
        assert_eq!(req.header("accept-language"), Some("en-US"));
        assert_eq!(req.header("accept"), Some("application/vnd.api+json"));
        assert_eq!(req.headers.iter().filter(|(k, _)| k == "accept").count(), 1);
        assert!(req.header("x-request-id").is_some());
    }

    #[test]
    fn build_list_rest() {
        let params = ListParams::new().page(1).page_size(12).filter("status", "Available");
        let req = rest_client().build_list(CollectionKind::Puppies, &params).unwrap();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(
            req.url,
            "http://localhost:1337/api/puppies?pagination[page]=1&pagination[pageSize]=12&filters[status][$eq]=Available"
        );
        assert!(req.body.is_none());
    }

    #[test]
    fn build_item_rest_defaults_populate() {
        let req = rest_client().build_item(CollectionKind::Studs, "abc123", None).unwrap();
        assert_eq!(req.url, "http://localhost:1337/api/studs/abc123?populate=*");
    }

    #[test]
    fn build_singleton_rest() {
        let req = rest_client().build_singleton(SingletonKind::BreedingProgram, None).unwrap();
        assert_eq!(req.url, "http://localhost:1337/api/breeding-program?populate=*");
    }

    #[test]
    fn build_list_graphql() {
        let client = ContentClient::new(
            Configuration::new(BASE).with_backend(Backend::GraphQl),
            UreqTransport::new(),
        )
        .unwrap();
        let params = ListParams::new().filter("availability", "Available").populate("images");
        let req = client.build_list(CollectionKind::Studs, &params).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://localhost:1337/graphql");

        let body: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["operationName"], "GetStuds");
        assert_eq!(body["variables"], json!({ "filters": { "availability": { "eq": "Available" } } }));
    }

    #[test]
    fn parse_list_rest_keeps_server_meta() {
        let body = r#"{"data":[{"documentId":"p1","name":"Bruno"}],"meta":{"pagination":{"page":1,"pageSize":25,"pageCount":3,"total":61}}}"#;
        let page: Collection<Puppy> = rest_client().parse_list(CollectionKind::Puppies, ok(body)).unwrap();
        assert_eq!(page.data[0].name, "Bruno");
        assert_eq!(page.total(), 61);
    }

    #[test]
    fn parse_list_categorizes_status() {
        let client = rest_client();
        let err = client.parse_list::<Puppy>(CollectionKind::Puppies, status(401)).unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized { token_present: false, .. }));
        let err = client.parse_list::<Puppy>(CollectionKind::Puppies, status(500)).unwrap_err();
        assert!(matches!(err, ApiError::ServerError { status: 500, .. }));
    }

    #[test]
    fn parse_item_not_found_is_none() {
        let client = rest_client();
        let puppy: Option<Puppy> = client.parse_item(CollectionKind::Puppies, status(404)).unwrap();
        assert!(puppy.is_none());
    }

    #[test]
    fn drifted_record_keeps_the_listing() {
        let body = r#"{"data":{"studs":[
            {"documentId":"s1","name":"Tank","status":"Available","availability":"Available",
             "description":[{"children":[{"text":"no type"}]}]},
            {"documentId":"s2","name":"Rocco","availability":"Available"}
        ]}}"#;
        let (client, _) =
            scripted(Configuration::new(BASE).with_backend(Backend::GraphQl), move |_| Ok(ok(body)));
        let studs = client.try_studs(&ListParams::default()).unwrap();
        assert_eq!(studs.data.len(), 2);
        assert_eq!(client.available_studs().data.len(), 2);
    }

    #[test]
    fn introspection_posts_to_graphql_on_rest_backend() {
        let (client, seen) = scripted(Configuration::new(BASE), |_| {
            Ok(ok(r#"{"data":{"__schema":{"queryType":{"name":"Query","fields":[]}}}}"#))
        });
        let schema = client.introspect_schema().unwrap();
        assert_eq!(schema["queryType"]["name"], "Query");

        let seen = seen.borrow();
        let req = &seen[0];
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://localhost:1337/graphql");
        let body: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["operationName"], "IntrospectionQuery");
    }

    #[test]
    fn parse_list_bad_json() {
        let err = rest_client()
            .parse_list::<Puppy>(CollectionKind::Puppies, ok("not json"))
            .unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    #[test]
    fn failing_graphql_list_degrades_to_empty() {
        let (client, _) = scripted(Configuration::new(BASE).with_backend(Backend::GraphQl), |_| {
            Err(ApiError::Transport("connection refused".to_string()))
        });
        let studs = client.studs(&ListParams::default());
        assert_eq!(
            serde_json::to_value(&studs).unwrap(),
            json!({ "data": [], "meta": { "pagination": { "total": 0 } } })
        );
        assert!(client.try_studs(&ListParams::default()).is_err());
    }

    #[test]
    fn failing_rest_list_degrades_to_empty() {
        let client = rest_client();
        let puppies = client.puppies(&ListParams::default());
        assert!(puppies.data.is_empty());
        assert_eq!(puppies.total(), 0);
        assert!(client.puppy("p1").is_none());
        assert!(client.homepage().is_none());
    }

    #[test]
    fn graphql_errors_degrade_single_to_none() {
        let (client, _) = scripted(Configuration::new(BASE).with_backend(Backend::GraphQl), |_| {
            Ok(ok(r#"{"errors":[{"message":"Forbidden access"}]}"#))
        });
        assert!(client.stud("s1").is_none());
        assert!(matches!(client.try_stud("s1", None), Err(ApiError::GraphQl(_))));
    }

    #[test]
    fn available_puppies_refilters_client_side() {
        let body = r#"{"data":{"puppies":[
            {"documentId":"p1","name":"Bruno","status":"Available"},
            {"documentId":"p2","name":"Luna","status":"Sold"}
        ]}}"#;
        let (client, seen) =
            scripted(Configuration::new(BASE).with_backend(Backend::GraphQl), move |_| Ok(ok(body)));
        let available = client.available_puppies();
        assert_eq!(available.data.len(), 1);
        assert_eq!(available.data[0].name, "Bruno");
        assert_eq!(available.total(), 1);

        let sent: Value = serde_json::from_str(seen.borrow()[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(sent["variables"]["filters"]["status"]["eq"], "Available");
        assert_eq!(sent["variables"]["sort"], json!(["createdAt:desc"]));
    }

    #[test]
    fn available_studs_rest_query() {
        let body = r#"{"data":[{"documentId":"s1","name":"Tank","availability":"Available"}],"meta":{"pagination":{"total":1}}}"#;
        let (client, seen) = scripted(Configuration::new(BASE), move |_| Ok(ok(body)));
        let studs = client.available_studs();
        assert_eq!(studs.data.len(), 1);
        let url = seen.borrow()[0].url.clone();
        assert!(url.contains("filters[availability][$eq]=Available"), "{url}");
        assert!(url.contains("populate=images"), "{url}");
        assert!(url.contains("sort=createdAt%3Adesc"), "{url}");
    }

    #[test]
    fn site_logo_falls_back_to_static_asset() {
        let (client, seen) = scripted(Configuration::new(BASE), |_| Ok(ok(r#"{"data":null}"#)));
        assert_eq!(client.site_logo(), SiteLogo::fallback());
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn site_logo_uses_terms_when_privacy_has_none() {
        let (client, seen) = scripted(Configuration::new(BASE), |req| {
            if req.url.contains("privacy-policy") {
                Ok(status(404))
            } else {
                Ok(ok(r#"{"data":{"title":"Terms","company_logo":{"url":"/uploads/logo.png","mime":"image/png","alternativeText":"Kennel logo"}}}"#))
            }
        });
        let logo = client.site_logo();
        assert_eq!(logo.url, "http://localhost:1337/uploads/logo.png");
        assert_eq!(logo.alt, "Kennel logo");
        assert!(seen.borrow()[0].url.ends_with("privacy-policy?populate=company_logo"));
    }

    #[test]
    fn site_logo_stops_at_first_hit() {
        let (client, seen) = scripted(Configuration::new(BASE), |_| {
            Ok(ok(r#"{"data":{"company_logo":{"url":"https://res.cloudinary.com/demo/image/upload/logo.png","mime":"image/png"}}}"#))
        });
        let logo = client.site_logo();
        assert_eq!(logo.url, "https://res.cloudinary.com/demo/image/upload/logo.png");
        assert_eq!(logo.alt, DEFAULT_LOGO_ALT);
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn site_logo_survives_failures() {
        let (client, _) = scripted(Configuration::new(BASE), |_| Ok(status(503)));
        assert_eq!(client.site_logo(), SiteLogo::fallback());
    }

    #[test]
    fn media_url_uses_configured_base() {
        let client = ContentClient::new(Configuration::new("https://cms.example.com/"), UreqTransport::new()).unwrap();
        let media = Media { url: "/uploads/a.jpg".to_string(), ..Media::default() };
        assert_eq!(client.media_url(Some(&media), ImageSize::Medium), "https://cms.example.com/uploads/a.jpg");
        assert_eq!(client.asset_url(""), "");
    }
}
