//! In-memory stand-in for the headless content store.
//!
//! Serves the REST routes (`/api/{type}`, `/api/{type}/{documentId}`) and
//! the `/graphql` endpoint the content client talks to, backed by JSON
//! records. Supports `$eq` filters, `field:asc|desc` sorting and
//! page-based pagination. `populate` is accepted and ignored: records are
//! always returned whole.

pub mod fixtures;

use std::{cmp::Ordering, collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tokio::net::TcpListener;
use tracing::debug;

const DEFAULT_PAGE_SIZE: usize = 25;

/// Content records keyed by REST path (`puppies`, `homepage`, ...).
#[derive(Debug, Clone, Default)]
pub struct Store {
    collections: HashMap<String, Vec<Value>>,
    singletons: HashMap<String, Value>,
    token: Option<String>,
}

impl Store {
    /// No records and no access control.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Every content type populated from [`fixtures`].
    pub fn seeded() -> Self {
        Self::empty()
            .with_collection("puppies", fixtures::puppies())
            .with_collection("studs", fixtures::studs())
            .with_collection("gallery-items", fixtures::gallery_items())
            .with_singleton("homepage", fixtures::homepage())
            .with_singleton("breeding-program", fixtures::breeding_program())
            .with_singleton("privacy-policy", fixtures::privacy_policy())
            .with_singleton("terms-of-service", fixtures::terms_of_service())
    }

    /// Require `Authorization: Bearer {token}` on every request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_collection(mut self, name: &str, records: Vec<Value>) -> Self {
        self.collections.insert(name.to_string(), records);
        self
    }

    pub fn with_singleton(mut self, name: &str, record: Value) -> Self {
        self.singletons.insert(name.to_string(), record);
        self
    }

    /// Unpublish a singleton so lookups 404.
    pub fn without_singleton(mut self, name: &str) -> Self {
        self.singletons.remove(name);
        self
    }

    /// Missing credentials are 401, wrong ones 403.
    fn authorize(&self, headers: &HeaderMap) -> Result<(), Rejection> {
        let Some(expected) = &self.token else {
            return Ok(());
        };
        let presented = headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "));
        match presented {
            None => Err(rejection(StatusCode::UNAUTHORIZED, "UnauthorizedError", "Missing credentials")),
            Some(token) if token == expected => Ok(()),
            Some(_) => Err(rejection(StatusCode::FORBIDDEN, "ForbiddenError", "Invalid credentials")),
        }
    }

    fn find(&self, collection: &str, document_id: &str) -> Option<&Value> {
        self.collections
            .get(collection)?
            .iter()
            .find(|record| record.get("documentId").and_then(Value::as_str) == Some(document_id))
    }
}

/// Shared by every handler. Never mutated after the router is built.
pub type SharedStore = Arc<Store>;

type Rejection = (StatusCode, Json<Value>);

fn rejection(status: StatusCode, name: &str, message: &str) -> Rejection {
    (
        status,
        Json(json!({
            "data": null,
            "error": { "status": status.as_u16(), "name": name, "message": message, "details": {} }
        })),
    )
}

fn not_found() -> Rejection {
    rejection(StatusCode::NOT_FOUND, "NotFoundError", "Not Found")
}

/// Router over the seeded store.
pub fn app() -> Router {
    app_with(Store::seeded())
}

pub fn app_with(store: Store) -> Router {
    let store: SharedStore = Arc::new(store);
    Router::new()
        .route("/api/{name}", get(list_or_singleton))
        .route("/api/{name}/{document_id}", get(get_item))
        .route("/graphql", post(graphql))
        .with_state(store)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with(listener: TcpListener, store: Store) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(store)).await
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

/// Filters, sort and pagination for one listing, from either REST query
/// parameters or GraphQL variables.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    pub filters: Vec<(String, String)>,
    /// `(field, descending)`.
    pub sort: Vec<(String, bool)>,
    pub page: usize,
    pub page_size: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            filters: Vec::new(),
            sort: Vec::new(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ListQuery {
    /// `filters[f][$eq]=v`, `sort=f:desc`, `pagination[page]=n`,
    /// `pagination[pageSize]=n`. Anything else is ignored.
    pub fn from_rest(pairs: &[(String, String)]) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "pagination[page]" => query.page = value.parse().unwrap_or(1),
                "pagination[pageSize]" => query.page_size = value.parse().unwrap_or(DEFAULT_PAGE_SIZE),
                "sort" => query.sort.extend(value.split(',').map(sort_key)),
                _ => {
                    let field = key
                        .strip_prefix("filters[")
                        .and_then(|rest| rest.strip_suffix("][$eq]"));
                    if let Some(field) = field {
                        query.filters.push((field.to_string(), value.clone()));
                    }
                }
            }
        }
        query
    }

    /// `{filters: {f: {eq: v}}, pagination: {page, pageSize}, sort: [..]}`.
    pub fn from_graphql(variables: &Value) -> Self {
        let mut query = Self::default();
        if let Some(filters) = variables.get("filters").and_then(Value::as_object) {
            for (field, condition) in filters {
                if let Some(value) = condition.get("eq").and_then(text) {
                    query.filters.push((field.clone(), value));
                }
            }
        }
        if let Some(pagination) = variables.get("pagination") {
            if let Some(page) = pagination.get("page").and_then(Value::as_u64) {
                query.page = page as usize;
            }
            if let Some(size) = pagination.get("pageSize").and_then(Value::as_u64) {
                query.page_size = size as usize;
            }
        }
        if let Some(sort) = variables.get("sort").and_then(Value::as_array) {
            query.sort.extend(sort.iter().filter_map(Value::as_str).map(sort_key));
        }
        query
    }

    /// Matching records for the requested page, and the pagination meta.
    pub fn apply(&self, records: &[Value]) -> (Vec<Value>, Value) {
        let mut matched: Vec<Value> = records
            .iter()
            .filter(|record| {
                self.filters.iter().all(|(field, value)| {
                    record.get(field).and_then(text).as_deref() == Some(value.as_str())
                })
            })
            .cloned()
            .collect();

        matched.sort_by(|a, b| {
            self.sort.iter().fold(Ordering::Equal, |ord, (field, descending)| {
                ord.then_with(|| {
                    let ord = compare(
                        a.get(field).unwrap_or(&Value::Null),
                        b.get(field).unwrap_or(&Value::Null),
                    );
                    if *descending { ord.reverse() } else { ord }
                })
            })
        });

        let total = matched.len();
        let page = self.page.max(1);
        let page_size = self.page_size.max(1);
        let data: Vec<Value> = matched.into_iter().skip((page - 1) * page_size).take(page_size).collect();
        let meta = json!({
            "page": page,
            "pageSize": page_size,
            "pageCount": total.div_ceil(page_size),
            "total": total,
        });
        (data, meta)
    }
}

fn sort_key(sort: &str) -> (String, bool) {
    match sort.trim().split_once(':') {
        Some((field, dir)) => (field.to_string(), dir.eq_ignore_ascii_case("desc")),
        None => (sort.trim().to_string(), false),
    }
}

fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn compare(a: &Value, b: &Value) -> Ordering {
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => text(a).cmp(&text(b)),
    }
}

// ---------------------------------------------------------------------------
// REST
// ---------------------------------------------------------------------------

async fn list_or_singleton(
    State(store): State<SharedStore>,
    Path(name): Path<String>,
    Query(params): Query<Vec<(String, String)>>,
    headers: HeaderMap,
) -> Result<Json<Value>, Rejection> {
    store.authorize(&headers)?;
    debug!(%name, ?params, "rest lookup");

    if let Some(records) = store.collections.get(&name) {
        let (data, pagination) = ListQuery::from_rest(&params).apply(records);
        return Ok(Json(json!({ "data": data, "meta": { "pagination": pagination } })));
    }
    let record = store.singletons.get(&name).ok_or_else(not_found)?;
    Ok(Json(json!({ "data": record, "meta": {} })))
}

async fn get_item(
    State(store): State<SharedStore>,
    Path((name, document_id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Result<Json<Value>, Rejection> {
    store.authorize(&headers)?;
    debug!(%name, %document_id, "rest item lookup");

    let record = store.find(&name, &document_id).ok_or_else(not_found)?;
    Ok(Json(json!({ "data": record, "meta": {} })))
}

// ---------------------------------------------------------------------------
// GraphQL
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct GraphQlBody {
    #[serde(default)]
    pub query: String,
    #[serde(rename = "operationName", default)]
    pub operation_name: Option<String>,
    #[serde(default)]
    pub variables: Value,
}

#[derive(Debug, Clone, Copy)]
enum Operation {
    List(&'static str),
    Item(&'static str),
    Singleton(&'static str),
    Schema,
}

/// Operation name, root field, and what it reads.
const OPERATIONS: &[(&str, &str, Operation)] = &[
    ("GetPuppies", "puppies", Operation::List("puppies")),
    ("GetPuppy", "puppy", Operation::Item("puppies")),
    ("GetStuds", "studs", Operation::List("studs")),
    ("GetStud", "stud", Operation::Item("studs")),
    ("GetGalleryItems", "galleryItems", Operation::List("gallery-items")),
    ("GetGalleryItem", "galleryItem", Operation::Item("gallery-items")),
    ("GetHomepage", "homepage", Operation::Singleton("homepage")),
    ("GetBreedingProgram", "breedingProgram", Operation::Singleton("breeding-program")),
    ("GetPrivacyPolicy", "privacyPolicy", Operation::Singleton("privacy-policy")),
    ("GetTermsOfService", "termsOfService", Operation::Singleton("terms-of-service")),
    ("IntrospectionQuery", "__schema", Operation::Schema),
];

/// Unknown operations answer 200 with an `errors` array, as GraphQL
/// servers do for validation failures.
async fn graphql(
    State(store): State<SharedStore>,
    headers: HeaderMap,
    Json(body): Json<GraphQlBody>,
) -> Result<Json<Value>, Rejection> {
    store.authorize(&headers)?;

    let name = body.operation_name.as_deref().unwrap_or_default();
    debug!(operation = name, "graphql request");

    let Some(&(_, root, operation)) = OPERATIONS.iter().find(|(op, _, _)| *op == name) else {
        return Ok(Json(json!({
            "data": null,
            "errors": [{ "message": format!("Unknown operation \"{name}\"") }]
        })));
    };

    let value = match operation {
        Operation::List(collection) => {
            let records = store.collections.get(collection).map(Vec::as_slice).unwrap_or_default();
            let (data, _) = ListQuery::from_graphql(&body.variables).apply(records);
            Value::Array(data)
        }
        Operation::Item(collection) => body
            .variables
            .get("documentId")
            .and_then(Value::as_str)
            .and_then(|id| store.find(collection, id))
            .cloned()
            .unwrap_or(Value::Null),
        Operation::Singleton(singleton) => store.singletons.get(singleton).cloned().unwrap_or(Value::Null),
        Operation::Schema => schema(),
    };

    let mut data = Map::new();
    data.insert(root.to_string(), value);
    Ok(Json(json!({ "data": data })))
}

/// `__schema` answer listing every root field in [`OPERATIONS`].
fn schema() -> Value {
    let fields: Vec<Value> = OPERATIONS
        .iter()
        .filter_map(|(_, root, operation)| {
            let (kind, args) = match operation {
                Operation::List(_) => ("LIST", json!([
                    { "name": "filters", "type": { "name": null, "kind": "INPUT_OBJECT" } },
                    { "name": "pagination", "type": { "name": "PaginationArg", "kind": "INPUT_OBJECT" } },
                    { "name": "sort", "type": { "name": null, "kind": "LIST" } }
                ])),
                Operation::Item(_) => ("OBJECT", json!([
                    { "name": "documentId", "type": { "name": null, "kind": "NON_NULL" } }
                ])),
                Operation::Singleton(_) => ("OBJECT", json!([])),
                Operation::Schema => return None,
            };
            Some(json!({ "name": root, "type": { "name": null, "kind": kind }, "args": args }))
        })
        .collect();
    json!({ "queryType": { "name": "Query", "fields": fields } })
}
