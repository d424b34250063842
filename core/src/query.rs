//! List parameters and their REST / GraphQL encodings.

use serde_json::{json, Map, Value};
use url::form_urlencoded::byte_serialize;

/// Paging, expansion, equality filters and sort for a list request.
///
/// Zero page numbers, zero page sizes and empty strings are treated as
/// "not given", so `ListParams::default()` produces an empty query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub populate: Option<String>,
    /// `(field, required value)` pairs, serialized in insertion order.
    pub filters: Vec<(String, String)>,
    pub sort: Option<String>,
}

impl ListParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn populate(mut self, populate: impl Into<String>) -> Self {
        self.populate = Some(populate.into());
        self
    }

    pub fn filter(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push((field.into(), value.into()));
        self
    }

    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    fn page_number(&self) -> Option<u32> {
        self.page.filter(|p| *p > 0)
    }

    fn page_len(&self) -> Option<u32> {
        self.page_size.filter(|s| *s > 0)
    }

    fn populate_value(&self) -> Option<&str> {
        self.populate.as_deref().filter(|p| !p.is_empty())
    }

    fn sort_value(&self) -> Option<&str> {
        self.sort.as_deref().filter(|s| !s.is_empty())
    }

    /// REST query string without the leading `?`.
    ///
    /// Bracketed keys stay literal (`filters[status][$eq]=Available`);
    /// values and field names are form-encoded.
    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<(String, String)> = Vec::new();
        if let Some(page) = self.page_number() {
            pairs.push(("pagination[page]".to_string(), page.to_string()));
        }
        if let Some(size) = self.page_len() {
            pairs.push(("pagination[pageSize]".to_string(), size.to_string()));
        }
        if let Some(populate) = self.populate_value() {
            pairs.push(("populate".to_string(), encode(populate)));
        }
        if let Some(sort) = self.sort_value() {
            pairs.push(("sort".to_string(), encode(sort)));
        }
        for (field, value) in &self.filters {
            pairs.push((format!("filters[{}][$eq]", encode(field)), encode(value)));
        }

        pairs
            .into_iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// GraphQL variables for a list document declaring `$filters`,
    /// `$pagination` and `$sort`. Absent parameters are left out.
    pub fn to_graphql_variables(&self) -> Value {
        let mut vars = Map::new();

        if !self.filters.is_empty() {
            let mut filters = Map::new();
            for (field, value) in &self.filters {
                filters.insert(field.clone(), json!({ "eq": value }));
            }
            vars.insert("filters".to_string(), Value::Object(filters));
        }

        let mut pagination = Map::new();
        if let Some(page) = self.page_number() {
            pagination.insert("page".to_string(), json!(page));
        }
        if let Some(size) = self.page_len() {
            pagination.insert("pageSize".to_string(), json!(size));
        }
        if !pagination.is_empty() {
            vars.insert("pagination".to_string(), Value::Object(pagination));
        }

        if let Some(sort) = self.sort_value() {
            vars.insert("sort".to_string(), json!([sort]));
        }

        Value::Object(vars)
    }
}

fn encode(value: &str) -> String {
    byte_serialize(value.as_bytes()).collect()
}
