use serde_json::Value;

use crate::content::post::{Post, published_posts};
use crate::foundation::error::{FolioError, FolioResult};

/// Anything that can hand back the raw rows of the blog table.
pub trait ContentSource {
    fn fetch_rows(&self) -> FolioResult<Vec<Value>>;
}

/// Rows held in memory. Used offline and in tests.
#[derive(Clone, Debug, Default)]
pub struct StaticContentSource {
    rows: Vec<Value>,
}

impl StaticContentSource {
    pub fn new(rows: Vec<Value>) -> Self {
        Self { rows }
    }

    /// Parse a JSON document with the same shapes the HTTP source accepts.
    pub fn from_json(json: &str) -> FolioResult<Self> {
        let doc: Value = serde_json::from_str(json)?;
        Ok(Self::new(extract_rows(doc)?))
    }
}

impl ContentSource for StaticContentSource {
    fn fetch_rows(&self) -> FolioResult<Vec<Value>> {
        Ok(self.rows.clone())
    }
}

/// Pull the row array out of a table response.
///
/// Accepts a bare array or an object carrying the rows under `list`, `rows` or `records`.
pub fn extract_rows(doc: Value) -> FolioResult<Vec<Value>> {
    match doc {
        Value::Array(rows) => Ok(rows),
        Value::Object(mut obj) => ["list", "rows", "records"]
            .iter()
            .find_map(|k| match obj.remove(*k) {
                Some(Value::Array(rows)) => Some(rows),
                _ => None,
            })
            .ok_or_else(|| FolioError::content("response object has no list/rows/records array")),
        other => Err(FolioError::content(format!(
            "expected a row array, got {}",
            kind_of(&other)
        ))),
    }
}

fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Fetch and normalize published posts. Any failure yields an empty list.
#[tracing::instrument(skip(source))]
pub fn load_posts(source: &dyn ContentSource) -> Vec<Post> {
    match source.fetch_rows() {
        Ok(rows) => {
            let posts = published_posts(&rows);
            tracing::debug!(rows = rows.len(), published = posts.len(), "loaded blog rows");
            posts
        }
        Err(err) => {
            tracing::warn!(error = %err, "blog content unavailable, showing no posts");
            Vec::new()
        }
    }
}

#[cfg(feature = "http")]
mod http {
    use std::time::Duration;

    use reqwest::blocking::Client;
    use serde_json::Value;

    use super::{ContentSource, extract_rows};
    use crate::foundation::error::{FolioError, FolioResult};

    /// `GET {endpoint}/{table_id}` against a hosted table service.
    #[derive(Clone, Debug)]
    pub struct HttpContentSource {
        client: Client,
        url: String,
    }

    impl HttpContentSource {
        pub fn new(endpoint: &str, table_id: &str, timeout: Duration) -> FolioResult<Self> {
            let endpoint = endpoint.trim_end_matches('/');
            let table_id = table_id.trim_matches('/');
            if endpoint.is_empty() || table_id.is_empty() {
                return Err(FolioError::validation(
                    "content endpoint and table id must be non-empty",
                ));
            }
            let client = Client::builder()
                .timeout(timeout)
                .build()
                .map_err(|e| FolioError::content(format!("building http client: {e}")))?;
            Ok(Self {
                client,
                url: format!("{endpoint}/{table_id}"),
            })
        }

        pub fn url(&self) -> &str {
            &self.url
        }
    }

    impl ContentSource for HttpContentSource {
        fn fetch_rows(&self) -> FolioResult<Vec<Value>> {
            let response = self
                .client
                .get(&self.url)
                .send()
                .map_err(|e| FolioError::content(format!("GET {}: {e}", self.url)))?;
            let status = response.status();
            if !status.is_success() {
                return Err(FolioError::content(format!(
                    "GET {} returned {status}",
                    self.url
                )));
            }
            let doc: Value = response
                .json()
                .map_err(|e| FolioError::content(format!("decoding {}: {e}", self.url)))?;
            extract_rows(doc)
        }
    }
}

#[cfg(feature = "http")]
pub use http::HttpContentSource;

#[cfg(test)]
#[path = "../../tests/unit/content/source.rs"]
mod tests;
