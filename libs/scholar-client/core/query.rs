use url::form_urlencoded::byte_serialize;
use url::Url;

/// Ordered query-string builder
///
/// Keys and values are percent-encoded on insertion. Absent and empty values
/// are skipped, and list values travel as a single comma-joined value per key
/// (`tags=a,b`), each element encoded on its own so the separator stays a
/// literal comma.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

fn encode(raw: &str) -> String {
    byte_serialize(raw.as_bytes()).collect()
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `key=value`; empty values are skipped
    pub fn push(&mut self, key: &str, value: impl ToString) -> &mut Self {
        let value = value.to_string();
        if !value.is_empty() {
            self.pairs.push((encode(key), encode(&value)));
        }
        self
    }

    /// Add `key=value` when `value` is present
    pub fn push_opt<V: ToString>(&mut self, key: &str, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.push(key, value);
        }
        self
    }

    /// Add `key=v1,v2,...`; an empty list adds nothing
    pub fn push_list<V: ToString>(&mut self, key: &str, values: &[V]) -> &mut Self {
        let encoded: Vec<String> = values
            .iter()
            .map(|v| v.to_string())
            .filter(|v| !v.is_empty())
            .map(|v| encode(&v))
            .collect();

        if !encoded.is_empty() {
            self.pairs.push((encode(key), encoded.join(",")));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Encoded `k=v&k=v` string, without a leading `?`
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Replace the query of `url` with these parameters
    pub fn apply(&self, url: &mut Url) {
        if self.is_empty() {
            url.set_query(None);
        } else {
            url.set_query(Some(&self.to_query_string()));
        }
    }
}
