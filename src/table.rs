use std::collections::HashMap;

use http::StatusCode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectEntry {
    pub to: String,
    pub code: StatusCode,
}

/// Exact-match redirect table keyed by normalized request path, with a
/// default entry for everything else.
#[derive(Debug, Clone)]
pub struct RedirectTable {
    redirects: HashMap<String, RedirectEntry>,
    default: RedirectEntry,
}

impl RedirectTable {
    pub fn new(default_to: impl Into<String>, default_code: StatusCode) -> Self {
        Self {
            redirects: HashMap::new(),
            default: RedirectEntry {
                to: default_to.into(),
                code: default_code,
            },
        }
    }

    /// Registers a redirect, overwriting any earlier entry for the same
    /// normalized path. Returns the table so registrations chain.
    pub fn add(mut self, from: &str, to: impl Into<String>, code: StatusCode) -> Self {
        self.redirects.insert(
            normalize(from),
            RedirectEntry {
                to: to.into(),
                code,
            },
        );
        self
    }

    pub fn resolve(&self, path: &str) -> &RedirectEntry {
        self.redirects
            .get(&normalize(path))
            .unwrap_or(&self.default)
    }
}

/// Lowercases and strips at most one trailing slash, so `/Foo/` and `/foo`
/// share a key and `/` keys as the empty string.
fn normalize(path: &str) -> String {
    path.strip_suffix('/').unwrap_or(path).to_lowercase()
}
