use crate::domain::RouteLabeler;
use axum::extract::{MatchedPath, Request};

/// Route labels taken from axum's `MatchedPath`.
///
/// Requests that matched no route (served by the router's fallback) get the
/// `fallback` label, which defaults to `/`: the fallback acts as a catch-all
/// prefix route.
pub struct MatchedPathLabeler {
    fallback: String,
}

impl MatchedPathLabeler {
    // ---
    pub fn new() -> Self {
        Self::with_fallback("/")
    }

    pub fn with_fallback(fallback: impl Into<String>) -> Self {
        // ---
        MatchedPathLabeler {
            fallback: fallback.into(),
        }
    }
}

impl Default for MatchedPathLabeler {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteLabeler for MatchedPathLabeler {
    fn route_label(&self, req: &Request) -> String {
        // ---
        req.extensions()
            .get::<MatchedPath>()
            .map(|matched| matched.as_str().to_string())
            .unwrap_or_else(|| self.fallback.clone())
    }
}
