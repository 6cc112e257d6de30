//! Navigation targets.
//!
//! Two logical routes: the list at `/`, and a detail page keyed by a
//! lowercased country name at `/{name}` (URL-encoded).

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    List,
    Detail { name: String },
}

impl Route {
    /// Detail route for a country. The name is trimmed and lowercased.
    pub fn detail(identifier: &str) -> Self {
        Route::Detail {
            name: identifier.trim().to_lowercase(),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::List => "/".to_string(),
            Route::Detail { name } => format!("/{}", urlencoding::encode(name)),
        }
    }

    /// Parses a route path. Anything past the first segment is ignored.
    pub fn from_path(path: &str) -> Option<Self> {
        let segment = path.trim_start_matches('/').split('/').next().unwrap_or("");
        if segment.is_empty() {
            return Some(Route::List);
        }
        let name = urlencoding::decode(segment).ok()?;
        Some(Route::detail(&name))
    }
}
