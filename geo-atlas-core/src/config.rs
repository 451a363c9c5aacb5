//! API origin configuration

use url::Url;

use crate::error::{CoreError, CoreResult};

/// Environment variable holding the API origin.
pub const API_ORIGIN_ENV: &str = "GEO_ATLAS_API_ORIGIN";

/// Origin used when the environment does not provide one.
pub const DEFAULT_API_ORIGIN: &str = "http://localhost:5000";

/// Where the backend lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    origin: String,
}

impl ApiConfig {
    /// Validates an origin and strips its trailing slash.
    pub fn new(origin: &str) -> CoreResult<Self> {
        let trimmed = origin.trim().trim_end_matches('/');
        let parsed = Url::parse(trimmed)
            .map_err(|e| CoreError::Config(format!("Invalid API origin '{origin}': {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(CoreError::Config(format!(
                "Invalid API origin '{origin}': scheme must be http or https"
            )));
        }
        Ok(Self {
            origin: trimmed.to_string(),
        })
    }

    /// Reads [`API_ORIGIN_ENV`], falling back to [`DEFAULT_API_ORIGIN`].
    pub fn from_env() -> CoreResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with an injectable variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> CoreResult<Self> {
        match lookup(API_ORIGIN_ENV).filter(|v| !v.trim().is_empty()) {
            Some(origin) => Self::new(&origin),
            None => Self::new(DEFAULT_API_ORIGIN),
        }
    }

    /// Origin without a trailing slash.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Resolves an image reference returned by the API to a displayable URL.
    ///
    /// Absolute `http(s)` URLs pass through; relative paths are joined to the origin
    /// with exactly one slash.
    pub fn resolve_image_url(&self, path: Option<&str>) -> Option<String> {
        let path = path.map(str::trim).filter(|p| !p.is_empty())?;
        let lower = path.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            return Some(path.to_string());
        }
        Some(format!("{}/{}", self.origin, path.trim_start_matches('/')))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            origin: DEFAULT_API_ORIGIN.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ApiConfig {
        ApiConfig::new("http://h:5000").unwrap_or_default()
    }

    #[test]
    fn relative_paths_join_with_one_slash() {
        let c = config();
        assert_eq!(
            c.resolve_image_url(Some("/img/x.png")).as_deref(),
            Some("http://h:5000/img/x.png")
        );
        assert_eq!(
            c.resolve_image_url(Some("img/x.png")).as_deref(),
            Some("http://h:5000/img/x.png")
        );
    }

    #[test]
    fn absolute_urls_pass_through() {
        let c = config();
        assert_eq!(
            c.resolve_image_url(Some("https://cdn.example.com/a.webp")).as_deref(),
            Some("https://cdn.example.com/a.webp")
        );
        assert_eq!(
            c.resolve_image_url(Some("HTTP://cdn.example.com/a.png")).as_deref(),
            Some("HTTP://cdn.example.com/a.png")
        );
    }

    #[test]
    fn missing_image_resolves_to_none() {
        let c = config();
        assert_eq!(c.resolve_image_url(None), None);
        assert_eq!(c.resolve_image_url(Some("  ")), None);
    }

    #[test]
    fn origin_from_lookup() {
        let c = ApiConfig::from_lookup(|_| Some("https://api.example.com/".into()));
        assert_eq!(c.map(|c| c.origin().to_string()).ok().as_deref(), Some("https://api.example.com"));

        let d = ApiConfig::from_lookup(|_| None);
        assert_eq!(d.ok(), Some(ApiConfig::default()));
    }

    #[test]
    fn invalid_origin_is_config_error() {
        assert!(matches!(ApiConfig::new("not a url"), Err(CoreError::Config(_))));
        assert!(matches!(ApiConfig::new("ftp://h"), Err(CoreError::Config(_))));
    }
}
