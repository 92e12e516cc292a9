//! Link descriptor targets.
//!
//! Navbar and footer items point either at an internal site path
//! (`to = "/blog"`) or at an absolute URL (`href = "https://..."`).
//! Both keys accept both kinds; exactly one of them must be set.

use serde::Serialize;
use thiserror::Error;
use url::Url;

use crate::utils::route::{is_external_link, join_base};

/// Why a link descriptor has no usable target.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkTargetError {
    #[error("no target, set `to` or `href`")]
    Missing,

    #[error("both `to` and `href` are set")]
    Ambiguous,

    #[error("empty target")]
    Empty,

    #[error("`{0}` is neither a path beginning with `/` nor an absolute URL")]
    Unresolvable(String),

    #[error("invalid URL `{0}`: {1}")]
    InvalidUrl(String, String),

    #[error("URL `{0}` has no host")]
    MissingHost(String),
}

/// A resolved link target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "target", rename_all = "lowercase")]
pub enum LinkTarget {
    /// Site path beginning with `/`, relative to `site.base_url`.
    Internal(String),
    /// Absolute URL with a scheme.
    External(Url),
}

impl LinkTarget {
    /// Classify a link descriptor from its `to` / `href` pair.
    pub fn parse(to: Option<&str>, href: Option<&str>) -> Result<Self, LinkTargetError> {
        match (to, href) {
            (None, None) => Err(LinkTargetError::Missing),
            (Some(_), Some(_)) => Err(LinkTargetError::Ambiguous),
            (Some(raw), None) | (None, Some(raw)) => Self::parse_str(raw),
        }
    }

    /// Classify a single target string.
    pub fn parse_str(raw: &str) -> Result<Self, LinkTargetError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(LinkTargetError::Empty);
        }

        if raw.starts_with('/') && !raw.starts_with("//") {
            return Ok(Self::Internal(raw.to_string()));
        }

        if !is_external_link(raw) {
            return Err(LinkTargetError::Unresolvable(raw.to_string()));
        }

        let url = Url::parse(raw)
            .map_err(|e| LinkTargetError::InvalidUrl(raw.to_string(), e.to_string()))?;
        if matches!(url.scheme(), "http" | "https") && url.host_str().is_none() {
            return Err(LinkTargetError::MissingHost(raw.to_string()));
        }
        Ok(Self::External(url))
    }

    #[inline]
    pub fn is_external(&self) -> bool {
        matches!(self, Self::External(_))
    }

    /// The `href` to emit: internal paths are prefixed with the base URL.
    pub fn resolve(&self, base_url: &str) -> String {
        match self {
            Self::Internal(path) => join_base(base_url, path),
            Self::External(url) => url.to_string(),
        }
    }
}
