//! `[docs]` section configuration.
//!
//! Content roots and the routes they are served under.
//!
//! # Example
//!
//! ```toml
//! [docs]
//! path = "docs"
//! route_base_path = "/docs"
//! sidebar_path = "sidebars.js"
//! edit_url = "https://github.com/Brave-teknologi/belajar-solidity/tree/main/"
//! blog_path = "blog"
//! static_dir = "static"
//! ```

use std::path::{Path, PathBuf};

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostic, ConfigDiagnostics, FieldPath};
use crate::utils::route::join_base;

/// Documentation and blog content settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "docs")]
pub struct DocsConfig {
    /// Docs content directory (relative to site root).
    #[config(default = "docs")]
    pub path: PathBuf,

    /// URL route for the docs section.
    #[config(default = "/docs")]
    pub route_base_path: String,

    /// Sidebar definition file (relative to site root).
    pub sidebar_path: Option<PathBuf>,

    /// Base URL for "edit this page" links.
    pub edit_url: Option<String>,

    /// Blog content directory (relative to site root).
    #[config(default = "blog")]
    pub blog_path: PathBuf,

    /// URL route for the blog.
    #[config(default = "/blog")]
    pub blog_route_base_path: String,

    /// Static files directory, served at the base URL (relative to site root).
    #[config(default = "static")]
    pub static_dir: PathBuf,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            path: "docs".into(),
            route_base_path: "/docs".into(),
            sidebar_path: None,
            edit_url: None,
            blog_path: "blog".into(),
            blog_route_base_path: "/blog".into(),
            static_dir: "static".into(),
        }
    }
}

impl DocsConfig {
    /// Validate routes and the edit URL.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        Self::check_route(Self::FIELDS.route_base_path, &self.route_base_path, diag);
        Self::check_route(
            Self::FIELDS.blog_route_base_path,
            &self.blog_route_base_path,
            diag,
        );

        if let Some(edit_url) = &self.edit_url {
            match url::Url::parse(edit_url) {
                Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
                Ok(parsed) => diag.error(ConfigDiagnostic::invalid(
                    Self::FIELDS.edit_url,
                    format!("scheme '{}' not supported, must be http or https", parsed.scheme()),
                )),
                Err(e) => diag.error(
                    ConfigDiagnostic::invalid(Self::FIELDS.edit_url, format!("invalid URL: {e}"))
                        .with_hint("use format like https://github.com/org/project/tree/main/"),
                ),
            }
        }
    }

    fn check_route(field: FieldPath, route: &str, diag: &mut ConfigDiagnostics) {
        if !route.starts_with('/') {
            diag.error(
                ConfigDiagnostic::invalid(field, "must begin with `/`")
                    .with_hint(format!("use \"/{}\"", route.trim_start_matches('/'))),
            );
        }
    }

    /// Warn about content directories missing under `root`.
    pub fn validate_paths(&self, root: &Path, diag: &mut ConfigDiagnostics) {
        let dirs = [
            (Self::FIELDS.path, &self.path),
            (Self::FIELDS.blog_path, &self.blog_path),
            (Self::FIELDS.static_dir, &self.static_dir),
        ];
        for (field, dir) in dirs {
            if !root.join(dir).is_dir() {
                diag.warn(field, format!("directory `{}` does not exist", dir.display()));
            }
        }

        if let Some(sidebar) = &self.sidebar_path
            && !root.join(sidebar).is_file()
        {
            diag.warn(
                Self::FIELDS.sidebar_path,
                format!("file `{}` does not exist", sidebar.display()),
            );
        }
    }

    /// Site path of a document id (`intro` -> `/docs/intro`).
    pub fn doc_route(&self, doc_id: &str) -> String {
        join_base(&self.route_base_path, doc_id)
    }
}
