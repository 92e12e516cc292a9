//! Index of site paths that exist on disk.
//!
//! Routes are collected without `base_url`, the same form navbar and footer
//! `to` targets use:
//!
//! | Source                         | Route                      |
//! |--------------------------------|----------------------------|
//! | `docs/01-intro.md`             | `/docs/intro`              |
//! | `docs/guides/index.mdx`        | `/docs/guides`             |
//! | `docs/a.md` with `id: b`       | `/docs/b`                  |
//! | `docs/a.md` with `slug: /`     | `/docs`                    |
//! | `blog/2024-01-15-welcome.md`   | `/blog/2024/01/15/welcome` |
//! | `src/pages/about.tsx`          | `/about`                   |
//! | `static/img/sol.png`           | `/img/sol.png`             |

use std::fs;
use std::path::{Component, Path};
use std::sync::LazyLock;

use jwalk::WalkDir;
use regex::Regex;
use rustc_hash::FxHashSet;
use serde::Deserialize;

use crate::config::SiteConfig;
use crate::debug;
use crate::utils::route::{join_base, strip_query_fragment};

/// Standalone pages directory (relative to site root).
pub const PAGES_DIR: &str = "src/pages";

const DOC_EXTENSIONS: &[&str] = &["md", "mdx"];
const PAGE_EXTENSIONS: &[&str] = &["md", "mdx", "js", "jsx", "ts", "tsx"];
const IGNORED_FILES: &[&str] = &[".DS_Store"];

/// Ordering prefix of a doc segment: `01-intro`, `2_setup`, `3.faq`.
static NUMBER_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+[-_.](.+)$").unwrap());

/// Date prefix of a blog post: `2024-01-15-welcome`.
static BLOG_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})[-_](.+)$").unwrap());

/// Leading `---` YAML block of a content file.
static FRONT_MATTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^---[ \t]*\r?\n(.*?)\r?\n---[ \t]*(?:\r?\n|$)").unwrap()
});

/// Front-matter keys that change a doc's route.
#[derive(Debug, Default, PartialEq, Eq, Deserialize)]
struct DocFrontMatter {
    id: Option<String>,
    slug: Option<String>,
}

impl DocFrontMatter {
    /// Parse the front matter of `content`; absent or malformed YAML yields no overrides.
    fn parse(content: &str) -> Self {
        let Some(caps) = FRONT_MATTER_RE.captures(content) else {
            return Self::default();
        };
        serde_yaml::from_str::<Option<Self>>(&caps[1])
            .unwrap_or_else(|err| {
                debug!("check"; "ignoring front matter: {}", err);
                None
            })
            .unwrap_or_default()
    }

    fn read(path: &Path) -> Self {
        fs::read_to_string(path)
            .map(|content| Self::parse(&content))
            .unwrap_or_default()
    }
}

/// Set of existing site paths.
#[derive(Debug, Default)]
pub struct RouteIndex {
    routes: FxHashSet<String>,
}

impl RouteIndex {
    /// Scan docs, blog, pages and static files under the site root.
    pub fn scan(config: &SiteConfig) -> Self {
        let root = config.get_root();
        let docs = &config.docs;
        let mut index = Self::default();

        let docs_dir = root.join(&docs.path);
        for rel in collect_files(&docs_dir, DOC_EXTENSIONS) {
            let front = DocFrontMatter::read(&docs_dir.join(&rel));
            index.insert(join_base(&docs.route_base_path, &doc_slug(&rel, &front)));
        }

        let blog_dir = root.join(&docs.blog_path);
        if blog_dir.is_dir() {
            let base = &docs.blog_route_base_path;
            index.insert(base.clone());
            index.insert(join_base(base, "archive"));
            index.insert(join_base(base, "tags"));
            for rel in collect_files(&blog_dir, DOC_EXTENSIONS) {
                index.insert(join_base(base, &blog_slug(&rel)));
            }
        }

        for rel in collect_files(&root.join(PAGES_DIR), PAGE_EXTENSIONS) {
            let segments = route_segments(&rel);
            index.insert(join_base("/", &segments.join("/")));
        }

        for rel in collect_files(&root.join(&docs.static_dir), &[]) {
            index.insert(join_base("/", &rel));
        }

        index
    }

    fn insert(&mut self, route: String) {
        self.routes.insert(normalize_route(&route));
    }

    /// Whether an internal link target maps to an existing path.
    pub fn contains(&self, target: &str) -> bool {
        self.routes
            .contains(&normalize_route(strip_query_fragment(target)))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Strip the trailing slash except for the root route.
fn normalize_route(route: &str) -> String {
    let trimmed = route.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Files under `dir`, relative to it. An empty `extensions` accepts every file.
fn collect_files(dir: &Path, extensions: &[&str]) -> Vec<String> {
    if !dir.is_dir() {
        return Vec::new();
    }
    let mut files: Vec<_> = WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            let name = e.file_name().to_str().unwrap_or_default();
            !IGNORED_FILES.contains(&name) && !name.starts_with('_')
        })
        .filter(|e| {
            extensions.is_empty()
                || e.path()
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| extensions.contains(&ext))
        })
        .filter_map(|e| {
            e.path()
                .strip_prefix(dir)
                .ok()
                .map(to_slash)
        })
        .collect();
    files.sort();
    files
}

/// Join normal path components with `/` on every platform.
fn to_slash(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(s) => s.to_str(),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Path segments of a content file without extension, `index` and `README`.
fn route_segments(rel: &str) -> Vec<&str> {
    let mut segments: Vec<&str> = rel.split('/').collect();
    if let Some(last) = segments.pop() {
        let stem = last.rsplit_once('.').map_or(last, |(stem, _)| stem);
        if !stem.eq_ignore_ascii_case("index") && !stem.eq_ignore_ascii_case("readme") {
            segments.push(stem);
        }
    }
    segments
}

/// Doc id of a file under the docs directory, ordering prefixes removed.
///
/// `01-basics/02-variables.md` -> `basics/variables`
fn doc_id(rel: &str) -> String {
    route_segments(rel)
        .into_iter()
        .map(strip_number_prefix)
        .collect::<Vec<_>>()
        .join("/")
}

fn strip_number_prefix(segment: &str) -> &str {
    match NUMBER_PREFIX_RE.captures(segment) {
        Some(caps) => caps.get(1).map_or(segment, |m| m.as_str()),
        None => segment,
    }
}

/// Route of a doc relative to the docs route base.
///
/// A front-matter `slug` wins (a leading `/` makes it relative to the route
/// base, otherwise to the doc's directory). A front-matter `id` replaces the
/// file name unless the file is a directory index.
fn doc_slug(rel: &str, front: &DocFrontMatter) -> String {
    let (dir, file) = rel.rsplit_once('/').unwrap_or(("", rel));
    let dir = dir
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(strip_number_prefix)
        .collect::<Vec<_>>()
        .join("/");

    if let Some(slug) = front.slug.as_deref().map(str::trim) {
        return if slug.starts_with('/') || dir.is_empty() {
            slug.trim_start_matches('/').to_string()
        } else {
            format!("{dir}/{slug}")
        };
    }

    let name = match front.id.as_deref().map(str::trim) {
        Some(id) if !doc_id(file).is_empty() => id.to_string(),
        _ => doc_id(file),
    };
    match (dir.is_empty(), name.is_empty()) {
        (_, true) => dir,
        (true, false) => name,
        (false, false) => format!("{dir}/{name}"),
    }
}

/// Route of a blog post relative to the blog base.
///
/// `2024-01-15-welcome.md` and `2024-01-15-welcome/index.md` both map to
/// `2024/01/15/welcome`.
fn blog_slug(rel: &str) -> String {
    let segments = route_segments(rel);
    let name = segments.join("/");
    match BLOG_DATE_RE.captures(&name) {
        Some(caps) => format!("{}/{}/{}/{}", &caps[1], &caps[2], &caps[3], &caps[4]),
        None => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn test_doc_id() {
        assert_eq!(doc_id("intro.md"), "intro");
        assert_eq!(doc_id("01-basics/02-variables.mdx"), "basics/variables");
        assert_eq!(doc_id("guides/index.md"), "guides");
        assert_eq!(doc_id("README.md"), "");
        assert_eq!(doc_id("2024.md"), "2024");
    }

    #[test]
    fn test_front_matter() {
        let front = DocFrontMatter::parse(
            "---\nid: getting-started\ntitle: Intro\nslug: /\n---\n# Intro\n",
        );
        assert_eq!(front.id.as_deref(), Some("getting-started"));
        assert_eq!(front.slug.as_deref(), Some("/"));

        assert_eq!(DocFrontMatter::parse("# no front matter\n"), DocFrontMatter::default());
        assert_eq!(DocFrontMatter::parse("---\n[broken\n---\n"), DocFrontMatter::default());
        assert_eq!(DocFrontMatter::parse("---\n---\n"), DocFrontMatter::default());
    }

    #[test]
    fn test_doc_slug() {
        let none = DocFrontMatter::default();
        let id = |id: &str| DocFrontMatter {
            id: Some(id.into()),
            slug: None,
        };
        let slug = |slug: &str| DocFrontMatter {
            id: None,
            slug: Some(slug.into()),
        };

        assert_eq!(doc_slug("01-basics/02-variables.md", &none), "basics/variables");
        assert_eq!(doc_slug("01-intro.md", &id("getting-started")), "getting-started");
        assert_eq!(doc_slug("basics/a.md", &id("types")), "basics/types");
        assert_eq!(doc_slug("basics/index.md", &id("overview")), "basics");
        assert_eq!(doc_slug("01-intro.md", &slug("/")), "");
        assert_eq!(doc_slug("basics/a.md", &slug("/start/here")), "start/here");
        assert_eq!(doc_slug("basics/a.md", &slug("first-steps")), "basics/first-steps");
    }

    #[test]
    fn test_blog_slug() {
        assert_eq!(blog_slug("2024-01-15-welcome.md"), "2024/01/15/welcome");
        assert_eq!(blog_slug("2024-01-15-welcome/index.md"), "2024/01/15/welcome");
        assert_eq!(blog_slug("release-notes.md"), "release-notes");
    }

    #[test]
    fn test_scan_site() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        for rel in [
            "docs/01-intro.md",
            "docs/guides/index.mdx",
            "docs/_partial.md",
            "blog/2024-01-15-welcome.md",
            "src/pages/index.tsx",
            "src/pages/about.md",
            "static/img/sol.png",
        ] {
            touch(root, rel);
        }
        fs::write(root.join("docsite.toml"), "").unwrap();

        let mut config = test_parse_config("");
        config.root = root.to_path_buf();
        let index = RouteIndex::scan(&config);

        for route in [
            "/docs/intro",
            "/docs/guides/",
            "/blog",
            "/blog/tags",
            "/blog/2024/01/15/welcome#comments",
            "/",
            "/about?ref=nav",
            "/img/sol.png",
        ] {
            assert!(index.contains(route), "{route}");
        }
        assert!(!index.contains("/docs/_partial"));
        assert!(!index.contains("/docs/01-intro"));
        assert!(!index.contains("/blog/welcome"));
    }

    #[test]
    fn test_front_matter_routes_at_site_root() {
        let dir = TempDir::new().unwrap();
        let docs = dir.path().join("docs");
        fs::create_dir_all(docs.join("basics")).unwrap();
        fs::write(
            docs.join("01-intro.md"),
            "---\nid: getting-started\nslug: /\n---\n# Welcome\n",
        )
        .unwrap();
        fs::write(docs.join("basics/02-types.md"), "---\nid: data-types\n---\n").unwrap();

        let mut config = test_parse_config("[docs]\nroute_base_path = \"/\"");
        config.root = dir.path().to_path_buf();
        let index = RouteIndex::scan(&config);

        assert!(index.contains("/"));
        assert!(index.contains("/basics/data-types"));
        assert!(!index.contains("/intro"));
        assert!(!index.contains("/basics/types"));
    }

    #[test]
    fn test_docs_at_site_root() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "docs/intro.md");

        let mut config = test_parse_config("[docs]\nroute_base_path = \"/\"");
        config.root = dir.path().to_path_buf();
        let index = RouteIndex::scan(&config);

        assert!(index.contains("/intro"));
        assert!(!index.contains("/blog"));
        assert_eq!(index.len(), 1);
    }
}
