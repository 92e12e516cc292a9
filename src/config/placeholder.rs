//! Detection of values left over from the scaffold template.
//!
//! A freshly generated site carries sample values (`https://your-docusaurus-site.example.com`,
//! `facebook/docusaurus`, `YOUR_APP_ID`, ...) and links to the generator's own
//! community pages. Each one is reported as a warning.

use super::{
    AlgoliaConfig, ConfigDiagnostics, FieldLocation, FieldPath, FooterConfig, GtagConfig,
    LogoConfig, NavbarConfig, SiteConfig, SiteSectionConfig,
};

/// A sample value and the hint shown when it is found.
struct Placeholder {
    field: FieldPath,
    matches: fn(&str) -> bool,
    hint: &'static str,
}

fn is_example_url(value: &str) -> bool {
    url::Url::parse(value)
        .ok()
        .and_then(|url| url.host_str().map(str::to_ascii_lowercase))
        .is_some_and(|host| {
            host == "example.com" || host.ends_with(".example.com") || host == "example.org"
        })
}

const PLACEHOLDERS: &[Placeholder] = &[
    Placeholder {
        field: SiteSectionConfig::FIELDS.url,
        matches: is_example_url,
        hint: "set the production URL of the site",
    },
    Placeholder {
        field: SiteSectionConfig::FIELDS.title,
        matches: |v| v == "My Site",
        hint: "set the site title",
    },
    Placeholder {
        field: SiteSectionConfig::FIELDS.tagline,
        matches: |v| v == "Dinosaurs are cool",
        hint: "set a tagline or remove it",
    },
    Placeholder {
        field: SiteSectionConfig::FIELDS.organization_name,
        matches: |v| v == "facebook",
        hint: "set the GitHub user or organization that hosts the site",
    },
    Placeholder {
        field: SiteSectionConfig::FIELDS.project_name,
        matches: |v| v == "docusaurus",
        hint: "set the GitHub repository name",
    },
    Placeholder {
        field: GtagConfig::FIELDS.tracking_id,
        matches: |v| v == "G-XXXXXXXXXX",
        hint: "set the measurement ID or remove [analytics.gtag]",
    },
    Placeholder {
        field: AlgoliaConfig::FIELDS.app_id,
        matches: |v| v == "YOUR_APP_ID",
        hint: "set the Algolia application ID or remove [search.algolia]",
    },
    Placeholder {
        field: AlgoliaConfig::FIELDS.api_key,
        matches: |v| v == "YOUR_SEARCH_API_KEY",
        hint: "set the search-only API key",
    },
    Placeholder {
        field: AlgoliaConfig::FIELDS.index_name,
        matches: |v| v == "YOUR_INDEX_NAME",
        hint: "set the Algolia index name",
    },
    Placeholder {
        field: FooterConfig::FIELDS.copyright,
        matches: |v| v.contains("My Project, Inc."),
        hint: "set the copyright holder",
    },
];

/// Scaffold link targets: the generator's repository and community pages.
const SCAFFOLD_LINKS: &[&str] = &[
    "github.com/facebook/docusaurus",
    "/invite/docusaurus",
    "x.com/docusaurus",
    "twitter.com/docusaurus",
    "stackoverflow.com/questions/tagged/docusaurus",
];

fn is_scaffold_link(target: &str) -> bool {
    let target = target.to_ascii_lowercase();
    SCAFFOLD_LINKS.iter().any(|link| target.contains(link))
}

/// Navbar, logo and footer link targets, with their locations.
fn link_targets(config: &SiteConfig) -> Vec<(FieldLocation, &str)> {
    let navbar = &config.navbar;
    let mut targets = Vec::new();

    if let Some(href) = navbar.logo.as_ref().and_then(|l| l.href.as_deref()) {
        targets.push((LogoConfig::FIELDS.href.into(), href));
    }
    for (i, item) in navbar.items.iter().enumerate() {
        let at = NavbarConfig::FIELDS.items.at(i);
        targets.extend(
            [item.to.as_deref(), item.href.as_deref()]
                .into_iter()
                .flatten()
                .map(|target| (at.clone(), target)),
        );
    }
    for (i, group) in config.footer.links.iter().enumerate() {
        let group_at = FooterConfig::FIELDS.links.at(i);
        for (j, item) in group.items.iter().enumerate() {
            let at = group_at.child_at("items", j);
            targets.extend(
                [item.to.as_deref(), item.href.as_deref()]
                    .into_iter()
                    .flatten()
                    .map(|target| (at.clone(), target)),
            );
        }
    }
    targets
}

/// Values of `config` checked against the scaffold samples.
fn candidates(config: &SiteConfig) -> Vec<(FieldPath, &str)> {
    let site = &config.site;
    let mut values = vec![
        (SiteSectionConfig::FIELDS.title, site.title.as_str()),
        (SiteSectionConfig::FIELDS.tagline, site.tagline.as_str()),
    ];
    let optional = [
        (SiteSectionConfig::FIELDS.url, &site.url),
        (SiteSectionConfig::FIELDS.organization_name, &site.organization_name),
        (SiteSectionConfig::FIELDS.project_name, &site.project_name),
        (FooterConfig::FIELDS.copyright, &config.footer.copyright),
    ];
    values.extend(
        optional
            .into_iter()
            .filter_map(|(field, value)| value.as_deref().map(|v| (field, v))),
    );

    if let Some(gtag) = &config.analytics.gtag {
        values.push((GtagConfig::FIELDS.tracking_id, gtag.tracking_id.as_str()));
    }
    if let Some(algolia) = &config.search.algolia {
        values.extend([
            (AlgoliaConfig::FIELDS.app_id, algolia.app_id.as_str()),
            (AlgoliaConfig::FIELDS.api_key, algolia.api_key.as_str()),
            (AlgoliaConfig::FIELDS.index_name, algolia.index_name.as_str()),
        ]);
    }
    values
}

/// Warn about every scaffold value still present in `config`.
pub fn check(config: &SiteConfig, diag: &mut ConfigDiagnostics) {
    for (field, value) in candidates(config) {
        let value = value.trim();
        let found = PLACEHOLDERS
            .iter()
            .find(|p| p.field == field && (p.matches)(value));
        if let Some(placeholder) = found {
            diag.warn_with_hint(
                field,
                format!("`{value}` is a template placeholder"),
                placeholder.hint,
            );
        }
    }

    for (at, target) in link_targets(config) {
        if is_scaffold_link(target) {
            diag.warn_with_hint(
                at,
                format!("`{}` is a template placeholder", target.trim()),
                "link to your own project or community, or remove this item",
            );
        }
    }
}
