//! Configuration section definitions.
//!
//! Each module corresponds to a section in `docsite.toml`:
//!
//! | Module      | TOML Section    | Purpose                              |
//! |-------------|-----------------|--------------------------------------|
//! | `site`      | `[site]`        | Title, url, base url, link policy    |
//! | `i18n`      | `[i18n]`        | Default and published locales        |
//! | `docs`      | `[docs]`        | Content roots, routes, edit links    |
//! | `theme`     | `[theme]`       | Color mode, syntax highlighting      |
//! | `navbar`    | `[navbar]`      | Top navigation                       |
//! | `footer`    | `[footer]`      | Footer links, copyright              |
//! | `analytics` | `[analytics]`   | Google tag (opaque)                  |
//! | `search`    | `[search]`      | Algolia DocSearch (opaque)           |

mod analytics;
mod docs;
mod footer;
mod i18n;
mod item;
mod navbar;
mod search;
mod site;
mod theme;

pub use analytics::{AnalyticsConfig, GtagConfig};
pub use docs::DocsConfig;
pub use footer::{FooterConfig, FooterGroup, FooterStyle};
pub use i18n::I18nConfig;
pub use item::LinkItem;
pub use navbar::{LogoConfig, NavPosition, NavbarConfig, NavbarItem};
pub use search::{AlgoliaConfig, SearchConfig};
pub use site::{ReportingSeverity, SiteSectionConfig};
pub use theme::{ColorMode, PrismConfig, PrismTheme, ThemeSectionConfig};
