//! Type-safe config field paths.

use owo_colors::OwoColorize;
use std::borrow::Cow;
use std::fmt;

/// A static dotted path to a config field, e.g. `site.base_url`.
///
/// Generated per section by `#[derive(Config)]`:
///
/// ```ignore
/// #[derive(Config)]
/// #[config(section = "i18n")]
/// pub struct I18nConfig {
///     pub default_locale: Option<String>,
/// }
///
/// diag.missing(I18nConfig::FIELDS.default_locale, "required");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    /// Location of the `index`-th element of a list field.
    ///
    /// `navbar.items` -> `navbar.items[2]`
    pub fn at(self, index: usize) -> FieldLocation {
        FieldLocation(Cow::Owned(format!("{}[{}]", self.0, index)))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}

/// A field location that may point inside list elements,
/// e.g. `footer.links[0].items[3].label`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldLocation(Cow<'static, str>);

impl FieldLocation {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Append a child key.
    pub fn child(&self, key: &str) -> Self {
        Self(Cow::Owned(format!("{}.{}", self.0, key)))
    }

    /// Append a list index to a child key.
    pub fn child_at(&self, key: &str, index: usize) -> Self {
        Self(Cow::Owned(format!("{}.{}[{}]", self.0, key, index)))
    }
}

impl From<FieldPath> for FieldLocation {
    fn from(path: FieldPath) -> Self {
        Self(Cow::Borrowed(path.0))
    }
}

impl From<String> for FieldLocation {
    fn from(path: String) -> Self {
        Self(Cow::Owned(path))
    }
}

impl fmt::Display for FieldLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}
