use std::borrow::Cow;

use indexmap::IndexMap;

use crate::helpers::major_version;
use crate::types::{Browser, ProductToken};

/// Product names that differ from the name of the browser they identify.
pub const PRODUCT_ALIASES: &[(&str, &str)] = &[
    // Chrome for iOS, on the same WebKit engine as Safari.
    ("CriOS", "Chrome (iOS)"),
    ("FxiOS", "Firefox (iOS)"),
    ("EdgiOS", "Edge (iOS)"),
    ("EdgA", "Edge (Android)"),
    // Chromium-based Edge.
    ("Edg", "Edge (Modern)"),
    // EdgeHTML-based Edge.
    ("Edge", "Edge (Legacy)"),
    ("OPR", "Opera"),
    ("SamsungBrowser", "Samsung Internet"),
    // Safari sends both `Safari/<build>` and `Version/<version>`; the latter
    // is the user-facing Safari version.
    ("Version", "Safari"),
];

/// Product-name → browser-name lookup.
///
/// Entries added through configuration take precedence over
/// [`PRODUCT_ALIASES`]. The table is built once and only read afterwards.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    overrides: IndexMap<String, String>,
}

impl AliasTable {
    pub fn with_overrides(overrides: IndexMap<String, String>) -> Self {
        Self { overrides }
    }

    /// Browser name for a product name; unknown names are returned unchanged.
    pub fn browser_name<'a>(&'a self, product: &'a str) -> Cow<'a, str> {
        if let Some(name) = self.overrides.get(product) {
            return Cow::Borrowed(name.as_str());
        }
        let name = PRODUCT_ALIASES
            .iter()
            .find(|(alias, _)| *alias == product)
            .map_or(product, |(_, name)| *name);
        Cow::Borrowed(name)
    }

    /// Display identity of the most specific token, or `None` when there are
    /// no tokens at all.
    pub fn map_identity<'a>(&'a self, ranked: &[ProductToken<'a>]) -> Option<Browser<'a>> {
        let main = ranked.first()?;
        Some(Browser {
            name: self.browser_name(main.name),
            major_version: main.version.map(major_version),
        })
    }
}
