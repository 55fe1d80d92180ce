//! Sprite sheet generation
//!
//! A sprite sheet is one `<svg>` container holding a `<symbol>` per icon, so
//! pages can render any icon with `<use xlink:href="#id"/>`. Merging sits
//! behind [`SpriteMerge`] so hosts can plug in their own serializer;
//! [`SymbolSprite`] is the default.
//!
//! The default merge does not parse SVG. It locates the root element of each
//! icon, keeps the attributes a symbol needs, and moves the inner markup over
//! verbatim.

use indexmap::IndexMap;
use regex::Regex;
use std::fmt::Write as _;
use std::path::Path;
use std::sync::LazyLock;

use crate::error::Result;

static SVG_OPEN_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<svg\b([^>]*?)(/?)>").expect("svg tag pattern is valid"));

static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([A-Za-z_:][-A-Za-z0-9_:.]*)\s*=\s*(?:"([^"]*)"|'([^']*)')"#)
        .expect("attribute pattern is valid")
});

/// Root attributes carried over from an icon to its symbol
const SYMBOL_ATTRIBUTES: [&str; 4] = ["viewBox", "preserveAspectRatio", "role", "aria-labelledby"];

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

/// One named icon to place in a sprite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteIcon {
    pub id: String,
    pub content: String,
}

impl SpriteIcon {
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }
}

/// Combines named SVG fragments into a single sprite sheet
pub trait SpriteMerge: Send + Sync + std::fmt::Debug {
    fn merge(&self, icons: &[SpriteIcon]) -> Result<String>;
}

/// Derive an icon id: `prefix` + file name without the `.svg` extension
///
/// ```
/// use fob_svgstore::icon_id;
/// use std::path::Path;
///
/// assert_eq!(icon_id("ico-", Path::new("/a/b/foo.svg")), "ico-foo");
/// ```
pub fn icon_id(prefix: &str, path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    let stem = file_name.strip_suffix(".svg").unwrap_or(&file_name);
    format!("{prefix}{stem}")
}

/// Default sprite serializer emitting `<symbol>` elements
#[derive(Debug, Clone)]
pub struct SymbolSprite {
    /// Attributes set on the sprite container
    svg_attrs: IndexMap<String, String>,
}

impl SymbolSprite {
    /// Sprite whose container is hidden with `display="none"`
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_svg_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.svg_attrs.insert(name.into(), value.into());
        self
    }

    fn write_symbol(out: &mut String, icon: &SpriteIcon) {
        let (attrs, inner) = split_root(&icon.content);

        let _ = write!(out, r#"<symbol id="{}""#, escape_attr(&icon.id));
        // Source values are already escaped; only the quote style may change
        for (name, value) in attrs {
            let _ = write!(out, r#" {}="{}""#, name, value.replace('"', "&quot;"));
        }
        out.push('>');
        out.push_str(inner.trim());
        out.push_str("</symbol>");
    }
}

impl Default for SymbolSprite {
    fn default() -> Self {
        let mut svg_attrs = IndexMap::new();
        svg_attrs.insert("display".to_string(), "none".to_string());
        Self { svg_attrs }
    }
}

impl SpriteMerge for SymbolSprite {
    fn merge(&self, icons: &[SpriteIcon]) -> Result<String> {
        let mut out = String::new();
        let _ = write!(out, r#"<svg xmlns="{SVG_NS}" xmlns:xlink="{XLINK_NS}""#);
        for (name, value) in &self.svg_attrs {
            let _ = write!(out, r#" {}="{}""#, name, escape_attr(value));
        }
        out.push('>');

        for icon in icons {
            Self::write_symbol(&mut out, icon);
        }

        out.push_str("</svg>");
        Ok(out)
    }
}

/// Split an icon into its symbol attributes and inner markup
///
/// Content without an `<svg>` root is returned whole.
fn split_root(content: &str) -> (Vec<(String, String)>, &str) {
    let Some(open) = SVG_OPEN_TAG.captures(content) else {
        return (Vec::new(), content);
    };

    let attrs = open
        .get(1)
        .map(|m| symbol_attributes(m.as_str()))
        .unwrap_or_default();

    let self_closing = open.get(2).is_some_and(|m| !m.as_str().is_empty());
    if self_closing {
        return (attrs, "");
    }

    let start = open.get(0).map_or(0, |m| m.end());
    let end = content
        .to_ascii_lowercase()
        .rfind("</svg")
        .filter(|&end| end >= start)
        .unwrap_or(content.len());

    (attrs, &content[start..end])
}

fn symbol_attributes(raw: &str) -> Vec<(String, String)> {
    ATTRIBUTE
        .captures_iter(raw)
        .filter_map(|cap| {
            let name = cap.get(1)?.as_str();
            if !SYMBOL_ATTRIBUTES.contains(&name) {
                return None;
            }
            let value = cap.get(2).or_else(|| cap.get(3))?.as_str();
            Some((name.to_string(), value.to_string()))
        })
        .collect()
}

fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
