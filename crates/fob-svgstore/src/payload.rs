//! Runtime bootstrap that mounts a sprite sheet into the page

use crate::error::{Result, SvgstoreError};

/// Wrap sprite markup into a self-invoking script
///
/// The script inserts the sprite as the first child of `<body>` so any
/// element added afterwards can reference its symbols. It throws if the
/// document has no body.
pub fn bootstrap_snippet(sprite: &str) -> Result<String> {
    let literal = serde_json::to_string(sprite).map_err(SvgstoreError::serialize)?;

    Ok(format!(
        concat!(
            r#"!function(e){{var n=e.querySelector("body");"#,
            r#"if(!n)throw new Error("fob-svgstore: Could not find element: body");"#,
            r#"n.insertAdjacentHTML("afterbegin",{})}}(document);"#,
        ),
        literal
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snippet_shape() {
        let snippet = bootstrap_snippet("<svg></svg>").unwrap();
        assert_eq!(
            snippet,
            r#"!function(e){var n=e.querySelector("body");if(!n)throw new Error("fob-svgstore: Could not find element: body");n.insertAdjacentHTML("afterbegin","<svg></svg>")}(document);"#
        );
    }

    #[test]
    fn sprite_is_escaped() {
        let snippet = bootstrap_snippet("<svg id=\"a\">\n'\\</svg>").unwrap();
        assert!(snippet.contains(r#""<svg id=\"a\">\n'\\</svg>""#));
    }
}
