//! Standalone HTML page wrapping a deck document.
//!
//! The page loads deck.gl and its JSON converter from a CDN and instantiates
//! the document client-side. The Mapbox token, when present, is injected
//! only here.

const PAGE_TEMPLATE: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{title}}</title>
  <script src="https://unpkg.com/deck.gl@~8.9.*/dist.min.js"></script>
  <script src="https://unpkg.com/@deck.gl/json@~8.9.*/dist.min.js"></script>
  <script src="https://api.tiles.mapbox.com/mapbox-gl-js/v1.13.0/mapbox-gl.js"></script>
  <link href="https://api.tiles.mapbox.com/mapbox-gl-js/v1.13.0/mapbox-gl.css" rel="stylesheet" />
  <style>
    html, body { margin: 0; padding: 0; height: 100%; width: 100%; }
    #deck-container { position: absolute; inset: 0; }
  </style>
</head>
<body>
  <div id="deck-container"></div>
  <script>
    const DECK_JSON = {{deck_json}};
    const MAPBOX_KEY = {{mapbox_key}};

    const converter = new deck.JSONConverter({ configuration: { classes: deck } });
    const props = converter.convert(DECK_JSON);

    new deck.DeckGL({
      ...props,
      container: "deck-container",
      map: mapboxgl,
      mapboxApiAccessToken: MAPBOX_KEY,
      getTooltip: ({ object }) =>
        object && object.lane_type
          ? object.lane_type + (object.brand ? " / " + object.brand : "")
          : null,
    });
  </script>
</body>
</html>
"#;

/// Escape text for an HTML text node.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Make JSON safe to embed in a `<script>` element.
///
/// `<` only occurs inside JSON strings, where `\u003c` decodes to the same
/// character, so no `</script>` or `<!--` sequence reaches the HTML parser.
fn escape_script(json: &str) -> String {
    json.replace('<', "\\u003c")
}

/// Fill `{{name}}` placeholders in one left-to-right pass.
///
/// Substituted text is appended to the output and never scanned again, so
/// values that themselves contain `{{...}}` come through unchanged.
fn fill_template(template: &str, value_for: impl Fn(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];
        let substituted = after_open.find("}}").and_then(|end| {
            value_for(&after_open[..end]).map(|value| (value, end))
        });
        match substituted {
            Some((value, end)) => {
                out.push_str(&value);
                rest = &after_open[end + 2..];
            }
            None => {
                out.push_str("{{");
                rest = after_open;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Render the page for a serialized deck document.
pub fn render_page(title: &str, deck_json: &str, mapbox_key: Option<&str>) -> String {
    // serde_json string encoding quotes and escapes the key
    let key_literal = match mapbox_key {
        Some(key) => serde_json::Value::String(key.to_string()).to_string(),
        None => "null".to_string(),
    };

    fill_template(PAGE_TEMPLATE, |name| match name {
        "title" => Some(escape_html(title)),
        "deck_json" => Some(escape_script(deck_json)),
        "mapbox_key" => Some(escape_script(&key_literal)),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_embeds_document() {
        let page = render_page("Flow Map", r#"{"layers":[]}"#, None);
        assert!(page.contains("<title>Flow Map</title>"));
        assert!(page.contains(r#"const DECK_JSON = {"layers":[]};"#));
        assert!(page.contains("const MAPBOX_KEY = null;"));
        assert!(!page.contains("{{"));
    }

    #[test]
    fn test_page_injects_key() {
        let page = render_page("Map", "{}", Some("pk.abc"));
        assert!(page.contains(r#"const MAPBOX_KEY = "pk.abc";"#));
    }

    #[test]
    fn test_title_is_escaped() {
        let page = render_page("<b>A & B</b>", "{}", None);
        assert!(page.contains("<title>&lt;b&gt;A &amp; B&lt;/b&gt;</title>"));
    }

    #[test]
    fn test_script_close_tag_is_escaped() {
        let page = render_page("Map", r#"{"brand":"</script><!--"}"#, None);
        assert!(page.contains(r#"{"brand":"\u003c/script>\u003c!--"}"#));
        assert_eq!(page.matches("</script>").count(), 4);
        assert!(!page.contains("<!--"));
    }

    #[test]
    fn test_placeholders_in_values_are_not_expanded() {
        let deck_json = r#"{"brand":"{{mapbox_key}}"}"#;
        let page = render_page("{{deck_json}}", deck_json, Some("pk.secret"));

        assert!(page.contains("<title>{{deck_json}}</title>"));
        assert!(page.contains(r#"const DECK_JSON = {"brand":"{{mapbox_key}}"};"#));
        assert_eq!(page.matches("pk.secret").count(), 1);
    }

    #[test]
    fn test_fill_template_keeps_unknown_placeholders() {
        let filled = fill_template("a {{x}} b {{y}} {{", |name| {
            (name == "x").then(|| "X".to_string())
        });
        assert_eq!(filled, "a X b {{y}} {{");
    }
}
