use super::parser::{StylesheetGrammar, Syntax};
use super::{parse, Rule, SelectorMatch, Stylesheet};
use crate::swatch::SwatchEncoder;
use pest::Parser;
use std::collections::HashMap;

/// Page background of the theme, which becomes the editor body.
const BODY_SELECTOR: &str = "#art-main";
/// Content boxes drawn over the page background, topmost first.
const LAYER_SELECTORS: &[&str] = &[".art-post", ".art-sheet"];

/// First color literal in a CSS value: an `rgba(...)` if there is one,
/// otherwise a `#` followed by word characters.
pub fn find_color_literal(value: &str) -> Option<&str> {
    [Syntax::first_rgba, Syntax::first_hex]
        .iter()
        .find_map(|&search| {
            StylesheetGrammar::parse(search, value)
                .ok()?
                .flatten()
                .find(|pair| matches!(pair.as_rule(), Syntax::rgba_color | Syntax::hex_color))
                .map(|pair| pair.as_str())
        })
}

/// Renders each color once per composition.
struct SwatchCache<'a> {
    encoder: &'a dyn SwatchEncoder,
    rendered: HashMap<String, Option<String>>,
}

impl<'a> SwatchCache<'a> {
    fn new(encoder: &'a dyn SwatchEncoder) -> SwatchCache<'a> {
        SwatchCache {
            encoder,
            rendered: HashMap::new(),
        }
    }

    fn render(&mut self, color: &str) -> Option<String> {
        let encoder = self.encoder;

        self.rendered
            .entry(color.to_owned())
            .or_insert_with(|| match encoder.render_swatch(color) {
                Ok(data) => Some(data),
                Err(e) => {
                    log::warn!("{}, layer skipped", e);
                    None
                }
            })
            .clone()
    }

    /// `url(...)` layer for the flat background color of `rule`, if any.
    fn background_layer(&mut self, rule: &Rule) -> Option<String> {
        let background = rule.properties.get("background")?.last();
        let color = find_color_literal(background)?;

        self.render(color).map(|data| format!("url({})", data))
    }
}

/// Parses `content` and layers the flat backgrounds of the post and sheet
/// boxes as swatch images over the body background, so that an editor
/// preview shows the same colors as the page.
///
/// Without a `#art-main` rule, the parsed stylesheet is returned unmodified.
pub fn compose_editor_backgrounds(content: &str, encoder: &dyn SwatchEncoder) -> Stylesheet {
    let mut stylesheet = parse(content);
    let mut swatches = SwatchCache::new(encoder);

    let layers = LAYER_SELECTORS
        .iter()
        .filter_map(|selector| stylesheet.find(selector, SelectorMatch::Exact))
        .filter_map(|rule| swatches.background_layer(rule))
        .collect::<Vec<_>>();

    let body = match stylesheet.find_mut(BODY_SELECTOR, SelectorMatch::Exact) {
        Some(body) => body,
        None => return stylesheet,
    };

    if layers.is_empty() {
        return stylesheet;
    }

    log::debug!("Layering {} swatches over the editor body", layers.len());

    let layer_list = layers.join(", ");

    if let Some(background) = body.properties.get_mut("background") {
        background.map_values(|value| format!("{}, {}", layer_list, value));
    }

    // one attachment per background layer
    if let Some(attachment) = body.properties.get_mut("background-attachment") {
        let scroll = "scroll, ".repeat(layers.len());
        attachment.map_values(|value| format!("{}{}", scroll, value));
    }

    stylesheet
}
