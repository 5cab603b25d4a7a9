use super::{Properties, Rule, Stylesheet};

/// Selectors of elements that have no use on paper. Matched as substrings.
const NON_PRINTING_SELECTORS: &[&str] = &[
    "slider",
    "arrow",
    "loading",
    "close",
    "cw",
    "ccw",
    "preview-cms-logo",
    "lightbox",
    "reset",
    "art",
];

/// Selectors of elements that cannot be edited in a WYSIWYG editor.
const NON_EDITABLE_SELECTORS: &[&str] = &[
    "slider",
    "arrow",
    "loading",
    "close",
    "cw",
    "ccw",
    "preview-cms-logo",
    "lightbox",
    "reset",
    "art",
    ".cleared",
];

/// Property name fragments carrying color information.
const VISUAL_PROPERTIES: &[&str] = &["border-", "color", "background-"];

/// Layout properties that break the editing surface when applied to `body`.
const BODY_LAYOUT_PROPERTIES: &[&str] = &["overflow", "position", "width", "min-width"];

const ARTICLE_PREFIX: &str = "art-article ";
const EDITOR_ROOT: &str = "body";

/// Page scopes removed from selectors, the content wrapper is collapsed away.
const PRINT_SCOPES: &[&str] = &[".art-postcontent"];
const EDITOR_SCOPES: &[&str] = &[".art-postcontent", "#art-main"];

/// Removes the leftmost occurrence of any of `scopes` from `selector`.
fn collapse_scope(selector: &str, scopes: &[&str]) -> String {
    let leftmost = scopes
        .iter()
        .filter_map(|scope| selector.find(*scope).map(|start| (start, start + scope.len())))
        .min_by_key(|(start, _)| *start);

    match leftmost {
        Some((start, end)) => format!("{}{}", &selector[..start], &selector[end..]),
        None => selector.to_owned(),
    }
}

fn is_listed(selector: &str, list: &[&str]) -> bool {
    list.iter().any(|token| selector.contains(token))
}

/// `.art-article h2` and alike address the article body, which is the whole
/// document inside the editor.
fn remap_article(selector: &str) -> String {
    let mut chars = selector.chars();

    if chars.next().is_some() && chars.as_str().starts_with(ARTICLE_PREFIX) {
        format!("{} {}", EDITOR_ROOT, &chars.as_str()[ARTICLE_PREFIX.len()..])
    } else {
        selector.to_owned()
    }
}

fn targets_editor_root(selector: &str) -> bool {
    selector == EDITOR_ROOT
        || selector
            .strip_prefix(EDITOR_ROOT)
            .map_or(false, |rest| rest.starts_with(' '))
}

/// Rewriting strategy applied rule by rule to a whole stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transformer {
    /// Copies every rule.
    Identity,
    /// Black and white print stylesheet: drops non-printing elements and all
    /// color information.
    Print,
    /// Stylesheet for the content area of a WYSIWYG editor.
    Editor,
}

impl Transformer {
    /// Transforms every rule, keeping source order. The input is left untouched.
    pub fn transform(self, stylesheet: &Stylesheet) -> Stylesheet {
        stylesheet
            .iter()
            .map(|rule| self.transform_rule(rule))
            .collect()
    }

    pub fn transform_rule(self, rule: &Rule) -> Rule {
        let selectors = self.transform_selectors(&rule.selectors);

        let properties = if self == Transformer::Editor
            && selectors.iter().any(|selector| targets_editor_root(selector))
        {
            rule.properties
                .filtered(|name| !BODY_LAYOUT_PROPERTIES.contains(&name))
        } else {
            self.transform_properties(&rule.properties)
        };

        Rule::new(selectors, properties)
    }

    pub fn transform_selectors(self, selectors: &[String]) -> Vec<String> {
        match self {
            Transformer::Identity => selectors.to_vec(),
            Transformer::Print => selectors
                .iter()
                .map(|selector| collapse_scope(selector, PRINT_SCOPES).trim().to_owned())
                .filter(|selector| {
                    let keep = !selector.is_empty() && !is_listed(selector, NON_PRINTING_SELECTORS);
                    if !keep {
                        log::trace!("Dropping selector {:?} from print stylesheet", selector);
                    }
                    keep
                })
                .collect(),
            Transformer::Editor => selectors
                .iter()
                .map(|selector| {
                    let selector = remap_article(selector);
                    let selector = collapse_scope(&selector, EDITOR_SCOPES);
                    match selector.trim() {
                        "" => EDITOR_ROOT.to_owned(),
                        trimmed => trimmed.to_owned(),
                    }
                })
                .filter(|selector| {
                    let keep = !is_listed(selector, NON_EDITABLE_SELECTORS);
                    if !keep {
                        log::trace!("Dropping selector {:?} from editor stylesheet", selector);
                    }
                    keep
                })
                .collect(),
        }
    }

    pub fn transform_properties(self, properties: &Properties) -> Properties {
        match self {
            Transformer::Identity | Transformer::Editor => properties.clone(),
            Transformer::Print => properties
                .filtered(|name| !VISUAL_PROPERTIES.iter().any(|part| name.contains(part))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{collapse_scope, remap_article, Transformer, EDITOR_SCOPES, PRINT_SCOPES};
    use crate::stylesheet::{parse, print, PropertyValue};
    use pretty_assertions::assert_eq;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_owned()).collect()
    }

    #[test]
    pub fn test_identity() {
        let stylesheet = parse("a, b { color: red; color: blue; width: 10px }");

        assert_eq!(stylesheet, Transformer::Identity.transform(&stylesheet));
    }

    #[test]
    pub fn test_collapse_scope() {
        assert_eq!(" p", collapse_scope(".art-postcontent p", PRINT_SCOPES));
        assert_eq!(
            ".x  .art-postcontent",
            collapse_scope(".x .art-postcontent .art-postcontent", PRINT_SCOPES)
        );
        assert_eq!("art-postcontent p", collapse_scope("art-postcontent p", PRINT_SCOPES));
        assert_eq!(
            "div#art-postcontent p",
            collapse_scope("div#art-postcontent p", EDITOR_SCOPES)
        );
        assert_eq!(" a", collapse_scope("#art-main a", EDITOR_SCOPES));
        assert_eq!(
            " .art-postcontent",
            collapse_scope("#art-main .art-postcontent", EDITOR_SCOPES)
        );
    }

    #[test]
    pub fn test_remap_article() {
        assert_eq!("body p", remap_article(".art-article p"));
        assert_eq!("body h2 a", remap_article(".art-article h2 a"));
        assert_eq!("body .x", remap_article(".art-article .x"));
        assert_eq!(".art-article", remap_article(".art-article"));
        assert_eq!("p .art-article a", remap_article("p .art-article a"));
    }

    #[test]
    pub fn test_print_selectors() {
        let selectors = strings(&[
            ".art-postcontent h1",
            ".art-slider-arrow",
            "p.close",
            ".art-postcontent",
            "ul li",
            ".art-post",
        ]);

        assert_eq!(
            strings(&["h1", "ul li"]),
            Transformer::Print.transform_selectors(&selectors)
        );
    }

    #[test]
    pub fn test_print_drops_visual_properties() {
        let stylesheet = parse(
            "p { color: red; background-color: red; border-top: 1px; background: #fff; margin: 0; margin: 1px; }",
        );
        let printed = Transformer::Print.transform(&stylesheet);
        let properties = &printed.rules()[0].properties;

        assert_eq!(vec!["background", "margin"], properties.names().collect::<Vec<_>>());
        assert_eq!(
            Some(&PropertyValue::from(vec!["0", "1px"])),
            properties.get("margin")
        );
    }

    #[test]
    pub fn test_lookalike_scopes_are_not_collapsed() {
        let selectors = strings(&[".my-art-postcontent a", "div#art-postcontent p"]);

        assert!(Transformer::Print.transform_selectors(&selectors).is_empty());
        assert!(Transformer::Editor.transform_selectors(&selectors).is_empty());
    }

    #[test]
    pub fn test_editor_selectors() {
        let selectors = strings(&[
            "#art-main",
            ".art-postcontent",
            ".art-postcontent a:hover",
            ".art-article img",
            "div.cleared",
            ".art-sheet",
            "h1",
        ]);

        assert_eq!(
            strings(&["body", "body", "a:hover", "body img", "h1"]),
            Transformer::Editor.transform_selectors(&selectors)
        );
    }

    #[test]
    pub fn test_editor_body_drops_layout() {
        let stylesheet = parse(
            "#art-main { position: relative; width: 100%; min-width: 900px; overflow: hidden; background: #fff; color: #000 }\n\
             .art-article p { overflow: hidden; color: red; }\n\
             p { overflow: hidden; color: red; background-color: blue }",
        );

        assert_eq!(
            "body\r\n{\r\n  background: #fff;\r\n  color: #000;\r\n}\r\n\r\n\
             body p\r\n{\r\n  color: red;\r\n}\r\n\r\n\
             p\r\n{\r\n  overflow: hidden;\r\n  color: red;\r\n  background-color: blue;\r\n}\r\n",
            print(&Transformer::Editor.transform(&stylesheet))
        );
    }

    #[test]
    pub fn test_transform_keeps_input() {
        let stylesheet = parse(".art-slider { color: red }");
        let copy = stylesheet.clone();

        let _ = Transformer::Print.transform(&stylesheet);
        let _ = Transformer::Editor.transform(&stylesheet);

        assert_eq!(copy, stylesheet);
    }
}
