use super::additional::remove_additional;
use super::{Properties, Rule, Stylesheet};
use pest::iterators::Pair;
use pest::Parser;

mod grammar {
    #[derive(pest_derive::Parser)]
    #[grammar = "grammar/stylesheet.pest"]
    pub struct StylesheetGrammar;
}

pub(crate) use grammar::{Rule as Syntax, StylesheetGrammar};

/// Parses `content` into its rules.
///
/// Parsing is lenient: the additional styles block and comments are removed
/// first, text that is not a `selectors { declarations }` block is skipped and
/// malformed declarations are dropped. Nested blocks and at-rules are not
/// supported; a block always ends at the first `}`.
pub fn parse(content: &str) -> Stylesheet {
    let cleared = clear_content(content);

    let pairs = match StylesheetGrammar::parse(Syntax::stylesheet, &cleared) {
        Ok(pairs) => pairs,
        Err(e) => {
            log::warn!("Stylesheet could not be scanned, treating it as empty: {}", e);
            return Stylesheet::default();
        }
    };

    let mut stylesheet = Stylesheet::default();

    for pair in pairs.flatten().filter(|pair| pair.as_rule() == Syntax::rule) {
        stylesheet.push(handle_rule(pair));
    }

    log::debug!("Parsed {} rules", stylesheet.len());

    stylesheet
}

/// Removes the additional styles block, then every (non-nested) block comment.
///
/// A comment containing a `/` is not recognized and stays in the text.
pub fn clear_content(content: &str) -> String {
    let content = remove_additional(content);

    let pairs = match StylesheetGrammar::parse(Syntax::content, &content) {
        Ok(pairs) => pairs,
        Err(e) => {
            log::warn!("Comments could not be stripped: {}", e);
            return content.to_string();
        }
    };

    pairs
        .flatten()
        .filter(|pair| pair.as_rule() == Syntax::text)
        .map(|pair| pair.as_str())
        .collect()
}

fn handle_rule(rule: Pair<'_, Syntax>) -> Rule {
    let mut selectors = Vec::new();
    let mut properties = Properties::new();

    for part in rule.into_inner() {
        match part.as_rule() {
            Syntax::selector_text => selectors = parse_selectors(part.as_str()),
            Syntax::declaration_text => properties = parse_properties(part.as_str()),
            _ => unreachable!(),
        }
    }

    Rule::new(selectors, properties)
}

/// Splits a selector list on `,`. Tokens are trimmed but empty ones are kept.
pub fn parse_selectors(selector_text: &str) -> Vec<String> {
    selector_text
        .split(',')
        .map(|selector| selector.trim().to_owned())
        .collect()
}

/// Parses `name: value` declarations separated by `;`.
///
/// A declaration that does not split into exactly a name and a value on `:`
/// is dropped.
pub fn parse_properties(declaration_text: &str) -> Properties {
    let mut properties = Properties::new();

    for declaration in declaration_text
        .split(';')
        .filter(|declaration| !declaration.trim().is_empty())
    {
        let mut parts = declaration.split(':');

        match (parts.next(), parts.next(), parts.next()) {
            (Some(name), Some(value), None) => properties.declare(name.trim(), value.trim()),
            _ => log::debug!("CSS declaration dropped: {:?}", declaration.trim()),
        }
    }

    properties
}
