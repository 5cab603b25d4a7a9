//! Flat CSS dialect used by the exported themes: parsing, rewriting and printing.

pub mod additional;
pub mod background;
pub mod parser;
pub mod printer;
mod rule;
pub mod transform;

pub use parser::parse;
pub use printer::{print, Printable};
pub use rule::{Properties, PropertyValue, Rule};
pub use transform::Transformer;

/// How [`Stylesheet::find`] compares a criteria with the selector list of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorMatch {
    /// The joined selector list equals the criteria.
    Exact,
    /// The joined selector list contains the criteria.
    Contains,
}

impl SelectorMatch {
    fn matches(self, rule: &Rule, criteria: &str) -> bool {
        let selector_text = rule.selector_text();

        match self {
            SelectorMatch::Exact => selector_text == criteria,
            SelectorMatch::Contains => selector_text.contains(criteria),
        }
    }
}

/// Rules in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    rules: Vec<Rule>,
}

impl Stylesheet {
    pub fn new(rules: Vec<Rule>) -> Stylesheet {
        Stylesheet { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// First rule whose selector list (joined with `", "`) matches `criteria`.
    pub fn find(&self, criteria: &str, matching: SelectorMatch) -> Option<&Rule> {
        self.rules
            .iter()
            .find(|rule| matching.matches(rule, criteria))
    }

    pub fn find_mut(&mut self, criteria: &str, matching: SelectorMatch) -> Option<&mut Rule> {
        self.rules
            .iter_mut()
            .find(|rule| matching.matches(rule, criteria))
    }

    pub fn find_all(&self, criteria: &str, matching: SelectorMatch) -> Vec<&Rule> {
        self.rules
            .iter()
            .filter(|rule| matching.matches(rule, criteria))
            .collect()
    }
}

impl std::iter::FromIterator<Rule> for Stylesheet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Stylesheet::new(iter.into_iter().collect())
    }
}

impl IntoIterator for Stylesheet {
    type Item = Rule;
    type IntoIter = std::vec::IntoIter<Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.into_iter()
    }
}

impl<'a> IntoIterator for &'a Stylesheet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
