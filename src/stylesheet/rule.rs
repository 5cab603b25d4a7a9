use indexmap::map::Entry;
use indexmap::IndexMap;
use std::slice;

/// Value of a single property. A property declared more than once in the same
/// block keeps every value, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    Single(String),
    Multiple(Vec<String>),
}

impl PropertyValue {
    pub fn values(&self) -> &[String] {
        match self {
            PropertyValue::Single(value) => slice::from_ref(value),
            PropertyValue::Multiple(values) => values,
        }
    }

    /// The value that wins the cascade, i.e. the last declared one.
    pub fn last(&self) -> &str {
        match self {
            PropertyValue::Single(value) => value,
            // never empty, a multiple value is only created from a single one
            PropertyValue::Multiple(values) => values.last().map(String::as_str).unwrap_or(""),
        }
    }

    pub fn push(&mut self, value: String) {
        match self {
            PropertyValue::Single(current) => {
                let current = std::mem::take(current);
                *self = PropertyValue::Multiple(vec![current, value]);
            }
            PropertyValue::Multiple(values) => values.push(value),
        }
    }

    /// Rewrites every value in place, keeping the shape of the value.
    pub fn map_values<F>(&mut self, mut f: F)
    where
        F: FnMut(&str) -> String,
    {
        match self {
            PropertyValue::Single(value) => *value = f(value),
            PropertyValue::Multiple(values) => {
                for value in values.iter_mut() {
                    *value = f(value);
                }
            }
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Single(value.to_owned())
    }
}

impl From<Vec<&str>> for PropertyValue {
    fn from(values: Vec<&str>) -> Self {
        PropertyValue::Multiple(values.into_iter().map(str::to_owned).collect())
    }
}

/// Property map of a rule. Keeps insertion order, which is also the print order.
#[derive(Debug, Clone, Default)]
pub struct Properties {
    entries: IndexMap<String, PropertyValue>,
}

impl Properties {
    pub fn new() -> Properties {
        Properties::default()
    }

    /// Adds a declaration. Repeated names accumulate instead of overwriting.
    pub fn declare(&mut self, name: &str, value: &str) {
        match self.entries.entry(name.to_owned()) {
            Entry::Occupied(mut current) => current.get_mut().push(value.to_owned()),
            Entry::Vacant(vacant) => {
                vacant.insert(PropertyValue::from(value));
            }
        }
    }

    /// Replaces the value of `name`, appending it if it was not present.
    pub fn set(&mut self, name: &str, value: PropertyValue) {
        self.entries.insert(name.to_owned(), value);
    }

    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.entries.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut PropertyValue> {
        self.entries.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Copy of this map with only the properties accepted by `keep`.
    pub fn filtered<F>(&self, mut keep: F) -> Properties
    where
        F: FnMut(&str) -> bool,
    {
        Properties {
            entries: self
                .entries
                .iter()
                .filter(|(name, _)| keep(name))
                .map(|(name, value)| (name.clone(), value.clone()))
                .collect(),
        }
    }
}

// Print order is part of the value, unlike for `IndexMap` equality.
impl PartialEq for Properties {
    fn eq(&self, other: &Properties) -> bool {
        self.entries.len() == other.entries.len() && self.entries.iter().eq(other.entries.iter())
    }
}

impl Eq for Properties {}

impl std::iter::FromIterator<(String, PropertyValue)> for Properties {
    fn from_iter<I: IntoIterator<Item = (String, PropertyValue)>>(iter: I) -> Self {
        Properties {
            entries: iter.into_iter().collect(),
        }
    }
}

/// One `selectors { declarations }` block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rule {
    pub selectors: Vec<String>,
    pub properties: Properties,
}

impl Rule {
    pub fn new(selectors: Vec<String>, properties: Properties) -> Rule {
        Rule {
            selectors,
            properties,
        }
    }

    pub fn selector_text(&self) -> String {
        self.selectors.join(", ")
    }
}
