use super::Stylesheet;

const LINE_BREAK: &str = "\r\n";

/// Input accepted by [`print`].
#[derive(Debug, Clone, Copy)]
pub enum Printable<'a> {
    Rules(&'a Stylesheet),
    /// Text that is emitted as it is, e.g. the additional styles block.
    Verbatim(&'a str),
}

impl<'a> From<&'a Stylesheet> for Printable<'a> {
    fn from(stylesheet: &'a Stylesheet) -> Self {
        Printable::Rules(stylesheet)
    }
}

impl<'a> From<&'a str> for Printable<'a> {
    fn from(text: &'a str) -> Self {
        Printable::Verbatim(text)
    }
}

impl<'a> From<&'a String> for Printable<'a> {
    fn from(text: &'a String) -> Self {
        Printable::Verbatim(text)
    }
}

/// Writes rules back to CSS with CRLF line endings.
///
/// Rules without selectors or without properties are skipped. Every value of a
/// multi-valued property gets its own declaration line.
pub fn print<'a, P: Into<Printable<'a>>>(input: P) -> String {
    let stylesheet = match input.into() {
        Printable::Verbatim(text) => return text.to_owned(),
        Printable::Rules(stylesheet) => stylesheet,
    };

    let mut lines = Vec::new();

    for rule in stylesheet
        .iter()
        .filter(|rule| !rule.selectors.is_empty() && !rule.properties.is_empty())
    {
        lines.push(rule.selector_text());
        lines.push("{".to_owned());

        for (name, value) in rule.properties.iter() {
            for value in value.values() {
                lines.push(format!("  {}: {};", name, value));
            }
        }

        lines.push(format!("}}{}", LINE_BREAK));
    }

    lines.join(LINE_BREAK)
}
