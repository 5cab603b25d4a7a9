use std::borrow::Cow;
use std::ops::Range;

pub const BEGIN_MARKER: &str = "/* Begin Additional CSS Styles */";
pub const END_MARKER: &str = "/* End Additional CSS Styles */";

/// Byte range of the additional styles block, both markers included.
///
/// The block runs from the first begin marker up to the last end marker
/// following it.
fn additional_span(content: &str) -> Option<Range<usize>> {
    let start = content.find(BEGIN_MARKER)?;
    let end = content.rfind(END_MARKER)?;

    if end < start + BEGIN_MARKER.len() {
        return None;
    }

    Some(start..end + END_MARKER.len())
}

/// Returns the additional styles block verbatim, or an empty string.
pub fn extract_additional(content: &str) -> String {
    additional_span(content)
        .map(|span| content[span].to_owned())
        .unwrap_or_default()
}

/// `content` without its additional styles block.
pub fn remove_additional(content: &str) -> Cow<'_, str> {
    match additional_span(content) {
        Some(span) => {
            log::trace!("Removing additional styles block at {:?}", span);

            let mut cleared = String::with_capacity(content.len() - span.len());
            cleared.push_str(&content[..span.start]);
            cleared.push_str(&content[span.end..]);
            Cow::Owned(cleared)
        }
        None => Cow::Borrowed(content),
    }
}
