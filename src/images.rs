use crate::stylesheet::parser::{StylesheetGrammar, Syntax};
use pest::Parser;

/// Directory the converter copies user supplied content images to.
pub const CONTENT_IMAGE_DIR: &str = "images/template-content/";

/// Points `url('images/<name>')` references at [`CONTENT_IMAGE_DIR`].
///
/// Content stylesheets reference their textures as if they were stored next to
/// the article, while the exported template keeps them in a shared directory.
/// The `url('images/` prefix is matched case-insensitively.
pub fn relocate_content_images(content: &str) -> String {
    let pairs = match StylesheetGrammar::parse(Syntax::image_urls, content) {
        Ok(pairs) => pairs,
        Err(e) => {
            log::warn!("Image references could not be scanned: {}", e);
            return content.to_owned();
        }
    };

    let mut relocated = String::with_capacity(content.len());
    let mut count = 0;

    for pair in pairs.flatten() {
        match pair.as_rule() {
            Syntax::plain => relocated.push_str(pair.as_str()),
            Syntax::image_name => {
                count += 1;
                relocated.push_str("url('");
                relocated.push_str(CONTENT_IMAGE_DIR);
                relocated.push_str(pair.as_str());
                relocated.push_str("')");
            }
            _ => {}
        }
    }

    log::debug!("Relocated {} content image references", count);

    relocated
}

#[cfg(test)]
mod tests {
    use super::relocate_content_images;
    use pretty_assertions::assert_eq;

    #[test]
    pub fn test_relocate() {
        assert_eq!(
            ".a { background:url('images/template-content/358c9.png') top left no-repeat #E2E8EE; }",
            relocate_content_images(
                ".a { background:url('images/358c9.png') top left no-repeat #E2E8EE; }"
            )
        );
        assert_eq!(
            "URL('x') url('images/template-content/a%20b-c_d.JPG')",
            relocate_content_images("URL('x') URL('Images/a%20b-c_d.JPG')")
        );
    }

    #[test]
    pub fn test_other_references_are_kept() {
        let content = "url(images/a.png) url(\"images/b.png\") url('images/sub/c.png') url('images/')";

        assert_eq!(content, relocate_content_images(content));
        assert_eq!("", relocate_content_images(""));
    }
}
