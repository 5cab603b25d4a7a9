use crate::stylesheet::additional::extract_additional;
use crate::stylesheet::{parse, print, Transformer};

pub const PRINT_CSS: &str = "print.css";
pub const EDITOR_CSS: &str = "editor.css";
pub const CUSTOM_CSS: &str = "custom.css";

/// Stylesheets derived from a theme stylesheet, keyed by file name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CssFiles {
    pub print: String,
    pub editor: String,
    pub custom: String,
}

impl CssFiles {
    pub fn get(&self, file_name: &str) -> Option<&str> {
        match file_name {
            PRINT_CSS => Some(&self.print),
            EDITOR_CSS => Some(&self.editor),
            CUSTOM_CSS => Some(&self.custom),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        vec![
            (PRINT_CSS, self.print.as_str()),
            (EDITOR_CSS, self.editor.as_str()),
            (CUSTOM_CSS, self.custom.as_str()),
        ]
        .into_iter()
    }
}

/// Builds `print.css`, `editor.css` and `custom.css` from the theme stylesheet.
pub fn build_css_files(content: &str) -> CssFiles {
    let stylesheet = parse(content);

    let files = CssFiles {
        print: print(&Transformer::Print.transform(&stylesheet)),
        editor: print(&Transformer::Editor.transform(&stylesheet)),
        custom: print(&extract_additional(content)),
    };

    for (file_name, css) in files.iter() {
        log::debug!("{}: {} bytes", file_name, css.len());
    }

    files
}
