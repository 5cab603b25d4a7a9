//! Derives the stylesheets of a CMS template from the stylesheet of a theme
//! mockup: a black and white print stylesheet, a stylesheet for the WYSIWYG
//! editor and the verbatim block of additional styles.
//!
//! ```
//! let files = themestyles::build_css_files(".a, .b { color: red; margin: 0 }");
//!
//! assert_eq!(".a, .b\r\n{\r\n  margin: 0;\r\n}\r\n", files.print);
//! ```

pub mod error;
pub mod images;
pub mod pipeline;
pub mod stylesheet;
pub mod swatch;

pub use error::StylesError;
pub use pipeline::{build_css_files, CssFiles};
pub use stylesheet::background::compose_editor_backgrounds;
pub use stylesheet::{parse, print, Rule, Stylesheet, Transformer};
