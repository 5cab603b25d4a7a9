use thiserror::Error;

#[derive(Debug, Error)]
pub enum StylesError {
    #[error("Swatch for color \"{color}\" could not be encoded")]
    SwatchEncoding {
        color: String,
        #[source]
        source: image::ImageError,
    },
}
