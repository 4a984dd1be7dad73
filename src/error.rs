use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum PDFError {
    /// The output document could not be written to its destination
    #[error("failed to write the output document")]
    OutputWrite(#[from] std::io::Error),

    /// [image] failed to load or decode an image
    #[error(transparent)]
    Image(#[from] image::ImageError),

    /// A computed layout broke a page invariant (overlapping fields or
    /// content escaping the printable area)
    #[error("layout invariant violated: {0}")]
    Layout(String),

    /// A page referenced in the page order is missing from the document
    #[error("page is missing from the document")]
    PageMissing,
}
