mod colour;
pub use colour::*;

mod document;
pub use document::*;

mod error;
pub use error::*;

mod field;
pub use field::*;

mod font;
pub use font::*;

mod image;
pub use self::image::*;

mod info;
pub use info::*;

/// Utility functions and structures to layout objects (mostly text) on pages
pub mod layout;

mod page;
pub use page::*;

/// Pre-defined page sizes for common paper formats
pub mod pagesize;

mod rect;
pub use rect::*;

pub(crate) mod refs;

/// The decision balance sheet itself: layout constants, the build pass,
/// and [sheet::generate](crate::sheet::generate)
pub mod sheet;

mod units;
pub use units::*;

/// Re-export PDF-writer functionality, mostly for custom [pdf_writer::Content] generation
pub use pdf_writer;
