//! Naive tag-soup parsing: split markup into tag and text tokens, nest them
//! into a best-effort tree, then pull out the first element matching a tag
//! pattern along with its flattened text.

pub mod error;
pub mod extract;
pub mod html;

pub use error::{Error, Result};
pub use extract::{extract, extract_source, write_extract, Extract, Extractor, Queries};
