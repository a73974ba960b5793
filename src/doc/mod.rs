mod codec;
mod compression;
mod error;
mod file;
mod format;
mod literal;
mod path;
mod scalar;
mod scan;
mod tree;
mod value;

/// Compression detection result.
pub use compression::Compression;
/// Error and result aliases.
pub use error::{DocError, Result};
/// Whole-file load/save entry points.
pub use file::{DEFAULT_COMPRESSION_LEVEL, LoadedDoc, load_tree, save_tree, save_tree_compressed};
/// Width, format, and construction-policy enums.
pub use format::{ElementWidth, FormatPolicy, ValueFormat};
/// Dotted path lookup helper.
pub use path::DocPath;
/// Closed set of storable primitive types.
pub use scalar::Scalar;
/// Two-namespace tree of named boxes and items.
pub use tree::Tree;
/// Size-tagged value container.
pub use value::Value;
