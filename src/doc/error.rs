use thiserror::Error;

use crate::doc::ValueFormat;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, DocError>;

/// Errors produced while building, mutating, parsing, and rendering documents.
#[derive(Debug, Error)]
pub enum DocError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Loaded document bytes are not valid UTF-8.
	#[error("document is not valid utf-8 (valid up to byte {valid_up_to})")]
	NotUtf8 {
		/// Length of the valid prefix.
		valid_up_to: usize,
	},
	/// Decompression output exceeded configured safety limit.
	#[error("decompressed output exceeded limit {limit} bytes")]
	DecompressedTooLarge {
		/// Maximum allowed output bytes.
		limit: usize,
	},
	/// Requested element width does not match the stored width.
	#[error("type mismatch: requested {requested}-byte elements, stored {stored}-byte")]
	TypeMismatch {
		/// Byte width of the requested type.
		requested: usize,
		/// Byte width of the stored elements.
		stored: usize,
	},
	/// Requested format is not valid for the stored element width.
	#[error("format {format:?} is not valid for {width}-byte elements")]
	IncompatibleFormat {
		/// Requested rendering format.
		format: ValueFormat,
		/// Stored element width in bytes.
		width: usize,
	},
	/// Raw buffer length does not match width and element count.
	#[error("buffer size mismatch: expected {expected} bytes, got {got}")]
	BufferSizeMismatch {
		/// Required buffer length.
		expected: usize,
		/// Provided buffer length.
		got: usize,
	},
	/// Array constructors require at least one element.
	#[error("array value requires at least one element")]
	EmptyArray,
	/// Literal text matched no grammar rule.
	#[error("malformed literal: {text:?}")]
	MalformedLiteral {
		/// Offending literal text.
		text: String,
	},
	/// A structural delimiter was never found before end of input.
	#[error("expected {expected:?} before end of input (scan started at byte {at})")]
	UnclosedDelimiter {
		/// Delimiter character being scanned for.
		expected: char,
		/// Byte offset the scan started from.
		at: usize,
	},
	/// A box tag has no matching close tag, or a close tag has no open tag.
	#[error("unterminated tag: [{name}]")]
	UnterminatedTag {
		/// Box name from the offending tag.
		name: String,
	},
	/// Lookup miss on a tree namespace.
	#[error("{kind} not found: {name}")]
	NotFound {
		/// Namespace that was searched (`box` or `item`).
		kind: &'static str,
		/// Requested child name.
		name: String,
	},
	/// Name is empty or contains reserved or control characters.
	#[error("invalid name: {name:?}")]
	InvalidName {
		/// Offending name.
		name: String,
	},
	/// Dotted path expression syntax is invalid.
	#[error("invalid path: {path:?}")]
	InvalidPath {
		/// Original path expression.
		path: String,
	},
}
