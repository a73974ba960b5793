use std::fs;
use std::path::Path;

use crate::doc::compression::{decode_bytes, encode_zstd};
use crate::doc::{Compression, DocError, Result, Tree};

/// Default zstd level for [`save_tree_compressed`].
pub const DEFAULT_COMPRESSION_LEVEL: i32 = zstd::DEFAULT_COMPRESSION_LEVEL;

/// A tree loaded from disk plus the compression mode the file used.
#[derive(Debug)]
pub struct LoadedDoc {
	/// Detected compression of the source file.
	pub compression: Compression,
	/// Parsed document tree.
	pub tree: Tree,
}

/// Read a whole document file, transparently decompressing zstd, and parse
/// it into a tree.
pub fn load_tree(path: impl AsRef<Path>) -> Result<LoadedDoc> {
	let raw = fs::read(path)?;
	let (compression, bytes) = decode_bytes(raw)?;
	let text = String::from_utf8(bytes).map_err(|err| DocError::NotUtf8 {
		valid_up_to: err.utf8_error().valid_up_to(),
	})?;

	Ok(LoadedDoc {
		compression,
		tree: Tree::parse(&text)?,
	})
}

/// Render a tree and write it as a plain text file.
pub fn save_tree(path: impl AsRef<Path>, tree: &Tree) -> Result<()> {
	fs::write(path, tree.render())?;
	Ok(())
}

/// Render a tree and write it as a zstd-compressed file.
pub fn save_tree_compressed(path: impl AsRef<Path>, tree: &Tree, level: i32) -> Result<()> {
	let encoded = encode_zstd(tree.render().as_bytes(), level)?;
	fs::write(path, encoded)?;
	Ok(())
}
