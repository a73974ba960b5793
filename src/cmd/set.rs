use std::path::PathBuf;

use boxdoc::doc::{Compression, DEFAULT_COMPRESSION_LEVEL, DocPath, Result, Value, load_tree, save_tree, save_tree_compressed};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub at: String,
	#[arg(long)]
	pub value: String,
}

/// Parse a literal and write it at a dotted path, saving the file back in
/// its original compression mode. Boxes along the path must already exist;
/// the final item is inserted or overwritten.
pub fn run(args: Args) -> Result<()> {
	let Args { path, at, value } = args;

	let mut loaded = load_tree(&path)?;
	let item = Value::from_literal(&value)?;
	let doc_path = DocPath::parse(&at)?;
	let (owner, leaf) = doc_path.resolve_owner_mut(&mut loaded.tree)?;
	owner.insert_value(leaf, item)?;

	match loaded.compression {
		Compression::None => save_tree(&path, &loaded.tree)?,
		Compression::Zstd => save_tree_compressed(&path, &loaded.tree, DEFAULT_COMPRESSION_LEVEL)?,
	}

	println!("{at} = {value}");
	Ok(())
}
