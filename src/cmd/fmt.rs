use std::path::PathBuf;

use boxdoc::doc::{DEFAULT_COMPRESSION_LEVEL, Result, load_tree, save_tree, save_tree_compressed};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub out: Option<PathBuf>,
	#[arg(long, requires = "out")]
	pub zstd: bool,
}

/// Parse a document and re-render it canonically: items before boxes,
/// sorted names, two-space indentation.
pub fn run(args: Args) -> Result<()> {
	let Args { path, out, zstd } = args;

	let loaded = load_tree(&path)?;

	match out {
		Some(out_path) if zstd => save_tree_compressed(&out_path, &loaded.tree, DEFAULT_COMPRESSION_LEVEL)?,
		Some(out_path) => save_tree(&out_path, &loaded.tree)?,
		None => print!("{}", loaded.tree.render()),
	}

	Ok(())
}
