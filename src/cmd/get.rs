use std::path::PathBuf;

use boxdoc::doc::{DocPath, Result, load_tree};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub at: String,
}

/// Print the literal text of the item at a dotted path.
pub fn run(args: Args) -> Result<()> {
	let Args { path, at } = args;

	let loaded = load_tree(&path)?;
	let doc_path = DocPath::parse(&at)?;
	let value = doc_path.resolve(&loaded.tree)?;
	println!("{}", value.render());

	Ok(())
}
