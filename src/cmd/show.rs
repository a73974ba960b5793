use std::path::{Path, PathBuf};

use boxdoc::doc::{LoadedDoc, Result, Tree, load_tree};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
}

/// Print document structure and statistics.
pub fn run(args: Args) -> Result<()> {
	let Args { path, json } = args;

	let loaded = load_tree(&path)?;
	let stats = collect(&loaded.tree);

	if json {
		print_json(&path, &loaded, &stats);
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("compression: {}", loaded.compression.as_str());
	println!("boxes: {}", stats.boxes);
	println!("items: {}", stats.items);
	println!("depth: {}", stats.depth);
	println!("top:");
	for (name, value) in loaded.tree.values() {
		println!("  ({name}) {}", value.render());
	}
	for (name, child) in loaded.tree.trees() {
		println!("  [{name}] boxes={} items={}", child.tree_count(), child.value_count());
	}

	Ok(())
}

struct Stats {
	boxes: usize,
	items: usize,
	depth: usize,
}

fn collect(tree: &Tree) -> Stats {
	let mut stats = Stats {
		boxes: 0,
		items: tree.value_count(),
		depth: 0,
	};

	for (_, child) in tree.trees() {
		let nested = collect(child);
		stats.boxes += 1 + nested.boxes;
		stats.items += nested.items;
		stats.depth = stats.depth.max(1 + nested.depth);
	}

	stats
}

fn print_json(path: &Path, loaded: &LoadedDoc, stats: &Stats) {
	let payload = ShowJson {
		path: path.display().to_string(),
		compression: loaded.compression.as_str().to_owned(),
		boxes: stats.boxes,
		items: stats.items,
		depth: stats.depth,
		top_items: loaded
			.tree
			.values()
			.map(|(name, value)| ItemJson {
				name: name.to_owned(),
				literal: value.render().to_owned(),
			})
			.collect(),
		top_boxes: loaded.tree.trees().map(|(name, _)| name.to_owned()).collect(),
	};

	if let Ok(text) = serde_json::to_string_pretty(&payload) {
		println!("{text}");
	}
}

#[derive(serde::Serialize)]
struct ShowJson {
	path: String,
	compression: String,
	boxes: usize,
	items: usize,
	depth: usize,
	top_items: Vec<ItemJson>,
	top_boxes: Vec<String>,
}

#[derive(serde::Serialize)]
struct ItemJson {
	name: String,
	literal: String,
}
