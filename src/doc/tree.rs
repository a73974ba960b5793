use std::collections::BTreeMap;

use crate::doc::codec;
use crate::doc::{DocError, Result, Value};

/// Bytes that cannot appear in box or item names: they are structural in the
/// text form and there is no escaping mechanism.
const RESERVED: &[u8] = br#"[](){}/'"$"#;

/// Hierarchical container with two independent namespaces per level: child
/// trees ("boxes") and child values ("items"), each keyed by name.
///
/// A tree exclusively owns its children; ownership is strictly tree-shaped
/// and moves only (no cloning). Iteration and serialization follow the
/// natural sort order of the names, independently in each namespace.
#[derive(Debug, Default, PartialEq)]
pub struct Tree {
	boxes: BTreeMap<String, Tree>,
	items: BTreeMap<String, Value>,
}

impl Tree {
	/// Empty tree.
	pub fn new() -> Self {
		Self::default()
	}

	/// Parse document text into a tree.
	pub fn parse(text: &str) -> Result<Self> {
		codec::parse(text)
	}

	/// Render this tree as document text.
	pub fn render(&self) -> String {
		codec::render(self)
	}

	/// Direct child box by exact name.
	pub fn tree(&self, name: &str) -> Result<&Tree> {
		self.boxes.get(name).ok_or_else(|| DocError::NotFound {
			kind: "box",
			name: name.to_owned(),
		})
	}

	/// Mutable direct child box by exact name.
	pub fn tree_mut(&mut self, name: &str) -> Result<&mut Tree> {
		self.boxes.get_mut(name).ok_or_else(|| DocError::NotFound {
			kind: "box",
			name: name.to_owned(),
		})
	}

	/// Direct child item by exact name.
	pub fn value(&self, name: &str) -> Result<&Value> {
		self.items.get(name).ok_or_else(|| DocError::NotFound {
			kind: "item",
			name: name.to_owned(),
		})
	}

	/// Mutable direct child item by exact name.
	pub fn value_mut(&mut self, name: &str) -> Result<&mut Value> {
		self.items.get_mut(name).ok_or_else(|| DocError::NotFound {
			kind: "item",
			name: name.to_owned(),
		})
	}

	/// Whether a direct child box with this name exists.
	pub fn has_tree(&self, name: &str) -> bool {
		self.boxes.contains_key(name)
	}

	/// Whether a direct child item with this name exists.
	pub fn has_value(&self, name: &str) -> bool {
		self.items.contains_key(name)
	}

	/// Insert a child box, overwriting any existing box of the same name.
	pub fn insert_tree(&mut self, name: impl Into<String>, tree: Tree) -> Result<()> {
		let name = name.into();
		check_name(&name)?;
		self.boxes.insert(name, tree);
		Ok(())
	}

	/// Insert a child item, overwriting any existing item of the same name.
	pub fn insert_value(&mut self, name: impl Into<String>, value: Value) -> Result<()> {
		let name = name.into();
		check_name(&name)?;
		self.items.insert(name, value);
		Ok(())
	}

	/// Drop all children recursively.
	pub fn clear(&mut self) {
		self.boxes.clear();
		self.items.clear();
	}

	/// Whether this tree has no children at all.
	pub fn is_empty(&self) -> bool {
		self.boxes.is_empty() && self.items.is_empty()
	}

	/// Number of direct child boxes.
	pub fn tree_count(&self) -> usize {
		self.boxes.len()
	}

	/// Number of direct child items.
	pub fn value_count(&self) -> usize {
		self.items.len()
	}

	/// Direct child boxes in name order.
	pub fn trees(&self) -> impl Iterator<Item = (&str, &Tree)> {
		self.boxes.iter().map(|(name, tree)| (name.as_str(), tree))
	}

	/// Direct child items in name order.
	pub fn values(&self) -> impl Iterator<Item = (&str, &Value)> {
		self.items.iter().map(|(name, value)| (name.as_str(), value))
	}
}

fn check_name(name: &str) -> Result<()> {
	let valid = !name.is_empty() && name.bytes().all(|byte| !RESERVED.contains(&byte) && !byte.is_ascii_control());
	if valid {
		Ok(())
	} else {
		Err(DocError::InvalidName { name: name.to_owned() })
	}
}
