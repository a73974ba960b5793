use crate::doc::{DocError, Result, Tree, Value};

/// Parsed dotted path expression (`box.box.item`).
///
/// A convenience for callers that address nested children in one string;
/// tree lookup itself is single-level. Names containing `.` cannot be
/// addressed this way.
#[derive(Debug, Clone)]
pub struct DocPath {
	segments: Vec<String>,
}

impl DocPath {
	/// Parse dot-separated segments; every segment must be non-empty.
	pub fn parse(input: &str) -> Result<Self> {
		if input.is_empty() {
			return Err(invalid(input));
		}

		let mut segments = Vec::new();
		for segment in input.split('.') {
			if segment.is_empty() {
				return Err(invalid(input));
			}
			segments.push(segment.to_owned());
		}

		Ok(Self { segments })
	}

	/// Path segments in order; the last one names an item.
	pub fn segments(&self) -> &[String] {
		&self.segments
	}

	/// Walk boxes to the item this path names.
	pub fn resolve<'tree>(&self, tree: &'tree Tree) -> Result<&'tree Value> {
		let (last, boxes) = self.split()?;
		let mut current = tree;
		for name in boxes {
			current = current.tree(name)?;
		}
		current.value(last)
	}

	/// Walk boxes to the one that owns the final segment, returning it with
	/// the item name. Every box along the path must already exist.
	pub fn resolve_owner_mut<'tree, 'path>(&'path self, tree: &'tree mut Tree) -> Result<(&'tree mut Tree, &'path str)> {
		let (last, boxes) = self.split()?;
		let mut current = tree;
		for name in boxes {
			current = current.tree_mut(name)?;
		}
		Ok((current, last))
	}

	fn split(&self) -> Result<(&str, &[String])> {
		match self.segments.split_last() {
			Some((last, boxes)) => Ok((last.as_str(), boxes)),
			None => Err(invalid("")),
		}
	}
}

fn invalid(path: &str) -> DocError {
	DocError::InvalidPath { path: path.to_owned() }
}
