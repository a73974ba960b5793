use crate::doc::{DocError, Result, Tree, Value, scan};

const INDENT: &str = "  ";

/// Parse document text into a fresh tree.
pub(crate) fn parse(text: &str) -> Result<Tree> {
	let mut tree = Tree::new();
	parse_into(&mut tree, text)?;
	Ok(tree)
}

/// Render a tree as document text: items first, then boxes, each namespace
/// in name order, nested bodies indented one unit per level.
pub(crate) fn render(tree: &Tree) -> String {
	let mut out = String::new();
	render_into(tree, &mut out, "");
	out
}

fn parse_into(tree: &mut Tree, text: &str) -> Result<()> {
	let bytes = text.as_bytes();
	let mut at = 0_usize;
	while at < bytes.len() {
		let width = scan::lead_width(bytes[at]);
		if width > 1 {
			at += width;
			continue;
		}

		match bytes[at] {
			b'(' => {
				let close = scan::find_delim(bytes, at + 1, b')')?;
				let end = scan::find_delim(bytes, close + 1, b'\n')?;
				let name = &text[at + 1..close];
				let raw = &text[close + 1..end];
				let literal = raw.strip_suffix('\r').unwrap_or(raw);
				tree.insert_value(name, Value::from_literal(literal)?)?;
				at = end + 1;
			}
			b'[' => {
				let close = scan::find_delim(bytes, at + 1, b']')?;
				let name = &text[at + 1..close];
				if let Some(stray) = name.strip_prefix('/') {
					return Err(DocError::UnterminatedTag { name: stray.to_owned() });
				}

				let (body_end, tag_end) = find_close_tag(text, name, close + 1)?;
				let mut child = Tree::new();
				parse_into(&mut child, &text[close + 1..body_end])?;
				tree.insert_tree(name, child)?;
				at = tag_end + 1;
			}
			_ => at += 1,
		}
	}

	Ok(())
}

/// Locate the close tag matching an already-consumed `[name]`.
///
/// Same-named tags nest: a counter starts at 1, each inner `[name]`
/// increments it, each `[/name]` decrements it, and the tag that brings it
/// to zero is the match. Returns the byte offsets of the close tag's `[`
/// (end of the body) and its `]`.
fn find_close_tag(text: &str, name: &str, from: usize) -> Result<(usize, usize)> {
	let bytes = text.as_bytes();
	let mut depth = 1_usize;
	let mut at = from;
	while at < bytes.len() {
		let width = scan::lead_width(bytes[at]);
		if width > 1 {
			at += width;
			continue;
		}

		if bytes[at] != b'[' {
			at += 1;
			continue;
		}

		let close = scan::find_delim(bytes, at + 1, b']')?;
		let tag = &text[at + 1..close];
		if let Some(inner) = tag.strip_prefix('/') {
			if inner == name {
				depth -= 1;
				if depth == 0 {
					return Ok((at, close));
				}
			}
		} else if tag == name {
			depth += 1;
		}
		at = close + 1;
	}

	Err(DocError::UnterminatedTag { name: name.to_owned() })
}

fn render_into(tree: &Tree, out: &mut String, prefix: &str) {
	for (name, value) in tree.values() {
		out.push_str(prefix);
		out.push('(');
		out.push_str(name);
		out.push(')');
		out.push_str(value.render());
		out.push('\n');
	}

	let nested = format!("{prefix}{INDENT}");
	for (name, child) in tree.trees() {
		out.push_str(prefix);
		out.push('[');
		out.push_str(name);
		out.push_str("]\n");
		render_into(child, out, &nested);
		out.push_str(prefix);
		out.push_str("[/");
		out.push_str(name);
		out.push_str("]\n");
	}
}
