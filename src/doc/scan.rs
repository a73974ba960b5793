use crate::doc::{DocError, Result};

/// Width in bytes of the encoded sequence starting at `byte`.
///
/// ASCII bytes report 1; UTF-8 lead bytes report their full sequence width.
/// Structural delimiters are all ASCII, so a scanner that skips whole
/// sequences can never split one or mistake an interior byte for a delimiter.
pub(crate) fn lead_width(byte: u8) -> usize {
	if byte >= 0xF0 {
		4
	} else if byte >= 0xE0 {
		3
	} else if byte >= 0xC0 {
		2
	} else {
		1
	}
}

/// Find the next occurrence of an ASCII delimiter at or after `start`,
/// skipping multi-byte sequences whole.
pub(crate) fn find_delim(bytes: &[u8], start: usize, delim: u8) -> Result<usize> {
	let mut at = start;
	while at < bytes.len() {
		let width = lead_width(bytes[at]);
		if width > 1 {
			at += width;
			continue;
		}
		if bytes[at] == delim {
			return Ok(at);
		}
		at += 1;
	}

	Err(DocError::UnclosedDelimiter {
		expected: char::from(delim),
		at: start,
	})
}
