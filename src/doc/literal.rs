use crate::doc::value::Value;
use crate::doc::{DocError, ElementWidth, Result, ValueFormat, scan};

/// Parse literal text into a value.
///
/// Rules are tried on the leading bytes in fixed priority order: hex before
/// real (so `0x…` and `{0x…` never read as digit-led reals), then bool,
/// char, and string. The whole text must be consumed; trailing bytes make
/// the literal malformed.
pub(crate) fn parse(text: &str) -> Result<Value> {
	let bytes = text.as_bytes();
	let Some(&first) = bytes.first() else {
		return Err(malformed(text));
	};

	match first {
		b'0' if bytes.get(1) == Some(&b'x') => parse_hex_scalar(text),
		b'{' => parse_array(text),
		b'$' | b'-' | b'0'..=b'9' => parse_real_scalar(text),
		b't' | b'f' => parse_bool(text),
		b'\'' => parse_char_scalar(text),
		b'"' => parse_string(text),
		_ => Err(malformed(text)),
	}
}

/// Render a value as literal text according to its format.
pub(crate) fn render(value: &Value) -> String {
	match value.format() {
		ValueFormat::Hex => render_hex(value),
		ValueFormat::Real => render_real(value),
		ValueFormat::Bool => render_bool(value),
		ValueFormat::Text => render_text(value),
	}
}

fn malformed(text: &str) -> DocError {
	DocError::MalformedLiteral { text: text.to_owned() }
}

fn parse_hex_scalar(text: &str) -> Result<Value> {
	let digits = &text[2..];
	let width = hex_width(digits.len()).ok_or_else(|| malformed(text))?;
	let element = parse_hex_digits(digits).ok_or_else(|| malformed(text))?;
	Ok(Value::assemble(
		width,
		0,
		element.to_le_bytes()[..width.bytes()].to_vec(),
		ValueFormat::Hex,
	))
}

fn parse_real_scalar(text: &str) -> Result<Value> {
	if let Some(stripped) = text.strip_prefix('$') {
		let element = stripped.parse::<f32>().map_err(|_| malformed(text))?;
		Ok(Value::assemble(ElementWidth::W4, 0, element.to_le_bytes().to_vec(), ValueFormat::Real))
	} else {
		let element = text.parse::<f64>().map_err(|_| malformed(text))?;
		Ok(Value::assemble(ElementWidth::W8, 0, element.to_le_bytes().to_vec(), ValueFormat::Real))
	}
}

fn parse_bool(text: &str) -> Result<Value> {
	let flag = match text {
		"true" => true,
		"false" => false,
		_ => return Err(malformed(text)),
	};
	Ok(Value::assemble(ElementWidth::W1, 0, vec![u8::from(flag)], ValueFormat::Bool))
}

fn parse_char_scalar(text: &str) -> Result<Value> {
	let bytes = text.as_bytes();
	if bytes.len() != 3 || bytes[2] != b'\'' || bytes[1] == b'\'' {
		return Err(malformed(text));
	}
	Ok(Value::assemble(ElementWidth::W1, 0, vec![bytes[1]], ValueFormat::Text))
}

fn parse_string(text: &str) -> Result<Value> {
	let bytes = text.as_bytes();
	let close = scan::find_delim(bytes, 1, b'"').map_err(|_| malformed(text))?;
	if close != bytes.len() - 1 {
		return Err(malformed(text));
	}

	let mut content = bytes[1..close].to_vec();
	content.push(0);
	let count = content.len();
	Ok(Value::assemble(ElementWidth::W1, count, content, ValueFormat::Text))
}

fn parse_array(text: &str) -> Result<Value> {
	let inner = text
		.strip_prefix('{')
		.and_then(|tail| tail.strip_suffix('}'))
		.ok_or_else(|| malformed(text))?;
	let bytes = inner.as_bytes();
	let Some(&first) = bytes.first() else {
		return Err(malformed(text));
	};

	match first {
		b'0' if bytes.get(1) == Some(&b'x') => parse_hex_array(text, inner),
		b'$' => parse_f32_array(text, inner),
		b'-' | b'0'..=b'9' => parse_f64_array(text, inner),
		b't' | b'f' => parse_bool_array(text, inner),
		b'\'' => parse_char_array(text, inner),
		_ => Err(malformed(text)),
	}
}

fn parse_hex_array(text: &str, inner: &str) -> Result<Value> {
	let mut elements = Vec::new();
	let mut digit_count = None;
	for item in inner.split(',') {
		let digits = item.strip_prefix("0x").ok_or_else(|| malformed(text))?;
		match digit_count {
			None => {
				hex_width(digits.len()).ok_or_else(|| malformed(text))?;
				digit_count = Some(digits.len());
			}
			Some(expected) if expected == digits.len() => {}
			Some(_) => return Err(malformed(text)),
		}
		elements.push(parse_hex_digits(digits).ok_or_else(|| malformed(text))?);
	}

	let width = digit_count.and_then(hex_width).ok_or_else(|| malformed(text))?;
	let mut bytes = Vec::with_capacity(width.bytes() * elements.len());
	for element in &elements {
		bytes.extend_from_slice(&element.to_le_bytes()[..width.bytes()]);
	}
	Ok(Value::assemble(width, elements.len(), bytes, ValueFormat::Hex))
}

fn parse_f32_array(text: &str, inner: &str) -> Result<Value> {
	let mut bytes = Vec::new();
	let mut count = 0_usize;
	for item in inner.split(',') {
		let item = item.strip_prefix('$').ok_or_else(|| malformed(text))?;
		let element = item.parse::<f32>().map_err(|_| malformed(text))?;
		bytes.extend_from_slice(&element.to_le_bytes());
		count += 1;
	}
	Ok(Value::assemble(ElementWidth::W4, count, bytes, ValueFormat::Real))
}

fn parse_f64_array(text: &str, inner: &str) -> Result<Value> {
	let mut bytes = Vec::new();
	let mut count = 0_usize;
	for item in inner.split(',') {
		let element = item.parse::<f64>().map_err(|_| malformed(text))?;
		bytes.extend_from_slice(&element.to_le_bytes());
		count += 1;
	}
	Ok(Value::assemble(ElementWidth::W8, count, bytes, ValueFormat::Real))
}

fn parse_bool_array(text: &str, inner: &str) -> Result<Value> {
	let mut bytes = Vec::new();
	for item in inner.split(',') {
		let flag = match item {
			"true" => true,
			"false" => false,
			_ => return Err(malformed(text)),
		};
		bytes.push(u8::from(flag));
	}
	let count = bytes.len();
	Ok(Value::assemble(ElementWidth::W1, count, bytes, ValueFormat::Bool))
}

fn parse_char_array(text: &str, inner: &str) -> Result<Value> {
	let raw = inner.as_bytes();
	let mut bytes = Vec::new();
	let mut at = 0_usize;
	loop {
		if at + 3 > raw.len() || raw[at] != b'\'' || raw[at + 2] != b'\'' || raw[at + 1] == b'\'' {
			return Err(malformed(text));
		}
		bytes.push(raw[at + 1]);
		at += 3;
		if at == raw.len() {
			break;
		}
		if raw[at] != b',' {
			return Err(malformed(text));
		}
		at += 1;
	}

	let count = bytes.len();
	Ok(Value::assemble(ElementWidth::W1, count, bytes, ValueFormat::Text))
}

fn hex_width(digit_count: usize) -> Option<ElementWidth> {
	match digit_count {
		2 => Some(ElementWidth::W1),
		4 => Some(ElementWidth::W2),
		8 => Some(ElementWidth::W4),
		16 => Some(ElementWidth::W8),
		_ => None,
	}
}

fn parse_hex_digits(digits: &str) -> Option<u64> {
	let mut value = 0_u64;
	for byte in digits.bytes() {
		let nibble = match byte {
			b'0'..=b'9' => byte - b'0',
			b'A'..=b'F' => byte - b'A' + 10,
			_ => return None,
		};
		value = (value << 4) | u64::from(nibble);
	}
	Some(value)
}

fn element_bytes(value: &Value, index: usize) -> &[u8] {
	let width = value.element_width().bytes();
	&value.as_bytes()[index * width..(index + 1) * width]
}

fn rendered_elements(value: &Value) -> usize {
	value.element_count().max(1)
}

fn render_hex(value: &Value) -> String {
	let array = value.is_array();
	let mut out = String::new();
	if array {
		out.push('{');
	}
	for index in 0..rendered_elements(value) {
		if index > 0 {
			out.push(',');
		}
		let element = element_bytes(value, index);
		match value.element_width() {
			ElementWidth::W1 => out.push_str(&format!("0x{:02X}", element[0])),
			ElementWidth::W2 => out.push_str(&format!("0x{:04X}", u16::from_le_bytes([element[0], element[1]]))),
			ElementWidth::W4 => {
				let element = u32::from_le_bytes([element[0], element[1], element[2], element[3]]);
				out.push_str(&format!("0x{element:08X}"));
			}
			ElementWidth::W8 => {
				let mut buf = [0_u8; 8];
				buf.copy_from_slice(element);
				out.push_str(&format!("0x{:016X}", u64::from_le_bytes(buf)));
			}
		}
	}
	if array {
		out.push('}');
	}
	out
}

fn render_real(value: &Value) -> String {
	let array = value.is_array();
	let mut out = String::new();
	if array {
		out.push('{');
	}
	for index in 0..rendered_elements(value) {
		if index > 0 {
			out.push(',');
		}
		let element = element_bytes(value, index);
		match value.element_width() {
			ElementWidth::W4 => {
				let element = f32::from_le_bytes([element[0], element[1], element[2], element[3]]);
				out.push('$');
				out.push_str(&format_f32(element));
			}
			ElementWidth::W8 => {
				let mut buf = [0_u8; 8];
				buf.copy_from_slice(element);
				out.push_str(&format_f64(f64::from_le_bytes(buf)));
			}
			// Real never permits W1/W2; unreachable through checked paths.
			ElementWidth::W1 | ElementWidth::W2 => return render_hex(value),
		}
	}
	if array {
		out.push('}');
	}
	out
}

fn render_bool(value: &Value) -> String {
	let array = value.is_array();
	let mut out = String::new();
	if array {
		out.push('{');
	}
	for index in 0..rendered_elements(value) {
		if index > 0 {
			out.push(',');
		}
		out.push_str(if element_bytes(value, index)[0] != 0 { "true" } else { "false" });
	}
	if array {
		out.push('}');
	}
	out
}

fn render_text(value: &Value) -> String {
	let bytes = value.as_bytes();
	if value.is_scalar() {
		return format!("'{}'", char::from(bytes[0]));
	}

	if bytes.last() == Some(&0) {
		let content = &bytes[..bytes.len() - 1];
		return format!("\"{}\"", String::from_utf8_lossy(content));
	}

	// Byte array without a NUL terminator renders as a char list.
	let mut out = String::from("{");
	for (index, byte) in bytes.iter().enumerate() {
		if index > 0 {
			out.push(',');
		}
		out.push('\'');
		out.push(char::from(*byte));
		out.push('\'');
	}
	out.push('}');
	out
}

/// Shortest round-trip form; f32 never needs more than 9 significant digits.
fn format_f32(value: f32) -> String {
	format!("{value}")
}

/// 15-significant-digit form when it reparses to the identical bits,
/// otherwise the shortest round-trip form.
fn format_f64(value: f64) -> String {
	let fixed = format_g(value, 15);
	if fixed.parse::<f64>().map(f64::to_bits) == Ok(value.to_bits()) {
		fixed
	} else {
		format!("{value}")
	}
}

/// C `%.Ng`-shaped formatting: `sig` significant digits, trailing zeros
/// stripped, positional notation for decimal exponents in `[-4, sig)` and
/// `e±NN` notation outside it.
fn format_g(value: f64, sig: usize) -> String {
	if value == 0.0 {
		return if value.is_sign_negative() { "-0".to_owned() } else { "0".to_owned() };
	}
	if !value.is_finite() {
		return format!("{value}");
	}

	let exp_form = format!("{:.*e}", sig - 1, value);
	let Some((mantissa, exp_text)) = exp_form.split_once('e') else {
		return exp_form;
	};
	let Ok(exp) = exp_text.parse::<i32>() else {
		return exp_form;
	};

	let digits: String = mantissa.chars().filter(|c| c.is_ascii_digit()).collect();
	let trimmed = digits.trim_end_matches('0');
	let digits = if trimmed.is_empty() { "0" } else { trimmed };

	let mut out = String::new();
	if mantissa.starts_with('-') {
		out.push('-');
	}

	if exp >= -4 && exp < sig as i32 {
		if exp >= 0 {
			let point = exp as usize + 1;
			if digits.len() > point {
				out.push_str(&digits[..point]);
				out.push('.');
				out.push_str(&digits[point..]);
			} else {
				out.push_str(digits);
				for _ in digits.len()..point {
					out.push('0');
				}
			}
		} else {
			out.push_str("0.");
			for _ in 0..(-exp - 1) {
				out.push('0');
			}
			out.push_str(digits);
		}
	} else {
		out.push_str(&digits[..1]);
		if digits.len() > 1 {
			out.push('.');
			out.push_str(&digits[1..]);
		}
		out.push('e');
		out.push(if exp < 0 { '-' } else { '+' });
		out.push_str(&format!("{:02}", exp.abs()));
	}

	out
}
