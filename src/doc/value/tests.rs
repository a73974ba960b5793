use crate::doc::{DocError, ElementWidth, FormatPolicy, Value, ValueFormat};

#[test]
fn auto_policy_picks_format_by_type() {
	assert_eq!(Value::scalar(42_u32, FormatPolicy::Auto).format(), ValueFormat::Hex);
	assert_eq!(Value::scalar(-7_i16, FormatPolicy::Auto).format(), ValueFormat::Hex);
	assert_eq!(Value::scalar(3.14_f64, FormatPolicy::Auto).format(), ValueFormat::Real);
	assert_eq!(Value::scalar(0.5_f32, FormatPolicy::Auto).format(), ValueFormat::Real);
	assert_eq!(Value::scalar(true, FormatPolicy::Auto).format(), ValueFormat::Bool);
	assert_eq!(Value::scalar(b'A', FormatPolicy::Auto).format(), ValueFormat::Text);
}

#[test]
fn hex_policy_overrides_every_type() {
	assert_eq!(Value::scalar(3.14_f64, FormatPolicy::Hex).format(), ValueFormat::Hex);
	assert_eq!(Value::scalar(true, FormatPolicy::Hex).format(), ValueFormat::Hex);
	assert_eq!(Value::scalar(b'A', FormatPolicy::Hex).format(), ValueFormat::Hex);
}

#[test]
fn scalar_read_round_trips() {
	let value = Value::scalar(0xBEEF_u16, FormatPolicy::Auto);
	assert_eq!(value.element_width(), ElementWidth::W2);
	assert_eq!(value.element_count(), 0);
	assert!(value.is_scalar());
	assert_eq!(value.read::<u16>().expect("read"), 0xBEEF);
}

#[test]
fn size_is_the_only_compatibility_check() {
	let value = Value::scalar(42_u32, FormatPolicy::Auto);
	assert_eq!(value.read::<i32>().expect("same-width read"), 42);
	assert_eq!(value.read::<f32>().expect("same-width read").to_bits(), 42);
}

#[test]
fn mismatched_width_read_fails() {
	let value = Value::scalar(1.0_f32, FormatPolicy::Auto);
	match value.read::<f64>() {
		Err(DocError::TypeMismatch { requested, stored }) => {
			assert_eq!(requested, 8);
			assert_eq!(stored, 4);
		}
		other => panic!("unexpected result: {other:?}"),
	}
}

#[test]
fn write_keeps_type_and_invalidates_cache() {
	let mut value = Value::scalar(1_u32, FormatPolicy::Auto);
	assert_eq!(value.render(), "0x00000001");
	value.write(0xFF_u32).expect("write");
	assert_eq!(value.render(), "0x000000FF");
	assert!(matches!(value.write(2_u64), Err(DocError::TypeMismatch { .. })));
}

#[test]
fn reset_changes_width_count_and_format() {
	let mut value = Value::array(&[1_u8, 2, 3], FormatPolicy::Hex).expect("array");
	value.reset(2.5_f64, FormatPolicy::Auto);
	assert!(value.is_scalar());
	assert_eq!(value.element_width(), ElementWidth::W8);
	assert_eq!(value.format(), ValueFormat::Real);
	assert_eq!(value.read::<f64>().expect("read"), 2.5);
}

#[test]
fn array_round_trips_elements() {
	let value = Value::array(&[1_u32, 2, 3], FormatPolicy::Auto).expect("array");
	assert_eq!(value.element_count(), 3);
	assert!(value.is_array());
	assert_eq!(value.read_array::<u32>().expect("read"), vec![1, 2, 3]);
	// read/write address the first element on arrays
	assert_eq!(value.read::<u32>().expect("read"), 1);
}

#[test]
fn array_write_touches_first_element_only() {
	let mut value = Value::array(&[1_u8, 2], FormatPolicy::Hex).expect("array");
	value.write(9_u8).expect("write");
	assert_eq!(value.read_array::<u8>().expect("read"), vec![9, 2]);
	assert_eq!(value.render(), "{0x09,0x02}");
}

#[test]
fn empty_array_is_rejected() {
	let empty: &[u32] = &[];
	assert!(matches!(Value::array(empty, FormatPolicy::Auto), Err(DocError::EmptyArray)));
}

#[test]
fn text_stores_content_plus_nul() {
	let value = Value::text("hello");
	assert_eq!(value.element_count(), 6);
	assert_eq!(value.as_bytes(), b"hello\0");
	assert_eq!(value.as_text().expect("text"), "hello");
	assert_eq!(value.format(), ValueFormat::Text);
}

#[test]
fn from_raw_checks_buffer_length_and_format() {
	let value = Value::from_raw(ElementWidth::W2, 2, vec![1, 0, 2, 0], ValueFormat::Hex).expect("raw");
	assert_eq!(value.read_array::<u16>().expect("read"), vec![1, 2]);

	match Value::from_raw(ElementWidth::W4, 0, vec![0; 3], ValueFormat::Hex) {
		Err(DocError::BufferSizeMismatch { expected, got }) => {
			assert_eq!(expected, 4);
			assert_eq!(got, 3);
		}
		other => panic!("unexpected result: {other:?}"),
	}

	assert!(matches!(
		Value::from_raw(ElementWidth::W4, 0, vec![0; 4], ValueFormat::Bool),
		Err(DocError::IncompatibleFormat { .. })
	));
}

#[test]
fn replace_array_and_raw_swap_the_buffer() {
	let mut value = Value::scalar(true, FormatPolicy::Auto);
	value.replace_array(&[1.0_f32, 2.0], FormatPolicy::Auto).expect("replace");
	assert_eq!(value.element_width(), ElementWidth::W4);
	assert_eq!(value.element_count(), 2);
	assert_eq!(value.format(), ValueFormat::Real);

	value.replace_raw(ElementWidth::W1, 0, vec![7], ValueFormat::Hex).expect("replace");
	assert_eq!(value.read::<u8>().expect("read"), 7);
}

#[test]
fn set_format_enforces_width_compatibility() {
	let mut value = Value::scalar(42_u32, FormatPolicy::Auto);
	match value.set_format(ValueFormat::Bool) {
		Err(DocError::IncompatibleFormat { format, width }) => {
			assert_eq!(format, ValueFormat::Bool);
			assert_eq!(width, 4);
		}
		other => panic!("unexpected result: {other:?}"),
	}
	assert!(matches!(value.set_format(ValueFormat::Text), Err(DocError::IncompatibleFormat { .. })));

	value.set_format(ValueFormat::Real).expect("4-byte real is valid");
	assert_eq!(value.format(), ValueFormat::Real);
	value.set_format(ValueFormat::Hex).expect("hex always valid");
	assert_eq!(value.render(), "0x0000002A");
}

#[test]
fn set_format_changes_rendering() {
	let mut value = Value::scalar(b'A', FormatPolicy::Auto);
	assert_eq!(value.render(), "'A'");
	value.set_format(ValueFormat::Hex).expect("set");
	assert_eq!(value.render(), "0x41");
	value.set_format(ValueFormat::Bool).expect("set");
	assert_eq!(value.render(), "true");
}

#[test]
fn equality_ignores_the_render_cache() {
	let left = Value::scalar(5_u32, FormatPolicy::Auto);
	let right = Value::scalar(5_u32, FormatPolicy::Auto);
	let _ = left.render();
	assert_eq!(left, right);

	assert_ne!(left, Value::scalar(6_u32, FormatPolicy::Auto));
	// same bits, different format
	let mut real = Value::scalar(5_u32, FormatPolicy::Auto);
	real.set_format(ValueFormat::Real).expect("set");
	assert_ne!(left, real);
}

#[test]
fn clone_deep_copies_the_buffer() {
	let mut source = Value::array(&[1_u8, 2], FormatPolicy::Hex).expect("array");
	let copy = source.clone();
	source.write(9_u8).expect("write");
	assert_eq!(copy.read_array::<u8>().expect("read"), vec![1, 2]);
}

#[test]
fn display_matches_render() {
	let value = Value::scalar(true, FormatPolicy::Auto);
	assert_eq!(format!("{value}"), "true");
}
