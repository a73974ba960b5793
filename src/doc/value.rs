use std::cell::OnceCell;
use std::fmt;

use crate::doc::literal;
use crate::doc::{DocError, ElementWidth, FormatPolicy, Result, Scalar, ValueFormat};

/// Dynamically typed, size-tagged container for one scalar or an array of
/// fixed-width elements.
///
/// A value owns its buffer exclusively; cloning deep-copies it. The element
/// width is the sole type discriminant for the typed accessors, and the
/// rendered literal text is memoized until the next mutation.
#[derive(Debug, Clone)]
pub struct Value {
	width: ElementWidth,
	count: usize,
	bytes: Vec<u8>,
	format: ValueFormat,
	cache: OnceCell<String>,
}

impl Value {
	/// Store one scalar; the format comes from `policy`.
	pub fn scalar<T: Scalar>(value: T, policy: FormatPolicy) -> Self {
		let mut bytes = vec![0_u8; T::WIDTH.bytes()];
		value.store(&mut bytes);
		Self::assemble(T::WIDTH, 0, bytes, default_format::<T>(policy))
	}

	/// Store a copy of the given elements as an array value.
	pub fn array<T: Scalar>(elements: &[T], policy: FormatPolicy) -> Result<Self> {
		if elements.is_empty() {
			return Err(DocError::EmptyArray);
		}

		let width = T::WIDTH.bytes();
		let mut bytes = vec![0_u8; width * elements.len()];
		for (index, element) in elements.iter().enumerate() {
			element.store(&mut bytes[index * width..(index + 1) * width]);
		}

		Ok(Self::assemble(T::WIDTH, elements.len(), bytes, default_format::<T>(policy)))
	}

	/// Take ownership of an already-encoded little-endian buffer.
	///
	/// `count == 0` means scalar. The buffer length must be exactly
	/// `width.bytes() * max(count, 1)` and the format must be valid for the
	/// width.
	pub fn from_raw(width: ElementWidth, count: usize, bytes: Vec<u8>, format: ValueFormat) -> Result<Self> {
		let expected = width.bytes() * count.max(1);
		if bytes.len() != expected {
			return Err(DocError::BufferSizeMismatch {
				expected,
				got: bytes.len(),
			});
		}
		if !format.permits(width) {
			return Err(DocError::IncompatibleFormat {
				format,
				width: width.bytes(),
			});
		}

		Ok(Self::assemble(width, count, bytes, format))
	}

	/// Store text as a one-byte-element array, content plus terminating NUL.
	pub fn text(text: &str) -> Self {
		let mut bytes = text.as_bytes().to_vec();
		bytes.push(0);
		let count = bytes.len();
		Self::assemble(ElementWidth::W1, count, bytes, ValueFormat::Text)
	}

	/// Construct from literal text; inverse of [`Value::render`].
	pub fn from_literal(text: &str) -> Result<Self> {
		literal::parse(text)
	}

	pub(crate) fn assemble(width: ElementWidth, count: usize, bytes: Vec<u8>, format: ValueFormat) -> Self {
		Self {
			width,
			count,
			bytes,
			format,
			cache: OnceCell::new(),
		}
	}

	/// Stored element width.
	pub fn element_width(&self) -> ElementWidth {
		self.width
	}

	/// Array element count; `0` means this value is a scalar.
	pub fn element_count(&self) -> usize {
		self.count
	}

	/// Current rendering format.
	pub fn format(&self) -> ValueFormat {
		self.format
	}

	/// Whether this value is a single scalar.
	pub fn is_scalar(&self) -> bool {
		self.count == 0
	}

	/// Whether this value is an array.
	pub fn is_array(&self) -> bool {
		self.count > 0
	}

	/// Raw little-endian element buffer.
	pub fn as_bytes(&self) -> &[u8] {
		&self.bytes
	}

	/// Read the scalar (or, on arrays, the first element) as `T`.
	///
	/// Width is the only compatibility check; reading a `u32` value as `i32`
	/// or `f32` succeeds and reinterprets the bytes.
	pub fn read<T: Scalar>(&self) -> Result<T> {
		self.check_width(T::WIDTH)?;
		Ok(T::load(&self.bytes[..T::WIDTH.bytes()]))
	}

	/// Decode every element as `T`; scalars decode as one element.
	pub fn read_array<T: Scalar>(&self) -> Result<Vec<T>> {
		self.check_width(T::WIDTH)?;
		Ok(self.bytes.chunks_exact(T::WIDTH.bytes()).map(T::load).collect())
	}

	/// View a one-byte-element buffer as text, trailing NUL stripped.
	pub fn as_text(&self) -> Result<&str> {
		self.check_width(ElementWidth::W1)?;
		let content = match self.bytes.split_last() {
			Some((0, rest)) => rest,
			_ => &self.bytes,
		};
		std::str::from_utf8(content).map_err(|err| DocError::NotUtf8 {
			valid_up_to: err.valid_up_to(),
		})
	}

	/// Overwrite the scalar (or, on arrays, the first element) in place.
	///
	/// Width-checked like [`Value::read`]; count and format are unchanged.
	pub fn write<T: Scalar>(&mut self, value: T) -> Result<()> {
		self.check_width(T::WIDTH)?;
		value.store(&mut self.bytes[..T::WIDTH.bytes()]);
		self.cache.take();
		Ok(())
	}

	/// Type-changing overwrite: becomes a scalar of `T` with the policy's
	/// default format.
	pub fn reset<T: Scalar>(&mut self, value: T, policy: FormatPolicy) {
		*self = Self::scalar(value, policy);
	}

	/// Replace the whole buffer with a copy of the given elements.
	pub fn replace_array<T: Scalar>(&mut self, elements: &[T], policy: FormatPolicy) -> Result<()> {
		*self = Self::array(elements, policy)?;
		Ok(())
	}

	/// Replace the whole buffer, taking ownership of an encoded buffer.
	pub fn replace_raw(&mut self, width: ElementWidth, count: usize, bytes: Vec<u8>, format: ValueFormat) -> Result<()> {
		*self = Self::from_raw(width, count, bytes, format)?;
		Ok(())
	}

	/// Change the rendering format; fails unless the format is valid for the
	/// stored width.
	pub fn set_format(&mut self, format: ValueFormat) -> Result<()> {
		if !format.permits(self.width) {
			return Err(DocError::IncompatibleFormat {
				format,
				width: self.width.bytes(),
			});
		}

		self.format = format;
		self.cache.take();
		Ok(())
	}

	/// Literal text for this value, computed lazily and cached until the
	/// next mutation.
	pub fn render(&self) -> &str {
		self.cache.get_or_init(|| literal::render(self))
	}

	fn check_width(&self, requested: ElementWidth) -> Result<()> {
		if requested != self.width {
			return Err(DocError::TypeMismatch {
				requested: requested.bytes(),
				stored: self.width.bytes(),
			});
		}
		Ok(())
	}
}

fn default_format<T: Scalar>(policy: FormatPolicy) -> ValueFormat {
	match policy {
		FormatPolicy::Auto => T::AUTO_FORMAT,
		FormatPolicy::Hex => ValueFormat::Hex,
	}
}

impl PartialEq for Value {
	fn eq(&self, other: &Self) -> bool {
		self.width == other.width && self.count == other.count && self.format == other.format && self.bytes == other.bytes
	}
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.render())
	}
}

#[cfg(test)]
mod tests;
