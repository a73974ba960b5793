use crate::doc::{ElementWidth, ValueFormat};

mod sealed {
	pub trait Sealed {}
}

/// Closed set of primitive types storable in a [`Value`](crate::doc::Value).
///
/// Elements are encoded little-endian. `store` and `load` work on slices of
/// exactly [`Scalar::WIDTH`] bytes and panic on any other length; the crate
/// only calls them through width-checked paths.
pub trait Scalar: sealed::Sealed + Copy {
	/// Element width tag for this type.
	const WIDTH: ElementWidth;
	/// Format chosen under [`FormatPolicy::Auto`](crate::doc::FormatPolicy::Auto).
	const AUTO_FORMAT: ValueFormat;

	/// Encode into exactly `WIDTH.bytes()` bytes.
	fn store(self, out: &mut [u8]);
	/// Decode from exactly `WIDTH.bytes()` bytes.
	fn load(bytes: &[u8]) -> Self;
}

macro_rules! le_scalar {
	($ty:ty, $width:ident, $format:ident) => {
		impl sealed::Sealed for $ty {}

		impl Scalar for $ty {
			const WIDTH: ElementWidth = ElementWidth::$width;
			const AUTO_FORMAT: ValueFormat = ValueFormat::$format;

			fn store(self, out: &mut [u8]) {
				out.copy_from_slice(&self.to_le_bytes());
			}

			fn load(bytes: &[u8]) -> Self {
				let mut buf = [0_u8; size_of::<$ty>()];
				buf.copy_from_slice(bytes);
				Self::from_le_bytes(buf)
			}
		}
	};
}

le_scalar!(u8, W1, Text);
le_scalar!(i8, W1, Hex);
le_scalar!(u16, W2, Hex);
le_scalar!(i16, W2, Hex);
le_scalar!(u32, W4, Hex);
le_scalar!(i32, W4, Hex);
le_scalar!(u64, W8, Hex);
le_scalar!(i64, W8, Hex);
le_scalar!(f32, W4, Real);
le_scalar!(f64, W8, Real);

impl sealed::Sealed for bool {}

impl Scalar for bool {
	const WIDTH: ElementWidth = ElementWidth::W1;
	const AUTO_FORMAT: ValueFormat = ValueFormat::Bool;

	fn store(self, out: &mut [u8]) {
		out[0] = u8::from(self);
	}

	fn load(bytes: &[u8]) -> Self {
		bytes[0] != 0
	}
}
