//! Element types storable in plain strided buffers.

use num_complex::Complex;

use crate::dtype::DType;

/// Marker for values that plain buffers (`[T]`, `Vec<T>`) can hold.
///
/// The tag defaults to [`DType::Generic`], so custom types only need:
/// ```ignore
/// impl Element for MyType {}
/// ```
pub trait Element: Copy + 'static {
    const DTYPE: DType = DType::Generic;
}

macro_rules! impl_element {
    ($($t:ty => $dt:ident),* $(,)?) => {
        $(impl Element for $t {
            const DTYPE: DType = DType::$dt;
        })*
    };
}

impl_element!(
    f64 => Float64,
    f32 => Float32,
    i32 => Int32,
    i16 => Int16,
    i8 => Int8,
    u32 => Uint32,
    u16 => Uint16,
    u8 => Uint8,
    bool => Bool,
    Complex<f64> => Complex128,
    Complex<f32> => Complex64,
);

macro_rules! impl_element_generic {
    ($($t:ty),*) => {
        $(impl Element for $t {})*
    };
}

impl_element_generic!(i64, u64, i128, u128, isize, usize);
