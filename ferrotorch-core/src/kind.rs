use std::fmt;

use ferrotorch_sys::c_schar;

use crate::error::TorchError;

/// Element type of a tensor, with the scalar-type codes the native surface
/// uses on the wire.
///
/// The numbering matches c10's `ScalarType`; codes this binding does not map
/// (complex and quantized types) surface as
/// [`TorchError::UnsupportedKind`] when a native tensor reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Uint8,
    Int8,
    Int16,
    Int32,
    Int64,
    Half,
    Float,
    Double,
    Bool,
    BFloat16,
}

impl Kind {
    pub(crate) fn to_code(self) -> c_schar {
        match self {
            Kind::Uint8 => 0,
            Kind::Int8 => 1,
            Kind::Int16 => 2,
            Kind::Int32 => 3,
            Kind::Int64 => 4,
            Kind::Half => 5,
            Kind::Float => 6,
            Kind::Double => 7,
            Kind::Bool => 11,
            Kind::BFloat16 => 15,
        }
    }

    pub(crate) fn from_code(code: i8) -> Result<Kind, TorchError> {
        Ok(match code {
            0 => Kind::Uint8,
            1 => Kind::Int8,
            2 => Kind::Int16,
            3 => Kind::Int32,
            4 => Kind::Int64,
            5 => Kind::Half,
            6 => Kind::Float,
            7 => Kind::Double,
            11 => Kind::Bool,
            15 => Kind::BFloat16,
            code => return Err(TorchError::UnsupportedKind { code }),
        })
    }

    /// Width of one element in bytes.
    pub fn element_size(self) -> usize {
        match self {
            Kind::Uint8 | Kind::Int8 | Kind::Bool => 1,
            Kind::Int16 | Kind::Half | Kind::BFloat16 => 2,
            Kind::Int32 | Kind::Float => 4,
            Kind::Int64 | Kind::Double => 8,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Uint8 => "uint8",
            Kind::Int8 => "int8",
            Kind::Int16 => "int16",
            Kind::Int32 => "int32",
            Kind::Int64 => "int64",
            Kind::Half => "float16",
            Kind::Float => "float32",
            Kind::Double => "float64",
            Kind::Bool => "bool",
            Kind::BFloat16 => "bfloat16",
        };
        write!(f, "{name}")
    }
}

/// Rust element types that can be viewed in host tensor memory.
///
/// The associated [`Kind`] is checked against the tensor's reported element
/// type before any reinterpretation happens.
pub trait Element: Copy + 'static {
    const KIND: Kind;
}

impl Element for u8 {
    const KIND: Kind = Kind::Uint8;
}
impl Element for i8 {
    const KIND: Kind = Kind::Int8;
}
impl Element for i16 {
    const KIND: Kind = Kind::Int16;
}
impl Element for i32 {
    const KIND: Kind = Kind::Int32;
}
impl Element for i64 {
    const KIND: Kind = Kind::Int64;
}
impl Element for f32 {
    const KIND: Kind = Kind::Float;
}
impl Element for f64 {
    const KIND: Kind = Kind::Double;
}
impl Element for bool {
    const KIND: Kind = Kind::Bool;
}
