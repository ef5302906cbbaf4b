/// Represents a JSON number.
///
/// JMESPath does not distinguish between integers and floating point
/// numbers at the language level, but the distinction is kept so that
/// integers survive a round-trip through an expression unchanged:
/// `to_string(` \` `42` \` `)` is `"42"`, not `"42.0"`.
///
/// Equality and ordering compare by numeric value, so `Int(1)` and
/// `Float(1.0)` are equal. Floats order through [`f64::total_cmp`].
#[derive(Debug, Copy, Clone)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Returns the numeric value as an [`f64`].
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Int(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }
    /// Returns the numeric value as an [`i64`] if it is an integer.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Int(i) => Some(*i),
            Number::Float(_) => None,
        }
    }
    /// Returns `true` if the number is an integer.
    pub fn is_int(&self) -> bool {
        matches!(self, Number::Int(_))
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{}", i),
            Number::Float(n) => write!(f, "{}", n),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            _ => self.as_f64() == other.as_f64(),
        }
    }
}
impl Eq for Number {}
impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Number {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a.cmp(b),
            _ => self.as_f64().total_cmp(&other.as_f64()),
        }
    }
}

macro_rules! eq {
    ($type:ty) => {
        impl PartialEq<$type> for Number {
            fn eq(&self, other: &$type) -> bool {
                self.as_f64() == *other as f64
            }
        }
        impl PartialEq<Number> for $type {
            fn eq(&self, other: &Number) -> bool {
                other == self
            }
        }
    };
}

eq!(i8);
eq!(i16);
eq!(i32);
eq!(i64);

eq!(u8);
eq!(u16);
eq!(u32);

eq!(isize);
eq!(usize);

eq!(f32);
eq!(f64);

macro_rules! from_int {
    ($type:ty) => {
        impl From<$type> for Number {
            fn from(value: $type) -> Self {
                Number::Int(value as i64)
            }
        }
    };
}

from_int!(i8);
from_int!(i16);
from_int!(i32);
from_int!(i64);

from_int!(u8);
from_int!(u16);
from_int!(u32);

from_int!(isize);
from_int!(usize);

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}
impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(value as f64)
    }
}

impl From<Number> for f64 {
    fn from(value: Number) -> Self {
        value.as_f64()
    }
}
impl From<&Number> for f64 {
    fn from(value: &Number) -> Self {
        value.as_f64()
    }
}
