//! Values substituted into `{{placeholder}}` tokens

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

/// A single variable value
///
/// Numbers render with their decimal `Display` form, so `2` becomes
/// `"2"` and `2.5` becomes `"2.5"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VarValue {
    /// Signed integer
    Integer(i64),
    /// Unsigned integer too large for `i64`
    Unsigned(u64),
    /// Floating point number
    Float(f64),
    /// Text inserted as-is
    Text(String),
}

impl VarValue {
    /// String form used for substitution.
    ///
    /// Non-finite floats render as `Infinity`, `-Infinity` and `NaN`.
    pub fn render(&self) -> Cow<'_, str> {
        match self {
            Self::Text(text) => Cow::Borrowed(text),
            Self::Integer(n) => Cow::Owned(n.to_string()),
            Self::Unsigned(n) => Cow::Owned(n.to_string()),
            Self::Float(n) if n.is_nan() => Cow::Borrowed("NaN"),
            Self::Float(n) if n.is_infinite() => {
                Cow::Borrowed(if n.is_sign_negative() { "-Infinity" } else { "Infinity" })
            }
            Self::Float(n) => Cow::Owned(n.to_string()),
        }
    }

    /// Parse command-line style input.
    ///
    /// A value becomes numeric only when it renders back to exactly `raw`,
    /// so `007`, `1.50`, `1e3` and `+5` stay text.
    pub fn parse_lenient(raw: &str) -> Self {
        let numeric = raw
            .parse::<i64>()
            .map(Self::Integer)
            .or_else(|_| raw.parse::<u64>().map(Self::Unsigned))
            .ok()
            .or_else(|| {
                raw.parse::<f64>()
                    .ok()
                    .filter(|n| n.is_finite())
                    .map(Self::Float)
            });

        match numeric {
            Some(value) if value.render() == raw => value,
            _ => Self::Text(raw.to_string()),
        }
    }
}

impl fmt::Display for VarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<&str> for VarValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for VarValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for VarValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

macro_rules! impl_from_signed {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for VarValue {
                fn from(value: $ty) -> Self {
                    Self::Integer(i64::from(value))
                }
            }
        )*
    };
}

macro_rules! impl_from_unsigned {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for VarValue {
                fn from(value: $ty) -> Self {
                    Self::Unsigned(u64::from(value))
                }
            }
        )*
    };
}

impl_from_signed!(i8, i16, i32, i64);
impl_from_unsigned!(u8, u16, u32, u64);

impl From<usize> for VarValue {
    fn from(value: usize) -> Self {
        Self::Unsigned(value as u64)
    }
}

impl From<isize> for VarValue {
    fn from(value: isize) -> Self {
        Self::Integer(value as i64)
    }
}

impl From<f32> for VarValue {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for VarValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// Named values for one translation call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Variables {
    values: BTreeMap<String, VarValue>,
}

impl Variables {
    /// An empty set of variables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<VarValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Insert or replace a value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<VarValue>) {
        self.values.insert(name.into(), value.into());
    }

    /// Value bound to `name`.
    pub fn get(&self, name: &str) -> Option<&VarValue> {
        self.values.get(name)
    }

    /// Whether `name` is bound.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Bound names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Number of bound names.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Variables
where
    K: Into<String>,
    V: Into<VarValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut variables = Self::new();
        for (name, value) in iter {
            variables.set(name, value);
        }
        variables
    }
}

/// Build [`Variables`] from `name => value` pairs
///
/// ```rust
/// use dictum_i18n::vars;
///
/// let vars = vars!["name" => "John", "count" => 2];
/// assert_eq!(vars.get("count").unwrap().to_string(), "2");
/// ```
#[macro_export]
macro_rules! vars {
    () => {
        $crate::Variables::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut vars = $crate::Variables::new();
        $(
            vars.set($key, $value);
        )+
        vars
    }};
}
