use std::fmt::{Display, Formatter};

use serde_json::Value;

use crate::ValidationError;

/// Value of a `type: number` property.
///
/// JSON does not distinguish `1` from `1.0` at the type level, so the textual form of the
/// decoded number decides: a decimal point or exponent yields `Float`, anything else `Integer`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
  Integer(i64),
  Float(f64),
}

impl Number {
  pub fn from_json(value: &Value) -> Result<Self, ValidationError> {
    let Value::Number(number) = value else {
      return Err(ValidationError::unexpected_type("number", value));
    };

    let text = number.to_string();
    if !text.contains(['.', 'e', 'E'])
      && let Some(integer) = number.as_i64()
    {
      return Ok(Self::Integer(integer));
    }

    number
      .as_f64()
      .map(Self::Float)
      .ok_or_else(|| ValidationError::new(format!("number {text} is out of range")))
  }

  pub fn to_json(&self) -> Value {
    match *self {
      Self::Integer(value) => Value::from(value),
      Self::Float(value) => serde_json::Number::from_f64(value).map_or(Value::Null, Value::Number),
    }
  }

  #[allow(clippy::cast_precision_loss)]
  pub fn as_f64(&self) -> f64 {
    match *self {
      Self::Integer(value) => value as f64,
      Self::Float(value) => value,
    }
  }

  pub fn is_integer(&self) -> bool {
    matches!(self, Self::Integer(_))
  }
}

impl From<i64> for Number {
  fn from(value: i64) -> Self {
    Self::Integer(value)
  }
}

impl From<f64> for Number {
  fn from(value: f64) -> Self {
    Self::Float(value)
  }
}

impl Display for Number {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Integer(value) => write!(f, "{value}"),
      Self::Float(value) => write!(f, "{value}"),
    }
  }
}
