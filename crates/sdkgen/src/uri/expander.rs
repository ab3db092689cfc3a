use itertools::Itertools;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::{errors::EncodingError, model::ParameterStyle};

/// Everything outside the RFC 3986 unreserved set is percent-encoded.
const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Reserved expansion additionally passes the RFC 6570 reserved set through.
const RESERVED: &AsciiSet = &UNRESERVED
  .remove(b':')
  .remove(b'/')
  .remove(b'?')
  .remove(b'#')
  .remove(b'[')
  .remove(b']')
  .remove(b'@')
  .remove(b'!')
  .remove(b'$')
  .remove(b'&')
  .remove(b'\'')
  .remove(b'(')
  .remove(b')')
  .remove(b'*')
  .remove(b'+')
  .remove(b',')
  .remove(b';')
  .remove(b'=');

/// A runtime parameter value handed to expansion.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
  Str(String),
  Int(i64),
  Bool(bool),
  /// Array value; elements are expected to be scalars.
  List(Vec<Value>),
  /// Object value as ordered key/value pairs.
  Pairs(Vec<(String, String)>),
}

impl Value {
  #[must_use]
  pub fn is_empty_collection(&self) -> bool {
    match self {
      Self::List(items) => items.is_empty(),
      Self::Pairs(pairs) => pairs.is_empty(),
      Self::Str(_) | Self::Int(_) | Self::Bool(_) => false,
    }
  }

  fn is_scalar(&self) -> bool {
    matches!(self, Self::Str(_) | Self::Int(_) | Self::Bool(_))
  }

  fn scalar_text(&self) -> String {
    match self {
      Self::Str(text) => text.clone(),
      Self::Int(number) => number.to_string(),
      Self::Bool(flag) => flag.to_string(),
      Self::List(items) => items.iter().map(Self::scalar_text).join(","),
      Self::Pairs(pairs) => pairs.iter().flat_map(|(key, value)| [key.clone(), value.clone()]).join(","),
    }
  }
}

impl From<&str> for Value {
  fn from(text: &str) -> Self {
    Self::Str(text.to_string())
  }
}

impl From<i64> for Value {
  fn from(number: i64) -> Self {
    Self::Int(number)
  }
}

impl From<bool> for Value {
  fn from(flag: bool) -> Self {
    Self::Bool(flag)
  }
}

fn encoded(text: &str, set: &'static AsciiSet) -> String {
  utf8_percent_encode(text, set).to_string()
}

/// Encodes a parameter name for query position.
#[must_use]
pub(crate) fn encode_name(name: &str) -> String {
  encoded(name, UNRESERVED)
}

/// Element texts for joined expansion. Objects flatten to `k,v,...` in the
/// standard form and `k=v` units when exploded.
fn elements(value: &Value, explode: bool, set: &'static AsciiSet) -> Vec<String> {
  match value {
    Value::List(items) => items.iter().map(|item| encoded(&item.scalar_text(), set)).collect(),
    Value::Pairs(pairs) if explode => pairs
      .iter()
      .map(|(key, item)| format!("{}={}", encoded(key, set), encoded(item, set)))
      .collect(),
    Value::Pairs(pairs) => pairs
      .iter()
      .flat_map(|(key, item)| [encoded(key, set), encoded(item, set)])
      .collect(),
    scalar => vec![encoded(&scalar.scalar_text(), set)],
  }
}

/// Expands one parameter per its RFC 6570 style.
///
/// Empty arrays and objects produce no output fragment at all (the variable
/// is omitted, not an empty marker), for standard and explode forms alike.
///
/// # Errors
///
/// [`EncodingError::ScalarExplode`] when explode expansion is requested for
/// a scalar under label, matrix, or form style, where explode changes the
/// wire shape; simple and reserved comma-join regardless of explode, so
/// scalars pass through there.
pub fn expand(style: ParameterStyle, explode: bool, name: &str, value: &Value) -> Result<String, EncodingError> {
  if value.is_empty_collection() {
    return Ok(String::new());
  }
  if explode && value.is_scalar() && !matches!(style, ParameterStyle::Simple | ParameterStyle::Reserved) {
    return Err(EncodingError::ScalarExplode {
      name: name.to_string(),
      style,
    });
  }

  match style {
    ParameterStyle::Simple => Ok(elements(value, explode, UNRESERVED).join(",")),
    ParameterStyle::Reserved => Ok(elements(value, explode, RESERVED).join(",")),
    ParameterStyle::Label => {
      let parts = elements(value, explode, UNRESERVED);
      if explode {
        Ok(parts.iter().map(|part| format!(".{part}")).collect())
      } else {
        Ok(format!(".{}", parts.join(",")))
      }
    }
    ParameterStyle::Matrix => Ok(expand_matrix(explode, name, value)),
    ParameterStyle::Form => Ok(expand_form(explode, name, value)),
  }
}

fn expand_matrix(explode: bool, name: &str, value: &Value) -> String {
  let name = encode_name(name);
  match value {
    // RFC 6570 §3.2.7: an empty scalar renders the bare name.
    Value::Str(text) if text.is_empty() => format!(";{name}"),
    Value::List(_) if explode => elements(value, false, UNRESERVED)
      .iter()
      .map(|part| format!(";{name}={part}"))
      .collect(),
    Value::Pairs(_) if explode => elements(value, true, UNRESERVED)
      .iter()
      .map(|part| format!(";{part}"))
      .collect(),
    _ => format!(";{name}={}", elements(value, false, UNRESERVED).join(",")),
  }
}

fn expand_form(explode: bool, name: &str, value: &Value) -> String {
  let name = encode_name(name);
  match value {
    Value::List(_) if explode => elements(value, false, UNRESERVED)
      .iter()
      .map(|part| format!("{name}={part}"))
      .join("&"),
    Value::Pairs(_) if explode => elements(value, true, UNRESERVED).join("&"),
    _ => format!("{name}={}", elements(value, false, UNRESERVED).join(",")),
  }
}
