use std::collections::HashMap;

use crate::error::Error;
use crate::pattern::NamePattern;

/// A loosely-typed record value for callers without a fixed struct shape.
///
/// This is the dynamic counterpart of [`Bindable`](crate::Bindable): a name
/// can be bound into a [`Value::Object`] and an object can be rendered back
/// into a name. It is also the only surface on which
/// [`Error::NotAStruct`] is observable at runtime; statically typed records
/// rule the condition out at compile time.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Number(f64),
    String(String),
    Object(HashMap<String, Value>),
    Null,
}

impl Value {
    /// The canonical segment text for this value.
    ///
    /// Integral numbers render without a trailing `.0`, so `Number(42.0)`
    /// becomes `"42"`. `Object` and `Null` have no segment form.
    pub fn to_segment(&self) -> Option<String> {
        match self {
            Value::Bool(b) => Some(b.to_string()),
            Value::Number(n) => {
                if n.fract() == 0.0 {
                    Some(format!("{}", *n as i64))
                } else {
                    Some(n.to_string())
                }
            }
            Value::String(s) => Some(s.clone()),
            Value::Object(_) | Value::Null => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<HashMap<String, Value>> for Value {
    fn from(obj: HashMap<String, Value>) -> Self {
        Value::Object(obj)
    }
}

impl NamePattern {
    /// Parse a resource name and insert all discovered variable segment
    /// values into the object, keyed by variable name.
    ///
    /// Existing entries under the same keys are overwritten with
    /// [`Value::String`] values.
    ///
    /// # Errors
    ///
    /// * Propagated [`NamePattern::matches`] errors.
    /// * [`Error::NotAStruct`] when `value` is not a [`Value::Object`]; the
    ///   value is left unmodified.
    pub fn bind_into_value(&self, name: &str, value: &mut Value) -> Result<(), Error> {
        let params = self.matches(name)?;

        let Value::Object(fields) = value else {
            return Err(Error::NotAStruct);
        };

        for (variable, raw) in params {
            fields.insert(variable, Value::String(raw));
        }

        Ok(())
    }

    /// Render a resource name from an object's entries.
    ///
    /// # Errors
    ///
    /// * [`Error::NotAStruct`] when `value` is not a [`Value::Object`].
    /// * [`Error::MissingVariable`] when a variable segment has no entry, or
    ///   its entry has no segment form (`Null` or a nested object).
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use resource_names::{NamePattern, Value};
    ///
    /// let pattern = NamePattern::compile("/users/{user_id}");
    /// let mut fields = HashMap::new();
    /// fields.insert("user_id".to_string(), Value::Number(42.0));
    ///
    /// let name = pattern.render_value(&Value::Object(fields)).unwrap();
    /// assert_eq!(name, "/users/42");
    /// ```
    pub fn render_value(&self, value: &Value) -> Result<String, Error> {
        let Value::Object(fields) = value else {
            return Err(Error::NotAStruct);
        };

        self.format(|variable| fields.get(variable).and_then(Value::to_segment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_numbers_render_without_fraction() {
        assert_eq!(Value::Number(42.0).to_segment().unwrap(), "42");
        assert_eq!(Value::Number(1.5).to_segment().unwrap(), "1.5");
    }

    #[test]
    fn null_and_object_have_no_segment_form() {
        assert_eq!(Value::Null.to_segment(), None);
        assert_eq!(Value::Object(HashMap::new()).to_segment(), None);
    }
}
