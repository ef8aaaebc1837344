//! Tri-state field for partial updates.

use serde::{Serialize, Serializer};

/// A field in a partial update request.
///
/// `Unchanged` fields are left out of the request body entirely, so the
/// server keeps its current value. `Clear` is sent as `null`. `Set` sends the
/// value.
///
/// Struct fields of this type must carry
/// `#[serde(skip_serializing_if = "Patch::is_unchanged")]`.
///
/// # Example
///
/// ```
/// use docontology::Patch;
///
/// let name: Patch<String> = Patch::from(Some("Invoice v2".to_string()));
/// assert!(name.is_set());
/// assert!(Patch::<String>::from(None).is_unchanged());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Patch<T> {
    /// Leave the server value untouched.
    #[default]
    Unchanged,
    /// Explicitly clear the server value.
    Clear,
    /// Replace the server value.
    Set(T),
}

impl<T> Patch<T> {
    /// True when the field is omitted from the request.
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Patch::Unchanged)
    }

    /// True when the field carries a value.
    pub fn is_set(&self) -> bool {
        matches!(self, Patch::Set(_))
    }

    /// Returns the value, if one is set.
    pub fn as_set(&self) -> Option<&T> {
        match self {
            Patch::Set(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Patch::Set(value),
            None => Patch::Unchanged,
        }
    }
}

impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Patch::Set(value) => value.serialize(serializer),
            Patch::Clear | Patch::Unchanged => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize, Default)]
    struct Body {
        #[serde(skip_serializing_if = "Patch::is_unchanged")]
        name: Patch<String>,
    }

    #[test]
    fn unchanged_is_omitted() {
        let body = serde_json::to_value(Body::default()).unwrap();
        assert_eq!(body, json!({}));
    }

    #[test]
    fn clear_is_null() {
        let body = serde_json::to_value(Body {
            name: Patch::Clear,
        })
        .unwrap();
        assert_eq!(body, json!({"name": null}));
    }

    #[test]
    fn set_is_value() {
        let body = serde_json::to_value(Body {
            name: Patch::Set(String::new()),
        })
        .unwrap();
        assert_eq!(body, json!({"name": ""}));
    }
}
