//! The encoding boundary between message shapes and raw JSON.
//!
//! Encoding omits absent optional fields. Decoding first walks the raw JSON and reports
//! required fields that are missing or `null` (naming the innermost shape), and only then
//! hands the value to serde, whose remaining failures are reported as malformed wire values.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt::{self, Debug};

use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

use crate::errors::{DeserializationError, MissingRequiredFieldError};
use crate::types::{AnyValue, Percentage};

/// A type that can appear as the value of a message field.
pub trait WireField: Sized {
    /// Whether the field must be present on the wire. Only `Option<T>` is optional.
    const REQUIRED: bool = true;

    /// The value a field of this type takes when it was never set, if there is one.
    fn absent() -> Option<Self> {
        None
    }

    fn is_absent(&self) -> bool {
        false
    }

    /// Whether `value` has the JSON kind this type is decoded from.
    fn matches_kind(_value: &Value) -> bool {
        true
    }

    /// Checks the required fields of `value` and of everything nested in it.
    ///
    /// Type mismatches are not reported here; they are left to the deserializer.
    fn check_wire(_value: &Value) -> Result<(), MissingRequiredFieldError> {
        Ok(())
    }
}

/// A named protocol message shape: request arguments, a response body or an event body.
pub trait MessageShape: WireField + Serialize + DeserializeOwned {
    /// Name of the shape, used in error messages and logs.
    const SHAPE: &'static str;
    /// The fields of the shape, in declaration order.
    const FIELDS: &'static [FieldSpec];
}

/// Static description of one field of a [`MessageShape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldSpec {
    /// The Rust field name.
    pub name: &'static str,
    /// Explicit wire name, for fields whose wire name is not the camelCase form of `name`.
    pub rename: Option<&'static str>,
    pub required: bool,
}

impl FieldSpec {
    pub const fn new(name: &'static str, rename: Option<&'static str>, required: bool) -> Self {
        Self {
            name,
            rename,
            required,
        }
    }

    pub fn wire_name(&self) -> Cow<'static, str> {
        match self.rename {
            Some(rename) => Cow::Borrowed(rename),
            None => Cow::Owned(camel_case(self.name)),
        }
    }
}

/// Same conversion serde applies for `rename_all = "camelCase"`.
fn camel_case(snake: &str) -> String {
    let mut camel = String::with_capacity(snake.len());
    let mut capitalize = false;
    for ch in snake.chars() {
        if ch == '_' {
            capitalize = !camel.is_empty();
        } else if capitalize {
            camel.push(ch.to_ascii_uppercase());
            capitalize = false;
        } else {
            camel.push(ch);
        }
    }
    camel
}

impl<T: WireField> WireField for Option<T> {
    const REQUIRED: bool = false;

    fn absent() -> Option<Self> {
        Some(None)
    }

    fn is_absent(&self) -> bool {
        self.is_none()
    }

    fn matches_kind(value: &Value) -> bool {
        value.is_null() || T::matches_kind(value)
    }

    fn check_wire(value: &Value) -> Result<(), MissingRequiredFieldError> {
        match value {
            Value::Null => Ok(()),
            value => T::check_wire(value),
        }
    }
}

impl<T: WireField> WireField for Vec<T> {
    fn matches_kind(value: &Value) -> bool {
        value.is_array()
    }

    fn check_wire(value: &Value) -> Result<(), MissingRequiredFieldError> {
        if let Value::Array(items) = value {
            for item in items {
                T::check_wire(item)?;
            }
        }
        Ok(())
    }
}

impl<T: WireField> WireField for BTreeMap<String, T> {
    fn matches_kind(value: &Value) -> bool {
        value.is_object()
    }

    fn check_wire(value: &Value) -> Result<(), MissingRequiredFieldError> {
        if let Value::Object(entries) = value {
            for entry in entries.values() {
                T::check_wire(entry)?;
            }
        }
        Ok(())
    }
}

macro_rules! leaf_fields {
    ($($ty:ty => $kind:path),* $(,)?) => {
        $(
            impl WireField for $ty {
                fn matches_kind(value: &Value) -> bool {
                    $kind(value)
                }
            }
        )*
    };
}

leaf_fields!(
    bool => Value::is_boolean,
    i64 => Value::is_i64,
    String => Value::is_string,
    Percentage => Value::is_number,
);

impl WireField for AnyValue {}

/// Used by the generated `skip_serializing_if` attributes.
pub fn is_absent<T: WireField>(value: &T) -> bool {
    value.is_absent()
}

/// Checks one field of a decoded JSON object against its declaration.
pub fn check_field<T: WireField>(
    object: &Map<String, Value>,
    shape: &'static str,
    spec: FieldSpec,
) -> Result<(), MissingRequiredFieldError> {
    let wire_name = spec.wire_name();
    match object.get(wire_name.as_ref()) {
        None | Some(Value::Null) if spec.required => {
            Err(MissingRequiredFieldError::new(shape, wire_name))
        }
        None | Some(Value::Null) => Ok(()),
        Some(value) => T::check_wire(value),
    }
}

/// Checks that the required fields of an envelope are present, without looking into them.
pub(crate) fn check_required(
    object: &Map<String, Value>,
    shape: &'static str,
    fields: &[FieldSpec],
) -> Result<(), MissingRequiredFieldError> {
    for spec in fields.iter().filter(|spec| spec.required) {
        let wire_name = spec.wire_name();
        if matches!(object.get(wire_name.as_ref()), None | Some(Value::Null)) {
            return Err(MissingRequiredFieldError::new(shape, wire_name));
        }
    }
    Ok(())
}

/// An enum whose variant is selected by a string tag next to its payload, as generated by
/// `tagged_enum!`.
pub(crate) trait TaggedContent {
    /// Whether the payload belonging to `name` must be present. Unknown tags need none.
    fn content_required(name: &str) -> bool;

    /// Runs the required-field check of the payload belonging to `name`.
    fn check_content(name: &str, content: &Value) -> Result<(), MissingRequiredFieldError>;
}

/// Checks an envelope whose `content` key holds a payload selected by its `tag` key.
///
/// A missing or `null` payload is reported as a missing field of the envelope itself when its
/// tag requires one.
pub(crate) fn check_tagged<C: TaggedContent>(
    value: &Value,
    shape: &'static str,
    fields: &[FieldSpec],
    (tag, content): (&str, &'static str),
) -> Result<(), MissingRequiredFieldError> {
    let Some(object) = value.as_object() else {
        return Ok(());
    };
    check_required(object, shape, fields)?;
    if let Some(Value::String(name)) = object.get(tag) {
        match object.get(content) {
            None | Some(Value::Null) if C::content_required(name) => {
                return Err(MissingRequiredFieldError::new(shape, content));
            }
            None | Some(Value::Null) => {}
            Some(payload) => C::check_content(name, payload)?,
        }
    }
    Ok(())
}

/// Renders `Shape [field=value, ...]` over every field, absent ones included.
pub(crate) fn render(
    f: &mut fmt::Formatter<'_>,
    shape: &str,
    fields: &[(&str, &dyn Debug)],
) -> fmt::Result {
    write!(f, "{shape} [")?;
    for (index, (name, value)) in fields.iter().enumerate() {
        if index > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{name}={value:?}")?;
    }
    f.write_str("]")
}

pub fn encode<T: MessageShape>(message: &T) -> Result<Value, DeserializationError> {
    let value = serde_json::to_value(message)?;
    tracing::trace!("encoded {}: {}", T::SHAPE, value);
    Ok(value)
}

pub fn to_string<T: MessageShape>(message: &T) -> Result<String, DeserializationError> {
    Ok(encode(message)?.to_string())
}

pub fn decode<T: MessageShape>(value: Value) -> Result<T, DeserializationError> {
    tracing::trace!("decoding {}: {}", T::SHAPE, value);
    if let Err(error) = T::check_wire(&value) {
        tracing::debug!("rejected {}: {error}", T::SHAPE);
        return Err(error.into());
    }
    serde_json::from_value(value).map_err(|source| {
        tracing::debug!("malformed {}: {source}", T::SHAPE);
        DeserializationError::MalformedWireValue {
            shape: T::SHAPE,
            source,
        }
    })
}

pub fn from_str<T: MessageShape>(json: &str) -> Result<T, DeserializationError> {
    let value: Value = serde_json::from_str(json)?;
    decode(value)
}
