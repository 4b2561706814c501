use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{EitherError, MissingRequiredFieldError};
use crate::wire::WireField;

/// A field holding exactly one of two alternatives.
///
/// On the wire this is the bare populated value. Decoding picks the alternative by the JSON
/// type of the value, trying `L` first.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

impl<L, R> Either<L, R> {
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    pub fn left(&self) -> Option<&L> {
        match self {
            Either::Left(left) => Some(left),
            Either::Right(_) => None,
        }
    }

    pub fn right(&self) -> Option<&R> {
        match self {
            Either::Left(_) => None,
            Either::Right(right) => Some(right),
        }
    }

    pub fn get_left(&self) -> Result<&L, EitherError> {
        self.left().ok_or(EitherError::WrongAlternative {
            expected: "left",
            found: "right",
        })
    }

    pub fn get_right(&self) -> Result<&R, EitherError> {
        self.right().ok_or(EitherError::WrongAlternative {
            expected: "right",
            found: "left",
        })
    }

    pub fn map_left<T>(self, f: impl FnOnce(L) -> T) -> Either<T, R> {
        match self {
            Either::Left(left) => Either::Left(f(left)),
            Either::Right(right) => Either::Right(right),
        }
    }

    pub fn map_right<T>(self, f: impl FnOnce(R) -> T) -> Either<L, T> {
        match self {
            Either::Left(left) => Either::Left(left),
            Either::Right(right) => Either::Right(f(right)),
        }
    }
}

/// Passes the check if either alternative the value could decode as has all its required
/// fields. Otherwise the failure of the first such alternative is reported.
impl<L: WireField, R: WireField> WireField for Either<L, R> {
    fn matches_kind(value: &Value) -> bool {
        L::matches_kind(value) || R::matches_kind(value)
    }

    fn check_wire(value: &Value) -> Result<(), MissingRequiredFieldError> {
        let left = L::matches_kind(value).then(|| L::check_wire(value));
        let right = R::matches_kind(value).then(|| R::check_wire(value));
        match (left, right) {
            (Some(Ok(())), _) | (_, Some(Ok(()))) => Ok(()),
            (Some(Err(error)), _) | (None, Some(Err(error))) => Err(error),
            (None, None) => Ok(()),
        }
    }
}

/// Identifier that is sent either as a number or as a string (module ids).
pub type NumberOrString = Either<i64, String>;

impl NumberOrString {
    pub fn is_number(&self) -> bool {
        self.is_left()
    }

    pub fn is_string(&self) -> bool {
        self.is_right()
    }

    pub fn as_number(&self) -> Result<i64, EitherError> {
        match self {
            Either::Left(number) => Ok(*number),
            Either::Right(_) => Err(EitherError::WrongAlternative {
                expected: "number",
                found: "string",
            }),
        }
    }

    pub fn as_string(&self) -> Result<&str, EitherError> {
        match self {
            Either::Left(_) => Err(EitherError::WrongAlternative {
                expected: "string",
                found: "number",
            }),
            Either::Right(string) => Ok(string),
        }
    }
}

impl From<i64> for NumberOrString {
    fn from(number: i64) -> Self {
        Either::Left(number)
    }
}

impl From<String> for NumberOrString {
    fn from(string: String) -> Self {
        Either::Right(string)
    }
}

impl From<&str> for NumberOrString {
    fn from(string: &str) -> Self {
        Either::Right(string.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    use serde_json::json;

    use super::*;
    use crate::types::{Breakpoint, Thread};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn wire_form_is_the_bare_value() {
        assert_eq!(
            serde_json::to_value(NumberOrString::from(7)).unwrap(),
            json!(7)
        );
        assert_eq!(
            serde_json::to_value(NumberOrString::from("libc.so")).unwrap(),
            json!("libc.so")
        );
    }

    #[test]
    fn decode_dispatches_on_json_type() {
        let number: NumberOrString = serde_json::from_value(json!(1)).unwrap();
        assert_eq!(number, Either::Left(1));
        assert_eq!(number.as_number(), Ok(1));

        let string: NumberOrString = serde_json::from_value(json!("1")).unwrap();
        assert!(string.is_string());
        assert_eq!(string.as_string(), Ok("1"));

        assert!(serde_json::from_value::<NumberOrString>(json!(true)).is_err());
    }

    #[test]
    fn alternatives_with_the_same_text_differ() {
        let number = NumberOrString::from(1);
        let string = NumberOrString::from("1");
        assert_ne!(number, string);
        assert_ne!(hash_of(&number), hash_of(&string));
    }

    #[test]
    fn wrong_alternative_is_reported() {
        let number = NumberOrString::from(3);
        assert_eq!(
            number.as_string(),
            Err(EitherError::WrongAlternative {
                expected: "string",
                found: "number",
            })
        );
        assert_eq!(number.get_left(), Ok(&3));
        assert!(number.get_right().is_err());
        assert_eq!(number.right(), None);
    }

    #[test]
    fn required_fields_are_checked_in_the_matching_alternative() {
        type ThreadOrName = Either<Thread, String>;
        assert_eq!(
            ThreadOrName::check_wire(&json!({ "id": 1 })),
            Err(MissingRequiredFieldError::new("Thread", "name"))
        );
        assert_eq!(ThreadOrName::check_wire(&json!("main")), Ok(()));

        type ThreadOrBreakpoint = Either<Thread, Breakpoint>;
        assert_eq!(
            ThreadOrBreakpoint::check_wire(&json!({ "verified": true })),
            Ok(())
        );
        assert_eq!(
            ThreadOrBreakpoint::check_wire(&json!({ "line": 3 })),
            Err(MissingRequiredFieldError::new("Thread", "id"))
        );
        assert_eq!(NumberOrString::check_wire(&json!(true)), Ok(()));
    }

    #[test]
    fn map_keeps_the_populated_side() {
        let id = NumberOrString::from(41).map_left(|n| n + 1);
        assert_eq!(id, Either::Left(42));
        let id = NumberOrString::from("a").map_left(|n| n + 1);
        assert_eq!(id.as_string(), Ok("a"));
    }
}
