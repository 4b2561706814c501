#[doc(hidden)]
pub use crate::{
    either::{Either, NumberOrString},
    errors::{DeserializationError, EitherError, MissingRequiredFieldError},
    events::{self, Event, EventBody},
    requests::{self, Command, Request},
    responses::{self, Response},
    reverse_requests::{ReverseCommand, ReverseRequest},
    types,
    wire::{self, MessageShape},
};
