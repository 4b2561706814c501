#[macro_use]
#[doc(hidden)]
mod macros;

pub mod either;
pub mod errors;
pub mod events;
pub mod prelude;
pub mod requests;
pub mod responses;
pub mod reverse_requests;
pub mod types;
pub mod wire;
