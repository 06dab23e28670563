//! Core input types.
//!
//! This module contains the values every other layer is written against:
//! - `RawInput`, the untrusted record a resolver reads from
//! - `InputSource`, the request location a value comes from
//! - `PropertyPath`, the name an error is reported under
//!
//! Nothing here validates anything; it only describes input.

mod input;
mod path;

pub use input::{InputError, InputSource, RawInput};
pub use path::{PropertyPath, ROOT};

pub(crate) use input::json_type_name;
