//! Strongly typed records mapped from generic response nodes.

mod alert;

pub use alert::{Alert, FieldFormatError, Level};
