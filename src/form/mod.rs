//! Form domain layer
//!
//! Field specifications, per-kind validators, and the phone input mask.
//! Everything here is pure; rendering the results is the host's job.

mod field;
mod phone;
mod validate;

pub use field::{FieldKind, FieldSpec, FormField, PhonePolicy};
pub use phone::{format_phone, strip_non_digits};
pub use validate::{validate_field, ErrorKind, ValidationError, ValidationResult};
