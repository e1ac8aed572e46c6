//! Lead-capture form controller
//!
//! Owns the lifecycle of a single lead-capture form: per-field validation,
//! live phone masking, and asynchronous submission with loading/feedback
//! states. Rendering and network transport are injected collaborators, so
//! the same controller drives a console front end, a test harness, or any
//! other host that can deliver input events.

pub mod config;
pub mod controller;
pub mod form;
pub mod render;
pub mod transport;

pub use config::{FormConfig, PhonePolicy};
pub use controller::{ControllerState, FormController};
pub use form::{format_phone, FieldKind, FieldSpec, ValidationResult};
pub use render::{FeedbackKind, FieldRenderer};
pub use transport::{HttpTransport, SubmissionOutcome, SubmissionPayload, Transport};
