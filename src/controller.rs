//! Form submission controller
//!
//! Drives one lead-capture form through its lifecycle:
//! `Idle → Validating → Submitting → (Succeeded | Failed) → Idle`.
//! Input events arrive as plain method calls, so the controller is
//! independent of whatever event dispatch the host uses. Rendering and
//! transport are injected collaborators.

use std::time::Instant;

use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::config::FormConfig;
use crate::form::{format_phone, validate_field, FieldKind, FormField, ValidationResult};
use crate::render::{FeedbackKind, FieldRenderer};
use crate::transport::{SubmissionOutcome, SubmissionPayload, Transport};

const VALIDATION_FAILED_FEEDBACK: &str = "Por favor, corrija os erros no formulário.";
const SUCCESS_FEEDBACK: &str = "Formulário enviado com sucesso! Entraremos em contato em breve.";
const TIMEOUT_FAILURE: &str = "Tempo de envio esgotado. Tente novamente.";
const GENERIC_FAILURE: &str = "Erro ao enviar formulário. Por favor, tente novamente.";

/// Where the controller is in the submission lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControllerState {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

/// Controller for a single lead-capture form
pub struct FormController<T, R> {
    config: FormConfig,
    fields: Vec<FormField>,
    state: ControllerState,
    transport: T,
    renderer: R,
    /// When timed success feedback should be hidden
    feedback_deadline: Option<Instant>,
}

impl<T: Transport, R: FieldRenderer> FormController<T, R> {
    /// Create a controller with the fields declared by `config`
    pub fn new(config: FormConfig, transport: T, renderer: R) -> Self {
        let fields = config
            .field_specs()
            .into_iter()
            .map(FormField::new)
            .collect();

        Self {
            config,
            fields,
            state: ControllerState::Idle,
            transport,
            renderer,
            feedback_deadline: None,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Current stored value of a field, after masking
    pub fn value(&self, field_id: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.spec.id == field_id)
            .map(|f| f.value.as_str())
    }

    /// Declared field ids, in validation order
    pub fn field_ids(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.spec.id.as_str()).collect()
    }

    /// A field's value changed (keystroke).
    ///
    /// Phone values get the live mask re-applied; the host should read the
    /// result back via [`Self::value`]. Typing into a field that currently
    /// shows an error clears the error.
    pub fn field_changed(&mut self, field_id: &str, value: &str) {
        let area_split = self.config.area_split;
        let Some(field) = self.fields.iter_mut().find(|f| f.spec.id == field_id) else {
            warn!("ignoring change for unknown field {field_id}");
            return;
        };

        field.value = if field.spec.kind == FieldKind::Phone {
            format_phone(value, area_split)
        } else {
            value.to_string()
        };

        if field.has_error {
            field.has_error = false;
            self.renderer.clear_error(field_id);
        }
    }

    /// A field lost focus: store the value and validate just that field
    pub fn field_blurred(&mut self, field_id: &str, value: &str) {
        self.field_changed(field_id, value);
        if let Some(idx) = self.fields.iter().position(|f| f.spec.id == field_id) {
            let result = validate_field(&self.fields[idx].spec, &self.fields[idx].value);
            self.apply_result(idx, &result);
        }
    }

    /// Handle the form's submit trigger.
    ///
    /// Validates every field (no short-circuit, so the user sees all errors
    /// at once) and, when everything passes, performs the one outbound
    /// submission. A second trigger while one is in flight is a no-op.
    /// Returns the transport outcome, or `None` when no submission was
    /// attempted.
    pub async fn submit_requested(&mut self) -> Option<SubmissionOutcome> {
        if self.state == ControllerState::Submitting {
            debug!("submit ignored, a submission is already in flight");
            return None;
        }

        self.feedback_deadline = None;
        self.renderer.hide_feedback();
        self.set_state(ControllerState::Validating);

        let results: Vec<ValidationResult> = self
            .fields
            .iter()
            .map(|f| validate_field(&f.spec, &f.value))
            .collect();
        for (idx, result) in results.iter().enumerate() {
            self.apply_result(idx, result);
        }

        if results.iter().any(|r| !r.is_valid()) {
            self.renderer
                .show_feedback(VALIDATION_FAILED_FEEDBACK, FeedbackKind::Error);
            self.set_state(ControllerState::Idle);
            return None;
        }

        let payload = self.build_payload();
        self.set_state(ControllerState::Submitting);
        info!("submitting lead form");

        let outcome = match timeout(
            self.config.submit_timeout(),
            self.transport.submit(&payload),
        )
        .await
        {
            Ok(outcome) => outcome,
            Err(_) => {
                warn!("lead submission timed out");
                SubmissionOutcome::Failure(TIMEOUT_FAILURE.to_string())
            }
        };

        match &outcome {
            SubmissionOutcome::Success => {
                self.set_state(ControllerState::Succeeded);
                for field in &mut self.fields {
                    field.clear();
                    self.renderer.clear_error(&field.spec.id);
                }
                self.renderer
                    .show_feedback(SUCCESS_FEEDBACK, FeedbackKind::Success);
                match self.config.success_feedback() {
                    Some(duration) => {
                        self.feedback_deadline = Some(Instant::now() + duration);
                    }
                    None => {
                        // Feedback stays until the next action
                        self.set_state(ControllerState::Idle);
                    }
                }
            }
            SubmissionOutcome::Failure(reason) => {
                self.set_state(ControllerState::Failed);
                let message = if reason.is_empty() {
                    GENERIC_FAILURE
                } else {
                    reason.as_str()
                };
                self.renderer.show_feedback(message, FeedbackKind::Error);
                // Field values are kept so the user can retry
                self.set_state(ControllerState::Idle);
            }
        }

        Some(outcome)
    }

    /// Hide expired feedback. The host event loop calls this periodically.
    pub fn tick(&mut self, now: Instant) {
        if let Some(deadline) = self.feedback_deadline {
            if now >= deadline {
                self.feedback_deadline = None;
                self.renderer.hide_feedback();
                if self.state == ControllerState::Succeeded {
                    self.set_state(ControllerState::Idle);
                }
            }
        }
    }

    fn set_state(&mut self, next: ControllerState) {
        debug!("form state {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    fn apply_result(&mut self, idx: usize, result: &ValidationResult) {
        match &result.error {
            Some(error) => {
                self.fields[idx].has_error = true;
                self.renderer.show_error(&result.field_id, &error.message);
            }
            None => {
                self.fields[idx].has_error = false;
                self.renderer.clear_error(&result.field_id);
            }
        }
    }

    fn build_payload(&self) -> SubmissionPayload {
        let mut payload = SubmissionPayload {
            name: String::new(),
            email: String::new(),
            phone: None,
            message: None,
            timestamp: chrono::Utc::now(),
        };

        for field in &self.fields {
            let trimmed = field.trimmed().to_string();
            match field.spec.kind {
                FieldKind::Name => payload.name = trimmed,
                FieldKind::Email => payload.email = trimmed,
                FieldKind::Phone => payload.phone = (!trimmed.is_empty()).then_some(trimmed),
                FieldKind::Message => payload.message = (!trimmed.is_empty()).then_some(trimmed),
            }
        }

        payload
    }
}
