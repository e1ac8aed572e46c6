//! Per-field validators
//!
//! One pure validator per field kind. Validators never touch the renderer;
//! they hand back a [`ValidationResult`] and the controller decides what to
//! show or clear.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::field::{FieldKind, FieldSpec, PhonePolicy};
use super::phone::strip_non_digits;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid hardcoded regex"));

static NAME_LETTERS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}\s]+$").expect("valid hardcoded regex"));

static PHONE_FORMATTED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\(\d{2}\)\s\d{4,5}-\d{4}$").expect("valid hardcoded regex"));

/// Why a field value was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Required,
    TooShort,
    TooLong,
    InvalidFormat,
}

/// A rejected field value with its user-facing message
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub kind: ErrorKind,
    pub message: String,
}

impl ValidationError {
    fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Outcome of validating one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub field_id: String,
    pub error: Option<ValidationError>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }
}

/// Validate a single field value against its spec
pub fn validate_field(spec: &FieldSpec, value: &str) -> ValidationResult {
    let error = match spec.kind {
        FieldKind::Name => validate_name(spec, value),
        FieldKind::Email => validate_email(spec, value),
        FieldKind::Phone => validate_phone(spec, value),
        FieldKind::Message => validate_message(spec, value),
    };
    ValidationResult {
        field_id: spec.id.clone(),
        error: error.err(),
    }
}

fn validate_name(spec: &FieldSpec, value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        if spec.required {
            return Err(ValidationError::new(
                ErrorKind::Required,
                "Nome é obrigatório",
            ));
        }
        return Ok(());
    }
    let len = trimmed.chars().count();
    if let Some(min) = spec.min_len {
        if len < min {
            return Err(ValidationError::new(
                ErrorKind::TooShort,
                format!("Nome deve ter pelo menos {min} caracteres"),
            ));
        }
    }
    if let Some(max) = spec.max_len {
        if len > max {
            return Err(ValidationError::new(
                ErrorKind::TooLong,
                format!("Nome muito longo (máximo {max} caracteres)"),
            ));
        }
    }
    if spec.letters_only && !NAME_LETTERS_RE.is_match(trimmed) {
        return Err(ValidationError::new(
            ErrorKind::InvalidFormat,
            "Nome deve conter apenas letras e espaços",
        ));
    }
    Ok(())
}

fn validate_email(spec: &FieldSpec, value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        if spec.required {
            return Err(ValidationError::new(
                ErrorKind::Required,
                "E-mail é obrigatório",
            ));
        }
        return Ok(());
    }
    if !EMAIL_RE.is_match(trimmed) {
        return Err(ValidationError::new(
            ErrorKind::InvalidFormat,
            "E-mail inválido",
        ));
    }
    Ok(())
}

fn validate_phone(spec: &FieldSpec, value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        if spec.required {
            return Err(ValidationError::new(
                ErrorKind::Required,
                "Telefone é obrigatório",
            ));
        }
        return Ok(());
    }
    match spec.phone_policy {
        PhonePolicy::DigitCount => {
            let digits = strip_non_digits(trimmed);
            if digits.len() < 10 || digits.len() > 11 {
                return Err(ValidationError::new(
                    ErrorKind::InvalidFormat,
                    "Telefone inválido (deve ter 10 ou 11 dígitos)",
                ));
            }
        }
        PhonePolicy::FormattedPattern => {
            if !PHONE_FORMATTED_RE.is_match(trimmed) {
                return Err(ValidationError::new(
                    ErrorKind::InvalidFormat,
                    "Telefone inválido. Use o formato: (00) 00000-0000",
                ));
            }
        }
    }
    Ok(())
}

fn validate_message(spec: &FieldSpec, value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        if spec.required {
            return Err(ValidationError::new(
                ErrorKind::Required,
                "Mensagem é obrigatória",
            ));
        }
        return Ok(());
    }
    let len = trimmed.chars().count();
    if let Some(min) = spec.min_len {
        if len < min {
            return Err(ValidationError::new(
                ErrorKind::TooShort,
                format!("Mensagem deve ter pelo menos {min} caracteres"),
            ));
        }
    }
    if let Some(max) = spec.max_len {
        if len > max {
            return Err(ValidationError::new(
                ErrorKind::TooLong,
                format!("Mensagem muito longa (máximo {max} caracteres)"),
            ));
        }
    }
    Ok(())
}
