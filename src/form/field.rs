//! Form field specifications and values

use serde::{Deserialize, Serialize};

/// Which validator applies to a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Name,
    Email,
    Phone,
    Message,
}

/// How phone values are validated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhonePolicy {
    /// Strip punctuation and accept 10 or 11 digits
    #[default]
    DigitCount,
    /// Match the fully punctuated form `(DD) DDDD-DDDD` or `(DD) DDDDD-DDDD`
    FormattedPattern,
}

/// Static per-field validation rules, fixed at controller construction
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub id: String,
    pub kind: FieldKind,
    pub required: bool,
    pub min_len: Option<usize>,
    pub max_len: Option<usize>,
    /// Restrict name values to letters and whitespace (Unicode-aware)
    pub letters_only: bool,
    /// Only meaningful for [`FieldKind::Phone`]
    pub phone_policy: PhonePolicy,
}

impl FieldSpec {
    /// Create a name field spec with the given length bounds
    pub fn name(id: &str, min_len: usize, max_len: Option<usize>, letters_only: bool) -> Self {
        Self {
            id: id.to_string(),
            kind: FieldKind::Name,
            required: true,
            min_len: Some(min_len),
            max_len,
            letters_only,
            phone_policy: PhonePolicy::default(),
        }
    }

    /// Create an email field spec (always required)
    pub fn email(id: &str) -> Self {
        Self {
            id: id.to_string(),
            kind: FieldKind::Email,
            required: true,
            min_len: None,
            max_len: None,
            letters_only: false,
            phone_policy: PhonePolicy::default(),
        }
    }

    /// Create a phone field spec with the given validation policy
    pub fn phone(id: &str, required: bool, policy: PhonePolicy) -> Self {
        Self {
            id: id.to_string(),
            kind: FieldKind::Phone,
            required,
            min_len: None,
            max_len: None,
            letters_only: false,
            phone_policy: policy,
        }
    }

    /// Create a message field spec with the given length bounds
    pub fn message(id: &str, required: bool, min_len: usize, max_len: usize) -> Self {
        Self {
            id: id.to_string(),
            kind: FieldKind::Message,
            required,
            min_len: Some(min_len),
            max_len: Some(max_len),
            letters_only: false,
            phone_policy: PhonePolicy::default(),
        }
    }
}

/// A field spec together with its current raw value and error flag
#[derive(Debug, Clone)]
pub struct FormField {
    pub spec: FieldSpec,
    pub value: String,
    /// Whether an error is currently rendered on this field
    pub has_error: bool,
}

impl FormField {
    pub fn new(spec: FieldSpec) -> Self {
        Self {
            spec,
            value: String::new(),
            has_error: false,
        }
    }

    /// The value as it would be submitted
    pub fn trimmed(&self) -> &str {
        self.value.trim()
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        self.value.clear();
        self.has_error = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_spec_defaults() {
        let spec = FieldSpec::name("name", 3, Some(100), false);
        assert_eq!(spec.kind, FieldKind::Name);
        assert!(spec.required);
        assert_eq!(spec.min_len, Some(3));
        assert_eq!(spec.max_len, Some(100));
        assert!(!spec.letters_only);
    }

    #[test]
    fn test_phone_spec_carries_policy() {
        let spec = FieldSpec::phone("phone", true, PhonePolicy::FormattedPattern);
        assert_eq!(spec.kind, FieldKind::Phone);
        assert!(spec.required);
        assert_eq!(spec.phone_policy, PhonePolicy::FormattedPattern);
    }

    #[test]
    fn test_field_trimmed() {
        let mut field = FormField::new(FieldSpec::email("email"));
        field.value = "  a@b.c  ".to_string();
        assert_eq!(field.trimmed(), "a@b.c");
    }

    #[test]
    fn test_field_clear_resets_error_flag() {
        let mut field = FormField::new(FieldSpec::email("email"));
        field.value = "not-an-email".to_string();
        field.has_error = true;
        field.clear();
        assert_eq!(field.value, "");
        assert!(!field.has_error);
    }

    #[test]
    fn test_phone_policy_serde_round_trip() {
        let json = serde_json::to_string(&PhonePolicy::FormattedPattern).unwrap();
        assert_eq!(json, "\"formatted_pattern\"");
        let parsed: PhonePolicy = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, PhonePolicy::FormattedPattern);
    }
}
