//! Form configuration
//!
//! Landing pages disagree on the details: minimum name length, whether the
//! phone is required, how it is validated, and how long success feedback
//! stays visible. All of that lives here instead of being hardcoded, with
//! presets for the campaigns this crate grew out of.

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::form::FieldSpec;
pub use crate::form::PhonePolicy;

/// Per-form validation and submission settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Submission endpoint URL
    pub endpoint: Option<String>,
    /// Minimum trimmed name length
    pub name_min_len: usize,
    /// Maximum trimmed name length, unset means unbounded
    pub name_max_len: Option<usize>,
    /// Restrict names to letters and whitespace
    pub name_letters_only: bool,
    /// Whether an empty phone fails validation
    pub phone_required: bool,
    /// How phone values are validated
    pub phone_policy: PhonePolicy,
    /// Digit count up to which the phone mask shows `(DD) rest` (6 or 7)
    pub area_split: usize,
    /// Whether the form has a message field at all
    pub has_message: bool,
    /// Whether an empty message fails validation
    pub message_required: bool,
    /// Minimum trimmed message length
    pub message_min_len: usize,
    /// Maximum trimmed message length
    pub message_max_len: usize,
    /// Seconds before success feedback auto-hides, unset means it stays
    /// until the next action
    pub success_feedback_secs: Option<u64>,
    /// Seconds before an in-flight submission is abandoned as failed
    pub submit_timeout_secs: u64,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            name_min_len: 3,
            name_max_len: None,
            name_letters_only: false,
            phone_required: false,
            phone_policy: PhonePolicy::DigitCount,
            area_split: 7,
            has_message: false,
            message_required: false,
            message_min_len: 10,
            message_max_len: 500,
            success_feedback_secs: Some(5),
            submit_timeout_secs: 30,
        }
    }
}

impl FormConfig {
    /// E-book download form: name and email only, phone optional
    pub fn ebook_download() -> Self {
        Self {
            name_max_len: Some(100),
            ..Default::default()
        }
    }

    /// Local service contact form: phone and a longer message are required,
    /// success feedback stays visible
    pub fn local_service() -> Self {
        Self {
            phone_required: true,
            area_split: 6,
            has_message: true,
            message_required: true,
            success_feedback_secs: None,
            ..Default::default()
        }
    }

    /// Course enrollment form: phone required and validated against the
    /// fully punctuated mask, message optional
    pub fn course_enrollment() -> Self {
        Self {
            phone_required: true,
            phone_policy: PhonePolicy::FormattedPattern,
            has_message: true,
            ..Default::default()
        }
    }

    /// Writer contact form: short letters-only names allowed, phone and
    /// message required
    pub fn writer_contact() -> Self {
        Self {
            name_min_len: 2,
            name_max_len: Some(50),
            name_letters_only: true,
            phone_required: true,
            area_split: 6,
            has_message: true,
            message_required: true,
            ..Default::default()
        }
    }

    /// Look up a preset by name
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "ebook" | "ebook-download" => Some(Self::ebook_download()),
            "local-service" => Some(Self::local_service()),
            "course" | "course-enrollment" => Some(Self::course_enrollment()),
            "writer" | "writer-contact" => Some(Self::writer_contact()),
            _ => None,
        }
    }

    /// The field specs this config declares, in validation order
    pub fn field_specs(&self) -> Vec<FieldSpec> {
        let mut specs = vec![
            FieldSpec::name(
                "name",
                self.name_min_len,
                self.name_max_len,
                self.name_letters_only,
            ),
            FieldSpec::email("email"),
            FieldSpec::phone("phone", self.phone_required, self.phone_policy),
        ];
        if self.has_message {
            specs.push(FieldSpec::message(
                "message",
                self.message_required,
                self.message_min_len,
                self.message_max_len,
            ));
        }
        specs
    }

    /// How long success feedback stays on screen
    pub fn success_feedback(&self) -> Option<Duration> {
        self.success_feedback_secs.map(Duration::from_secs)
    }

    /// Submission timeout
    pub fn submit_timeout(&self) -> Duration {
        Duration::from_secs(self.submit_timeout_secs)
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "leadform", "lead-form")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: FormConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FieldKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = FormConfig::default();
        assert_eq!(config.name_min_len, 3);
        assert!(config.name_max_len.is_none());
        assert!(!config.phone_required);
        assert_eq!(config.phone_policy, PhonePolicy::DigitCount);
        assert_eq!(config.area_split, 7);
        assert!(!config.has_message);
        assert_eq!(config.success_feedback_secs, Some(5));
    }

    #[test]
    fn test_field_specs_order_is_fixed() {
        let config = FormConfig::local_service();
        let kinds: Vec<FieldKind> = config.field_specs().iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                FieldKind::Name,
                FieldKind::Email,
                FieldKind::Phone,
                FieldKind::Message
            ]
        );
    }

    #[test]
    fn test_field_specs_without_message() {
        let config = FormConfig::ebook_download();
        let specs = config.field_specs();
        assert_eq!(specs.len(), 3);
        assert!(specs.iter().all(|s| s.kind != FieldKind::Message));
    }

    #[test]
    fn test_presets_resolve_by_name() {
        assert!(FormConfig::preset("ebook").is_some());
        assert!(FormConfig::preset("local-service").is_some());
        assert!(FormConfig::preset("course").is_some());
        assert!(FormConfig::preset("writer").is_some());
        assert!(FormConfig::preset("unknown").is_none());
    }

    #[test]
    fn test_local_service_sticky_feedback() {
        let config = FormConfig::local_service();
        assert!(config.success_feedback().is_none());
        assert!(config.phone_required);
        assert!(config.message_required);
    }

    #[test]
    fn test_writer_contact_rules() {
        let config = FormConfig::writer_contact();
        assert_eq!(config.name_min_len, 2);
        assert_eq!(config.name_max_len, Some(50));
        assert!(config.name_letters_only);
    }

    #[test]
    fn test_course_enrollment_phone_pattern() {
        let config = FormConfig::course_enrollment();
        assert_eq!(config.phone_policy, PhonePolicy::FormattedPattern);
        assert!(config.has_message);
        assert!(!config.message_required);
    }

    #[test]
    fn test_serialization_round_trip() {
        let config = FormConfig {
            endpoint: Some("https://api.example.com/leads".to_string()),
            ..FormConfig::writer_contact()
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: FormConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.endpoint, config.endpoint);
        assert_eq!(parsed.name_min_len, 2);
        assert!(parsed.name_letters_only);
        assert_eq!(parsed.area_split, 6);
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let json = "{}";
        let parsed: FormConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.name_min_len, 3);
        assert_eq!(parsed.submit_timeout_secs, 30);
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"name_min_len": 2, "unknown_field": "value"}"#;
        let parsed: FormConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.name_min_len, 2);
    }

    #[test]
    fn test_config_path_returns_option() {
        // Just test that the function doesn't panic
        let _path = FormConfig::config_path();
    }
}
