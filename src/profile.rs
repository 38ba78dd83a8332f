use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Canonical validator profile record. The legacy `profile_image_url`
/// spelling is accepted on deserialization only; every check and message
/// is phrased against `profile`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidatorProfile {
    pub moniker: String,
    pub details: String,
    #[serde(alias = "profile_image_url")]
    pub profile: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    pub contact: Contact,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub website: String,
}

/// One failed check against a profile file. Checks never abort each other;
/// everything that applies is collected, except `InvalidJson` which is the
/// only result for an unparseable file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    #[error("Invalid JSON format: {0}")]
    InvalidJson(String),
    #[error("Filename must be all lowercase: \"{found}\" should be \"{expected}\"")]
    FilenameCase { found: String, expected: String },
    #[error("Missing or invalid {0}")]
    MissingField(&'static str),
    #[error("Invalid {field} field (should be a string)")]
    InvalidFieldType { field: &'static str },
    #[error("{field} should start with \"{prefix}\"")]
    BadPathPrefix {
        field: &'static str,
        prefix: &'static str,
    },
    #[error("Referenced {field} image does not exist: {path}")]
    MissingReferencedFile { field: &'static str, path: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_canonical_record() {
        let raw = r#"{
            "moniker": "node-one",
            "details": "runs on bare metal",
            "profile": "./images/node-one.png",
            "background": "./background/node-one.png",
            "contact": { "email": "ops@example.com", "website": "https://example.com" }
        }"#;
        let p: ValidatorProfile = serde_json::from_str(raw).unwrap();
        assert_eq!(p.moniker, "node-one");
        assert_eq!(p.background.as_deref(), Some("./background/node-one.png"));
    }

    #[test]
    fn accepts_legacy_profile_image_url_alias() {
        let raw = r#"{
            "moniker": "node-two",
            "details": "legacy schema",
            "profile_image_url": "./images/node-two.png",
            "contact": { "email": "ops@example.com", "website": "https://example.com" }
        }"#;
        let p: ValidatorProfile = serde_json::from_str(raw).unwrap();
        assert_eq!(p.profile, "./images/node-two.png");
        assert!(p.background.is_none());
    }

    #[test]
    fn renders_report_messages() {
        assert_eq!(
            CheckError::MissingField("moniker").to_string(),
            "Missing or invalid moniker"
        );
        assert_eq!(
            CheckError::InvalidFieldType { field: "background" }.to_string(),
            "Invalid background field (should be a string)"
        );
        assert_eq!(
            CheckError::BadPathPrefix {
                field: "profile",
                prefix: "./images/"
            }
            .to_string(),
            "profile should start with \"./images/\""
        );
        assert_eq!(
            CheckError::MissingReferencedFile {
                field: "profile",
                path: "./images/x.png".to_string()
            }
            .to_string(),
            "Referenced profile image does not exist: ./images/x.png"
        );
        assert_eq!(
            CheckError::FilenameCase {
                found: "Node.json".to_string(),
                expected: "node.json".to_string()
            }
            .to_string(),
            "Filename must be all lowercase: \"Node.json\" should be \"node.json\""
        );
    }
}
