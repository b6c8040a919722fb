//! # Gift Declarations
//!
//! The declaration record and its submission input. Records are created
//! on submission, mutated only by review decisions, and never deleted.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::reference::Reference;

/// A unique identifier for a gift declaration record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GiftId(Uuid);

impl GiftId {
    /// Create a new random declaration identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a declaration identifier from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for GiftId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for GiftId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for GiftId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for GiftId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::from_str(s).map(Self)
    }
}

/// The person or organization the gift came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Giver {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Review lifecycle of a declaration.
///
/// Declarations enter the register as `Pending`; an administrator review
/// moves them to `Approved` or `Returned`. `Submitted` marks records
/// imported from the legacy register that never entered review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GiftStatus {
    Pending,
    Approved,
    Returned,
    Submitted,
}

impl GiftStatus {
    /// Stable string form used in logs and wire payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Returned => "returned",
            Self::Submitted => "submitted",
        }
    }

    /// Whether a review decision may be applied in this state.
    /// Only pending declarations are reviewable.
    pub fn reviewable(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

impl std::fmt::Display for GiftStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An administrator's decision on a pending declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewDecision {
    Approved,
    Returned,
}

impl ReviewDecision {
    /// The status a declaration ends in after this decision.
    pub fn target_status(&self) -> GiftStatus {
        match self {
            Self::Approved => GiftStatus::Approved,
            Self::Returned => GiftStatus::Returned,
        }
    }
}

/// Submission input for a gift declaration, as received from the
/// declaration form. Required: `description`, `value`, `giver.name`,
/// `relationship`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GiftDeclarationInput {
    #[serde(default)]
    pub description: String,
    /// Declared monetary value. Kept optional so a missing field can be
    /// reported by name instead of failing deserialization.
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gift_type: Option<String>,
    #[serde(default)]
    pub giver: Option<Giver>,
    #[serde(default)]
    pub relationship: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub circumstances: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disposition: Option<String>,
    #[serde(default)]
    pub is_prohibited_source: bool,
}

impl GiftDeclarationInput {
    /// Validate the required fields, naming every offending field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut missing: Vec<String> = Vec::new();
        if self.description.trim().is_empty() {
            missing.push("description".into());
        }
        if self.value.is_none() {
            missing.push("value".into());
        }
        match &self.giver {
            None => missing.push("giver.name".into()),
            Some(giver) if giver.name.trim().is_empty() => missing.push("giver.name".into()),
            Some(_) => {}
        }
        if self.relationship.trim().is_empty() {
            missing.push("relationship".into());
        }
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }

        // Present but unusable values.
        if let Some(value) = self.value {
            if !value.is_finite() || value < 0.0 {
                return Err(ValidationError::InvalidField {
                    field: "value".into(),
                    reason: "must be a non-negative amount".into(),
                });
            }
        }
        Ok(())
    }
}

/// A declared gift as held by the record store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GiftDeclaration {
    pub id: GiftId,
    pub reference: Reference,
    pub description: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gift_type: Option<String>,
    pub giver: Giver,
    pub relationship: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub circumstances: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disposition: Option<String>,
    #[serde(default)]
    pub is_prohibited_source: bool,
    /// Identity of the declaring public servant.
    pub declared_by: String,
    /// Agency of the declaring public servant, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agency: Option<String>,
    pub status: GiftStatus,
    pub submitted_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_comments: Option<String>,
}

impl GiftDeclaration {
    /// Build a pending declaration from validated input.
    ///
    /// Callers must run [`GiftDeclarationInput::validate`] first; this
    /// constructor is infallible over validated input and fills the
    /// generated fields (id, reference, status, timestamp).
    pub fn from_input(
        input: GiftDeclarationInput,
        reference: Reference,
        declared_by: String,
        agency: Option<String>,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        let giver = input.giver.unwrap_or(Giver {
            name: String::new(),
            designation: None,
            agency: None,
            address: None,
        });
        Self {
            id: GiftId::new(),
            reference,
            description: input.description,
            value: input.value.unwrap_or(0.0),
            receipt_date: input.receipt_date,
            gift_type: input.gift_type,
            giver,
            relationship: input.relationship,
            circumstances: input.circumstances,
            disposition: input.disposition,
            is_prohibited_source: input.is_prohibited_source,
            declared_by,
            agency,
            status: GiftStatus::Pending,
            submitted_at,
            reviewed_at: None,
            review_comments: None,
        }
    }
}
