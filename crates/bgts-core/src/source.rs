//! # Prohibited-Source Classifier
//!
//! Maps a declared relationship-to-giver category to a compliance verdict
//! with the rule citation backing it. One canonical table — the
//! declaration form, the checker modal, and the API all evaluate the
//! same rulings.
//!
//! Lookup is exact and case-sensitive. Any category not in the table
//! resolves to *review required*; unknown input is never silently
//! classified as allowed or prohibited.

use serde::{Deserialize, Serialize};

/// Compliance verdict for a relationship category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceVerdict {
    /// Accepting a gift from this source is prohibited.
    Prohibited,
    /// Allowed when the relationship, not the position, motivates the gift.
    Allowed,
    /// Prohibited by default with a narrow exception (same-rank colleagues).
    Restricted,
    /// Not covered by the rule table; requires administrator review.
    ReviewRequired,
}

impl SourceVerdict {
    /// Stable string form used in logs and wire payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Prohibited => "prohibited",
            Self::Allowed => "allowed",
            Self::Restricted => "restricted",
            Self::ReviewRequired => "review_required",
        }
    }

    /// Tri-state prohibition flag for the checker UI: `Some(true)` when
    /// acceptance is barred (outright or by default), `Some(false)` when
    /// conditionally allowed, `None` when review is required.
    pub fn is_prohibited(&self) -> Option<bool> {
        match self {
            Self::Prohibited | Self::Restricted => Some(true),
            Self::Allowed => Some(false),
            Self::ReviewRequired => None,
        }
    }
}

impl std::fmt::Display for SourceVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification result: verdict plus the citation text shown to the
/// declarant. Static mapping, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceClassification {
    /// The category that was looked up, echoed back verbatim.
    pub category: String,
    pub verdict: SourceVerdict,
    pub title: &'static str,
    pub description: &'static str,
    pub rule_citation: &'static str,
}

/// A single row of the classification table.
struct Ruling {
    category: &'static str,
    verdict: SourceVerdict,
    title: &'static str,
    description: &'static str,
    rule_citation: &'static str,
}

/// The canonical classification table, drawn from the Gift Rules 2017
/// prohibited-source definitions (Rule 8) and exceptions (Rules 10, 11).
const RULINGS: &[Ruling] = &[
    Ruling {
        category: "seeks-action",
        verdict: SourceVerdict::Prohibited,
        title: "PROHIBITED SOURCE",
        description: "This giver is a prohibited source under Rule 8(a). \
                      You cannot accept gifts from them.",
        rule_citation: "Rule 8(a): Who seeks official action or business from \
                        the public servant's agency.",
    },
    Ruling {
        category: "does-business",
        verdict: SourceVerdict::Prohibited,
        title: "PROHIBITED SOURCE",
        description: "This giver is a prohibited source under Rule 8(b). \
                      You cannot accept gifts from them.",
        rule_citation: "Rule 8(b): Who does business or seeks to do business \
                        with the public servant's agency.",
    },
    Ruling {
        category: "regulated",
        verdict: SourceVerdict::Prohibited,
        title: "PROHIBITED SOURCE",
        description: "This giver is a prohibited source under Rule 8(c). \
                      You cannot accept gifts from them.",
        rule_citation: "Rule 8(c): Who conducts activities regulated by the \
                        public servant's agency.",
    },
    Ruling {
        category: "interests-affected",
        verdict: SourceVerdict::Prohibited,
        title: "PROHIBITED SOURCE",
        description: "This giver is a prohibited source under Rule 8(d). \
                      You cannot accept gifts from them.",
        rule_citation: "Rule 8(d): Who has interests that may be substantially \
                        affected by the performance of the public servant's \
                        official duties.",
    },
    Ruling {
        category: "immediate-relative",
        verdict: SourceVerdict::Allowed,
        title: "ALLOWED (with conditions)",
        description: "Gifts from immediate relatives are allowed if clearly \
                      motivated by the relationship rather than official \
                      position.",
        rule_citation: "Rule 11(b): Gift from an immediate relative when the \
                        circumstances make it clear that it is the relationship \
                        rather than the position which is the motivating factor.",
    },
    Ruling {
        category: "personal-friend",
        verdict: SourceVerdict::Allowed,
        title: "ALLOWED (with conditions)",
        description: "Gifts from personal friends are allowed if clearly \
                      motivated by the friendship rather than official \
                      position.",
        rule_citation: "Rule 11(c): Gift based on a personal friendship when \
                        the circumstances make it clear that it is the \
                        friendship rather than the position which is the \
                        motivating factor.",
    },
    Ruling {
        category: "colleague",
        verdict: SourceVerdict::Restricted,
        title: "RESTRICTED",
        description: "Gifts between public servants are prohibited by default. \
                      Narrow exceptions exist for same-rank colleagues on \
                      customary occasions.",
        rule_citation: "Rule 10: Gifts between public servants of the same \
                        agency are prohibited by default, subject to narrow \
                        exceptions.",
    },
];

/// Fallback ruling for categories outside the table.
const REVIEW_REQUIRED: Ruling = Ruling {
    category: "",
    verdict: SourceVerdict::ReviewRequired,
    title: "REVIEW REQUIRED",
    description: "This relationship requires further review.",
    rule_citation: "Please consult with your Gift Disclosure Administrator.",
};

/// Classify a relationship category against the canonical rule table.
///
/// Total over the string domain: unrecognized categories resolve to
/// review required, never to a silent default verdict.
pub fn classify(category: &str) -> SourceClassification {
    let ruling = RULINGS
        .iter()
        .find(|r| r.category == category)
        .unwrap_or(&REVIEW_REQUIRED);

    SourceClassification {
        category: category.to_string(),
        verdict: ruling.verdict,
        title: ruling.title,
        description: ruling.description,
        rule_citation: ruling.rule_citation,
    }
}
