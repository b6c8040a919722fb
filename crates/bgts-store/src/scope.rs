//! # Caller Scope
//!
//! Visibility rules for declaration listings. Administrators see the
//! whole register; everyone else sees only records owned by their
//! identity or agency.

use bgts_core::GiftDeclaration;

/// What portion of the register a caller may see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallerScope {
    /// Administrator: the whole register.
    Unrestricted,
    /// Records declared under the given agency.
    Agency(String),
    /// Records declared by the given user.
    Owner(String),
}

impl CallerScope {
    /// Whether the caller may see this declaration.
    pub fn permits(&self, declaration: &GiftDeclaration) -> bool {
        match self {
            Self::Unrestricted => true,
            Self::Agency(agency) => declaration.agency.as_deref() == Some(agency.as_str()),
            Self::Owner(user_id) => declaration.declared_by == *user_id,
        }
    }
}
