//! Account identity, email addresses, and roles.

mod password;

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use password::{PasswordHash, PasswordHashError, PlainPassword};

/// Store-assigned account identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(i32);

impl AccountId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Raw identifier value.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validation errors for [`Email`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmailValidationError {
    /// Address was blank.
    #[error("email must not be empty")]
    Empty,
    /// Address did not have the `local@domain` shape.
    #[error("email must contain exactly one '@' between a local part and a domain")]
    Malformed,
}

/// Normalised email address used as the account login.
///
/// Addresses are trimmed and lower-cased, so lookups are
/// case-insensitive.
///
/// # Examples
/// ```
/// use event_api::domain::Email;
///
/// let email = Email::new("  Admin@Example.COM ").expect("valid email");
/// assert_eq!(email.as_str(), "admin@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Validate and normalise an address.
    ///
    /// # Errors
    /// Returns [`EmailValidationError`] when the address is blank or does
    /// not contain exactly one `@` with text on both sides.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, EmailValidationError> {
        let normalised = raw.as_ref().trim().to_lowercase();
        if normalised.is_empty() {
            return Err(EmailValidationError::Empty);
        }
        let well_formed = normalised
            .split_once('@')
            .is_some_and(|(local, domain)| {
                !local.is_empty() && !domain.is_empty() && !domain.contains('@')
            });
        if !well_formed {
            return Err(EmailValidationError::Malformed);
        }
        Ok(Self(normalised))
    }

    /// Borrow the normalised address.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Email {
    type Error = EmailValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

/// Role granted to an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountRole {
    /// Regular member.
    User,
    /// Administrator.
    Admin,
}

impl AccountRole {
    /// Storage token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Admin => "ADMIN",
        }
    }
}

/// Error returned when parsing an unknown role token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown account role: {0}")]
pub struct UnknownAccountRole(pub String);

impl FromStr for AccountRole {
    type Err = UnknownAccountRole;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "USER" => Ok(Self::User),
            "ADMIN" => Ok(Self::Admin),
            other => Err(UnknownAccountRole(other.to_owned())),
        }
    }
}

/// An account that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    /// Login address.
    pub email: Email,
    /// Salted password hash.
    pub password: PasswordHash,
    /// Granted roles.
    pub roles: HashSet<AccountRole>,
}

/// A stored account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    id: AccountId,
    email: Email,
    password: PasswordHash,
    roles: HashSet<AccountRole>,
}

impl Account {
    /// Attach the identifier assigned by the store.
    #[must_use]
    pub fn from_new(id: AccountId, account: NewAccount) -> Self {
        let NewAccount {
            email,
            password,
            roles,
        } = account;
        Self {
            id,
            email,
            password,
            roles,
        }
    }

    /// Store-assigned identifier.
    #[must_use]
    pub fn id(&self) -> AccountId {
        self.id
    }

    /// Login address.
    #[must_use]
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Stored password hash.
    #[must_use]
    pub fn password(&self) -> &PasswordHash {
        &self.password
    }

    /// Granted roles.
    #[must_use]
    pub fn roles(&self) -> &HashSet<AccountRole> {
        &self.roles
    }

    /// Whether `role` has been granted.
    #[must_use]
    pub fn has_role(&self, role: AccountRole) -> bool {
        self.roles.contains(&role)
    }
}
