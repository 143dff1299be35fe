use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Nimba SMS service identifier, used as the basic-auth username.
///
/// Invariant: non-empty after trimming.
pub struct AccountSid(String);

impl AccountSid {
    /// Field name reported in validation errors.
    pub const FIELD: &'static str = "account_sid";

    /// Create a validated [`AccountSid`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Nimba SMS access token, used as the basic-auth password.
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
pub struct AccessToken(String);

impl AccessToken {
    /// Field name reported in validation errors.
    pub const FIELD: &'static str = "access_token";

    /// Create a validated [`AccessToken`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the token as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Immutable (account sid, access token) pair carried by every request.
pub struct Credentials {
    account_sid: AccountSid,
    access_token: AccessToken,
}

impl Credentials {
    /// Create validated [`Credentials`]; either half being empty is an error.
    pub fn new(
        account_sid: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            account_sid: AccountSid::new(account_sid)?,
            access_token: AccessToken::new(access_token)?,
        })
    }

    /// Borrow the account sid.
    pub fn account_sid(&self) -> &AccountSid {
        &self.account_sid
    }

    /// Borrow the access token.
    pub fn access_token(&self) -> &AccessToken {
        &self.access_token
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Validated `limit`/`offset` pair for listing endpoints.
///
/// Invariant: `limit > 0` and `offset >= 0`.
pub struct PageQuery {
    limit: i64,
    offset: i64,
}

impl PageQuery {
    /// Page size used when the caller does not specify one.
    pub const DEFAULT_LIMIT: i64 = 20;

    /// Create a validated [`PageQuery`].
    pub fn new(limit: i64, offset: i64) -> Result<Self, ValidationError> {
        if limit <= 0 {
            return Err(ValidationError::NonPositiveLimit { actual: limit });
        }
        if offset < 0 {
            return Err(ValidationError::NegativeOffset { actual: offset });
        }
        Ok(Self { limit, offset })
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            limit: Self::DEFAULT_LIMIT,
            offset: 0,
        }
    }
}
