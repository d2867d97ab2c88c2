//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// The kind of resource a `NotFound` error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    /// A community member.
    Member,
    /// An income record.
    Income,
    /// An expense record.
    Expense,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Member => write!(f, "Member"),
            Self::Income => write!(f, "Income record"),
            Self::Expense => write!(f, "Expense record"),
        }
    }
}

/// Application error types.
///
/// A closed set of failure kinds; each carries enough structure to pick a
/// response code without string-matching messages.
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing, malformed, invalid, expired, or wrong-type credential.
    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    /// Authenticated caller lacks tenant or ownership rights over the target.
    #[error("You do not have permission to access this resource")]
    Forbidden,

    /// Target resource does not exist. Checked before tenancy/ownership.
    #[error("{0} not found")]
    NotFound(ResourceKind),

    /// Malformed input (pagination bounds, amount, reason, date, percentage).
    #[error("Validation error: {0}")]
    Validation(String),

    /// The storage layer raised an error; fatal for the current request.
    #[error("Database error: {0}")]
    Database(String),

    /// Internal server error outside the storage layer.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Unauthorized(_) => 401,
            Self::Forbidden => 403,
            Self::NotFound(_) => 404,
            Self::Validation(_) => 400,
            Self::Database(_) | Self::Internal(_) => 500,
        }
    }

    /// Returns the stable error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",
            Self::NotFound(ResourceKind::Member) => "MEMBER_NOT_FOUND",
            Self::NotFound(ResourceKind::Income) => "INCOME_NOT_FOUND",
            Self::NotFound(ResourceKind::Expense) => "EXPENSE_NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(AppError::Unauthorized(String::new()).status_code(), 401);
        assert_eq!(AppError::Forbidden.status_code(), 403);
        assert_eq!(AppError::NotFound(ResourceKind::Member).status_code(), 404);
        assert_eq!(AppError::NotFound(ResourceKind::Income).status_code(), 404);
        assert_eq!(AppError::NotFound(ResourceKind::Expense).status_code(), 404);
        assert_eq!(AppError::Validation(String::new()).status_code(), 400);
        assert_eq!(AppError::Database(String::new()).status_code(), 500);
        assert_eq!(AppError::Internal(String::new()).status_code(), 500);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AppError::Unauthorized(String::new()).error_code(),
            "UNAUTHORIZED"
        );
        assert_eq!(AppError::Forbidden.error_code(), "FORBIDDEN");
        assert_eq!(
            AppError::NotFound(ResourceKind::Member).error_code(),
            "MEMBER_NOT_FOUND"
        );
        assert_eq!(
            AppError::NotFound(ResourceKind::Income).error_code(),
            "INCOME_NOT_FOUND"
        );
        assert_eq!(
            AppError::NotFound(ResourceKind::Expense).error_code(),
            "EXPENSE_NOT_FOUND"
        );
        assert_eq!(
            AppError::Validation(String::new()).error_code(),
            "VALIDATION_ERROR"
        );
        assert_eq!(
            AppError::Database(String::new()).error_code(),
            "DATABASE_ERROR"
        );
        assert_eq!(
            AppError::Internal(String::new()).error_code(),
            "INTERNAL_ERROR"
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            AppError::Unauthorized("bad token".into()).to_string(),
            "Authentication failed: bad token"
        );
        assert_eq!(
            AppError::NotFound(ResourceKind::Income).to_string(),
            "Income record not found"
        );
        assert_eq!(
            AppError::NotFound(ResourceKind::Member).to_string(),
            "Member not found"
        );
        assert_eq!(
            AppError::Validation("amount must be greater than zero".into()).to_string(),
            "Validation error: amount must be greater than zero"
        );
    }
}
