//! Error taxonomy shared by the store and action layers.

use thiserror::Error;

/// Failure reported by a store implementation.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Unique constraint violated: {0}")]
    Conflict(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
                Some("23505") => StoreError::Conflict(db_err.message().to_string()),
                _ => StoreError::Database(db_err.to_string()),
            },
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                StoreError::Unavailable(err.to_string())
            }
            other => StoreError::Database(other.to_string()),
        }
    }
}

/// Failure of a domain action, rendered to callers as a generic message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The entity addressed by id or key does not exist.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Admin credential mismatch. Deliberately carries no detail.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// A partial update was requested without any fields.
    #[error("No fields to update")]
    NothingToUpdate,

    /// Query or connection failure; the message names the action that failed.
    #[error("{0}")]
    Storage(&'static str),
}

impl ActionError {
    /// Maps a store failure to a generic action failure and logs the cause.
    pub fn storage(message: &'static str) -> impl FnOnce(StoreError) -> ActionError {
        move |err| {
            tracing::error!(error = %err, "{}", message);
            ActionError::Storage(message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_error_messages_are_generic() {
        assert_eq!(ActionError::NotFound("Order").to_string(), "Order not found");
        assert_eq!(
            ActionError::InvalidCredentials.to_string(),
            "Invalid credentials"
        );
        assert_eq!(
            ActionError::NothingToUpdate.to_string(),
            "No fields to update"
        );
        assert_eq!(
            ActionError::Storage("Failed to create order").to_string(),
            "Failed to create order"
        );
    }

    #[test]
    fn test_storage_mapper_hides_cause() {
        let mapped = ActionError::storage("Failed to get order")(StoreError::Database(
            "relation \"orders\" does not exist".to_string(),
        ));
        assert_eq!(mapped, ActionError::Storage("Failed to get order"));
        assert!(!mapped.to_string().contains("relation"));
    }

    #[test]
    fn test_from_sqlx_row_not_found() {
        let err: StoreError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, StoreError::Database(_)));
    }

    #[test]
    fn test_from_sqlx_pool_timeout() {
        let err: StoreError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, StoreError::Unavailable(_)));
    }
}
