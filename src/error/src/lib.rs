//! Central error taxonomy for the arena.
//!
//! Every fallible operation in the game crates reports through [`GameError`];
//! the binary decides what to show the player via [`handle_error`].

use thiserror::Error;

/// Errors that the game core can signal to its caller.
#[derive(Debug, Error)]
pub enum GameError {
    /// Enemy selection was attempted against an empty pool. Setup-time
    /// condition: the data is missing, not merely still loading.
    #[error("no enemies available in the pool")]
    EmptyEnemyPool,

    /// A turn was requested on an engagement that already resolved.
    /// Indicates a state-machine bug in the caller.
    #[error("engagement is already resolved")]
    EngagementResolved,

    /// All allocation points are spent.
    #[error("stat allocation budget of {budget} points is exhausted")]
    AllocationExhausted { budget: u32 },

    /// Refund requested for an attribute with no spent points.
    #[error("no points allocated to {attribute}")]
    NothingAllocated { attribute: String },

    /// IO error while loading a catalog file.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Malformed catalog document.
    #[error("catalog parse error: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Map an error to the user-facing message the app shows for it.
pub fn handle_error(error: &GameError) -> String {
    match error {
        GameError::EmptyEnemyPool => "Failed to fetch enemies from server".to_string(),
        GameError::AllocationExhausted { .. } => "Total points cannot exceed 10!".to_string(),
        GameError::NothingAllocated { .. } => {
            "No points spent — you cannot decrease stats yet!".to_string()
        }
        GameError::IoError(e) => match e.kind() {
            std::io::ErrorKind::NotFound => "Catalog file not found".to_string(),
            std::io::ErrorKind::PermissionDenied => "No permission to read catalog".to_string(),
            _ => format!("IO error: {}", e),
        },
        _ => error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exhausted_allocation_maps_to_alert_text() {
        let err = GameError::AllocationExhausted { budget: 10 };
        assert_eq!(handle_error(&err), "Total points cannot exceed 10!");
    }

    #[test]
    fn io_not_found_has_friendly_message() {
        let err = GameError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        assert_eq!(handle_error(&err), "Catalog file not found");
    }
}
