//! Error taxonomy
//!
//! Everything here is an integrator mistake detectable when a pull view
//! is wired to a container. Steady-state operation has no recoverable
//! errors: no-op notifications, redundant attach/detach calls, and
//! operations on empty slots are ignored by contract.

use thiserror::Error;

/// Errors raised while attaching pull views
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PullError {
    /// A pull view built for one edge was offered to the other edge's slot
    #[error("pull view kind mismatch: slot expects a {expected}, got a {found}")]
    KindMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mismatch_message_names_both_kinds() {
        let err = PullError::KindMismatch {
            expected: "header",
            found: "footer",
        };
        assert_eq!(
            err.to_string(),
            "pull view kind mismatch: slot expects a header, got a footer"
        );
    }
}
