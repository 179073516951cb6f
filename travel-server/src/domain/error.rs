//! Domain error types.

use super::LegKind;

/// Domain-level errors for leg validation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    /// A field was supplied that the leg kind does not carry
    /// (e.g. a departure time on a hotel stay).
    #[error("{kind} leg cannot carry {field}")]
    UnexpectedField {
        kind: LegKind,
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DomainError::UnexpectedField {
            kind: LegKind::Hotel,
            field: "depart",
        };
        assert_eq!(err.to_string(), "Hotel leg cannot carry depart");

        let err = DomainError::UnexpectedField {
            kind: LegKind::Flight,
            field: "name",
        };
        assert_eq!(err.to_string(), "Flight leg cannot carry name");
    }
}
