//! Mutation outcome type
//!
//! Handlers never return an error to their caller. A failed create, update or delete
//! ends as a [`MutationOutcome`] after the user has been notified.

use sf_core::error::{SfError, ValidationErrors};

/// Failure classes the user is told apart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    NotFound,
    /// Already exists; edit instead of recreating
    Conflict,
    Server,
    Other,
}

impl FailureKind {
    /// Classify by status. `conflict_marker` additionally turns a non-5xx response
    /// whose `message` contains it into a conflict.
    pub fn classify(err: &SfError, conflict_marker: Option<&str>) -> Self {
        if let SfError::Server { .. } = err {
            return Self::Server;
        }

        let marked = match (conflict_marker, err.server_message()) {
            (Some(marker), Some(message)) => message.contains(marker),
            _ => false,
        };
        if marked {
            return Self::Conflict;
        }

        match err {
            SfError::NotFound { .. } => Self::NotFound,
            SfError::Conflict { .. } => Self::Conflict,
            SfError::Server { .. } => Self::Server,
            _ => Self::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutcome {
    Completed,
    /// Rejected before sending
    Invalid(ValidationErrors),
    Failed { kind: FailureKind, message: String },
}

impl MutationOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Self::Failed { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_by_status() {
        assert_eq!(
            FailureKind::classify(&SfError::from_status(404, None), None),
            FailureKind::NotFound
        );
        assert_eq!(
            FailureKind::classify(&SfError::from_status(409, None), None),
            FailureKind::Conflict
        );
        assert_eq!(
            FailureKind::classify(&SfError::from_status(502, None), None),
            FailureKind::Server
        );
        assert_eq!(
            FailureKind::classify(&SfError::from_status(400, None), None),
            FailureKind::Other
        );
        assert_eq!(
            FailureKind::classify(&SfError::Transport("refused".into()), None),
            FailureKind::Other
        );
    }

    #[test]
    fn test_conflict_marker_in_message() {
        let err = SfError::from_status(400, Some("Détail déjà créé".into()));
        assert_eq!(
            FailureKind::classify(&err, Some("déjà créé")),
            FailureKind::Conflict
        );
        assert_eq!(FailureKind::classify(&err, None), FailureKind::Other);

        let err = SfError::from_status(500, Some("Détail déjà créé".into()));
        assert_eq!(
            FailureKind::classify(&err, Some("déjà créé")),
            FailureKind::Server
        );
    }
}
