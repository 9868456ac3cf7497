//! Tagged per-branch results for the concurrent fan-out.

/// Outcome of a single provider branch after the joint await.
///
/// Makes per-branch failure isolation explicit: the merge inspects each
/// branch's tag instead of letting one failure abort the join.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The branch produced data
    Fetched(T),
    /// The branch failed or timed out; the message is report-ready
    Failed(String),
}

impl<T> Outcome<T> {
    /// Returns true if the branch produced data
    #[must_use]
    pub const fn is_fetched(&self) -> bool {
        matches!(self, Self::Fetched(_))
    }

    /// Split into the data and error halves a report is built from
    #[must_use]
    pub fn into_parts(self) -> (Option<T>, Option<String>) {
        match self {
            Self::Fetched(value) => (Some(value), None),
            Self::Failed(message) => (None, Some(message)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_parts() {
        let (value, error) = Outcome::Fetched(7).into_parts();
        assert_eq!(value, Some(7));
        assert!(error.is_none());

        let (value, error) = Outcome::<u32>::Failed("boom".into()).into_parts();
        assert!(value.is_none());
        assert_eq!(error.as_deref(), Some("boom"));
    }
}
