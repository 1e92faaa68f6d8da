/// Outcome of evaluating a node for one tick.
///
/// `Success` and `Failure` are terminal for the tick; `Running` means the
/// subtree made progress but wants to be evaluated again on the next tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    Success,
    Running,
    Failure,
}

impl Status {
    pub fn is_done(self) -> bool {
        !matches!(self, Status::Running)
    }

    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// Swaps `Success` and `Failure`. `Running` is a fixed point.
    pub fn invert(self) -> Self {
        match self {
            Status::Success => Status::Failure,
            Status::Failure => Status::Success,
            Status::Running => Status::Running,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Status;

    #[test]
    fn invert_swaps_terminal_outcomes() {
        assert_eq!(Status::Success.invert(), Status::Failure);
        assert_eq!(Status::Failure.invert(), Status::Success);
    }

    #[test]
    fn invert_keeps_running() {
        assert_eq!(Status::Running.invert(), Status::Running);
        assert_eq!(Status::Running.invert().invert(), Status::Running);
    }

    #[test]
    fn invert_is_an_involution() {
        for status in [Status::Success, Status::Failure] {
            assert_eq!(status.invert().invert(), status);
        }
    }

    #[test]
    fn done_covers_terminal_outcomes() {
        assert!(Status::Success.is_done());
        assert!(Status::Failure.is_done());
        assert!(!Status::Running.is_done());
    }

    #[test]
    fn success_and_failure_predicates() {
        assert!(Status::Success.is_success());
        assert!(!Status::Running.is_success());
        assert!(Status::Failure.is_failure());
        assert!(!Status::Running.is_failure());
    }
}
