use crate::Status;

/// Outcome transforms for single-child nodes.
///
/// Every variant maps all three child outcomes; the `match` in [`apply`]
/// keeps the mapping total, so adding a variant without defining its
/// behavior fails to compile.
///
/// [`apply`]: Decorator::apply
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Decorator {
    /// Swaps success and failure, passes running through.
    Inverter,
    /// Pins any terminal outcome to success, passes running through.
    ForceSuccess,
    /// Pins any terminal outcome to failure, passes running through.
    ForceFailure,
}

impl Decorator {
    pub fn apply(self, child: Status) -> Status {
        match self {
            Decorator::Inverter => child.invert(),
            Decorator::ForceSuccess => match child {
                Status::Running => Status::Running,
                Status::Success | Status::Failure => Status::Success,
            },
            Decorator::ForceFailure => match child {
                Status::Running => Status::Running,
                Status::Success | Status::Failure => Status::Failure,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Decorator;
    use crate::Status;

    const ALL: [Status; 3] = [Status::Success, Status::Running, Status::Failure];

    #[test]
    fn inverter_mapping() {
        assert_eq!(Decorator::Inverter.apply(Status::Success), Status::Failure);
        assert_eq!(Decorator::Inverter.apply(Status::Failure), Status::Success);
        assert_eq!(Decorator::Inverter.apply(Status::Running), Status::Running);
    }

    #[test]
    fn inverter_twice_is_identity_on_terminal_outcomes() {
        for status in [Status::Success, Status::Failure] {
            assert_eq!(
                Decorator::Inverter.apply(Decorator::Inverter.apply(status)),
                status
            );
        }
    }

    #[test]
    fn force_success_pins_terminal_outcomes() {
        assert_eq!(
            Decorator::ForceSuccess.apply(Status::Failure),
            Status::Success
        );
        assert_eq!(
            Decorator::ForceSuccess.apply(Status::Success),
            Status::Success
        );
        assert_eq!(
            Decorator::ForceSuccess.apply(Status::Running),
            Status::Running
        );
    }

    #[test]
    fn force_failure_pins_terminal_outcomes() {
        assert_eq!(
            Decorator::ForceFailure.apply(Status::Success),
            Status::Failure
        );
        assert_eq!(
            Decorator::ForceFailure.apply(Status::Failure),
            Status::Failure
        );
        assert_eq!(
            Decorator::ForceFailure.apply(Status::Running),
            Status::Running
        );
    }

    #[test]
    fn every_decorator_defines_every_input() {
        for decorator in [
            Decorator::Inverter,
            Decorator::ForceSuccess,
            Decorator::ForceFailure,
        ] {
            for status in ALL {
                // The call itself is the assertion: apply is total.
                let _ = decorator.apply(status);
            }
        }
    }
}
