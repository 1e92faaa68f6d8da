use crate::{Context, Status};

/// Executes the host's action payloads. Actions may mutate the world through
/// the context and may report any outcome, including `Running`.
pub trait ActionHandler<A, W> {
    fn execute(&mut self, action: &A, ctx: &mut Context<'_, W>) -> Status;
}

/// Checks the host's condition payloads. Conditions get a shared context, so
/// they cannot touch the world, and their `bool` result means they can never
/// report `Running`.
pub trait ConditionHandler<C, W> {
    fn check(&self, condition: &C, ctx: &Context<'_, W>) -> bool;
}
