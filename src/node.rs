use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::decorator::Decorator;

/// A node in the behavior tree.
///
/// `A` and `C` are the host's action and condition payloads; the engine never
/// inspects them beyond handing them to the leaf handlers. Children are owned
/// by their parent, so the structure is a strict tree: no node can hang off
/// two parents and dropping the root drops every descendant exactly once.
#[derive(Clone, Debug, PartialEq)]
pub enum BehaviorNode<A, C> {
    /// Evaluates children left to right; stops at the first non-success.
    Sequence(Vec<BehaviorNode<A, C>>),
    /// Evaluates children left to right; stops at the first non-failure.
    Selector(Vec<BehaviorNode<A, C>>),
    /// Evaluates every child each tick, then aggregates.
    ParallelSequence(Vec<BehaviorNode<A, C>>),
    /// Transforms the outcome of exactly one child.
    Decorator {
        decorator: Decorator,
        child: Box<BehaviorNode<A, C>>,
    },
    Action(A),
    Condition(C),
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::vec;

    use super::BehaviorNode;
    use crate::decorator::Decorator;

    #[derive(Clone, Debug, PartialEq)]
    enum Act {
        Advance,
        HoldGround,
    }

    #[derive(Clone, Debug, PartialEq)]
    enum Check {
        EnemyNear,
    }

    #[test]
    fn node_clone_preserves_structure() {
        let tree = BehaviorNode::Selector(vec![
            BehaviorNode::Sequence(vec![
                BehaviorNode::Condition(Check::EnemyNear),
                BehaviorNode::Action(Act::HoldGround),
            ]),
            BehaviorNode::ParallelSequence(vec![
                BehaviorNode::Action(Act::Advance),
                BehaviorNode::Decorator {
                    decorator: Decorator::Inverter,
                    child: Box::new(BehaviorNode::Condition(Check::EnemyNear)),
                },
            ]),
        ]);
        let cloned = tree.clone();
        assert_eq!(tree, cloned);
    }

    #[test]
    fn decorator_owns_exactly_one_child() {
        let node: BehaviorNode<Act, Check> = BehaviorNode::Decorator {
            decorator: Decorator::ForceSuccess,
            child: Box::new(BehaviorNode::Action(Act::Advance)),
        };
        match node {
            BehaviorNode::Decorator { child, .. } => {
                assert!(matches!(*child, BehaviorNode::Action(Act::Advance)));
            }
            _ => panic!("expected decorator"),
        }
    }
}
