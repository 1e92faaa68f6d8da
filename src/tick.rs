use crate::{
    ActionHandler, BehaviorNode, ConditionHandler, Context, Observer, Status,
};

/// Cached evaluation state for one node, addressed by pre-order id.
///
/// The engine is memoryless across ticks: composites always re-scan from
/// their first child, so the only thing worth keeping is the most recent
/// outcome, exposed for diagnostics.
#[derive(Clone, Debug, Default)]
pub struct NodeState {
    pub last: Option<Status>,
}

impl NodeState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Number of nodes in the subtree rooted at `node`, counting `node` itself.
///
/// Nodes are addressed by pre-order index: the root is 0, a node's first
/// child is its own id plus one, and each following sibling starts after the
/// previous sibling's subtree.
pub fn node_count<A, C>(node: &BehaviorNode<A, C>) -> usize {
    match node {
        BehaviorNode::Sequence(children)
        | BehaviorNode::Selector(children)
        | BehaviorNode::ParallelSequence(children) => {
            1 + children.iter().map(node_count).sum::<usize>()
        }
        BehaviorNode::Decorator { child, .. } => 1 + node_count(child),
        BehaviorNode::Action(_) | BehaviorNode::Condition(_) => 1,
    }
}

/// Evaluates `node` once, caching its outcome in `states[node_id]` and
/// reporting it to the observer. Never mutates tree structure and always
/// terminates with one of the three outcomes.
pub fn tick_node<A, C, W, AH, CH, O>(
    node: &BehaviorNode<A, C>,
    node_id: usize,
    states: &mut [NodeState],
    ctx: &mut Context<'_, W>,
    action_handler: &mut AH,
    condition_handler: &CH,
    observer: &mut O,
) -> Status
where
    AH: ActionHandler<A, W>,
    CH: ConditionHandler<C, W>,
    O: Observer,
{
    observer.on_enter(node_id);

    let status = match node {
        BehaviorNode::Sequence(children) => {
            let mut result = Status::Success;
            let mut child_id = node_id + 1;

            for child in children {
                let child_status = tick_node(
                    child,
                    child_id,
                    states,
                    ctx,
                    action_handler,
                    condition_handler,
                    observer,
                );
                if child_status != Status::Success {
                    result = child_status;
                    break;
                }
                child_id += node_count(child);
            }

            result
        }
        BehaviorNode::Selector(children) => {
            let mut result = Status::Failure;
            let mut child_id = node_id + 1;

            for child in children {
                let child_status = tick_node(
                    child,
                    child_id,
                    states,
                    ctx,
                    action_handler,
                    condition_handler,
                    observer,
                );
                if child_status != Status::Failure {
                    result = child_status;
                    break;
                }
                child_id += node_count(child);
            }

            result
        }
        BehaviorNode::ParallelSequence(children) => {
            // Every child runs every tick; aggregation happens afterwards so
            // a failing sibling never starves the ones after it.
            let mut any_failure = false;
            let mut any_running = false;
            let mut child_id = node_id + 1;

            for child in children {
                match tick_node(
                    child,
                    child_id,
                    states,
                    ctx,
                    action_handler,
                    condition_handler,
                    observer,
                ) {
                    Status::Failure => any_failure = true,
                    Status::Running => any_running = true,
                    Status::Success => {}
                }
                child_id += node_count(child);
            }

            if any_failure {
                Status::Failure
            } else if any_running {
                Status::Running
            } else {
                Status::Success
            }
        }
        BehaviorNode::Decorator { decorator, child } => decorator.apply(tick_node(
            child,
            node_id + 1,
            states,
            ctx,
            action_handler,
            condition_handler,
            observer,
        )),
        BehaviorNode::Action(action) => action_handler.execute(action, ctx),
        BehaviorNode::Condition(condition) => {
            if condition_handler.check(condition, ctx) {
                Status::Success
            } else {
                Status::Failure
            }
        }
    };

    states[node_id].last = Some(status);
    observer.on_exit(node_id, status);
    status
}
