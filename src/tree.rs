use alloc::collections::BTreeMap;
use alloc::vec;
use alloc::vec::Vec;

use crate::tick::{node_count, tick_node, NodeState};
use crate::{
    ActionHandler, BehaviorNode, ConditionHandler, Context, Observer, Status, TreeConfig,
    TreeError,
};

/// Owns the root node and drives the whole tree once per host tick.
///
/// Construction fixes the topology; after that the only repeated operation is
/// [`tick`]. The host's world is borrowed per call and never stored, so a
/// tree can never exist in a "context missing" state.
///
/// [`tick`]: BehaviorTree::tick
pub struct BehaviorTree<A, C> {
    root: BehaviorNode<A, C>,
    states: Vec<NodeState>,
    labels: BTreeMap<usize, &'static str>,
    tick_count: u64,
}

impl<A, C> BehaviorTree<A, C> {
    pub fn new(root: BehaviorNode<A, C>) -> Self {
        let count = node_count(&root);
        Self {
            root,
            states: vec![NodeState::default(); count],
            labels: BTreeMap::new(),
            tick_count: 0,
        }
    }

    /// Evaluates the tree once and returns the root outcome.
    ///
    /// The root simply mirrors its subtree: outcomes fold upward depth-first,
    /// left to right, per each node's composition rule.
    pub fn tick<W, AH, CH, O>(
        &mut self,
        world: &mut W,
        action_handler: &mut AH,
        condition_handler: &CH,
        observer: &mut O,
    ) -> Status
    where
        AH: ActionHandler<A, W>,
        CH: ConditionHandler<C, W>,
        O: Observer,
    {
        self.tick_count = self.tick_count.saturating_add(1);
        let mut ctx = Context::new(self.tick_count, world);
        tick_node(
            &self.root,
            0,
            &mut self.states,
            &mut ctx,
            action_handler,
            condition_handler,
            observer,
        )
    }

    /// Outcome of the node's most recent evaluation, by pre-order id.
    /// `None` if the node has not been evaluated since construction or the
    /// last [`reset`], or if the id is out of range.
    ///
    /// [`reset`]: BehaviorTree::reset
    pub fn last_status(&self, node_id: usize) -> Option<Status> {
        self.states.get(node_id).and_then(|state| state.last)
    }

    /// Clears every cached outcome and the tick counter.
    pub fn reset(&mut self) {
        for state in &mut self.states {
            state.reset();
        }
        self.tick_count = 0;
    }

    /// Checks structural limits without evaluating anything.
    pub fn validate(&self, config: &TreeConfig) -> Result<(), TreeError> {
        validate_node(&self.root, 1, config)
    }

    /// Attaches an informational label to a node id. Labels are never
    /// consulted by evaluation; they exist for observers and diagnostics.
    pub fn set_label(&mut self, node_id: usize, label: &'static str) {
        self.labels.insert(node_id, label);
    }

    pub fn label(&self, node_id: usize) -> Option<&'static str> {
        self.labels.get(&node_id).copied()
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn node_count(&self) -> usize {
        self.states.len()
    }

    pub fn root(&self) -> &BehaviorNode<A, C> {
        &self.root
    }
}

fn validate_node<A, C>(
    node: &BehaviorNode<A, C>,
    depth: usize,
    config: &TreeConfig,
) -> Result<(), TreeError> {
    if depth > config.max_depth {
        return Err(TreeError::MaxDepthExceeded(depth));
    }
    match node {
        BehaviorNode::Sequence(children)
        | BehaviorNode::Selector(children)
        | BehaviorNode::ParallelSequence(children) => {
            if children.is_empty() {
                return Err(TreeError::EmptyComposite);
            }
            for child in children {
                validate_node(child, depth + 1, config)?;
            }
            Ok(())
        }
        BehaviorNode::Decorator { child, .. } => validate_node(child, depth + 1, config),
        BehaviorNode::Action(_) | BehaviorNode::Condition(_) => Ok(()),
    }
}
