use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::{BehaviorNode, Decorator};

/// Fluent construction helper.
///
/// Composites open a frame, `end()` closes the innermost one, and queued
/// decorators wrap the next node pushed (the first queued ends up outermost).
/// Misuse panics: these are wiring mistakes, caught while the tree is being
/// written, never during a tick.
pub struct TreeBuilder<A, C> {
    stack: Vec<BuilderFrame<A, C>>,
    root: Option<BehaviorNode<A, C>>,
    pending_decorators: Vec<Decorator>,
}

struct BuilderFrame<A, C> {
    node_type: CompositeType,
    children: Vec<BehaviorNode<A, C>>,
}

enum CompositeType {
    Sequence,
    Selector,
    ParallelSequence,
}

impl<A, C> TreeBuilder<A, C> {
    pub fn new() -> Self {
        Self {
            stack: Vec::new(),
            root: None,
            pending_decorators: Vec::new(),
        }
    }

    pub fn sequence(mut self) -> Self {
        self.stack.push(BuilderFrame {
            node_type: CompositeType::Sequence,
            children: Vec::new(),
        });
        self
    }

    pub fn selector(mut self) -> Self {
        self.stack.push(BuilderFrame {
            node_type: CompositeType::Selector,
            children: Vec::new(),
        });
        self
    }

    pub fn parallel_sequence(mut self) -> Self {
        self.stack.push(BuilderFrame {
            node_type: CompositeType::ParallelSequence,
            children: Vec::new(),
        });
        self
    }

    pub fn action(mut self, action: A) -> Self {
        self.push_node(BehaviorNode::Action(action));
        self
    }

    pub fn condition(mut self, condition: C) -> Self {
        self.push_node(BehaviorNode::Condition(condition));
        self
    }

    /// Queues a decorator for the next node produced: the next leaf pushed,
    /// or the composite closed by the next `end()`, whichever comes first.
    /// Queuing several wraps that node in declaration order, first queued
    /// outermost.
    pub fn decorator(mut self, decorator: Decorator) -> Self {
        self.pending_decorators.push(decorator);
        self
    }

    pub fn end(mut self) -> Self {
        let frame = self
            .stack
            .pop()
            .expect("end() called with no open composite");
        let node = match frame.node_type {
            CompositeType::Sequence => BehaviorNode::Sequence(frame.children),
            CompositeType::Selector => BehaviorNode::Selector(frame.children),
            CompositeType::ParallelSequence => BehaviorNode::ParallelSequence(frame.children),
        };

        let node = self.wrap_with_pending_decorators(node);
        if let Some(parent) = self.stack.last_mut() {
            parent.children.push(node);
        } else {
            self.set_root(node);
        }
        self
    }

    pub fn build(mut self) -> BehaviorNode<A, C> {
        if !self.stack.is_empty() {
            panic!("build() with unclosed composites: {}", self.stack.len());
        }
        if !self.pending_decorators.is_empty() {
            panic!(
                "build() with dangling decorators: {}",
                self.pending_decorators.len()
            );
        }
        self.root.take().expect("build() requires at least one node")
    }

    fn push_node(&mut self, node: BehaviorNode<A, C>) {
        let node = self.wrap_with_pending_decorators(node);
        if let Some(frame) = self.stack.last_mut() {
            frame.children.push(node);
        } else {
            self.set_root(node);
        }
    }

    fn wrap_with_pending_decorators(&mut self, mut node: BehaviorNode<A, C>) -> BehaviorNode<A, C> {
        while let Some(decorator) = self.pending_decorators.pop() {
            node = BehaviorNode::Decorator {
                decorator,
                child: Box::new(node),
            };
        }
        node
    }

    fn set_root(&mut self, node: BehaviorNode<A, C>) {
        if self.root.is_some() {
            panic!("multiple root nodes built without enclosing composite");
        }
        self.root = Some(node);
    }
}

impl<A, C> Default for TreeBuilder<A, C> {
    fn default() -> Self {
        Self::new()
    }
}
