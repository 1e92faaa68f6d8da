//! Behavior tree engine for tick-driven agents.
//!
//! Trees are closed [`BehaviorNode`] values evaluated once per host tick;
//! leaves delegate to host handlers over an opaque world, and composites are
//! memoryless: every tick re-scans from the first child.

#![no_std]
extern crate alloc;

pub mod builder;
pub mod config;
pub mod context;
pub mod decorator;
pub mod error;
pub mod leaf;
pub mod node;
pub mod observer;
pub mod preset;
pub mod status;
pub mod tick;
pub mod tree;

pub use builder::TreeBuilder;
pub use config::TreeConfig;
pub use context::Context;
pub use decorator::Decorator;
pub use error::TreeError;
pub use leaf::{ActionHandler, ConditionHandler};
pub use node::BehaviorNode;
pub use observer::{NoOpObserver, Observer, ObserverEvent, RecordingObserver};
pub use status::Status;
pub use tree::BehaviorTree;
