//! Ready-made tree shapes over numeric leaf ids.
//!
//! The ids are placeholders the host maps to real actions and conditions in
//! its handlers; the shapes are the part worth reusing.

use alloc::boxed::Box;
use alloc::vec;

use crate::{BehaviorNode, Decorator};

/// Priority combat loop: flee when hurt, strike in range, otherwise close in,
/// and fall back to idling.
///
/// Conditions: 0 = target visible, 1 = target in range, 2 = badly hurt.
/// Actions: 0 = idle, 1 = close in, 2 = strike, 3 = retreat.
pub fn combat_melee() -> BehaviorNode<u32, u32> {
    BehaviorNode::Selector(vec![
        BehaviorNode::Sequence(vec![BehaviorNode::Condition(2), BehaviorNode::Action(3)]),
        BehaviorNode::Sequence(vec![BehaviorNode::Condition(1), BehaviorNode::Action(2)]),
        BehaviorNode::Sequence(vec![BehaviorNode::Condition(0), BehaviorNode::Action(1)]),
        BehaviorNode::Action(0),
    ])
}

/// Post guard: challenge intruders, investigate noise, walk back when away
/// from the post, otherwise stand watch.
///
/// Conditions: 0 = intruder seen, 1 = noise heard, 3 = at post.
/// Actions: 0 = stand watch, 2 = challenge, 3 = investigate, 4 = return to post.
pub fn guard_post() -> BehaviorNode<u32, u32> {
    BehaviorNode::Selector(vec![
        BehaviorNode::Sequence(vec![BehaviorNode::Condition(0), BehaviorNode::Action(2)]),
        BehaviorNode::Sequence(vec![BehaviorNode::Condition(1), BehaviorNode::Action(3)]),
        BehaviorNode::Sequence(vec![
            BehaviorNode::Decorator {
                decorator: Decorator::Inverter,
                child: Box::new(BehaviorNode::Condition(3)),
            },
            BehaviorNode::Action(4),
        ]),
        BehaviorNode::Action(0),
    ])
}

/// Escort duty: keep following the charge while the threat response runs
/// alongside. Both legs are evaluated every tick; a failed leg fails the
/// whole escort.
///
/// Conditions: 4 = threat nearby. Actions: 0 = idle, 5 = follow, 6 = engage.
pub fn escort() -> BehaviorNode<u32, u32> {
    BehaviorNode::ParallelSequence(vec![
        BehaviorNode::Action(5),
        BehaviorNode::Selector(vec![
            BehaviorNode::Sequence(vec![BehaviorNode::Condition(4), BehaviorNode::Action(6)]),
            BehaviorNode::Action(0),
        ]),
    ])
}
