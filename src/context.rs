/// Per-tick view handed to every leaf handler.
///
/// Borrows the host's world for the duration of one tick; the tree itself
/// never stores it. `W` is opaque to the engine.
pub struct Context<'a, W> {
    tick: u64,
    world: &'a mut W,
}

impl<'a, W> Context<'a, W> {
    pub fn new(tick: u64, world: &'a mut W) -> Self {
        Self { tick, world }
    }

    /// Number of the tick currently being evaluated, starting at 1.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn world(&self) -> &W {
        self.world
    }

    pub fn world_mut(&mut self) -> &mut W {
        self.world
    }
}
