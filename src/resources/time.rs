use bevy::prelude::*;

/// Counts integrated arcade ticks.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct TickCounter {
    pub ticks: u64,
}

impl TickCounter {
    pub fn advance(&mut self) -> u64 {
        self.ticks += 1;
        self.ticks
    }
}

/// Stops the app once this many ticks have been integrated.
#[derive(Resource, Debug, Clone, Copy)]
pub struct TickLimit {
    pub max_ticks: u64,
}

impl TickLimit {
    pub fn new(max_ticks: u64) -> Self {
        Self { max_ticks }
    }

    pub fn reached(&self, counter: &TickCounter) -> bool {
        counter.ticks >= self.max_ticks
    }
}
