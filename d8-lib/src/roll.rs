use crate::dnd;
use crate::evaluator::Evaluator;
use crate::kob;

/// Keep the parsed roll intent of either system
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Dnd(dnd::Roll),
    Explosion(kob::Roll),
}

impl Kind {
    /// Perform the roll, drawing every die from `source`
    pub fn perform<S: Source>(&self, source: &mut S) -> String {
        Evaluator::eval(self, source)
    }
}

/// Interface for rolling dices
pub trait Source {
    fn throw(&mut self, sides: u64) -> u64;
}
