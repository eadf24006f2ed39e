use std::mem;

use crate::hasher::Hasher;

/// A digest accumulator that is either still consuming bytes or already
/// reduced to its hex-encoded result.
pub(crate) enum Accumulator {
    Live(Box<dyn Hasher>),
    Finalized(String),
}

impl Accumulator {
    pub(crate) fn new(hasher: Box<dyn Hasher>) -> Self { Accumulator::Live(hasher) }

    /// Finalized accumulators ignore further input.
    pub(crate) fn update(&mut self, data: &[u8]) {
        if let Accumulator::Live(hasher) = self {
            hasher.update(data);
        }
    }

    pub(crate) fn is_finalized(&self) -> bool { matches!(self, Accumulator::Finalized(_)) }

    pub(crate) fn hex(&self) -> Option<&str> {
        match self {
            Accumulator::Finalized(hex) => Some(hex.as_str()),
            Accumulator::Live(_) => None,
        }
    }

    /// Finalize on first call; later calls return the cached value.
    pub(crate) fn finalize(&mut self) -> &str {
        if matches!(self, Accumulator::Live(_)) {
            let live = mem::replace(self, Accumulator::Finalized(String::new()));
            if let Accumulator::Live(hasher) = live {
                *self = Accumulator::Finalized(hex::encode(hasher.finalize()));
            }
        }
        match self {
            Accumulator::Finalized(hex) => hex.as_str(),
            Accumulator::Live(_) => unreachable!("accumulator finalized above"),
        }
    }
}
