use rand::{Rng, RngCore};

/// The source of every random choice made during a game.
///
/// Implemented for all [`RngCore`]s, so a seeded [`StdRng`](rand::rngs::StdRng)
/// can be handed to a [`Game`](crate::Game) directly.
pub trait Randomness {
    /// Picks an index in `0..len` uniformly at random. `len` is never zero.
    fn index(&mut self, len: usize) -> usize;
}

impl<R: RngCore> Randomness for R {
    fn index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

/// Replays a fixed list of choices, then keeps choosing index 0.
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub(crate) struct Scripted {
    choices: std::collections::VecDeque<usize>,
}

#[cfg(test)]
impl Scripted {
    pub(crate) fn new(choices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            choices: choices.into_iter().collect(),
        }
    }
}

#[cfg(test)]
impl Randomness for Scripted {
    fn index(&mut self, len: usize) -> usize {
        let choice = self.choices.pop_front().unwrap_or(0);
        assert!(choice < len, "scripted choice {} out of 0..{}", choice, len);
        choice
    }
}
