//! Entity manager: the observer side of animated textures.
//!
//! The manager does not decide what a finished animation means. It queues the
//! ids it hears about, in arrival order, for game logic to drain on its next
//! update.

use std::collections::VecDeque;

use crate::observer::Observer;

#[derive(Debug, Default)]
pub struct EntityManager {
    finished: VecDeque<String>,
    finished_total: u64,
}

impl EntityManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids reported since the last drain, oldest first.
    pub fn pending(&self) -> impl Iterator<Item = &str> {
        self.finished.iter().map(String::as_str)
    }

    /// Takes every pending id, oldest first.
    pub fn drain_finished(&mut self) -> Vec<String> {
        self.finished.drain(..).collect()
    }

    /// Number of finish events received over the manager's lifetime.
    pub fn finished_count(&self) -> u64 {
        self.finished_total
    }
}

impl Observer<str> for EntityManager {
    fn update(&mut self, id: &str) {
        log::debug!("entity manager: '{id}' finished");
        self.finished.push_back(id.to_owned());
        self.finished_total += 1;
    }
}
