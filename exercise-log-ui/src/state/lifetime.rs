//! View lifetime token
//!
//! A page creates one [`ViewLifetime`] when it mounts and ends it in
//! `on_cleanup`. Async work checks the token before touching page state, so
//! a response that lands after the page is gone is dropped.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Debug)]
pub struct ViewLifetime {
    alive: Rc<Cell<bool>>,
}

impl ViewLifetime {
    pub fn new() -> Self {
        Self {
            alive: Rc::new(Cell::new(true)),
        }
    }

    /// Mark the view as gone; visible to every clone
    pub fn end(&self) {
        self.alive.set(false);
    }

    pub fn is_alive(&self) -> bool {
        self.alive.get()
    }
}

impl Default for ViewLifetime {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_is_shared_between_clones() {
        let lifetime = ViewLifetime::new();
        let held_by_task = lifetime.clone();
        assert!(held_by_task.is_alive());

        lifetime.end();
        assert!(!held_by_task.is_alive());
    }
}
