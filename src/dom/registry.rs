//! Bookkeeping for everything the page registers with the browser.
//!
//! Each listener, throttled frame request, frame loop and idle timer is held
//! by a [`Registration`].
//! Dropping it runs the release closure exactly once, so a component that
//! keeps its registrations in effect destructors cannot leak them.

use std::cell::Cell;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resource {
    /// scroll / resize / keydown listeners
    Listener,
    /// one-off frame requests that batch listener work
    Frame,
    /// animation-frame loops and animation timers
    Animation,
}

thread_local! {
    static LISTENERS: Cell<usize> = Cell::new(0);
    static FRAMES: Cell<usize> = Cell::new(0);
    static ANIMATIONS: Cell<usize> = Cell::new(0);
}

fn with_counter<R>(resource: Resource, f: impl FnOnce(&Cell<usize>) -> R) -> R {
    match resource {
        Resource::Listener => LISTENERS.with(f),
        Resource::Frame => FRAMES.with(f),
        Resource::Animation => ANIMATIONS.with(f),
    }
}

/// Number of live registrations of this kind.
pub fn active(resource: Resource) -> usize {
    with_counter(resource, Cell::get)
}

pub struct Registration {
    resource: Resource,
    release: Option<Box<dyn FnOnce()>>,
}

impl Registration {
    pub fn new(resource: Resource, release: impl FnOnce() + 'static) -> Self {
        with_counter(resource, |count| count.set(count.get() + 1));
        Self {
            resource,
            release: Some(Box::new(release)),
        }
    }
}

impl Drop for Registration {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
            with_counter(self.resource, |count| count.set(count.get().saturating_sub(1)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn counts_return_to_zero_after_drop() {
        let released = Rc::new(Cell::new(0));
        let make = |resource| {
            let released = released.clone();
            Registration::new(resource, move || released.set(released.get() + 1))
        };

        let scroll = make(Resource::Listener);
        let resize = make(Resource::Listener);
        let throttle = make(Resource::Frame);
        let frames = make(Resource::Animation);
        assert_eq!(active(Resource::Listener), 2);
        assert_eq!(active(Resource::Frame), 1);
        assert_eq!(active(Resource::Animation), 1);

        drop(scroll);
        assert_eq!(active(Resource::Listener), 1);

        // Simulates unmount: everything the component held goes at once.
        drop((resize, throttle, frames));
        assert_eq!(active(Resource::Listener), 0);
        assert_eq!(active(Resource::Frame), 0);
        assert_eq!(active(Resource::Animation), 0);
        assert_eq!(released.get(), 4);
    }

    #[test]
    fn release_runs_once() {
        let released = Rc::new(Cell::new(0));
        {
            let released = released.clone();
            let _registration =
                Registration::new(Resource::Animation, move || released.set(released.get() + 1));
            assert_eq!(active(Resource::Animation), 1);
        }
        assert_eq!(released.get(), 1);
        assert_eq!(active(Resource::Animation), 0);
    }
}
