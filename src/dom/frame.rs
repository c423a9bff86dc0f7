use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::dom::registry::{Registration, Resource};
use crate::dom::viewport;
use crate::error::PageResult;

/// Collapses bursts of events into one job per animation frame.
pub struct FrameThrottle {
    _registration: Registration,
    window: Window,
    pending: Rc<Cell<Option<i32>>>,
    callback: Closure<dyn FnMut(f64)>,
}

impl FrameThrottle {
    pub fn new<F>(mut job: F) -> PageResult<Self>
    where
        F: FnMut() + 'static,
    {
        let window = viewport::window()?;
        let pending = Rc::new(Cell::new(None::<i32>));

        let callback = {
            let pending = pending.clone();
            Closure::wrap(Box::new(move |_timestamp: f64| {
                pending.set(None);
                job();
            }) as Box<dyn FnMut(f64)>)
        };

        let registration = {
            let window = window.clone();
            let pending = pending.clone();
            Registration::new(Resource::Frame, move || {
                if let Some(id) = pending.take() {
                    let _ = window.cancel_animation_frame(id);
                }
            })
        };

        Ok(Self {
            _registration: registration,
            window,
            pending,
            callback,
        })
    }

    /// Queue the job for the next frame unless it is already queued.
    pub fn schedule(&self) {
        if self.pending.get().is_some() {
            return;
        }
        match self
            .window
            .request_animation_frame(self.callback.as_ref().unchecked_ref())
        {
            Ok(id) => self.pending.set(Some(id)),
            Err(err) => log::debug!("animation frame request failed: {:?}", err),
        }
    }
}

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Calls `step` every animation frame until it returns `false` or the loop
/// is dropped.
pub struct FrameLoop {
    handle: Rc<Cell<Option<i32>>>,
    _registration: Registration,
}

impl FrameLoop {
    pub fn start<F>(mut step: F) -> PageResult<Self>
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let window = viewport::window()?;
        let handle = Rc::new(Cell::new(None::<i32>));
        let slot: FrameSlot = Rc::new(RefCell::new(None));

        let tick = {
            let window = window.clone();
            let handle = handle.clone();
            let slot = slot.clone();
            Closure::wrap(Box::new(move |timestamp: f64| {
                handle.set(None);
                if !step(timestamp) {
                    return;
                }
                if let Some(tick) = slot.borrow().as_ref() {
                    handle.set(
                        window
                            .request_animation_frame(tick.as_ref().unchecked_ref())
                            .ok(),
                    );
                }
            }) as Box<dyn FnMut(f64)>)
        };

        handle.set(Some(
            window.request_animation_frame(tick.as_ref().unchecked_ref())?,
        ));
        *slot.borrow_mut() = Some(tick);

        let registration = {
            let handle = handle.clone();
            Registration::new(Resource::Animation, move || {
                if let Some(id) = handle.take() {
                    let _ = window.cancel_animation_frame(id);
                }
                // The tick closure holds the slot; emptying it breaks the cycle.
                slot.borrow_mut().take();
            })
        };

        Ok(Self {
            handle,
            _registration: registration,
        })
    }

    pub fn is_running(&self) -> bool {
        self.handle.get().is_some()
    }
}

/// A registration released by whichever happens first: the wrapped
/// callback running, or the guard being dropped.
struct OneShot {
    registration: Rc<RefCell<Option<Registration>>>,
}

impl OneShot {
    fn arm<F>(resource: Resource, callback: F) -> (Self, impl FnOnce() + 'static)
    where
        F: FnOnce() + 'static,
    {
        let registration = Rc::new(RefCell::new(Some(Registration::new(resource, || ()))));
        let fire = {
            let registration = registration.clone();
            move || {
                registration.borrow_mut().take();
                callback();
            }
        };
        (Self { registration }, fire)
    }
}

impl Drop for OneShot {
    fn drop(&mut self) {
        self.registration.borrow_mut().take();
    }
}

/// One-shot timer that counts as a running animation until it fires or is
/// dropped.
pub struct AnimationTimer {
    _timeout: gloo_timers::callback::Timeout,
    _pending: OneShot,
}

impl AnimationTimer {
    pub fn new<F>(millis: u32, callback: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        let (pending, fire) = OneShot::arm(Resource::Animation, callback);
        Self {
            _timeout: gloo_timers::callback::Timeout::new(millis, fire),
            _pending: pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::registry::active;

    #[test]
    fn fired_timer_stops_counting_before_it_is_dropped() {
        let ran = Rc::new(Cell::new(false));
        let (pending, fire) = {
            let ran = ran.clone();
            OneShot::arm(Resource::Animation, move || ran.set(true))
        };
        assert_eq!(active(Resource::Animation), 1);

        fire();
        assert!(ran.get());
        assert_eq!(active(Resource::Animation), 0);

        drop(pending);
        assert_eq!(active(Resource::Animation), 0);
    }

    #[test]
    fn dropped_timer_stops_counting_without_firing() {
        let (pending, _fire) = OneShot::arm(Resource::Animation, || ());
        assert_eq!(active(Resource::Animation), 1);
        drop(pending);
        assert_eq!(active(Resource::Animation), 0);
    }
}
