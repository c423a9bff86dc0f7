use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Function;
use web_sys::Event;

use crate::dom::registry::{Registration, Resource};
use crate::dom::viewport;
use crate::error::PageResult;

/// A window event listener that removes itself when dropped.
pub struct WindowListener {
    // Declared first so the listener is removed before the closure is freed.
    _registration: Registration,
    _closure: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
    pub fn new<F>(event_type: &'static str, callback: F) -> PageResult<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let window = viewport::window()?;
        let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut(Event)>);
        let function: Function = closure.as_ref().unchecked_ref::<Function>().clone();

        window.add_event_listener_with_callback(event_type, &function)?;

        let registration = Registration::new(Resource::Listener, move || {
            let _ = window.remove_event_listener_with_callback(event_type, &function);
        });

        Ok(Self {
            _registration: registration,
            _closure: closure,
        })
    }
}
