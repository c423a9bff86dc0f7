//! Decides which section is active from the scroll position.
//!
//! Every scroll or resize schedules one frame job. The job measures the
//! mounted sections and probes `scrollY + SCROLL_LOOKAHEAD` against their
//! extents; the first section in document order that contains the probe
//! wins. Nothing matching means the previous value stays.

use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use yew::prelude::*;

use crate::config;
use crate::dom::frame::FrameThrottle;
use crate::dom::listener::WindowListener;
use crate::dom::viewport;
use crate::error::PageResult;
use crate::section::Section;
use crate::store::ActiveSectionWriter;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionExtent {
    pub section: Section,
    pub top: f64,
    pub height: f64,
}

impl SectionExtent {
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// First section (in the order given) whose extent contains the probe.
pub fn resolve_active(scroll_y: f64, lookahead: f64, extents: &[SectionExtent]) -> Option<Section> {
    let probe = scroll_y + lookahead;
    extents
        .iter()
        .find(|extent| extent.contains(probe))
        .map(|extent| extent.section)
}

/// Remembers the last published section so only changes get dispatched.
#[derive(Debug)]
pub struct SectionTracker {
    current: Section,
}

impl SectionTracker {
    pub fn new(current: Section) -> Self {
        Self { current }
    }

    #[cfg(test)]
    pub fn current(&self) -> Section {
        self.current
    }

    /// Align with the store after someone else (navigation) moved it.
    pub fn sync(&mut self, section: Section) {
        self.current = section;
    }

    pub fn observe(&mut self, scroll_y: f64, extents: &[SectionExtent]) -> Option<Section> {
        let resolved = resolve_active(scroll_y, config::SCROLL_LOOKAHEAD, extents)?;
        if resolved == self.current {
            return None;
        }
        self.current = resolved;
        Some(resolved)
    }
}

struct ScrollObservation {
    _scroll: WindowListener,
    _resize: WindowListener,
    _throttle: Rc<FrameThrottle>,
}

fn observe_scroll(
    tracker: Rc<RefCell<SectionTracker>>,
    writer: ActiveSectionWriter,
) -> PageResult<ScrollObservation> {
    let evaluate = move || {
        let extents = viewport::measure_sections();
        let changed = tracker.borrow_mut().observe(viewport::scroll_y(), &extents);
        if let Some(section) = changed {
            writer.observed(section);
        }
    };

    let throttle = Rc::new(FrameThrottle::new(evaluate)?);
    let scroll = {
        let throttle = throttle.clone();
        WindowListener::new("scroll", move |_| throttle.schedule())?
    };
    let resize = {
        let throttle = throttle.clone();
        WindowListener::new("resize", move |_| throttle.schedule())?
    };

    // Initial check
    throttle.schedule();

    Ok(ScrollObservation {
        _scroll: scroll,
        _resize: resize,
        _throttle: throttle,
    })
}

/// Keeps the active section in step with the scroll position for as long as
/// the calling component is mounted.
#[hook]
pub fn use_section_observer(writer: ActiveSectionWriter, active: Section) {
    let tracker = use_mut_ref(|| SectionTracker::new(active));

    {
        let tracker = tracker.clone();
        use_effect_with_deps(
            move |active| {
                tracker.borrow_mut().sync(*active);
                || ()
            },
            active,
        );
    }

    use_effect_with_deps(
        move |_| {
            let observation = match observe_scroll(tracker, writer) {
                Ok(observation) => Some(observation),
                Err(err) => {
                    warn!("section observer not attached: {}", err);
                    None
                }
            };
            move || drop(observation)
        },
        (),
    );
}
