//! The active-section store.
//!
//! One value, many readers. Subscribers get an [`ActiveSection`] through
//! context and can only read it. Writes go through [`ActiveSectionWriter`],
//! which only the page shell constructs: the section observer reports what
//! it sees, and navigation applies its optimistic update.

use std::rc::Rc;

use log::debug;
use yew::prelude::*;

use crate::section::Section;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveSectionAction {
    /// Scroll position resolved to this section.
    Observed(Section),
    /// The user asked to go here; applied before the scroll starts.
    Navigated(Section),
}

impl ActiveSectionAction {
    pub fn section(self) -> Section {
        match self {
            ActiveSectionAction::Observed(section) | ActiveSectionAction::Navigated(section) => {
                section
            }
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActiveSectionState {
    section: Section,
    changes: u32,
}

impl ActiveSectionState {
    pub fn section(&self) -> Section {
        self.section
    }

    #[cfg(test)]
    pub fn changes(&self) -> u32 {
        self.changes
    }
}

impl Reducible for ActiveSectionState {
    type Action = ActiveSectionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let section = action.section();
        if section == self.section {
            // Same Rc back means no re-render and nothing published.
            return self;
        }
        let changes = self.changes.wrapping_add(1);
        debug!("active section {} -> {} ({:?}, change #{})", self.section, section, action, changes);
        Rc::new(Self { section, changes })
    }
}

/// Read-only view handed to subscribers.
#[derive(Clone, PartialEq)]
pub struct ActiveSection(UseReducerHandle<ActiveSectionState>);

impl ActiveSection {
    pub fn new(handle: UseReducerHandle<ActiveSectionState>) -> Self {
        Self(handle)
    }

    pub fn get(&self) -> Section {
        self.0.section()
    }
}

#[derive(Clone, PartialEq)]
pub struct ActiveSectionWriter(UseReducerDispatcher<ActiveSectionState>);

impl ActiveSectionWriter {
    pub fn new(dispatcher: UseReducerDispatcher<ActiveSectionState>) -> Self {
        Self(dispatcher)
    }

    pub fn observed(&self, section: Section) {
        self.0.dispatch(ActiveSectionAction::Observed(section));
    }

    pub fn navigated(&self, section: Section) {
        self.0.dispatch(ActiveSectionAction::Navigated(section));
    }
}

/// Current active section, `Home` outside of a provider.
#[hook]
pub fn use_active_section() -> Section {
    use_context::<ActiveSection>()
        .map(|active| active.get())
        .unwrap_or_default()
}
