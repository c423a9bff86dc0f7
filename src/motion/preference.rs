use yew::prelude::*;

/// Whether the visitor asked the OS for reduced motion. Read once by the
/// page shell and shared through context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MotionPreference {
    pub reduced: bool,
}

#[hook]
pub fn use_reduced_motion() -> bool {
    use_context::<MotionPreference>()
        .map(|preference| preference.reduced)
        .unwrap_or(false)
}
