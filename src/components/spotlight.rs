use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use web_sys::HtmlElement;
use yew::prelude::*;
use yew_hooks::use_window_size;

use crate::config;
use crate::dom::frame::FrameLoop;
use crate::dom::viewport::{self, Rect};
use crate::motion::crossfade::{CrossFade, FadeCommand};
use crate::motion::easing::Easing;
use crate::motion::preference::use_reduced_motion;
use crate::motion::transform::VisualTransform;
use crate::motion::tween::MotionState;
use crate::section::Section;
use crate::store::use_active_section;

/// Representative image per section, filled in by the sections themselves
/// as they render.
#[derive(Clone, Default)]
pub struct ImageRegistry(Rc<RefCell<HashMap<Section, String>>>);

impl PartialEq for ImageRegistry {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl ImageRegistry {
    pub fn register(&self, section: Section, src: String) {
        self.0.borrow_mut().insert(section, src);
    }

    pub fn unregister(&self, section: Section) {
        self.0.borrow_mut().remove(&section);
    }

    pub fn get(&self, section: Section) -> Option<String> {
        self.0.borrow().get(&section).cloned()
    }
}

/// Publishes `src` as the spotlight image for `section` while mounted.
#[hook]
pub fn use_spotlight_image(section: Section, src: Option<String>) {
    let registry = use_context::<ImageRegistry>();
    use_effect_with_deps(
        move |src| {
            if let Some(registry) = registry.as_ref() {
                match src {
                    Some(src) => registry.register(section, src.clone()),
                    None => registry.unregister(section),
                }
            }
            move || {
                if let Some(registry) = registry {
                    registry.unregister(section);
                }
            }
        },
        src,
    );
}

pub fn fallback_image(section: Section) -> &'static str {
    match section {
        Section::Home | Section::Contact => "/images/silver-ring.jpeg",
        Section::About => "/images/green-buta-stone-jewelry.jpg",
        Section::Products => "/images/bracelet.jpeg",
        Section::Gallery => "/images/pink-flower-hair-accessory.jpeg",
    }
}

pub fn resolve_image(section: Section, registry: &ImageRegistry, last: Option<&str>) -> String {
    match section {
        Section::Home => registry
            .get(Section::Home)
            .or_else(|| registry.get(Section::Products))
            .unwrap_or_else(|| fallback_image(section).to_string()),
        Section::About | Section::Products | Section::Gallery => registry
            .get(section)
            .unwrap_or_else(|| fallback_image(section).to_string()),
        // Nothing to show here, keep whatever is on screen.
        Section::Contact => last
            .map(str::to_string)
            .unwrap_or_else(|| fallback_image(section).to_string()),
    }
}

pub fn spotlight_size(mobile: bool) -> f64 {
    if mobile {
        config::SPOTLIGHT_SIZE_MOBILE
    } else {
        config::SPOTLIGHT_SIZE
    }
}

fn tilt(section: Section) -> f64 {
    match section {
        Section::About => -2.0,
        Section::Products => 2.0,
        _ => 0.0,
    }
}

/// Document-space transform that centres the spotlight on the anchor.
pub fn spotlight_target(section: Section, anchor: Rect, scroll_y: f64, mobile: bool) -> VisualTransform {
    let size = spotlight_size(mobile);
    let (center_x, center_y) = anchor.center();
    VisualTransform::new(
        center_x - size / 2.0,
        center_y + scroll_y - size / 2.0,
        1.0,
        tilt(section),
        1.0,
    )
}

/// Which animations the spotlight may run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpotlightPlan {
    pub fade: bool,
    pub tween: bool,
}

impl SpotlightPlan {
    pub fn new(reduced_motion: bool) -> Self {
        Self { fade: !reduced_motion, tween: !reduced_motion }
    }
}

/// Points the image slot at `next`, returning the timer the fade wants.
pub fn apply_image(fade: &mut CrossFade, next: &str, plan: SpotlightPlan) -> FadeCommand {
    if plan.fade {
        fade.request(next)
    } else {
        fade.replace(next);
        FadeCommand::Nothing
    }
}

/// Heads for `target`, or hides in place when the section has no anchor.
/// Returns whether frames are needed to get there.
pub fn move_to(slot: &mut Option<MotionState>, target: Option<VisualTransform>, plan: SpotlightPlan) -> bool {
    let duration = config::SPOTLIGHT_TRANSITION_MS;
    if slot.is_none() {
        let Some(target) = target else {
            return false;
        };
        *slot = Some(if plan.tween {
            MotionState::entering(target, duration, Easing::OutCubic)
        } else {
            MotionState::at_rest(target)
        });
        return plan.tween;
    }
    let Some(state) = slot.as_mut() else {
        return false;
    };
    match target {
        Some(target) if plan.tween => state.retarget(target, duration, Easing::OutCubic),
        Some(target) => state.snap(target),
        None if plan.tween => state.exit(f64::from(config::SPOTLIGHT_FADE_MS), Easing::Linear),
        None => {
            let hidden = state.current().with_opacity(0.0);
            state.snap(hidden);
        }
    }
    plan.tween && state.is_animating()
}

#[derive(Default)]
struct FadeTimers {
    swap: Option<Timeout>,
    settle: Option<Timeout>,
}

type Shared<T> = Rc<RefCell<T>>;

fn drive_fade(
    command: FadeCommand,
    fade: &Shared<CrossFade>,
    timers: &Shared<FadeTimers>,
    redraw: &UseForceUpdateHandle,
) {
    redraw.force_update();
    match command {
        FadeCommand::Nothing => {}
        FadeCommand::SwapAfter(millis) => {
            let (fade, settle_slot, redraw) = (fade.clone(), timers.clone(), redraw.clone());
            let swap = Timeout::new(millis, move || {
                let next = fade.borrow_mut().swap();
                drive_fade(next, &fade, &settle_slot, &redraw);
            });
            let mut timers = timers.borrow_mut();
            timers.settle = None;
            timers.swap = Some(swap);
        }
        FadeCommand::SettleAfter(millis) => {
            let (fade, redraw) = (fade.clone(), redraw.clone());
            let settle = Timeout::new(millis, move || {
                fade.borrow_mut().settle();
                redraw.force_update();
            });
            // Only the settle slot is touched here: this can run from inside
            // the swap timer's own callback.
            timers.borrow_mut().settle = Some(settle);
        }
    }
}

fn paint(node: &NodeRef, transform: &VisualTransform) {
    if let Some(element) = node.cast::<HtmlElement>() {
        let _ = element.set_attribute("style", &transform.to_style(""));
    }
}

fn ensure_ticker(node: &NodeRef, motion: &Shared<Option<MotionState>>, ticker: &Shared<Option<FrameLoop>>) {
    if ticker.borrow().as_ref().map_or(false, FrameLoop::is_running) {
        return;
    }
    let (node, motion) = (node.clone(), motion.clone());
    let step = move |now: f64| {
        let mut motion = motion.borrow_mut();
        let Some(state) = motion.as_mut() else {
            return false;
        };
        let transform = state.tick(now);
        paint(&node, &transform);
        state.is_animating()
    };
    match FrameLoop::start(step) {
        Ok(frame_loop) => *ticker.borrow_mut() = Some(frame_loop),
        Err(err) => warn!("spotlight animation not started: {}", err),
    }
}

#[function_component(SpotlightController)]
pub fn spotlight_controller() -> Html {
    let active = use_active_section();
    let registry = use_context::<ImageRegistry>().unwrap_or_default();
    let reduced = use_reduced_motion();
    let plan = SpotlightPlan::new(reduced);
    let (width, _) = use_window_size();
    let mobile = viewport::is_mobile(width);

    let node = use_node_ref();
    let fade = use_mut_ref(|| CrossFade::new(config::SPOTLIGHT_FADE_MS));
    let timers = use_mut_ref(FadeTimers::default);
    let motion = use_mut_ref(|| None::<MotionState>);
    let ticker = use_mut_ref(|| None::<FrameLoop>);
    let redraw = use_force_update();

    // Teardown: cancel pending fades and the frame loop.
    {
        let timers = timers.clone();
        let ticker = ticker.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    *timers.borrow_mut() = FadeTimers::default();
                    ticker.borrow_mut().take();
                }
            },
            (),
        );
    }

    // Image follows the active section.
    {
        let fade = fade.clone();
        let timers = timers.clone();
        let redraw = redraw.clone();
        use_effect_with_deps(
            move |active| {
                let last = fade.borrow().src().map(str::to_string);
                let next = resolve_image(*active, &registry, last.as_deref());
                let command = apply_image(&mut fade.borrow_mut(), &next, plan);
                drive_fade(command, &fade, &timers, &redraw);
                || ()
            },
            active,
        );
    }

    // Position follows the anchor of the active section.
    {
        let node = node.clone();
        let motion = motion.clone();
        let ticker = ticker.clone();
        use_effect_with_deps(
            move |&(active, mobile)| {
                let anchor = viewport::spotlight_anchor(active);
                if anchor.is_none() {
                    debug!("no spotlight anchor in #{}", active.id());
                }
                let target = anchor.map(|anchor| spotlight_target(active, anchor, viewport::scroll_y(), mobile));
                let animate = move_to(&mut motion.borrow_mut(), target, plan);
                if animate {
                    ensure_ticker(&node, &motion, &ticker);
                } else if let Some(state) = motion.borrow().as_ref() {
                    paint(&node, &state.current());
                }
                || ()
            },
            (active, mobile),
        );
    }

    let fade = fade.borrow();
    html! {
        <div ref={node} class={classes!("spotlight", mobile.then(|| "spotlight-mobile"), reduced.then(|| "no-motion"))} aria-hidden="true">
            <style>
                {r#"
                    .spotlight {
                        position: absolute;
                        top: 0;
                        left: 0;
                        width: 280px;
                        height: 280px;
                        z-index: 20;
                        pointer-events: none;
                        opacity: 0;
                        will-change: transform;
                    }
                    .spotlight-mobile {
                        width: 160px;
                        height: 160px;
                    }
                    .spotlight-glow {
                        position: absolute;
                        inset: 0;
                        border-radius: 50%;
                        background: rgba(201, 169, 97, 0.1);
                        filter: blur(24px);
                    }
                    .spotlight-frame {
                        position: relative;
                        width: 100%;
                        height: 100%;
                        border-radius: 50%;
                        overflow: hidden;
                        border: 2px solid rgba(255, 255, 255, 0.2);
                        box-shadow: 0 20px 60px rgba(0, 0, 0, 0.3), 0 0 40px rgba(201, 169, 97, 0.2);
                    }
                    .spotlight-image {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: opacity 0.3s ease;
                    }
                    .spotlight.no-motion .spotlight-image {
                        transition: none;
                    }
                "#}
            </style>
            <div class="spotlight-glow"></div>
            <div class="spotlight-frame">
                {
                    if let Some(src) = fade.src() {
                        html! {
                            <img
                                class="spotlight-image"
                                src={src.to_string()}
                                alt="Spotlight"
                                style={format!("opacity: {};", fade.opacity())}
                            />
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registered_image_wins_over_fallback() {
        let registry = ImageRegistry::default();
        assert_eq!(resolve_image(Section::Gallery, &registry, None), fallback_image(Section::Gallery));
        registry.register(Section::Gallery, "/images/first-gallery.jpeg".to_string());
        assert_eq!(resolve_image(Section::Gallery, &registry, None), "/images/first-gallery.jpeg");
        registry.unregister(Section::Gallery);
        assert_eq!(resolve_image(Section::Gallery, &registry, None), fallback_image(Section::Gallery));
    }

    #[test]
    fn home_borrows_the_first_product() {
        let registry = ImageRegistry::default();
        registry.register(Section::Products, "/images/bracelet.jpeg".to_string());
        assert_eq!(resolve_image(Section::Home, &registry, None), "/images/bracelet.jpeg");
        registry.register(Section::Home, "/images/hero.jpeg".to_string());
        assert_eq!(resolve_image(Section::Home, &registry, None), "/images/hero.jpeg");
    }

    #[test]
    fn contact_reuses_last_image() {
        let registry = ImageRegistry::default();
        registry.register(Section::Contact, "/ignored.jpeg".to_string());
        assert_eq!(
            resolve_image(Section::Contact, &registry, Some("/images/lip-gloss.jpeg")),
            "/images/lip-gloss.jpeg"
        );
        assert_eq!(resolve_image(Section::Contact, &registry, None), fallback_image(Section::Contact));
    }

    #[test]
    fn products_scenario_picks_first_grid_image() {
        let registry = ImageRegistry::default();
        registry.register(Section::Products, "/images/pink-flower-hair-accessory.jpeg".to_string());
        let mut fade = CrossFade::new(config::SPOTLIGHT_FADE_MS);
        fade.request(&resolve_image(Section::Home, &registry, None));
        fade.request("/images/green-buta-stone-jewelry.jpg");
        fade.swap();
        fade.settle();

        let next = resolve_image(Section::Products, &registry, fade.src());
        assert_eq!(fade.request(&next), FadeCommand::SwapAfter(config::SPOTLIGHT_FADE_MS));
        fade.swap();
        fade.settle();
        assert_eq!(fade.src(), Some("/images/pink-flower-hair-accessory.jpeg"));
    }

    #[test]
    fn target_centres_on_anchor_in_document_space() {
        let anchor = Rect { left: 100.0, top: 50.0, width: 400.0, height: 300.0 };
        let target = spotlight_target(Section::About, anchor, 2_000.0, false);
        assert_eq!(target.x, 300.0 - 140.0);
        assert_eq!(target.y, 200.0 + 2_000.0 - 140.0);
        assert_eq!(target.rotation, -2.0);

        let mobile = spotlight_target(Section::Products, anchor, 0.0, true);
        assert_eq!(mobile.x, 300.0 - 80.0);
        assert_eq!(mobile.rotation, 2.0);
        assert_eq!(spotlight_target(Section::Gallery, anchor, 0.0, true).rotation, 0.0);
    }

    const SPOT: VisualTransform = VisualTransform::new(160.0, 2_060.0, 1.0, -2.0, 1.0);

    #[test]
    fn reduced_motion_swaps_images_without_timers() {
        let plan = SpotlightPlan::new(true);
        assert!(!plan.fade && !plan.tween);
        let mut fade = CrossFade::new(config::SPOTLIGHT_FADE_MS);
        for src in ["/images/silver-ring.jpeg", "/images/bracelet.jpeg", "/images/silver-ring.jpeg"] {
            assert_eq!(apply_image(&mut fade, src, plan), FadeCommand::Nothing);
            assert_eq!(fade.src(), Some(src));
            assert_eq!(fade.opacity(), 1.0);
        }
    }

    #[test]
    fn full_motion_fades_between_images() {
        let plan = SpotlightPlan::new(false);
        let mut fade = CrossFade::new(config::SPOTLIGHT_FADE_MS);
        assert_eq!(apply_image(&mut fade, "/images/silver-ring.jpeg", plan), FadeCommand::Nothing);
        assert_eq!(
            apply_image(&mut fade, "/images/bracelet.jpeg", plan),
            FadeCommand::SwapAfter(config::SPOTLIGHT_FADE_MS)
        );
        assert_eq!(fade.src(), Some("/images/silver-ring.jpeg"));
    }

    #[test]
    fn reduced_motion_never_tweens() {
        let plan = SpotlightPlan::new(true);
        let mut slot = None;
        assert!(!move_to(&mut slot, Some(SPOT), plan));
        assert_eq!(slot.as_ref().map(MotionState::current), Some(SPOT));

        let moved = SPOT.offset_y(900.0);
        assert!(!move_to(&mut slot, Some(moved), plan));
        let state = slot.as_ref().unwrap();
        assert!(!state.is_animating());
        assert_eq!(state.current(), moved);

        assert!(!move_to(&mut slot, None, plan));
        let state = slot.as_ref().unwrap();
        assert!(!state.is_animating());
        assert_eq!(state.current(), moved.with_opacity(0.0));
    }

    #[test]
    fn full_motion_enters_then_follows() {
        let plan = SpotlightPlan::new(false);
        let mut slot = None;
        assert!(!move_to(&mut slot, None, plan));
        assert!(slot.is_none());

        assert!(move_to(&mut slot, Some(SPOT), plan));
        let state = slot.as_mut().unwrap();
        assert_eq!(state.tick(0.0).opacity, 0.0);
        assert_eq!(state.tick(config::SPOTLIGHT_TRANSITION_MS), SPOT);

        assert!(!move_to(&mut slot, Some(SPOT), plan));
        assert!(move_to(&mut slot, Some(SPOT.offset_y(400.0)), plan));
    }

    #[test]
    fn missing_anchor_fades_out_in_place() {
        let plan = SpotlightPlan::new(false);
        let mut slot = Some(MotionState::at_rest(SPOT));
        assert!(move_to(&mut slot, None, plan));
        let state = slot.as_mut().unwrap();
        state.tick(0.0);
        let half = state.tick(f64::from(config::SPOTLIGHT_FADE_MS) / 2.0);
        assert_eq!((half.x, half.y), (SPOT.x, SPOT.y));
        assert!((half.opacity - 0.5).abs() < 1e-9);
        assert_eq!(state.tick(f64::from(config::SPOTLIGHT_FADE_MS)), SPOT.with_opacity(0.0));
        assert!(!state.is_animating());
    }

    #[test]
    fn registry_handles_compare_by_identity() {
        let a = ImageRegistry::default();
        assert!(a == a.clone());
        assert!(a != ImageRegistry::default());
    }
}
