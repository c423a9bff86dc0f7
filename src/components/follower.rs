//! Decorative element that drifts to a different spot for each section.
//!
//! The ring is scrubbed by scroll position: between the tops of two
//! sections it sits part-way between their table entries. The showcase card
//! jumps on section change and tweens there. Both bob gently once the page
//! has been still for a moment, and neither exists under reduced motion.

use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use web_sys::HtmlElement;
use yew::prelude::*;
use yew_hooks::use_window_size;

use crate::config;
use crate::dom::frame::{AnimationTimer, FrameLoop, FrameThrottle};
use crate::dom::listener::WindowListener;
use crate::dom::viewport;
use crate::error::PageResult;
use crate::motion::easing::Easing;
use crate::motion::preference::use_reduced_motion;
use crate::motion::transform::VisualTransform;
use crate::motion::tween::MotionState;
use crate::observer::SectionExtent;
use crate::section::Section;
use crate::store::use_active_section;

const CENTERED: &str = "translate(-50%, -50%)";
const RING_IMAGE: &str = "/images/silver-ring.jpeg";

#[derive(Debug)]
pub struct FollowerTable {
    pub name: &'static str,
    transforms: [VisualTransform; 5],
}

impl FollowerTable {
    pub fn get(&self, section: Section) -> VisualTransform {
        self.transforms[section.index()]
    }
}

pub static RING_DESKTOP: FollowerTable = FollowerTable {
    name: "ring-desktop",
    transforms: [
        VisualTransform::new(200.0, 0.0, 1.05, 0.0, 1.0),
        VisualTransform::new(-250.0, 100.0, 0.95, -3.0, 1.0),
        VisualTransform::new(180.0, -50.0, 1.0, 3.0, 1.0),
        VisualTransform::new(-220.0, -80.0, 0.9, -2.0, 1.0),
        VisualTransform::new(150.0, 50.0, 0.85, 0.0, 1.0),
    ],
};

// Smaller and parked bottom-centre.
pub static RING_MOBILE: FollowerTable = FollowerTable {
    name: "ring-mobile",
    transforms: [
        VisualTransform::new(0.0, 150.0, 0.65, 0.0, 0.95),
        VisualTransform::new(0.0, 150.0, 0.6, 0.0, 0.95),
        VisualTransform::new(0.0, 150.0, 0.65, 0.0, 0.95),
        VisualTransform::new(0.0, 150.0, 0.6, 0.0, 0.95),
        VisualTransform::new(0.0, 150.0, 0.55, 0.0, 0.95),
    ],
};

pub static SHOWCASE_DESKTOP: FollowerTable = FollowerTable {
    name: "showcase-desktop",
    transforms: [
        VisualTransform::new(420.0, -140.0, 1.0, 0.0, 1.0),
        VisualTransform::new(-440.0, -100.0, 0.93, 0.0, 1.0),
        VisualTransform::new(430.0, -180.0, 0.86, 0.0, 1.0),
        VisualTransform::new(-450.0, -200.0, 0.79, 0.0, 1.0),
        VisualTransform::new(420.0, 160.0, 0.93, 0.0, 1.0),
    ],
};

pub static SHOWCASE_MOBILE: FollowerTable = FollowerTable {
    name: "showcase-mobile",
    transforms: [VisualTransform::new(0.0, 260.0, 0.64, 0.0, 0.95); 5],
};

struct ShowcaseContent {
    title: &'static str,
    subtitle: &'static str,
    image: &'static str,
}

const SHOWCASE_CONTENT: [ShowcaseContent; 5] = [
    ShowcaseContent { title: "Spark Soul", subtitle: "Handcrafted Jewelry", image: "/images/bracelet.jpeg" },
    ShowcaseContent { title: "Our Story", subtitle: "Made with love", image: "/images/green-buta-stone-jewelry.jpg" },
    ShowcaseContent { title: "Best Sellers", subtitle: "Explore our collection", image: "/images/silver-ring.jpeg" },
    ShowcaseContent { title: "Our Creations", subtitle: "See our work", image: "/images/pink-flower-hair-accessory.jpeg" },
    ShowcaseContent { title: "Let's Create", subtitle: "Something custom for you", image: "/images/celebration-hamper.png" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FollowerKind {
    /// Floating ring image, scrubbed by scroll.
    Ring,
    /// Card with per-section copy, tweened on section change.
    Showcase,
}

impl FollowerKind {
    pub fn table(self, viewport_width: f64) -> &'static FollowerTable {
        self.layout(viewport::is_mobile(viewport_width))
    }

    pub fn layout(self, mobile: bool) -> &'static FollowerTable {
        match (self, mobile) {
            (FollowerKind::Ring, false) => &RING_DESKTOP,
            (FollowerKind::Ring, true) => &RING_MOBILE,
            (FollowerKind::Showcase, false) => &SHOWCASE_DESKTOP,
            (FollowerKind::Showcase, true) => &SHOWCASE_MOBILE,
        }
    }

    fn scrubbed(self) -> bool {
        self == FollowerKind::Ring
    }
}

/// What the follower is allowed to set up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FollowerPlan {
    pub render: bool,
    pub track_scroll: bool,
    pub idle_bob: bool,
}

impl FollowerPlan {
    pub fn new(reduced_motion: bool, mobile: bool) -> Self {
        if reduced_motion {
            return Self { render: false, track_scroll: false, idle_bob: false };
        }
        Self { render: true, track_scroll: true, idle_bob: !mobile }
    }
}

/// Scroll interval between two consecutive section tops.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Zone {
    pub from: Section,
    pub to: Section,
    pub progress: f64,
}

/// Zone containing `probe` (usually the viewport centre in document space).
pub fn scroll_zone(probe: f64, extents: &[SectionExtent]) -> Option<Zone> {
    let first = extents.first()?;
    if probe < first.top {
        return Some(Zone { from: first.section, to: first.section, progress: 0.0 });
    }
    for pair in extents.windows(2) {
        let (current, next) = (pair[0], pair[1]);
        if probe < next.top {
            let span = next.top - current.top;
            let progress = if span > 0.0 {
                ((probe - current.top) / span).clamp(0.0, 1.0)
            } else {
                1.0
            };
            return Some(Zone { from: current.section, to: next.section, progress });
        }
    }
    let last = extents.last()?;
    Some(Zone { from: last.section, to: last.section, progress: 0.0 })
}

pub fn scrubbed_transform(table: &FollowerTable, zone: Zone) -> VisualTransform {
    table.get(zone.from).lerp(&table.get(zone.to), zone.progress)
}

/// Vertical offset of the idle bob, a sine yo-yo starting at rest.
pub fn bob_offset(elapsed_ms: f64) -> f64 {
    let cycle = (elapsed_ms.max(0.0)) / config::IDLE_BOB_HALF_PERIOD_MS;
    let leg = cycle.floor();
    let fraction = cycle - leg;
    let phase = if (leg as u64) % 2 == 0 { fraction } else { 1.0 - fraction };
    config::IDLE_BOB_AMPLITUDE * Easing::InOutSine.apply(phase)
}

struct FollowerState {
    kind: FollowerKind,
    table: &'static FollowerTable,
    base: VisualTransform,
    motion: MotionState,
    bob_started: Option<Option<f64>>,
}

impl FollowerState {
    fn new(kind: FollowerKind, table: &'static FollowerTable, active: Section) -> Self {
        let target = table.get(active);
        Self {
            kind,
            table,
            base: target,
            motion: MotionState::entering(target, config::FOLLOWER_TRANSITION_MS, Easing::OutCubic),
            bob_started: None,
        }
    }

    /// Resets the bob to what `plan` allows; a stale bob never outlives it.
    fn apply_plan(&mut self, plan: FollowerPlan) {
        self.bob_started = if plan.idle_bob { Some(None) } else { None };
    }

    fn rescrub(&mut self) {
        let probe = viewport::scroll_y() + viewport::viewport_height() / 2.0;
        if let Some(zone) = scroll_zone(probe, &viewport::measure_sections()) {
            self.base = scrubbed_transform(self.table, zone);
        }
    }

    fn frame(&mut self, now: f64) -> (VisualTransform, bool) {
        let base = if self.kind.scrubbed() { self.base } else { self.motion.tick(now) };
        let offset = match self.bob_started.as_mut() {
            Some(started) => bob_offset(now - *started.get_or_insert(now)),
            None => 0.0,
        };
        let running = self.bob_started.is_some() || (!self.kind.scrubbed() && self.motion.is_animating());
        (base.offset_y(offset), running)
    }
}

type Shared<T> = Rc<RefCell<T>>;

fn paint(node: &NodeRef, transform: &VisualTransform) {
    if let Some(element) = node.cast::<HtmlElement>() {
        let _ = element.set_attribute("style", &transform.to_style(CENTERED));
    }
}

fn ensure_ticker(node: &NodeRef, state: &Shared<FollowerState>, ticker: &Shared<Option<FrameLoop>>) {
    if ticker.borrow().as_ref().map_or(false, FrameLoop::is_running) {
        return;
    }
    let (node, state) = (node.clone(), state.clone());
    let step = move |now: f64| {
        let (transform, running) = state.borrow_mut().frame(now);
        paint(&node, &transform);
        running
    };
    match FrameLoop::start(step) {
        Ok(frame_loop) => *ticker.borrow_mut() = Some(frame_loop),
        Err(err) => warn!("follower animation not started: {}", err),
    }
}

struct ScrollTracking {
    _listener: WindowListener,
    _throttle: Rc<FrameThrottle>,
}

fn track_scroll(
    node: NodeRef,
    state: Shared<FollowerState>,
    ticker: Shared<Option<FrameLoop>>,
    idle: Shared<Option<AnimationTimer>>,
    idle_bob: bool,
) -> PageResult<ScrollTracking> {
    let throttle = {
        let (node, state) = (node.clone(), state.clone());
        Rc::new(FrameThrottle::new(move || {
            let mut state = state.borrow_mut();
            if state.kind.scrubbed() {
                state.rescrub();
                paint(&node, &state.base);
            }
        })?)
    };

    let listener = {
        let throttle = throttle.clone();
        WindowListener::new("scroll", move |_| {
            // Scrolling always cancels the bob and restarts the grace period.
            state.borrow_mut().bob_started = None;
            throttle.schedule();
            if !idle_bob {
                return;
            }
            let (node, state, ticker) = (node.clone(), state.clone(), ticker.clone());
            let timer = AnimationTimer::new(config::IDLE_GRACE_MS, move || {
                state.borrow_mut().bob_started = Some(None);
                ensure_ticker(&node, &state, &ticker);
            });
            *idle.borrow_mut() = Some(timer);
        })?
    };

    throttle.schedule();
    Ok(ScrollTracking { _listener: listener, _throttle: throttle })
}

#[derive(Properties, PartialEq)]
pub struct DecorativeFollowerProps {
    pub kind: FollowerKind,
}

#[function_component(DecorativeFollower)]
pub fn decorative_follower(props: &DecorativeFollowerProps) -> Html {
    let kind = props.kind;
    let active = use_active_section();
    let reduced = use_reduced_motion();
    let (width, _) = use_window_size();
    let mobile = viewport::is_mobile(width);
    let plan = FollowerPlan::new(reduced, mobile);

    let node = use_node_ref();
    let state = use_mut_ref(|| FollowerState::new(kind, kind.table(width), active));
    let ticker = use_mut_ref(|| None::<FrameLoop>);
    let idle = use_mut_ref(|| None::<AnimationTimer>);

    // Listeners and loops live exactly as long as the component.
    {
        let (node, state, ticker, idle) = (node.clone(), state.clone(), ticker.clone(), idle.clone());
        use_effect_with_deps(
            move |&plan: &FollowerPlan| {
                let (track, idle_bob) = (plan.track_scroll, plan.idle_bob);
                state.borrow_mut().apply_plan(plan);
                let tracking = if track {
                    ensure_ticker(&node, &state, &ticker);
                    match track_scroll(node, state.clone(), ticker.clone(), idle.clone(), idle_bob) {
                        Ok(tracking) => Some(tracking),
                        Err(err) => {
                            warn!("follower not tracking scroll: {}", err);
                            None
                        }
                    }
                } else {
                    None
                };
                move || {
                    drop(tracking);
                    idle.borrow_mut().take();
                    ticker.borrow_mut().take();
                    state.borrow_mut().bob_started = None;
                }
            },
            plan,
        );
    }

    // Swap tables when crossing the breakpoint.
    {
        let (node, state, ticker) = (node.clone(), state.clone(), ticker.clone());
        use_effect_with_deps(
            move |&(mobile, track)| {
                if track {
                    let table = kind.layout(mobile);
                    let mut current = state.borrow_mut();
                    if !std::ptr::eq(current.table, table) {
                        current.table = table;
                        if kind.scrubbed() {
                            current.rescrub();
                            paint(&node, &current.base);
                        } else {
                            current.motion.retarget(table.get(active), config::FOLLOWER_TRANSITION_MS, Easing::OutCubic);
                            drop(current);
                            ensure_ticker(&node, &state, &ticker);
                        }
                    }
                }
                || ()
            },
            (mobile, plan.track_scroll),
        );
    }

    // Triggered mode heads for the new section's entry.
    {
        let (node, state, ticker) = (node.clone(), state.clone(), ticker.clone());
        use_effect_with_deps(
            move |&(active, track)| {
                if track && !kind.scrubbed() {
                    {
                        let mut current = state.borrow_mut();
                        let target = current.table.get(active);
                        current.motion.retarget(target, config::FOLLOWER_TRANSITION_MS, Easing::OutCubic);
                    }
                    ensure_ticker(&node, &state, &ticker);
                }
                || ()
            },
            (active, plan.track_scroll),
        );
    }

    if !plan.render {
        return html! {};
    }

    let body = match kind {
        FollowerKind::Ring => html! {
            <>
                <div class="follower-glow"></div>
                <img class="follower-ring-image" src={RING_IMAGE} alt="Featured ring" />
            </>
        },
        FollowerKind::Showcase => {
            let content = &SHOWCASE_CONTENT[active.index()];
            html! {
                <div class="follower-card">
                    <img src={content.image} alt={content.title} loading="lazy" />
                    <div class="follower-card-text">
                        <h3>{content.title}</h3>
                        <p>{content.subtitle}</p>
                    </div>
                </div>
            }
        }
    };

    html! {
        <div ref={node} class={classes!("follower", format!("follower-{}", if kind.scrubbed() { "ring" } else { "showcase" }))} aria-hidden="true">
            <style>
                {r#"
                    .follower {
                        position: fixed;
                        top: 50%;
                        left: 50%;
                        z-index: 30;
                        pointer-events: none;
                        opacity: 0;
                        will-change: transform, opacity;
                    }
                    .follower-ring {
                        width: 20rem;
                        height: 20rem;
                    }
                    .follower-glow {
                        position: absolute;
                        inset: 0;
                        border-radius: 50%;
                        background: rgba(201, 169, 97, 0.15);
                        filter: blur(32px);
                    }
                    .follower-ring-image {
                        position: relative;
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        border-radius: 50%;
                        box-shadow: 0 20px 60px rgba(201, 169, 97, 0.4), 0 0 40px rgba(201, 169, 97, 0.2);
                    }
                    .follower-showcase {
                        width: 280px;
                        height: 320px;
                    }
                    .follower-card {
                        position: relative;
                        width: 100%;
                        height: 100%;
                        border-radius: 24px;
                        overflow: hidden;
                        background: rgba(255, 255, 255, 0.9);
                        box-shadow: 0 12px 40px rgba(0, 0, 0, 0.15);
                    }
                    .follower-card img {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .follower-card-text {
                        position: absolute;
                        left: 0;
                        right: 0;
                        bottom: 0;
                        padding: 1.25rem;
                        color: white;
                        background: linear-gradient(to top, rgba(0, 0, 0, 0.8), transparent);
                    }
                    @media (max-width: 767px) {
                        .follower-ring {
                            width: 12rem;
                            height: 12rem;
                        }
                        .follower-showcase {
                            width: 180px;
                            height: 200px;
                        }
                    }
                "#}
            </style>
            { body }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<SectionExtent> {
        Section::ALL
            .into_iter()
            .enumerate()
            .map(|(i, section)| SectionExtent { section, top: i as f64 * 1000.0, height: 1000.0 })
            .collect()
    }

    #[test]
    fn narrow_viewport_uses_mobile_tables_for_every_section() {
        for width in [320.0, 500.0, 767.9] {
            let ring = FollowerKind::Ring.table(width);
            assert_eq!(ring.name, "ring-mobile");
            let showcase = FollowerKind::Showcase.table(width);
            assert_eq!(showcase.name, "showcase-mobile");
            for section in Section::ALL {
                assert_eq!(ring.get(section), RING_MOBILE.get(section));
                assert_ne!(ring.get(section), RING_DESKTOP.get(section));
                assert_eq!(showcase.get(section), SHOWCASE_MOBILE.get(section));
            }
        }
        assert_eq!(FollowerKind::Ring.table(768.0).name, "ring-desktop");
        assert_eq!(FollowerKind::Showcase.table(1440.0).name, "showcase-desktop");
    }

    #[test]
    fn zone_progress_runs_from_top_to_next_top() {
        let extents = page();
        assert_eq!(
            scroll_zone(1000.0, &extents),
            Some(Zone { from: Section::About, to: Section::Products, progress: 0.0 })
        );
        assert_eq!(
            scroll_zone(1250.0, &extents),
            Some(Zone { from: Section::About, to: Section::Products, progress: 0.25 })
        );
        assert_eq!(
            scroll_zone(-40.0, &extents),
            Some(Zone { from: Section::Home, to: Section::Home, progress: 0.0 })
        );
        assert_eq!(
            scroll_zone(4500.0, &extents),
            Some(Zone { from: Section::Contact, to: Section::Contact, progress: 0.0 })
        );
        assert_eq!(scroll_zone(10.0, &[]), None);
    }

    #[test]
    fn scrub_boundaries_match_table_entries() {
        for table in [&RING_DESKTOP, &RING_MOBILE] {
            for section in Section::ALL {
                let Some(next) = section.next() else { continue };
                let departing = scrubbed_transform(table, Zone { from: section, to: next, progress: 0.0 });
                let arriving = scrubbed_transform(table, Zone { from: section, to: next, progress: 1.0 });
                assert_eq!(departing, table.get(section));
                assert_eq!(arriving, table.get(next));
            }
        }
    }

    #[test]
    fn scrub_is_continuous_across_a_section_top() {
        let extents = page();
        let before = scrubbed_transform(&RING_DESKTOP, scroll_zone(1999.999, &extents).unwrap());
        let after = scrubbed_transform(&RING_DESKTOP, scroll_zone(2000.0, &extents).unwrap());
        assert!((before.x - after.x).abs() < 0.01);
        assert!((before.scale - after.scale).abs() < 1e-4);
    }

    #[test]
    fn reduced_motion_sets_nothing_up() {
        for mobile in [false, true] {
            let plan = FollowerPlan::new(true, mobile);
            assert!(!plan.render);
            assert!(!plan.track_scroll);
            assert!(!plan.idle_bob);
        }
    }

    #[test]
    fn idle_bob_is_desktop_only() {
        assert!(FollowerPlan::new(false, false).idle_bob);
        assert!(!FollowerPlan::new(false, true).idle_bob);
        assert!(FollowerPlan::new(false, true).track_scroll);
    }

    #[test]
    fn narrowing_the_viewport_stops_a_running_bob() {
        let mut state = FollowerState::new(FollowerKind::Ring, &RING_DESKTOP, Section::About);
        state.apply_plan(FollowerPlan::new(false, false));
        let (_, running) = state.frame(16.0);
        assert!(running);
        assert_eq!(state.bob_started, Some(Some(16.0)));

        state.table = &RING_MOBILE;
        state.apply_plan(FollowerPlan::new(false, true));
        assert_eq!(state.bob_started, None);
        let (transform, running) = state.frame(400.0);
        assert!(!running);
        assert_eq!(transform, state.base);
    }

    #[test]
    fn reduced_motion_clears_the_bob() {
        let mut state = FollowerState::new(FollowerKind::Ring, &RING_DESKTOP, Section::Home);
        state.bob_started = Some(Some(0.0));
        state.apply_plan(FollowerPlan::new(true, false));
        assert!(!state.frame(100.0).1);
    }

    #[test]
    fn bob_yoyos_between_rest_and_amplitude() {
        assert!(bob_offset(0.0).abs() < 1e-9);
        assert!((bob_offset(config::IDLE_BOB_HALF_PERIOD_MS) - config::IDLE_BOB_AMPLITUDE).abs() < 1e-9);
        assert!(bob_offset(2.0 * config::IDLE_BOB_HALF_PERIOD_MS).abs() < 1e-9);
        let quarter = bob_offset(config::IDLE_BOB_HALF_PERIOD_MS / 2.0);
        assert!((quarter - config::IDLE_BOB_AMPLITUDE / 2.0).abs() < 1e-9);
    }
}
