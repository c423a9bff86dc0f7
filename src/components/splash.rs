use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;
use crate::motion::preference::use_reduced_motion;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplashPhase {
    Visible,
    Leaving,
    Gone,
}

impl SplashPhase {
    pub fn next(self) -> SplashPhase {
        match self {
            SplashPhase::Visible => SplashPhase::Leaving,
            SplashPhase::Leaving | SplashPhase::Gone => SplashPhase::Gone,
        }
    }

    /// How long this phase lasts, `None` once the overlay is removed.
    pub fn duration_ms(self) -> Option<u32> {
        match self {
            SplashPhase::Visible => Some(config::SPLASH_MS),
            SplashPhase::Leaving => Some(config::SPLASH_FADE_MS),
            SplashPhase::Gone => None,
        }
    }
}

/// Class for the brand mark, which only pulses when motion is welcome.
pub fn mark_class(reduced_motion: bool) -> Classes {
    classes!("splash-mark", (!reduced_motion).then(|| "pulse"))
}

/// Brand overlay shown over the page while it settles.
#[function_component(Splash)]
pub fn splash() -> Html {
    let phase = use_state_eq(|| SplashPhase::Visible);
    let reduced = use_reduced_motion();

    {
        let setter = phase.clone();
        use_effect_with_deps(
            move |current: &SplashPhase| {
                let current = *current;
                let timeout = current
                    .duration_ms()
                    .map(|millis| Timeout::new(millis, move || setter.set(current.next())));
                move || drop(timeout)
            },
            *phase,
        );
    }

    if *phase == SplashPhase::Gone {
        return html! {};
    }

    html! {
        <div class={classes!("splash", (*phase == SplashPhase::Leaving).then(|| "leaving"))} role="status">
            <div class={mark_class(reduced)}>
                <span class="splash-brand">{config::BRAND_NAME}</span>
                <span class="splash-tagline">{"Handmade with love"}</span>
            </div>
            <style>
                {r#"
                    .splash {
                        position: fixed;
                        inset: 0;
                        z-index: 100;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: linear-gradient(135deg, #fdfbf7 0%, #f5efe6 100%);
                        opacity: 1;
                        transition: opacity 0.6s ease;
                    }
                    .splash.leaving {
                        opacity: 0;
                        pointer-events: none;
                    }
                    .splash-mark {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 0.5rem;
                    }
                    .splash-brand {
                        font-family: 'Playfair Display', serif;
                        font-size: 3rem;
                        color: #c9a961;
                    }
                    .splash-tagline {
                        color: #6b6b6b;
                        letter-spacing: 0.2em;
                        text-transform: uppercase;
                        font-size: 0.8rem;
                    }
                    .splash-mark.pulse {
                        animation: splash-pulse 1.5s ease-in-out infinite;
                    }
                    @keyframes splash-pulse {
                        0%, 100% { transform: scale(1); opacity: 1; }
                        50% { transform: scale(1.05); opacity: 0.8; }
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_run_forward_and_stop() {
        assert_eq!(SplashPhase::Visible.next(), SplashPhase::Leaving);
        assert_eq!(SplashPhase::Leaving.next(), SplashPhase::Gone);
        assert_eq!(SplashPhase::Gone.next(), SplashPhase::Gone);
    }

    #[test]
    fn mark_pulses_only_with_full_motion() {
        assert!(mark_class(false).contains("pulse"));
        let still = mark_class(true);
        assert!(still.contains("splash-mark"));
        assert!(!still.contains("pulse"));
    }

    #[test]
    fn overlay_lives_for_display_plus_fade() {
        let mut phase = SplashPhase::Visible;
        let mut total = 0;
        while let Some(millis) = phase.duration_ms() {
            total += millis;
            phase = phase.next();
        }
        assert_eq!(total, config::SPLASH_MS + config::SPLASH_FADE_MS);
    }
}
