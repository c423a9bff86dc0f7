use log::warn;
use yew::prelude::*;

use crate::config;
use crate::dom::listener::WindowListener;
use crate::dom::viewport;
use crate::section::Section;

pub fn is_visible(scroll_y: f64) -> bool {
    scroll_y > config::BACK_TO_TOP_THRESHOLD
}

#[derive(Properties, PartialEq)]
pub struct BackToTopProps {
    pub on_navigate: Callback<Section>,
}

#[function_component(BackToTop)]
pub fn back_to_top(props: &BackToTopProps) -> Html {
    let visible = use_state_eq(|| is_visible(viewport::scroll_y()));

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let listener = WindowListener::new("scroll", move |_| {
                    visible.set(is_visible(viewport::scroll_y()));
                });
                if let Err(err) = &listener {
                    warn!("back-to-top button not tracking scroll: {}", err);
                }
                move || drop(listener)
            },
            (),
        );
    }

    let onclick = props.on_navigate.reform(|_: MouseEvent| Section::Home);

    html! {
        <button
            class={classes!("back-to-top", (*visible).then(|| "visible"))}
            {onclick}
            aria-label="Back to top"
        >
            {"↑"}
            <style>
                {r#"
                    .back-to-top {
                        position: fixed;
                        right: 1.5rem;
                        bottom: 1.5rem;
                        z-index: 40;
                        width: 3rem;
                        height: 3rem;
                        border: none;
                        border-radius: 50%;
                        background: #c9a961;
                        color: white;
                        font-size: 1.25rem;
                        cursor: pointer;
                        box-shadow: 0 6px 20px rgba(201, 169, 97, 0.4);
                        opacity: 0;
                        transform: translateY(1rem);
                        pointer-events: none;
                        transition: opacity 0.3s ease, transform 0.3s ease;
                    }
                    .back-to-top.visible {
                        opacity: 1;
                        transform: translateY(0);
                        pointer-events: auto;
                    }
                "#}
            </style>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_after_threshold() {
        assert!(!is_visible(0.0));
        assert!(!is_visible(config::BACK_TO_TOP_THRESHOLD));
        assert!(is_visible(config::BACK_TO_TOP_THRESHOLD + 0.5));
    }
}
