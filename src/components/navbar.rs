use log::warn;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::dom::listener::WindowListener;
use crate::dom::viewport;
use crate::section::Section;
use crate::store::use_active_section;

/// Whether the bar should switch to its condensed, opaque look.
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > config::SCROLLED_THRESHOLD
}

#[derive(Properties, PartialEq)]
pub struct NavigationBarProps {
    pub on_navigate: Callback<Section>,
}

#[function_component(NavigationBar)]
pub fn navigation_bar(props: &NavigationBarProps) -> Html {
    let active = use_active_section();
    let menu_open = use_state(|| false);
    let scrolled = use_state_eq(|| is_scrolled(viewport::scroll_y()));

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let listener = WindowListener::new("scroll", move |_| {
                    scrolled.set(is_scrolled(viewport::scroll_y()));
                });
                if let Err(err) = &listener {
                    warn!("navigation bar not tracking scroll: {}", err);
                }
                move || drop(listener)
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let go_to = |section: Section| {
        let menu_open = menu_open.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            on_navigate.emit(section);
        })
    };

    let links = Section::ALL.iter().map(|&section| {
        html! {
            <li>
                <a
                    href={format!("#{}", section.id())}
                    class={classes!("nav-link", (section == active).then(|| "active"))}
                    aria-current={(section == active).then(|| "true")}
                    onclick={go_to(section)}
                >
                    {section.label()}
                </a>
            </li>
        }
    });

    html! {
        <nav class={classes!("top-nav", (*scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href={format!("#{}", Section::Home.id())} class="nav-logo" onclick={go_to(Section::Home)}>
                    {config::BRAND_NAME}
                </a>
                <button
                    class={classes!("burger-menu", (*menu_open).then(|| "open"))}
                    onclick={toggle_menu}
                    aria-label="Toggle menu"
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <ul class={classes!("nav-right", (*menu_open).then(|| "mobile-menu-open"))}>
                    { for links }
                </ul>
            </div>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        padding: 1.5rem 0;
                        background: transparent;
                        transition: all 0.3s ease;
                    }
                    .top-nav.scrolled {
                        padding: 1rem 0;
                        background: rgba(255, 255, 255, 0.95);
                        backdrop-filter: blur(10px);
                        box-shadow: 0 2px 20px rgba(0, 0, 0, 0.08);
                    }
                    .nav-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        font-family: 'Playfair Display', serif;
                        font-size: 1.75rem;
                        color: #c9a961;
                        text-decoration: none;
                    }
                    .nav-right {
                        display: flex;
                        gap: 2rem;
                        list-style: none;
                        margin: 0;
                        padding: 0;
                    }
                    .nav-link {
                        position: relative;
                        color: #4a4a4a;
                        text-decoration: none;
                        font-weight: 500;
                        transition: color 0.3s ease;
                    }
                    .nav-link:hover,
                    .nav-link.active {
                        color: #c9a961;
                    }
                    .nav-link.active::after {
                        content: '';
                        position: absolute;
                        left: 0;
                        right: 0;
                        bottom: -4px;
                        height: 2px;
                        background: #c9a961;
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 5px;
                        background: none;
                        border: none;
                        cursor: pointer;
                        padding: 0.5rem;
                    }
                    .burger-menu span {
                        width: 24px;
                        height: 2px;
                        background: #4a4a4a;
                        transition: transform 0.3s ease, opacity 0.3s ease;
                    }
                    .burger-menu.open span:nth-child(1) {
                        transform: translateY(7px) rotate(45deg);
                    }
                    .burger-menu.open span:nth-child(2) {
                        opacity: 0;
                    }
                    .burger-menu.open span:nth-child(3) {
                        transform: translateY(-7px) rotate(-45deg);
                    }
                    @media (max-width: 767px) {
                        .burger-menu {
                            display: flex;
                        }
                        .nav-right {
                            display: none;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            flex-direction: column;
                            gap: 1rem;
                            padding: 1.5rem;
                            background: rgba(255, 255, 255, 0.98);
                            box-shadow: 0 8px 20px rgba(0, 0, 0, 0.08);
                        }
                        .nav-right.mobile-menu-open {
                            display: flex;
                        }
                    }
                "#}
            </style>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn condenses_only_past_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(config::SCROLLED_THRESHOLD));
        assert!(is_scrolled(config::SCROLLED_THRESHOLD + 1.0));
    }
}
