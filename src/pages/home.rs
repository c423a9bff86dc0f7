use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::section::Section;

const HERO_BACKGROUND: &str =
    "https://images.pexels.com/photos/1454171/pexels-photo-1454171.jpeg?auto=compress&cs=tinysrgb&w=1920";

const FEATURE_CHIPS: [&str; 4] = ["✨ Handmade", "🎁 Custom Gifts", "⭐ Premium Finish", "⚡ Fast Response"];

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub on_navigate: Callback<Section>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let go_to = |section: Section| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(section);
        })
    };

    html! {
        <section id={Section::Home.id()} class="hero-section">
            <div class="hero-background" style={format!("background-image: url({});", HERO_BACKGROUND)}>
                <div class="hero-overlay"></div>
            </div>
            <div class="hero-content">
                <div class="hero-sparkle">{"✦"}</div>
                <h1>{"Handcrafted with Love"}</h1>
                <p class="hero-subtitle">{"Custom Jewelry & Hampers by"}</p>
                <p class="hero-brand">{config::BRAND_NAME}</p>
                <div class="hero-buttons">
                    <button class="hero-cta primary" onclick={go_to(Section::Products)}>{"Shop Now"}</button>
                    <button class="hero-cta secondary" onclick={go_to(Section::About)}>{"Our Story"}</button>
                </div>
                <div class="hero-chips" data-spotlight={Section::Home.id()}>
                    { for FEATURE_CHIPS.iter().map(|chip| html! { <span class="hero-chip">{*chip}</span> }) }
                </div>
            </div>
            <div class="scroll-indicator" onclick={go_to(Section::About)}>
                <span>{"Scroll"}</span>
                <span class="scroll-arrow">{"⌄"}</span>
            </div>
            <style>
                {r#"
                    .hero-section {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                    }
                    .hero-background {
                        position: absolute;
                        inset: 0;
                        background-size: cover;
                        background-position: center;
                    }
                    .hero-overlay {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(135deg, rgba(0, 0, 0, 0.75), rgba(0, 0, 0, 0.6), rgba(0, 0, 0, 0.7));
                    }
                    .hero-content {
                        position: relative;
                        z-index: 10;
                        max-width: 72rem;
                        padding: 0 1.5rem;
                        text-align: center;
                    }
                    .hero-sparkle {
                        color: #c9a961;
                        font-size: 3rem;
                        margin-bottom: 2rem;
                    }
                    .hero-content h1 {
                        font-family: 'Playfair Display', serif;
                        font-size: clamp(3rem, 7vw, 4.5rem);
                        font-weight: 600;
                        color: white;
                        margin: 0 0 1.5rem;
                    }
                    .hero-subtitle {
                        color: rgba(255, 255, 255, 0.9);
                        font-size: 1.25rem;
                        font-weight: 300;
                        margin: 0 0 0.75rem;
                    }
                    .hero-brand {
                        font-family: 'Playfair Display', serif;
                        color: #c9a961;
                        font-size: 2.25rem;
                        margin: 0 0 3rem;
                    }
                    .hero-buttons {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        justify-content: center;
                        margin-bottom: 4rem;
                    }
                    .hero-cta {
                        padding: 1rem 2.5rem;
                        border-radius: 9999px;
                        font-weight: 500;
                        cursor: pointer;
                        transition: all 0.3s ease;
                    }
                    .hero-cta.primary {
                        background: #c9a961;
                        color: white;
                        border: none;
                    }
                    .hero-cta.secondary {
                        background: transparent;
                        color: white;
                        border: 2px solid white;
                    }
                    .hero-cta:hover {
                        transform: scale(1.05);
                    }
                    .hero-chips {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 0.75rem;
                    }
                    .hero-chip {
                        padding: 0.5rem 1rem;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.1);
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        color: white;
                        font-size: 0.875rem;
                    }
                    .scroll-indicator {
                        position: absolute;
                        bottom: 3rem;
                        left: 50%;
                        transform: translateX(-50%);
                        z-index: 10;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        color: rgba(255, 255, 255, 0.6);
                        font-size: 0.75rem;
                        letter-spacing: 0.2em;
                        text-transform: uppercase;
                        cursor: pointer;
                    }
                "#}
            </style>
        </section>
    }
}
