use yew::prelude::*;

use crate::components::spotlight::use_spotlight_image;
use crate::content::ContactInfo;
use crate::section::Section;

const STORY_IMAGE: &str = "/images/green-buta-stone-jewelry.jpg";

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        icon: "♥",
        title: "Handmade with Love",
        description: "Every piece is carefully crafted with attention to detail and passion",
    },
    Feature {
        icon: "✦",
        title: "Unique Designs",
        description: "Original creations that reflect individuality and style",
    },
    Feature {
        icon: "🎁",
        title: "Custom Creations",
        description: "Personalized hampers and jewelry for your special moments",
    },
];

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub contact: ContactInfo,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    use_spotlight_image(Section::About, Some(STORY_IMAGE.to_string()));

    html! {
        <section id={Section::About.id()} class="about-section">
            <div class="section-container">
                <div class="section-heading">
                    <div class="section-sparkle">{"✦"}</div>
                    <h2>{"Our Story"}</h2>
                    <div class="section-rule"></div>
                </div>
                <div class="about-grid">
                    <div class="about-image-frame" data-spotlight={Section::About.id()}>
                        <img src={STORY_IMAGE} alt="Handmade jewelry" loading="lazy" />
                    </div>
                    <div class="about-text">
                        <h3>{"Welcome to Spark Soul"}</h3>
                        <p>
                            {"Spark Soul is a small creative business founded by a passionate artisan who believes in the magic of handmade designs and meaningful gifts. Every piece we create tells a story and carries the warmth of personal touch."}
                        </p>
                        <p>
                            {"Specializing in handcrafted jewelry, customized hampers, elegant bracelets, and unique accessories, we pour love and creativity into everything we make. Each creation is designed to spark joy and celebrate life's special moments."}
                        </p>
                        <p>
                            {"Whether you're looking for a thoughtful gift or something special for yourself, we're here to bring your vision to life with personalized care and attention to detail."}
                        </p>
                        <a class="about-follow" href={props.contact.instagram_url()} target="_blank" rel="noopener noreferrer">
                            {format!("Follow us @{}", props.contact.instagram_handle)}
                        </a>
                    </div>
                </div>
                <div class="feature-grid">
                    { for FEATURES.iter().map(|feature| html! {
                        <div class="feature-card" key={feature.title}>
                            <div class="feature-icon">{feature.icon}</div>
                            <h4>{feature.title}</h4>
                            <p>{feature.description}</p>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                    .about-section {
                        padding: 6rem 0;
                        background: #faf9f7;
                    }
                    .section-container {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                    }
                    .section-heading {
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    .section-sparkle {
                        color: #c9a961;
                        font-size: 2.5rem;
                        margin-bottom: 1.5rem;
                    }
                    .section-heading h2 {
                        font-family: 'Playfair Display', serif;
                        font-size: clamp(2.25rem, 5vw, 3rem);
                        font-weight: 600;
                        color: #2d2d2d;
                        margin: 0 0 1rem;
                    }
                    .section-rule {
                        width: 5rem;
                        height: 2px;
                        margin: 0 auto;
                        background: #c9a961;
                        border-radius: 9999px;
                    }
                    .about-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                        gap: 3rem;
                        align-items: center;
                        margin-bottom: 5rem;
                    }
                    .about-image-frame img {
                        width: 100%;
                        height: 500px;
                        object-fit: cover;
                        border-radius: 1.5rem;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.15);
                    }
                    .about-text h3 {
                        font-family: 'Playfair Display', serif;
                        font-size: 2rem;
                        color: #2d2d2d;
                        margin: 0 0 1.5rem;
                    }
                    .about-text p {
                        color: #5a5a5a;
                        line-height: 1.8;
                        margin: 0 0 1rem;
                    }
                    .about-follow {
                        display: inline-block;
                        margin-top: 1rem;
                        color: #c9a961;
                        font-weight: 500;
                        text-decoration: none;
                    }
                    .feature-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                        gap: 2rem;
                    }
                    .feature-card {
                        padding: 2rem;
                        border-radius: 1.5rem;
                        background: white;
                        text-align: center;
                        box-shadow: 0 10px 30px rgba(0, 0, 0, 0.06);
                        transition: transform 0.3s ease;
                    }
                    .feature-card:hover {
                        transform: translateY(-10px);
                    }
                    .feature-icon {
                        width: 4rem;
                        height: 4rem;
                        margin: 0 auto 1.5rem;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: linear-gradient(135deg, #c9a961, #e0c9a6);
                        color: white;
                        font-size: 1.5rem;
                    }
                    .feature-card h4 {
                        font-family: 'Playfair Display', serif;
                        font-size: 1.25rem;
                        color: #2d2d2d;
                        margin: 0 0 0.75rem;
                    }
                    .feature-card p {
                        color: #6b6b6b;
                        margin: 0;
                    }
                "#}
            </style>
        </section>
    }
}
