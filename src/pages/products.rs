use std::rc::Rc;

use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::spotlight::use_spotlight_image;
use crate::content::{Catalog, ALL_CATEGORIES};
use crate::section::Section;

#[derive(Properties, PartialEq)]
pub struct ProductsProps {
    pub catalog: Rc<Catalog>,
}

#[function_component(Products)]
pub fn products(props: &ProductsProps) -> Html {
    let selected = use_state(|| ALL_CATEGORIES.to_string());
    let categories = props.catalog.categories();
    let shown = props.catalog.products_in(&selected);

    use_spotlight_image(Section::Products, shown.first().map(|product| product.image.clone()));

    let filter_buttons = categories.into_iter().map(|category| {
        let is_selected = *selected == category;
        let onclick = {
            let selected = selected.clone();
            let category = category.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                debug!("product filter: {}", category);
                selected.set(category.clone());
            })
        };
        html! {
            <button class={classes!("filter-button", is_selected.then(|| "selected"))} {onclick}>
                {category}
            </button>
        }
    });

    let contact = &props.catalog.contact;
    let cards = shown.iter().map(|product| {
        html! {
            <div class="product-card" key={product.id}>
                <div class="product-image">
                    <img src={product.image.clone()} alt={product.name.clone()} loading="lazy" />
                    <span class="product-category">{&product.category}</span>
                </div>
                <div class="product-body">
                    <h3>{&product.name}</h3>
                    <p>{&product.description}</p>
                    <a
                        class="order-button"
                        href={contact.instagram_message_url(&product.name)}
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        {"Order on Instagram"}
                    </a>
                </div>
            </div>
        }
    });

    html! {
        <section id={Section::Products.id()} class="products-section">
            <div class="section-container">
                <div class="section-heading">
                    <div class="section-sparkle">{"✦"}</div>
                    <h2>{"Our Products"}</h2>
                    <div class="section-rule"></div>
                    <p class="section-lead">{"Discover our collection of handcrafted jewelry and personalized gifts"}</p>
                </div>
                <div class="filter-bar">
                    { for filter_buttons }
                </div>
                <div class="product-grid" data-spotlight={Section::Products.id()}>
                    { for cards }
                </div>
                if shown.is_empty() {
                    <p class="empty-note">{"Nothing here yet, check back soon."}</p>
                }
            </div>
            <style>
                {r#"
                    .products-section {
                        padding: 6rem 0;
                        background: white;
                    }
                    .filter-bar {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 0.75rem;
                        margin-bottom: 3rem;
                    }
                    .filter-button {
                        padding: 0.6rem 1.5rem;
                        border-radius: 9999px;
                        border: 1px solid #e0d6c2;
                        background: white;
                        color: #5a5a5a;
                        cursor: pointer;
                        transition: all 0.3s ease;
                    }
                    .filter-button.selected,
                    .filter-button:hover {
                        background: #c9a961;
                        border-color: #c9a961;
                        color: white;
                    }
                    .product-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
                        gap: 2rem;
                    }
                    .product-card {
                        border-radius: 1.5rem;
                        overflow: hidden;
                        background: #faf9f7;
                        box-shadow: 0 10px 30px rgba(0, 0, 0, 0.06);
                        transition: transform 0.3s ease;
                    }
                    .product-card:hover {
                        transform: translateY(-8px);
                    }
                    .product-image {
                        position: relative;
                        height: 280px;
                    }
                    .product-image img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .product-category {
                        position: absolute;
                        top: 1rem;
                        left: 1rem;
                        padding: 0.3rem 0.8rem;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.9);
                        color: #c9a961;
                        font-size: 0.75rem;
                    }
                    .product-body {
                        padding: 1.5rem;
                    }
                    .product-body h3 {
                        font-family: 'Playfair Display', serif;
                        color: #2d2d2d;
                        margin: 0 0 0.5rem;
                    }
                    .product-body p {
                        color: #6b6b6b;
                        font-size: 0.9rem;
                        margin: 0 0 1.25rem;
                    }
                    .order-button {
                        display: inline-block;
                        padding: 0.7rem 1.5rem;
                        border-radius: 9999px;
                        background: linear-gradient(135deg, #833ab4, #e1306c, #fcaf45);
                        color: white;
                        text-decoration: none;
                        font-size: 0.875rem;
                    }
                    .empty-note {
                        text-align: center;
                        color: #9e9e9e;
                    }
                "#}
            </style>
        </section>
    }
}
