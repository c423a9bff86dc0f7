use std::rc::Rc;

use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;

use crate::components::spotlight::use_spotlight_image;
use crate::content::Catalog;
use crate::dom::listener::WindowListener;
use crate::section::Section;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxAction {
    Open(usize),
    Close,
    Next,
    Previous,
}

impl LightboxAction {
    pub fn from_key(key: &str) -> Option<LightboxAction> {
        match key {
            "Escape" => Some(LightboxAction::Close),
            "ArrowRight" => Some(LightboxAction::Next),
            "ArrowLeft" => Some(LightboxAction::Previous),
            _ => None,
        }
    }
}

/// Which gallery image, if any, is enlarged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lightbox {
    len: usize,
    open: Option<usize>,
}

impl Lightbox {
    pub fn closed(len: usize) -> Self {
        Self { len, open: None }
    }

    pub fn current(&self) -> Option<usize> {
        self.open
    }

    pub fn apply(self, action: LightboxAction) -> Lightbox {
        let open = match (action, self.open) {
            (LightboxAction::Open(index), _) if index < self.len => Some(index),
            (LightboxAction::Open(_), open) => open,
            (LightboxAction::Close, _) => None,
            (LightboxAction::Next, Some(index)) => Some((index + 1) % self.len),
            (LightboxAction::Previous, Some(index)) => Some((index + self.len - 1) % self.len),
            (LightboxAction::Next | LightboxAction::Previous, None) => None,
        };
        Lightbox { open, ..self }
    }
}

impl Reducible for Lightbox {
    type Action = LightboxAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = (*self).apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct GalleryProps {
    pub catalog: Rc<Catalog>,
}

#[function_component(Gallery)]
pub fn gallery(props: &GalleryProps) -> Html {
    let images = &props.catalog.gallery;
    let lightbox = use_reducer({
        let len = images.len();
        move || Lightbox::closed(len)
    });

    use_spotlight_image(Section::Gallery, images.first().map(|image| image.url.clone()));

    // Keyboard control only while an image is enlarged.
    {
        let dispatcher = lightbox.dispatcher();
        use_effect_with_deps(
            move |is_open: &bool| {
                let listener = if *is_open {
                    let listener = WindowListener::new("keydown", move |event| {
                        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                            return;
                        };
                        if let Some(action) = LightboxAction::from_key(&event.key()) {
                            event.prevent_default();
                            dispatcher.dispatch(action);
                        }
                    });
                    if let Err(err) = &listener {
                        warn!("lightbox keys unavailable: {}", err);
                    }
                    listener.ok()
                } else {
                    None
                };
                move || drop(listener)
            },
            lightbox.current().is_some(),
        );
    }

    let action = |action: LightboxAction| {
        let dispatcher = lightbox.dispatcher();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            dispatcher.dispatch(action);
        })
    };

    let tiles = images.iter().enumerate().map(|(index, image)| {
        html! {
            <div class="gallery-tile" key={image.id} onclick={action(LightboxAction::Open(index))}>
                <img src={image.url.clone()} alt={image.title.clone()} loading="lazy" />
                <div class="gallery-caption">
                    <h3>{&image.title}</h3>
                    <span>{&image.category}</span>
                </div>
            </div>
        }
    });

    let enlarged = lightbox.current().and_then(|index| images.get(index)).map(|image| {
        html! {
            <div class="lightbox" onclick={action(LightboxAction::Close)} role="dialog" aria-modal="true">
                <div class="lightbox-body" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                    <img src={image.url.clone()} alt={image.title.clone()} />
                    <button class="lightbox-close" onclick={action(LightboxAction::Close)} aria-label="Close">{"✕"}</button>
                    <button class="lightbox-prev" onclick={action(LightboxAction::Previous)} aria-label="Previous image">{"‹"}</button>
                    <button class="lightbox-next" onclick={action(LightboxAction::Next)} aria-label="Next image">{"›"}</button>
                    <h3 class="lightbox-title">{&image.title}</h3>
                </div>
            </div>
        }
    });

    html! {
        <section id={Section::Gallery.id()} class="gallery-section">
            <div class="section-container">
                <div class="section-heading">
                    <div class="section-sparkle">{"✦"}</div>
                    <h2>{"Our Gallery"}</h2>
                    <div class="section-rule"></div>
                    <p class="section-lead">{"Explore our collection of handcrafted creations"}</p>
                </div>
                <div class="gallery-grid" data-spotlight={Section::Gallery.id()}>
                    { for tiles }
                </div>
                <div class="gallery-follow">
                    <a href={props.catalog.contact.instagram_url()} target="_blank" rel="noopener noreferrer">
                        {"Follow us on Instagram"}
                    </a>
                </div>
            </div>
            { for enlarged }
            <style>
                {r#"
                    .gallery-section {
                        padding: 6rem 0;
                        background: #faf9f7;
                    }
                    .gallery-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
                        gap: 1.5rem;
                    }
                    .gallery-tile {
                        position: relative;
                        aspect-ratio: 1 / 1;
                        border-radius: 1.25rem;
                        overflow: hidden;
                        cursor: pointer;
                        transition: transform 0.3s ease;
                    }
                    .gallery-tile:hover {
                        transform: scale(1.05);
                        z-index: 10;
                    }
                    .gallery-tile img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .gallery-caption {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        flex-direction: column;
                        justify-content: flex-end;
                        padding: 1.25rem;
                        color: white;
                        background: linear-gradient(to top, rgba(0, 0, 0, 0.7), transparent 60%);
                        opacity: 0;
                        transition: opacity 0.3s ease;
                    }
                    .gallery-tile:hover .gallery-caption {
                        opacity: 1;
                    }
                    .gallery-caption h3 {
                        margin: 0 0 0.25rem;
                        font-size: 1.1rem;
                    }
                    .gallery-caption span {
                        font-size: 0.8rem;
                        color: #e0c9a6;
                    }
                    .gallery-follow {
                        text-align: center;
                        margin-top: 3rem;
                    }
                    .gallery-follow a {
                        display: inline-block;
                        padding: 1rem 2.5rem;
                        border-radius: 9999px;
                        background: linear-gradient(135deg, #833ab4, #e1306c, #fcaf45);
                        color: white;
                        text-decoration: none;
                    }
                    .lightbox {
                        position: fixed;
                        inset: 0;
                        z-index: 90;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1.5rem;
                        background: rgba(0, 0, 0, 0.9);
                    }
                    .lightbox-body {
                        position: relative;
                        max-width: 56rem;
                        width: 100%;
                    }
                    .lightbox-body img {
                        width: 100%;
                        max-height: 80vh;
                        object-fit: contain;
                        border-radius: 1rem;
                    }
                    .lightbox-body button {
                        position: absolute;
                        width: 3rem;
                        height: 3rem;
                        border: none;
                        border-radius: 50%;
                        background: white;
                        color: #2d2d2d;
                        font-size: 1.5rem;
                        cursor: pointer;
                    }
                    .lightbox-close {
                        top: -1.5rem;
                        right: -1.5rem;
                    }
                    .lightbox-prev {
                        top: 50%;
                        left: -1.5rem;
                    }
                    .lightbox-next {
                        top: 50%;
                        right: -1.5rem;
                    }
                    .lightbox-title {
                        color: white;
                        text-align: center;
                        font-family: 'Playfair Display', serif;
                    }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stepping_wraps_around() {
        let lightbox = Lightbox::closed(3).apply(LightboxAction::Open(2));
        assert_eq!(lightbox.apply(LightboxAction::Next).current(), Some(0));
        let first = Lightbox::closed(3).apply(LightboxAction::Open(0));
        assert_eq!(first.apply(LightboxAction::Previous).current(), Some(2));
    }

    #[test]
    fn stepping_does_nothing_while_closed() {
        let lightbox = Lightbox::closed(12);
        assert_eq!(lightbox.apply(LightboxAction::Next), lightbox);
        assert_eq!(lightbox.apply(LightboxAction::Previous), lightbox);
    }

    #[test]
    fn out_of_range_open_is_ignored() {
        let lightbox = Lightbox::closed(2);
        assert_eq!(lightbox.apply(LightboxAction::Open(5)).current(), None);
        let open = lightbox.apply(LightboxAction::Open(1));
        assert_eq!(open.apply(LightboxAction::Open(9)).current(), Some(1));
        assert_eq!(open.apply(LightboxAction::Close).current(), None);
    }

    #[test]
    fn unchanged_state_keeps_the_same_rc() {
        let closed = Rc::new(Lightbox::closed(4));
        let after = closed.clone().reduce(LightboxAction::Close);
        assert!(Rc::ptr_eq(&closed, &after));
        let opened = closed.clone().reduce(LightboxAction::Open(1));
        assert!(!Rc::ptr_eq(&closed, &opened));
    }

    #[test]
    fn keys_map_to_actions() {
        assert_eq!(LightboxAction::from_key("Escape"), Some(LightboxAction::Close));
        assert_eq!(LightboxAction::from_key("ArrowLeft"), Some(LightboxAction::Previous));
        assert_eq!(LightboxAction::from_key("ArrowRight"), Some(LightboxAction::Next));
        assert_eq!(LightboxAction::from_key("Enter"), None);
    }
}
