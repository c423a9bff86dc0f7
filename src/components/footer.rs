use chrono::Datelike;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::content::ContactInfo;
use crate::section::Section;

pub fn copyright_line(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, config::BRAND_NAME)
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub contact: ContactInfo,
    pub on_navigate: Callback<Section>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = chrono::Local::now().year();

    let quick_links = Section::ALL.iter().map(|&section| {
        let on_navigate = props.on_navigate.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(section);
        });
        html! {
            <li><a href={format!("#{}", section.id())} {onclick}>{section.label()}</a></li>
        }
    });

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="footer-brand">
                    <h3>{config::BRAND_NAME}</h3>
                    <p>{"Handmade jewelry, accessories and gift hampers, crafted with care."}</p>
                </div>
                <div class="footer-links">
                    <h4>{"Quick Links"}</h4>
                    <ul>{ for quick_links }</ul>
                </div>
                <div class="footer-social">
                    <h4>{"Follow Us"}</h4>
                    <ul>
                        <li>
                            <a href={props.contact.instagram_url()} target="_blank" rel="noopener noreferrer">
                                {format!("@{}", props.contact.instagram_handle)}
                            </a>
                        </li>
                        <li><a href={props.contact.mailto()}>{props.contact.email.clone()}</a></li>
                    </ul>
                </div>
            </div>
            <div class="footer-legal">
                <p>{copyright_line(year)}</p>
            </div>
            <style>
                {r#"
                    .site-footer {
                        background: #2d2d2d;
                        color: #e8e8e8;
                        padding: 4rem 1.5rem 2rem;
                    }
                    .footer-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                        gap: 2rem;
                    }
                    .footer-brand h3 {
                        font-family: 'Playfair Display', serif;
                        color: #c9a961;
                        font-size: 1.75rem;
                        margin: 0 0 1rem;
                    }
                    .site-footer h4 {
                        margin: 0 0 1rem;
                        color: white;
                    }
                    .site-footer ul {
                        list-style: none;
                        padding: 0;
                        margin: 0;
                    }
                    .site-footer li {
                        margin-bottom: 0.5rem;
                    }
                    .site-footer a {
                        color: #bdbdbd;
                        text-decoration: none;
                        transition: color 0.3s ease;
                    }
                    .site-footer a:hover {
                        color: #c9a961;
                    }
                    .footer-legal {
                        max-width: 1200px;
                        margin: 3rem auto 0;
                        padding-top: 1.5rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        text-align: center;
                        font-size: 0.875rem;
                        color: #9e9e9e;
                    }
                "#}
            </style>
        </footer>
    }
}
