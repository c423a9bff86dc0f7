use yew::prelude::*;

use crate::content::ContactInfo;
use crate::section::Section;

#[derive(Clone, Debug, PartialEq)]
pub struct ContactMethod {
    pub title: &'static str,
    pub detail: String,
    pub action: &'static str,
    pub link: String,
    pub color: &'static str,
}

impl ContactMethod {
    fn opens_new_tab(&self) -> bool {
        !self.link.starts_with("mailto:")
    }
}

/// Cards shown in the contact section; WhatsApp only when a number is set.
pub fn contact_methods(contact: &ContactInfo) -> Vec<ContactMethod> {
    let mut methods = vec![
        ContactMethod {
            title: "Instagram",
            detail: format!("@{}", contact.instagram_handle),
            action: "Follow Us",
            link: contact.instagram_url(),
            color: "#E1306C",
        },
        ContactMethod {
            title: "Email",
            detail: contact.email.clone(),
            action: "Email Us",
            link: contact.mailto(),
            color: "#c9a961",
        },
    ];
    if !contact.whatsapp_number.trim().is_empty() {
        methods.push(ContactMethod {
            title: "WhatsApp",
            detail: contact.whatsapp_number.clone(),
            action: "Chat With Us",
            link: contact.whatsapp_url(),
            color: "#25D366",
        });
    }
    methods
}

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub contact: ContactInfo,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let methods = contact_methods(&props.contact);

    html! {
        <section id={Section::Contact.id()} class="contact-section">
            <div class="section-container">
                <div class="section-heading">
                    <div class="section-sparkle">{"✦"}</div>
                    <h2>{"Get in Touch"}</h2>
                    <div class="section-rule"></div>
                    <p class="section-lead">{"Have a question or want to place a custom order? We'd love to hear from you"}</p>
                </div>
                <div class="contact-grid" data-spotlight={Section::Contact.id()}>
                    { for methods.iter().map(|method| html! {
                        <a
                            key={method.title}
                            class="contact-card"
                            href={method.link.clone()}
                            target={if method.opens_new_tab() { "_blank" } else { "_self" }}
                            rel="noopener noreferrer"
                        >
                            <div class="contact-icon" style={format!("color: {}; background-color: {}15;", method.color, method.color)}>
                                {method.title.chars().next().unwrap_or('•')}
                            </div>
                            <h3>{method.title}</h3>
                            <p>{method.detail.clone()}</p>
                            <span class="contact-action" style={format!("color: {};", method.color)}>{method.action}{" →"}</span>
                        </a>
                    }) }
                </div>
                <div class="form-callout">
                    <h3>{"Contact Us via Google Form"}</h3>
                    <p>
                        {"Please fill out our inquiry form and we'll get back to you soon. For collaborations or custom requests, you can also message us on Instagram."}
                    </p>
                    <a class="form-button" href={props.contact.form_url.clone()} target="_blank" rel="noopener noreferrer">
                        {"Open Contact Form"}
                    </a>
                    <div class="form-facts">
                        <span>{"🌍 Serving worldwide"}</span>
                        <span>{"⏱ Response within 24 hours"}</span>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                    .contact-section {
                        padding: 6rem 0;
                        background: white;
                    }
                    .section-lead {
                        max-width: 42rem;
                        margin: 1.5rem auto 0;
                        color: #5a5a5a;
                    }
                    .contact-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                        gap: 1.5rem;
                        max-width: 48rem;
                        margin: 0 auto 4rem;
                    }
                    .contact-card {
                        display: block;
                        padding: 2rem;
                        border-radius: 1.5rem;
                        background: #faf9f7;
                        text-align: center;
                        text-decoration: none;
                        color: inherit;
                        transition: transform 0.3s ease, box-shadow 0.3s ease;
                    }
                    .contact-card:hover {
                        transform: translateY(-6px);
                        box-shadow: 0 15px 35px rgba(0, 0, 0, 0.08);
                    }
                    .contact-icon {
                        width: 3.5rem;
                        height: 3.5rem;
                        margin: 0 auto 1rem;
                        border-radius: 1rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.5rem;
                        font-weight: 600;
                    }
                    .contact-card h3 {
                        font-family: 'Playfair Display', serif;
                        color: #2d2d2d;
                        margin: 0 0 0.5rem;
                    }
                    .contact-card p {
                        color: #6b6b6b;
                        margin: 0 0 1rem;
                    }
                    .contact-action {
                        font-weight: 500;
                    }
                    .form-callout {
                        max-width: 48rem;
                        margin: 0 auto;
                        padding: 3rem 2rem;
                        border-radius: 1.5rem;
                        text-align: center;
                        background: linear-gradient(135deg, #fdfbf7, #f5efe6);
                    }
                    .form-callout h3 {
                        font-family: 'Playfair Display', serif;
                        font-size: 1.75rem;
                        color: #2d2d2d;
                        margin: 0 0 1rem;
                    }
                    .form-callout p {
                        color: #5a5a5a;
                        margin: 0 0 2rem;
                    }
                    .form-button {
                        display: inline-block;
                        padding: 1rem 2.5rem;
                        border-radius: 9999px;
                        background: #c9a961;
                        color: white;
                        text-decoration: none;
                        font-weight: 500;
                    }
                    .form-facts {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 2rem;
                        margin-top: 2rem;
                        color: #6b6b6b;
                        font-size: 0.875rem;
                    }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(whatsapp: &str) -> ContactInfo {
        ContactInfo {
            instagram_handle: "spark_soul.24".to_string(),
            email: "hello@example.com".to_string(),
            whatsapp_number: whatsapp.to_string(),
            form_url: "https://forms.example.com".to_string(),
        }
    }

    #[test]
    fn whatsapp_card_needs_a_number() {
        let titles: Vec<_> = contact_methods(&contact("")).iter().map(|m| m.title).collect();
        assert_eq!(titles, vec!["Instagram", "Email"]);

        let methods = contact_methods(&contact("441234567890"));
        let whatsapp = methods.last().unwrap();
        assert_eq!(whatsapp.title, "WhatsApp");
        assert!(whatsapp.link.starts_with("https://wa.me/441234567890?text=Hi%20Spark%20Soul"));
    }

    #[test]
    fn only_mail_stays_in_the_same_tab() {
        let methods = contact_methods(&contact("1"));
        let same_tab: Vec<_> = methods.iter().filter(|m| !m.opens_new_tab()).map(|m| m.title).collect();
        assert_eq!(same_tab, vec!["Email"]);
    }
}
