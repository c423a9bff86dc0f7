use log::{debug, info, warn};
use yew::prelude::*;

use crate::components::back_to_top::BackToTop;
use crate::components::follower::{DecorativeFollower, FollowerKind};
use crate::components::footer::Footer;
use crate::components::navbar::NavigationBar;
use crate::components::splash::Splash;
use crate::components::spotlight::{ImageRegistry, SpotlightController};
use crate::content::Catalog;
use crate::dom::viewport;
use crate::motion::preference::MotionPreference;
use crate::navigation;
use crate::observer::use_section_observer;
use crate::pages::{about::About, contact::Contact, gallery::Gallery, home::Home, products::Products};
use crate::section::Section;
use crate::store::{ActiveSection, ActiveSectionState, ActiveSectionWriter};

#[derive(Properties, PartialEq)]
pub struct PageShellProps {
    #[prop_or(FollowerKind::Ring)]
    pub follower: FollowerKind,
}

/// Owns the active-section store and lays out the whole page around it.
#[function_component(PageShell)]
pub fn page_shell(props: &PageShellProps) -> Html {
    let store = use_reducer(ActiveSectionState::default);
    let writer = ActiveSectionWriter::new(store.dispatcher());
    let active = ActiveSection::new(store.clone());
    let registry = use_state(ImageRegistry::default);
    let catalog = use_memo(|_| Catalog::embedded(), ());
    let motion = *use_state(|| {
        let reduced = viewport::prefers_reduced_motion();
        if reduced {
            info!("Reduced motion requested, decorative animation disabled");
        }
        MotionPreference { reduced }
    });

    use_section_observer(writer.clone(), store.section());

    // Deep links like `/#gallery` land on their section once mounted.
    {
        let writer = writer.clone();
        use_effect_with_deps(
            move |_| {
                match navigation::follow_location_hash(&writer) {
                    Ok(Some(section)) => debug!("followed deep link to #{}", section.id()),
                    Ok(None) => {}
                    Err(err) => warn!("deep link ignored: {}", err),
                }
                || ()
            },
            (),
        );
    }

    let on_navigate = {
        let writer = writer.clone();
        Callback::from(move |section: Section| {
            if let Err(err) = navigation::navigate_to(&writer, section) {
                warn!("navigation to #{} incomplete: {}", section.id(), err);
            }
        })
    };

    html! {
        <ContextProvider<MotionPreference> context={motion}>
            <ContextProvider<ActiveSection> context={active}>
                <ContextProvider<ImageRegistry> context={(*registry).clone()}>
                    <Splash />
                    <div class="page-shell">
                        <NavigationBar on_navigate={on_navigate.clone()} />
                        <SpotlightController />
                        <DecorativeFollower kind={props.follower} />
                        <main>
                            <Home on_navigate={on_navigate.clone()} />
                            <About contact={catalog.contact.clone()} />
                            <Products catalog={catalog.clone()} />
                            <Gallery catalog={catalog.clone()} />
                            <Contact contact={catalog.contact.clone()} />
                        </main>
                        <Footer contact={catalog.contact.clone()} on_navigate={on_navigate.clone()} />
                        <BackToTop {on_navigate} />
                    </div>
                </ContextProvider<ImageRegistry>>
            </ContextProvider<ActiveSection>>
        </ContextProvider<MotionPreference>>
    }
}
