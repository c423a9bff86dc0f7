use std::fmt;
use std::str::FromStr;

use crate::error::PageError;

/// The named regions of the page, in document order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    #[default]
    Home,
    About,
    Products,
    Gallery,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Products,
        Section::Gallery,
        Section::Contact,
    ];

    /// DOM id of the section element.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Products => "products",
            Section::Gallery => "gallery",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Products => "Products",
            Section::Gallery => "Gallery",
            Section::Contact => "Contact",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn next(self) -> Option<Section> {
        Section::ALL.get(self.index() + 1).copied()
    }

    pub fn from_id(id: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|section| section.id() == id)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = PageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::from_id(s).ok_or_else(|| PageError::UnknownSection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_from_str() {
        for section in Section::ALL {
            assert_eq!(section.id().parse::<Section>(), Ok(section));
        }
    }

    #[test]
    fn unknown_id_is_rejected() {
        assert_eq!(
            "shop".parse::<Section>(),
            Err(PageError::UnknownSection("shop".to_string()))
        );
    }

    #[test]
    fn document_order_matches_index() {
        for (i, section) in Section::ALL.into_iter().enumerate() {
            assert_eq!(section.index(), i);
        }
        assert_eq!(Section::Products.next(), Some(Section::Gallery));
        assert_eq!(Section::Contact.next(), None);
    }

    #[test]
    fn defaults_to_home() {
        assert_eq!(Section::default(), Section::Home);
    }
}
