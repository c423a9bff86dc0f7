use log::debug;

use crate::config;
use crate::dom::viewport;
use crate::error::PageResult;
use crate::section::Section;
use crate::store::ActiveSectionWriter;

/// Scroll offset that puts an anchor just below the sticky header.
pub fn scroll_target(anchor_viewport_top: f64, scroll_y: f64, header_offset: f64) -> f64 {
    (anchor_viewport_top + scroll_y - header_offset).max(0.0)
}

/// Marks `section` active, then scrolls to it. The mark always happens,
/// even if scrolling fails.
pub fn navigate_with<M, S>(section: Section, mark_active: M, scroll: S) -> PageResult<()>
where
    M: FnOnce(Section),
    S: FnOnce(Section) -> PageResult<()>,
{
    mark_active(section);
    scroll(section)
}

fn scroll_to_section(section: Section) -> PageResult<()> {
    let top = scroll_target(
        viewport::anchor_viewport_top(section)?,
        viewport::scroll_y(),
        config::HEADER_OFFSET,
    );
    debug!("scrolling to #{} at {}px", section.id(), top);
    viewport::smooth_scroll_to(top)
}

/// Section named by a URL fragment such as `#gallery`. An empty fragment
/// names nothing.
pub fn section_from_hash(hash: &str) -> PageResult<Option<Section>> {
    let id = hash.trim_start_matches('#');
    if id.is_empty() {
        return Ok(None);
    }
    id.parse().map(Some)
}

/// Follows a deep link present when the page loads.
pub fn follow_location_hash(writer: &ActiveSectionWriter) -> PageResult<Option<Section>> {
    let Some(section) = section_from_hash(&viewport::location_hash()?)? else {
        return Ok(None);
    };
    navigate_to(writer, section)?;
    Ok(Some(section))
}

pub fn navigate_to(writer: &ActiveSectionWriter, section: Section) -> PageResult<()> {
    navigate_with(section, |section| writer.navigated(section), scroll_to_section)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PageError;
    use std::cell::RefCell;

    #[test]
    fn target_accounts_for_header() {
        // anchor 500px below the viewport top, page already scrolled 1000px
        assert_eq!(scroll_target(500.0, 1000.0, 80.0), 1420.0);
    }

    #[test]
    fn target_never_negative() {
        assert_eq!(scroll_target(0.0, 0.0, 80.0), 0.0);
    }

    #[test]
    fn fragment_names_a_section() {
        assert_eq!(section_from_hash("#products"), Ok(Some(Section::Products)));
        assert_eq!(section_from_hash("contact"), Ok(Some(Section::Contact)));
        assert_eq!(section_from_hash(""), Ok(None));
        assert_eq!(section_from_hash("#"), Ok(None));
    }

    #[test]
    fn unknown_fragment_is_an_error() {
        assert_eq!(
            section_from_hash("#checkout"),
            Err(PageError::UnknownSection("checkout".to_string()))
        );
    }

    #[test]
    fn active_section_is_set_before_scrolling() {
        let log = RefCell::new(Vec::new());
        navigate_with(
            Section::Gallery,
            |section| log.borrow_mut().push(format!("active:{}", section)),
            |section| {
                log.borrow_mut().push(format!("scroll:{}", section));
                Ok(())
            },
        )
        .unwrap();
        assert_eq!(*log.borrow(), vec!["active:gallery", "scroll:gallery"]);
    }

    #[test]
    fn failed_scroll_still_marks_active() {
        let marked = RefCell::new(None);
        let result = navigate_with(
            Section::Contact,
            |section| *marked.borrow_mut() = Some(section),
            |section| Err(PageError::MissingAnchor(section)),
        );
        assert_eq!(result, Err(PageError::MissingAnchor(Section::Contact)));
        assert_eq!(*marked.borrow(), Some(Section::Contact));
    }
}
