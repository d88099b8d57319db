//! Tab selection and neighbours, derived from the URL.
//!
//! The tab order is the static order of `contracts::devtools::PAGES`.

use contracts::devtools::{page_index, page_path, PAGES};
use crate::shared::swipe::SwipeDirection;
use contracts::shared::metadata::PageMetadata;

/// Part of `pathname` below the panel prefix: "/developer-tools/state" -> "/state".
///
/// Returns "" when the pathname is outside the panel.
pub fn route_path<'a>(pathname: &'a str, panel_prefix: &str) -> &'a str {
    match pathname.strip_prefix(panel_prefix) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => "",
    }
}

/// The selected tab: the route path without its leading character.
pub fn current_page(route_path: &str) -> &str {
    let mut chars = route_path.chars();
    chars.next();
    chars.as_str()
}

/// Tab before `current`. None on the first tab or for an unknown page.
pub fn prev_page(current: &str) -> Option<&'static PageMetadata> {
    let index = page_index(current)?;
    index.checked_sub(1).and_then(|i| PAGES.get(i))
}

/// Tab after `current`. An unknown page counts as being before the first tab.
pub fn next_page(current: &str) -> Option<&'static PageMetadata> {
    let next = page_index(current).map_or(0, |i| i + 1);
    PAGES.get(next)
}

/// Page a swipe leads to from `current`; the content follows the finger.
///
/// None when there is no neighbour in that direction.
pub fn swipe_target(direction: SwipeDirection, current: &str) -> Option<String> {
    let target = match direction {
        SwipeDirection::Left => next_page(current),
        SwipeDirection::Right => prev_page(current),
    };
    target.map(|page| page_path(page.name))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabActivation {
    Navigate(String),
    ScrollToTop,
}

/// What a click on tab `selected` does while `current` is shown.
pub fn tab_activation(current: &str, selected: &str) -> TabActivation {
    if selected != current {
        TabActivation::Navigate(page_path(selected))
    } else {
        TabActivation::ScrollToTop
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREFIX: &str = "/developer-tools";

    #[test]
    fn test_route_path() {
        assert_eq!(route_path("/developer-tools/state", PREFIX), "/state");
        assert_eq!(route_path("/developer-tools", PREFIX), "");
        assert_eq!(route_path("/developer-tools/", PREFIX), "/");
        assert_eq!(route_path("/developer-toolsx/state", PREFIX), "");
        assert_eq!(route_path("/config", PREFIX), "");
    }

    #[test]
    fn test_current_page() {
        assert_eq!(current_page("/state"), "state");
        assert_eq!(current_page("/statistics"), "statistics");
        assert_eq!(current_page("/"), "");
        assert_eq!(current_page(""), "");
    }

    #[test]
    fn test_current_page_keeps_deeper_segments() {
        assert_eq!(current_page("/state/light.kitchen"), "state/light.kitchen");
    }

    #[test]
    fn test_prev_page() {
        assert_eq!(prev_page("state").map(|p| p.name), Some("yaml"));
        assert_eq!(prev_page("statistics").map(|p| p.name), Some("event"));
        assert_eq!(prev_page("yaml"), None);
        assert_eq!(prev_page("unknown"), None);
        assert_eq!(prev_page(""), None);
    }

    #[test]
    fn test_next_page() {
        assert_eq!(next_page("yaml").map(|p| p.name), Some("state"));
        assert_eq!(next_page("event").map(|p| p.name), Some("statistics"));
        assert_eq!(next_page("statistics"), None);
    }

    #[test]
    fn test_next_page_from_unknown_is_first_tab() {
        assert_eq!(next_page("unknown").map(|p| p.name), Some("yaml"));
        assert_eq!(next_page("").map(|p| p.name), Some("yaml"));
    }

    #[test]
    fn test_swipe_target() {
        assert_eq!(
            swipe_target(SwipeDirection::Left, "state"),
            Some("/developer-tools/service".to_string())
        );
        assert_eq!(
            swipe_target(SwipeDirection::Right, "state"),
            Some("/developer-tools/yaml".to_string())
        );
    }

    #[test]
    fn test_swipe_target_at_the_ends() {
        assert_eq!(swipe_target(SwipeDirection::Right, "yaml"), None);
        assert_eq!(swipe_target(SwipeDirection::Left, "statistics"), None);
    }

    #[test]
    fn test_swipe_target_from_unknown_page() {
        assert_eq!(
            swipe_target(SwipeDirection::Left, "unknown"),
            Some("/developer-tools/yaml".to_string())
        );
        assert_eq!(swipe_target(SwipeDirection::Right, "unknown"), None);
    }

    #[test]
    fn test_tab_activation() {
        assert_eq!(
            tab_activation("state", "service"),
            TabActivation::Navigate("/developer-tools/service".to_string())
        );
        assert_eq!(tab_activation("state", "state"), TabActivation::ScrollToTop);
        assert_eq!(
            tab_activation("", "yaml"),
            TabActivation::Navigate("/developer-tools/yaml".to_string())
        );
    }
}
