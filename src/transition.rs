//! Page entrance and exit fades.
//!
//! Same-site link clicks are delayed long enough for the exit animation to
//! play; everything else navigates normally.

#[cfg(test)]
#[path = "transition_test.rs"]
mod transition_test;

/// Body class present for the first moments after load.
pub const ENTER_CLASS: &str = "page-enter";

/// Body class that plays the exit animation.
pub const EXIT_CLASS: &str = "page-exit";

/// Attribute that opts a link out of the exit fade.
pub const OPT_OUT_ATTRIBUTE: &str = "data-no-transition";

/// What the router needs to know about a clicked link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkInfo<'a> {
    /// Host the link resolves to.
    pub hostname: &'a str,
    /// Raw `href` attribute, if set.
    pub href: Option<&'a str>,
    pub opted_out: bool,
}

/// Decision for one link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkRoute {
    /// Let the browser handle it.
    Native,
    /// Play the exit fade, then navigate to the contained `href`.
    Fade(String),
}

/// Decide whether a click on `link` from a page on `page_hostname` fades out.
#[must_use]
pub fn route_link(link: &LinkInfo<'_>, page_hostname: &str) -> LinkRoute {
    if link.hostname != page_hostname || link.opted_out {
        return LinkRoute::Native;
    }
    match link.href {
        Some(href) if !href.is_empty() && !href.starts_with('#') => LinkRoute::Fade(href.to_owned()),
        _ => LinkRoute::Native,
    }
}
