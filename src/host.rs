//! Seams between the coordinator and the document it drives.
//!
//! The browser implementation lives in [`crate::dom`]; tests use an in-memory
//! document. Every method is infallible from the coordinator's point of view:
//! implementations log and swallow JS failures.

use crate::progress::ScrollSample;

/// Read and write access to the host document.
pub trait Host {
    /// Handle to one element. Cheap to clone.
    type Node: Clone + PartialEq;

    /// All elements matching `selector`, in document order.
    fn query_all(&self, selector: &str) -> Vec<Self::Node>;

    /// The first element matching `selector`.
    fn query(&self, selector: &str) -> Option<Self::Node>;

    /// Descendants of `root` matching `selector`, in document order.
    fn query_within(&self, root: &Self::Node, selector: &str) -> Vec<Self::Node>;

    fn add_class(&self, node: &Self::Node, class: &str);

    fn remove_class(&self, node: &Self::Node, class: &str);

    /// Set one inline style property (`property` in CSS kebab-case).
    fn set_style(&self, node: &Self::Node, property: &str, value: &str);

    /// Current scroll offset and extents.
    fn scroll_sample(&self) -> ScrollSample;
}

/// One-shot callback run just before the next repaint.
pub type FrameCallback = Box<dyn FnOnce()>;

/// Source of "next rendered frame" callbacks.
pub trait FrameScheduler {
    /// Queue `callback` for the next frame.
    ///
    /// On error the callback is handed back so the caller can decide what to
    /// do with the work instead of losing it.
    fn request_frame(&self, callback: FrameCallback) -> Result<(), FrameCallback>;
}
