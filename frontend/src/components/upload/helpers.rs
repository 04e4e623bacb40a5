//! Small DOM helpers for the upload page.

use web_sys::{DragEvent, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::NodeRef;

/// Keeps the browser from opening a dragged file and stops the event from
/// reaching outer drop targets.
pub fn suppress_drag(event: &DragEvent) {
    event.prevent_default();
    event.stop_propagation();
}

/// Smoothly scrolls the referenced element into view, if it is mounted.
pub fn scroll_into_view(node_ref: &NodeRef, block: ScrollLogicalPosition) {
    if let Some(element) = node_ref.cast::<HtmlElement>() {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(block);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}
