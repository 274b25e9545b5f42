#![forbid(unsafe_code)]

//! Page item wrapper.

use tabpager_core::Rect;

/// One page's content as owned by the pager engine.
///
/// The engine never looks inside `content`; it only tracks where the item
/// is placed, whether the host has mounted it, and which reuse identifier
/// (if any) routes it back into the reuse pool once detached.
#[derive(Debug, Clone, PartialEq)]
pub struct PagerItem<T> {
    content: T,
    reuse_identifier: Option<String>,
    frame: Rect,
    mounted: bool,
}

impl<T> PagerItem<T> {
    /// Wrap content that is not eligible for the reuse pool.
    ///
    /// Once detached such an item goes to the index cache.
    pub fn new(content: T) -> Self {
        Self {
            content,
            reuse_identifier: None,
            frame: Rect::ZERO,
            mounted: false,
        }
    }

    /// Wrap content tagged with a reuse identifier.
    ///
    /// An empty identifier is treated as no identifier.
    pub fn reusable(content: T, identifier: impl Into<String>) -> Self {
        let identifier = identifier.into();
        Self {
            content,
            reuse_identifier: (!identifier.is_empty()).then_some(identifier),
            frame: Rect::ZERO,
            mounted: false,
        }
    }

    /// Borrow the page content.
    pub fn content(&self) -> &T {
        &self.content
    }

    /// Mutably borrow the page content.
    pub fn content_mut(&mut self) -> &mut T {
        &mut self.content
    }

    /// Unwrap the page content.
    pub fn into_content(self) -> T {
        self.content
    }

    /// Identifier used to route the item into the reuse pool.
    pub fn reuse_identifier(&self) -> Option<&str> {
        self.reuse_identifier.as_deref()
    }

    /// Frame last assigned by the engine.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// True between the host's attach and detach callbacks.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub(crate) fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    pub(crate) fn set_mounted(&mut self, mounted: bool) {
        self.mounted = mounted;
    }
}

/// Page payload for hosts that mix plain views and controllers in one pager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageContent<V, C> {
    View(V),
    Controller(C),
}

impl<V, C> PageContent<V, C> {
    /// The view, if this page is a plain view.
    pub fn as_view(&self) -> Option<&V> {
        match self {
            Self::View(view) => Some(view),
            Self::Controller(_) => None,
        }
    }

    /// The controller, if this page is controller-backed.
    pub fn as_controller(&self) -> Option<&C> {
        match self {
            Self::View(_) => None,
            Self::Controller(controller) => Some(controller),
        }
    }

    /// Mutable access to the controller, if any.
    pub fn as_controller_mut(&mut self) -> Option<&mut C> {
        match self {
            Self::View(_) => None,
            Self::Controller(controller) => Some(controller),
        }
    }

    pub fn is_view(&self) -> bool {
        matches!(self, Self::View(_))
    }

    pub fn is_controller(&self) -> bool {
        matches!(self, Self::Controller(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_identifier_is_not_reusable() {
        let item = PagerItem::reusable(1u8, "");
        assert_eq!(item.reuse_identifier(), None);
        let item = PagerItem::reusable(1u8, "cell");
        assert_eq!(item.reuse_identifier(), Some("cell"));
    }

    #[test]
    fn new_item_is_unmounted_at_zero() {
        let item = PagerItem::new("x");
        assert!(!item.is_mounted());
        assert_eq!(item.frame(), Rect::ZERO);
        assert_eq!(item.into_content(), "x");
    }

    #[test]
    fn page_content_variants() {
        let mut page: PageContent<&str, u32> = PageContent::Controller(7);
        assert!(page.is_controller());
        assert_eq!(page.as_view(), None);
        if let Some(controller) = page.as_controller_mut() {
            *controller += 1;
        }
        assert_eq!(page.as_controller(), Some(&8));
        let view: PageContent<&str, u32> = PageContent::View("v");
        assert!(view.is_view());
        assert_eq!(view.as_view(), Some(&"v"));
    }
}
