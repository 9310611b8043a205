//! Viewport scrolling.

/// How the viewport moves to a new scroll position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Jump straight to the position.
    Auto,
    /// Animate to the position.
    Smooth,
}

/// A vertical scroll position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollPosition {
    /// Offset from the top of the page, in pixels.
    pub top: u32,
    /// How the viewport gets there.
    pub behavior: ScrollBehavior,
}

impl ScrollPosition {
    /// The top of the page, reached with a smooth animation.
    ///
    /// Every completed navigation scrolls here.
    pub const TOP: ScrollPosition = ScrollPosition {
        top: 0,
        behavior: ScrollBehavior::Smooth,
    };
}

/// The surface pages are shown on.
pub trait Viewport {
    fn scroll_to(&self, position: ScrollPosition);
}

impl<V> Viewport for &V
where
    V: Viewport + ?Sized,
{
    fn scroll_to(&self, position: ScrollPosition) {
        (**self).scroll_to(position)
    }
}

/// A viewport for consumers without a screen, such as the command line.
///
/// Scroll requests are only logged.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeadlessViewport;

impl Viewport for HeadlessViewport {
    fn scroll_to(&self, position: ScrollPosition) {
        tracing::trace!(top = position.top, behavior = ?position.behavior, "scroll");
    }
}
