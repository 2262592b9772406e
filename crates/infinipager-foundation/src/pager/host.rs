/// Capability a paging surface exposes to the code that steers it.
///
/// Implementations own rendering, gestures and animation timing; callers
/// only observe the settled page and the fractional offset from it, and
/// request page changes.
pub trait PagedHost {
    /// Total number of pages the host lays out.
    fn page_count(&self) -> usize;

    /// The page closest to the current scroll position.
    fn current_page(&self) -> usize;

    /// Signed distance from [`current_page`](Self::current_page), in pages.
    ///
    /// Lies in `[-0.5, 0.5]`; zero once a transition has fully settled.
    fn current_page_offset_fraction(&self) -> f32;

    /// Moves to `page` instantly, without animation.
    fn scroll_to_page(&mut self, page: usize);

    /// Starts an animated transition to `page`.
    ///
    /// Out-of-range targets are clamped by the host.
    fn animate_scroll_to_page(&mut self, page: isize);

    /// Enables or disables gesture-driven scrolling.
    fn set_user_scroll_enabled(&mut self, enabled: bool);

    fn is_user_scroll_enabled(&self) -> bool;
}
