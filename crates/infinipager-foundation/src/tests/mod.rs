mod controller_tests;

use crate::pager::PagedHost;

/// Host stub that records every request it receives.
#[derive(Debug, Default)]
pub(crate) struct RecordingHost {
    pub page_count: usize,
    pub page: usize,
    pub offset_fraction: f32,
    pub user_scroll_enabled: bool,
    pub jumps: Vec<usize>,
    pub animated_requests: Vec<isize>,
    pub scroll_toggles: Vec<bool>,
}

impl RecordingHost {
    pub fn new(page_count: usize, page: usize) -> Self {
        Self {
            page_count,
            page,
            user_scroll_enabled: true,
            ..Self::default()
        }
    }

    /// Moves the host as if a gesture or animation had landed on `page`.
    pub fn land_on(&mut self, page: usize, offset_fraction: f32) {
        self.page = page;
        self.offset_fraction = offset_fraction;
    }
}

impl PagedHost for RecordingHost {
    fn page_count(&self) -> usize {
        self.page_count
    }

    fn current_page(&self) -> usize {
        self.page
    }

    fn current_page_offset_fraction(&self) -> f32 {
        self.offset_fraction
    }

    fn scroll_to_page(&mut self, page: usize) {
        self.jumps.push(page);
        self.page = page;
        self.offset_fraction = 0.0;
    }

    fn animate_scroll_to_page(&mut self, page: isize) {
        self.animated_requests.push(page);
    }

    fn set_user_scroll_enabled(&mut self, enabled: bool) {
        self.scroll_toggles.push(enabled);
        self.user_scroll_enabled = enabled;
    }

    fn is_user_scroll_enabled(&self) -> bool {
        self.user_scroll_enabled
    }
}
