//! Infinite-loop controller.
//!
//! The controller is a two-state machine:
//!
//! ```text
//!              page changed
//! Scrollable ───────────────▶ LockedPendingReconcile
//!     ▲                                │
//!     └──────── reconcile done ────────┘
//! ```
//!
//! While locked, user scrolling on the host is disabled so a second gesture
//! cannot start before the corrective jump lands.

use smallvec::SmallVec;

use super::config::PagerConfig;
use super::extended_sequence::INITIAL_PAGE;
use super::host::PagedHost;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollLock {
    Scrollable,
    LockedPendingReconcile,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageDirection {
    Previous,
    Next,
}

impl PageDirection {
    pub fn delta(self) -> isize {
        match self {
            PageDirection::Previous => -1,
            PageDirection::Next => 1,
        }
    }
}

/// Outcome of a reconcile pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reconciliation {
    /// Settled on a clone page and jumped to the real page showing the same item.
    Jumped { from: usize, to: usize },
    /// Settled on a real page; nothing to correct.
    Stayed { page: usize },
}

/// What happened during one [`InfinitePagerController::on_frame`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PagerEvent {
    PageChanged { page: usize },
    Reconciled(Reconciliation),
}

pub type PagerEvents = SmallVec<[PagerEvent; 2]>;

/// Returns whether `offset_fraction` is within `tolerance` of a page boundary.
pub fn is_settled_within(offset_fraction: f32, tolerance: f32) -> bool {
    (-tolerance..=tolerance).contains(&offset_fraction)
}

/// Keeps a pager over an extended sequence looping endlessly.
///
/// The controller never animates on its own except for
/// [`scroll_to_adjacent`](Self::scroll_to_adjacent); its corrective jumps are
/// instantaneous so the swap between a clone and its original is invisible.
#[derive(Clone, Debug)]
pub struct InfinitePagerController {
    page_count: usize,
    settle_tolerance: f32,
    lock: ScrollLock,
    observed_page: usize,
}

impl InfinitePagerController {
    /// Creates a controller for a host with `page_count` pages (`N + 2`).
    pub fn new(page_count: usize, settle_tolerance: f32) -> Self {
        debug_assert!(page_count >= 3, "extended sequences hold at least three pages");
        Self {
            page_count,
            settle_tolerance,
            lock: ScrollLock::Scrollable,
            observed_page: INITIAL_PAGE,
        }
    }

    pub fn from_config(page_count: usize, config: &PagerConfig) -> Self {
        Self::new(page_count, config.settle_tolerance)
    }

    pub fn initial_page(&self) -> usize {
        INITIAL_PAGE
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn lock(&self) -> ScrollLock {
        self.lock
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.lock == ScrollLock::LockedPendingReconcile
    }

    pub fn settle_tolerance(&self) -> f32 {
        self.settle_tolerance
    }

    pub fn set_settle_tolerance(&mut self, tolerance: f32) {
        self.settle_tolerance = tolerance;
    }

    /// Puts `host` on the initial page with user scrolling enabled.
    pub fn attach<H: PagedHost>(&mut self, host: &mut H) {
        host.scroll_to_page(INITIAL_PAGE);
        host.set_user_scroll_enabled(true);
        self.lock = ScrollLock::Scrollable;
        self.observed_page = INITIAL_PAGE;
    }

    /// Re-targets the controller at a host whose page count changed.
    ///
    /// The host keeps its page when it is still a real page, otherwise it
    /// jumps to the nearest real one.
    pub fn reset<H: PagedHost>(&mut self, page_count: usize, host: &mut H) {
        debug_assert!(page_count >= 3, "extended sequences hold at least three pages");
        self.page_count = page_count;
        let page = host.current_page().clamp(INITIAL_PAGE, page_count - 2);
        host.scroll_to_page(page);
        host.set_user_scroll_enabled(true);
        self.lock = ScrollLock::Scrollable;
        self.observed_page = page;
        log::debug!("pager reset to {page_count} pages, showing page {page}");
    }

    /// Handles a change of the host's current page.
    pub fn on_page_changed<H: PagedHost>(&mut self, new_page: usize, host: &mut H) {
        log::debug!("page changed {} -> {new_page}, locking", self.observed_page);
        self.observed_page = new_page;
        self.lock = ScrollLock::LockedPendingReconcile;
        host.set_user_scroll_enabled(false);
    }

    pub fn is_settled(&self, offset_fraction: f32) -> bool {
        is_settled_within(offset_fraction, self.settle_tolerance)
    }

    /// Jumps off a clone page if the host rests on one, then unlocks.
    pub fn reconcile<H: PagedHost>(&mut self, host: &mut H) -> Reconciliation {
        let current = host.current_page();
        let last_index = self.page_count - 1;
        let target = if current == last_index {
            Some(INITIAL_PAGE)
        } else if current == 0 {
            Some(last_index - 1)
        } else {
            None
        };

        let outcome = match target {
            Some(to) => {
                host.scroll_to_page(to);
                self.observed_page = to;
                log::debug!("reconciled clone page {current} -> {to}");
                Reconciliation::Jumped { from: current, to }
            }
            None => Reconciliation::Stayed { page: current },
        };

        self.lock = ScrollLock::Scrollable;
        host.set_user_scroll_enabled(true);
        outcome
    }

    /// Starts an animated move to the neighbouring page.
    ///
    /// No bounds are applied here: the host clamps, and a landing on a clone
    /// page is corrected by the next reconcile.
    pub fn scroll_to_adjacent<H: PagedHost>(&mut self, direction: PageDirection, host: &mut H) {
        let target = host.current_page() as isize + direction.delta();
        log::trace!("scroll to adjacent {direction:?} -> {target}");
        host.animate_scroll_to_page(target);
    }

    /// Runs the event-driven part of the controller for one frame.
    ///
    /// Call after the host has advanced its own animations for the frame.
    pub fn on_frame<H: PagedHost>(&mut self, host: &mut H) -> PagerEvents {
        let mut events = PagerEvents::new();

        let page = host.current_page();
        if page != self.observed_page {
            self.on_page_changed(page, host);
            events.push(PagerEvent::PageChanged { page });
        }

        if self.is_scroll_locked() && self.is_settled(host.current_page_offset_fraction()) {
            events.push(PagerEvent::Reconciled(self.reconcile(host)));
        }

        events
    }
}
