use std::ops::Index;

/// Page the pager starts on: the extended index of the first real item.
pub const INITIAL_PAGE: usize = 1;

/// Item list padded with one cloned item on each side.
///
/// For items `[a, b, c]` the extended sequence is `[c, a, b, c, a]`. Landing on
/// either clone looks identical to landing on the real item it copies, which
/// is what lets a finite pager jump back without a visible change.
#[derive(Clone, Debug, PartialEq)]
pub struct ExtendedSequence<T> {
    pages: Vec<T>,
}

impl<T: Clone> ExtendedSequence<T> {
    /// Builds the extended sequence, or `None` when `items` is empty.
    pub fn new(items: &[T]) -> Option<Self> {
        let (first, last) = (items.first()?, items.last()?);
        let mut pages = Vec::with_capacity(items.len() + 2);
        pages.push(last.clone());
        pages.extend_from_slice(items);
        pages.push(first.clone());
        Some(Self { pages })
    }
}

impl<T> ExtendedSequence<T> {
    /// Number of pages, `N + 2`.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Always false: an extended sequence holds at least three pages.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of real items, `N`.
    pub fn logical_len(&self) -> usize {
        self.pages.len() - 2
    }

    /// Index of the trailing clone, `N + 1`.
    pub fn last_index(&self) -> usize {
        self.pages.len() - 1
    }

    pub fn initial_page(&self) -> usize {
        INITIAL_PAGE
    }

    /// Index of the last real item, `N`.
    pub fn last_real_page(&self) -> usize {
        self.last_index() - 1
    }

    pub fn get(&self, page: usize) -> Option<&T> {
        self.pages.get(page)
    }

    pub fn pages(&self) -> &[T] {
        &self.pages
    }

    /// The original items, without clones.
    pub fn logical_items(&self) -> &[T] {
        &self.pages[1..=self.logical_len()]
    }

    /// Whether `page` holds a cloned boundary item.
    pub fn is_clone_page(&self, page: usize) -> bool {
        page == 0 || page == self.last_index()
    }

    /// Maps an extended page index to the index of the item it shows.
    pub fn logical_index(&self, page: usize) -> usize {
        let n = self.logical_len();
        match page {
            0 => n - 1,
            p if p >= self.last_index() => 0,
            p => p - 1,
        }
    }

    /// Maps a logical item index to its real (non-clone) page.
    pub fn page_for_logical(&self, logical: usize) -> usize {
        logical.min(self.logical_len() - 1) + 1
    }
}

impl<T: PartialEq> ExtendedSequence<T> {
    /// Whether this sequence was built from exactly `items`.
    pub fn is_built_from(&self, items: &[T]) -> bool {
        self.logical_items() == items
    }
}

impl<T> Index<usize> for ExtendedSequence<T> {
    type Output = T;

    fn index(&self, page: usize) -> &T {
        &self.pages[page]
    }
}
