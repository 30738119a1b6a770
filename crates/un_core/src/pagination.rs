use serde::Serialize;

/// Pages shown on either side of the current one.
pub const DEFAULT_RADIUS: u32 = 2;

/// The clickable controls of a "page N of M" navigator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    pub previous: Option<u32>,
    pub pages: Vec<u32>,
    pub next: Option<u32>,
    pub current: u32,
}

impl PageWindow {
    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    pub fn offers(&self, page: u32) -> bool {
        self.pages.contains(&page) || self.previous == Some(page) || self.next == Some(page)
    }
}

/// Computes `[max(1, current - radius) ..= min(total, current + radius)]`
/// with previous/next targets. The window shrinks at the edges instead of
/// sliding to keep `2 * radius + 1` entries.
pub fn compute_window(current: u32, total: u32, radius: u32) -> PageWindow {
    let total = total.max(1);
    let current = current.clamp(1, total);
    let start = current.saturating_sub(radius).max(1);
    let end = current.saturating_add(radius).min(total);

    PageWindow {
        previous: (current > 1).then(|| current - 1),
        pages: (start..=end).collect(),
        next: (current < total).then(|| current + 1),
        current,
    }
}

/// Server-confirmed pagination counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageState {
    pub current_page: u32,
    pub total_pages: u32,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
        }
    }
}

impl PageState {
    /// Whether `page` may be requested at all.
    pub fn accepts(&self, page: u32) -> bool {
        page >= 1 && page <= self.total_pages
    }

    pub fn window(&self) -> PageWindow {
        compute_window(self.current_page, self.total_pages, DEFAULT_RADIUS)
    }

    /// Only multi-page results render a navigator.
    pub fn navigator(&self) -> Option<PageWindow> {
        (self.total_pages > 1).then(|| self.window())
    }
}
