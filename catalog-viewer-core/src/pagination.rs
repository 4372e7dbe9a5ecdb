/// Default number of sibling page buttons shown on each side of the current page
pub const DEFAULT_THRESHOLD: usize = 2;

/// The four jump controls around the page-number buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavKind {
    First,
    Prev,
    Next,
    Last,
}

impl NavKind {
    pub fn all() -> [NavKind; 4] {
        [NavKind::First, NavKind::Prev, NavKind::Next, NavKind::Last]
    }

    pub fn label(&self) -> &'static str {
        match self {
            NavKind::First => "First",
            NavKind::Prev => "<",
            NavKind::Next => ">",
            NavKind::Last => "Last",
        }
    }
}

/// Disabled flags for the jump controls
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavDisabled {
    pub first: bool,
    pub prev: bool,
    pub next: bool,
    pub last: bool,
}

impl NavDisabled {
    pub fn get(&self, kind: NavKind) -> bool {
        match kind {
            NavKind::First => self.first,
            NavKind::Prev => self.prev,
            NavKind::Next => self.next,
            NavKind::Last => self.last,
        }
    }

    pub fn none(&self) -> bool {
        !(self.first || self.prev || self.next || self.last)
    }
}

/// Result of the window calculation: inclusive visible page range plus control state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationWindow {
    pub start: usize,
    pub end: usize,
    pub disabled: NavDisabled,
}

impl PaginationWindow {
    pub fn contains(&self, page: usize) -> bool {
        page >= self.start && page <= self.end
    }

    pub fn width(&self) -> usize {
        self.end - self.start + 1
    }
}

/// Compute which page buttons are visible and which jump controls are disabled.
///
/// `total_pages` is treated as at least 1 and `current` is clamped into
/// `[1, total_pages]`, so the returned range is never empty.
pub fn compute_window(current: usize, total_pages: usize, threshold: usize) -> PaginationWindow {
    let total = total_pages.max(1);
    let current = current.clamp(1, total);

    let mut start = current.saturating_sub(threshold);
    let mut end = current + threshold;
    let mut disabled = NavDisabled::default();

    // start edge
    if current <= 1 {
        disabled.prev = true;
        disabled.first = true;
    }
    if current < threshold + 1 {
        start = 1;
        end = threshold * 2 + 1;
        disabled.first = true;
    }

    // end edge
    if current >= total {
        disabled.next = true;
        disabled.last = true;
    }
    if current > total.saturating_sub(threshold) {
        start = total.saturating_sub(threshold * 2);
        end = total;
        disabled.last = true;
    }

    PaginationWindow {
        start: start.max(1),
        end: end.min(total),
        disabled,
    }
}

/// Current position in the catalog; the only mutable navigation state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavState {
    pub current_page: usize,
    pub total_pages: usize,
}

impl NavState {
    pub fn new(total_pages: usize) -> Self {
        Self {
            current_page: 1,
            total_pages: total_pages.max(1),
        }
    }

    pub fn contains(&self, page: usize) -> bool {
        page >= 1 && page <= self.total_pages
    }

    pub fn can_go_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Page a jump control leads to, whether or not it is enabled
    pub fn target_for(&self, kind: NavKind) -> usize {
        match kind {
            NavKind::First => 1,
            NavKind::Prev => self.current_page.saturating_sub(1),
            NavKind::Next => self.current_page + 1,
            NavKind::Last => self.total_pages,
        }
    }

    pub fn go_to_page(&mut self, page: usize) -> bool {
        if self.contains(page) {
            self.current_page = page;
            true
        } else {
            false
        }
    }

    pub fn window(&self, threshold: usize) -> PaginationWindow {
        compute_window(self.current_page, self.total_pages, threshold)
    }
}

/// One page-number button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationEntry {
    pub id: usize,
    pub visible: bool,
    pub active: bool,
}

/// One jump control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavButton {
    pub kind: NavKind,
    pub label: &'static str,
    pub target: usize,
    pub disabled: bool,
}

/// Everything needed to draw the pagination bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationControl {
    pub first: NavButton,
    pub prev: NavButton,
    pub next: NavButton,
    pub last: NavButton,
    pub entries: Vec<PaginationEntry>,
}

impl PaginationControl {
    /// Build the control from scratch for the given state
    pub fn build(state: &NavState, threshold: usize) -> Self {
        let window = state.window(threshold);
        let button = |kind: NavKind| NavButton {
            kind,
            label: kind.label(),
            target: state.target_for(kind),
            disabled: window.disabled.get(kind),
        };

        let entries = (1..=state.total_pages)
            .map(|id| PaginationEntry {
                id,
                visible: window.contains(id),
                active: id == state.current_page,
            })
            .collect();

        Self {
            first: button(NavKind::First),
            prev: button(NavKind::Prev),
            next: button(NavKind::Next),
            last: button(NavKind::Last),
            entries,
        }
    }

    pub fn button(&self, kind: NavKind) -> &NavButton {
        match kind {
            NavKind::First => &self.first,
            NavKind::Prev => &self.prev,
            NavKind::Next => &self.next,
            NavKind::Last => &self.last,
        }
    }

    pub fn visible_entries(&self) -> impl Iterator<Item = &PaginationEntry> {
        self.entries.iter().filter(|e| e.visible)
    }

    pub fn active_entry(&self) -> Option<&PaginationEntry> {
        self.entries.iter().find(|e| e.active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_at_start_of_five_pages() {
        let window = compute_window(1, 5, 2);
        assert_eq!((window.start, window.end), (1, 5));
        assert!(window.disabled.first);
        assert!(window.disabled.prev);
        assert!(!window.disabled.next);
        assert!(!window.disabled.last);
    }

    #[test]
    fn test_window_in_middle_of_twenty_pages() {
        let window = compute_window(10, 20, 2);
        assert_eq!((window.start, window.end), (8, 12));
        assert!(window.disabled.none());
    }

    #[test]
    fn test_window_near_start_disables_first_only() {
        let window = compute_window(2, 20, 2);
        assert_eq!((window.start, window.end), (1, 5));
        assert!(window.disabled.first);
        assert!(!window.disabled.prev);
        assert!(!window.disabled.next);
        assert!(!window.disabled.last);
    }

    #[test]
    fn test_window_near_end_disables_last_only() {
        let window = compute_window(19, 20, 2);
        assert_eq!((window.start, window.end), (16, 20));
        assert!(window.disabled.last);
        assert!(!window.disabled.next);
        assert!(!window.disabled.first);
        assert!(!window.disabled.prev);
    }

    #[test]
    fn test_window_at_end() {
        let window = compute_window(20, 20, 2);
        assert_eq!((window.start, window.end), (16, 20));
        assert!(window.disabled.next);
        assert!(window.disabled.last);
    }

    #[test]
    fn test_window_properties_hold_everywhere() {
        for threshold in 0..4usize {
            for total in 1..25usize {
                for current in 1..=total {
                    let window = compute_window(current, total, threshold);
                    let ctx = format!("current={} total={} threshold={}", current, total, threshold);

                    assert!(window.start >= 1, "{}", ctx);
                    assert!(window.start <= window.end, "{}", ctx);
                    assert!(window.end <= total, "{}", ctx);
                    assert!(window.width() <= threshold * 2 + 1, "{}", ctx);
                    assert!(window.contains(current), "{}", ctx);

                    if current == 1 {
                        assert!(window.disabled.first && window.disabled.prev, "{}", ctx);
                    }
                    if current == total {
                        assert!(window.disabled.next && window.disabled.last, "{}", ctx);
                    }
                    if total > threshold * 2 + 1
                        && current > threshold
                        && current <= total - threshold
                        && current > 1
                        && current < total
                    {
                        assert!(window.disabled.none(), "{}", ctx);
                    }
                }
            }
        }
    }

    #[test]
    fn test_window_width_is_full_when_enough_pages() {
        for current in 1..=20 {
            assert_eq!(compute_window(current, 20, 2).width(), 5);
        }
    }

    #[test]
    fn test_window_normalizes_out_of_range_input() {
        let window = compute_window(0, 0, 2);
        assert_eq!((window.start, window.end), (1, 1));

        let window = compute_window(99, 3, 2);
        assert_eq!((window.start, window.end), (1, 3));
        assert!(window.disabled.next && window.disabled.last);
    }

    #[test]
    fn test_nav_state_movement() {
        let mut state = NavState::new(3);
        assert_eq!(state.current_page, 1);
        assert!(!state.can_go_prev());
        assert!(state.can_go_next());

        assert!(state.go_to_page(3));
        assert!(!state.can_go_next());
        assert!(!state.go_to_page(4));
        assert!(!state.go_to_page(0));
        assert_eq!(state.current_page, 3);

        assert_eq!(state.target_for(NavKind::First), 1);
        assert_eq!(state.target_for(NavKind::Prev), 2);
        assert_eq!(state.target_for(NavKind::Next), 4);
        assert_eq!(state.target_for(NavKind::Last), 3);
    }

    #[test]
    fn test_nav_state_empty_catalog_has_one_page() {
        let state = NavState::new(0);
        assert_eq!(state.total_pages, 1);
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn test_control_marks_exactly_one_active_entry() {
        let mut state = NavState::new(12);
        for page in 1..=12 {
            state.go_to_page(page);
            let control = PaginationControl::build(&state, 2);

            assert_eq!(control.entries.len(), 12);
            assert_eq!(control.entries.iter().filter(|e| e.active).count(), 1);
            assert_eq!(control.active_entry().map(|e| e.id), Some(page));
            assert!(control.visible_entries().any(|e| e.id == page));
        }
    }

    #[test]
    fn test_control_buttons() {
        let mut state = NavState::new(20);
        state.go_to_page(10);
        let control = PaginationControl::build(&state, 2);

        let visible: Vec<usize> = control.visible_entries().map(|e| e.id).collect();
        assert_eq!(visible, vec![8, 9, 10, 11, 12]);

        assert_eq!(control.first.label, "First");
        assert_eq!(control.prev.target, 9);
        assert_eq!(control.next.target, 11);
        assert_eq!(control.last.target, 20);
        assert!(NavKind::all().iter().all(|k| !control.button(*k).disabled));
    }
}
