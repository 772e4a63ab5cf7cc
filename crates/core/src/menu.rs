//! Navigation menu highlighting
//!
//! Pure state for the side menu. The view layer renders `is_active` as the
//! active CSS class.

/// One link in the navigation menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub label: String,
    pub href: String,
}

impl NavEntry {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// Whether `href` is the link for `location` (suffix match on the full location)
pub fn matches_location(location: &str, href: &str) -> bool {
    location.ends_with(href)
}

/// Menu entries with their active flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavMenu {
    entries: Vec<NavEntry>,
    active: Vec<bool>,
}

impl NavMenu {
    /// Build the menu for the page at `location`.
    ///
    /// Every entry whose href matches is marked active, so an entry with an
    /// empty href is always active on load.
    pub fn for_location(entries: Vec<NavEntry>, location: &str) -> Self {
        let active = entries
            .iter()
            .map(|entry| matches_location(location, &entry.href))
            .collect();
        Self { entries, active }
    }

    /// Highlight exactly the clicked entry. Out-of-range indices leave the
    /// menu untouched and return `false`.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.entries.len() {
            return false;
        }
        for (i, flag) in self.active.iter_mut().enumerate() {
            *flag = i == index;
        }
        true
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active.get(index).copied().unwrap_or(false)
    }

    pub fn active_indices(&self) -> Vec<usize> {
        self.active
            .iter()
            .enumerate()
            .filter_map(|(i, active)| active.then_some(i))
            .collect()
    }

    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }
}
