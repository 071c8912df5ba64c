//! Arrow-key account cycling for the hovered card.

/// Keys the showcase reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleKey {
    Previous,
    Next,
}

impl CycleKey {
    /// Map a DOM key name (`"ArrowLeft"`, `"ArrowRight"`) to a cycle key
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" => Some(CycleKey::Previous),
            "ArrowRight" => Some(CycleKey::Next),
            _ => None,
        }
    }
}

/// Index reached from `current` by one step, wrapping at both ends.
/// Returns `None` when there is nothing to cycle through.
pub fn cycle_index(current: usize, total: usize, key: CycleKey) -> Option<usize> {
    if total <= 1 {
        return None;
    }
    let next = match key {
        CycleKey::Previous => (current + total - 1) % total,
        CycleKey::Next => (current + 1) % total,
    };
    Some(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_both_ways() {
        assert_eq!(cycle_index(0, 3, CycleKey::Previous), Some(2));
        assert_eq!(cycle_index(2, 3, CycleKey::Next), Some(0));
        assert_eq!(cycle_index(1, 3, CycleKey::Next), Some(2));
    }

    #[test]
    fn single_account_does_not_cycle() {
        assert_eq!(cycle_index(0, 1, CycleKey::Next), None);
        assert_eq!(cycle_index(0, 0, CycleKey::Previous), None);
    }

    #[test]
    fn key_names() {
        assert_eq!(CycleKey::from_key_name("ArrowLeft"), Some(CycleKey::Previous));
        assert_eq!(CycleKey::from_key_name("ArrowRight"), Some(CycleKey::Next));
        assert_eq!(CycleKey::from_key_name("Enter"), None);
    }
}
