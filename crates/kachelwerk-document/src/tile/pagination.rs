// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pagination — split an ordered list into fixed-size page groups, padding the
// last group with empty slots.

use std::num::NonZeroUsize;

/// A fixed-size batch of sequential pages that becomes one composite page.
///
/// Slots keep their position in the input order; `None` marks padding or a
/// page that could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageGroup<T> {
    slots: Vec<Option<T>>,
}

impl<T> PageGroup<T> {
    /// Build a group directly from its slots.
    pub fn from_slots(slots: Vec<Option<T>>) -> Self {
        Self { slots }
    }

    /// All slots, including empty ones.
    pub fn slots(&self) -> &[Option<T>] {
        &self.slots
    }

    /// Transform every present entry. `f` may return `None` to turn a slot
    /// into an empty one (e.g. when a file fails to decode).
    pub fn filter_map<U>(self, mut f: impl FnMut(T) -> Option<U>) -> PageGroup<U> {
        PageGroup {
            slots: self
                .slots
                .into_iter()
                .map(|slot| slot.and_then(&mut f))
                .collect(),
        }
    }

    /// Consume the group, yielding the present entries in slot order.
    pub fn into_present(self) -> Vec<T> {
        self.slots.into_iter().flatten().collect()
    }
}

/// Split `items` into `ceil(len / group_size)` groups of exactly `group_size`
/// slots. The final group is padded with `None` when it is short.
pub fn paginate<T>(items: Vec<T>, group_size: NonZeroUsize) -> Vec<PageGroup<T>> {
    let size = group_size.get();
    let mut groups = Vec::with_capacity(items.len().div_ceil(size));
    let mut slots: Vec<Option<T>> = Vec::with_capacity(size);

    for item in items {
        slots.push(Some(item));
        if slots.len() == size {
            groups.push(PageGroup::from_slots(std::mem::replace(
                &mut slots,
                Vec::with_capacity(size),
            )));
        }
    }

    if !slots.is_empty() {
        slots.resize_with(size, || None);
        groups.push(PageGroup::from_slots(slots));
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four() -> NonZeroUsize {
        NonZeroUsize::new(4).unwrap()
    }

    #[test]
    fn group_count_is_ceiling_division() {
        for n in 0..=17usize {
            let groups = paginate((0..n).collect(), four());
            assert_eq!(groups.len(), n.div_ceil(4), "n = {n}");
            assert!(groups.iter().all(|g| g.slots().len() == 4));
        }
    }

    #[test]
    fn empty_input_yields_no_groups() {
        let groups: Vec<PageGroup<u32>> = paginate(Vec::new(), four());
        assert!(groups.is_empty());
    }

    #[test]
    fn short_final_group_is_padded() {
        let groups = paginate(vec!["a", "b", "c", "d", "e", "f"], four());
        assert_eq!(groups.len(), 2);
        assert_eq!(
            groups[0].slots(),
            &[Some("a"), Some("b"), Some("c"), Some("d")]
        );
        assert_eq!(groups[1].slots(), &[Some("e"), Some("f"), None, None]);
    }

    #[test]
    fn order_is_preserved_across_groups() {
        let groups = paginate((0..9).collect::<Vec<u32>>(), four());
        let flattened: Vec<u32> = groups.into_iter().flat_map(|g| g.into_present()).collect();
        assert_eq!(flattened, (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn filter_map_empties_failed_slots() {
        let group = PageGroup::from_slots(vec![Some(1), Some(2), Some(3), None]);
        let mapped = group.filter_map(|n| (n != 2).then_some(n * 10));
        assert_eq!(mapped.slots(), &[Some(10), None, Some(30), None]);
        assert_eq!(mapped.into_present(), vec![10, 30]);
    }
}
