//! Fixed-capacity presence set over small integer ids.

/// Set of integers in `[0, capacity)` with constant-time membership tests.
///
/// Used while rooting the spanning tree to remember which vertices have been
/// reached. Values outside the capacity are a caller bug and panic.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MembershipSet {
    present: Vec<bool>,
    len: usize,
}

impl MembershipSet {
    /// Creates an empty set able to hold values in `[0, capacity)`.
    ///
    /// # Examples
    /// ```
    /// use spanning_core::MembershipSet;
    ///
    /// let mut visited = MembershipSet::with_capacity(5);
    /// visited.add(3);
    /// assert!(visited.contains(3));
    /// assert!(visited.pop(3));
    /// assert!(!visited.contains(3));
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            present: vec![false; capacity],
            len: 0,
        }
    }

    /// Returns the exclusive upper bound on storable values.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.present.len()
    }

    /// Returns the number of present members.
    #[must_use]
    #[rustfmt::skip]
    pub const fn len(&self) -> usize { self.len }

    /// Returns `true` when no value is present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Marks `value` as present.
    ///
    /// # Panics
    /// Panics when `value >= self.capacity()`.
    pub fn add(&mut self, value: usize) {
        if !self.present[value] {
            self.present[value] = true;
            self.len += 1;
        }
    }

    /// Returns `true` when `value` is present. Values beyond the capacity are
    /// never present.
    #[must_use]
    pub fn contains(&self, value: usize) -> bool {
        self.present.get(value).copied().unwrap_or(false)
    }

    /// Clears `value`, returning whether it was present.
    ///
    /// # Panics
    /// Panics when `value >= self.capacity()`.
    pub fn pop(&mut self, value: usize) -> bool {
        let was_present = std::mem::replace(&mut self.present[value], false);
        if was_present {
            self.len -= 1;
        }
        was_present
    }

    /// Iterates over present values in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.present
            .iter()
            .enumerate()
            .filter_map(|(value, &present)| present.then_some(value))
    }
}
