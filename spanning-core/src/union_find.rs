//! Union-find (disjoint set union) used by Kruskal's algorithm.
//!
//! Sets are merged by height and `find` compresses paths. Each slot is either
//! a root carrying the height of its tree or a child pointing at its parent;
//! the two cases are kept apart by [`Slot`] rather than by sign tricks.
//!
//! Indices outside `0..len` are a caller bug and panic.

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Slot {
    Root { height: usize },
    Child { parent: usize },
}

/// Partition of `{0, …, n - 1}` into disjoint trees identified by their root.
#[derive(Clone, Debug)]
pub struct DisjointSet {
    slots: Vec<Slot>,
}

impl DisjointSet {
    /// Creates `n` singleton sets.
    ///
    /// # Examples
    /// ```
    /// use spanning_core::DisjointSet;
    ///
    /// let mut set = DisjointSet::new(4);
    /// assert!(set.union(0, 1));
    /// assert_eq!(set.find(0), set.find(1));
    /// assert_ne!(set.find(0), set.find(2));
    /// ```
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            slots: vec![Slot::Root { height: 0 }; n],
        }
    }

    /// Returns the number of elements in the partition.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` when the partition holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the root of the set containing `node`, pointing every visited
    /// element directly at that root.
    ///
    /// # Panics
    /// Panics when `node >= self.len()`.
    pub fn find(&mut self, node: usize) -> usize {
        let mut root = node;
        while let Slot::Child { parent } = self.slots[root] {
            root = parent;
        }

        let mut current = node;
        while let Slot::Child { parent } = self.slots[current] {
            self.slots[current] = Slot::Child { parent: root };
            current = parent;
        }

        root
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// The shorter tree is attached beneath the taller one. On equal height
    /// `left`'s root goes beneath `right`'s root, whose height then grows by
    /// one. Returns `false` when both were already in the same set.
    ///
    /// # Panics
    /// Panics when either index is `>= self.len()`.
    pub fn union(&mut self, left: usize, right: usize) -> bool {
        let left_root = self.find(left);
        let right_root = self.find(right);
        if left_root == right_root {
            return false;
        }

        let left_height = self.height(left_root);
        let right_height = self.height(right_root);

        if left_height > right_height {
            self.slots[right_root] = Slot::Child { parent: left_root };
        } else if left_height < right_height {
            self.slots[left_root] = Slot::Child { parent: right_root };
        } else {
            self.slots[left_root] = Slot::Child { parent: right_root };
            self.slots[right_root] = Slot::Root {
                height: right_height.saturating_add(1),
            };
        }
        true
    }

    /// Returns `true` when `left` and `right` belong to the same set.
    ///
    /// # Panics
    /// Panics when either index is `>= self.len()`.
    pub fn same(&mut self, left: usize, right: usize) -> bool {
        self.find(left) == self.find(right)
    }

    fn height(&self, root: usize) -> usize {
        match self.slots[root] {
            Slot::Root { height } => height,
            Slot::Child { .. } => 0,
        }
    }
}
