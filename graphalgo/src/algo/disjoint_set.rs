/// A union-find structure over the elements `0..len`, with path compression and union by rank.
///
/// Any sequence of `n` creations and `m` finds or unions runs in `O(m α(n))` amortised time.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u32>,
    set_count: usize,
}

impl DisjointSet {
    /// Creates a disjoint set where each of the `len` elements is in its own set.
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
            set_count: len,
        }
    }

    /// Returns the amount of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns true if there are no elements.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the amount of disjoint sets.
    pub fn set_count(&self) -> usize {
        self.set_count
    }

    /// Returns the representative of the set containing `element`.
    ///
    /// Every element visited on the way to the root is relinked directly to the root.
    /// This is done in a second pass instead of by recursion, so long parent chains cannot overflow the call stack.
    pub fn find(&mut self, element: usize) -> usize {
        let mut root = element;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = element;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        root
    }

    /// Merges the sets containing `a` and `b`.
    ///
    /// Returns `false` if both were already in the same set, and `true` otherwise.
    /// The root of lower rank is attached below the root of higher rank.
    /// On equal ranks, the root of `a` becomes the new root and its rank grows by one.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }

        match self.rank[root_a].cmp(&self.rank[root_b]) {
            std::cmp::Ordering::Less => self.parent[root_a] = root_b,
            std::cmp::Ordering::Greater => self.parent[root_b] = root_a,
            std::cmp::Ordering::Equal => {
                self.parent[root_b] = root_a;
                self.rank[root_a] += 1;
            }
        }

        self.set_count -= 1;
        true
    }

    /// Returns true if `a` and `b` are in the same set.
    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }
}

#[cfg(test)]
mod tests {
    use super::DisjointSet;

    #[test]
    fn test_new_disjoint_set_has_singletons() {
        let mut disjoint_set = DisjointSet::new(4);
        assert_eq!(disjoint_set.len(), 4);
        assert_eq!(disjoint_set.set_count(), 4);
        for element in 0..4 {
            assert_eq!(disjoint_set.find(element), element);
        }
        assert!(DisjointSet::new(0).is_empty());
    }

    #[test]
    fn test_union_reports_already_connected() {
        let mut disjoint_set = DisjointSet::new(5);
        assert!(disjoint_set.union(0, 1));
        assert!(disjoint_set.union(2, 3));
        assert!(disjoint_set.union(1, 3));
        assert!(!disjoint_set.union(0, 2));
        assert!(!disjoint_set.union(4, 4));
        assert_eq!(disjoint_set.set_count(), 2);

        assert!(disjoint_set.connected(0, 3));
        assert!(!disjoint_set.connected(0, 4));
    }

    #[test]
    fn test_union_by_rank_keeps_the_higher_root() {
        let mut disjoint_set = DisjointSet::new(3);
        disjoint_set.union(0, 1);
        assert_eq!(disjoint_set.find(1), 0);
        // The singleton {2} has lower rank and is attached below root 0.
        disjoint_set.union(2, 1);
        assert_eq!(disjoint_set.find(2), 0);
    }

    #[test]
    fn test_find_compresses_long_chains() {
        let len = 200_000;
        let mut disjoint_set = DisjointSet::new(len);
        // Build a chain by hand that union by rank would never create.
        for element in 1..len {
            disjoint_set.parent[element] = element - 1;
        }
        assert_eq!(disjoint_set.find(len - 1), 0);
        assert!(disjoint_set.parent.iter().all(|&parent| parent == 0));
    }
}
