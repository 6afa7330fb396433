//! Disjoint-set forest used during tour construction.
//!
//! The constructor merges the components of partially built tour fragments and
//! asks whether a candidate edge would join a fragment to itself. Attachment is
//! deliberately fixed (the left representative always becomes a child of the
//! right one) so the forest shape is reproducible for a given edge order.

/// Union-find over nodes `0..len` with path compression and component sizes.
///
/// # Examples
/// ```
/// use voraz_core::DisjointSetForest;
///
/// let mut forest = DisjointSetForest::new(4);
/// assert!(forest.union(0, 1));
/// assert!(!forest.union(1, 0));
/// assert_eq!(forest.component_size(0), 2);
/// assert_eq!(forest.find(0), forest.find(1));
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSetForest {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DisjointSetForest {
    /// Creates a forest of `node_count` singleton components.
    #[must_use]
    pub fn new(node_count: usize) -> Self {
        Self {
            parent: (0..node_count).collect(),
            size: vec![1; node_count],
        }
    }

    /// Returns the number of nodes tracked by the forest.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` when the forest tracks no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the representative of `node`'s component.
    ///
    /// Every node visited on the way to the representative is re-parented
    /// directly onto it.
    ///
    /// # Panics
    /// Panics when `node >= self.len()`.
    pub fn find(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    /// Merges the components of `left` and `right`.
    ///
    /// Returns `false` without changing anything when both already share a
    /// representative. Otherwise `left`'s representative is attached beneath
    /// `right`'s and the sizes are combined.
    ///
    /// # Panics
    /// Panics when either node is out of range.
    pub fn union(&mut self, left: usize, right: usize) -> bool {
        let left_root = self.find(left);
        let right_root = self.find(right);
        if left_root == right_root {
            return false;
        }
        self.parent[left_root] = right_root;
        self.size[right_root] = self.size[right_root].saturating_add(self.size[left_root]);
        true
    }

    /// Returns the number of nodes in `node`'s component.
    ///
    /// # Panics
    /// Panics when `node >= self.len()`.
    pub fn component_size(&mut self, node: usize) -> usize {
        let root = self.find(node);
        self.size[root]
    }

    /// Returns `true` when `left` and `right` share a component.
    ///
    /// # Panics
    /// Panics when either node is out of range.
    pub fn connected(&mut self, left: usize, right: usize) -> bool {
        self.find(left) == self.find(right)
    }

    /// Counts the distinct components currently in the forest.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.parent
            .iter()
            .enumerate()
            .filter(|(node, parent)| node == *parent)
            .count()
    }
}
