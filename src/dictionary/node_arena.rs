//! A fixed-capacity arena for trie nodes.
//!
//! The whole block is reserved when the arena is created and never grows, so
//! allocating a node only advances the fill cursor. Nodes refer to each other
//! through [`NodeId`] handles instead of references, and the arena is freed in
//! one piece when it is dropped.

use std::num::NonZeroU32;

use super::error::LoadError;

/// Handle to a value stored in a [`NodeArena`].
///
/// Stores the slot index plus one so that `Option<NodeId>` is the same size
/// as `NodeId`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(NonZeroU32);

impl NodeId {
    /// Handle of the first slot, which always holds the root.
    pub const ROOT: NodeId = NodeId(NonZeroU32::MIN);

    fn from_index(index: usize) -> Option<Self> {
        let raw = u32::try_from(index.checked_add(1)?).ok()?;
        NonZeroU32::new(raw).map(NodeId)
    }

    #[inline]
    fn index(self) -> usize {
        self.0.get() as usize - 1
    }
}

/// A block of `capacity` slots filled front to back.
pub(crate) struct NodeArena<T> {
    nodes: Vec<T>,
    capacity: usize,
}

impl<T> NodeArena<T> {
    /// Reserves room for `capacity` values and stores `root` in the first slot.
    ///
    /// # Errors
    ///
    /// [`LoadError::OutOfMemory`] if the block cannot be reserved, and
    /// [`LoadError::CapacityExceeded`] if `capacity` cannot hold even the root.
    pub fn with_root(capacity: usize, root: T) -> Result<Self, LoadError> {
        if capacity == 0 {
            return Err(LoadError::CapacityExceeded { capacity });
        }
        let mut nodes = Vec::new();
        nodes
            .try_reserve_exact(capacity)
            .map_err(|_| LoadError::OutOfMemory)?;
        nodes.push(root);
        Ok(NodeArena { nodes, capacity })
    }

    /// Places `value` in the next free slot and returns its handle.
    ///
    /// # Errors
    ///
    /// [`LoadError::CapacityExceeded`] once every slot is taken.
    pub fn alloc(&mut self, value: T) -> Result<NodeId, LoadError> {
        let index = self.nodes.len();
        let id = NodeId::from_index(index)
            .filter(|_| index < self.capacity)
            .ok_or(LoadError::CapacityExceeded {
                capacity: self.capacity,
            })?;
        // Never reallocates: the full capacity was reserved up front.
        self.nodes.push(value);
        Ok(id)
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &T {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut T {
        &mut self.nodes[id.index()]
    }

    /// Returns the number of occupied slots, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
