use ash::vk;

/// A descriptor set handed out by a [`DescriptorPoolChain`](crate::DescriptorPoolChain).
///
/// This is a plain token and does not own the set. It stays valid until the chain it came from is
/// reset or dropped, after which it must not be bound or written to again.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct DescriptorSet {
    handle: vk::DescriptorSet,
    pool: usize,
}

impl DescriptorSet {
    pub(super) fn new(handle: vk::DescriptorSet, pool: usize) -> Self {
        Self {
            handle,
            pool,
        }
    }

    /// Get the raw Vulkan descriptor set handle.
    pub fn handle(&self) -> vk::DescriptorSet {
        self.handle
    }

    /// Index of the pool in the chain this set was allocated from.
    pub fn pool_index(&self) -> usize {
        self.pool
    }
}
