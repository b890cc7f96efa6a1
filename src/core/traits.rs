//! Defines traits for core

use anyhow::Result;
use ash::vk;

use crate::DescriptorPoolSize;

/// The subset of the Vulkan device function table needed to manage descriptor pools.
///
/// [`Device`](crate::Device) implements this on top of `ash`. Implementations are cloned into every pool
/// they create, so cloning should be cheap and every clone must refer to the same device.
pub trait DescriptorDevice: Clone {
    /// Create a descriptor pool with room for `size.max_sets()` sets and the given per-type descriptor counts.
    /// # Errors
    /// - Fails with [`Error::PoolCreationFailed`](crate::Error::PoolCreationFailed) if the driver cannot create the pool.
    fn create_pool(&self, size: &DescriptorPoolSize) -> Result<vk::DescriptorPool>;

    /// Allocate a single descriptor set from `pool`. Returns `None` if the pool has no room left for a set
    /// with this layout. This is an expected outcome, not an error.
    fn allocate_set(&self, pool: vk::DescriptorPool, layout: vk::DescriptorSetLayout) -> Option<vk::DescriptorSet>;

    /// Return every set allocated from `pool` back to it.
    fn reset_pool(&self, pool: vk::DescriptorPool);

    /// Destroy `pool`, implicitly freeing every set allocated from it.
    fn destroy_pool(&self, pool: vk::DescriptorPool);
}
