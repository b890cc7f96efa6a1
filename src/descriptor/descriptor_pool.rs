//! A descriptor pool is a fixed-size arena descriptor sets are carved from. Pools are owned by a
//! [`DescriptorPoolChain`](crate::DescriptorPoolChain), you never need to create one manually.

use anyhow::Result;
use ash::vk;

use crate::core::traits::DescriptorDevice;
use crate::DescriptorPoolSize;

/// Memory pool for descriptor sets. Destroys the Vulkan pool when dropped.
#[derive(Derivative)]
#[derivative(Debug(bound = ""))]
pub(super) struct DescriptorPool<D: DescriptorDevice> {
    #[derivative(Debug = "ignore")]
    device: D,
    handle: vk::DescriptorPool,
}

impl<D: DescriptorDevice> DescriptorPool<D> {
    /// Create a new descriptor pool
    pub(super) fn new(device: D, size: &DescriptorPoolSize) -> Result<Self> {
        let handle = device.create_pool(size)?;
        #[cfg(feature = "log-objects")]
        trace!("Created new VkDescriptorPool {handle:?}");
        Ok(Self {
            device,
            handle,
        })
    }

    /// Try to carve a set with the given layout out of this pool.
    pub(super) fn allocate(&self, layout: vk::DescriptorSetLayout) -> Option<vk::DescriptorSet> {
        self.device.allocate_set(self.handle, layout)
    }

    /// Reclaim every set allocated from this pool.
    pub(super) fn reset(&self) {
        self.device.reset_pool(self.handle);
    }
}

impl<D: DescriptorDevice> Drop for DescriptorPool<D> {
    fn drop(&mut self) {
        #[cfg(feature = "log-objects")]
        trace!("Destroying VkDescriptorPool {:?}", self.handle);
        self.device.destroy_pool(self.handle);
    }
}
