use std::ops::Deref;
use std::sync::Arc;

use anyhow::Result;
use ash::vk;

use crate::core::traits::DescriptorDevice;
use crate::{DescriptorPoolSize, Error};

#[derive(Derivative)]
#[derivative(Debug)]
struct DeviceInner {
    #[derivative(Debug = "ignore")]
    handle: ash::Device,
}

/// Wrapper around a `VkDevice` created elsewhere in the renderer. Internal state is wrapped in an
/// `Arc<DeviceInner>`, so this is safe to clone and share between any number of descriptor chains.
///
/// The wrapper never calls `vkDestroyDevice`, whoever created the device stays responsible for it
/// and must keep it alive until every chain using this wrapper is dropped.
#[derive(Debug, Clone)]
pub struct Device {
    inner: Arc<DeviceInner>,
}

impl Device {
    /// Wrap an already initialized logical device.
    pub fn new(handle: ash::Device) -> Self {
        Self {
            inner: Arc::new(DeviceInner {
                handle,
            }),
        }
    }

    /// Get unsafe access to the underlying VkDevice handle
    /// # Safety
    /// * The caller should not call `vkDestroyDevice` on this.
    pub unsafe fn handle(&self) -> ash::Device {
        self.inner.handle.clone()
    }
}

impl Deref for Device {
    type Target = ash::Device;

    fn deref(&self) -> &Self::Target {
        &self.inner.handle
    }
}

impl DescriptorDevice for Device {
    fn create_pool(&self, size: &DescriptorPoolSize) -> Result<vk::DescriptorPool> {
        let pool_sizes = size.pool_sizes();
        let info = vk::DescriptorPoolCreateInfo::builder()
            .max_sets(size.max_sets())
            .pool_sizes(pool_sizes.as_slice());
        // SAFETY: `info` and the pool size array it points to outlive the call.
        unsafe { self.inner.handle.create_descriptor_pool(&info, None) }.map_err(|err| Error::PoolCreationFailed(err).into())
    }

    fn allocate_set(&self, pool: vk::DescriptorPool, layout: vk::DescriptorSetLayout) -> Option<vk::DescriptorSet> {
        let layouts = [layout];
        let info = vk::DescriptorSetAllocateInfo::builder()
            .descriptor_pool(pool)
            .set_layouts(&layouts);
        // SAFETY: The pool is owned by a live DescriptorPool and the layout array outlives the call.
        match unsafe { self.inner.handle.allocate_descriptor_sets(&info) } {
            Ok(sets) => sets.first().copied(),
            Err(err) => {
                trace!("vkAllocateDescriptorSets on pool {pool:?} returned {err}");
                None
            }
        }
    }

    fn reset_pool(&self, pool: vk::DescriptorPool) {
        // SAFETY: The caller guarantees no set from this pool is still in use by the GPU.
        let result = unsafe {
            self.inner
                .handle
                .reset_descriptor_pool(pool, vk::DescriptorPoolResetFlags::empty())
        };
        if let Err(err) = result {
            error!("vkResetDescriptorPool on pool {pool:?} returned {err}");
        }
    }

    fn destroy_pool(&self, pool: vk::DescriptorPool) {
        // SAFETY: Only called once, from the Drop impl of the owning DescriptorPool.
        unsafe {
            self.inner.handle.destroy_descriptor_pool(pool, None);
        }
    }
}
