use std::cell::Cell;
use std::marker::PhantomData;

use anyhow::Result;
use ash::vk;
use static_assertions::{assert_impl_all, assert_not_impl_any};

use crate::core::traits::DescriptorDevice;
use crate::descriptor::descriptor_pool::DescriptorPool;
use crate::{DescriptorPoolSize, DescriptorSet, Device, Error};

/// An ordered chain of descriptor pools that grows on demand and can be reset in bulk.
///
/// Sets are always allocated from the current pool. When it runs out of space the chain moves on
/// to the next pool, creating it if needed, and never looks back at earlier pools until the next
/// [`reset`](Self::reset). Resetting keeps every pool alive so the next frame can reuse them
/// without creating new Vulkan objects.
///
/// A chain is meant to be owned by a single recording context. It can be sent to another thread but
/// not shared, so allocation needs no internal locking.
///
/// # Example
/// ```ignore
/// use descriptor_chain::prelude::*;
///
/// let mut chain = DescriptorPoolChain::with_default_size(device.clone())?;
/// let set = chain.allocate(layout)?;
/// // Write to and bind the set ...
/// // Once the GPU is done with this frame's sets:
/// chain.reset();
/// ```
#[derive(Derivative)]
#[derivative(Debug(bound = ""))]
pub struct DescriptorPoolChain<D: DescriptorDevice = Device> {
    #[derivative(Debug = "ignore")]
    device: D,
    size: DescriptorPoolSize,
    pools: Vec<DescriptorPool<D>>,
    /// Index of the pool to allocate from. Equal to `pools.len()` only while the chain is empty.
    current: usize,
    allocated: usize,
    #[derivative(Debug = "ignore")]
    _not_sync: PhantomData<Cell<()>>,
}

assert_impl_all!(DescriptorPoolChain: Send);
assert_not_impl_any!(DescriptorPoolChain: Sync, Clone);

impl<D: DescriptorDevice> DescriptorPoolChain<D> {
    /// Create an empty chain. No descriptor pool is created until the first allocation.
    /// # Errors
    /// - Fails if `size` is not a valid descriptor pool size, see [`DescriptorPoolSize::validate`].
    pub fn new(device: D, size: DescriptorPoolSize) -> Result<Self> {
        size.validate()?;
        Ok(Self {
            device,
            size,
            pools: Vec::new(),
            current: 0,
            allocated: 0,
            _not_sync: PhantomData,
        })
    }

    /// Create an empty chain whose pools hold 64 sets and 256 descriptors of each common type.
    pub fn with_default_size(device: D) -> Result<Self> {
        Self::new(device, DescriptorPoolSize::default())
    }

    /// Allocate a descriptor set with the given layout.
    /// If the current pool is out of space, the chain moves to the next pool and tries exactly once more.
    /// # Errors
    /// - Fails if `layout` is a null handle.
    /// - Fails if a new descriptor pool was needed but could not be created.
    /// - Fails if the set does not fit in an empty pool. Raise the pool size in that case.
    pub fn allocate(&mut self, layout: vk::DescriptorSetLayout) -> Result<DescriptorSet> {
        if layout == vk::DescriptorSetLayout::null() {
            return Err(Error::NoDescriptorSetLayout.into());
        }

        if let Some(pool) = self.pools.get(self.current) {
            if let Some(handle) = pool.allocate(layout) {
                self.allocated += 1;
                return Ok(DescriptorSet::new(handle, self.current));
            }
        }

        let next = if self.current < self.pools.len() {
            self.current + 1
        } else {
            self.current
        };

        if next == self.pools.len() {
            self.pools.push(DescriptorPool::new(self.device.clone(), &self.size)?);
            debug!("Descriptor pool chain grew to {} pools", self.pools.len());
        } else {
            debug!("Descriptor pool {} exhausted, reusing retained pool {next}", self.current);
        }
        self.current = next;

        // Every pool past the old cursor is empty, so this retry either succeeds or can never succeed.
        match self.pools[next].allocate(layout) {
            Some(handle) => {
                self.allocated += 1;
                Ok(DescriptorSet::new(handle, next))
            }
            None => {
                error!("Descriptor set with layout {layout:?} does not fit in an empty descriptor pool. Pool size: {}", self.size);
                Err(Error::DescriptorSetAllocationFailed(layout).into())
            }
        }
    }

    /// Return every pool in the chain to its empty state and move the cursor back to the first pool.
    /// Pools are kept alive for reuse.
    ///
    /// Every descriptor set previously allocated from this chain becomes invalid. The caller must make sure
    /// the GPU is no longer using any of them.
    pub fn reset(&mut self) {
        for pool in &self.pools {
            pool.reset();
        }
        self.current = 0;
        self.allocated = 0;
    }

    /// Get the amount of descriptor pools this chain owns.
    pub fn pool_count(&self) -> usize {
        self.pools.len()
    }

    /// Get the index of the pool the next allocation is served from first.
    pub fn current_pool(&self) -> usize {
        self.current
    }

    /// Get the amount of descriptor sets allocated since the last reset.
    pub fn allocated_sets(&self) -> usize {
        self.allocated
    }

    /// Get the size every pool in this chain is created with.
    pub fn size(&self) -> &DescriptorPoolSize {
        &self.size
    }

    /// True if this chain has not created any descriptor pool yet.
    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }
}
