#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::Result;
use ash::vk;
use ash::vk::Handle;

use descriptor_chain::{DescriptorDevice, DescriptorPoolSize, Error};

#[derive(Debug)]
struct MockPool {
    max_sets: u32,
    capacity: HashMap<vk::DescriptorType, u32>,
    sets_left: u32,
    descriptors_left: HashMap<vk::DescriptorType, u32>,
}

impl MockPool {
    fn new(size: &DescriptorPoolSize) -> Self {
        let capacity: HashMap<_, _> = size
            .pool_sizes()
            .into_iter()
            .map(|size| (size.ty, size.descriptor_count))
            .collect();
        Self {
            max_sets: size.max_sets(),
            descriptors_left: capacity.clone(),
            capacity,
            sets_left: size.max_sets(),
        }
    }

    fn try_allocate(&mut self, bindings: &[(vk::DescriptorType, u32)]) -> bool {
        if self.sets_left == 0 {
            return false;
        }
        let fits = bindings
            .iter()
            .all(|(ty, count)| self.descriptors_left.get(ty).copied().unwrap_or(0) >= *count);
        if !fits {
            return false;
        }
        for (ty, count) in bindings {
            if let Some(left) = self.descriptors_left.get_mut(ty) {
                *left -= count;
            }
        }
        self.sets_left -= 1;
        true
    }

    fn reset(&mut self) {
        self.sets_left = self.max_sets;
        self.descriptors_left = self.capacity.clone();
    }
}

#[derive(Debug, Default)]
struct MockState {
    next_handle: u64,
    fail_pool_creation: bool,
    layouts: HashMap<vk::DescriptorSetLayout, Vec<(vk::DescriptorType, u32)>>,
    pools: HashMap<vk::DescriptorPool, MockPool>,
    created: Vec<vk::DescriptorPool>,
    destroyed: Vec<vk::DescriptorPool>,
    resets: Vec<vk::DescriptorPool>,
    /// Pool each successfully allocated set came from, in allocation order.
    allocations: Vec<vk::DescriptorPool>,
}

impl MockState {
    fn next_handle(&mut self) -> u64 {
        self.next_handle += 1;
        self.next_handle
    }
}

/// Software stand-in for a Vulkan device that tracks set and per-type descriptor budgets of every pool.
#[derive(Debug, Clone, Default)]
pub struct MockDevice {
    state: Arc<Mutex<MockState>>,
}

impl MockDevice {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().expect("mock device state should not be poisoned")
    }

    /// Register a descriptor set layout requiring the given amount of descriptors per type.
    pub fn create_layout(&self, bindings: &[(vk::DescriptorType, u32)]) -> vk::DescriptorSetLayout {
        let mut state = self.state();
        let layout = vk::DescriptorSetLayout::from_raw(state.next_handle());
        state.layouts.insert(layout, bindings.to_vec());
        layout
    }

    /// Make every following pool creation fail as if the driver ran out of memory.
    pub fn fail_pool_creation(&self, fail: bool) {
        self.state().fail_pool_creation = fail;
    }

    pub fn created_pools(&self) -> Vec<vk::DescriptorPool> {
        self.state().created.clone()
    }

    pub fn destroyed_pools(&self) -> Vec<vk::DescriptorPool> {
        self.state().destroyed.clone()
    }

    pub fn reset_calls(&self) -> Vec<vk::DescriptorPool> {
        self.state().resets.clone()
    }

    pub fn live_pools(&self) -> usize {
        self.state().pools.len()
    }

    pub fn allocations(&self) -> Vec<vk::DescriptorPool> {
        self.state().allocations.clone()
    }

    /// Index into [`created_pools`](Self::created_pools) of the pool a set was allocated from.
    pub fn pool_index(&self, pool: vk::DescriptorPool) -> Option<usize> {
        self.state().created.iter().position(|p| *p == pool)
    }
}

impl DescriptorDevice for MockDevice {
    fn create_pool(&self, size: &DescriptorPoolSize) -> Result<vk::DescriptorPool> {
        let mut state = self.state();
        if state.fail_pool_creation {
            return Err(Error::PoolCreationFailed(vk::Result::ERROR_OUT_OF_DEVICE_MEMORY).into());
        }
        let pool = vk::DescriptorPool::from_raw(state.next_handle());
        state.pools.insert(pool, MockPool::new(size));
        state.created.push(pool);
        Ok(pool)
    }

    fn allocate_set(&self, pool: vk::DescriptorPool, layout: vk::DescriptorSetLayout) -> Option<vk::DescriptorSet> {
        let mut state = self.state();
        let bindings = state.layouts.get(&layout)?.clone();
        let allocated = state.pools.get_mut(&pool)?.try_allocate(&bindings);
        if !allocated {
            return None;
        }
        state.allocations.push(pool);
        Some(vk::DescriptorSet::from_raw(state.next_handle()))
    }

    fn reset_pool(&self, pool: vk::DescriptorPool) {
        let mut state = self.state();
        if let Some(p) = state.pools.get_mut(&pool) {
            p.reset();
        }
        state.resets.push(pool);
    }

    fn destroy_pool(&self, pool: vk::DescriptorPool) {
        let mut state = self.state();
        state.pools.remove(&pool);
        state.destroyed.push(pool);
    }
}

/// Initialize logging once for the whole test binary.
pub fn init_logging() {
    let _ = pretty_env_logger::try_init();
}

/// Layout with a single sampler binding.
pub fn sampler_layout(device: &MockDevice) -> vk::DescriptorSetLayout {
    device.create_layout(&[(vk::DescriptorType::SAMPLER, 1)])
}
