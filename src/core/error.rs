//! Exposes the descriptor-chain error type

use ash::vk;
use thiserror::Error;

/// Error type that descriptor-chain can return.
#[derive(Error, Debug)]
pub enum Error {
    /// The driver refused to create a new descriptor pool, usually because it ran out of memory.
    #[error("Failed to create descriptor pool: `{0}`")]
    PoolCreationFailed(vk::Result),
    /// A descriptor set could not be allocated even from an empty pool. The layout needs more descriptors
    /// of some type than a single pool holds, so the pool size must be raised.
    #[error("Failed to allocate descriptor set with layout {0:?} from an empty descriptor pool.")]
    DescriptorSetAllocationFailed(vk::DescriptorSetLayout),
    /// Tried to allocate a descriptor set with a null layout.
    #[error("No descriptor set layout was given.")]
    NoDescriptorSetLayout,
    /// The descriptor pool size cannot be used to create a pool.
    #[error("Invalid descriptor pool size: {0}")]
    InvalidPoolSize(&'static str),
    /// A descriptor chain ring needs at least one frame in flight.
    #[error("Descriptor chain ring requires at least one frame in flight.")]
    NoFramesInFlight,
}

