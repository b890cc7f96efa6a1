//! This module handles allocation of descriptor sets.
//!
//! The main type is [`DescriptorPoolChain`], which owns a growing list of descriptor pools. Sets are allocated
//! from the most recently used pool, and a new pool is only created once that one is full. Sets are never freed
//! individually. Instead, the whole chain is reset once the GPU is done with them, which makes every pool
//! available again without destroying it.
//!
//! For a renderer that records several frames ahead, [`DescriptorChainRing`] keeps one chain per frame in flight.
//!
//! # Example
//!
//! ```ignore
//! use descriptor_chain::prelude::*;
//!
//! let size = DescriptorPoolSize::default().with_max_sets(128);
//! let mut ring = DescriptorChainRing::new(device.clone(), size, FRAMES_IN_FLIGHT)?;
//! loop {
//!     // Wait for the fence of the frame that last used the next chain.
//!     ring.next_frame();
//!     let set = ring.allocate(layout)?;
//!     // Write to the set and bind it ...
//! }
//! ```
//!
//! # Pool sizing
//!
//! Every pool in a chain is created with the same [`DescriptorPoolSize`]. A layout that needs more descriptors of
//! some type than a single pool holds can never be allocated, and fails with
//! [`Error::DescriptorSetAllocationFailed`](crate::Error::DescriptorSetAllocationFailed).

pub mod chain;
pub mod descriptor_set;
pub mod pool_size;
pub mod ring;

mod descriptor_pool;
