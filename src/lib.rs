//! Growable, resettable descriptor set allocation for Vulkan renderers.
//!
//! Binding shader resources every draw means allocating a lot of short-lived descriptor sets. Vulkan descriptor
//! pools have a fixed capacity, so this crate keeps a chain of pools per recording context: sets are carved from
//! the current pool, a new pool is appended once it is full, and the whole chain is reset in one go once the GPU
//! has finished the frame.
//!
//! ```ignore
//! use descriptor_chain::prelude::*;
//!
//! // Wrap the logical device created by the rest of the renderer.
//! let device = Device::new(ash_device);
//! let mut chain = DescriptorPoolChain::with_default_size(device.clone())?;
//! let set = chain.allocate(layout)?;
//! ```
//!
//! For further details, check out the following modules
//! - [`descriptor`] for the pool chain and the per-frame ring.
//! - [`core`] for the device abstraction and the error type.

#[macro_use]
extern crate derivative;
#[macro_use]
extern crate log;

pub mod prelude;
pub use crate::prelude::*;

pub mod core;
pub mod descriptor;
