pub use ash::vk;

pub use crate::core::device::Device;
pub use crate::core::error::Error;
pub use crate::core::traits::*;

pub use crate::descriptor::chain::DescriptorPoolChain;
pub use crate::descriptor::descriptor_set::DescriptorSet;
pub use crate::descriptor::pool_size::*;
pub use crate::descriptor::ring::{DescriptorChainRing, FRAMES_IN_FLIGHT};
