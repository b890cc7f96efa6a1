//! Configuration shared by every descriptor pool in a chain.

use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use anyhow::Result;
use ash::vk;

use crate::Error;

/// Number of descriptor sets each pool can hold by default.
pub const DEFAULT_MAX_SETS: u32 = 64;
/// Number of descriptors of each type each pool can hold by default.
pub const DEFAULT_DESCRIPTORS_PER_TYPE: u32 = 256;

/// Descriptor types that receive a budget in every pool created through [`DescriptorPoolSize::new`].
pub const DESCRIPTOR_TYPES: [vk::DescriptorType; 7] = [
    vk::DescriptorType::SAMPLER,
    vk::DescriptorType::SAMPLED_IMAGE,
    vk::DescriptorType::STORAGE_IMAGE,
    vk::DescriptorType::UNIFORM_BUFFER,
    vk::DescriptorType::STORAGE_BUFFER,
    vk::DescriptorType::UNIFORM_TEXEL_BUFFER,
    vk::DescriptorType::STORAGE_TEXEL_BUFFER,
];

/// Defines how many sets, and how many descriptors of each type, a descriptor pool should be able to hold.
///
/// # Example
/// ```
/// use descriptor_chain::prelude::*;
///
/// let size = DescriptorPoolSize::new(128, 512)
///     .with_descriptor_count(vk::DescriptorType::COMBINED_IMAGE_SAMPLER, 64);
/// assert_eq!(size.max_sets(), 128);
/// assert_eq!(size.descriptor_count(vk::DescriptorType::SAMPLER), 512);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptorPoolSize {
    max_sets: u32,
    descriptors: HashMap<vk::DescriptorType, u32>,
}

impl DescriptorPoolSize {
    /// Create a pool size holding `max_sets` sets and `descriptors_per_type` descriptors of each type in [`DESCRIPTOR_TYPES`].
    pub fn new(max_sets: u32, descriptors_per_type: u32) -> Self {
        Self {
            max_sets,
            descriptors: DESCRIPTOR_TYPES
                .iter()
                .map(|ty| (*ty, descriptors_per_type))
                .collect(),
        }
    }

    /// Set the maximum amount of descriptor sets.
    pub fn with_max_sets(mut self, max_sets: u32) -> Self {
        self.max_sets = max_sets;
        self
    }

    /// Override the budget for one descriptor type, or add a type that is not in [`DESCRIPTOR_TYPES`].
    pub fn with_descriptor_count(mut self, ty: vk::DescriptorType, count: u32) -> Self {
        self.descriptors.insert(ty, count);
        self
    }

    pub fn max_sets(&self) -> u32 {
        self.max_sets
    }

    /// Get the amount of descriptors of type `ty` a pool can hold. Zero if the type is not configured.
    pub fn descriptor_count(&self, ty: vk::DescriptorType) -> u32 {
        self.descriptors.get(&ty).copied().unwrap_or(0)
    }

    /// Get the per-type budgets as Vulkan pool sizes, ordered by descriptor type.
    pub fn pool_sizes(&self) -> Vec<vk::DescriptorPoolSize> {
        let mut sizes = self
            .descriptors
            .iter()
            .map(|(ty, count)| vk::DescriptorPoolSize {
                ty: *ty,
                descriptor_count: *count,
            })
            .collect::<Vec<_>>();
        sizes.sort_by_key(|size| size.ty.as_raw());
        sizes
    }

    /// Check that a descriptor pool can be created with this size.
    /// # Errors
    /// - Fails if `max_sets` is zero.
    /// - Fails if there are no descriptor types, or if any descriptor type has a budget of zero.
    pub fn validate(&self) -> Result<()> {
        if self.max_sets == 0 {
            return Err(Error::InvalidPoolSize("max_sets must be greater than zero").into());
        }
        if self.descriptors.is_empty() {
            return Err(Error::InvalidPoolSize("at least one descriptor type is required").into());
        }
        if self.descriptors.values().any(|count| *count == 0) {
            return Err(Error::InvalidPoolSize("descriptor counts must be greater than zero").into());
        }
        Ok(())
    }
}

impl Default for DescriptorPoolSize {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SETS, DEFAULT_DESCRIPTORS_PER_TYPE)
    }
}

impl Display for DescriptorPoolSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "DescriptorPoolSize (max sets: {})", self.max_sets)?;
        for size in self.pool_sizes() {
            writeln!(f, "{:?} => {}", size.ty, size.descriptor_count)?;
        }
        Ok(())
    }
}
