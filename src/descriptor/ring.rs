use anyhow::Result;
use ash::vk;

use crate::core::traits::DescriptorDevice;
use crate::{DescriptorPoolChain, DescriptorPoolSize, DescriptorSet, Device, Error};

/// Default amount of frames that can be recorded while the GPU is still busy with earlier ones.
pub const FRAMES_IN_FLIGHT: usize = 2;

/// One [`DescriptorPoolChain`] per frame in flight.
///
/// Sets for the frame being recorded come from the current chain. Advancing to the next frame resets
/// that frame's chain, so the caller must have waited on the fence of the frame that last used it.
#[derive(Derivative)]
#[derivative(Debug(bound = ""))]
pub struct DescriptorChainRing<D: DescriptorDevice = Device> {
    chains: Vec<DescriptorPoolChain<D>>,
    current_frame: usize,
}

impl<D: DescriptorDevice> DescriptorChainRing<D> {
    /// Create a ring of `frames_in_flight` empty chains sharing the same pool size.
    /// # Errors
    /// - Fails if `frames_in_flight` is zero.
    /// - Fails if `size` is not a valid descriptor pool size.
    pub fn new(device: D, size: DescriptorPoolSize, frames_in_flight: usize) -> Result<Self> {
        if frames_in_flight == 0 {
            return Err(Error::NoFramesInFlight.into());
        }
        let chains = (0..frames_in_flight)
            .map(|_| DescriptorPoolChain::new(device.clone(), size.clone()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            chains,
            current_frame: 0,
        })
    }

    /// Create a ring of [`FRAMES_IN_FLIGHT`] chains with default pool sizes.
    pub fn with_defaults(device: D) -> Result<Self> {
        Self::new(device, DescriptorPoolSize::default(), FRAMES_IN_FLIGHT)
    }

    /// Allocate a descriptor set from the current frame's chain.
    /// # Errors
    /// See [`DescriptorPoolChain::allocate`].
    pub fn allocate(&mut self, layout: vk::DescriptorSetLayout) -> Result<DescriptorSet> {
        self.current_mut().allocate(layout)
    }

    /// Advance to the next frame and reset its chain. All sets previously allocated for that frame become invalid.
    pub fn next_frame(&mut self) {
        self.current_frame = (self.current_frame + 1) % self.chains.len();
        self.chains[self.current_frame].reset();
    }

    pub fn current(&self) -> &DescriptorPoolChain<D> {
        &self.chains[self.current_frame]
    }

    pub fn current_mut(&mut self) -> &mut DescriptorPoolChain<D> {
        &mut self.chains[self.current_frame]
    }

    /// Index of the frame currently being recorded.
    pub fn frame_index(&self) -> usize {
        self.current_frame
    }

    pub fn frames_in_flight(&self) -> usize {
        self.chains.len()
    }
}
