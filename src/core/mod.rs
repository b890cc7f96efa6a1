//! The core module holds the device abstraction every descriptor chain is built on.

pub mod device;
pub mod error;
pub mod traits;
