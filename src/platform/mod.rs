//! Platform abstraction layer.

mod desktop;
pub use desktop::*;
