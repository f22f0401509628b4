//! Library side of the `fss` binary.

pub mod logging;
pub mod screen;
pub mod settings;
