mod entry;
mod registry;

pub use entry::*;
pub use registry::*;
