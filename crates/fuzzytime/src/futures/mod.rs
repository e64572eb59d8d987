mod scheduler;
mod sleep_provider;

pub use scheduler::*;
pub use sleep_provider::*;
