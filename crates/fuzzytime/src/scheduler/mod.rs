mod scheduler;
mod timer;

pub use scheduler::*;
pub use timer::*;
