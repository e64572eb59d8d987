mod interface;
mod manual_clock;
mod system_clock;

pub use interface::*;
pub use manual_clock::*;
pub use system_clock::*;
