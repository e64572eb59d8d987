mod error;
#[cfg(feature = "futures")]
mod futures;
mod host;
mod registry;
mod render;
#[cfg(any(feature = "async-tokio", feature = "async-smol"))]
mod runtime;
mod scheduler;
mod settings;
mod threshold;
mod time;
mod timestamp;

pub use crate::error::*;
#[cfg(feature = "futures")]
pub use crate::futures::*;
pub use crate::host::*;
pub use crate::registry::*;
pub use crate::render::*;
#[cfg(any(feature = "async-tokio", feature = "async-smol"))]
pub use crate::runtime::*;
pub use crate::scheduler::*;
pub use crate::settings::*;
pub use crate::threshold::*;
pub use crate::time::*;
pub use crate::timestamp::*;
