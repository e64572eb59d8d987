mod settings;
mod strings;

pub use settings::*;
pub use strings::*;

#[cfg(all(test, feature = "serde"))]
mod tests;
