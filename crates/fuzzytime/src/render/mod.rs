mod ago;
mod bucket;
mod clock;
mod mode;
mod phrase;

pub use ago::*;
pub use bucket::*;
pub use clock::*;
pub use mode::*;
pub use phrase::*;

#[cfg(test)]
mod tests;
