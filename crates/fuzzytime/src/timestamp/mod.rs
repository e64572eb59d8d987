mod parse;
mod timestamp;

pub use parse::*;
pub use timestamp::*;

#[cfg(test)]
mod tests;
