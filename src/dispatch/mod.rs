pub mod core;
pub mod handle;

#[cfg(test)]
mod tests;

pub use self::core::*;
pub use self::handle::*;
