pub mod events;

#[cfg(test)]
pub mod test_utils;

pub use events::*;
