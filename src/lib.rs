pub mod config;
pub mod error;
pub mod gesture;
pub mod hand;
pub mod protocol;
pub mod session;
pub mod tracker;

#[cfg(test)]
pub(crate) mod test_utils;
