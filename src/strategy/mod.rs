pub mod classify;
pub mod partition;
