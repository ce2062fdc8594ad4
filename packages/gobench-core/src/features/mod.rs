//! Feature modules

pub mod aggregation;
pub mod measurement;
pub mod metadata;
pub mod naming;
pub mod slicing;
