//! Group metadata sidecar (`_meta.yml`)

pub mod domain;
pub mod infrastructure;

pub use domain::{GroupMeta, ImplementationMeta};
pub use infrastructure::MetaLoader;
