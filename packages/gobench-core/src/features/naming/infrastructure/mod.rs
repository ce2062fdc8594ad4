mod camel_case;
mod decomposer;

pub use camel_case::split_camel_case;
pub use decomposer::{suffix_tokens, IdentifierDecomposer};
