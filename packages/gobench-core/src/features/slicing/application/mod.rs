mod source_set;

pub use source_set::SourceSet;
