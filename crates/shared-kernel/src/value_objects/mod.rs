// crates/shared-kernel/src/value_objects/mod.rs
pub mod changed_file;

pub use changed_file::ChangedFile;
