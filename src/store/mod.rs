pub mod atomic;
pub mod files;

pub use files::TaskStore;
