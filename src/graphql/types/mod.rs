pub mod developer;
pub mod project;

pub use developer::*;
pub use project::*;
