pub mod dot;
pub mod summary;

pub use dot::render;
pub use summary::{summarize, Summary};
