//! SQL script generation.

mod dialect;
mod render;

pub use dialect::Dialect;
pub use render::{generate, render_literal};
