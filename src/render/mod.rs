//! Render module - quiz to document tree, tree to finished HTML page

pub mod assets;
mod builder;
mod labels;
pub mod markers;
pub mod node;
mod template;

pub use assets::{load_assets, write_stylesheet_if_absent, PageAssets};
pub use builder::{question_id, render, render_with};
pub use labels::Labels;
pub use node::{serialize_node, Handle};
pub use template::render_page;
