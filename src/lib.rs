//! quizgen - turns plain-text `.quiz` files into interactive HTML pages
//!
//! [`parser::parse`] reads the quiz text into a [`quiz::Quiz`];
//! [`render::render`] turns that into a markup tree and
//! [`render::render_page`] into a finished page.

pub mod cli;
pub mod config;
pub mod parser;
pub mod quiz;
pub mod render;
