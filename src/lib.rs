pub mod args;
pub mod cli;
pub mod color;
pub mod date;
pub mod error;
pub mod import;
pub mod ir;
pub mod operations;
pub mod pipeline;
pub mod render;
