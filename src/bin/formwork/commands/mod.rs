//! Command implementations

pub mod check;
pub mod completions;
pub mod countries;
pub mod demo;
pub mod image;
