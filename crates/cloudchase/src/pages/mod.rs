//! Render routines, one module per [`PageKey`](crate::page::PageKey).
//!
//! Each module exposes a `render` function with the [`RenderFn`](crate::page::RenderFn) signature and is wired into
//! [`ROUTER`](crate::page::ROUTER).
pub mod home;
pub mod insights;
pub mod metrics;
pub mod prediction;
pub mod team;
pub mod visualization;
