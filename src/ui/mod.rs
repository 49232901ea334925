//! Terminal UI: MVI state stores, the render pass, and the frame
//! renderer built on ratatui.

pub mod app;
pub mod controls;
pub mod events;
pub mod grid;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod nav;
pub mod pass;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
