//! Single-pass bytecode GUI layout.
//!
//! A layout program is a flat byte stream of [`Opcode`]s paired with a slice
//! of [`GuiData`] content. [`gui_layout`] runs the program once, placing each
//! widget inside a stack of nested containers and writing its quads straight
//! into a primitive list reserved by a [`GpuLists`] implementation.

mod config;
mod error;
pub mod style;
pub mod view;

pub use config::*;
pub use error::*;
pub use style::*;
pub use view::*;
