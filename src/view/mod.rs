pub(crate) mod align;
pub mod components;
pub mod content;
pub mod font;
pub mod gpu;
pub mod layout_vm;
pub mod program;
pub mod quad_writer;
pub mod render_pass;
pub mod string_table;

pub use components::*;
pub use content::*;
pub use font::*;
pub use gpu::*;
pub use layout_vm::*;
pub use program::*;
pub use quad_writer::*;
pub use render_pass::*;
pub use string_table::*;
