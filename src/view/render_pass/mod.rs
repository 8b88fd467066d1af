pub mod draw_rect_pass;
pub mod text_pass;

pub use draw_rect_pass::{DrawRectPass, color_uv};
pub use text_pass::TextPass;
