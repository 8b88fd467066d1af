mod button;
mod label;
mod list;

pub use button::*;
pub use label::*;
pub use list::*;

use crate::{LayoutConfig, LayoutError};
use crate::style::GuiRect;
use crate::view::font::{FontMetrics, TxfDrawState};
use crate::view::quad_writer::QuadWriter;

/// Size a widget reports for one layout pass, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizeCon {
    pub min_w: i32,
    pub min_h: i32,
    pub max_w: i32,
    pub max_h: i32,
    pub pref_w: i32,
    pub pref_h: i32,
}

impl SizeCon {
    /// Minimum, maximum and preferred sizes all equal.
    pub const fn fixed(w: i32, h: i32) -> Self {
        Self {
            min_w: w,
            min_h: h,
            max_w: w,
            max_h: h,
            pref_w: w,
            pref_h: h,
        }
    }
}

pub trait Widget {
    fn measure<F: FontMetrics + ?Sized>(
        &self,
        ds: &TxfDrawState<'_, F>,
        config: &LayoutConfig,
    ) -> SizeCon;

    /// Writes the widget's quads for `rect` and returns the new write cursor.
    fn emit<F: FontMetrics + ?Sized>(
        &self,
        writer: &mut QuadWriter<'_>,
        rect: &GuiRect,
        cons: &SizeCon,
        ds: &mut TxfDrawState<'_, F>,
        config: &LayoutConfig,
    ) -> Result<usize, LayoutError>;
}
