use crate::{LayoutConfig, LayoutError};
use crate::style::GuiRect;
use crate::view::components::{SizeCon, Widget};
use crate::view::font::{FontMetrics, TxfDrawState};
use crate::view::quad_writer::QuadWriter;
use crate::view::render_pass::TextPass;
use crate::view::string_table::StringTable;

/// Rows of text from a string table, first entry at the top.
pub struct List<'a> {
    pub table: &'a StringTable,
}

impl<'a> List<'a> {
    pub fn new(table: &'a StringTable) -> Self {
        Self { table }
    }

    /// Longest entry by character count; the first one wins ties.
    fn longest_entry(&self) -> Option<&'a str> {
        let mut longest: Option<(usize, &'a str)> = None;
        for text in self.table.iter() {
            let len = text.chars().count();
            if longest.is_none_or(|(max, _)| len > max) {
                longest = Some((len, text));
            }
        }
        longest.map(|(_, text)| text)
    }
}

impl Widget for List<'_> {
    fn measure<F: FontMetrics + ?Sized>(
        &self,
        ds: &TxfDrawState<'_, F>,
        config: &LayoutConfig,
    ) -> SizeCon {
        let sample = self.longest_entry().unwrap_or(config.list_placeholder);
        let [text_w, line_h] = ds.text_size(sample);
        let rows = self.table.len().max(config.list_min_rows);
        SizeCon {
            min_w: (ds.psize * config.list_min_width) as i32,
            min_h: config.list_min_rows as i32 * line_h as i32,
            max_w: config.list_max_width,
            max_h: config.list_max_height,
            pref_w: text_w as i32,
            pref_h: (line_h * rows as f32) as i32,
        }
    }

    fn emit<F: FontMetrics + ?Sized>(
        &self,
        writer: &mut QuadWriter<'_>,
        rect: &GuiRect,
        _cons: &SizeCon,
        ds: &mut TxfDrawState<'_, F>,
        _config: &LayoutConfig,
    ) -> Result<usize, LayoutError> {
        let left = rect.x as f32;
        ds.y = rect.top() as f32 - ds.descender_px();
        for text in self.table.iter() {
            ds.x = left;
            ds.y -= ds.line_spacing;
            TextPass::new(text).execute(ds, writer)?;
        }
        ds.x = left;
        Ok(writer.cursor())
    }
}
