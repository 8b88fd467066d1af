use crate::LayoutError;
use crate::style::GuiRect;
use crate::view::program::Opcode;
use crate::view::string_table::StringTable;

/// Content referenced by widget and store opcodes, in program order.
#[derive(Debug)]
pub enum GuiData<'a> {
    Text(&'a str),
    List(&'a StringTable),
    /// Destination for `STORE_DT_AREA`.
    Area(&'a mut GuiRect),
}

impl GuiData<'_> {
    fn kind(&self) -> &'static str {
        match self {
            GuiData::Text(_) => "text",
            GuiData::List(_) => "list",
            GuiData::Area(_) => "area",
        }
    }
}

/// Walks the content array, one entry per consuming opcode.
pub struct DataCursor<'d, 'a> {
    iter: std::slice::IterMut<'d, GuiData<'a>>,
}

impl<'d, 'a> DataCursor<'d, 'a> {
    pub fn new(data: &'d mut [GuiData<'a>]) -> Self {
        Self {
            iter: data.iter_mut(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.iter.len()
    }

    fn next(&mut self, op: Opcode) -> Result<&'d mut GuiData<'a>, LayoutError> {
        self.iter.next().ok_or(LayoutError::MissingData(op))
    }

    pub fn text(&mut self, op: Opcode) -> Result<&'a str, LayoutError> {
        match self.next(op)? {
            GuiData::Text(text) => Ok(*text),
            other => Err(mismatch(op, "text", other)),
        }
    }

    pub fn list(&mut self, op: Opcode) -> Result<&'a StringTable, LayoutError> {
        match self.next(op)? {
            GuiData::List(table) => Ok(*table),
            other => Err(mismatch(op, "list", other)),
        }
    }

    pub fn area(&mut self, op: Opcode) -> Result<&'d mut GuiRect, LayoutError> {
        match self.next(op)? {
            GuiData::Area(dst) => Ok(&mut **dst),
            other => Err(mismatch(op, "area", other)),
        }
    }
}

fn mismatch(op: Opcode, expected: &'static str, found: &GuiData<'_>) -> LayoutError {
    LayoutError::DataMismatch {
        op,
        expected,
        found: found.kind(),
    }
}
