use thiserror::Error;

use crate::view::program::Opcode;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Layout stack overflow: more than {0} nested containers.")]
    StackOverflow(usize),
    #[error("Opcode {0:?} requires an open layout container.")]
    NoContainer(Opcode),
    #[error("LAYOUT_END without an open layout container.")]
    UnbalancedEnd,
    #[error("Unknown opcode {byte:#04x} at offset {offset}.")]
    UnknownOpcode { byte: u8, offset: usize },
    #[error("Opcode {op:?} at offset {offset} is missing operands.")]
    TruncatedProgram { op: Opcode, offset: usize },
    #[error("Program ended without END or a closing LAYOUT_END.")]
    MissingEnd,
    #[error("Grid layout ({columns} columns) is not supported.")]
    GridUnsupported { columns: u8 },
    #[error("Opcode {0:?} has no content pointer left to consume.")]
    MissingData(Opcode),
    #[error("Opcode {op:?} expected {expected} content, got {found}.")]
    DataMismatch {
        op: Opcode,
        expected: &'static str,
        found: &'static str,
    },
    #[error("Vertex buffer overrun: need {needed} attributes, {capacity} reserved.")]
    BufferOverrun { needed: usize, capacity: usize },
}
