use crate::LayoutError;
use crate::style::LayoutForm;

/// Layout bytecode. Operand bytes follow the opcode; see [`Opcode::operand_count`].
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    End,
    LayoutV,
    LayoutH,
    /// columns
    LayoutGrid,
    LayoutEnd,
    /// vertical percent, horizontal percent
    MarginPer,
    /// percent
    MarginVPer,
    /// percent
    MarginHPer,
    /// percent
    SpacingPer,
    /// font-em-tenth
    SpacingEm,
    /// percent
    FixWidthPer,
    /// percent
    FixHeightPer,
    FromBottom,
    FromRight,
    AlignLeft,
    AlignRight,
    AlignTop,
    AlignBottom,
    AlignHCenter,
    AlignVCenter,
    AlignCenter,
    /// percent
    GapPer,
    /// point-size
    FontSize,
    /// color-index
    BgColorCi,
    ButtonDtS,
    LabelDtS,
    ListDtSt,
    StoreDtArea,
}

const OPCODES: [Opcode; 28] = [
    Opcode::End,
    Opcode::LayoutV,
    Opcode::LayoutH,
    Opcode::LayoutGrid,
    Opcode::LayoutEnd,
    Opcode::MarginPer,
    Opcode::MarginVPer,
    Opcode::MarginHPer,
    Opcode::SpacingPer,
    Opcode::SpacingEm,
    Opcode::FixWidthPer,
    Opcode::FixHeightPer,
    Opcode::FromBottom,
    Opcode::FromRight,
    Opcode::AlignLeft,
    Opcode::AlignRight,
    Opcode::AlignTop,
    Opcode::AlignBottom,
    Opcode::AlignHCenter,
    Opcode::AlignVCenter,
    Opcode::AlignCenter,
    Opcode::GapPer,
    Opcode::FontSize,
    Opcode::BgColorCi,
    Opcode::ButtonDtS,
    Opcode::LabelDtS,
    Opcode::ListDtSt,
    Opcode::StoreDtArea,
];

impl Opcode {
    pub const fn operand_count(self) -> usize {
        match self {
            Opcode::MarginPer => 2,
            Opcode::LayoutGrid
            | Opcode::MarginVPer
            | Opcode::MarginHPer
            | Opcode::SpacingPer
            | Opcode::SpacingEm
            | Opcode::FixWidthPer
            | Opcode::FixHeightPer
            | Opcode::GapPer
            | Opcode::FontSize
            | Opcode::BgColorCi => 1,
            _ => 0,
        }
    }

    /// Whether the opcode takes one entry from the content array.
    pub const fn consumes_data(self) -> bool {
        matches!(
            self,
            Opcode::ButtonDtS | Opcode::LabelDtS | Opcode::ListDtSt | Opcode::StoreDtArea
        )
    }
}

impl TryFrom<u8> for Opcode {
    type Error = u8;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        OPCODES.get(usize::from(byte)).copied().ok_or(byte)
    }
}

/// A decoded instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instr {
    End,
    Layout(LayoutForm),
    LayoutGrid { columns: u8 },
    LayoutEnd,
    Margin { v: u8, h: u8 },
    MarginV(u8),
    MarginH(u8),
    SpacingPer(u8),
    SpacingEm(u8),
    FixWidthPer(u8),
    FixHeightPer(u8),
    FromBottom,
    FromRight,
    AlignLeft,
    AlignRight,
    AlignTop,
    AlignBottom,
    AlignHCenter,
    AlignVCenter,
    AlignCenter,
    GapPer(u8),
    FontSize(u8),
    BgColor(u8),
    Button,
    Label,
    List,
    StoreArea,
}

impl Instr {
    fn decode(op: Opcode, args: &[u8]) -> Self {
        let arg = |i: usize| args[i];
        match op {
            Opcode::End => Instr::End,
            Opcode::LayoutV => Instr::Layout(LayoutForm::Vertical),
            Opcode::LayoutH => Instr::Layout(LayoutForm::Horizontal),
            Opcode::LayoutGrid => Instr::LayoutGrid { columns: arg(0) },
            Opcode::LayoutEnd => Instr::LayoutEnd,
            Opcode::MarginPer => Instr::Margin {
                v: arg(0),
                h: arg(1),
            },
            Opcode::MarginVPer => Instr::MarginV(arg(0)),
            Opcode::MarginHPer => Instr::MarginH(arg(0)),
            Opcode::SpacingPer => Instr::SpacingPer(arg(0)),
            Opcode::SpacingEm => Instr::SpacingEm(arg(0)),
            Opcode::FixWidthPer => Instr::FixWidthPer(arg(0)),
            Opcode::FixHeightPer => Instr::FixHeightPer(arg(0)),
            Opcode::FromBottom => Instr::FromBottom,
            Opcode::FromRight => Instr::FromRight,
            Opcode::AlignLeft => Instr::AlignLeft,
            Opcode::AlignRight => Instr::AlignRight,
            Opcode::AlignTop => Instr::AlignTop,
            Opcode::AlignBottom => Instr::AlignBottom,
            Opcode::AlignHCenter => Instr::AlignHCenter,
            Opcode::AlignVCenter => Instr::AlignVCenter,
            Opcode::AlignCenter => Instr::AlignCenter,
            Opcode::GapPer => Instr::GapPer(arg(0)),
            Opcode::FontSize => Instr::FontSize(arg(0)),
            Opcode::BgColorCi => Instr::BgColor(arg(0)),
            Opcode::ButtonDtS => Instr::Button,
            Opcode::LabelDtS => Instr::Label,
            Opcode::ListDtSt => Instr::List,
            Opcode::StoreDtArea => Instr::StoreArea,
        }
    }

    pub fn opcode(&self) -> Opcode {
        match self {
            Instr::End => Opcode::End,
            Instr::Layout(LayoutForm::Vertical) => Opcode::LayoutV,
            Instr::Layout(LayoutForm::Horizontal) => Opcode::LayoutH,
            Instr::LayoutGrid { .. } => Opcode::LayoutGrid,
            Instr::LayoutEnd => Opcode::LayoutEnd,
            Instr::Margin { .. } => Opcode::MarginPer,
            Instr::MarginV(_) => Opcode::MarginVPer,
            Instr::MarginH(_) => Opcode::MarginHPer,
            Instr::SpacingPer(_) => Opcode::SpacingPer,
            Instr::SpacingEm(_) => Opcode::SpacingEm,
            Instr::FixWidthPer(_) => Opcode::FixWidthPer,
            Instr::FixHeightPer(_) => Opcode::FixHeightPer,
            Instr::FromBottom => Opcode::FromBottom,
            Instr::FromRight => Opcode::FromRight,
            Instr::AlignLeft => Opcode::AlignLeft,
            Instr::AlignRight => Opcode::AlignRight,
            Instr::AlignTop => Opcode::AlignTop,
            Instr::AlignBottom => Opcode::AlignBottom,
            Instr::AlignHCenter => Opcode::AlignHCenter,
            Instr::AlignVCenter => Opcode::AlignVCenter,
            Instr::AlignCenter => Opcode::AlignCenter,
            Instr::GapPer(_) => Opcode::GapPer,
            Instr::FontSize(_) => Opcode::FontSize,
            Instr::BgColor(_) => Opcode::BgColorCi,
            Instr::Button => Opcode::ButtonDtS,
            Instr::Label => Opcode::LabelDtS,
            Instr::List => Opcode::ListDtSt,
            Instr::StoreArea => Opcode::StoreDtArea,
        }
    }

    pub fn encode(&self, out: &mut Vec<u8>) {
        out.push(self.opcode() as u8);
        match *self {
            Instr::Margin { v, h } => out.extend_from_slice(&[v, h]),
            Instr::LayoutGrid { columns: arg }
            | Instr::MarginV(arg)
            | Instr::MarginH(arg)
            | Instr::SpacingPer(arg)
            | Instr::SpacingEm(arg)
            | Instr::FixWidthPer(arg)
            | Instr::FixHeightPer(arg)
            | Instr::GapPer(arg)
            | Instr::FontSize(arg)
            | Instr::BgColor(arg) => out.push(arg),
            _ => {}
        }
    }
}

/// Bounds-checked reader over a bytecode program.
#[derive(Debug, Clone)]
pub struct Program<'a> {
    code: &'a [u8],
    pc: usize,
}

impl<'a> Program<'a> {
    pub fn new(code: &'a [u8]) -> Self {
        Self { code, pc: 0 }
    }

    /// Number of content entries `code` consumes, decoding every instruction.
    pub fn data_count(code: &[u8]) -> Result<usize, LayoutError> {
        let mut program = Program::new(code);
        let mut count = 0;
        while program.pc < code.len() {
            if program.next_instr()?.opcode().consumes_data() {
                count += 1;
            }
        }
        Ok(count)
    }

    pub fn next_instr(&mut self) -> Result<Instr, LayoutError> {
        let offset = self.pc;
        let &byte = self.code.get(offset).ok_or(LayoutError::MissingEnd)?;
        let op = Opcode::try_from(byte)
            .map_err(|byte| LayoutError::UnknownOpcode { byte, offset })?;
        let start = offset + 1;
        let end = start + op.operand_count();
        let args = self
            .code
            .get(start..end)
            .ok_or(LayoutError::TruncatedProgram { op, offset })?;
        self.pc = end;
        Ok(Instr::decode(op, args))
    }
}

/// Assembles a bytecode program.
#[derive(Debug, Clone, Default)]
pub struct ProgramBuilder {
    code: Vec<u8>,
}

impl ProgramBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn instr(mut self, instr: Instr) -> Self {
        instr.encode(&mut self.code);
        self
    }

    pub fn layout_v(self) -> Self {
        self.instr(Instr::Layout(LayoutForm::Vertical))
    }

    pub fn layout_h(self) -> Self {
        self.instr(Instr::Layout(LayoutForm::Horizontal))
    }

    pub fn layout_end(self) -> Self {
        self.instr(Instr::LayoutEnd)
    }

    pub fn margin(self, v: u8, h: u8) -> Self {
        self.instr(Instr::Margin { v, h })
    }

    pub fn margin_v(self, percent: u8) -> Self {
        self.instr(Instr::MarginV(percent))
    }

    pub fn margin_h(self, percent: u8) -> Self {
        self.instr(Instr::MarginH(percent))
    }

    pub fn spacing_per(self, percent: u8) -> Self {
        self.instr(Instr::SpacingPer(percent))
    }

    pub fn spacing_em(self, tenths: u8) -> Self {
        self.instr(Instr::SpacingEm(tenths))
    }

    pub fn fix_width(self, percent: u8) -> Self {
        self.instr(Instr::FixWidthPer(percent))
    }

    pub fn fix_height(self, percent: u8) -> Self {
        self.instr(Instr::FixHeightPer(percent))
    }

    pub fn from_bottom(self) -> Self {
        self.instr(Instr::FromBottom)
    }

    pub fn from_right(self) -> Self {
        self.instr(Instr::FromRight)
    }

    pub fn align_left(self) -> Self {
        self.instr(Instr::AlignLeft)
    }

    pub fn align_right(self) -> Self {
        self.instr(Instr::AlignRight)
    }

    pub fn align_top(self) -> Self {
        self.instr(Instr::AlignTop)
    }

    pub fn align_bottom(self) -> Self {
        self.instr(Instr::AlignBottom)
    }

    pub fn align_h_center(self) -> Self {
        self.instr(Instr::AlignHCenter)
    }

    pub fn align_v_center(self) -> Self {
        self.instr(Instr::AlignVCenter)
    }

    pub fn align_center(self) -> Self {
        self.instr(Instr::AlignCenter)
    }

    pub fn gap(self, percent: u8) -> Self {
        self.instr(Instr::GapPer(percent))
    }

    pub fn font_size(self, points: u8) -> Self {
        self.instr(Instr::FontSize(points))
    }

    pub fn bg_color(self, color_index: u8) -> Self {
        self.instr(Instr::BgColor(color_index))
    }

    pub fn button(self) -> Self {
        self.instr(Instr::Button)
    }

    pub fn label(self) -> Self {
        self.instr(Instr::Label)
    }

    pub fn list(self) -> Self {
        self.instr(Instr::List)
    }

    pub fn store_area(self) -> Self {
        self.instr(Instr::StoreArea)
    }

    pub fn end(self) -> Self {
        self.instr(Instr::End)
    }

    pub fn build(self) -> Vec<u8> {
        self.code
    }
}
