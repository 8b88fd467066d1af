use log::{debug, trace, warn};

use crate::style::{AlignFlags, GuiRect, LayoutBox, LayoutForm};
use crate::view::align::gui_align;
use crate::view::components::{Button, Label, List, Widget};
use crate::view::content::{DataCursor, GuiData};
use crate::view::font::{FontMetrics, TxfDrawState};
use crate::view::gpu::{DisplaySize, GpuLists};
use crate::view::program::{Instr, Opcode, Program};
use crate::view::quad_writer::QuadWriter;
use crate::view::render_pass::DrawRectPass;
use crate::{LayoutConfig, LayoutError};

/// Maximum number of nested layout containers.
pub const LO_DEPTH: usize = 6;

/// Create a GPU draw list for widgets using a bytecode program and a
/// single-pass layout algorithm.
///
/// The program must begin with a `LAYOUT_*` instruction and end with `END`
/// or the `LAYOUT_END` that closes the first container.
///
/// * `prim_list` - The list written through [`GpuLists::begin_tris`].
/// * `root` - A pixel area for the layout, or `None` to use the display size.
/// * `data` - Content for the widget and store opcodes, in program order.
///
/// Returns the number of attributes written. On error the list is aborted
/// so no partial frame is drawn.
pub fn gui_layout<G, D, F>(
    gpu: &mut G,
    prim_list: u32,
    display: &D,
    root: Option<GuiRect>,
    font: &F,
    bytecode: &[u8],
    data: &mut [GuiData<'_>],
) -> Result<usize, LayoutError>
where
    G: GpuLists + ?Sized,
    D: DisplaySize + ?Sized,
    F: FontMetrics + ?Sized,
{
    LayoutVm::new(font, LayoutConfig::default()).layout(gpu, prim_list, display, root, bytecode, data)
}

pub struct LayoutVm<'f, F: FontMetrics + ?Sized> {
    ds: TxfDrawState<'f, F>,
    config: LayoutConfig,
    stack: [LayoutBox; LO_DEPTH],
    depth: usize,
    wbox: GuiRect,
}

impl<'f, F: FontMetrics + ?Sized> LayoutVm<'f, F> {
    pub fn new(font: &'f F, config: LayoutConfig) -> Self {
        Self {
            ds: TxfDrawState::new(font),
            config,
            stack: [LayoutBox::default(); LO_DEPTH],
            depth: 0,
            wbox: GuiRect::default(),
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn layout<G, D>(
        &mut self,
        gpu: &mut G,
        prim_list: u32,
        display: &D,
        root: Option<GuiRect>,
        bytecode: &[u8],
        data: &mut [GuiData<'_>],
    ) -> Result<usize, LayoutError>
    where
        G: GpuLists + ?Sized,
        D: DisplaySize + ?Sized,
    {
        let result = {
            let mut writer = QuadWriter::new(gpu.begin_tris(prim_list));
            let mut cursor = DataCursor::new(data);
            self.run(&mut Program::new(bytecode), root, display, &mut cursor, &mut writer)
                .map(|()| {
                    if cursor.remaining() > 0 {
                        warn!("layout left {} content entries unused", cursor.remaining());
                    }
                    writer.cursor()
                })
        };

        match result {
            Ok(used) => {
                debug!("layout list {prim_list}: {used} attributes");
                gpu.end_tris(prim_list, used);
                Ok(used)
            }
            Err(err) => {
                gpu.abort_tris(prim_list);
                Err(err)
            }
        }
    }

    /// Interprets `program` until `END` or the outermost `LAYOUT_END`.
    pub fn run<D: DisplaySize + ?Sized>(
        &mut self,
        program: &mut Program<'_>,
        root: Option<GuiRect>,
        display: &D,
        data: &mut DataCursor<'_, '_>,
        writer: &mut QuadWriter<'_>,
    ) -> Result<(), LayoutError> {
        // Default to the natural size of the font.
        self.ds.set_font_size(self.ds.font.font_size());
        self.depth = 0;
        self.wbox = GuiRect::default();

        loop {
            let instr = program.next_instr()?;
            let op = instr.opcode();
            match instr {
                Instr::End => {
                    if self.depth > 0 {
                        trace!("END closes {} open containers", self.depth);
                        self.depth = 0;
                    }
                    return Ok(());
                }
                Instr::Layout(form) => self.push(form, root, display)?,
                Instr::LayoutGrid { columns } => {
                    return Err(LayoutError::GridUnsupported { columns });
                }
                Instr::LayoutEnd => {
                    if self.pop()? {
                        return Ok(());
                    }
                }
                Instr::Margin { v, h } => {
                    let lo = self.top(op)?;
                    lo.margin_v(v);
                    lo.margin_h(h);
                }
                Instr::MarginV(percent) => self.top(op)?.margin_v(percent),
                Instr::MarginH(percent) => self.top(op)?.margin_h(percent),
                Instr::SpacingPer(percent) => self.top(op)?.set_spacing_percent(percent),
                Instr::SpacingEm(tenths) => {
                    let psize = self.ds.psize;
                    self.top(op)?.set_spacing_em(tenths, psize);
                }
                Instr::FixWidthPer(percent) => self.top(op)?.set_fixed_width_percent(percent),
                Instr::FixHeightPer(percent) => self.top(op)?.set_fixed_height_percent(percent),
                Instr::FromBottom | Instr::FromRight => self.top(op)?.set_backwards(),
                Instr::AlignLeft => self.top(op)?.align_h(AlignFlags::LEFT),
                Instr::AlignRight => self.top(op)?.align_h(AlignFlags::RIGHT),
                Instr::AlignTop => self.top(op)?.align_v(AlignFlags::TOP),
                Instr::AlignBottom => self.top(op)?.align_v(AlignFlags::BOTTOM),
                Instr::AlignHCenter => self.top(op)?.align_h(AlignFlags::empty()),
                Instr::AlignVCenter => self.top(op)?.align_v(AlignFlags::empty()),
                Instr::AlignCenter => self.top(op)?.align_center(),
                Instr::GapPer(percent) => self.top(op)?.gap_percent(percent),
                Instr::FontSize(points) => self.ds.set_font_size(f32::from(points)),
                Instr::BgColor(color_index) => {
                    let rect = self.top(op)?.rect();
                    DrawRectPass::new(rect, color_index).execute(self.ds.font, writer)?;
                }
                Instr::Button => {
                    let text = data.text(op)?;
                    self.place(op, &Button::new(text), writer)?;
                }
                Instr::Label => {
                    let text = data.text(op)?;
                    self.place(op, &Label::new(text), writer)?;
                }
                Instr::List => {
                    let table = data.list(op)?;
                    self.place(op, &List::new(table), writer)?;
                }
                Instr::StoreArea => *data.area(op)? = self.wbox,
            }
        }
    }

    fn top(&mut self, op: Opcode) -> Result<&mut LayoutBox, LayoutError> {
        match self.depth {
            0 => Err(LayoutError::NoContainer(op)),
            depth => Ok(&mut self.stack[depth - 1]),
        }
    }

    fn push<D: DisplaySize + ?Sized>(
        &mut self,
        form: LayoutForm,
        root: Option<GuiRect>,
        display: &D,
    ) -> Result<(), LayoutError> {
        let rect = match self.depth {
            0 => root.unwrap_or_else(|| {
                let (w, h) = display.display_size();
                GuiRect::new(0, 0, w, h)
            }),
            LO_DEPTH => return Err(LayoutError::StackOverflow(LO_DEPTH)),
            depth => self.stack[depth - 1].remaining(),
        };
        self.stack[self.depth] = LayoutBox::new(rect, form);
        self.depth += 1;
        trace!("push {form:?} {rect:?} depth {}", self.depth);
        Ok(())
    }

    /// Returns true when the outermost container was closed.
    fn pop(&mut self) -> Result<bool, LayoutError> {
        if self.depth == 0 {
            return Err(LayoutError::UnbalancedEnd);
        }
        self.depth -= 1;
        trace!("pop depth {}", self.depth);
        Ok(self.depth == 0)
    }

    fn place<W: Widget>(
        &mut self,
        op: Opcode,
        widget: &W,
        writer: &mut QuadWriter<'_>,
    ) -> Result<(), LayoutError> {
        let cons = widget.measure(&self.ds, &self.config);
        let lo = self.top(op)?;
        self.wbox = gui_align(lo, &cons);
        let end = widget.emit(writer, &self.wbox, &cons, &mut self.ds, &self.config)?;
        trace!("{op:?} at {:?}, cursor {end}", self.wbox);
        Ok(())
    }
}
