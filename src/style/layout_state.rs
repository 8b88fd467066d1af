use bitflags::bitflags;

/// Pixel rectangle. `(x, y)` is the bottom left corner; y grows upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct GuiRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl GuiRect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub const fn right(&self) -> i32 {
        self.x + self.w
    }

    pub const fn top(&self) -> i32 {
        self.y + self.h
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutForm {
    Horizontal,
    #[default]
    Vertical,
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct AlignFlags: u8 {
        const LEFT = 0x01;
        const RIGHT = 0x02;
        const TOP = 0x04;
        const BOTTOM = 0x08;
        /// Place children from the trailing edge of the major axis.
        const BACKWARDS = 0x10;

        const H_AXIS = Self::LEFT.bits() | Self::RIGHT.bits();
        const V_AXIS = Self::TOP.bits() | Self::BOTTOM.bits();
    }
}

/// State of one nested layout container.
///
/// `x, y, w, h` is the remaining usable area and `next_pos` the coordinate on
/// the major axis where the next child begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutBox {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
    pub next_pos: i32,
    pub form: LayoutForm,
    pub align: AlignFlags,
    pub fixed_w: i32,
    pub fixed_h: i32,
    pub spacing: i32,
}

fn percent_of(percent: u8, extent: i32) -> i32 {
    i32::from(percent) * extent / 100
}

impl LayoutBox {
    /// Container placing forwards and centered, with no spacing or fixed sizes.
    pub fn new(rect: GuiRect, form: LayoutForm) -> Self {
        let mut lo = Self {
            x: rect.x,
            y: rect.y,
            w: rect.w,
            h: rect.h,
            next_pos: 0,
            form,
            align: AlignFlags::empty(),
            fixed_w: 0,
            fixed_h: 0,
            spacing: 0,
        };
        lo.reseed();
        lo
    }

    pub fn rect(&self) -> GuiRect {
        GuiRect::new(self.x, self.y, self.w, self.h)
    }

    pub fn is_backwards(&self) -> bool {
        self.align.contains(AlignFlags::BACKWARDS)
    }

    pub fn major_extent(&self) -> i32 {
        match self.form {
            LayoutForm::Horizontal => self.w,
            LayoutForm::Vertical => self.h,
        }
    }

    /// Moves `next_pos` to the leading edge for the current form and direction.
    /// Vertical containers run top to bottom unless placing backwards.
    pub fn reseed(&mut self) {
        self.next_pos = match (self.form, self.is_backwards()) {
            (LayoutForm::Horizontal, false) => self.x,
            (LayoutForm::Horizontal, true) => self.x + self.w,
            (LayoutForm::Vertical, false) => self.y + self.h,
            (LayoutForm::Vertical, true) => self.y,
        };
    }

    /// The part of this container not yet consumed along the major axis.
    pub fn remaining(&self) -> GuiRect {
        match (self.form, self.is_backwards()) {
            (LayoutForm::Horizontal, false) => {
                GuiRect::new(self.next_pos, self.y, self.right() - self.next_pos, self.h)
            }
            (LayoutForm::Horizontal, true) => {
                GuiRect::new(self.x, self.y, self.next_pos - self.x, self.h)
            }
            (LayoutForm::Vertical, false) => {
                GuiRect::new(self.x, self.y, self.w, self.next_pos - self.y)
            }
            (LayoutForm::Vertical, true) => {
                GuiRect::new(self.x, self.next_pos, self.w, self.top() - self.next_pos)
            }
        }
    }

    fn right(&self) -> i32 {
        self.x + self.w
    }

    fn top(&self) -> i32 {
        self.y + self.h
    }

    pub fn margin_v(&mut self, percent: u8) {
        let arg = percent_of(percent, self.h);
        self.y += arg;
        self.h -= arg + arg;
        if self.form == LayoutForm::Vertical {
            self.reseed();
        }
    }

    pub fn margin_h(&mut self, percent: u8) {
        let arg = percent_of(percent, self.w);
        self.x += arg;
        self.w -= arg + arg;
        if self.form == LayoutForm::Horizontal {
            self.reseed();
        }
    }

    pub fn set_spacing_percent(&mut self, percent: u8) {
        self.spacing = percent_of(percent, self.major_extent());
    }

    /// Spacing in tenths of the current point size.
    pub fn set_spacing_em(&mut self, tenths: u8, point_size: f32) {
        self.spacing = (f32::from(tenths) * point_size / 10.0) as i32;
    }

    pub fn set_fixed_width_percent(&mut self, percent: u8) {
        self.fixed_w = percent_of(percent, self.w);
    }

    pub fn set_fixed_height_percent(&mut self, percent: u8) {
        self.fixed_h = percent_of(percent, self.h);
    }

    pub fn set_backwards(&mut self) {
        self.align.insert(AlignFlags::BACKWARDS);
        self.reseed();
    }

    pub fn align_h(&mut self, edge: AlignFlags) {
        self.align.remove(AlignFlags::H_AXIS);
        self.align.insert(edge & AlignFlags::H_AXIS);
    }

    pub fn align_v(&mut self, edge: AlignFlags) {
        self.align.remove(AlignFlags::V_AXIS);
        self.align.insert(edge & AlignFlags::V_AXIS);
    }

    /// Centers both axes. The direction bit is kept.
    pub fn align_center(&mut self) {
        self.align &= AlignFlags::BACKWARDS;
    }

    /// Skips `percent` of the major extent in the placement direction.
    pub fn gap_percent(&mut self, percent: u8) {
        let arg = percent_of(percent, self.major_extent());
        match (self.form, self.is_backwards()) {
            (LayoutForm::Horizontal, false) | (LayoutForm::Vertical, true) => self.next_pos += arg,
            (LayoutForm::Horizontal, true) | (LayoutForm::Vertical, false) => self.next_pos -= arg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AlignFlags, GuiRect, LayoutBox, LayoutForm};

    #[test]
    fn margin_shrinks_symmetrically_and_reseeds_major_axis() {
        let mut lo = LayoutBox::new(GuiRect::new(0, 0, 200, 100), LayoutForm::Vertical);
        lo.margin_v(10);
        assert_eq!(lo.y, 10);
        assert_eq!(lo.h, 80);
        assert_eq!(lo.next_pos, 90);

        lo.margin_h(25);
        assert_eq!(lo.x, 50);
        assert_eq!(lo.w, 100);
        // Cross-axis margins leave the cursor alone.
        assert_eq!(lo.next_pos, 90);
    }

    #[test]
    fn backwards_reseeds_to_trailing_edge() {
        let mut row = LayoutBox::new(GuiRect::new(10, 0, 200, 50), LayoutForm::Horizontal);
        assert_eq!(row.next_pos, 10);
        row.set_backwards();
        assert_eq!(row.next_pos, 210);

        let mut column = LayoutBox::new(GuiRect::new(0, 20, 100, 80), LayoutForm::Vertical);
        assert_eq!(column.next_pos, 100);
        column.set_backwards();
        assert_eq!(column.next_pos, 20);
    }

    #[test]
    fn axis_alignment_bits_are_independent() {
        let mut lo = LayoutBox::new(GuiRect::new(0, 0, 100, 100), LayoutForm::Horizontal);
        lo.set_backwards();
        lo.align_h(AlignFlags::LEFT);
        lo.align_v(AlignFlags::TOP);
        lo.align_h(AlignFlags::RIGHT);
        assert_eq!(
            lo.align,
            AlignFlags::RIGHT | AlignFlags::TOP | AlignFlags::BACKWARDS
        );

        lo.align_v(AlignFlags::empty());
        assert_eq!(lo.align, AlignFlags::RIGHT | AlignFlags::BACKWARDS);

        lo.align_center();
        assert_eq!(lo.align, AlignFlags::BACKWARDS);
    }

    #[test]
    fn remaining_area_follows_direction() {
        let mut row = LayoutBox::new(GuiRect::new(0, 0, 200, 50), LayoutForm::Horizontal);
        row.next_pos = 60;
        assert_eq!(row.remaining(), GuiRect::new(60, 0, 140, 50));
        row.align.insert(AlignFlags::BACKWARDS);
        assert_eq!(row.remaining(), GuiRect::new(0, 0, 60, 50));

        let mut column = LayoutBox::new(GuiRect::new(0, 0, 100, 100), LayoutForm::Vertical);
        column.next_pos = 70;
        assert_eq!(column.remaining(), GuiRect::new(0, 0, 100, 70));
    }

    #[test]
    fn spacing_and_gap_use_major_extent() {
        let mut row = LayoutBox::new(GuiRect::new(0, 0, 200, 50), LayoutForm::Horizontal);
        row.set_spacing_percent(5);
        assert_eq!(row.spacing, 10);
        row.gap_percent(10);
        assert_eq!(row.next_pos, 20);
        row.set_spacing_em(15, 10.0);
        assert_eq!(row.spacing, 15);
    }

    #[test]
    fn gap_moves_with_placement_direction() {
        let mut row = LayoutBox::new(GuiRect::new(0, 0, 200, 50), LayoutForm::Horizontal);
        row.set_backwards();
        row.gap_percent(10);
        assert_eq!(row.next_pos, 180);

        let mut column = LayoutBox::new(GuiRect::new(0, 0, 200, 100), LayoutForm::Vertical);
        column.gap_percent(10);
        assert_eq!(column.next_pos, 90);
        assert_eq!(column.remaining(), GuiRect::new(0, 0, 200, 90));

        let mut rising = LayoutBox::new(GuiRect::new(0, 0, 200, 100), LayoutForm::Vertical);
        rising.set_backwards();
        rising.gap_percent(10);
        assert_eq!(rising.next_pos, 10);
        assert_eq!(rising.remaining(), GuiRect::new(0, 10, 200, 90));
    }
}
