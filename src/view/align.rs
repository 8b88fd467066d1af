use crate::style::{AlignFlags, GuiRect, LayoutBox, LayoutForm};
use crate::view::components::SizeCon;

/// Places a widget of size `cons` in `lo` and advances `lo.next_pos`.
///
/// Children that do not fit are placed past the container bounds.
pub fn gui_align(lo: &mut LayoutBox, cons: &SizeCon) -> GuiRect {
    let mut wbox = GuiRect {
        w: cons.pref_w,
        h: cons.pref_h,
        ..GuiRect::default()
    };
    if lo.fixed_w > 0 && wbox.w < lo.fixed_w {
        wbox.w = lo.fixed_w;
    }
    if lo.fixed_h > 0 && wbox.h < lo.fixed_h {
        wbox.h = lo.fixed_h;
    }

    match lo.form {
        LayoutForm::Horizontal => {
            if lo.is_backwards() {
                // Right to left.
                wbox.x = lo.next_pos - wbox.w;
                lo.next_pos = wbox.x - lo.spacing;
            } else {
                wbox.x = lo.next_pos;
                lo.next_pos += wbox.w + lo.spacing;
            }

            wbox.y = if lo.align.contains(AlignFlags::BOTTOM) {
                lo.y
            } else if lo.align.contains(AlignFlags::TOP) {
                (lo.y + lo.h) - wbox.h
            } else {
                (lo.y + lo.h / 2) - (wbox.h / 2)
            };
        }
        LayoutForm::Vertical => {
            if lo.is_backwards() {
                // Bottom to top.
                wbox.y = lo.next_pos;
                lo.next_pos += wbox.h + lo.spacing;
            } else {
                wbox.y = lo.next_pos - wbox.h;
                lo.next_pos = wbox.y - lo.spacing;
            }

            wbox.x = if lo.align.contains(AlignFlags::LEFT) {
                lo.x
            } else if lo.align.contains(AlignFlags::RIGHT) {
                (lo.x + lo.w) - wbox.w
            } else {
                (lo.x + lo.w / 2) - (wbox.w / 2)
            };
        }
    }
    wbox
}

#[cfg(test)]
mod tests {
    use super::gui_align;
    use crate::style::{AlignFlags, GuiRect, LayoutBox, LayoutForm};
    use crate::view::components::SizeCon;

    #[test]
    fn forward_row_advances_by_width_and_spacing() {
        let mut lo = LayoutBox::new(GuiRect::new(10, 0, 200, 40), LayoutForm::Horizontal);
        lo.spacing = 4;
        let first = gui_align(&mut lo, &SizeCon::fixed(30, 20));
        let second = gui_align(&mut lo, &SizeCon::fixed(50, 10));
        assert_eq!(first, GuiRect::new(10, 10, 30, 20));
        assert_eq!(second, GuiRect::new(44, 15, 50, 10));
        assert_eq!(lo.next_pos, 98);
    }

    #[test]
    fn backward_row_anchors_trailing_edge() {
        let mut lo = LayoutBox::new(GuiRect::new(10, 0, 200, 40), LayoutForm::Horizontal);
        lo.set_backwards();
        lo.spacing = 4;
        let placed = gui_align(&mut lo, &SizeCon::fixed(30, 20));
        assert_eq!(placed.x, 10 + 200 - 30);
        assert_eq!(lo.next_pos, 176);
    }

    #[test]
    fn column_runs_top_down_with_cross_alignment() {
        let mut lo = LayoutBox::new(GuiRect::new(0, 0, 100, 200), LayoutForm::Vertical);
        lo.align_h(AlignFlags::RIGHT);
        let placed = gui_align(&mut lo, &SizeCon::fixed(30, 20));
        assert_eq!(placed, GuiRect::new(70, 180, 30, 20));

        lo.set_backwards();
        lo.align_h(AlignFlags::LEFT);
        let placed = gui_align(&mut lo, &SizeCon::fixed(30, 20));
        assert_eq!(placed, GuiRect::new(0, 0, 30, 20));
        assert_eq!(lo.next_pos, 20);
    }

    #[test]
    fn fixed_sizes_only_raise_preferred() {
        let mut lo = LayoutBox::new(GuiRect::new(0, 0, 100, 100), LayoutForm::Horizontal);
        lo.fixed_w = 40;
        lo.fixed_h = 5;
        lo.align_v(AlignFlags::TOP);
        let placed = gui_align(&mut lo, &SizeCon::fixed(30, 20));
        assert_eq!(placed, GuiRect::new(0, 80, 40, 20));
        let placed = gui_align(&mut lo, &SizeCon::fixed(60, 20));
        assert_eq!(placed.w, 60);
    }
}
