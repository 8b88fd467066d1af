#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Font texture color index used for button backgrounds.
    ///
    /// Defaults to `5`.
    pub button_color_index: u8,
    /// Horizontal padding added to button text, in point sizes.
    ///
    /// Defaults to `1.2`.
    pub button_padding: f32,
    /// Button height as a multiple of the text height.
    ///
    /// Defaults to `1.6`.
    pub button_height_factor: f32,
    /// Upward baseline nudge for button text, in point sizes.
    ///
    /// Defaults to `0.3`.
    pub button_baseline_nudge: f32,
    /// Rows a list reserves even when it holds fewer entries.
    ///
    /// Defaults to `3`.
    pub list_min_rows: usize,
    /// Minimum list width, in point sizes.
    pub list_min_width: f32,
    pub list_max_width: i32,
    pub list_max_height: i32,
    /// Text measured in place of the longest entry of an empty list.
    pub list_placeholder: &'static str,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            button_color_index: 5,
            button_padding: 1.2,
            button_height_factor: 1.6,
            button_baseline_nudge: 0.3,
            list_min_rows: 3,
            list_min_width: 4.0,
            list_max_width: 512,
            list_max_height: 9000,
            list_placeholder: "<empty>",
        }
    }
}
