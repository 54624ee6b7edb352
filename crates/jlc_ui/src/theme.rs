//! Layout constants for JLC2KiCad GUI.

/// Spacing constants.
pub mod spacing {
    /// Extra small spacing (4px)
    pub const XS: f32 = 4.0;
    /// Small spacing (8px)
    pub const SM: f32 = 8.0;
    /// Large spacing (16px)
    pub const LG: f32 = 16.0;
    /// Extra large spacing (24px)
    pub const XL: f32 = 24.0;
}

/// Font sizes.
pub mod font {
    /// Small font size
    pub const SM: f32 = 11.0;
    /// Normal font size
    pub const NORMAL: f32 = 13.0;
    /// Large font size
    pub const LG: f32 = 16.0;
}

/// Width of the label column in form rows.
pub const LABEL_WIDTH: f32 = 140.0;

/// Initial window size.
pub const WINDOW_SIZE: (f32, f32) = (680.0, 660.0);
