// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Visual constants shared by the toast overlay and the demo window.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size and text metrics
- **Radius**: Toast corner radius

## Examples

```
use tons_toast::ui::design_tokens::{opacity, palette};
use iced::Color;

let toast_bg = Color {
    a: opacity::TOAST_BACKGROUND,
    ..palette::BLACK
};
assert!(toast_bg.a < 1.0);
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Toast background, dark enough for white text on any surface.
    pub const TOAST_BACKGROUND: f32 = 0.6;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Toast
    pub const TOAST_HEIGHT: f32 = 35.0;
    pub const TOAST_SIDE_MARGIN: f32 = 20.0;

    // Demo window
    pub const INPUT_WIDTH: f32 = 360.0;
    pub const BUTTON_HEIGHT: f32 = 36.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font sizes and the metrics used to estimate wrapped toast text.

    /// Medium title - App name, prominent labels
    pub const TITLE_MD: f32 = 20.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Toast text size.
    pub const TOAST: f32 = 12.0;

    /// Average advance of a glyph at [`TOAST`] size.
    pub const TOAST_GLYPH_WIDTH: f32 = 7.0;

    /// Baseline-to-baseline distance at [`TOAST`] size.
    pub const TOAST_LINE_HEIGHT: f32 = 16.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const TOAST: f32 = 10.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::TOAST_BACKGROUND > 0.0 && opacity::TOAST_BACKGROUND < 1.0);

    // Typography validation
    assert!(typography::TITLE_MD > typography::BODY);
    assert!(typography::BODY > typography::TOAST);
    assert!(typography::TOAST_LINE_HEIGHT > typography::TOAST);

    // Toast geometry validation
    assert!(sizing::TOAST_HEIGHT > typography::TOAST_LINE_HEIGHT);
    assert!(sizing::TOAST_SIDE_MARGIN >= 0.0);
    assert!(radius::TOAST * 2.0 <= sizing::TOAST_HEIGHT);
};
