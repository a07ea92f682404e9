// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_dial::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Create a shadow tint
let shadow_tint = Color {
    a: opacity::SHADOW,
    ..palette::BLACK
};

// Use the spacing scale
let padding = spacing::MD; // 16px
```

## Modification

⚠️ Tokens are designed to be consistent. Before modifying:
1. Check the impact on all components
2. Maintain ratios (e.g., MD = XS * 2)
3. Run validation tests
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_800: Color = Color::from_rgb(0.122, 0.161, 0.216);
    pub const GRAY_700: Color = Color::from_rgb(0.216, 0.255, 0.318);
    pub const GRAY_600: Color = Color::from_rgb(0.294, 0.333, 0.388);
    pub const GRAY_300: Color = Color::from_rgb(0.82, 0.835, 0.859);
    pub const GRAY_100: Color = Color::from_rgb(0.953, 0.957, 0.965);
    pub const GRAY_50: Color = Color::from_rgb(0.976, 0.98, 0.984);

    // Brand colors (blue scale)
    pub const PRIMARY_50: Color = Color::from_rgb(0.937, 0.965, 1.0); // Note box tint
    pub const PRIMARY_600: Color = Color::from_rgb(0.145, 0.388, 0.922); // Note box text

    // Semantic colors
    pub const SUCCESS_500: Color = Color::from_rgb(0.298, 0.686, 0.314);
    pub const SUCCESS_600: Color = Color::from_rgb(0.263, 0.627, 0.278);
    pub const ERROR_500: Color = Color::from_rgb(0.937, 0.267, 0.267);
    pub const ERROR_600: Color = Color::from_rgb(0.863, 0.149, 0.149);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OPAQUE: f32 = 1.0;

    /// Drop shadow tint under cards and toasts
    pub const SHADOW: f32 = 0.1;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_MD: f32 = 24.0;

    // Interactive element heights
    pub const KEY_HEIGHT: f32 = 56.0;
    pub const ACTION_HEIGHT: f32 = 56.0;

    // Component widths
    pub const PANEL_WIDTH: f32 = 384.0;
    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale for the two-panel layout.
    //!
    //! The scale provides semantic sizes for consistent text hierarchy:
    //! - Display: The formatted number readout
    //! - Titles: Panel headings and keypad key labels
    //! - Body: Supporting copy and button labels

    /// Number readout in the display card
    pub const DISPLAY: f32 = 30.0;

    /// Panel headings, keypad key labels
    pub const TITLE_LG: f32 = 24.0;

    /// Section headers, action button labels, body copy
    pub const BODY_LG: f32 = 16.0;

    /// Toast text, secondary labels
    pub const BODY: f32 = 14.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const MD: f32 = 8.0; // Keypad keys, note box, toasts
    pub const LG: f32 = 12.0; // Display card, action buttons
    pub const XL: f32 = 24.0; // Panel cards
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::{opacity, palette};
    use iced::{Color, Shadow, Vector};

    const TINT: Color = Color {
        a: opacity::SHADOW,
        ..palette::BLACK
    };

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: TINT,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 6.0,
    };

    pub const LG: Shadow = Shadow {
        color: TINT,
        offset: Vector { x: 0.0, y: 12.0 },
        blur_radius: 24.0,
    };
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
    assert!(opacity::SHADOW > 0.0 && opacity::SHADOW < 1.0);

    // Typography validation
    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);

    // Radius validation
    assert!(radius::XL > radius::LG);
    assert!(radius::LG > radius::MD);

    // Color validation
    assert!(palette::PRIMARY_600.r >= 0.0 && palette::PRIMARY_600.r <= 1.0);
};
