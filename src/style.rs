//! Visual style of the itinerary template: palette, zebra fills, type sizes
//! and the fixed brand strings.

use serde::{Deserialize, Serialize};

/// An opaque sRGB colour in 0–255 channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels scaled to 0.0–1.0 for the PDF writer.
    pub fn to_unit(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }
}

pub const BLACK: Color = Color::rgb(0, 0, 0);
pub const WHITE: Color = Color::rgb(255, 255, 255);
/// Banner, badges, table headers, wordmark.
pub const BRAND_PURPLE: Color = Color::rgb(84, 28, 156);
/// Second word of every section heading.
pub const ACCENT_PURPLE: Color = Color::rgb(147, 51, 234);
pub const MUTED_TEXT: Color = Color::rgb(100, 100, 100);
pub const RULE_GREY: Color = Color::rgb(200, 200, 200);
pub const PANEL_GREY: Color = Color::rgb(245, 245, 245);
pub const LAVENDER: Color = Color::rgb(240, 230, 255);
pub const LAVENDER_DEEP: Color = Color::rgb(220, 200, 255);
pub const ZEBRA_EVEN: Color = Color::rgb(248, 240, 255);
pub const ZEBRA_ODD: Color = WHITE;

/// Row background for table row `index` (0-based).
pub fn zebra_fill(index: usize) -> Color {
    if index.is_multiple_of(2) {
        ZEBRA_EVEN
    } else {
        ZEBRA_ODD
    }
}

// Type sizes (pt)
pub const SIZE_LOGO: f32 = 20.0;
pub const SIZE_HEADING: f32 = 14.0;
pub const SIZE_BODY: f32 = 8.0;
pub const SIZE_SMALL: f32 = 7.0;

pub const RULE_WIDTH: f32 = 0.5;

/// Currency glyph prefixed to every amount.
pub const CURRENCY: &str = "\u{20B9}";

pub const BRAND_WORDMARK: &str = "vigovia";
pub const BRAND_TAGLINE: &str = "PLAN.PACK.GO";
pub const COMPANY_LINES: [&str; 3] = [
    "Vigovia Tech Pvt. Ltd",
    "Registered Office: Hd-109 Cinnabar Hills,",
    "Links Business Park, Karnataka, India",
];
pub const CONTACT_LINES: [&str; 2] = ["Phone: +91-99X9999999", "Email: Contact@Vigovia.Com"];

/// Amount formatted as a plain integer with the currency glyph.
pub fn currency(amount: i64) -> String {
    format!("{CURRENCY}{amount}")
}
