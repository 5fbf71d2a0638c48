//! Layout config – the intermediate representation between itinerary layout
//! and PDF rendering. This is the "frozen" structure that encodes exactly what
//! goes on each page, plus where every block landed.

use serde::{Deserialize, Serialize};

use crate::style::Color;

/// A complete document layout ready for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Document title embedded in the PDF metadata.
    #[serde(default = "LayoutConfig::default_title")]
    pub title: String,
    /// Width of each page in PDF points (1 pt = 1/72 inch).
    pub page_width_pt: f32,
    /// Height of each page in PDF points.
    pub page_height_pt: f32,
    /// Ordered list of pages.
    pub pages: Vec<PageLayout>,
    /// Every block placed by the page-break policy, in emission order.
    #[serde(default)]
    pub blocks: Vec<BlockPlacement>,
}

/// One page of draw operations, in painting order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageLayout {
    pub page_index: usize,
    pub ops: Vec<DrawOp>,
}

/// A single absolute-positioned drawing primitive. Coordinates are points
/// from the page's top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        fill: Option<Color>,
        stroke: Option<Stroke>,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        stroke: Stroke,
    },
    Circle {
        cx: f32,
        cy: f32,
        radius: f32,
        fill: Color,
    },
    Text(TextRun),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
}

/// One line of Helvetica text. `y` is the vertical anchor the line is
/// centred on; the renderer derives the baseline from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    pub x: f32,
    pub y: f32,
    pub text: String,
    pub font_size: f32,
    pub color: Color,
}

/// What kind of block a [`BlockPlacement`] describes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "index", rename_all = "snake_case")]
pub enum BlockKind {
    Header,
    TripFacts,
    Day(i64),
    FlightSummary,
    FlightRow(usize),
    HotelBookings,
    HotelRow(usize),
    ImportantNotes,
    ServiceScope,
    InclusionSummary,
    ActivityTable,
    /// A zebra row of one of the supplementary tables.
    TableRow(usize),
    PaymentPlan,
    InstallmentRow(usize),
    VisaDetails,
}

/// Where a block was placed and how much vertical space it consumed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockPlacement {
    pub kind: BlockKind,
    pub page_index: usize,
    pub top: f32,
    pub height: f32,
}

impl BlockPlacement {
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

impl LayoutConfig {
    /// Create an empty A4 layout config.
    pub fn a4() -> Self {
        Self {
            title: Self::default_title(),
            // A4 at 72 dpi, rounded to whole points.
            page_width_pt: 595.0,
            page_height_pt: 842.0,
            pages: Vec::new(),
            blocks: Vec::new(),
        }
    }

    fn default_title() -> String {
        "Itinerary".to_string()
    }

    /// Serialise to JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Deserialise from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// All text runs of one page.
    pub fn page_texts(&self, page_index: usize) -> impl Iterator<Item = &TextRun> {
        self.pages
            .get(page_index)
            .into_iter()
            .flat_map(|p| p.ops.iter())
            .filter_map(|op| match op {
                DrawOp::Text(run) => Some(run),
                _ => None,
            })
    }

    /// All text runs of the document.
    pub fn texts(&self) -> impl Iterator<Item = &TextRun> {
        (0..self.pages.len()).flat_map(move |i| self.page_texts(i))
    }

    /// True when some run's text is exactly `needle`.
    pub fn has_text(&self, needle: &str) -> bool {
        self.texts().any(|t| t.text == needle)
    }

    /// True when some run's text contains `needle`.
    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().any(|t| t.text.contains(needle))
    }

    pub fn blocks_of<'a>(
        &'a self,
        pred: impl Fn(&BlockKind) -> bool + 'a,
    ) -> impl Iterator<Item = &'a BlockPlacement> + 'a {
        self.blocks.iter().filter(move |b| pred(&b.kind))
    }
}

impl TextRun {
    pub fn new(x: f32, y: f32, text: impl Into<String>, font_size: f32, color: Color) -> Self {
        Self {
            x,
            y,
            text: text.into(),
            font_size,
            color,
        }
    }
}
