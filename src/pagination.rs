//! Pagination – the layout-state object that owns the vertical cursor and the
//! growing list of pages.
//!
//! The break policy is deliberately local: before a block of known height is
//! emitted, [`PageFlow::reserve`] checks whether it still fits above the
//! bottom margin and starts a fresh page if it does not. Blocks are never
//! split and nothing is ever re-laid out.

use crate::layout_config::*;

/// Fixed page geometry, in points from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    /// Cursor position at the top of every page.
    pub margin_top: f32,
    /// Content must end above `height - margin_bottom`.
    pub margin_bottom: f32,
    /// Distance of the footer's first text line from the bottom edge.
    pub footer_offset: f32,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self {
            width: 595.0,
            height: 842.0,
            margin_top: 20.0,
            margin_bottom: 50.0,
            footer_offset: 40.0,
        }
    }
}

impl PageGeometry {
    /// Lowest y a block may reach.
    pub fn content_bottom(&self) -> f32 {
        self.height - self.margin_bottom
    }

    /// y of the footer's first text line.
    pub fn footer_y(&self) -> f32 {
        self.height - self.footer_offset
    }
}

/// Single-pass page flow: one cursor, one list of pages, no backtracking.
pub struct PageFlow {
    geometry: PageGeometry,
    pages: Vec<PageLayout>,
    blocks: Vec<BlockPlacement>,
    cursor: f32,
}

impl PageFlow {
    /// Start a flow with its first page already open.
    pub fn new(geometry: PageGeometry) -> Self {
        Self {
            geometry,
            pages: vec![PageLayout {
                page_index: 0,
                ops: Vec::new(),
            }],
            blocks: Vec::new(),
            cursor: geometry.margin_top,
        }
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    pub fn width(&self) -> f32 {
        self.geometry.width
    }

    /// Next free y on the current page.
    pub fn cursor(&self) -> f32 {
        self.cursor
    }

    pub fn page_index(&self) -> usize {
        self.pages.len() - 1
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Make room for a block of `height`: if it would cross the bottom
    /// margin, open a new page and reset the cursor. Returns the y at which
    /// the block starts.
    pub fn reserve(&mut self, height: f32) -> f32 {
        if self.cursor + height > self.geometry.content_bottom() {
            self.new_page();
        }
        self.cursor
    }

    pub fn new_page(&mut self) {
        log::debug!(
            "Page break at y={:.1}, opening page {}",
            self.cursor,
            self.pages.len() + 1
        );
        self.pages.push(PageLayout {
            page_index: self.pages.len(),
            ops: Vec::new(),
        });
        self.cursor = self.geometry.margin_top;
    }

    /// Move the cursor down by `dy` and return the new position.
    pub fn advance(&mut self, dy: f32) -> f32 {
        self.cursor += dy;
        self.cursor
    }

    /// Draw onto the current page.
    pub fn push(&mut self, op: DrawOp) {
        // `pages` is never empty: `new` opens page 0.
        if let Some(page) = self.pages.last_mut() {
            page.ops.push(op);
        }
    }

    pub fn text(&mut self, run: TextRun) {
        self.push(DrawOp::Text(run));
    }

    /// Record a finished block that started at `top` on the current page.
    pub fn record(&mut self, kind: BlockKind, top: f32, height: f32) -> BlockPlacement {
        let placement = BlockPlacement {
            kind,
            page_index: self.page_index(),
            top,
            height,
        };
        self.blocks.push(placement.clone());
        placement
    }

    /// Close content layout and run `decorate` once per page, in page order.
    /// Used for the footer, which needs the final page count.
    pub fn finish_with<F>(mut self, mut decorate: F) -> (Vec<PageLayout>, Vec<BlockPlacement>)
    where
        F: FnMut(&PageGeometry, &mut PageLayout),
    {
        for page in &mut self.pages {
            decorate(&self.geometry, page);
        }
        (self.pages, self.blocks)
    }
}
