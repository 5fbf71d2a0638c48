//! PDF renderer – takes a [`LayoutConfig`] and produces PDF bytes using
//! `printpdf` (v0.8 ops-based API).

use printpdf::*;

use crate::error::RenderError;
use crate::layout_config::{DrawOp, LayoutConfig, Stroke};
use crate::style;

/// Baseline of a text run relative to its anchor, as a fraction of the font
/// size. Runs are vertically centred on their anchor line.
const BASELINE_FACTOR: f32 = 0.3;

/// Segments used to approximate a circle marker.
const CIRCLE_SEGMENTS: usize = 16;

/// Render a LayoutConfig into PDF bytes.
///
/// The output is fully buffered; a document without the `%PDF-` header is
/// reported as [`RenderError::Encoding`] rather than returned.
pub fn render_pdf(config: &LayoutConfig) -> Result<Vec<u8>, RenderError> {
    let page_w = Mm(config.page_width_pt * 0.352778); // pt → mm
    let page_h = Mm(config.page_height_pt * 0.352778);

    let mut doc = PdfDocument::new(&config.title);

    let mut pages: Vec<PdfPage> = config
        .pages
        .iter()
        .map(|page_layout| {
            let mut ops = Vec::with_capacity(page_layout.ops.len() * 4);
            for op in &page_layout.ops {
                render_op(&mut ops, op, config.page_height_pt);
            }
            PdfPage::new(page_w, page_h, ops)
        })
        .collect();

    // Ensure at least one page.
    if pages.is_empty() {
        pages.push(PdfPage::new(page_w, page_h, Vec::new()));
    }
    let page_count = pages.len();

    doc.with_pages(pages);
    let mut warnings = Vec::new();
    let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);
    if !warnings.is_empty() {
        log::warn!("PDF writer reported {} warning(s)", warnings.len());
    }

    if !bytes.starts_with(b"%PDF-") {
        return Err(RenderError::Encoding(format!(
            "writer produced {} bytes without a PDF header",
            bytes.len()
        )));
    }

    log::debug!(
        "Encoded '{}': {} page(s), {} bytes",
        config.title,
        page_count,
        bytes.len()
    );
    Ok(bytes)
}

/// Translate one draw op into printpdf ops.
fn render_op(ops: &mut Vec<Op>, op: &DrawOp, page_height: f32) {
    match op {
        DrawOp::Rect {
            x,
            y,
            width,
            height,
            fill,
            stroke,
        } => {
            // PDF coordinate system: origin at bottom-left.
            let x1 = *x;
            let y1 = page_height - y - height;
            let x2 = x + width;
            let y2 = page_height - y;
            let corners = [(x1, y1), (x2, y1), (x2, y2), (x1, y2)];

            if let Some(fill) = fill {
                ops.push(Op::SetFillColor { col: rgb(*fill) });
                ops.push(Op::DrawPolygon {
                    polygon: Polygon {
                        rings: vec![PolygonRing {
                            points: corners.iter().map(|&(x, y)| point(x, y)).collect(),
                        }],
                        mode: PaintMode::Fill,
                        winding_order: WindingOrder::NonZero,
                    },
                });
            }
            if let Some(stroke) = stroke {
                set_stroke(ops, stroke);
                ops.push(Op::DrawLine {
                    line: Line {
                        points: corners.iter().map(|&(x, y)| point(x, y)).collect(),
                        is_closed: true,
                    },
                });
            }
        }
        DrawOp::Line {
            x1,
            y1,
            x2,
            y2,
            stroke,
        } => {
            set_stroke(ops, stroke);
            ops.push(Op::DrawLine {
                line: Line {
                    points: vec![
                        point(*x1, page_height - y1),
                        point(*x2, page_height - y2),
                    ],
                    is_closed: false,
                },
            });
        }
        DrawOp::Circle {
            cx,
            cy,
            radius,
            fill,
        } => {
            let center_y = page_height - cy;
            let points = (0..CIRCLE_SEGMENTS)
                .map(|i| {
                    let angle = i as f32 / CIRCLE_SEGMENTS as f32 * std::f32::consts::TAU;
                    let (sin, cos) = angle.sin_cos();
                    point(cx + radius * cos, center_y + radius * sin)
                })
                .collect();
            ops.push(Op::SetFillColor { col: rgb(*fill) });
            ops.push(Op::DrawPolygon {
                polygon: Polygon {
                    rings: vec![PolygonRing { points }],
                    mode: PaintMode::Fill,
                    winding_order: WindingOrder::NonZero,
                },
            });
        }
        DrawOp::Text(run) => {
            if run.text.is_empty() {
                return;
            }
            let font = BuiltinFont::Helvetica;
            let baseline = page_height - run.y - run.font_size * BASELINE_FACTOR;

            ops.push(Op::StartTextSection);
            ops.push(Op::SetTextCursor {
                pos: Point {
                    x: Pt(run.x),
                    y: Pt(baseline),
                },
            });
            ops.push(Op::SetFontSizeBuiltinFont {
                size: Pt(run.font_size),
                font,
            });
            ops.push(Op::SetFillColor {
                col: rgb(run.color),
            });
            ops.push(Op::WriteTextBuiltinFont {
                items: vec![TextItem::Text(to_winlatin(&run.text))],
                font,
            });
            ops.push(Op::EndTextSection);
        }
    }
}

fn set_stroke(ops: &mut Vec<Op>, stroke: &Stroke) {
    ops.push(Op::SetOutlineColor {
        col: rgb(stroke.color),
    });
    ops.push(Op::SetOutlineThickness {
        pt: Pt(stroke.width),
    });
}

fn point(x: f32, y: f32) -> LinePoint {
    LinePoint {
        p: Point { x: Pt(x), y: Pt(y) },
        bezier: false,
    }
}

fn rgb(color: style::Color) -> printpdf::Color {
    let [r, g, b] = color.to_unit();
    printpdf::Color::Rgb(Rgb {
        r,
        g,
        b,
        icc_profile: None,
    })
}

/// Map a UTF-8 string onto Windows-1252 code points, one byte per glyph,
/// since builtin fonts use WinAnsiEncoding. The rupee sign has no WinAnsi
/// glyph and is spelled out; anything else unmappable becomes `?`.
fn winansi_bytes(s: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\u{20B9}' => out.extend_from_slice(b"Rs."),
            '\u{20AC}' => out.push(0x80), // euro
            '\u{2026}' => out.push(0x85), // ellipsis
            '\u{2018}' => out.push(0x91), // left single quote
            '\u{2019}' => out.push(0x92), // right single quote
            '\u{201C}' => out.push(0x93), // left double quote
            '\u{201D}' => out.push(0x94), // right double quote
            '\u{2022}' => out.push(0x95), // bullet
            '\u{2013}' => out.push(0x96), // en-dash
            '\u{2014}' => out.push(0x97), // em-dash
            '\u{00A0}' => out.push(b' '),
            c if (c as u32) < 256 => out.push(c as u8),
            _ => out.push(b'?'),
        }
    }
    out
}

/// Wrap [`winansi_bytes`] in a String so printpdf writes the bytes unchanged
/// into the content stream.
fn to_winlatin(s: &str) -> String {
    let bytes = winansi_bytes(s);
    // SAFETY: intentionally non-UTF-8 for the 0x80-0xFF range; printpdf passes
    // these bytes straight to the PDF stream, decoded by WinAnsiEncoding.
    #[allow(unsafe_code)]
    unsafe {
        String::from_utf8_unchecked(bytes)
    }
}
