//! Integration tests for the itinerary pipeline.
//!
//! These tests validate:
//! - PDF output loads with a PDF reader and has the laid-out page count
//! - Page breaks happen between blocks, never past the bottom margin
//! - Every page carries the footer
//! - Optional sections appear only when they have content
//! - Layout output is deterministic

use sha2::{Digest, Sha256};

use itinerary_pdf::itinerary::ItineraryData;
use itinerary_pdf::layout_config::{BlockKind, DrawOp, LayoutConfig};
use itinerary_pdf::pagination::PageGeometry;
use itinerary_pdf::pipeline::{compute_layout_config, generate_pdf, PipelineConfig};
use itinerary_pdf::render::render_pdf;
use itinerary_pdf::style;
use itinerary_pdf::templates;

// =====================================================================
// Helper
// =====================================================================

fn default_config() -> PipelineConfig {
    PipelineConfig::default()
}

fn assert_valid_pdf(bytes: &[u8]) {
    assert!(bytes.len() > 100, "PDF too small: {} bytes", bytes.len());
    assert_eq!(&bytes[0..5], b"%PDF-", "Missing PDF header");
}

fn pdf_page_count(bytes: &[u8]) -> usize {
    let doc = lopdf::Document::load_mem(bytes).expect("PDF should parse");
    doc.get_pages().len()
}

fn layout_digest(config: &LayoutConfig) -> String {
    let digest = Sha256::digest(config.to_json().as_bytes());
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

fn count_text(config: &LayoutConfig, needle: &str) -> usize {
    config.texts().filter(|t| t.text == needle).count()
}

// =====================================================================
// End-to-end
// =====================================================================

#[test]
fn minimal_payload_renders_single_page() {
    let data = templates::minimal_itinerary();
    let (bytes, layout) = generate_pdf(&data, &default_config()).unwrap();
    assert_valid_pdf(&bytes);
    assert_eq!(layout.pages.len(), 1);
    assert_eq!(pdf_page_count(&bytes), 1);

    assert!(layout.has_text("Hi, Asha!"));
    assert!(layout.has_text("Goa Itinerary"));
    assert!(layout.has_text("2 Days 1 Nights"));
}

#[test]
fn trip_facts_row_carries_values() {
    let layout = compute_layout_config(&templates::minimal_itinerary(), &default_config());
    let facts = layout
        .blocks_of(|k| *k == BlockKind::TripFacts)
        .next()
        .expect("trip facts block");
    let col_width = (layout.page_width_pt - 40.0) / 5.0;
    let value_at = |column: f32| {
        layout
            .page_texts(facts.page_index)
            .find(|t| t.x == 25.0 + col_width * column && t.y == facts.top + 14.0)
            .map(|t| t.text.as_str())
    };

    assert_eq!(value_at(3.0), Some("Goa"));
    assert_eq!(value_at(4.0), Some("2"));
    // Unset departure fields stay blank
    assert_eq!(value_at(0.0), Some(""));
}

#[test]
fn full_trip_pdf_matches_layout_page_count() {
    let data = templates::full_trip_itinerary();
    let (bytes, layout) = generate_pdf(&data, &default_config()).unwrap();
    assert_valid_pdf(&bytes);
    assert!(
        layout.pages.len() >= 2,
        "full trip should spill onto a second page"
    );
    assert_eq!(pdf_page_count(&bytes), layout.pages.len());
}

#[test]
fn full_trip_shows_payment_and_visa() {
    let layout = compute_layout_config(&templates::full_trip_itinerary(), &default_config());
    assert!(layout.has_text("Total Amount"));
    assert!(layout.has_text("\u{20B9}900000 For 4 Pax (Inclusive of GST)"));
    assert!(layout.has_text("Not Collected"));
    assert!(layout.has_text("\u{20B9}350000"));
    assert!(layout.has_text("Visa Type: Tourist"));
    assert!(layout.has_text("Validity: 30 Days"));
    assert!(layout.has_text("Processing Date: 14/01/2025"));
}

#[test]
fn missing_dates_use_placeholders() {
    let layout = compute_layout_config(&templates::full_trip_itinerary(), &default_config());
    // Day 1 and the undated day 3
    assert_eq!(count_text(&layout, "27th November"), 2);
    // Flight 1 carries the same literal, flight 2 falls back to it
    assert_eq!(count_text(&layout, "Thu 10 Jan'24"), 2);
    assert!(layout.has_text("Singapore Airlines From Singapore (SIN) To Delhi (DEL)"));
}

// =====================================================================
// Pagination
// =====================================================================

#[test]
fn long_trip_breaks_between_days() {
    let geometry = PageGeometry::default();
    let layout = compute_layout_config(&templates::long_trip_itinerary(12), &default_config());
    assert!(layout.pages.len() >= 2);

    let days: Vec<_> = layout
        .blocks_of(|k| matches!(k, BlockKind::Day(_)))
        .collect();
    assert_eq!(days.len(), 12);
    for day in &days {
        assert!(
            day.bottom() <= geometry.content_bottom(),
            "day block ends at {} on page {}",
            day.bottom(),
            day.page_index
        );
    }

    // The first day on the second page starts at the top margin.
    let first_on_next = days
        .iter()
        .find(|d| d.page_index == 1)
        .expect("a day on page 2");
    assert_eq!(first_on_next.top, geometry.margin_top);
}

#[test]
fn days_keep_input_order() {
    let layout = compute_layout_config(&templates::long_trip_itinerary(20), &default_config());
    let order: Vec<i64> = layout
        .blocks
        .iter()
        .filter_map(|b| match b.kind {
            BlockKind::Day(n) => Some(n),
            _ => None,
        })
        .collect();
    assert_eq!(order, (1..=20).collect::<Vec<_>>());

    let pages: Vec<usize> = layout
        .blocks_of(|k| matches!(k, BlockKind::Day(_)))
        .map(|b| b.page_index)
        .collect();
    assert!(pages.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn footer_on_every_page() {
    let layout = compute_layout_config(&templates::long_trip_itinerary(30), &default_config());
    assert!(layout.pages.len() >= 3);
    for i in 0..layout.pages.len() {
        let texts: Vec<_> = layout.page_texts(i).collect();
        assert!(
            texts.iter().any(|t| t.text == "Vigovia Tech Pvt. Ltd"),
            "page {i} has no footer"
        );
        assert!(texts.iter().any(|t| t.text == "Email: Contact@Vigovia.Com"));
    }
}

#[test]
fn positions_are_within_page() {
    let layout = compute_layout_config(&templates::full_trip_itinerary(), &default_config());
    for page in &layout.pages {
        for op in &page.ops {
            let (x, y) = match op {
                DrawOp::Rect { x, y, .. } => (*x, *y),
                DrawOp::Line { x1, y1, .. } => (*x1, *y1),
                DrawOp::Circle { cx, cy, .. } => (*cx, *cy),
                DrawOp::Text(t) => (t.x, t.y),
            };
            assert!(x >= 0.0 && x <= layout.page_width_pt, "x={x} off page");
            assert!(y >= 0.0 && y <= layout.page_height_pt, "y={y} off page");
        }
    }
}

// =====================================================================
// Conditional sections
// =====================================================================

#[test]
fn empty_sections_are_omitted() {
    let layout = compute_layout_config(&templates::minimal_itinerary(), &default_config());
    for kind in [
        BlockKind::FlightSummary,
        BlockKind::HotelBookings,
        BlockKind::ImportantNotes,
        BlockKind::ServiceScope,
        BlockKind::InclusionSummary,
        BlockKind::ActivityTable,
        BlockKind::PaymentPlan,
        BlockKind::VisaDetails,
    ] {
        assert_eq!(
            layout.blocks_of(|k| *k == kind).count(),
            0,
            "{kind:?} should be absent"
        );
    }
    assert!(!layout.has_text("Flight "));
    assert!(!layout.has_text("Total Amount"));
}

#[test]
fn filled_sections_are_present() {
    let layout = compute_layout_config(&templates::full_trip_itinerary(), &default_config());
    for kind in [
        BlockKind::FlightSummary,
        BlockKind::HotelBookings,
        BlockKind::ImportantNotes,
        BlockKind::ServiceScope,
        BlockKind::InclusionSummary,
        BlockKind::ActivityTable,
        BlockKind::PaymentPlan,
        BlockKind::VisaDetails,
    ] {
        assert_eq!(
            layout.blocks_of(|k| *k == kind).count(),
            1,
            "{kind:?} should appear once"
        );
    }
    assert_eq!(
        layout
            .blocks_of(|k| matches!(k, BlockKind::HotelRow(_)))
            .count(),
        3
    );
}

#[test]
fn section_order_is_fixed() {
    let layout = compute_layout_config(&templates::full_trip_itinerary(), &default_config());
    let position = |kind: BlockKind| {
        layout
            .blocks
            .iter()
            .position(|b| b.kind == kind)
            .unwrap_or_else(|| panic!("{kind:?} missing"))
    };
    let order = [
        position(BlockKind::Header),
        position(BlockKind::TripFacts),
        position(BlockKind::Day(1)),
        position(BlockKind::FlightSummary),
        position(BlockKind::HotelBookings),
        position(BlockKind::ImportantNotes),
        position(BlockKind::ServiceScope),
        position(BlockKind::InclusionSummary),
        position(BlockKind::ActivityTable),
        position(BlockKind::PaymentPlan),
        position(BlockKind::VisaDetails),
    ];
    assert!(order.windows(2).all(|w| w[0] < w[1]), "order was {order:?}");
}

#[test]
fn entries_without_key_field_are_dropped() {
    let layout = compute_layout_config(&templates::full_trip_itinerary(), &default_config());
    assert!(layout.has_text("Airlines Standard Policy"));
    assert!(!layout.has_text("Dropped: no key field"));
    assert!(layout.has_text("Night Safari"));
    assert!(!layout.has_text("Leisure"));
}

#[test]
fn zero_total_hides_payment_plan() {
    let mut data = templates::full_trip_itinerary();
    data.payment_plan.total_amount = 0;
    data.visa_details.visa_type.clear();
    let layout = compute_layout_config(&data, &default_config());
    assert!(!layout.has_text("Total Amount"));
    assert!(!layout.contains_text("Visa Type"));
    assert_eq!(
        layout
            .blocks_of(|k| matches!(k, BlockKind::InstallmentRow(_)))
            .count(),
        0
    );
}

// =====================================================================
// Activities and tables
// =====================================================================

#[test]
fn activity_buckets_are_case_sensitive() {
    let json = r#"{
        "tripDetails": {"customerName": "Asha", "destination": "Goa", "days": 1, "nights": 0, "numberOfTravelers": 1},
        "dailyItinerary": [{
            "day": 1,
            "date": "1st March",
            "activities": [
                {"id": "1", "name": "Fort Aguada", "description": "", "type": "Morning"},
                {"id": "2", "name": "Baga Beach", "description": "", "type": "afternoon"}
            ]
        }]
    }"#;
    let data = ItineraryData::from_json_slice(json.as_bytes()).unwrap();
    let layout = compute_layout_config(&data, &default_config());
    assert!(!layout.has_text("Morning"));
    assert!(!layout.contains_text("Fort Aguada"));
    assert!(layout.has_text("Afternoon"));
    assert!(layout.has_text("\u{2022} Baga Beach"));
}

#[test]
fn installment_rows_alternate_fill() {
    let layout = compute_layout_config(&templates::full_trip_itinerary(), &default_config());
    let rows: Vec<_> = layout
        .blocks_of(|k| matches!(k, BlockKind::InstallmentRow(_)))
        .collect();
    assert_eq!(rows.len(), 3);

    for (i, row) in rows.iter().enumerate() {
        let fill = layout.pages[row.page_index]
            .ops
            .iter()
            .find_map(|op| match op {
                DrawOp::Rect {
                    y,
                    fill: Some(f),
                    ..
                } if *y == row.top => Some(*f),
                _ => None,
            })
            .expect("row background");
        let expected = if i.is_multiple_of(2) {
            style::ZEBRA_EVEN
        } else {
            style::ZEBRA_ODD
        };
        assert_eq!(fill, expected, "installment row {i}");
    }
}

// =====================================================================
// Layout config JSON round-trip
// =====================================================================

#[test]
fn layout_config_json_roundtrip() {
    let config = compute_layout_config(&templates::full_trip_itinerary(), &default_config());
    let json = config.to_json();
    let parsed = LayoutConfig::from_json(&json).unwrap();
    assert_eq!(config.pages.len(), parsed.pages.len());
    assert_eq!(config.blocks, parsed.blocks);
    assert!((config.page_width_pt - parsed.page_width_pt).abs() < 0.01);
}

#[test]
fn render_from_layout_config_json() {
    let config = compute_layout_config(&templates::full_trip_itinerary(), &default_config());
    let parsed = LayoutConfig::from_json(&config.to_json()).unwrap();
    let bytes = render_pdf(&parsed).unwrap();
    assert_valid_pdf(&bytes);
    assert_eq!(pdf_page_count(&bytes), config.pages.len());
}

// =====================================================================
// Golden-sample stability test
// =====================================================================

#[test]
fn layout_is_deterministic() {
    let data = templates::full_trip_itinerary();
    let first = layout_digest(&compute_layout_config(&data, &default_config()));
    let second = layout_digest(&compute_layout_config(&data, &default_config()));
    assert_eq!(first, second);
}

#[test]
fn pdf_output_is_stable_in_size() {
    let data = templates::minimal_itinerary();
    let (bytes1, _) = generate_pdf(&data, &default_config()).unwrap();
    let (bytes2, _) = generate_pdf(&data, &default_config()).unwrap();

    // printpdf embeds timestamps, so byte-exact equality isn't guaranteed.
    let diff = (bytes1.len() as i64 - bytes2.len() as i64).unsigned_abs();
    assert!(
        diff < 200,
        "PDF outputs differ significantly: {} vs {} bytes",
        bytes1.len(),
        bytes2.len()
    );
}

#[test]
fn all_samples_render_successfully() {
    let samples: Vec<(&str, ItineraryData)> = vec![
        ("minimal", templates::minimal_itinerary()),
        ("full_trip", templates::full_trip_itinerary()),
        ("long_trip", templates::long_trip_itinerary(25)),
    ];

    for (name, data) in samples {
        assert!(data.validate().is_ok(), "sample '{name}' invalid");
        let result = generate_pdf(&data, &default_config());
        assert!(
            result.is_ok(),
            "Sample '{}' failed: {:?}",
            name,
            result.err()
        );
        let (bytes, _) = result.unwrap();
        assert_valid_pdf(&bytes);
    }
}
