//! Layout engine – walks an [`ItineraryData`] once, top to bottom, and emits
//! absolute-positioned draw operations through a [`PageFlow`].
//!
//! Every stage takes the flow by `&mut`, asks it for room with
//! [`PageFlow::reserve`] before drawing, and returns the [`BlockPlacement`]
//! it consumed. Coordinates are literal: the template has a single fixed look.

use crate::itinerary::{
    DayItinerary, DayPart, Flight, ItineraryData, PaymentPlan, TripDetails, VisaDetails,
};
use crate::layout_config::*;
use crate::pagination::{PageFlow, PageGeometry};
use crate::style::{self, Color};

// ---------------------------------------------------------------------------
// Page-break reservations (pt)
// ---------------------------------------------------------------------------

const TRIP_FACTS_RESERVE: f32 = 35.0;
const DAY_RESERVE: f32 = 80.0;
const FLIGHT_SECTION_RESERVE: f32 = 60.0;
const FLIGHT_ROW_RESERVE: f32 = 20.0;
const TABLE_SECTION_RESERVE: f32 = 80.0;
const TABLE_ROW_RESERVE: f32 = 12.0;
const PAYMENT_SECTION_RESERVE: f32 = 100.0;
const VISA_SECTION_RESERVE: f32 = 40.0;

/// Uniform spacing for compact days.
const DAY_MIN_HEIGHT: f32 = 70.0;

/// Left edge of tables, panels and headings.
const LEFT: f32 = 20.0;
/// Left padding of table cells.
const CELL_X: f32 = 25.0;
const ROW_HEIGHT: f32 = 10.0;
const HEADING_ADVANCE: f32 = 15.0;
const SECTION_GAP: f32 = 15.0;

/// Shown when a day has no date.
pub const DEFAULT_DAY_DATE: &str = "27th November";
/// Shown when a flight has no date.
pub const DEFAULT_FLIGHT_DATE: &str = "Thu 10 Jan'24";
pub const FLIGHT_NOTE: &str =
    "Note: All Flights Include Meals, Seat Choice (Excluding XL), And 20kg/25Kg Checked Baggage.";
pub const ICON_PLACEHOLDERS: [&str; 5] = ["[Flight]", "[Hotel]", "[Time]", "[Car]", "[Calendar]"];

/// Two-colour section heading: first word black, second word accent purple,
/// drawn as two runs with a hand-tuned x for the second.
#[derive(Debug, Clone, Copy)]
pub struct Heading {
    pub first: &'static str,
    pub second: &'static str,
    pub second_x: f32,
}

pub const FLIGHT_HEADING: Heading = Heading {
    first: "Flight ",
    second: "Summary",
    second_x: 42.0,
};
pub const HOTEL_HEADING: Heading = Heading {
    first: "Hotel ",
    second: "Bookings",
    second_x: 40.0,
};
pub const PAYMENT_HEADING: Heading = Heading {
    first: "Payment ",
    second: "Plan",
    second_x: 55.0,
};
pub const VISA_HEADING: Heading = Heading {
    first: "Visa ",
    second: "Details",
    second_x: 40.0,
};
pub const NOTES_HEADING: Heading = Heading {
    first: "Important ",
    second: "Notes",
    second_x: 80.0,
};
pub const SCOPE_HEADING: Heading = Heading {
    first: "Scope Of ",
    second: "Service",
    second_x: 82.0,
};
pub const INCLUSION_HEADING: Heading = Heading {
    first: "Inclusion ",
    second: "Summary",
    second_x: 72.0,
};
pub const ACTIVITY_HEADING: Heading = Heading {
    first: "Activity ",
    second: "Table",
    second_x: 64.0,
};

/// A header-row label and the x where its column starts.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub x: f32,
    pub label: &'static str,
}

const fn col(x: f32, label: &'static str) -> Column {
    Column { x, label }
}

pub const HOTEL_COLUMNS: &[Column] = &[
    col(25.0, "City"),
    col(55.0, "Check In"),
    col(85.0, "Check Out"),
    col(115.0, "Nights"),
    col(135.0, "Hotel Name"),
];
pub const INSTALLMENT_COLUMNS: &[Column] = &[
    col(25.0, "Installment"),
    col(70.0, "Amount"),
    col(115.0, "Due Date"),
];
pub const NOTES_COLUMNS: &[Column] = &[col(25.0, "Point"), col(150.0, "Details")];
pub const SCOPE_COLUMNS: &[Column] = &[col(25.0, "Service"), col(150.0, "Details")];
pub const INCLUSION_COLUMNS: &[Column] = &[
    col(25.0, "Category"),
    col(110.0, "Count"),
    col(150.0, "Details"),
    col(420.0, "Status / Comments"),
];
pub const ACTIVITY_COLUMNS: &[Column] = &[
    col(25.0, "City"),
    col(110.0, "Activity"),
    col(300.0, "Type"),
    col(400.0, "Time Required"),
];

/// A heading + header row + zebra rows section.
struct TableSection<'a> {
    kind: BlockKind,
    heading: Heading,
    columns: &'a [Column],
    row_kind: fn(usize) -> BlockKind,
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Lay out the whole itinerary. Content pages are built first; the footer is
/// applied afterwards to every page, once the page count is known.
pub fn layout_itinerary(
    data: &ItineraryData,
    geometry: PageGeometry,
    title: &str,
) -> LayoutConfig {
    let mut flow = PageFlow::new(geometry);
    let trip = &data.trip_details;

    layout_header(&mut flow, trip);
    layout_trip_facts(&mut flow, trip);

    for day in &data.daily_itinerary {
        layout_day(&mut flow, day, trip);
    }

    if !data.flights.is_empty() {
        layout_flights(&mut flow, &data.flights);
    }

    if !data.hotels.is_empty() {
        let rows: Vec<Vec<String>> = data
            .hotels
            .iter()
            .map(|h| {
                vec![
                    h.city.clone(),
                    h.check_in.clone(),
                    h.check_out.clone(),
                    h.nights.to_string(),
                    h.name.clone(),
                ]
            })
            .collect();
        layout_table_section(
            &mut flow,
            TableSection {
                kind: BlockKind::HotelBookings,
                heading: HOTEL_HEADING,
                columns: HOTEL_COLUMNS,
                row_kind: BlockKind::HotelRow,
            },
            &rows,
        );
    }

    layout_supplementary_sections(&mut flow, data);

    if data.payment_plan.total_amount > 0 {
        layout_payment_plan(&mut flow, &data.payment_plan, trip.number_of_travelers);
    }

    if !data.visa_details.visa_type.is_empty() {
        layout_visa(&mut flow, &data.visa_details);
    }

    log::debug!(
        "Content laid out on {} page(s), cursor at y={:.1}",
        flow.page_count(),
        flow.cursor()
    );

    let (pages, blocks) = flow.finish_with(draw_footer);

    LayoutConfig {
        title: title.to_string(),
        page_width_pt: geometry.width,
        page_height_pt: geometry.height,
        pages,
        blocks,
    }
}

// ---------------------------------------------------------------------------
// Stages
// ---------------------------------------------------------------------------

/// Logo, greeting banner and the row of icon placeholders on page 1.
pub fn layout_header(flow: &mut PageFlow, trip: &TripDetails) -> BlockPlacement {
    let w = flow.width();
    let top = flow.cursor();
    let logo_x = w / 2.0 - 20.0;

    text(
        flow,
        logo_x,
        top,
        style::BRAND_WORDMARK,
        style::SIZE_LOGO,
        style::BRAND_PURPLE,
    );
    let y = flow.advance(6.0);
    text(
        flow,
        logo_x,
        y,
        style::BRAND_TAGLINE,
        style::SIZE_BODY,
        style::MUTED_TEXT,
    );
    let y = flow.advance(20.0);

    // Banner
    let banner_height = 40.0;
    let banner_x = w / 2.0 - 50.0;
    fill_rect(flow, 40.0, y, w - 80.0, banner_height, style::BRAND_PURPLE);
    text(
        flow,
        banner_x,
        y + 12.0,
        format!("Hi, {}!", trip.customer_name),
        16.0,
        style::WHITE,
    );
    text(
        flow,
        banner_x,
        y + 22.0,
        format!("{} Itinerary", trip.destination),
        14.0,
        style::WHITE,
    );
    text(
        flow,
        banner_x,
        y + 30.0,
        format!("{} Days {} Nights", trip.days, trip.nights),
        10.0,
        style::WHITE,
    );
    let y = flow.advance(banner_height + 15.0);

    let spacing = 15.0;
    let start_x = w / 2.0 - (ICON_PLACEHOLDERS.len() as f32 * spacing) / 2.0;
    for (i, icon) in ICON_PLACEHOLDERS.iter().enumerate() {
        text(
            flow,
            start_x + spacing * i as f32,
            y,
            *icon,
            10.0,
            style::BLACK,
        );
    }
    let bottom = flow.advance(15.0);

    flow.record(BlockKind::Header, top, bottom - top)
}

/// Five-column trip-facts table.
pub fn layout_trip_facts(flow: &mut PageFlow, trip: &TripDetails) -> BlockPlacement {
    let y = flow.reserve(TRIP_FACTS_RESERVE);
    let table_width = flow.width() - 2.0 * LEFT;
    let col_width = table_width / 5.0;

    flow.push(DrawOp::Rect {
        x: LEFT,
        y,
        width: table_width,
        height: 20.0,
        fill: Some(style::PANEL_GREY),
        stroke: Some(Stroke {
            width: style::RULE_WIDTH,
            color: style::RULE_GREY,
        }),
    });

    let labels = [
        "Departure From",
        "Departure",
        "Arrival",
        "Destination",
        "No. Of Travellers",
    ];
    let travelers = trip.number_of_travelers.to_string();
    let values = [
        trip.departure_from.as_str(),
        trip.departure_date.as_str(),
        trip.arrival_date.as_str(),
        trip.destination.as_str(),
        travelers.as_str(),
    ];
    for (i, (label, value)) in labels.iter().zip(values).enumerate() {
        let x = CELL_X + col_width * i as f32;
        text(flow, x, y + 6.0, *label, style::SIZE_BODY, style::BLACK);
        text(flow, x, y + 14.0, value, 9.0, style::BLACK);
    }

    flow.advance(TRIP_FACTS_RESERVE);
    flow.record(BlockKind::TripFacts, y, TRIP_FACTS_RESERVE)
}

/// One day: badge, caption, and the morning/afternoon/evening timeline.
pub fn layout_day(flow: &mut PageFlow, day: &DayItinerary, trip: &TripDetails) -> BlockPlacement {
    let top = flow.reserve(DAY_RESERVE);

    fill_rect(flow, LEFT, top, 30.0, 60.0, style::BRAND_PURPLE);
    text(
        flow,
        35.0,
        top + 20.0,
        "Day",
        style::SIZE_BODY,
        style::WHITE,
    );
    text(
        flow,
        35.0,
        top + 35.0,
        day.day.to_string(),
        14.0,
        style::WHITE,
    );

    let date = if day.date.is_empty() {
        DEFAULT_DAY_DATE
    } else {
        day.date.as_str()
    };
    text(flow, 60.0, top + 15.0, date, 10.0, style::BLACK);
    text(
        flow,
        60.0,
        top + 22.0,
        format!("Arrival In {} & City", trip.destination),
        style::SIZE_BODY,
        style::BLACK,
    );
    text(
        flow,
        60.0,
        top + 28.0,
        "Exploration",
        style::SIZE_BODY,
        style::BLACK,
    );

    let x = 60.0;
    let mut t = top + 35.0;
    for part in DayPart::ALL {
        let activities = day.activities_for(part);
        if activities.is_empty() {
            continue;
        }

        flow.push(DrawOp::Circle {
            cx: x,
            cy: t,
            radius: 1.5,
            fill: style::BRAND_PURPLE,
        });
        // The last bucket has nothing below it to connect to.
        if part != DayPart::Evening {
            flow.push(DrawOp::Line {
                x1: x,
                y1: t,
                x2: x,
                y2: t + 12.0,
                stroke: Stroke {
                    width: style::RULE_WIDTH,
                    color: style::BRAND_PURPLE,
                },
            });
        }
        text(
            flow,
            x + 5.0,
            t - 1.0,
            part.label(),
            style::SIZE_BODY,
            style::BLACK,
        );
        t += 6.0;

        for activity in activities {
            text(
                flow,
                x + 8.0,
                t,
                format!("\u{2022} {}", activity.name),
                style::SIZE_SMALL,
                style::BLACK,
            );
            t += 6.0;
            if !activity.description.is_empty() {
                text(
                    flow,
                    x + 8.0,
                    t,
                    format!("  {}", activity.description),
                    style::SIZE_SMALL,
                    style::BLACK,
                );
                t += 4.0;
            }
        }
        t += 3.0;
    }

    let height = day_block_height(top, t);
    flow.advance(height);
    flow.record(BlockKind::Day(day.day), top, height)
}

/// Space a day consumes given where its timeline ended.
pub fn day_block_height(top: f32, timeline_end: f32) -> f32 {
    (timeline_end - top + 15.0).max(DAY_MIN_HEIGHT)
}

pub fn layout_flights(flow: &mut PageFlow, flights: &[Flight]) -> BlockPlacement {
    let top = flow.reserve(FLIGHT_SECTION_RESERVE);
    heading(flow, top, FLIGHT_HEADING);
    flow.advance(HEADING_ADVANCE);
    let section = flow.record(BlockKind::FlightSummary, top, HEADING_ADVANCE);

    let width = flow.width() - 2.0 * LEFT;
    for (i, flight) in flights.iter().enumerate() {
        let y = flow.reserve(FLIGHT_ROW_RESERVE);
        fill_rect(flow, LEFT, y, width, 15.0, style::LAVENDER);
        fill_rect(flow, LEFT, y, 60.0, 15.0, style::LAVENDER_DEEP);

        let date = if flight.date.is_empty() {
            DEFAULT_FLIGHT_DATE
        } else {
            flight.date.as_str()
        };
        text(
            flow,
            CELL_X,
            y + 9.0,
            date,
            style::SIZE_BODY,
            style::BRAND_PURPLE,
        );
        text(
            flow,
            95.0,
            y + 9.0,
            format!("{} From {} To {}", flight.airline, flight.from, flight.to),
            style::SIZE_BODY,
            style::BLACK,
        );
        flow.advance(18.0);
        flow.record(BlockKind::FlightRow(i), y, 18.0);
    }

    let y = flow.cursor();
    text(
        flow,
        LEFT,
        y + 5.0,
        FLIGHT_NOTE,
        style::SIZE_SMALL,
        style::MUTED_TEXT,
    );
    flow.advance(20.0);

    section
}

/// Heading, coloured header row, then one zebra row per entry. Rows are
/// placed one at a time; a page break between rows does not repeat the
/// header row.
fn layout_table_section(
    flow: &mut PageFlow,
    section: TableSection<'_>,
    rows: &[Vec<String>],
) -> BlockPlacement {
    let top = flow.reserve(TABLE_SECTION_RESERVE);
    heading(flow, top, section.heading);
    let y = flow.advance(HEADING_ADVANCE);
    header_row(flow, y, section.columns);
    flow.advance(ROW_HEIGHT);
    let placement = flow.record(section.kind, top, HEADING_ADVANCE + ROW_HEIGHT);

    for (i, cells) in rows.iter().enumerate() {
        let y = flow.reserve(TABLE_ROW_RESERVE);
        let xs = section.columns.iter().map(|c| c.x);
        zebra_row(flow, y, i, xs.zip(cells.iter().map(String::as_str)));
        flow.advance(ROW_HEIGHT);
        flow.record((section.row_kind)(i), y, ROW_HEIGHT);
    }

    flow.advance(SECTION_GAP);
    placement
}

/// Notes, service scope, inclusions and the activity table. Each is shown
/// only when at least one entry has its key field filled in, and only such
/// entries become rows.
pub fn layout_supplementary_sections(flow: &mut PageFlow, data: &ItineraryData) {
    let notes: Vec<Vec<String>> = data
        .important_notes
        .iter()
        .filter(|n| !n.point.is_empty())
        .map(|n| vec![n.point.clone(), n.details.clone()])
        .collect();
    let scope: Vec<Vec<String>> = data
        .service_scope
        .iter()
        .filter(|s| !s.service.is_empty())
        .map(|s| vec![s.service.clone(), s.details.clone()])
        .collect();
    let inclusions: Vec<Vec<String>> = data
        .inclusions
        .iter()
        .filter(|i| !i.category.is_empty())
        .map(|i| {
            vec![
                i.category.clone(),
                i.count.to_string(),
                i.details.clone(),
                i.status.clone(),
            ]
        })
        .collect();
    let activities: Vec<Vec<String>> = data
        .activities
        .iter()
        .filter(|a| !a.activity.is_empty())
        .map(|a| {
            vec![
                a.city.clone(),
                a.activity.clone(),
                a.kind.clone(),
                a.time_required.clone(),
            ]
        })
        .collect();

    let sections = [
        (BlockKind::ImportantNotes, NOTES_HEADING, NOTES_COLUMNS, notes),
        (BlockKind::ServiceScope, SCOPE_HEADING, SCOPE_COLUMNS, scope),
        (
            BlockKind::InclusionSummary,
            INCLUSION_HEADING,
            INCLUSION_COLUMNS,
            inclusions,
        ),
        (
            BlockKind::ActivityTable,
            ACTIVITY_HEADING,
            ACTIVITY_COLUMNS,
            activities,
        ),
    ];

    for (kind, heading, columns, rows) in sections {
        if rows.is_empty() {
            continue;
        }
        layout_table_section(
            flow,
            TableSection {
                kind,
                heading,
                columns,
                row_kind: BlockKind::TableRow,
            },
            &rows,
        );
    }
}

pub fn layout_payment_plan(
    flow: &mut PageFlow,
    plan: &PaymentPlan,
    travelers: i64,
) -> BlockPlacement {
    let top = flow.reserve(PAYMENT_SECTION_RESERVE);
    heading(flow, top, PAYMENT_HEADING);
    let width = flow.width() - 2.0 * LEFT;

    let y = flow.advance(HEADING_ADVANCE);
    fill_rect(flow, LEFT, y, width, 12.0, style::LAVENDER);
    text(
        flow,
        CELL_X,
        y + 7.0,
        "Total Amount",
        style::SIZE_BODY,
        style::BLACK,
    );
    text(
        flow,
        110.0,
        y + 7.0,
        format!(
            "{} For {} Pax (Inclusive of GST)",
            style::currency(plan.total_amount),
            travelers
        ),
        style::SIZE_BODY,
        style::BLACK,
    );

    let y = flow.advance(15.0);
    fill_rect(flow, LEFT, y, width, 12.0, style::LAVENDER);
    text(flow, CELL_X, y + 7.0, "TCS", style::SIZE_BODY, style::BLACK);
    text(
        flow,
        110.0,
        y + 7.0,
        tcs_label(plan.tcs_collected),
        style::SIZE_BODY,
        style::BLACK,
    );
    let mut y = flow.advance(20.0);

    if !plan.installments.is_empty() {
        header_row(flow, y, INSTALLMENT_COLUMNS);
        y = flow.advance(ROW_HEIGHT);
    }
    let placement = flow.record(BlockKind::PaymentPlan, top, y - top);

    for (i, installment) in plan.installments.iter().enumerate() {
        let y = flow.reserve(TABLE_ROW_RESERVE);
        let amount = style::currency(installment.amount);
        let cells = [
            installment.name.as_str(),
            amount.as_str(),
            installment.due_date.as_str(),
        ];
        let xs = INSTALLMENT_COLUMNS.iter().map(|c| c.x);
        zebra_row(flow, y, i, xs.zip(cells));
        flow.advance(ROW_HEIGHT);
        flow.record(BlockKind::InstallmentRow(i), y, ROW_HEIGHT);
    }

    flow.advance(SECTION_GAP);
    placement
}

pub fn tcs_label(collected: bool) -> &'static str {
    if collected {
        "Collected"
    } else {
        "Not Collected"
    }
}

pub fn layout_visa(flow: &mut PageFlow, visa: &VisaDetails) -> BlockPlacement {
    let top = flow.reserve(VISA_SECTION_RESERVE);
    heading(flow, top, VISA_HEADING);
    let y = flow.advance(HEADING_ADVANCE);

    let width = flow.width() - 2.0 * LEFT;
    fill_rect(flow, LEFT, y, width, 20.0, style::PANEL_GREY);
    text(
        flow,
        30.0,
        y + 8.0,
        format!("Visa Type: {}", visa.visa_type),
        style::SIZE_BODY,
        style::BLACK,
    );
    text(
        flow,
        100.0,
        y + 8.0,
        format!("Validity: {}", visa.validity),
        style::SIZE_BODY,
        style::BLACK,
    );
    text(
        flow,
        30.0,
        y + 15.0,
        format!("Processing Date: {}", visa.processing_date),
        style::SIZE_BODY,
        style::BLACK,
    );
    flow.advance(35.0);

    flow.record(BlockKind::VisaDetails, top, HEADING_ADVANCE + 35.0)
}

/// Company, contact and wordmark footer under a separator rule. Applied to
/// each page after content layout.
pub fn draw_footer(geometry: &PageGeometry, page: &mut PageLayout) {
    let w = geometry.width;
    let y = geometry.footer_y();

    page.ops.push(DrawOp::Line {
        x1: LEFT,
        y1: y - 5.0,
        x2: w - LEFT,
        y2: y - 5.0,
        stroke: Stroke {
            width: style::RULE_WIDTH,
            color: style::RULE_GREY,
        },
    });

    for (i, line) in style::COMPANY_LINES.iter().enumerate() {
        page.ops.push(DrawOp::Text(TextRun::new(
            LEFT,
            y + 4.0 * i as f32,
            *line,
            style::SIZE_BODY,
            style::MUTED_TEXT,
        )));
    }
    for (i, line) in style::CONTACT_LINES.iter().enumerate() {
        page.ops.push(DrawOp::Text(TextRun::new(
            w / 2.0 - 30.0,
            y + 4.0 * i as f32,
            *line,
            style::SIZE_BODY,
            style::MUTED_TEXT,
        )));
    }
    page.ops.push(DrawOp::Text(TextRun::new(
        w - 50.0,
        y,
        style::BRAND_WORDMARK,
        12.0,
        style::BRAND_PURPLE,
    )));
    page.ops.push(DrawOp::Text(TextRun::new(
        w - 50.0,
        y + 4.0,
        style::BRAND_TAGLINE,
        6.0,
        style::MUTED_TEXT,
    )));
}

// ---------------------------------------------------------------------------
// Drawing helpers
// ---------------------------------------------------------------------------

fn text(flow: &mut PageFlow, x: f32, y: f32, s: impl Into<String>, size: f32, color: Color) {
    flow.text(TextRun::new(x, y, s, size, color));
}

fn fill_rect(flow: &mut PageFlow, x: f32, y: f32, width: f32, height: f32, color: Color) {
    flow.push(DrawOp::Rect {
        x,
        y,
        width,
        height,
        fill: Some(color),
        stroke: None,
    });
}

fn heading(flow: &mut PageFlow, y: f32, h: Heading) {
    text(flow, LEFT, y, h.first, style::SIZE_HEADING, style::BLACK);
    text(
        flow,
        h.second_x,
        y,
        h.second,
        style::SIZE_HEADING,
        style::ACCENT_PURPLE,
    );
}

fn header_row(flow: &mut PageFlow, y: f32, columns: &[Column]) {
    let width = flow.width() - 2.0 * LEFT;
    fill_rect(flow, LEFT, y, width, ROW_HEIGHT, style::BRAND_PURPLE);
    for c in columns {
        text(flow, c.x, y + 6.0, c.label, style::SIZE_BODY, style::WHITE);
    }
}

fn zebra_row<'s>(
    flow: &mut PageFlow,
    y: f32,
    index: usize,
    cells: impl Iterator<Item = (f32, &'s str)>,
) {
    let width = flow.width() - 2.0 * LEFT;
    fill_rect(flow, LEFT, y, width, ROW_HEIGHT, style::zebra_fill(index));
    for (x, value) in cells {
        text(flow, x, y + 6.0, value, style::SIZE_SMALL, style::BLACK);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::itinerary::{Activity, Hotel};

    fn trip() -> TripDetails {
        TripDetails {
            customer_name: "Asha".into(),
            destination: "Goa".into(),
            days: 2,
            nights: 1,
            number_of_travelers: 2,
            ..Default::default()
        }
    }

    fn activity(name: &str, kind: &str, description: &str) -> Activity {
        Activity {
            name: name.into(),
            kind: kind.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    fn texts(flow_pages: &[PageLayout]) -> Vec<&TextRun> {
        flow_pages
            .iter()
            .flat_map(|p| p.ops.iter())
            .filter_map(|op| match op {
                DrawOp::Text(t) => Some(t),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn header_consumes_fixed_height() {
        let mut flow = PageFlow::new(PageGeometry::default());
        let header = layout_header(&mut flow, &trip());
        assert_eq!(header.top, 20.0);
        assert_eq!(header.height, 96.0);
        assert_eq!(flow.cursor(), 116.0);
    }

    #[test]
    fn compact_day_uses_minimum_height() {
        let mut flow = PageFlow::new(PageGeometry::default());
        let day = DayItinerary {
            day: 1,
            ..Default::default()
        };
        let placement = layout_day(&mut flow, &day, &trip());
        assert_eq!(placement.height, DAY_MIN_HEIGHT);
    }

    #[test]
    fn busy_day_grows_past_minimum() {
        let mut flow = PageFlow::new(PageGeometry::default());
        let day = DayItinerary {
            day: 1,
            activities: vec![
                activity("Beach", "morning", "Sunrise walk"),
                activity("Market", "afternoon", "Spice tour"),
                activity("Cruise", "evening", "River cruise"),
            ],
            ..Default::default()
        };
        let placement = layout_day(&mut flow, &day, &trip());
        // 35 + 3 × (6 + 6 + 4 + 3) + 15
        assert_eq!(placement.height, 107.0);
    }

    #[test]
    fn evening_has_no_connector_line() {
        let mut flow = PageFlow::new(PageGeometry::default());
        let day = DayItinerary {
            day: 1,
            activities: vec![activity("Dinner", "evening", "")],
            ..Default::default()
        };
        layout_day(&mut flow, &day, &trip());
        let (pages, _) = flow.finish_with(|_, _| {});
        let lines = pages[0]
            .ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Line { .. }))
            .count();
        let circles = pages[0]
            .ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Circle { .. }))
            .count();
        assert_eq!(lines, 0);
        assert_eq!(circles, 1);
    }

    #[test]
    fn miscased_activity_type_is_not_drawn() {
        let mut flow = PageFlow::new(PageGeometry::default());
        let day = DayItinerary {
            day: 1,
            activities: vec![activity("Fort", "Morning", "")],
            ..Default::default()
        };
        layout_day(&mut flow, &day, &trip());
        let (pages, _) = flow.finish_with(|_, _| {});
        let all = texts(&pages);
        assert!(!all.iter().any(|t| t.text.contains("Fort")));
        assert!(!all.iter().any(|t| t.text == "Morning"));
    }

    #[test]
    fn hotel_rows_are_zebra_striped() {
        let data = ItineraryData {
            trip_details: trip(),
            hotels: (0..4)
                .map(|i| Hotel {
                    city: format!("City {i}"),
                    name: format!("Hotel {i}"),
                    nights: 1,
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        };
        let config = layout_itinerary(&data, PageGeometry::default(), "t");
        let rows: Vec<&BlockPlacement> = config
            .blocks_of(|k| matches!(k, BlockKind::HotelRow(_)))
            .collect();
        assert_eq!(rows.len(), 4);

        let fills: Vec<Color> = config.pages[0]
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Rect {
                    y,
                    fill: Some(fill),
                    ..
                } if rows.iter().any(|r| r.top == *y) => Some(*fill),
                _ => None,
            })
            .collect();
        assert_eq!(
            fills,
            vec![
                style::ZEBRA_EVEN,
                style::ZEBRA_ODD,
                style::ZEBRA_EVEN,
                style::ZEBRA_ODD
            ]
        );
    }

    #[test]
    fn tcs_flag_renders_fixed_strings() {
        assert_eq!(tcs_label(true), "Collected");
        assert_eq!(tcs_label(false), "Not Collected");
    }

    #[test]
    fn footer_is_drawn_below_content_limit() {
        let geometry = PageGeometry::default();
        let mut page = PageLayout {
            page_index: 0,
            ops: Vec::new(),
        };
        draw_footer(&geometry, &mut page);
        let all = texts(std::slice::from_ref(&page));
        assert!(all.iter().any(|t| t.text == "Vigovia Tech Pvt. Ltd"));
        assert!(all.iter().all(|t| t.y > geometry.content_bottom()));
    }
}
