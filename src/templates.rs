//! Sample itinerary payloads for testing and demonstration.
//!
//! Each payload is the JSON a client would post; the `*_itinerary` helpers
//! return it decoded.

use crate::itinerary::{Activity, DayItinerary, ItineraryData, TripDetails};

/// The smallest payload that passes validation.
pub fn minimal_json() -> &'static str {
    r#"{"tripDetails":{"customerName":"Asha","destination":"Goa","days":2,"nights":1,"numberOfTravelers":2}}"#
}

/// A complete trip exercising every section of the template.
pub fn full_trip_json() -> &'static str {
    r#"
{
    "tripDetails": {
        "customerName": "Rahul",
        "destination": "Singapore",
        "days": 4,
        "nights": 3,
        "departureFrom": "Kolkata",
        "departureDate": "09/06/2025",
        "arrivalDate": "12/06/2025",
        "numberOfTravelers": 4
    },
    "dailyItinerary": [
        {
            "day": 1,
            "date": "27th November",
            "activities": [
                {"id": "a1", "name": "Arrive in Singapore", "description": "Hotel check-in", "type": "morning"},
                {"id": "a2", "name": "Marina Bay Sands Sky Park", "description": "", "type": "afternoon"},
                {"id": "a3", "name": "Gardens by the Bay", "description": "Supertree Grove light show", "type": "evening"}
            ],
            "transfers": [
                {"id": "t1", "type": "Private", "timing": "10:00", "price": 1200, "capacity": 4, "description": "Airport pickup"}
            ]
        },
        {
            "day": 2,
            "date": "28th November",
            "activities": [
                {"id": "a4", "name": "Sentosa Island", "description": "Cable car ride", "type": "morning"},
                {"id": "a5", "name": "Universal Studios", "description": "", "type": "afternoon"}
            ]
        },
        {
            "day": 3,
            "date": "",
            "activities": [
                {"id": "a6", "name": "Night Safari", "description": "", "type": "evening"}
            ]
        }
    ],
    "flights": [
        {"id": "f1", "airline": "Air India", "date": "Thu 10 Jan'24", "from": "Delhi (DEL)", "to": "Singapore (SIN)", "flightNumber": "AI-342"},
        {"id": "f2", "airline": "Singapore Airlines", "date": "", "from": "Singapore (SIN)", "to": "Delhi (DEL)", "flightNumber": "SQ-402"}
    ],
    "hotels": [
        {"id": "h1", "city": "Singapore", "checkIn": "24/02/2024", "checkOut": "26/02/2024", "nights": 2, "name": "Super Townhouse Oak"},
        {"id": "h2", "city": "Sentosa", "checkIn": "26/02/2024", "checkOut": "27/02/2024", "nights": 1, "name": "Shangri-La Rasa Sentosa"},
        {"id": "h3", "city": "Singapore", "checkIn": "27/02/2024", "checkOut": "28/02/2024", "nights": 1, "name": "Marina Bay Sands"}
    ],
    "activities": [
        {"id": "at1", "city": "Singapore", "activity": "Night Safari", "type": "Nature", "timeRequired": "2-3 Hours"},
        {"id": "at2", "city": "Sentosa", "activity": "", "type": "Leisure", "timeRequired": "1 Hour"}
    ],
    "paymentPlan": {
        "totalAmount": 900000,
        "tcsCollected": false,
        "installments": [
            {"id": "p1", "name": "Installment 1", "amount": 350000, "dueDate": "Initial Payment"},
            {"id": "p2", "name": "Installment 2", "amount": 400000, "dueDate": "Post Visa Approval"},
            {"id": "p3", "name": "Installment 3", "amount": 150000, "dueDate": "20 Days Before Departure"}
        ]
    },
    "visaDetails": {
        "visaType": "Tourist",
        "validity": "30 Days",
        "processingDate": "14/01/2025"
    },
    "importantNotes": [
        {"id": "n1", "point": "Airlines Standard Policy", "details": "In case of visa rejection, visa fees or any other non-cancellable component cannot be reimbursed."},
        {"id": "n2", "point": "", "details": "Dropped: no key field"}
    ],
    "serviceScope": [
        {"id": "s1", "service": "Flight Tickets And Hotel Vouchers", "details": "Delivered 3 days post full payment"}
    ],
    "inclusions": [
        {"id": "i1", "category": "Flight", "count": 2, "details": "All flights mentioned", "status": "Awaiting Confirmation"}
    ]
}
"#
}

pub fn minimal_itinerary() -> ItineraryData {
    decode(minimal_json())
}

pub fn full_trip_itinerary() -> ItineraryData {
    decode(full_trip_json())
}

/// `days` compact days, one morning activity each, for pagination tests.
pub fn long_trip_itinerary(days: usize) -> ItineraryData {
    ItineraryData {
        trip_details: TripDetails {
            customer_name: "Meera".into(),
            destination: "Kerala".into(),
            days: days as i64,
            nights: days.saturating_sub(1) as i64,
            number_of_travelers: 3,
            ..Default::default()
        },
        daily_itinerary: (1..=days)
            .map(|day| DayItinerary {
                day: day as i64,
                date: format!("Day {day} of the trip"),
                activities: vec![Activity {
                    name: format!("Backwater stop {day}"),
                    kind: "morning".into(),
                    ..Default::default()
                }],
                ..Default::default()
            })
            .collect(),
        ..Default::default()
    }
}

fn decode(json: &str) -> ItineraryData {
    // Payloads are compile-time constants covered by the tests below.
    serde_json::from_str(json).unwrap_or_default()
}
