//! Itinerary data model – a direct mirror of the JSON wire schema.
//!
//! Every field is optional on the wire. Missing fields (and `null` lists)
//! decode to their empty value, so the renderer never has to distinguish
//! "absent" from "empty".

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ValidationError;

/// The full trip document posted by clients.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItineraryData {
    pub trip_details: TripDetails,
    #[serde(deserialize_with = "null_as_default")]
    pub daily_itinerary: Vec<DayItinerary>,
    #[serde(deserialize_with = "null_as_default")]
    pub flights: Vec<Flight>,
    #[serde(deserialize_with = "null_as_default")]
    pub hotels: Vec<Hotel>,
    #[serde(deserialize_with = "null_as_default")]
    pub activities: Vec<ActivityTableEntry>,
    pub payment_plan: PaymentPlan,
    pub visa_details: VisaDetails,
    #[serde(deserialize_with = "null_as_default")]
    pub important_notes: Vec<ImportantNote>,
    #[serde(deserialize_with = "null_as_default")]
    pub service_scope: Vec<ServiceScope>,
    #[serde(deserialize_with = "null_as_default")]
    pub inclusions: Vec<InclusionItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TripDetails {
    pub customer_name: String,
    pub destination: String,
    pub days: i64,
    pub nights: i64,
    pub departure_from: String,
    pub departure_date: String,
    pub arrival_date: String,
    pub number_of_travelers: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DayItinerary {
    pub day: i64,
    pub date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub activities: Vec<Activity>,
    #[serde(deserialize_with = "null_as_default")]
    pub transfers: Vec<Transfer>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Activity {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub duration: String,
    /// Time-of-day bucket: `"morning"`, `"afternoon"` or `"evening"`.
    /// Matched exactly and case-sensitively; anything else is not shown in
    /// the day timeline.
    #[serde(rename = "type")]
    pub kind: String,
}

/// Ground transfer attached to a day. Decoded but not drawn by the template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Transfer {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub timing: String,
    pub price: i64,
    pub capacity: i64,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Flight {
    pub id: String,
    pub airline: String,
    pub date: String,
    pub from: String,
    pub to: String,
    pub flight_number: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Hotel {
    pub id: String,
    pub city: String,
    pub check_in: String,
    pub check_out: String,
    pub nights: i64,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActivityTableEntry {
    pub id: String,
    pub city: String,
    pub activity: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub time_required: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentInstallment {
    pub id: String,
    pub name: String,
    pub amount: i64,
    pub due_date: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentPlan {
    pub total_amount: i64,
    /// Whether tax collected at source (TCS) has been taken.
    pub tcs_collected: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub installments: Vec<PaymentInstallment>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VisaDetails {
    pub visa_type: String,
    pub validity: String,
    pub processing_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImportantNote {
    pub id: String,
    pub point: String,
    pub details: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceScope {
    pub id: String,
    pub service: String,
    pub details: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InclusionItem {
    pub id: String,
    pub category: String,
    pub count: i64,
    pub details: String,
    pub status: String,
}

/// Time-of-day buckets of the daily timeline, in drawing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPart {
    Morning,
    Afternoon,
    Evening,
}

impl DayPart {
    pub const ALL: [DayPart; 3] = [DayPart::Morning, DayPart::Afternoon, DayPart::Evening];

    /// The exact `type` value an activity must carry to land in this bucket.
    pub fn key(self) -> &'static str {
        match self {
            DayPart::Morning => "morning",
            DayPart::Afternoon => "afternoon",
            DayPart::Evening => "evening",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DayPart::Morning => "Morning",
            DayPart::Afternoon => "Afternoon",
            DayPart::Evening => "Evening",
        }
    }
}

impl ItineraryData {
    /// Decode a request body.
    pub fn from_json_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }

    /// Boundary check: the two fields every rendered page depends on.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.trip_details.customer_name.is_empty() {
            return Err(ValidationError::MissingField("customerName"));
        }
        if self.trip_details.destination.is_empty() {
            return Err(ValidationError::MissingField("destination"));
        }
        Ok(())
    }
}

impl DayItinerary {
    /// Activities whose `type` is exactly the bucket key, in input order.
    pub fn activities_for(&self, part: DayPart) -> Vec<&Activity> {
        self.activities
            .iter()
            .filter(|a| a.kind == part.key())
            .collect()
    }
}

/// Treat an explicit JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
