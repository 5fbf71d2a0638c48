//! # itinerary-pdf – Itinerary JSON → PDF service
//!
//! This crate turns a travel itinerary into a branded, fixed-template PDF
//! report. The pipeline stages are:
//!
//! 1. **Decode** – request body → [`itinerary::ItineraryData`] ([`itinerary`])
//! 2. **Layout** – place every section at fixed coordinates ([`layout`])
//! 3. **Paginate** – break pages between blocks and stamp footers ([`pagination`])
//! 4. **Render** – emit PDF bytes via printpdf ([`render`])
//!
//! The HTTP surface lives in [`server`].

pub mod config;
pub mod error;
pub mod itinerary;
pub mod layout;
pub mod layout_config;
pub mod pagination;
pub mod pipeline;
pub mod render;
pub mod server;
pub mod style;
pub mod templates;

// Re-exports for convenience
pub use itinerary::ItineraryData;
pub use pipeline::{generate_pdf, PipelineConfig};
pub use server::{app, AppState};
