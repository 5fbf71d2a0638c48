//! Pipeline – ties together layout and rendering into a single function call.

use crate::error::RenderError;
use crate::itinerary::ItineraryData;
use crate::layout::layout_itinerary;
use crate::layout_config::LayoutConfig;
use crate::pagination::PageGeometry;
use crate::render::render_pdf;

/// Configuration for the PDF generation pipeline.
#[derive(Debug, Clone, Default)]
pub struct PipelineConfig {
    /// Document title embedded in the PDF metadata. `None` derives it from
    /// the destination ("Goa Itinerary").
    pub title: Option<String>,
    /// Page size, margins and footer position (default: A4 portrait).
    pub geometry: PageGeometry,
}

impl PipelineConfig {
    fn title_for(&self, data: &ItineraryData) -> String {
        match &self.title {
            Some(title) => title.clone(),
            None => format!("{} Itinerary", data.trip_details.destination),
        }
    }
}

/// Full pipeline: itinerary → PDF bytes.
///
/// The input is expected to have passed [`ItineraryData::validate`].
/// Returns `(pdf_bytes, layout_config)`.
pub fn generate_pdf(
    data: &ItineraryData,
    config: &PipelineConfig,
) -> Result<(Vec<u8>, LayoutConfig), RenderError> {
    let layout = compute_layout_config(data, config);
    let pdf_bytes = render_pdf(&layout)?;
    Ok((pdf_bytes, layout))
}

/// Generate only the layout config (no PDF rendering) – useful for testing.
pub fn compute_layout_config(data: &ItineraryData, config: &PipelineConfig) -> LayoutConfig {
    layout_itinerary(data, config.geometry, &config.title_for(data))
}
