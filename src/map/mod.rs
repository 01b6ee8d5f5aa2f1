pub mod html;

pub use html::{render_html, write_html};

use serde::Serialize;

use crate::domain::{Amenity, Place};

/// One cluster overlay on the map, carrying its category's style and
/// every place fetched for it. An empty collection still gets a
/// layer so the control always lists all categories.
#[derive(Debug, Serialize)]
pub struct ClusterLayer {
    pub label: &'static str,
    pub singular: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub places: Vec<Place>,
}

/// The standalone always-visible marker. It never joins a cluster
/// and never appears in the layer control.
#[derive(Debug, Serialize)]
pub struct Highlight {
    pub name: String,
    pub tooltip: String,
    pub lat: f64,
    pub lon: f64,
    pub icon: &'static str,
    pub color: &'static str,
}

impl Highlight {
    pub const ICON: &'static str = "star";
    pub const COLOR: &'static str = "#d63e2a";

    pub fn new(name: impl Into<String>, tooltip: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            name: name.into(),
            tooltip: tooltip.into(),
            lat,
            lon,
            icon: Self::ICON,
            color: Self::COLOR,
        }
    }
}

/// In-memory map under construction: center, zoom, ordered cluster
/// layers, and exactly one highlight marker. Built once, serialized
/// once, never mutated afterwards.
#[derive(Debug, Serialize)]
pub struct MapDocument {
    pub center: (f64, f64),
    pub zoom: u8,
    pub layers: Vec<ClusterLayer>,
    pub highlight: Highlight,
}

impl MapDocument {
    pub fn new(center: (f64, f64), zoom: u8, highlight: Highlight) -> Self {
        Self {
            center,
            zoom,
            layers: Vec::new(),
            highlight,
        }
    }

    /// Add one category overlay in call order
    pub fn add_layer(&mut self, amenity: Amenity, places: Vec<Place>) {
        self.layers.push(ClusterLayer {
            label: amenity.label(),
            singular: amenity.singular(),
            icon: amenity.icon(),
            color: amenity.color(),
            places,
        });
    }
}
