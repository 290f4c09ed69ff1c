//! Map surface: base tile layers plus one risk marker per projected record.

use crate::api::models::InfrastructureRecord;
use crate::domain::GeoPoint;
use crate::risk::{color_for, RiskColor};
use serde::Serialize;

pub const DEFAULT_CENTER: GeoPoint = GeoPoint::new(38.8977, -77.0365);
pub const DEFAULT_ZOOM: u8 = 14;
pub const MIN_ZOOM: u8 = 1;
pub const MAX_ZOOM: u8 = 18;

const TILE_SIZE_PX: f64 = 256.0;
const CELL_WIDTH_PX: f64 = 8.0;
const CELL_ASPECT: f64 = 2.0;

/// Selectable background layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum BaseLayer {
    #[default]
    Standard,
    Satellite,
    DarkMode,
    Terrain,
}

impl BaseLayer {
    pub const ALL: [Self; 4] = [Self::Standard, Self::Satellite, Self::DarkMode, Self::Terrain];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Satellite => "Satellite",
            Self::DarkMode => "Dark Mode",
            Self::Terrain => "Terrain",
        }
    }

    pub const fn url_template(self) -> &'static str {
        match self {
            Self::Standard => "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
            Self::Satellite => {
                "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}"
            }
            Self::DarkMode => "https://tiles.stadiamaps.com/tiles/alidade_smooth_dark/{z}/{x}/{y}{r}.png",
            Self::Terrain => "https://{s}.tile.opentopomap.org/{z}/{x}/{y}.png",
        }
    }

    pub const fn attribution(self) -> &'static str {
        match self {
            Self::Standard => "© OpenStreetMap",
            Self::Satellite => "© Esri",
            Self::DarkMode => "© Stadia Maps",
            Self::Terrain => "© OpenTopoMap",
        }
    }

    pub const fn next(self) -> Self {
        match self {
            Self::Standard => Self::Satellite,
            Self::Satellite => Self::DarkMode,
            Self::DarkMode => Self::Terrain,
            Self::Terrain => Self::Standard,
        }
    }
}

/// Popup body bound to a marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Popup {
    pub title: String,
    pub kind: String,
    pub risk_score: String,
    pub factors: Vec<(String, String)>,
}

impl Popup {
    pub fn for_record(record: &InfrastructureRecord) -> Self {
        Self {
            title: record.name.clone(),
            kind: record.kind.clone(),
            risk_score: format!("{:.2}", record.risk_score),
            factors: record
                .risk_factors
                .iter()
                .map(|(name, value)| (name.clone(), format!("{value:.2}")))
                .collect(),
        }
    }

    /// Body rendered as text lines, title excluded.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Type: {}", self.kind),
            format!("Risk Score: {}", self.risk_score),
            "Risk Factors:".to_string(),
        ];
        lines.extend(
            self.factors
                .iter()
                .map(|(name, value)| format!("  {name}: {value}")),
        );
        lines
    }
}

/// Circle marker for one record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CircleMarker {
    pub position: GeoPoint,
    pub radius: u8,
    pub color: RiskColor,
    pub fill_color: RiskColor,
    pub weight: u8,
    pub opacity: f64,
    pub fill_opacity: f64,
    pub popup: Popup,
}

impl CircleMarker {
    pub fn for_record(record: &InfrastructureRecord) -> Self {
        let color = color_for(record.risk_score);
        Self {
            position: record.position(),
            radius: 8,
            color,
            fill_color: color,
            weight: 1,
            opacity: 1.0,
            fill_opacity: 0.8,
            popup: Popup::for_record(record),
        }
    }
}

/// Anything attached to the map. Risk markers are a dedicated variant so a
/// render pass can remove exactly those and nothing else.
#[derive(Debug, Clone, PartialEq)]
pub enum Layer {
    Tiles(BaseLayer),
    RiskMarker(CircleMarker),
}

/// Geographic bounds of the visible area, as `[min, max]` pairs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub lon_bounds: [f64; 2],
    pub lat_bounds: [f64; 2],
}

impl Viewport {
    pub fn contains(&self, point: GeoPoint) -> bool {
        (self.lon_bounds[0]..=self.lon_bounds[1]).contains(&point.lon)
            && (self.lat_bounds[0]..=self.lat_bounds[1]).contains(&point.lat)
    }
}

#[derive(Debug, Clone)]
pub struct MapView {
    center: GeoPoint,
    zoom: u8,
    layers: Vec<Layer>,
}

impl Default for MapView {
    fn default() -> Self {
        Self::new(DEFAULT_CENTER, DEFAULT_ZOOM)
    }
}

impl MapView {
    pub fn new(center: GeoPoint, zoom: u8) -> Self {
        Self {
            center,
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
            layers: vec![Layer::Tiles(BaseLayer::default())],
        }
    }

    pub const fn center(&self) -> GeoPoint {
        self.center
    }

    pub const fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn set_view(&mut self, center: GeoPoint, zoom: u8) {
        self.center = center;
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + 1).min(MAX_ZOOM);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = self.zoom.saturating_sub(1).max(MIN_ZOOM);
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn add_layer(&mut self, layer: Layer) {
        self.layers.push(layer);
    }

    /// The active base layer; the first tile layer attached.
    pub fn base_layer(&self) -> Option<BaseLayer> {
        self.layers.iter().find_map(|layer| match layer {
            Layer::Tiles(base) => Some(*base),
            Layer::RiskMarker(_) => None,
        })
    }

    /// Swaps the single active base layer, leaving markers in place.
    pub fn set_base_layer(&mut self, base: BaseLayer) {
        self.layers.retain(|layer| !matches!(layer, Layer::Tiles(_)));
        self.layers.insert(0, Layer::Tiles(base));
    }

    pub fn markers(&self) -> impl Iterator<Item = &CircleMarker> {
        self.layers.iter().filter_map(|layer| match layer {
            Layer::RiskMarker(marker) => Some(marker),
            Layer::Tiles(_) => None,
        })
    }

    pub fn marker_count(&self) -> usize {
        self.markers().count()
    }

    pub fn marker(&self, index: usize) -> Option<&CircleMarker> {
        self.markers().nth(index)
    }

    pub fn clear_markers(&mut self) {
        self.layers
            .retain(|layer| !matches!(layer, Layer::RiskMarker(_)));
    }

    /// Geographic bounds covered by a canvas of `cols` x `rows` terminal cells.
    pub fn viewport(&self, cols: u16, rows: u16) -> Viewport {
        let world_px = TILE_SIZE_PX * 2_f64.powi(i32::from(self.zoom));
        let degrees_per_cell = 360.0 / world_px * CELL_WIDTH_PX;

        let half_lon = f64::from(cols) * degrees_per_cell / 2.0;
        let lat_scale = self.center.lat.to_radians().cos().abs().max(0.01);
        let half_lat = f64::from(rows) * degrees_per_cell * CELL_ASPECT * lat_scale / 2.0;

        Viewport {
            lon_bounds: [self.center.lon - half_lon, self.center.lon + half_lon],
            lat_bounds: [self.center.lat - half_lat, self.center.lat + half_lat],
        }
    }
}

/// Clears every risk marker left by the previous pass, then adds one marker
/// per record. Base layers and the view are untouched.
pub fn render(map: &mut MapView, projection: &[InfrastructureRecord]) {
    map.clear_markers();
    for record in projection {
        map.add_layer(Layer::RiskMarker(CircleMarker::for_record(record)));
    }
}
