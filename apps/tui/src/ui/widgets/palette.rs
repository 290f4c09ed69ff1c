use infra_risk_map::risk::RiskColor;
use infra_risk_map::sync::BaseLayer;
use infra_risk_map::Tier;
use ratatui::style::Color;

pub const fn risk_color(color: RiskColor) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

pub const fn tier_color(tier: Tier) -> Color {
    risk_color(tier.color())
}

/// Canvas background and coastline color for each base layer.
pub const fn base_layer_colors(layer: BaseLayer) -> (Color, Color) {
    match layer {
        BaseLayer::Standard => (Color::Reset, Color::Gray),
        BaseLayer::Satellite => (Color::Rgb(12, 32, 20), Color::Green),
        BaseLayer::DarkMode => (Color::Black, Color::DarkGray),
        BaseLayer::Terrain => (Color::Rgb(40, 34, 22), Color::Yellow),
    }
}
