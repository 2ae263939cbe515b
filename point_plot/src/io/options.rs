use serde::{Deserialize, Serialize};

/// Presentation settings for a plot window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlotOptions {
    pub title: String,
    pub window_width: f32,
    pub window_height: f32,
    /// Marker radius as a fraction of the longest side of the plot box.
    pub marker_radius: f32,
    pub line_color: [f32; 3],
    pub marker_color: [f32; 3],
    pub arrow_color: [f32; 3],
    pub background_color: [f32; 3],
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            title: "Point Plot".to_string(),
            window_width: 800.0,
            window_height: 600.0,
            marker_radius: 0.008,
            line_color: [0.12, 0.47, 0.71],
            marker_color: [0.12, 0.47, 0.71],
            arrow_color: [0.0, 0.0, 0.0],
            background_color: [1.0, 1.0, 1.0],
        }
    }
}

pub fn read_options_json(path: &str) -> std::io::Result<PlotOptions> {
    let contents = crate::io::read_to_string(path)?;
    let options: PlotOptions = serde_json::from_str(&contents)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    Ok(options)
}

pub fn write_options_json(path: &str, options: &PlotOptions) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(options).map_err(std::io::Error::other)?;
    std::fs::write(path, json)
}
