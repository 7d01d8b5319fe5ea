use serde::Deserialize;
use std::fs;

/// Visual style configuration, loaded from an optional config.toml in the
/// working directory. Canvas size is never configured here; it comes from
/// the command line.
#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub canvas: CanvasConfig,
    #[serde(default)]
    pub style: StyleConfig,
    #[serde(default)]
    pub colors: ColorsConfig,
}

#[derive(Debug, Deserialize)]
pub struct CanvasConfig {
    #[serde(default = "default_margin")]
    pub margin: f32,
}

#[derive(Debug, Deserialize)]
pub struct StyleConfig {
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f32,
    #[serde(default = "default_dot_radius")]
    pub dot_radius: f32,
}

/// An RGB triple, written in the config file as `{ r = .., g = .., b = .. }`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Debug, Deserialize)]
pub struct ColorsConfig {
    #[serde(default = "default_background")]
    pub background: Rgb,
    #[serde(default = "default_path_line")]
    pub path_line: Rgb,
    #[serde(default = "default_endpoint_dot")]
    pub endpoint_dot: Rgb,
    #[serde(default = "default_obstacle")]
    pub obstacle: Rgb,
    #[serde(default = "default_free")]
    pub free: Rgb,
    #[serde(default = "default_path_cell")]
    pub path_cell: Rgb,
    #[serde(default = "default_outline")]
    pub outline: Rgb,
}

// Default values
fn default_margin() -> f32 { 50.0 }
fn default_stroke_width() -> f32 { 2.0 }
fn default_dot_radius() -> f32 { 2.0 }
fn default_background() -> Rgb { Rgb { r: 200, g: 200, b: 200 } }
fn default_path_line() -> Rgb { Rgb { r: 0, g: 0, b: 255 } }
fn default_endpoint_dot() -> Rgb { Rgb { r: 0, g: 0, b: 0 } }
fn default_obstacle() -> Rgb { Rgb { r: 40, g: 40, b: 40 } }
fn default_free() -> Rgb { Rgb { r: 255, g: 255, b: 255 } }
fn default_path_cell() -> Rgb { Rgb { r: 70, g: 110, b: 255 } }
fn default_outline() -> Rgb { Rgb { r: 130, g: 130, b: 130 } }

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            margin: default_margin(),
        }
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            stroke_width: default_stroke_width(),
            dot_radius: default_dot_radius(),
        }
    }
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            background: default_background(),
            path_line: default_path_line(),
            endpoint_dot: default_endpoint_dot(),
            obstacle: default_obstacle(),
            free: default_free(),
            path_cell: default_path_cell(),
            outline: default_outline(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas: CanvasConfig::default(),
            style: StyleConfig::default(),
            colors: ColorsConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, or use defaults if file doesn't exist
    pub fn load() -> Self {
        match fs::read_to_string("config.toml") {
            Ok(contents) => {
                match toml::from_str(&contents) {
                    Ok(config) => {
                        println!("Loaded configuration from config.toml");
                        config
                    }
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config.toml: {}", e);
                        eprintln!("Using default configuration");
                        Config::default()
                    }
                }
            }
            Err(_) => Config::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_fills_in_defaults() {
        let config: Config = toml::from_str(
            r#"
            [canvas]
            margin = 30.0

            [colors]
            obstacle = { r = 0, g = 0, b = 0 }
            "#,
        )
        .unwrap();

        assert_eq!(config.canvas.margin, 30.0);
        assert_eq!(config.colors.obstacle, Rgb { r: 0, g: 0, b: 0 });
        assert_eq!(config.colors.free, default_free());
        assert_eq!(config.style.stroke_width, 2.0);
    }

    #[test]
    fn empty_config_is_all_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.canvas.margin, 50.0);
        assert_eq!(config.style.dot_radius, 2.0);
        assert_eq!(config.colors.background, Rgb { r: 200, g: 200, b: 200 });
    }
}
