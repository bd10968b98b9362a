//! Visual theming for the force graph.
//!
//! Provides color palettes, gradients, and visual style configuration.
//! Two themes ship with the dashboard: [`Theme::sentinel`], the light
//! default, and [`Theme::midnight`], the dark variant.

/// RGBA color representation.
#[derive(Clone, Copy, Debug)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Lighten the color by a factor (0.0 = unchanged, 1.0 = white)
	pub fn lighten(self, factor: f64) -> Self {
		let f = factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 + (255.0 - self.r as f64) * f) as u8,
			g: (self.g as f64 + (255.0 - self.g as f64) * f) as u8,
			b: (self.b as f64 + (255.0 - self.b as f64) * f) as u8,
			a: self.a,
		}
	}

	/// Darken the color by a factor (0.0 = unchanged, 1.0 = black)
	pub fn darken(self, factor: f64) -> Self {
		let f = 1.0 - factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 * f) as u8,
			g: (self.g as f64 * f) as u8,
			b: (self.b as f64 * f) as u8,
			a: self.a,
		}
	}

	/// Linear interpolation between two colors
	pub fn lerp(self, other: Color, t: f64) -> Self {
		let t = t.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 * (1.0 - t) + other.r as f64 * t) as u8,
			g: (self.g as f64 * (1.0 - t) + other.g as f64 * t) as u8,
			b: (self.b as f64 * (1.0 - t) + other.b as f64 * t) as u8,
			a: self.a * (1.0 - t) + other.a * t,
		}
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}

	pub fn to_css_rgb(self) -> String {
		format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
	}
}

/// Fallback color palette for nodes without an explicit or role-derived color.
#[derive(Clone, Debug)]
pub struct NodePalette {
	pub colors: Vec<Color>,
}

impl NodePalette {
	/// Muted grey-blues for the light theme (default)
	pub fn steel() -> Self {
		Self {
			colors: vec![
				Color::rgb(139, 149, 161), // Slate grey
				Color::rgb(176, 184, 193), // Light grey
				Color::rgb(108, 142, 173), // Air force blue
				Color::rgb(122, 153, 168), // Dusty blue
				Color::rgb(143, 163, 180), // Cool gray
				Color::rgb(119, 158, 165), // Desaturated cyan
			],
		}
	}

	/// Saturated accent set for the dark theme
	pub fn signal() -> Self {
		Self {
			colors: vec![
				Color::rgb(41, 121, 255),  // Signal blue
				Color::rgb(0, 200, 83),    // Market green
				Color::rgb(255, 145, 0),   // Caution orange
				Color::rgb(255, 82, 82),   // Risk red
				Color::rgb(124, 140, 160), // Steel
				Color::rgb(158, 158, 158), // Neutral grey
			],
		}
	}

	pub fn get(&self, index: usize) -> Color {
		self.colors[index % self.colors.len()]
	}
}

/// Background style configuration.
#[derive(Clone, Debug)]
pub struct BackgroundStyle {
	/// Primary background color
	pub color: Color,
	/// Secondary color for gradients
	pub color_secondary: Color,
	/// Whether to use radial gradient
	pub use_gradient: bool,
	/// Vignette intensity (0.0 = none, 1.0 = strong)
	pub vignette: f64,
}

/// Edge visual style.
#[derive(Clone, Debug)]
pub struct EdgeStyle {
	/// Base edge color
	pub color: Color,
	/// Relation label text color
	pub label_color: Color,
}

/// Node visual style.
#[derive(Clone, Debug)]
pub struct NodeStyle {
	/// Whether nodes have inner gradients
	pub use_gradient: bool,
	/// Border/stroke width (0 = no border)
	pub border_width: f64,
	/// Border color
	pub border_color: Color,
	/// Node label text color
	pub label_color: Color,
	/// Hover ring color
	pub ring_color: Color,
}

/// Particle effect configuration.
#[derive(Clone, Debug)]
pub struct ParticleStyle {
	/// Whether particles are enabled
	pub enabled: bool,
	/// Number of particles
	pub count: usize,
	/// Particle color
	pub color: Color,
	/// Minimum particle size
	pub size_min: f64,
	/// Maximum particle size
	pub size_max: f64,
	/// Particle movement speed
	pub speed: f64,
	/// Particle opacity
	pub opacity: f64,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	pub name: &'static str,
	pub background: BackgroundStyle,
	pub edge: EdgeStyle,
	pub node: NodeStyle,
	pub particles: ParticleStyle,
	pub palette: NodePalette,
}

impl Theme {
	/// Light dashboard theme: white canvas, ink labels, flat nodes (default)
	pub fn sentinel() -> Self {
		Self {
			name: "sentinel",
			background: BackgroundStyle {
				color: Color::rgb(255, 255, 255),
				color_secondary: Color::rgb(249, 250, 251),
				use_gradient: true,
				vignette: 0.0,
			},
			edge: EdgeStyle {
				color: Color::rgba(229, 232, 235, 0.95),
				label_color: Color::rgba(139, 149, 161, 0.9),
			},
			node: NodeStyle {
				use_gradient: false,
				border_width: 0.0,
				border_color: Color::rgba(255, 255, 255, 0.0),
				label_color: Color::rgb(25, 31, 40),
				ring_color: Color::rgb(49, 130, 246),
			},
			particles: ParticleStyle {
				enabled: false,
				count: 0,
				color: Color::rgba(0, 0, 0, 0.0),
				size_min: 0.0,
				size_max: 0.0,
				speed: 0.0,
				opacity: 0.0,
			},
			palette: NodePalette::steel(),
		}
	}

	/// Dark dashboard theme with ambient particles
	pub fn midnight() -> Self {
		Self {
			name: "midnight",
			background: BackgroundStyle {
				color: Color::rgb(30, 30, 30),
				color_secondary: Color::rgb(40, 40, 46),
				use_gradient: true,
				vignette: 0.2,
			},
			edge: EdgeStyle {
				color: Color::rgba(158, 158, 158, 0.45),
				label_color: Color::rgba(220, 224, 228, 0.85),
			},
			node: NodeStyle {
				use_gradient: true,
				border_width: 0.0,
				border_color: Color::rgba(255, 255, 255, 0.0),
				label_color: Color::rgb(244, 246, 248),
				ring_color: Color::rgb(255, 255, 255),
			},
			particles: ParticleStyle {
				enabled: true,
				count: 48,
				color: Color::rgba(255, 255, 255, 1.0),
				size_min: 0.4,
				size_max: 1.4,
				speed: 0.03,
				opacity: 0.3,
			},
			palette: NodePalette::signal(),
		}
	}

	/// Look up a theme by its name, falling back to the default.
	pub fn by_name(name: &str) -> Self {
		match name {
			"midnight" => Self::midnight(),
			_ => Self::sentinel(),
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::sentinel()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn opaque_colors_format_as_hex() {
		assert_eq!(Color::rgb(49, 130, 246).to_css(), "#3182f6");
		assert_eq!(Color::rgb(240, 68, 82).to_css_rgb(), "#f04452");
	}

	#[test]
	fn translucent_colors_format_as_rgba() {
		assert_eq!(
			Color::rgba(229, 232, 235, 0.5).to_css(),
			"rgba(229, 232, 235, 0.5)"
		);
	}

	#[test]
	fn lerp_endpoints() {
		let a = Color::rgb(0, 0, 0);
		let b = Color::rgb(200, 100, 50);
		let start = a.lerp(b, 0.0);
		let end = a.lerp(b, 1.0);
		assert_eq!((start.r, start.g, start.b), (0, 0, 0));
		assert_eq!((end.r, end.g, end.b), (200, 100, 50));
	}

	#[test]
	fn palette_wraps_around() {
		let palette = NodePalette::steel();
		let n = palette.colors.len();
		assert_eq!(palette.get(0).to_css(), palette.get(n).to_css());
	}

	#[test]
	fn theme_lookup_by_name() {
		assert_eq!(Theme::by_name("midnight").name, "midnight");
		assert_eq!(Theme::by_name("sentinel").name, "sentinel");
		assert_eq!(Theme::by_name("unknown").name, "sentinel");
	}
}
