//! Scene description files.
//!
//! A scene is a YAML document listing the canvas size and the shapes to
//! draw. Colors can be given in any supported space and are converted to
//! linear RGB on load.
//!
//! ```yaml
//! width: 640
//! height: 360
//! background: { srgb: [0.02, 0.02, 0.05] }
//! blend: add
//! shapes:
//!   - kind: gradient
//!     center: [320, 180]
//!     radius: 90
//!     gamma: 2.5
//!     color: { hsv: [0.11, 0.6, 1.0] }
//!   - kind: ring
//!     center: [320, 180]
//!     radius: 140
//!     thickness: 6
//!     color: [0.3, 0.5, 1.0]      # bare triple is sRGB
//! ```

use std::path::Path;

use anyhow::{bail, Context, Result};
use flare_color::convert;
use flare_core::{Color, ColorSpaceId, LinearRgb};
use flare_shapes::{BlendMode, CanvasSize, GradientDisk, Point, Ring, Shape, SolidDisk};
use serde::Deserialize;
use tracing::{debug, warn};

/// A loaded scene, ready to render.
#[derive(Debug, Clone)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub background: Color<LinearRgb>,
    pub blend: BlendMode,
    pub shapes: Vec<Shape<LinearRgb>>,
}

impl Scene {
    /// Loads a scene from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scene: {}", path.display()))?;
        Self::from_yaml_str(&content).with_context(|| format!("Invalid scene: {}", path.display()))
    }

    /// Parses a scene from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let raw: RawScene = serde_yaml::from_str(yaml)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawScene) -> Result<Self> {
        if raw.width == 0 || raw.height == 0 {
            bail!("canvas must be at least 1x1, got {}x{}", raw.width, raw.height);
        }
        let size = CanvasSize::new(raw.width, raw.height);

        let background = match raw.background {
            Some(c) => c.to_linear().context("background")?,
            None => Color::ZERO,
        };
        let blend = match raw.blend.as_deref() {
            Some(s) => s.parse()?,
            None => BlendMode::default(),
        };

        let mut shapes = Vec::with_capacity(raw.shapes.len());
        for (i, rs) in raw.shapes.into_iter().enumerate() {
            let shape = rs.build(size).with_context(|| format!("shape #{}", i))?;
            if let Err(e) = shape.validate() {
                warn!(index = i, kind = shape.kind(), "degenerate shape: {}", e);
            }
            shapes.push(shape);
        }

        debug!(
            width = raw.width,
            height = raw.height,
            shapes = shapes.len(),
            %blend,
            "scene loaded"
        );
        Ok(Self {
            width: raw.width,
            height: raw.height,
            background,
            blend,
            shapes,
        })
    }
}

// ============================================================================
// Raw YAML structures for serde
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawScene {
    width: u32,
    height: u32,
    background: Option<RawColor>,
    blend: Option<String>,
    #[serde(default)]
    shapes: Vec<RawShape>,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
enum RawKind {
    Ring,
    #[serde(alias = "solid")]
    Disk,
    Gradient,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawShape {
    kind: RawKind,
    center: [i32; 2],
    radius: f32,
    thickness: Option<f32>,
    gamma: Option<f32>,
    color: RawColor,
}

impl RawShape {
    fn build(self, size: CanvasSize) -> Result<Shape<LinearRgb>> {
        let center = Point::from(self.center);
        let color = self.color.to_linear()?;

        let numbers = [
            ("radius", Some(self.radius)),
            ("thickness", self.thickness),
            ("gamma", self.gamma),
        ];
        for (name, value) in numbers {
            if let Some(v) = value.filter(|v| !v.is_finite()) {
                bail!("'{}' must be finite, got {}", name, v);
            }
        }

        if self.kind != RawKind::Ring && self.thickness.is_some() {
            bail!("'thickness' only applies to rings");
        }
        if self.kind != RawKind::Gradient && self.gamma.is_some() {
            bail!("'gamma' only applies to gradients");
        }

        Ok(match self.kind {
            RawKind::Ring => {
                let Some(thickness) = self.thickness else {
                    bail!("ring needs 'thickness'");
                };
                Ring::new(size, center, self.radius, thickness, color).into()
            }
            RawKind::Disk => SolidDisk::new(size, center, self.radius, color).into(),
            RawKind::Gradient => {
                let gamma = self.gamma.unwrap_or(1.0);
                GradientDisk::new(size, center, self.radius, color, gamma).into()
            }
        })
    }
}

/// A color in any space: a bare `[r, g, b]` (sRGB) or a one-key map.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawColor {
    Plain([f32; 3]),
    Tagged(RawTaggedColor),
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct RawTaggedColor {
    #[serde(alias = "rgb")]
    srgb: Option<[f32; 3]>,
    linear: Option<[f32; 3]>,
    xyz: Option<[f32; 3]>,
    lab: Option<[f32; 3]>,
    hsv: Option<[f32; 3]>,
    hsl: Option<[f32; 3]>,
}

impl RawColor {
    fn to_linear(&self) -> Result<Color<LinearRgb>> {
        let (space, v) = match self {
            RawColor::Plain(v) => (ColorSpaceId::Srgb, *v),
            RawColor::Tagged(t) => t.single()?,
        };
        if v.iter().any(|c| !c.is_finite()) {
            bail!("color components must be finite, got {:?}", v);
        }
        Ok(Color::from_array(convert(v, space, ColorSpaceId::LinearRgb)))
    }
}

impl RawTaggedColor {
    fn single(&self) -> Result<(ColorSpaceId, [f32; 3])> {
        let entries = [
            (ColorSpaceId::Srgb, self.srgb),
            (ColorSpaceId::LinearRgb, self.linear),
            (ColorSpaceId::Xyz, self.xyz),
            (ColorSpaceId::Lab, self.lab),
            (ColorSpaceId::Hsv, self.hsv),
            (ColorSpaceId::Hsl, self.hsl),
        ];
        let mut set = entries.into_iter().filter_map(|(id, v)| v.map(|v| (id, v)));
        match (set.next(), set.next()) {
            (Some(one), None) => Ok(one),
            (None, _) => bail!("color needs one of: srgb, linear, xyz, lab, hsv, hsl"),
            (Some(_), Some(_)) => bail!("color must name exactly one space"),
        }
    }
}
