use image::Rgb;

use crate::error::IconError;

pub const ICON_SIZE: u32 = 1024;
pub const INNER_RADIUS: u32 = 350;
pub const OUTER_RADIUS: u32 = 430; // 80px stroke
pub const BACKGROUND: Rgb<u8> = Rgb([0x00, 0x00, 0x00]);
pub const RING_COLOR: Rgb<u8> = Rgb([0xFF, 0xFF, 0xFF]);

/// Location of the icon inside the client's asset bundle, relative to the repository root.
pub const BUNDLE_SUBPATH: &str =
    "frontend/Clientele Manager/Clientele Manager/Assets.xcassets/AppIcon.appiconset/AppIcon.png";

/// Geometry and colours of the ring icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSpec {
    pub size: u32,
    pub background: Rgb<u8>,
    pub ring: Rgb<u8>,
    pub inner_radius: u32,
    pub outer_radius: u32,
}

impl Default for IconSpec {
    fn default() -> Self {
        Self {
            size: ICON_SIZE,
            background: BACKGROUND,
            ring: RING_COLOR,
            inner_radius: INNER_RADIUS,
            outer_radius: OUTER_RADIUS,
        }
    }
}

impl IconSpec {
    pub fn center(&self) -> u32 {
        self.size / 2
    }

    /// Both disks must fit on the canvas and the inner one must leave a visible band.
    pub fn validate(&self) -> Result<(), IconError> {
        if self.size == 0 {
            return Err(IconError::InvalidGeometry("canvas size is zero".into()));
        }
        if self.inner_radius == 0 || self.inner_radius >= self.outer_radius {
            return Err(IconError::InvalidGeometry(format!(
                "inner radius {} must be positive and below outer radius {}",
                self.inner_radius, self.outer_radius
            )));
        }
        if self.outer_radius > self.size / 2 {
            return Err(IconError::InvalidGeometry(format!(
                "outer radius {} exceeds half the canvas ({})",
                self.outer_radius,
                self.size / 2
            )));
        }
        Ok(())
    }
}
