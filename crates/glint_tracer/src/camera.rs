//! Pinhole camera looking through a screen rectangle on the z = 0 plane.

use glint_core::{CameraDescription, ScreenDescription};
use glint_math::{normalize, Interval, Ray, Vec3};

use crate::error::{TracerError, TracerResult};

/// Vertical shift of the default screen, lifting the horizon into view.
pub const REFERENCE_SCREEN_OFFSET: f32 = 0.25;

/// Screen rectangle on the z = 0 plane.
///
/// Fields follow the (x0, y0, x1, y1) tuple order. `top` is the y sampled
/// by the last image row and `bottom` the y sampled by the first, so the
/// usual framing has `top < bottom`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Screen {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Screen {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Two units wide, `2 / ratio` units tall, shifted up by `y_offset`.
    pub fn from_aspect(ratio: f32, y_offset: f32) -> Self {
        Self::new(-1.0, -1.0 / ratio + y_offset, 1.0, 1.0 / ratio + y_offset)
    }

    fn is_finite(&self) -> bool {
        [self.left, self.top, self.right, self.bottom]
            .iter()
            .all(|v| v.is_finite())
    }
}

impl From<ScreenDescription> for Screen {
    fn from(desc: ScreenDescription) -> Self {
        Screen::new(desc.left, desc.top, desc.right, desc.bottom)
    }
}

/// Generates one primary ray per pixel.
#[derive(Debug, Clone)]
pub struct Camera {
    pub image_width: u32,
    pub image_height: u32,
    position: Vec3,
    /// Explicit screen; derived from the aspect ratio when `None`
    screen: Option<Screen>,
}

impl Camera {
    /// Camera at (0, 0.35, -1) rendering 400x300.
    pub fn new() -> Self {
        Self {
            image_width: 400,
            image_height: 300,
            position: Vec3::new(0.0, 0.35, -1.0),
            screen: None,
        }
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self
    }

    /// Set the eye position.
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Fix the screen rectangle instead of deriving it from the resolution.
    pub fn with_screen(mut self, screen: Screen) -> Self {
        self.screen = Some(screen);
        self
    }

    /// Eye position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Screen rectangle in effect for the current resolution.
    pub fn screen(&self) -> Screen {
        self.screen.unwrap_or_else(|| {
            let ratio = self.image_width as f32 / self.image_height as f32;
            Screen::from_aspect(ratio, REFERENCE_SCREEN_OFFSET)
        })
    }

    /// Check that rays can be generated.
    pub fn validate(&self) -> TracerResult<()> {
        if self.image_width == 0 || self.image_height == 0 {
            return Err(TracerError::InvalidCamera(format!(
                "resolution must be non-zero, got {}x{}",
                self.image_width, self.image_height
            )));
        }
        if !self.position.is_finite() {
            return Err(TracerError::InvalidCamera(format!(
                "eye position {:?} is not finite",
                self.position
            )));
        }
        if self.position.z == 0.0 {
            return Err(TracerError::InvalidCamera(
                "eye lies on the screen plane z = 0".into(),
            ));
        }
        if !self.screen().is_finite() {
            return Err(TracerError::InvalidCamera(format!(
                "screen {:?} is not finite",
                self.screen()
            )));
        }
        Ok(())
    }

    /// Primary ray through pixel (x, y), row 0 being the top of the image.
    ///
    /// The outermost pixels sample the screen edges exactly.
    pub fn get_ray(&self, x: u32, y: u32) -> Ray {
        let screen = self.screen();
        let horizontal = Interval::new(screen.left, screen.right);
        let vertical = Interval::new(screen.top, screen.bottom);

        let last_row = self.image_height.saturating_sub(1);
        let row = last_row - y.min(last_row);
        let target = Vec3::new(
            horizontal.lerp(fraction(x, self.image_width)),
            vertical.lerp(fraction(row, self.image_height)),
            0.0,
        );

        let direction = normalize(target - self.position).unwrap_or(Vec3::Z);
        Ray::new(self.position, direction)
    }

    /// Build and validate a camera from its scene-file description.
    pub fn from_description(desc: &CameraDescription) -> TracerResult<Self> {
        let mut camera = Camera::new()
            .with_resolution(desc.width, desc.height)
            .with_position(desc.position);
        if let Some(screen) = desc.screen {
            camera = camera.with_screen(screen.into());
        }

        if desc.look_at != Vec3::ZERO {
            log::warn!(
                "Camera look_at {:?} is ignored; the screen rectangle sets the framing",
                desc.look_at
            );
        }

        camera.validate()?;
        Ok(camera)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

/// Position of sample `i` among `n` evenly spaced samples over [0, 1].
#[inline]
fn fraction(i: u32, n: u32) -> f32 {
    if n > 1 {
        i as f32 / (n - 1) as f32
    } else {
        0.0
    }
}
