//! QR code generation.
//!
//! The pipeline is address → QR matrix (`qrcode`) → 8-bit grayscale raster
//! (`image`) → PNG bytes → standard base64. Every step is deterministic, so
//! the same address always yields the same text.

use std::fmt;
use std::io::Cursor;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::{DynamicImage, ImageFormat, Luma};
use qrcode::{EcLevel, QrCode};
use serde::Serialize;

use crate::{Error, Result};

/// Pixels per QR module by default.
pub const DEFAULT_MODULE_SIZE: u32 = 10;

// ============================================================================
// Artifact
// ============================================================================

/// A base64-encoded PNG QR code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Artifact(String);

impl Artifact {
    /// The base64 text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// A `data:` URI for use as an `<img src>`.
    pub fn data_uri(&self) -> String {
        format!("data:image/png;base64,{}", self.0)
    }

    /// Returns `true` if there is no encoded data.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume into the base64 text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// ArtifactGenerator
// ============================================================================

/// Renders addresses as QR code PNGs.
#[derive(Debug, Clone, Copy)]
pub struct ArtifactGenerator {
    module_size: u32,
    quiet_zone: bool,
    ec_level: EcLevel,
}

impl Default for ArtifactGenerator {
    fn default() -> Self {
        Self {
            module_size: DEFAULT_MODULE_SIZE,
            quiet_zone: true,
            ec_level: EcLevel::M,
        }
    }
}

impl ArtifactGenerator {
    /// Generator with 10px modules, a 4-module quiet zone, and medium error
    /// correction.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pixel size of one module. Zero is treated as one.
    pub fn with_module_size(mut self, pixels: u32) -> Self {
        self.module_size = pixels.max(1);
        self
    }

    /// Enable or disable the white border around the code.
    pub fn with_quiet_zone(mut self, quiet_zone: bool) -> Self {
        self.quiet_zone = quiet_zone;
        self
    }

    /// Set the error correction level.
    pub fn with_error_correction(mut self, level: EcLevel) -> Self {
        self.ec_level = level;
        self
    }

    /// Encode `address` as a QR code PNG in base64.
    pub fn generate(&self, address: &str) -> Result<Artifact> {
        Ok(Artifact(STANDARD.encode(self.generate_png(address)?)))
    }

    /// Encode `address` as raw PNG bytes.
    pub fn generate_png(&self, address: &str) -> Result<Vec<u8>> {
        if address.is_empty() {
            return Err(Error::EmptyAddress);
        }

        let code = QrCode::with_error_correction_level(address.as_bytes(), self.ec_level)?;
        let raster = code
            .render::<Luma<u8>>()
            .quiet_zone(self.quiet_zone)
            .module_dimensions(self.module_size, self.module_size)
            .build();

        let mut png = Vec::new();
        DynamicImage::ImageLuma8(raster).write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;

        tracing::trace!(address, bytes = png.len(), "Generated QR code");
        Ok(png)
    }
}

/// Encode `address` with the default [`ArtifactGenerator`].
pub fn generate(address: &str) -> Result<Artifact> {
    ArtifactGenerator::default().generate(address)
}

// ============================================================================
// Tests
// ============================================================================
