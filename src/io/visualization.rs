//! Paint capture and GIF generation for growth visualization

use crate::io::configuration::{GIF_FRAME_BUDGET, VIEWER_MIN_FRAME_DELAY_MS};
use crate::io::error::{Result, SynthesisError, invalid_parameter};
use crate::spatial::{Color, Point};
use image::{Frame, Rgba, RgbaImage};

/// A single pixel paint event
#[derive(Debug, Clone, Copy)]
pub struct PaintEvent {
    /// Painted position
    pub point: Point,
    /// Color written there
    pub color: Color,
}

/// Captures paint events during a synthesis run
///
/// Records every painted pixel in order so the growth can be replayed as an
/// animated GIF afterward. Unpainted pixels render in the backdrop color,
/// the average of the model's key colors, since GIF has no alpha to show
/// transparency with.
#[derive(Debug, Clone)]
pub struct GrowthCapture {
    events: Vec<PaintEvent>,
    width: usize,
    height: usize,
    backdrop: Color,
}

impl GrowthCapture {
    /// Create a capture for a canvas of the given dimensions
    ///
    /// The backdrop is averaged channel-wise over `key_colors`; an empty
    /// slice falls back to mid-gray.
    pub fn new(width: usize, height: usize, key_colors: &[Color]) -> Self {
        let backdrop = if key_colors.is_empty() {
            Color::opaque(128, 128, 128)
        } else {
            let mut sums = [0_u32; 4];
            for color in key_colors {
                for (sum, channel) in sums.iter_mut().zip(color.channels()) {
                    *sum += u32::from(channel);
                }
            }
            let count = key_colors.len() as u32;
            Color([
                (sums[0] / count) as u8,
                (sums[1] / count) as u8,
                (sums[2] / count) as u8,
                (sums[3] / count) as u8,
            ])
        };

        Self {
            events: Vec::with_capacity(width * height),
            width,
            height,
            backdrop,
        }
    }

    /// Record a painted pixel
    pub fn record(&mut self, point: Point, color: Color) {
        self.events.push(PaintEvent { point, color });
    }

    /// All recorded paint events in paint order
    pub fn events(&self) -> &[PaintEvent] {
        &self.events
    }

    /// Number of recorded paint events
    pub const fn event_count(&self) -> usize {
        self.events.len()
    }

    /// The backdrop color used for unpainted pixels
    pub const fn backdrop(&self) -> Color {
        self.backdrop
    }

    /// Export the captured growth as a GIF with automatic frame skipping
    ///
    /// Frames are dropped on two independent grounds: if the requested
    /// delay is faster than viewers reliably render, every n-th event is
    /// kept to preserve the apparent speed; and the replay never exceeds
    /// the frame budget, so long runs skip proportionally more. The final
    /// state is always rendered and held longer for visibility.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No paint events were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif<P: AsRef<std::path::Path>>(
        &self,
        output_path: P,
        frame_delay_ms: u32,
    ) -> Result<()> {
        let output_path = output_path.as_ref();

        if self.events.is_empty() {
            return Err(invalid_parameter(
                "capture",
                &"0 events",
                &"no paint events were recorded for visualization",
            ));
        }

        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let viewer_stride = if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms.max(1)) as usize
        } else {
            1
        };
        let budget_stride = self.events.len().div_ceil(GIF_FRAME_BUDGET);
        let stride = viewer_stride.max(budget_stride).max(1);

        let frames = self.generate_frames(effective_delay_ms, stride);

        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SynthesisError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| SynthesisError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| SynthesisError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    fn generate_frames(&self, delay_ms: u32, stride: usize) -> Vec<Frame> {
        let (width, height) = (self.width as u32, self.height as u32);
        let mut img = RgbaImage::from_pixel(width, height, Rgba(self.backdrop.channels()));
        let mut frames = vec![Self::frame_of(img.clone(), delay_ms)];

        for (index, event) in self.events.iter().enumerate() {
            if event.point.x < self.width && event.point.y < self.height {
                img.put_pixel(
                    event.point.x as u32,
                    event.point.y as u32,
                    event.color.into(),
                );
            }
            if (index + 1) % stride == 0 {
                frames.push(Self::frame_of(img.clone(), delay_ms));
            }
        }

        if self.events.len() % stride != 0 {
            frames.push(Self::frame_of(img.clone(), delay_ms));
        }

        // Final frame displays longer for better visibility
        frames.push(Self::frame_of(img, delay_ms * 25));

        frames
    }

    fn frame_of(img: RgbaImage, delay_ms: u32) -> Frame {
        Frame::from_parts(img, 0, 0, image::Delay::from_numer_denom_ms(delay_ms, 1))
    }
}
