//! Color adjacency extraction from source images
//!
//! One read-only pass over the source canvas records, for every distinct
//! color, the multiset of colors observed in its cardinal neighborhood.
//! Duplicates are kept deliberately: the per-key sequence frequencies are
//! the empirical conditional distribution the synthesizer samples from.

use crate::io::error::{Result, SynthesisError};
use crate::spatial::{Canvas, Color};
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// First-order Markov chain over pixel colors
///
/// Maps each color observed in a source canvas to the sequence of colors
/// observed adjacent to it, with one entry per observation. Border pixels
/// contribute 2 or 3 observations and interior pixels 4; the imbalance is a
/// natural consequence of finite images and is not corrected.
///
/// The `Default` model is keyless; synthesis against it fails fast rather
/// than looping.
#[derive(Debug, Clone, Default)]
pub struct TransitionModel {
    transitions: HashMap<Color, Vec<Color>>,
    keys: Vec<Color>,
}

impl TransitionModel {
    /// Build the transition model from a source canvas
    ///
    /// Every color that appears anywhere in the canvas becomes a key, even
    /// when no neighbor observations exist for it (possible only for a 1×1
    /// source). Runs in O(width·height) with up to four neighbor reads per
    /// pixel and has no side effects on the canvas.
    ///
    /// # Errors
    ///
    /// Returns [`SynthesisError::EmptySource`] if the canvas has zero width
    /// or zero height.
    pub fn from_canvas(canvas: &Canvas) -> Result<Self> {
        let (width, height) = (canvas.width(), canvas.height());
        if width == 0 || height == 0 {
            return Err(SynthesisError::EmptySource { width, height });
        }

        let mut transitions: HashMap<Color, Vec<Color>> = HashMap::new();
        // First-observation order keeps key indexing reproducible across runs
        let mut keys = Vec::new();

        for (point, color) in canvas.pixels() {
            let sequence = match transitions.entry(color) {
                Entry::Occupied(occupied) => occupied.into_mut(),
                Entry::Vacant(vacant) => {
                    keys.push(color);
                    vacant.insert(Vec::new())
                }
            };

            for neighbor in point.cardinal_neighbors(width, height) {
                if let Some(adjacent) = canvas.get(neighbor) {
                    sequence.push(adjacent);
                }
            }
        }

        Ok(Self { transitions, keys })
    }

    /// Distinct colors in first-observation order
    ///
    /// This is the indexable key sequence seed selection draws from; the
    /// order is arbitrary but fixed for a given source canvas.
    pub fn keys(&self) -> &[Color] {
        &self.keys
    }

    /// Number of distinct colors in the model
    pub const fn key_count(&self) -> usize {
        self.keys.len()
    }

    /// Whether the model holds no colors at all
    pub const fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// The observed adjacency sequence for a color
    ///
    /// Returns `None` for colors the source never contained. A key present
    /// with an empty sequence marks the degenerate 1×1 source case.
    pub fn adjacency(&self, color: Color) -> Option<&[Color]> {
        self.transitions.get(&color).map(Vec::as_slice)
    }

    /// Total neighbor observations across all keys
    pub fn observation_count(&self) -> usize {
        self.transitions.values().map(Vec::len).sum()
    }
}
