//! Summary statistics over a built transition model
//!
//! Purely descriptive: nothing here feeds back into synthesis. The numbers
//! give a quick feel for how blobby or noisy the output will be before any
//! pixels are painted.

use crate::analysis::adjacency::TransitionModel;
use crate::spatial::Color;
use std::fmt;

/// Aggregate measurements of a transition model
#[derive(Debug, Clone, PartialEq)]
pub struct ModelStatistics {
    /// Number of distinct colors the source contained
    pub distinct_colors: usize,
    /// Total adjacency observations across all colors
    pub total_observations: usize,
    /// Mean observations per color
    pub mean_observations: f64,
    /// Share of observations where a color neighbors itself
    ///
    /// High values indicate large same-color regions in the source and
    /// predict blobby synthesized output; values near zero predict noise.
    pub self_adjacency_rate: f64,
    /// The color with the most observations, with its observation count
    pub most_observed: Option<(Color, usize)>,
}

impl ModelStatistics {
    /// Measure a transition model
    ///
    /// Iterates keys in model order so ties for the most observed color
    /// resolve to the earlier key.
    pub fn from_model(model: &TransitionModel) -> Self {
        let mut total = 0_usize;
        let mut self_loops = 0_usize;
        let mut most_observed: Option<(Color, usize)> = None;

        for &key in model.keys() {
            let Some(sequence) = model.adjacency(key) else {
                continue;
            };
            total += sequence.len();
            self_loops += sequence.iter().filter(|&&c| c == key).count();
            if most_observed.is_none_or(|(_, best)| sequence.len() > best) {
                most_observed = Some((key, sequence.len()));
            }
        }

        let distinct_colors = model.key_count();
        let mean_observations = if distinct_colors == 0 {
            0.0
        } else {
            total as f64 / distinct_colors as f64
        };
        let self_adjacency_rate = if total == 0 {
            0.0
        } else {
            self_loops as f64 / total as f64
        };

        Self {
            distinct_colors,
            total_observations: total,
            mean_observations,
            self_adjacency_rate,
            most_observed,
        }
    }
}

impl fmt::Display for ModelStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Distinct colors:  {}", self.distinct_colors)?;
        writeln!(f, "Observations:     {}", self.total_observations)?;
        writeln!(f, "Mean per color:   {:.2}", self.mean_observations)?;
        writeln!(
            f,
            "Self-adjacency:   {:.1}%",
            self.self_adjacency_rate * 100.0
        )?;
        match self.most_observed {
            Some((color, count)) => {
                write!(f, "Most observed:    {color} ({count} observations)")
            }
            None => write!(f, "Most observed:    n/a"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::{Canvas, Point};

    #[test]
    fn test_uniform_canvas_has_full_self_adjacency() {
        let canvas = Canvas::filled(3, 3, Color::opaque(9, 9, 9));
        let model = TransitionModel::from_canvas(&canvas).unwrap();
        let stats = ModelStatistics::from_model(&model);

        assert_eq!(stats.distinct_colors, 1);
        assert_eq!(stats.total_observations, 24);
        assert!((stats.self_adjacency_rate - 1.0).abs() < f64::EPSILON);
        assert_eq!(stats.most_observed, Some((Color::opaque(9, 9, 9), 24)));
    }

    #[test]
    fn test_checkerboard_has_zero_self_adjacency() {
        let black = Color::opaque(0, 0, 0);
        let white = Color::opaque(255, 255, 255);
        let mut canvas = Canvas::transparent(2, 2);
        canvas.set(Point::new(0, 0), black);
        canvas.set(Point::new(1, 0), white);
        canvas.set(Point::new(0, 1), white);
        canvas.set(Point::new(1, 1), black);

        let model = TransitionModel::from_canvas(&canvas).unwrap();
        let stats = ModelStatistics::from_model(&model);

        assert_eq!(stats.distinct_colors, 2);
        assert!(stats.self_adjacency_rate.abs() < f64::EPSILON);
    }

    #[test]
    fn test_display_reports_missing_leader_for_empty_model() {
        let stats = ModelStatistics {
            distinct_colors: 0,
            total_observations: 0,
            mean_observations: 0.0,
            self_adjacency_rate: 0.0,
            most_observed: None,
        };
        assert!(stats.to_string().contains("n/a"));
    }
}
