//! Text histogram of measurement probabilities
//!
//! Output format:
//!
//! ```text
//! Measurement Probabilities:
//!
//! |00⟩: 50.00% █████████████████████████
//! |11⟩: 50.00% █████████████████████████
//! ```

use qcirc_state::ProbabilityMap;
use std::fmt::Write;

/// First line of every rendered histogram, followed by a blank line
pub const HEADER: &str = "Measurement Probabilities:\n\n";

/// Character used for histogram bars
pub const BAR_CHAR: char = '█';

/// Default cutoff; labels at or below it are not drawn
pub const DEFAULT_DISPLAY_THRESHOLD: f64 = 0.001;

/// Default bar length, in characters, for probability 1.0
pub const DEFAULT_BAR_SCALE: usize = 50;

/// Renders probability maps as sorted bar histograms
#[derive(Debug, Clone, Copy)]
pub struct Histogram {
    threshold: f64,
    scale: usize,
}

impl Default for Histogram {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_DISPLAY_THRESHOLD,
            scale: DEFAULT_BAR_SCALE,
        }
    }
}

impl Histogram {
    pub fn new(threshold: f64, scale: usize) -> Self {
        Self { threshold, scale }
    }

    /// Bar length for probability `p`: `floor(p * scale)`
    pub fn bar_len(&self, p: f64) -> usize {
        (p * self.scale as f64).floor() as usize
    }

    /// Render one line per label above the threshold, in label order
    pub fn render(&self, probabilities: &ProbabilityMap) -> String {
        let mut out = String::from(HEADER);

        for (label, p) in probabilities.sorted() {
            if p <= self.threshold {
                continue;
            }
            let bar: String = std::iter::repeat(BAR_CHAR).take(self.bar_len(p)).collect();
            // Writing to a String cannot fail.
            let _ = writeln!(out, "|{}⟩: {:.2}% {}", label, p * 100.0, bar);
        }

        out
    }
}

/// Render with the default threshold and scale
pub fn visualize(probabilities: &ProbabilityMap) -> String {
    Histogram::default().render(probabilities)
}
