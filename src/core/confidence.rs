use serde::{Deserialize, Serialize};

use crate::models::ConfidenceBand;

/// Lower bound of the green band
pub const GREEN_THRESHOLD: f64 = 0.85;

/// Lower bound of the yellow band
pub const YELLOW_THRESHOLD: f64 = 0.60;

impl ConfidenceBand {
    /// Route a score to its band
    ///
    /// - green: score >= 0.85
    /// - yellow: 0.60 <= score < 0.85
    /// - red: score < 0.60 (NaN included)
    #[inline]
    pub fn from_score(score: f64) -> Self {
        if score >= GREEN_THRESHOLD {
            ConfidenceBand::Green
        } else if score >= YELLOW_THRESHOLD {
            ConfidenceBand::Yellow
        } else {
            ConfidenceBand::Red
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceBand::Green => "green",
            ConfidenceBand::Yellow => "yellow",
            ConfidenceBand::Red => "red",
        }
    }
}

impl std::fmt::Display for ConfidenceBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Count of scores per band
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandDistribution {
    pub green: usize,
    pub yellow: usize,
    pub red: usize,
}

impl BandDistribution {
    pub fn record(&mut self, score: f64) {
        match ConfidenceBand::from_score(score) {
            ConfidenceBand::Green => self.green += 1,
            ConfidenceBand::Yellow => self.yellow += 1,
            ConfidenceBand::Red => self.red += 1,
        }
    }

    pub fn count(&self, band: ConfidenceBand) -> usize {
        match band {
            ConfidenceBand::Green => self.green,
            ConfidenceBand::Yellow => self.yellow,
            ConfidenceBand::Red => self.red,
        }
    }

    pub fn total(&self) -> usize {
        self.green + self.yellow + self.red
    }
}

impl FromIterator<f64> for BandDistribution {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut dist = BandDistribution::default();
        for score in iter {
            dist.record(score);
        }
        dist
    }
}
