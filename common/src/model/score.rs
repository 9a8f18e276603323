use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// A 0–100 score as reported by the analysis service.
///
/// The service sends category scores as integers but rounds the overall score
/// to one decimal, so the value is kept as `f64`. `Display` prints whole values
/// without a fractional part (`85`, `78.5`).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct Score(f64);

/// Whole scores are written back as integers, so `85` stays `85` in reports.
impl Serialize for Score {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.is_finite() && self.0.fract() == 0.0 {
            serializer.serialize_i64(self.0 as i64)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

impl Score {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Value clamped to the 0–100 range, used for bar widths and gauge arcs.
    pub fn percent(self) -> f64 {
        self.0.clamp(0.0, 100.0)
    }

    pub fn band(self) -> Band {
        band(self.0)
    }
}

impl From<u8> for Score {
    fn from(value: u8) -> Self {
        Self(f64::from(value))
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Three-way classification shared by the gauge and every category bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Band {
    Good,
    Warning,
    Poor,
}

/// Good iff `score >= 80`, Warning iff `60 <= score < 80`, Poor otherwise.
pub fn band(score: f64) -> Band {
    if score >= 80.0 {
        Band::Good
    } else if score >= 60.0 {
        Band::Warning
    } else {
        Band::Poor
    }
}

impl Band {
    pub fn color(self) -> &'static str {
        match self {
            Band::Good => "#28a745",
            Band::Warning => "#ffc107",
            Band::Poor => "#dc3545",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Band::Good => "good",
            Band::Warning => "warning",
            Band::Poor => "poor",
        }
    }

    /// One-line summary shown under the overall gauge.
    pub fn verdict(self) -> &'static str {
        match self {
            Band::Good => "Your resume is well-optimized for ATS systems.",
            Band::Warning => "Your resume needs some improvements for better ATS compatibility.",
            Band::Poor => "Your resume needs significant improvements for ATS compatibility.",
        }
    }
}
