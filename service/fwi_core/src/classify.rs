//! Risk band classification
//!
//! Maps the continuous FWI score onto four ordered bands with half-open
//! thresholds at 10, 25 and 50, evaluated low-to-high, first match wins.
//! Total over the real line: negative scores are Low.

/// Fire risk band, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Extreme,
}

/// Display color, tied 1:1 to the risk band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskColor {
    Green,
    Yellow,
    Orange,
    Red,
}

/// Qualitative confidence label for a classified score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confidence {
    High,
    VeryHigh,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Moderate => "MODERATE",
            RiskLevel::High => "HIGH",
            RiskLevel::Extreme => "EXTREME",
        }
    }

    pub fn color(&self) -> RiskColor {
        match self {
            RiskLevel::Low => RiskColor::Green,
            RiskLevel::Moderate => RiskColor::Yellow,
            RiskLevel::High => RiskColor::Orange,
            RiskLevel::Extreme => RiskColor::Red,
        }
    }

    /// Confidence is highest at the extremes of the scale, where the bands
    /// are widest.
    pub fn confidence(&self) -> Confidence {
        match self {
            RiskLevel::Low | RiskLevel::Extreme => Confidence::VeryHigh,
            RiskLevel::Moderate | RiskLevel::High => Confidence::High,
        }
    }
}

impl RiskColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskColor::Green => "green",
            RiskColor::Yellow => "yellow",
            RiskColor::Orange => "orange",
            RiskColor::Red => "red",
        }
    }
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::High => "High",
            Confidence::VeryHigh => "Very High",
        }
    }
}

/// Classifies a continuous FWI score into its risk band.
pub fn classify(score: f64) -> RiskLevel {
    if score < 10.0 {
        RiskLevel::Low
    } else if score < 25.0 {
        RiskLevel::Moderate
    } else if score < 50.0 {
        RiskLevel::High
    } else {
        RiskLevel::Extreme
    }
}
