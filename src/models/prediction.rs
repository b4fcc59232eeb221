//! Risk classification and prediction response shaping

use serde::Serialize;

/// FWI cutoff separating the two risk buckets. Inclusive on the high side:
/// a score of exactly 6.0 is already HIGH RISK.
pub const RISK_THRESHOLD: f64 = 6.0;

/// Two-valued risk bucket derived from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskCategory {
    Danger,
    Safe,
}

/// Fixed presentation hints per category. These are wire-compatibility
/// constants consumed by the UI, not computed risk semantics.
#[derive(Debug)]
pub struct RiskDisplay {
    pub level: &'static str,
    pub color: &'static str,
    pub category: &'static str,
    pub icon: &'static str,
}

const DANGER_DISPLAY: RiskDisplay = RiskDisplay {
    level: "HIGH RISK",
    color: "#FF4444",
    category: "danger",
    icon: "fas fa-exclamation-triangle",
};

const SAFE_DISPLAY: RiskDisplay = RiskDisplay {
    level: "SAFE",
    color: "#44FF88",
    category: "safe",
    icon: "fas fa-check-circle",
};

impl RiskCategory {
    pub fn classify(score: f64) -> Self {
        if score >= RISK_THRESHOLD {
            RiskCategory::Danger
        } else {
            RiskCategory::Safe
        }
    }

    pub fn display(&self) -> &'static RiskDisplay {
        match self {
            RiskCategory::Danger => &DANGER_DISPLAY,
            RiskCategory::Safe => &SAFE_DISPLAY,
        }
    }
}

/// Successful `/predict` payload. Key names match the original wire format
/// the UI was built against.
#[derive(Debug, Clone, Serialize)]
pub struct PredictResponse {
    pub success: bool,
    pub fwi_score: f64,
    pub risk_level: &'static str,
    pub risk_color: &'static str,
    pub risk_category: &'static str,
    pub risk_icon: &'static str,
    pub threshold: f64,
    pub is_high_risk: bool,
}

impl PredictResponse {
    /// Classification runs on the raw score; only the reported score is
    /// rounded for display.
    pub fn from_score(score: f64) -> Self {
        let display = RiskCategory::classify(score).display();

        Self {
            success: true,
            fwi_score: round2(score),
            risk_level: display.level,
            risk_color: display.color,
            risk_category: display.category,
            risk_icon: display.icon,
            threshold: RISK_THRESHOLD,
            is_high_risk: score >= RISK_THRESHOLD,
        }
    }
}

/// Round to 2 decimal places for display.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
