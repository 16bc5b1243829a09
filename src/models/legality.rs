use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// CardLegality: per-format play eligibility
// ---------------------------------------------------------------------------

/// Eleven required `is_<format>_legal` flags plus optional banned/restricted
/// companions. A format may be flagged legal and banned at once; no
/// cross-field rule is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CardLegality {
    pub is_standard_legal: bool,
    pub is_future_legal: bool,
    pub is_frontier_legal: bool,
    pub is_modern_legal: bool,
    pub is_legacy_legal: bool,
    pub is_pauper_legal: bool,
    pub is_vintage_legal: bool,
    pub is_penny_legal: bool,
    pub is_commander_legal: bool,
    pub is_one_v_one_legal: bool,
    pub is_duel_legal: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_standard_banned: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_standard_restricted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_future_banned: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_future_restricted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_frontier_banned: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_frontier_restricted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_modern_banned: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_modern_restricted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_legacy_banned: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_legacy_restricted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_pauper_banned: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_pauper_restricted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_vintage_banned: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_vintage_restricted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_penny_banned: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_penny_restricted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_commander_banned: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_commander_restricted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_one_v_one_banned: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_one_v_one_restricted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_duel_banned: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_duel_restricted: Option<bool>,
}

impl CardLegality {
    /// The `is_<format>_legal` flag, or `None` for an unknown format name.
    pub fn is_legal_in(&self, format: &str) -> Option<bool> {
        let legal = match format {
            "standard" => self.is_standard_legal,
            "future" => self.is_future_legal,
            "frontier" => self.is_frontier_legal,
            "modern" => self.is_modern_legal,
            "legacy" => self.is_legacy_legal,
            "pauper" => self.is_pauper_legal,
            "vintage" => self.is_vintage_legal,
            "penny" => self.is_penny_legal,
            "commander" => self.is_commander_legal,
            "one_v_one" => self.is_one_v_one_legal,
            "duel" => self.is_duel_legal,
            _ => return None,
        };
        Some(legal)
    }

    /// Formats whose legal flag is set, in check order.
    pub fn legal_formats(&self) -> Vec<&'static str> {
        crate::validation::tokens::FORMATS
            .iter()
            .copied()
            .filter(|f| self.is_legal_in(f) == Some(true))
            .collect()
    }
}
