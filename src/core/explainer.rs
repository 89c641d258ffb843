//! Bilingual match explanations.
//!
//! Factor scores are mapped to categorical labels through ordered range
//! tables, then substituted into one sentence template per language.
//! Labels and templates are plain data; nothing here computes scores.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{CandidateProfile, ConfidenceBand, EnterpriseProfile, FactorBreakdown};

/// Languages explanations are rendered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    En,
    Hi,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Hi];

    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Hi => "hi",
        }
    }

    fn template(&self) -> &'static str {
        match self {
            Locale::En => EN_TEMPLATE,
            Locale::Hi => HI_TEMPLATE,
        }
    }
}

const EN_TEMPLATE: &str = "{candidate} is recommended for {enterprise} because: \
Domain fit is {domain_label} ({domain_pct}), \
geographic coverage is {geo_label} ({geo_pct}), \
and commission rate is {commission_label} ({commission_pct}%). \
Overall confidence: {band_label} ({composite_pct}).";

const HI_TEMPLATE: &str = "{candidate} को {enterprise} के लिए सुझाया गया है क्योंकि: \
डोमेन मिलान {domain_label} है ({domain_pct}), \
भौगोलिक कवरेज {geo_label} है ({geo_pct}), \
और कमीशन दर {commission_label} है ({commission_pct}%)। \
कुल विश्वास: {band_label} ({composite_pct})।";

/// A label in both supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelPair {
    pub en: &'static str,
    pub hi: &'static str,
}

impl LabelPair {
    pub fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.en,
            Locale::Hi => self.hi,
        }
    }
}

pub const UNKNOWN_LABEL: LabelPair = LabelPair { en: "unknown", hi: "अज्ञात" };

/// Inclusive score range mapped to a label
#[derive(Debug, Clone, Copy)]
pub struct LabelRange {
    pub low: f64,
    pub high: f64,
    pub label: LabelPair,
}

const fn range(low: f64, high: f64, en: &'static str, hi: &'static str) -> LabelRange {
    LabelRange { low, high, label: LabelPair { en, hi } }
}

// First matching range wins, so shared boundaries go to the higher label.
const DOMAIN_LABELS: &[LabelRange] = &[
    range(0.8, 1.0, "strong", "मजबूत"),
    range(0.4, 0.8, "moderate", "मध्यम"),
    range(0.0, 0.4, "weak", "कमजोर"),
];

const GEO_LABELS: &[LabelRange] = &[
    range(0.7, 1.0, "excellent", "उत्कृष्ट"),
    range(0.4, 0.7, "good", "अच्छा"),
    range(0.0, 0.4, "limited", "सीमित"),
];

const COMMISSION_LABELS: &[LabelRange] = &[
    range(0.7, 1.0, "competitive", "प्रतिस्पर्धी"),
    range(0.4, 0.7, "moderate", "सामान्य"),
    range(0.0, 0.4, "high", "अधिक"),
];

/// Factors that appear in explanations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplainedFactor {
    Domain,
    Geographic,
    Commission,
}

impl ExplainedFactor {
    fn table(&self) -> &'static [LabelRange] {
        match self {
            ExplainedFactor::Domain => DOMAIN_LABELS,
            ExplainedFactor::Geographic => GEO_LABELS,
            ExplainedFactor::Commission => COMMISSION_LABELS,
        }
    }
}

/// Label for a factor score; [`UNKNOWN_LABEL`] if no range holds it
pub fn categorize(factor: ExplainedFactor, score: f64) -> LabelPair {
    factor
        .table()
        .iter()
        .find(|r| r.low <= score && score <= r.high)
        .map(|r| r.label)
        .unwrap_or(UNKNOWN_LABEL)
}

/// Qualitative tier label for a band
pub fn band_label(band: ConfidenceBand) -> LabelPair {
    match band {
        ConfidenceBand::Green => LabelPair { en: "High", hi: "उच्च" },
        ConfidenceBand::Yellow => LabelPair { en: "Medium", hi: "मध्यम" },
        ConfidenceBand::Red => LabelPair { en: "Low", hi: "निम्न" },
    }
}

/// Substitute `{key}` placeholders. Unknown keys are left verbatim.
pub fn render(template: &str, bindings: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len() + 64);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let key = &after[..close];
                match bindings.iter().find(|(k, _)| *k == key) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(key);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

fn percent(score: f64) -> String {
    format!("{:.0}%", score * 100.0)
}

/// Rendered explanation in every supported language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Explanation {
    pub en: String,
    pub hi: String,
}

impl Explanation {
    /// Look up the sentence for a language code
    pub fn get(&self, code: &str) -> Option<&str> {
        match code {
            "en" => Some(&self.en),
            "hi" => Some(&self.hi),
            _ => None,
        }
    }

    pub fn into_map(self) -> BTreeMap<String, String> {
        BTreeMap::from([("en".to_string(), self.en), ("hi".to_string(), self.hi)])
    }
}

/// Template-based explainer
#[derive(Debug, Clone, Copy, Default)]
pub struct Explainer;

impl Explainer {
    pub fn new() -> Self {
        Self
    }

    pub fn explain(
        &self,
        enterprise: &EnterpriseProfile,
        candidate: &CandidateProfile,
        factors: &FactorBreakdown,
        composite: f64,
        band: ConfidenceBand,
    ) -> Explanation {
        let domain = categorize(ExplainedFactor::Domain, factors.domain);
        let geo = categorize(ExplainedFactor::Geographic, factors.geographic);
        let commission = categorize(ExplainedFactor::Commission, factors.commission);
        let tier = band_label(band);

        let sentence = |locale: Locale| {
            let bindings = [
                ("candidate", candidate.name.clone()),
                ("enterprise", enterprise.name.clone()),
                ("domain_label", domain.get(locale).to_string()),
                ("domain_pct", percent(factors.domain)),
                ("geo_label", geo.get(locale).to_string()),
                ("geo_pct", percent(factors.geographic)),
                ("commission_label", commission.get(locale).to_string()),
                ("commission_pct", format!("{:.1}", candidate.commission_pct)),
                ("band_label", tier.get(locale).to_string()),
                ("composite_pct", percent(composite)),
            ];
            render(locale.template(), &bindings)
        };

        Explanation {
            en: sentence(Locale::En),
            hi: sentence(Locale::Hi),
        }
    }
}
