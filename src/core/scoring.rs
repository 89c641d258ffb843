use crate::models::{FactorBreakdown, ScoringWeights, SupportTier};

/// Commission at or above which the commission factor is zero
pub const COMMISSION_CEILING_PCT: f64 = 15.0;

/// Highest historical rating
pub const MAX_RATING: f64 = 5.0;

/// Coverage entries that declare national reach
const NATIONAL_MARKERS: &[&str] = &["all", "all india", "pan-india", "pan india", "national"];

/// Clamp to [0, 1], mapping NaN to 0
#[inline]
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Weighted combination of the five factors
///
/// composite = 0.35*D + 0.20*G + 0.15*C + 0.20*H + 0.10*S
#[inline]
pub fn composite_score(factors: &FactorBreakdown, weights: &ScoringWeights) -> f64 {
    clamp_unit(
        factors.domain * weights.domain
            + factors.geographic * weights.geographic
            + factors.commission * weights.commission
            + factors.history * weights.history
            + factors.sentiment * weights.sentiment,
    )
}

/// Domain alignment step function (D)
///
/// 1.0 when the candidate serves the predicted domain, 0.2 partial credit
/// when it serves other domains, 0 when either side is missing.
#[inline]
pub fn domain_score(predicted_domain: Option<&str>, candidate_domains: &[String]) -> f64 {
    let predicted = match predicted_domain.map(str::trim) {
        Some(p) if !p.is_empty() => p,
        _ => return 0.0,
    };

    let mut declared = candidate_domains
        .iter()
        .map(|d| d.trim())
        .filter(|d| !d.is_empty())
        .peekable();

    if declared.peek().is_none() {
        return 0.0;
    }
    if declared.any(|d| d == predicted) {
        1.0
    } else {
        0.2
    }
}

/// Geographic proximity (G)
///
/// - 1.0: coverage names the enterprise district
/// - 0.6: coverage names the enterprise state
/// - 0.4: coverage declares national reach
/// - 0.2: coverage is declared but does not reach the enterprise
/// - 0.3: candidate declares no coverage at all
pub fn geographic_score(
    state: Option<&str>,
    district: Option<&str>,
    coverage: Option<&str>,
) -> f64 {
    let coverage = match coverage.map(str::trim) {
        Some(c) if !c.is_empty() => c.to_lowercase(),
        _ => return 0.3,
    };

    let names = |place: Option<&str>| {
        place
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map_or(false, |p| coverage.contains(&p.to_lowercase()))
    };

    if names(district) {
        return 1.0;
    }
    if names(state) {
        return 0.6;
    }

    let national = coverage.split(',').map(str::trim).any(declares_national);

    if national { 0.4 } else { 0.2 }
}

/// A coverage entry is national when it is a marker or starts with one
/// followed by a non-alphanumeric character ("pan-india (all states)",
/// "all over india"). "kollam" and "alleppey" are not.
fn declares_national(entry: &str) -> bool {
    NATIONAL_MARKERS.iter().any(|marker| match entry.strip_prefix(marker) {
        Some(rest) => rest.chars().next().map_or(true, |c| !c.is_alphanumeric()),
        None => false,
    })
}

/// Commission competitiveness (C): 1.0 at 0% falling linearly to 0.0 at 15%
#[inline]
pub fn commission_score(commission_pct: f64) -> f64 {
    clamp_unit(1.0 - commission_pct / COMMISSION_CEILING_PCT)
}

/// Historical performance (H): rating / 5
#[inline]
pub fn history_score(rating: f64) -> f64 {
    clamp_unit(rating / MAX_RATING)
}

/// Onboarding support component of S
#[inline]
pub fn support_score(tier: Option<SupportTier>) -> f64 {
    match tier {
        Some(SupportTier::Full) => 1.0,
        Some(SupportTier::Partial) => 0.5,
        Some(SupportTier::None) | None => 0.1,
    }
}

/// Language component of S
///
/// 0.5 when either side declares nothing, otherwise 1.0 on a match and
/// 0.3 partial credit on a miss.
#[inline]
pub fn language_score(enterprise_language: &str, supported: &[String]) -> f64 {
    let wanted = enterprise_language.trim().to_lowercase();
    if supported.is_empty() || wanted.is_empty() {
        return 0.5;
    }
    if supported.iter().any(|l| l.trim().to_lowercase() == wanted) {
        1.0
    } else {
        0.3
    }
}

/// Sentiment / support quality (S): 0.6 x support + 0.4 x language
#[inline]
pub fn sentiment_score(
    tier: Option<SupportTier>,
    supported_languages: &[String],
    enterprise_language: &str,
) -> f64 {
    clamp_unit(0.6 * support_score(tier) + 0.4 * language_score(enterprise_language, supported_languages))
}
