//! AnalysisReport: the single value returned by one analysis.

use serde::Serialize;

use crate::extraction::ExtractionError;
use crate::scoring::formatting::FormattingIssue;
use crate::scoring::skill_gap::SkillGapAnalysis;
use crate::scoring::structure::SectionPresenceMap;

/// Report lists of matched/missing keywords are cut to this many entries.
pub const TOP_KEYWORDS: usize = 10;

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// 0 – 100, one decimal place
    pub overall_score: f64,
    /// Absent on failed reports.
    #[serde(flatten)]
    pub details: Option<ReportDetails>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportDetails {
    pub keyword_match_score: f64,
    pub structure_score: f64,
    pub matched_keywords_count: usize,
    pub missing_keywords_count: usize,
    pub sections_found: SectionPresenceMap,
    pub formatting_issues: Vec<FormattingIssue>,
    pub top_matched_keywords: Vec<String>,
    pub top_missing_keywords: Vec<String>,
    pub skill_gap_analysis: SkillGapAnalysis,
}

impl AnalysisReport {
    pub fn completed(
        overall_score: f64,
        details: ReportDetails,
        recommendations: Vec<String>,
    ) -> Self {
        Self {
            success: true,
            error: None,
            overall_score,
            details: Some(details),
            recommendations,
        }
    }

    /// A zero-scored report explaining why the document could not be analyzed.
    pub fn failed(error: &ExtractionError) -> Self {
        Self {
            success: false,
            error: Some(error.to_string()),
            overall_score: 0.0,
            details: None,
            recommendations: vec![format!("❌ Error analyzing resume: {error}")],
        }
    }
}

/// Rounds to one decimal place from the exact binary value, exact ties going to
/// even. Agrees with the `{:.1}` percentages printed in recommendations.
pub fn round_one_decimal(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_one_decimal() {
        assert_eq!(round_one_decimal(66.666), 66.7);
        assert_eq!(round_one_decimal(57.5), 57.5);
        assert_eq!(round_one_decimal(0.04), 0.0);
        assert_eq!(round_one_decimal(100.0), 100.0);
    }

    #[test]
    fn test_round_one_decimal_ties_go_to_even() {
        assert_eq!(round_one_decimal(26.25), 26.2);
        assert_eq!(round_one_decimal(6.25), 6.2);
        assert_eq!(round_one_decimal(6.75), 6.8);
    }

    #[test]
    fn test_failed_report_shape() {
        let report = AnalysisReport::failed(&ExtractionError::NoText);
        assert!(!report.success);
        assert_eq!(report.overall_score, 0.0);
        assert_eq!(report.recommendations.len(), 1);
        assert!(report.recommendations[0].starts_with("❌ Error analyzing resume:"));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["success"], false);
        assert!(json["error"].as_str().unwrap().contains("text-based PDF"));
        assert!(json.get("keyword_match_score").is_none());
        assert!(json.get("skill_gap_analysis").is_none());
    }
}
