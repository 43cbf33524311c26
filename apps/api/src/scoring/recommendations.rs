//! Recommendation Generator: turns scores and flags into tiered, human-readable advice.
//!
//! Output order is fixed: keyword block, missing essential sections, heading tip,
//! formatting issues, closing affirmation. Lines are never reordered or deduplicated.

use crate::scoring::formatting::FormattingIssue;
use crate::scoring::skill_gap::title_case;
use crate::scoring::structure::{Section, SectionPresenceMap};

const LOW_KEYWORD_MATCH: f64 = 50.0;
const MODERATE_KEYWORD_MATCH: f64 = 70.0;
const LOW_STRUCTURE_SCORE: f64 = 50.0;
const ATS_FRIENDLY_THRESHOLD: f64 = 70.0;
const MISSING_KEYWORDS_SHOWN: usize = 5;

pub fn generate_recommendations(
    keyword_match: f64,
    structure_score: f64,
    missing_keywords: &[String],
    sections_found: &SectionPresenceMap,
    formatting_issues: &[FormattingIssue],
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if keyword_match < LOW_KEYWORD_MATCH {
        recommendations.push(format!(
            "⚠️ Low keyword match ({keyword_match:.1}%). Add more relevant keywords from the job description."
        ));
        if !missing_keywords.is_empty() {
            let top_missing: Vec<&str> = missing_keywords
                .iter()
                .take(MISSING_KEYWORDS_SHOWN)
                .map(String::as_str)
                .collect();
            recommendations.push(format!(
                "📝 Consider adding these keywords: {}",
                top_missing.join(", ")
            ));
        }
    } else if keyword_match < MODERATE_KEYWORD_MATCH {
        recommendations.push(format!(
            "✓ Moderate keyword match ({keyword_match:.1}%). Consider adding more specific skills and technologies."
        ));
    } else {
        recommendations.push(format!("✅ Excellent keyword match ({keyword_match:.1}%)!"));
    }

    let missing_essential: Vec<&str> = Section::ESSENTIAL
        .iter()
        .filter(|section| !sections_found.get(*section).copied().unwrap_or(false))
        .map(|section| section.as_str())
        .collect();
    if !missing_essential.is_empty() {
        recommendations.push(format!(
            "⚠️ Missing essential sections: {}",
            title_case(&missing_essential.join(", "))
        ));
    }

    if structure_score < LOW_STRUCTURE_SCORE {
        recommendations.push(
            "📋 Add clear section headings (Experience, Education, Skills, etc.)".to_string(),
        );
    }

    for issue in formatting_issues {
        recommendations.push(format!("⚠️ {issue}"));
    }

    if keyword_match > ATS_FRIENDLY_THRESHOLD && structure_score > ATS_FRIENDLY_THRESHOLD {
        recommendations.push("✅ Your resume appears to be ATS-friendly!".to_string());
        recommendations.push(
            "💡 Tip: Use standard fonts and avoid images/graphics for best ATS compatibility"
                .to_string(),
        );
    }

    recommendations
}
