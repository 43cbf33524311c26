//! Aggregator: the engine's entry operation.
//!
//! Runs tokenizer, keyword match, structure, formatting, recommendations and
//! skill gaps in a fixed order and folds them into one `AnalysisReport`.
//! Overall score = 0.7 × keyword match + 0.3 × structure score.

use tracing::debug;

use crate::extraction::TextExtractor;
use crate::scoring::formatting::check_formatting_issues;
use crate::scoring::keywords::calculate_keyword_match;
use crate::scoring::recommendations::generate_recommendations;
use crate::scoring::report::{round_one_decimal, AnalysisReport, ReportDetails, TOP_KEYWORDS};
use crate::scoring::skill_gap::analyze_skill_gaps;
use crate::scoring::structure::{calculate_structure_score, check_resume_structure};
use crate::scoring::taxonomy::{SkillTaxonomies, TaxonomyError};
use crate::scoring::tokenizer::TokenSet;

const KEYWORD_WEIGHT: f64 = 0.7;
const STRUCTURE_WEIGHT: f64 = 0.3;

/// Stateless across calls: holds only the immutable taxonomies it was built with,
/// so one instance is shared by every request through an `Arc`.
#[derive(Debug, Clone)]
pub struct AtsScorer {
    taxonomies: SkillTaxonomies,
}

impl AtsScorer {
    pub fn new(taxonomies: SkillTaxonomies) -> Self {
        Self { taxonomies }
    }

    pub fn with_builtin_taxonomies() -> Result<Self, TaxonomyError> {
        Ok(Self::new(SkillTaxonomies::builtin()?))
    }

    /// Extracts the resume text, then analyzes it. Extraction failure is the only
    /// error path and yields a failed report rather than an `Err`.
    pub fn analyze_document(
        &self,
        document: &[u8],
        job_description: &str,
        extractor: &dyn TextExtractor,
    ) -> AnalysisReport {
        match extractor.extract(document) {
            Ok(resume_text) => self.analyze(&resume_text, job_description),
            Err(e) => {
                debug!("Extraction failed: {e}");
                AnalysisReport::failed(&e)
            }
        }
    }

    pub fn analyze(&self, resume_text: &str, job_description: &str) -> AnalysisReport {
        let resume_keywords = TokenSet::from_text(resume_text);
        let job_keywords = TokenSet::from_text(job_description);
        let keyword_match = calculate_keyword_match(&resume_keywords, &job_keywords);

        let sections_found = check_resume_structure(resume_text);
        let structure_score = calculate_structure_score(&sections_found);

        let formatting_issues = check_formatting_issues(resume_text);

        let overall_score =
            keyword_match.percentage * KEYWORD_WEIGHT + structure_score * STRUCTURE_WEIGHT;

        let recommendations = generate_recommendations(
            keyword_match.percentage,
            structure_score,
            &keyword_match.missing,
            &sections_found,
            &formatting_issues,
        );

        let skill_gap_analysis = analyze_skill_gaps(resume_text, job_description, &self.taxonomies);

        debug!(
            keyword_match = keyword_match.percentage,
            structure_score,
            overall_score,
            job_keywords = job_keywords.len(),
            "Scored resume"
        );

        let details = ReportDetails {
            keyword_match_score: round_one_decimal(keyword_match.percentage),
            structure_score: round_one_decimal(structure_score),
            matched_keywords_count: keyword_match.matched.len(),
            missing_keywords_count: keyword_match.missing.len(),
            sections_found,
            formatting_issues,
            top_matched_keywords: keyword_match.matched.into_iter().take(TOP_KEYWORDS).collect(),
            top_missing_keywords: keyword_match.missing.into_iter().take(TOP_KEYWORDS).collect(),
            skill_gap_analysis,
        };

        AnalysisReport::completed(round_one_decimal(overall_score), details, recommendations)
    }
}
