//! Keyword Matcher: compares resume tokens against job-description tokens.
//!
//! The job description is the requirement side, so its token set is the universe:
//! every job token lands in exactly one of `matched` or `missing`.

use crate::scoring::tokenizer::TokenSet;

#[derive(Debug, Clone, PartialEq)]
pub struct KeywordMatch {
    /// 0 – 100
    pub percentage: f64,
    /// Job tokens also present in the resume, in job-description order.
    pub matched: Vec<String>,
    /// Job tokens absent from the resume, in job-description order.
    pub missing: Vec<String>,
}

pub fn calculate_keyword_match(resume: &TokenSet, job: &TokenSet) -> KeywordMatch {
    let (matched, missing): (Vec<String>, Vec<String>) = job
        .iter()
        .map(str::to_string)
        .partition(|token| resume.contains(token));

    let percentage = if job.is_empty() {
        0.0
    } else {
        matched.len() as f64 / job.len() as f64 * 100.0
    };

    KeywordMatch {
        percentage,
        matched,
        missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(text: &str) -> TokenSet {
        TokenSet::from_text(text)
    }

    #[test]
    fn test_empty_job_scores_zero_with_nothing_missing() {
        let result = calculate_keyword_match(&set("python rust golang"), &set(""));
        assert_eq!(result.percentage, 0.0);
        assert!(result.matched.is_empty());
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_job_subset_of_resume_scores_full() {
        let result = calculate_keyword_match(
            &set("python rust golang kubernetes"),
            &set("rust kubernetes"),
        );
        assert_eq!(result.percentage, 100.0);
        assert!(result.missing.is_empty());
        assert_eq!(result.matched, vec!["rust", "kubernetes"]);
    }

    #[test]
    fn test_partial_match_uses_job_set_as_denominator() {
        let result = calculate_keyword_match(
            &set("python developer with many unrelated resume words"),
            &set("python aws terraform docker"),
        );
        assert!((result.percentage - 25.0).abs() < f64::EPSILON);
        assert_eq!(result.matched, vec!["python"]);
        assert_eq!(result.missing, vec!["aws", "terraform", "docker"]);
    }

    #[test]
    fn test_matched_and_missing_partition_job_set() {
        let job = set("rust python aws terraform rust python");
        let result = calculate_keyword_match(&set("python terraform java"), &job);

        assert_eq!(result.matched.len() + result.missing.len(), job.len());
        for token in &result.matched {
            assert!(!result.missing.contains(token));
        }
        assert!((0.0..=100.0).contains(&result.percentage));
    }
}
