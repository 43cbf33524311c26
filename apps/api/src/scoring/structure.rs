//! Structure Checker: detects standard resume section words and scores completeness.
//!
//! A section counts as present when its name appears as a whole word anywhere in the
//! text, not only as a heading ("my education" in a sentence counts as Education).

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Experience,
    Education,
    Skills,
    Summary,
    Objective,
    Certifications,
    Projects,
    Achievements,
}

impl Section {
    /// Canonical order, also the serialization order of `SectionPresenceMap`.
    pub const ALL: [Section; 8] = [
        Section::Experience,
        Section::Education,
        Section::Skills,
        Section::Summary,
        Section::Objective,
        Section::Certifications,
        Section::Projects,
        Section::Achievements,
    ];

    /// Sections weighted more heavily in the structure score.
    pub const ESSENTIAL: [Section; 3] = [Section::Experience, Section::Education, Section::Skills];

    pub fn as_str(self) -> &'static str {
        match self {
            Section::Experience => "experience",
            Section::Education => "education",
            Section::Skills => "skills",
            Section::Summary => "summary",
            Section::Objective => "objective",
            Section::Certifications => "certifications",
            Section::Projects => "projects",
            Section::Achievements => "achievements",
        }
    }
}

pub type SectionPresenceMap = IndexMap<Section, bool>;

const ESSENTIAL_WEIGHT: f64 = 60.0;
const ADDITIONAL_WEIGHT: f64 = 40.0;

static SECTION_PATTERNS: LazyLock<Vec<(Section, Regex)>> = LazyLock::new(|| {
    Section::ALL
        .iter()
        .map(|&section| {
            let pattern = format!(r"(?i)\b{}\b", section.as_str());
            (section, Regex::new(&pattern).expect("valid section regex"))
        })
        .collect()
});

pub fn check_resume_structure(resume_text: &str) -> SectionPresenceMap {
    SECTION_PATTERNS
        .iter()
        .map(|(section, re)| (*section, re.is_match(resume_text)))
        .collect()
}

/// 60 × (essential found / 3) + 40 × (total found / 8). Range 0 – 100.
pub fn calculate_structure_score(sections_found: &SectionPresenceMap) -> f64 {
    let is_found = |section: &Section| sections_found.get(section).copied().unwrap_or(false);

    let essential_found = Section::ESSENTIAL.iter().filter(|s| is_found(s)).count();
    let total_found = Section::ALL.iter().filter(|s| is_found(s)).count();

    let essential_score =
        essential_found as f64 / Section::ESSENTIAL.len() as f64 * ESSENTIAL_WEIGHT;
    let additional_score = total_found as f64 / Section::ALL.len() as f64 * ADDITIONAL_WEIGHT;

    essential_score + additional_score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_sections_present_scores_100() {
        let text = "Summary\nObjective\nExperience\nEducation\nSkills\nCertifications\nProjects\nAchievements";
        let found = check_resume_structure(text);
        assert!(found.values().all(|&present| present));
        assert!((calculate_structure_score(&found) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_sections_scores_zero() {
        let found = check_resume_structure("Jane Doe\njane@example.com\nBuilt things.");
        assert!(found.values().all(|&present| !present));
        assert_eq!(calculate_structure_score(&found), 0.0);
    }

    #[test]
    fn test_essentials_only_scores_75() {
        let found = check_resume_structure("EXPERIENCE\nEducation\nskills");
        assert!(found[&Section::Experience]);
        assert!(found[&Section::Education]);
        assert!(found[&Section::Skills]);
        assert!(!found[&Section::Summary]);
        // 60 × 3/3 + 40 × 3/8
        assert!((calculate_structure_score(&found) - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_essential_block_contributes_60() {
        let mut found: SectionPresenceMap = Section::ALL.iter().map(|&s| (s, false)).collect();
        for section in Section::ESSENTIAL {
            found.insert(section, true);
        }
        let essential_part = calculate_structure_score(&found) - 40.0 * 3.0 / 8.0;
        assert!((essential_part - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_requires_whole_word() {
        // "experienced" and "skillset" do not count
        let found = check_resume_structure("Experienced engineer with a broad skillset");
        assert!(!found[&Section::Experience]);
        assert!(!found[&Section::Skills]);
    }

    #[test]
    fn test_word_in_body_text_counts() {
        let found = check_resume_structure("I completed my education in Berlin.");
        assert!(found[&Section::Education]);
    }

    #[test]
    fn test_map_keeps_canonical_order() {
        let found = check_resume_structure("");
        let keys: Vec<Section> = found.keys().copied().collect();
        assert_eq!(keys, Section::ALL.to_vec());
    }

    #[test]
    fn test_serializes_as_snake_case_object() {
        let found = check_resume_structure("Skills");
        let json = serde_json::to_value(&found).unwrap();
        assert_eq!(json["skills"], true);
        assert_eq!(json["experience"], false);
        assert_eq!(json.as_object().unwrap().len(), 8);
    }
}
