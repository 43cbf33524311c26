//! Skill-Gap Analyzer: per-category taxonomy matching and learning recommendations.
//!
//! Algorithm:
//! 1. For every category (technical first, then soft), find the category's skills in
//!    the job description and in the resume.
//! 2. Categories the job never mentions are skipped entirely.
//! 3. matched = job ∩ resume, missing = job − resume, both in taxonomy order.
//! 4. Up to 3 missing skills per category become learning recommendations, stably
//!    sorted High, then Medium, then Low, and capped at 10.

use indexmap::IndexMap;
use serde::Serialize;

use crate::scoring::report::round_one_decimal;
use crate::scoring::taxonomy::{SkillTaxonomies, SkillType};

const MISSING_SKILLS_PER_CATEGORY: usize = 3;
const MAX_LEARNING_RECOMMENDATIONS: usize = 10;
const DEFAULT_RESOURCES: &[&str] = &["Online Courses", "Documentation"];

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySkillResult {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    #[serde(rename = "type")]
    pub skill_type: SkillType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LearningRecommendation {
    pub skill: String,
    pub category: String,
    #[serde(rename = "type")]
    pub skill_type: SkillType,
    pub priority: Priority,
    pub resources: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillGapAnalysis {
    pub total_skills_required: usize,
    pub skills_matched: usize,
    pub skills_missing: usize,
    /// 0 – 100, one decimal place
    pub skill_match_percentage: f64,
    /// Only categories the job description mentions, in taxonomy order.
    pub skills_by_category: IndexMap<String, CategorySkillResult>,
    pub learning_recommendations: Vec<LearningRecommendation>,
}

// ────────────────────────────────────────────────────────────────────────────
// Analysis
// ────────────────────────────────────────────────────────────────────────────

pub fn analyze_skill_gaps(
    resume_text: &str,
    job_description: &str,
    taxonomies: &SkillTaxonomies,
) -> SkillGapAnalysis {
    let resume_lower = resume_text.to_lowercase();
    let job_lower = job_description.to_lowercase();

    let mut skills_by_category = IndexMap::new();
    let mut total_required = 0;
    let mut total_matched = 0;

    for taxonomy in taxonomies.iter() {
        for category in &taxonomy.categories {
            let job_skills = category.skills_in(&job_lower);
            if job_skills.is_empty() {
                continue;
            }
            let resume_skills = category.skills_in(&resume_lower);

            let (matched, missing): (Vec<String>, Vec<String>) = job_skills
                .iter()
                .map(|skill| skill.to_string())
                .partition(|skill| resume_skills.contains(&skill.as_str()));

            total_required += job_skills.len();
            total_matched += matched.len();

            skills_by_category.insert(
                category.name.clone(),
                CategorySkillResult {
                    matched,
                    missing,
                    skill_type: taxonomy.skill_type,
                },
            );
        }
    }

    let skill_match_percentage = if total_required > 0 {
        total_matched as f64 / total_required as f64 * 100.0
    } else {
        0.0
    };

    let learning_recommendations = generate_learning_recommendations(&skills_by_category);

    SkillGapAnalysis {
        total_skills_required: total_required,
        skills_matched: total_matched,
        skills_missing: total_required - total_matched,
        skill_match_percentage: round_one_decimal(skill_match_percentage),
        skills_by_category,
        learning_recommendations,
    }
}

pub fn generate_learning_recommendations(
    skills_by_category: &IndexMap<String, CategorySkillResult>,
) -> Vec<LearningRecommendation> {
    let mut recommendations: Vec<LearningRecommendation> = skills_by_category
        .iter()
        .flat_map(|(category, result)| {
            result
                .missing
                .iter()
                .take(MISSING_SKILLS_PER_CATEGORY)
                .map(move |skill| LearningRecommendation {
                    skill: title_case(skill),
                    category: title_case(&category.replace('_', " ")),
                    skill_type: result.skill_type,
                    priority: priority_for(category),
                    resources: resources_for(category)
                        .iter()
                        .map(|r| r.to_string())
                        .collect(),
                })
        })
        .collect();

    // Vec::sort_by_key is stable: equal priorities keep category order
    recommendations.sort_by_key(|r| r.priority);
    recommendations.truncate(MAX_LEARNING_RECOMMENDATIONS);
    recommendations
}

fn priority_for(category: &str) -> Priority {
    match category {
        "programming_languages" | "frameworks" | "cloud_devops" | "leadership"
        | "problem_solving" => Priority::High,
        "databases" | "testing" | "communication" | "teamwork" => Priority::Medium,
        "tools" | "adaptability" => Priority::Low,
        _ => Priority::Medium,
    }
}

fn resources_for(category: &str) -> &'static [&'static str] {
    match category {
        "programming_languages" => &[
            "Official Documentation",
            "Codecademy",
            "freeCodeCamp",
            "LeetCode",
        ],
        "frameworks" => &[
            "Official Docs",
            "YouTube Tutorials",
            "Udemy Courses",
            "Framework-specific Bootcamps",
        ],
        "cloud_devops" => &[
            "AWS/Azure/GCP Certifications",
            "Docker Documentation",
            "Kubernetes Tutorials",
        ],
        "databases" => &[
            "Database Documentation",
            "SQL Practice Sites",
            "Database Design Courses",
        ],
        "testing" => &[
            "Testing Framework Docs",
            "Test Automation Courses",
            "TDD/BDD Tutorials",
        ],
        "tools" => &["Tool Documentation", "YouTube Tutorials", "Quick Start Guides"],
        "leadership" => &[
            "Leadership Books",
            "Management Courses",
            "Mentorship Programs",
        ],
        "communication" => &[
            "Public Speaking Courses",
            "Writing Workshops",
            "Toastmasters",
        ],
        "problem_solving" => &[
            "Algorithm Practice",
            "Case Study Analysis",
            "Critical Thinking Courses",
        ],
        "teamwork" => &["Agile/Scrum Certifications", "Team Collaboration Workshops"],
        "adaptability" => &[
            "Online Courses",
            "Self-Learning Resources",
            "Professional Development",
        ],
        _ => DEFAULT_RESOURCES,
    }
}

/// Uppercases the first cased character of every word and lowercases the rest.
/// Any non-letter starts a new word, so "node.js" becomes "Node.Js".
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_cased = false;

    for c in text.chars() {
        let cased = c.is_lowercase() || c.is_uppercase();
        if cased && !previous_cased {
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
        previous_cased = cased;
    }

    out
}
