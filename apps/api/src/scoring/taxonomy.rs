//! Skill taxonomies: categorized skill phrases matched against resume and job text.
//!
//! Two taxonomies ship built in (technical and soft). A deployment can replace both
//! with a JSON file; see [`SkillTaxonomies::from_json_file`]. Each phrase's regex is
//! compiled once when the taxonomy is built and never mutated afterwards.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaxonomyError {
    #[error("Failed to read taxonomy file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid taxonomy JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid skill pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Category '{0}' is defined more than once")]
    DuplicateCategory(String),

    #[error("Category '{0}' contains an empty skill")]
    EmptySkill(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillType {
    Technical,
    Soft,
}

/// One skill phrase and its boundary-aware matcher.
#[derive(Debug, Clone)]
pub struct SkillPhrase {
    pub phrase: String,
    matcher: Regex,
}

impl SkillPhrase {
    /// `phrase` must be non-empty after trimming; see [`SkillCategory::new`].
    pub fn new(phrase: &str) -> Result<Self, TaxonomyError> {
        let phrase = phrase.trim().to_lowercase();
        let matcher = Regex::new(&phrase_pattern(&phrase))?;
        Ok(Self { phrase, matcher })
    }

    /// `lowered_text` must already be lowercase.
    pub fn is_found_in(&self, lowered_text: &str) -> bool {
        self.matcher.is_match(lowered_text)
    }
}

/// Escapes the phrase and anchors each end on a word boundary, but only where that
/// end is a word character. `\b` next to punctuation would demand a word character
/// on the far side, so "c++" followed by a space could never match.
fn phrase_pattern(phrase: &str) -> String {
    let starts_with_word = phrase.chars().next().is_some_and(is_word_char);
    let ends_with_word = phrase.chars().last().is_some_and(is_word_char);

    format!(
        "{}{}{}",
        if starts_with_word { r"\b" } else { "" },
        regex::escape(phrase),
        if ends_with_word { r"\b" } else { "" },
    )
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[derive(Debug, Clone)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<SkillPhrase>,
}

impl SkillCategory {
    /// Rejects blank skills. A skill repeated after normalization is kept once, at
    /// its first position.
    pub fn new(name: &str, skills: &[&str]) -> Result<Self, TaxonomyError> {
        let mut phrases: Vec<SkillPhrase> = Vec::with_capacity(skills.len());
        for skill in skills {
            if skill.trim().is_empty() {
                return Err(TaxonomyError::EmptySkill(name.to_string()));
            }
            let phrase = SkillPhrase::new(skill)?;
            if !phrases.iter().any(|p| p.phrase == phrase.phrase) {
                phrases.push(phrase);
            }
        }
        Ok(Self {
            name: name.to_string(),
            skills: phrases,
        })
    }

    /// Skills of this category present in `lowered_text`, in taxonomy order.
    pub fn skills_in(&self, lowered_text: &str) -> Vec<&str> {
        self.skills
            .iter()
            .filter(|skill| skill.is_found_in(lowered_text))
            .map(|skill| skill.phrase.as_str())
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct SkillTaxonomy {
    pub skill_type: SkillType,
    pub categories: Vec<SkillCategory>,
}

impl SkillTaxonomy {
    pub fn technical() -> Result<Self, TaxonomyError> {
        Self::from_table(SkillType::Technical, TECHNICAL_SKILLS)
    }

    pub fn soft() -> Result<Self, TaxonomyError> {
        Self::from_table(SkillType::Soft, SOFT_SKILLS)
    }

    fn from_table(skill_type: SkillType, table: &[(&str, &[&str])]) -> Result<Self, TaxonomyError> {
        Ok(Self {
            skill_type,
            categories: table
                .iter()
                .map(|(name, skills)| SkillCategory::new(name, skills))
                .collect::<Result<_, _>>()?,
        })
    }

    fn from_specs(skill_type: SkillType, specs: Vec<CategorySpec>) -> Result<Self, TaxonomyError> {
        let mut categories = Vec::with_capacity(specs.len());
        for spec in specs {
            let skills: Vec<&str> = spec.skills.iter().map(String::as_str).collect();
            categories.push(SkillCategory::new(&spec.name, &skills)?);
        }
        Ok(Self {
            skill_type,
            categories,
        })
    }
}

/// The technical and soft taxonomies used by one scorer.
#[derive(Debug, Clone)]
pub struct SkillTaxonomies {
    pub technical: SkillTaxonomy,
    pub soft: SkillTaxonomy,
}

#[derive(Debug, Deserialize)]
struct TaxonomyFile {
    technical: Vec<CategorySpec>,
    soft: Vec<CategorySpec>,
}

#[derive(Debug, Deserialize)]
struct CategorySpec {
    name: String,
    skills: Vec<String>,
}

impl SkillTaxonomies {
    pub fn builtin() -> Result<Self, TaxonomyError> {
        Ok(Self {
            technical: SkillTaxonomy::technical()?,
            soft: SkillTaxonomy::soft()?,
        })
    }

    /// Parses `{"technical": [{"name", "skills"}], "soft": [...]}`. Category order is
    /// preserved; category names must be unique across both taxonomies.
    pub fn from_json(json: &str) -> Result<Self, TaxonomyError> {
        let file: TaxonomyFile = serde_json::from_str(json)?;

        let mut seen = HashSet::new();
        for spec in file.technical.iter().chain(file.soft.iter()) {
            if !seen.insert(spec.name.as_str()) {
                return Err(TaxonomyError::DuplicateCategory(spec.name.clone()));
            }
        }

        Ok(Self {
            technical: SkillTaxonomy::from_specs(SkillType::Technical, file.technical)?,
            soft: SkillTaxonomy::from_specs(SkillType::Soft, file.soft)?,
        })
    }

    pub fn from_json_file(path: &Path) -> Result<Self, TaxonomyError> {
        let json = std::fs::read_to_string(path).map_err(|source| TaxonomyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Technical taxonomy first, then soft.
    pub fn iter(&self) -> impl Iterator<Item = &SkillTaxonomy> {
        [&self.technical, &self.soft].into_iter()
    }
}

const TECHNICAL_SKILLS: &[(&str, &[&str])] = &[
    (
        "programming_languages",
        &[
            "python", "javascript", "java", "c++", "c#", "ruby", "php", "swift", "kotlin", "go",
            "rust", "typescript", "scala", "r", "matlab", "perl",
        ],
    ),
    (
        "frameworks",
        &[
            "react", "angular", "vue", "django", "flask", "fastapi", "spring", "express",
            "node.js", "nodejs", ".net", "laravel", "rails", "nextjs", "nuxt", "svelte", "ember",
            "backbone",
        ],
    ),
    (
        "databases",
        &[
            "mysql", "postgresql", "mongodb", "redis", "elasticsearch", "cassandra", "oracle",
            "sql server", "sqlite", "dynamodb", "mariadb", "couchdb",
        ],
    ),
    (
        "cloud_devops",
        &[
            "aws", "azure", "gcp", "google cloud", "docker", "kubernetes", "jenkins", "gitlab",
            "github actions", "terraform", "ansible", "ci/cd", "devops",
        ],
    ),
    (
        "tools",
        &[
            "git", "jira", "confluence", "slack", "vscode", "intellij", "eclipse", "postman",
            "swagger", "figma", "sketch", "adobe xd",
        ],
    ),
    (
        "testing",
        &[
            "jest", "pytest", "junit", "selenium", "cypress", "mocha", "chai", "testing",
            "unit testing", "integration testing", "tdd", "bdd",
        ],
    ),
];

const SOFT_SKILLS: &[(&str, &[&str])] = &[
    (
        "leadership",
        &[
            "leadership", "team lead", "mentoring", "coaching", "management",
            "project management", "people management",
        ],
    ),
    (
        "communication",
        &[
            "communication", "presentation", "public speaking", "writing", "documentation",
            "collaboration", "interpersonal",
        ],
    ),
    (
        "problem_solving",
        &[
            "problem solving", "analytical", "critical thinking", "troubleshooting", "debugging",
            "research",
        ],
    ),
    (
        "teamwork",
        &[
            "teamwork", "team player", "collaboration", "cross-functional", "agile", "scrum",
            "kanban",
        ],
    ),
    (
        "adaptability",
        &[
            "adaptability", "flexibility", "learning", "quick learner", "self-motivated",
            "proactive",
        ],
    ),
];
