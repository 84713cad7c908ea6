//! Heuristic resume scorer.
//!
//! Rules run in a fixed order; the order determines suggestion order. Points are
//! additive except for the skills step, which caps the running total at 35, and
//! the final cap at 95. There is no lower bound: the grammar penalty can push
//! the score below zero.

use crate::analysis::grammar::analyze_grammar;

pub const MAX_SCORE: i32 = 95;

const SKILL_KEYWORDS: &[&str] = &[
    "java",
    "python",
    "c++",
    "c",
    "full stack",
    "react",
    "angular",
    "mern",
];
const POINTS_PER_SKILL: i32 = 5;
/// Applied to the running total, not only to the skills contribution.
const SKILL_SCORE_CAP: i32 = 35;

const MIN_LENGTH_CHARS: usize = 500;
const MAX_LENGTH_CHARS: usize = 5000;
const MAX_GRAMMAR_PENALTY: usize = 5;

pub const TOO_SHORT: &str = "The resume is too short. Add more content.";
pub const TOO_LONG: &str = "The resume is too long. Keep it concise.";

/// 1 is the most important.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 1,
            Priority::Medium => 2,
            Priority::Low => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub text: String,
    pub priority: Priority,
}

impl Suggestion {
    fn new(text: &str, priority: Priority) -> Self {
        Self {
            text: text.to_string(),
            priority,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreReport {
    pub score: i32,
    /// In rule order, never re-sorted by priority.
    pub suggestions: Vec<Suggestion>,
}

impl ScoreReport {
    pub fn suggestion_texts(&self) -> Vec<String> {
        self.suggestions.iter().map(|s| s.text.clone()).collect()
    }
}

/// A section is present if any keyword occurs as a substring of the lowercased text.
struct SectionRule {
    keywords: &'static [&'static str],
    points: i32,
    suggestion: &'static str,
    priority: Priority,
}

impl SectionRule {
    fn matches(&self, text_lower: &str) -> bool {
        self.keywords.iter().any(|kw| text_lower.contains(kw))
    }
}

/// Scored before skills.
const CORE_SECTIONS: &[SectionRule] = &[
    SectionRule {
        keywords: &["education", "qualification"],
        points: 20,
        suggestion: "Add an Education or Qualification section",
        priority: Priority::High,
    },
    SectionRule {
        keywords: &["experience", "internship", "internships", "work experience"],
        points: 25,
        suggestion: "Add a Work Experience or Internships",
        priority: Priority::High,
    },
];

/// Scored after skills.
const SUPPORTING_SECTIONS: &[SectionRule] = &[
    SectionRule {
        keywords: &["projects"],
        points: 12,
        suggestion: "Mention relevant projects",
        priority: Priority::Medium,
    },
    SectionRule {
        keywords: &["certification", "certificates", "courses completed"],
        points: 8,
        suggestion: "Add certifications or completed courses relevant to the field",
        priority: Priority::Low,
    },
    SectionRule {
        keywords: &["awards", "achievements", "volunteering"],
        points: 6,
        suggestion: "Include any awards, achievements, or volunteering experience",
        priority: Priority::Low,
    },
    SectionRule {
        keywords: &["languages", "languages known"],
        points: 6,
        suggestion: "Mention languages you are proficient in",
        priority: Priority::Low,
    },
    SectionRule {
        keywords: &["contact", "contact me", "phone", "email"],
        points: 7,
        suggestion: "Provide contact information",
        priority: Priority::High,
    },
];

/// Scores resume text and collects improvement suggestions. Pure and deterministic.
pub fn analyze_resume(text: &str) -> ScoreReport {
    let text_lower = text.to_lowercase();
    let mut score: i32 = 0;
    let mut suggestions = Vec::new();

    apply_sections(CORE_SECTIONS, &text_lower, &mut score, &mut suggestions);

    let skills_found = count_skills(&text_lower);
    if skills_found > 0 {
        score = (score + skills_found as i32 * POINTS_PER_SKILL).min(SKILL_SCORE_CAP);
    }

    apply_sections(SUPPORTING_SECTIONS, &text_lower, &mut score, &mut suggestions);

    let length = text.chars().count();
    if length < MIN_LENGTH_CHARS {
        suggestions.push(Suggestion::new(TOO_SHORT, Priority::Low));
    } else if length > MAX_LENGTH_CHARS {
        suggestions.push(Suggestion::new(TOO_LONG, Priority::Medium));
    }

    let grammar = analyze_grammar(text);
    score -= grammar.error_count.min(MAX_GRAMMAR_PENALTY) as i32;
    if let Some(message) = grammar.message {
        suggestions.push(Suggestion::new(message, Priority::High));
    }

    ScoreReport {
        score: score.min(MAX_SCORE),
        suggestions,
    }
}

fn apply_sections(
    rules: &[SectionRule],
    text_lower: &str,
    score: &mut i32,
    suggestions: &mut Vec<Suggestion>,
) {
    for rule in rules {
        if rule.matches(text_lower) {
            *score += rule.points;
        } else {
            suggestions.push(Suggestion::new(rule.suggestion, rule.priority));
        }
    }
}

fn count_skills(text_lower: &str) -> usize {
    SKILL_KEYWORDS
        .iter()
        .filter(|skill| text_lower.contains(*skill))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::grammar::GRAMMAR_WARNING;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    fn texts(report: &ScoreReport) -> Vec<&str> {
        report.suggestions.iter().map(|s| s.text.as_str()).collect()
    }

    const MISSING_ALL_SECTIONS: [&str; 7] = [
        "Add an Education or Qualification section",
        "Add a Work Experience or Internships",
        "Mention relevant projects",
        "Add certifications or completed courses relevant to the field",
        "Include any awards, achievements, or volunteering experience",
        "Mention languages you are proficient in",
        "Provide contact information",
    ];

    #[test]
    fn test_empty_text_gets_every_suggestion_in_rule_order() {
        let report = analyze_resume("");
        assert_eq!(report.score, 0);

        let mut expected = MISSING_ALL_SECTIONS.to_vec();
        expected.push(TOO_SHORT);
        assert_eq!(texts(&report), expected);

        let ranks: Vec<u8> = report.suggestions.iter().map(|s| s.priority.rank()).collect();
        assert_eq!(ranks, vec![1, 1, 2, 3, 3, 3, 1, 3]);
    }

    #[test]
    fn test_education_awarded_once() {
        // "education" also contains the "c" skill: min(20 + 5, 35)
        assert_eq!(analyze_resume("Education").score, 25);
        assert_eq!(
            analyze_resume("education EDUCATION Education").score,
            analyze_resume("Education").score
        );
    }

    #[test]
    fn test_two_skills_add_ten() {
        let report = analyze_resume("java python");
        assert_eq!(report.score, 10);
        assert_eq!(report.suggestions.len(), 8);
    }

    #[test]
    fn test_all_skills_clamped_to_35() {
        let report = analyze_resume("java python c++ c full stack react angular mern");
        assert_eq!(report.score, 35);
    }

    #[test]
    fn test_skill_cap_applies_to_running_total() {
        // 20 + 25 = 45 before skills, then min(45 + 10, 35)
        let report = analyze_resume("education experience java");
        assert_eq!(report.score, 35);
    }

    #[test]
    fn test_no_skills_leaves_score_untouched() {
        // both education keywords contain "c", so only experience can score without a skill hit
        let report = analyze_resume("internship");
        assert_eq!(report.score, 25);
    }

    #[test]
    fn test_complete_resume_has_no_suggestions() {
        let base = "Summary. Education: BSc. Experience: backend engineer. \
                    Skills: Rust. Projects: search engine. Certifications: AWS. \
                    Awards: hackathon winner. Languages: English. Contact: email me.";
        let text = format!("{base} {}", "x".repeat(600));
        let report = analyze_resume(&text);

        assert!(report.suggestions.is_empty(), "{:?}", report.suggestions);
        assert_eq!(report.score, 35 + 12 + 8 + 6 + 6 + 7);
    }

    #[test]
    fn test_too_long_text() {
        let report = analyze_resume(&"x".repeat(5001));
        assert_eq!(report.suggestions.len(), 8);
        let last = report.suggestions.last().unwrap();
        assert_eq!(last.text, TOO_LONG);
        assert_eq!(last.priority, Priority::Medium);
    }

    #[test]
    fn test_length_boundaries_emit_nothing() {
        assert_eq!(analyze_resume(&"x".repeat(500)).suggestions.len(), 7);
        assert_eq!(analyze_resume(&"x".repeat(5000)).suggestions.len(), 7);
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        // 300 two-byte chars: 600 bytes but still too short
        let report = analyze_resume(&"é".repeat(300));
        assert_eq!(report.suggestions.last().unwrap().text, TOO_SHORT);
    }

    #[test]
    fn test_350_words_penalized_without_message() {
        let report = analyze_resume(&words(350));
        assert_eq!(report.score, -3);
        assert_eq!(texts(&report), MISSING_ALL_SECTIONS.to_vec());
    }

    #[test]
    fn test_450_words_penalized_with_message() {
        let report = analyze_resume(&words(450));
        assert_eq!(report.score, -4);
        let last = report.suggestions.last().unwrap();
        assert_eq!(last.text, GRAMMAR_WARNING);
        assert_eq!(last.priority, Priority::High);
    }

    #[test]
    fn test_grammar_penalty_capped_at_five() {
        let report = analyze_resume(&words(800));
        assert_eq!(report.score, -5);
    }

    #[test]
    fn test_score_never_exceeds_cap() {
        let loaded = "education qualification experience internship java python c++ \
                      react angular mern full stack projects certification awards \
                      languages contact phone email "
            .repeat(3);
        for text in [loaded.as_str(), "", "java", "education experience"] {
            assert!(analyze_resume(text).score <= MAX_SCORE);
        }
    }

    #[test]
    fn test_repeat_analysis_is_identical() {
        let text = "Experience at Acme. Skills: python, react. Contact: 555-0100";
        assert_eq!(analyze_resume(text), analyze_resume(text));
    }
}
