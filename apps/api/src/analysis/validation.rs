/// Section headings and phrases that mark a document as a resume.
const RESUME_KEYWORDS: &[&str] = &[
    "education",
    "experience",
    "skills",
    "summary",
    "projects",
    "certifications",
    "awards",
    "languages",
    "contact",
    "qualification",
    "internships",
    "work experience",
    "certificates",
    "courses completed",
    "achievements",
    "volunteering",
    "languages known",
    "contact me",
];

/// Returns true if the text contains at least one resume keyword (case-insensitive).
pub fn is_resume(text: &str) -> bool {
    let text_lower = text.to_lowercase();
    RESUME_KEYWORDS.iter().any(|kw| text_lower.contains(kw))
}
