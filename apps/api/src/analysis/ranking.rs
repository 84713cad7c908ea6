use serde::Serialize;

/// Number of resumes returned by the batch endpoint.
pub const BEST_RESUME_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredResume {
    pub filename: String,
    pub score: i32,
    pub suggestions: Vec<String>,
}

/// Sorts by score descending and keeps the first `limit`.
/// The sort is stable, so equal scores keep their submission order.
pub fn rank_resumes(mut resumes: Vec<ScoredResume>, limit: usize) -> Vec<ScoredResume> {
    resumes.sort_by(|a, b| b.score.cmp(&a.score));
    resumes.truncate(limit);
    resumes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(filename: &str, score: i32) -> ScoredResume {
        ScoredResume {
            filename: filename.to_string(),
            score,
            suggestions: vec![],
        }
    }

    fn names(resumes: &[ScoredResume]) -> Vec<&str> {
        resumes.iter().map(|r| r.filename.as_str()).collect()
    }

    #[test]
    fn test_keeps_top_five_descending() {
        let input = vec![
            scored("a", 10),
            scored("b", 60),
            scored("c", 30),
            scored("d", 74),
            scored("e", -3),
            scored("f", 45),
        ];
        let ranked = rank_resumes(input, BEST_RESUME_LIMIT);
        assert_eq!(names(&ranked), vec!["d", "b", "f", "c", "a"]);
    }

    #[test]
    fn test_ties_keep_submission_order() {
        let input = vec![
            scored("first", 35),
            scored("top", 50),
            scored("second", 35),
            scored("third", 35),
        ];
        let ranked = rank_resumes(input, BEST_RESUME_LIMIT);
        assert_eq!(names(&ranked), vec!["top", "first", "second", "third"]);
    }

    #[test]
    fn test_short_input_returned_whole() {
        let ranked = rank_resumes(vec![scored("only", 12)], BEST_RESUME_LIMIT);
        assert_eq!(ranked.len(), 1);
        assert!(rank_resumes(vec![], BEST_RESUME_LIMIT).is_empty());
    }
}
