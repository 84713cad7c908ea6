// Resume analysis: keyword validation, grammar heuristic, scoring, and batch ranking.
// Everything except `handlers` is pure and synchronous.

pub mod grammar;
pub mod handlers;
pub mod ranking;
pub mod scoring;
pub mod validation;

pub use ranking::{rank_resumes, ScoredResume, BEST_RESUME_LIMIT};
pub use scoring::{analyze_resume, ScoreReport};
pub use validation::is_resume;
