//! Solution grading and score calculation.

use crate::models::{Challenge, Difficulty};

/// Points credited to a user alongside a badge award.
pub const BADGE_AWARD_POINTS: i32 = 50;

/// Substring grader: a submission passes when the challenge's stored
/// solution signature appears verbatim anywhere in the text. This admits
/// trivial echoes of the signature and is not a security boundary; a real
/// execution engine would replace it.
pub fn evaluate_solution(challenge: &Challenge, solution: &str) -> bool {
    if solution.trim().is_empty() {
        return false;
    }

    challenge
        .solution_logic
        .as_deref()
        .is_some_and(|expected| solution.contains(expected))
}

/// Challenge points scaled by the difficulty tier. Unknown tiers score
/// with multiplier 1.
pub fn calculate_score(challenge: &Challenge) -> i32 {
    let base = challenge.points.unwrap_or(0);
    let multiplier = Difficulty::parse(&challenge.difficulty).map_or(1, |d| d.multiplier());
    base * multiplier
}

#[cfg(test)]
mod tests {
    use super::*;

    fn challenge(points: Option<i32>, difficulty: &str, solution_logic: Option<&str>) -> Challenge {
        Challenge {
            id: 1,
            title: "Sum two numbers".to_string(),
            description: None,
            difficulty: difficulty.to_string(),
            points,
            test_cases: vec![],
            code_blocks: None,
            solution_logic: solution_logic.map(str::to_string),
            active: true,
        }
    }

    #[test]
    fn submission_containing_signature_passes() {
        let c = challenge(Some(10), "INTERMEDIATE", Some("return a+b"));
        assert!(evaluate_solution(&c, "def f(a,b): return a+b"));
        assert_eq!(calculate_score(&c), 20);
    }

    #[test]
    fn empty_or_blank_submission_fails() {
        let c = challenge(Some(10), "INTERMEDIATE", Some("return a+b"));
        assert!(!evaluate_solution(&c, ""));
        assert!(!evaluate_solution(&c, "   \n\t"));
    }

    #[test]
    fn submission_without_signature_fails() {
        let c = challenge(Some(10), "BEGINNER", Some("return a+b"));
        assert!(!evaluate_solution(&c, "def f(a,b): return a-b"));
    }

    #[test]
    fn missing_signature_fails_everything() {
        let c = challenge(Some(10), "BEGINNER", None);
        assert!(!evaluate_solution(&c, "anything at all"));
    }

    #[test]
    fn signature_echoed_in_a_comment_still_passes() {
        // Weakness of the substring check, preserved on purpose.
        let c = challenge(Some(5), "BEGINNER", Some("return a+b"));
        assert!(evaluate_solution(&c, "# return a+b"));
    }

    #[test]
    fn score_scales_with_difficulty() {
        assert_eq!(calculate_score(&challenge(Some(10), "BEGINNER", None)), 10);
        assert_eq!(
            calculate_score(&challenge(Some(10), "INTERMEDIATE", None)),
            20
        );
        assert_eq!(calculate_score(&challenge(Some(10), "ADVANCED", None)), 30);
    }

    #[test]
    fn unknown_difficulty_and_missing_points_degrade_gracefully() {
        assert_eq!(calculate_score(&challenge(Some(10), "LEGENDARY", None)), 10);
        assert_eq!(calculate_score(&challenge(None, "ADVANCED", None)), 0);
    }
}
