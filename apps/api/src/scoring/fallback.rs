//! Fallback Matcher: keyword overlap used when no vector space can be built.

use crate::scoring::boost::distinct_skills;
use crate::scoring::text::word_set;

/// Percentage of distinct skills that appear as whole word tokens of the job text.
/// This is the entire score on the fallback path.
pub fn fallback_score(skills: &[String], job_text: &str) -> u32 {
    let skills = distinct_skills(skills);
    let words = word_set(job_text);
    if skills.is_empty() || words.is_empty() {
        return 0;
    }

    let overlap = skills.iter().filter(|s| words.contains(s.as_str())).count();
    ((overlap * 100 / skills.len()) as u32).min(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_inputs_score_zero() {
        assert_eq!(fallback_score(&[], "python"), 0);
        assert_eq!(fallback_score(&skills(&["python"]), ""), 0);
        assert_eq!(fallback_score(&skills(&["python"]), "!!! ..."), 0);
    }

    #[test]
    fn test_whole_token_match_only() {
        // "java" is a token, "script" is not (javascript is one token)
        let s = skills(&["Java", "script"]);
        assert_eq!(fallback_score(&s, "Java, JavaScript"), 50);
    }

    #[test]
    fn test_multi_word_skill_does_not_match_tokens() {
        assert_eq!(fallback_score(&skills(&["machine learning"]), "machine learning"), 0);
    }

    #[test]
    fn test_single_char_skills_match() {
        assert_eq!(fallback_score(&skills(&["C", "R", "Go"]), "c and go"), 66);
    }
}
