//! Skill Overlap Booster: additive reward for skills quoted literally in the job text.

use std::collections::BTreeSet;

use crate::scoring::text::fold;

pub const SKILL_BOOST_CAP: u32 = 15;

/// Distinct, trimmed, case- and accent-folded skills. Empty entries dropped.
pub fn distinct_skills(skills: &[String]) -> BTreeSet<String> {
    skills
        .iter()
        .map(|s| fold(s).trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// `truncate(matched / total * 15)` where a skill matches if it occurs as a
/// substring of the folded job text. 0 when there are no skills.
pub fn skill_boost(skills: &[String], job_text: &str) -> u32 {
    let skills = distinct_skills(skills);
    if skills.is_empty() {
        return 0;
    }

    let haystack = fold(job_text);
    let matched = skills
        .iter()
        .filter(|skill| haystack.contains(skill.as_str()))
        .count();

    (matched * SKILL_BOOST_CAP as usize / skills.len()) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_skills_no_boost() {
        assert_eq!(skill_boost(&[], "python"), 0);
        assert_eq!(skill_boost(&skills(&["", "  "]), "python"), 0);
    }

    #[test]
    fn test_all_skills_hit_cap() {
        let job = "We need Python and PostgreSQL 3+ years Python, Django, SQL";
        assert_eq!(skill_boost(&skills(&["Python", "Django", "SQL"]), job), 15);
    }

    #[test]
    fn test_partial_match_truncates() {
        // 1/3 * 15 = 5, 2/3 * 15 = 10
        let s = skills(&["rust", "go", "kafka"]);
        assert_eq!(skill_boost(&s, "rust only"), 5);
        assert_eq!(skill_boost(&s, "rust and kafka"), 10);
        // 1/4 * 15 = 3.75
        let s = skills(&["rust", "java", "scala", "haskell"]);
        assert_eq!(skill_boost(&s, "rust"), 3);
    }

    #[test]
    fn test_duplicates_count_once() {
        let s = skills(&["Rust", "rust ", "RUST", "java"]);
        assert_eq!(skill_boost(&s, "rust"), 7);
    }

    #[test]
    fn test_case_and_accent_insensitive() {
        assert_eq!(skill_boost(&skills(&["Ñode.js"]), "Experience with node.js"), 15);
        assert_eq!(skill_boost(&skills(&["node.js"]), "NÓDE.JS required"), 15);
    }

    #[test]
    fn test_boost_is_monotonic_in_matches() {
        let s = skills(&["a1", "b2", "c3", "d4", "e5"]);
        let jobs = ["", "a1", "a1 b2", "a1 b2 c3", "a1 b2 c3 d4", "a1 b2 c3 d4 e5"];
        let boosts: Vec<u32> = jobs.iter().map(|j| skill_boost(&s, j)).collect();
        assert!(boosts.windows(2).all(|w| w[0] <= w[1]), "{boosts:?}");
        assert_eq!(*boosts.last().unwrap(), SKILL_BOOST_CAP);
    }
}
