/// Labels too vague to look up.
pub const GENERIC_TERMS: [&str; 5] = ["plate", "dish", "food", "meal", "cuisine"];

pub fn is_generic(term: &str) -> bool {
    GENERIC_TERMS.contains(&term)
}

/// A dish name suggested by the classifiers and how often it was suggested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateDish {
    pub name: String,
    pub count: usize,
}

/// Drops generic terms and ranks the rest by frequency. Equal counts keep
/// the order in which the terms were first seen.
pub fn rank_candidates<I, S>(labels: I) -> Vec<CandidateDish>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut candidates: Vec<CandidateDish> = Vec::new();
    for label in labels {
        let name = label.as_ref().trim().to_lowercase();
        if name.is_empty() || is_generic(&name) {
            continue;
        }
        match candidates.iter_mut().find(|c| c.name == name) {
            Some(existing) => existing.count += 1,
            None => candidates.push(CandidateDish { name, count: 1 }),
        }
    }

    // sort_by is stable, so first-seen order survives among equal counts
    candidates.sort_by(|a, b| b.count.cmp(&a.count));
    candidates
}
