use std::collections::{HashMap, HashSet};

/// Cutoff used when the local dataset retries a failed exact lookup.
pub const DATASET_FALLBACK_CUTOFF: f64 = 0.6;
/// Cutoff used when no classifier candidate was recognised by any source.
pub const CLASSIFIER_FALLBACK_CUTOFF: f64 = 0.5;

/// Sequences at least this long drop their "popular" elements from the
/// match index.
const POPULAR_MIN_LEN: usize = 200;

/// Ratcliff/Obershelp similarity of two strings in `[0, 1]`:
/// twice the number of matched characters over the total length.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * SequenceMatch::new(&a, &b).matched_len() as f64 / total as f64
}

/// Returns the lower-cased corpus entry most similar to `query`, as long as
/// its similarity reaches `cutoff`. Ties go to the greatest entry.
pub fn best_match<S: AsRef<str>>(query: &str, corpus: &[S], cutoff: f64) -> Option<String> {
    let cutoff = cutoff.clamp(0.0, 1.0);
    let query = query.to_lowercase();

    let mut best: Option<(f64, String)> = None;
    for entry in corpus {
        let candidate = entry.as_ref().to_lowercase();
        let score = similarity(&candidate, &query);
        if score < cutoff {
            continue;
        }
        let better = match &best {
            None => true,
            Some((best_score, best_name)) => {
                score > *best_score || (score == *best_score && candidate > *best_name)
            }
        };
        if better {
            best = Some((score, candidate));
        }
    }

    best.map(|(_, name)| name)
}

struct SequenceMatch<'a> {
    a: &'a [char],
    b: &'a [char],
    b2j: HashMap<char, Vec<usize>>,
}

impl<'a> SequenceMatch<'a> {
    fn new(a: &'a [char], b: &'a [char]) -> Self {
        let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, c) in b.iter().enumerate() {
            b2j.entry(*c).or_default().push(j);
        }

        if b.len() >= POPULAR_MIN_LEN {
            let limit = b.len() / 100 + 1;
            let popular: HashSet<char> = b2j
                .iter()
                .filter(|(_, idxs)| idxs.len() > limit)
                .map(|(c, _)| *c)
                .collect();
            for c in popular {
                b2j.remove(&c);
            }
        }

        Self { a, b, b2j }
    }

    /// Longest common block inside `a[alo..ahi]` and `b[blo..bhi]`, earliest
    /// in `a` first, then earliest in `b`.
    fn longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> (usize, usize, usize) {
        let (mut besti, mut bestj, mut bestsize) = (alo, blo, 0);
        let mut j2len: HashMap<usize, usize> = HashMap::new();

        for i in alo..ahi {
            let mut next: HashMap<usize, usize> = HashMap::new();
            if let Some(positions) = self.b2j.get(&self.a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = j.checked_sub(1).and_then(|p| j2len.get(&p)).copied().unwrap_or(0) + 1;
                    next.insert(j, k);
                    if k > bestsize {
                        besti = i + 1 - k;
                        bestj = j + 1 - k;
                        bestsize = k;
                    }
                }
            }
            j2len = next;
        }

        // Popular elements are absent from the index but may still extend a block.
        while besti > alo && bestj > blo && self.a[besti - 1] == self.b[bestj - 1] {
            besti -= 1;
            bestj -= 1;
            bestsize += 1;
        }
        while besti + bestsize < ahi
            && bestj + bestsize < bhi
            && self.a[besti + bestsize] == self.b[bestj + bestsize]
        {
            bestsize += 1;
        }

        (besti, bestj, bestsize)
    }

    fn matched_len(&self) -> usize {
        let mut total = 0;
        let mut queue = vec![(0, self.a.len(), 0, self.b.len())];

        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let (i, j, k) = self.longest_match(alo, ahi, blo, bhi);
            if k == 0 {
                continue;
            }
            total += k;
            if alo < i && blo < j {
                queue.push((alo, i, blo, j));
            }
            if i + k < ahi && j + k < bhi {
                queue.push((i + k, ahi, j + k, bhi));
            }
        }

        total
    }
}
