//! Ratcliff/Obershelp sequence similarity over Unicode scalar values
//!
//! The matcher finds the longest common contiguous block, then recurses into
//! the unmatched regions on either side. The resulting ratio is
//! `2 * matched / (len(a) + len(b))`.
//!
//! Elements of `b` that are "popular" (more than 1% of a sequence of 200 or
//! more elements) are not used to seed a match, though a match found through
//! other elements may still extend across them. This keeps scores for long
//! transcripts identical to the widely used `difflib` implementation.

use std::collections::HashMap;

/// Length from which popular elements stop seeding matches
const AUTOJUNK_MIN_LEN: usize = 200;

/// A contiguous matching block: `a[a_start..a_start + len] == b[b_start..b_start + len]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MatchingBlock {
    pub a_start: usize,
    pub b_start: usize,
    pub len: usize,
}

/// Sequence matcher for two character sequences
#[derive(Debug, Clone)]
pub struct SequenceMatcher {
    a: Vec<char>,
    b: Vec<char>,
    /// Positions of each non-popular element of `b`, ascending
    b2j: HashMap<char, Vec<usize>>,
}

impl SequenceMatcher {
    /// Build a matcher comparing `a` against `b`
    #[must_use]
    pub fn new(a: &str, b: &str) -> Self {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let b2j = index_b(&b);
        Self { a, b, b2j }
    }

    /// Longest matching block inside `a[alo..ahi]` and `b[blo..bhi]`
    ///
    /// Ties go to the block starting earliest in `a`, then earliest in `b`.
    #[must_use]
    pub fn find_longest_match(
        &self,
        alo: usize,
        ahi: usize,
        blo: usize,
        bhi: usize,
    ) -> MatchingBlock {
        let (mut best_i, mut best_j, mut best_len) = (alo, blo, 0usize);

        // j2len[j] = length of the match ending at a[i - 1] and b[j]
        let mut j2len: HashMap<usize, usize> = HashMap::new();
        for i in alo..ahi {
            let mut next_j2len = HashMap::new();
            if let Some(positions) = self.b2j.get(&self.a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| j2len.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    next_j2len.insert(j, k);
                    if k > best_len {
                        best_i = i + 1 - k;
                        best_j = j + 1 - k;
                        best_len = k;
                    }
                }
            }
            j2len = next_j2len;
        }

        // Popular elements never seed a match; let one grow across them.
        while best_i > alo && best_j > blo && self.a[best_i - 1] == self.b[best_j - 1] {
            best_i -= 1;
            best_j -= 1;
            best_len += 1;
        }
        while best_i + best_len < ahi
            && best_j + best_len < bhi
            && self.a[best_i + best_len] == self.b[best_j + best_len]
        {
            best_len += 1;
        }

        MatchingBlock {
            a_start: best_i,
            b_start: best_j,
            len: best_len,
        }
    }

    /// All matching blocks, ordered by position in `a`
    #[must_use]
    pub fn matching_blocks(&self) -> Vec<MatchingBlock> {
        let mut queue = vec![(0, self.a.len(), 0, self.b.len())];
        let mut blocks = Vec::new();

        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let block = self.find_longest_match(alo, ahi, blo, bhi);
            if block.len == 0 {
                continue;
            }
            let (i, j, k) = (block.a_start, block.b_start, block.len);
            blocks.push(block);
            if alo < i && blo < j {
                queue.push((alo, i, blo, j));
            }
            if i + k < ahi && j + k < bhi {
                queue.push((i + k, ahi, j + k, bhi));
            }
        }

        blocks.sort_unstable();
        blocks
    }

    /// Total number of matched elements
    #[must_use]
    pub fn matched_len(&self) -> usize {
        self.matching_blocks().iter().map(|block| block.len).sum()
    }

    /// Similarity in `[0.0, 1.0]`; two empty sequences are identical
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn ratio(&self) -> f64 {
        let total = self.a.len() + self.b.len();
        if total == 0 {
            return 1.0;
        }
        2.0 * self.matched_len() as f64 / total as f64
    }
}

fn index_b(b: &[char]) -> HashMap<char, Vec<usize>> {
    let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
    for (j, &c) in b.iter().enumerate() {
        b2j.entry(c).or_default().push(j);
    }

    if b.len() >= AUTOJUNK_MIN_LEN {
        let threshold = b.len() / 100 + 1;
        b2j.retain(|_, positions| positions.len() <= threshold);
    }

    b2j
}

/// Similarity ratio of two strings, compared character by character
#[must_use]
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    SequenceMatcher::new(a, b).ratio()
}
