//! Longest-palindromic-substring search via Manacher's algorithm.
//!
//! The finder is generic over any `Eq` alphabet. It pads the input with a
//! sentinel between every pair of adjacent symbols and at both ends, which
//! unifies odd- and even-length palindromes into a single odd-length scan.
//! The sentinel is `None` in an `Option<&T>` view of the input, so it can
//! never collide with a real symbol.

/// Half-open span of the longest palindrome within the original sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PalindromeSpan {
    /// 0-indexed start, inclusive.
    pub start: usize,
    /// 0-indexed end, exclusive.
    pub end: usize,
}

impl PalindromeSpan {
    /// Length of the palindrome in original-sequence symbols.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Find the longest contiguous palindrome in `seq`, leftmost on ties.
///
/// Runs in O(n): each padded position's palindrome radius is either copied
/// from its mirror inside the rightmost palindrome seen so far or extended
/// by fresh comparisons, and every fresh comparison advances the rightmost
/// boundary.
///
/// An empty input yields the empty span at 0. A nonempty input always
/// yields a span of length at least 1.
pub fn longest_palindrome<T: Eq>(seq: &[T]) -> PalindromeSpan {
    if seq.is_empty() {
        return PalindromeSpan { start: 0, end: 0 };
    }

    // padded[2k] is a sentinel, padded[2k + 1] is seq[k]; length 2n + 1.
    let padded: Vec<Option<&T>> = {
        let mut p = Vec::with_capacity(seq.len() * 2 + 1);
        p.push(None);
        for symbol in seq {
            p.push(Some(symbol));
            p.push(None);
        }
        p
    };

    let mut radii = vec![0usize; padded.len()];
    let mut center = 0;
    let mut radius = 0;

    while center < padded.len() {
        // Extend the palindrome at `center` as far as it goes.
        while center >= radius + 1
            && center + radius + 1 < padded.len()
            && padded[center - radius - 1] == padded[center + radius + 1]
        {
            radius += 1;
        }
        radii[center] = radius;

        let old_center = center;
        let old_radius = radius;
        center += 1;
        radius = 0;

        // Reuse mirrored radii inside the palindrome we just finished.
        while center <= old_center + old_radius {
            let mirror = 2 * old_center - center;
            let max_mirrored = old_center + old_radius - center;
            if radii[mirror] < max_mirrored {
                radii[center] = radii[mirror];
                center += 1;
            } else if radii[mirror] > max_mirrored {
                radii[center] = max_mirrored;
                center += 1;
            } else {
                radius = max_mirrored;
                break;
            }
        }
    }

    // Strictly-greater comparison keeps the leftmost center among all
    // maximal-length palindromes, which is also the leftmost start.
    let mut best_center = 0;
    let mut best_len = 0;
    for (i, &r) in radii.iter().enumerate() {
        if r > best_len {
            best_len = r;
            best_center = i;
        }
    }

    // A maximal padded palindrome is delimited by sentinels, so the padded
    // start `best_center - best_len` is even and maps exactly onto the
    // original sequence. The radius equals the original-alphabet length.
    let start = (best_center - best_len) / 2;
    PalindromeSpan {
        start,
        end: start + best_len,
    }
}
