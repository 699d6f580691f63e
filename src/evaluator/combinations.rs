/// Iterator over all k-element index subsets of `0..n`, in lexicographic
/// order. Used for the 7-card → best-5 search (C(7,5) = 21) and for
/// exhaustive board completion (choose the missing cards from the available
/// pool).
#[derive(Debug)]
pub struct Combinations {
    indices: Vec<usize>,
    n: usize,
    k: usize,
    done: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            indices: (0..k).collect(),
            n,
            k,
            // k > n has zero subsets
            done: k > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.indices.clone();

        if self.k == 0 {
            self.done = true;
            return Some(result);
        }

        // Advance: find the rightmost index that can still move up, bump it,
        // and reset everything to its right.
        let mut i = self.k - 1;
        loop {
            if self.indices[i] < self.n - (self.k - i) {
                self.indices[i] += 1;
                for j in (i + 1)..self.k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                break;
            }
            if i == 0 {
                self.done = true;
                break;
            }
            i -= 1;
        }

        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn binomial_naive(n: usize, k: usize) -> usize {
        if k > n {
            return 0;
        }
        let mut r = 1usize;
        for i in 0..k {
            r = r * (n - i) / (i + 1);
        }
        r
    }

    #[test]
    fn seven_choose_five_yields_21() {
        let combos: Vec<Vec<usize>> = Combinations::new(7, 5).collect();
        assert_eq!(combos.len(), 21);
        assert_eq!(combos.first(), Some(&vec![0, 1, 2, 3, 4]));
        assert_eq!(combos.last(), Some(&vec![2, 3, 4, 5, 6]));
    }

    #[test]
    fn counts_match_binomial_for_small_n() {
        for n in 0..=8 {
            for k in 0..=n {
                let count = Combinations::new(n, k).count();
                assert_eq!(count, binomial_naive(n, k), "C({n},{k})");
            }
        }
    }

    #[test]
    fn indices_are_strictly_ascending_and_in_range() {
        for combo in Combinations::new(9, 4) {
            assert!(combo.iter().all(|&i| i < 9));
            assert!(combo.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn no_duplicates_and_lexicographic() {
        let combos: Vec<Vec<usize>> = Combinations::new(8, 3).collect();
        let mut seen = HashSet::new();
        for combo in &combos {
            assert!(seen.insert(combo.clone()), "duplicate: {combo:?}");
        }
        let mut sorted = combos.clone();
        sorted.sort();
        assert_eq!(combos, sorted);
    }

    #[test]
    fn choose_zero_yields_one_empty_subset() {
        let combos: Vec<Vec<usize>> = Combinations::new(5, 0).collect();
        assert_eq!(combos, vec![Vec::<usize>::new()]);
    }

    #[test]
    fn k_greater_than_n_yields_nothing() {
        assert_eq!(Combinations::new(3, 4).count(), 0);
    }

    #[test]
    fn exhausted_iterator_stays_exhausted() {
        let mut iter = Combinations::new(5, 5);
        assert!(iter.next().is_some());
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }
}
