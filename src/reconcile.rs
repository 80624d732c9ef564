//! Houses the `reconcile` function
//!
use crate::vocabulary::{ClassId, SynonymSet, Vocabulary};

/// The outcome of reconciling vocabulary A against vocabulary B. Both
/// sequences are in A's iteration order, and every id of A is in exactly one
/// of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchResult {
    /// `(id_a, id_b)` for each id of A whose synonyms overlap those of some id of B
    pub common: Vec<(ClassId, ClassId)>,
    /// The ids of A that overlap nothing in B
    pub only: Vec<ClassId>,
}

impl MatchResult {
    /// The ids of A that found a partner in B
    pub fn common_ids(&self) -> impl Iterator<Item = ClassId> + '_ {
        self.common.iter().map(|(id_a, _)| *id_a)
    }

    /// Number of ids of A that were classified, matched or not
    #[must_use]
    pub fn len(&self) -> usize {
        self.common.len() + self.only.len()
    }

    /// True if A was empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Pairs each id of `vocab_a` with the *first* id of `vocab_b` (in `vocab_b`'s
/// iteration order) whose synonym set shares at least one name with it. Ids
/// of `vocab_a` with no such partner go in the `only` list.
///
/// Ids of `vocab_b` that nothing in `vocab_a` matched are not reported.
#[must_use]
pub fn reconcile(vocab_a: &Vocabulary, vocab_b: &Vocabulary) -> MatchResult {
    let mut result = MatchResult::default();
    for (id_a, names_a) in vocab_a.iter() {
        let partner = vocab_b.iter().find(|(_, names_b)| overlaps(names_a, names_b));
        match partner {
            Some((id_b, _)) => result.common.push((id_a, id_b)),
            None => result.only.push(id_a),
        }
    }
    tracing::debug!(common = result.common.len(), only = result.only.len(), "reconciled");
    result
}

/// Do `a` and `b` share a name? We probe the larger set with the members of the
/// smaller, so the cost is proportional to the smaller set.
fn overlaps(a: &SynonymSet, b: &SynonymSet) -> bool {
    let (smaller, larger) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    smaller.iter().any(|name| larger.contains(name))
}

#[allow(clippy::pedantic)]
#[cfg(test)]
mod test {
    use super::*;
    use crate::vocabulary::parse_vocabulary;

    fn vocab(entries: &[(ClassId, &[&str])]) -> Vocabulary {
        entries
            .iter()
            .map(|(id, names)| (*id, names.iter().map(|n| n.to_string()).collect::<SynonymSet>()))
            .collect()
    }

    #[test]
    fn first_match_in_b_order_wins() {
        let a = vocab(&[(1, &["cat"])]);
        let b = vocab(&[(1, &["cat", "dog"]), (2, &["cat"])]);
        assert_eq!(reconcile(&a, &b), MatchResult { common: vec![(1, 1)], only: vec![] });
    }

    #[test]
    fn first_match_follows_b_order_not_id_order() {
        let a = vocab(&[(1, &["cat"])]);
        let b = vocab(&[(9, &["cat"]), (2, &["cat"])]);
        assert_eq!(reconcile(&a, &b).common, [(1, 9)]);
    }

    #[test]
    fn no_match_lands_in_only() {
        let a = vocab(&[(5, &["unicorn"])]);
        let b = vocab(&[(1, &["cat"])]);
        assert_eq!(reconcile(&a, &b), MatchResult { common: vec![], only: vec![5] });
    }

    #[test]
    fn normalized_names_match() {
        let a = parse_vocabulary(b"3: Cat , DOG\n", "a").unwrap();
        let b = parse_vocabulary(b"7:cat\n", "b").unwrap();
        assert_eq!(reconcile(&a, &b).common, [(3, 7)]);
    }

    #[test]
    fn empty_synonym_set_never_matches() {
        let a = parse_vocabulary(b"4:\n", "a").unwrap();
        let b = parse_vocabulary(b"1:\n2: ,\n", "b").unwrap();
        assert_eq!(reconcile(&a, &b), MatchResult { common: vec![], only: vec![4] });
    }

    #[test]
    fn every_id_of_a_is_classified_exactly_once_in_a_order() {
        let a = vocab(&[
            (0, &["wall"]),
            (1, &["building", "edifice"]),
            (2, &["sky"]),
            (3, &["floor", "flooring"]),
            (4, &["tree"]),
        ]);
        let b = vocab(&[(10, &["tree"]), (11, &["wall-brick", "wall"]), (12, &["flooring"])]);
        let result = reconcile(&a, &b);
        assert_eq!(result.common, [(0, 11), (3, 12), (4, 10)]);
        assert_eq!(result.only, [1, 2]);
        assert_eq!(result.common_ids().collect::<Vec<_>>(), [0, 3, 4]);
        assert_eq!(result.len(), a.len());

        let mut classified: Vec<ClassId> =
            result.common_ids().chain(result.only.iter().copied()).collect();
        classified.sort_unstable();
        assert_eq!(classified, a.ids().collect::<Vec<_>>());
    }

    #[test]
    fn reconcile_is_deterministic() {
        let a = vocab(&[(1, &["cat", "kitty"]), (2, &["dog"]), (3, &["cow"])]);
        let b = vocab(&[(7, &["kitty"]), (8, &["cat"]), (9, &["hound", "dog"])]);
        let first = reconcile(&a, &b);
        for _ in 0..10 {
            assert_eq!(reconcile(&a, &b), first);
        }
    }

    #[test]
    fn empty_vocabularies() {
        let empty = Vocabulary::default();
        let a = vocab(&[(1, &["cat"])]);
        assert!(reconcile(&empty, &a).is_empty());
        assert_eq!(reconcile(&a, &empty).only, [1]);
    }
}
