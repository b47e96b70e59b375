//! Partitioning candidates by what a guess reveals

use crate::core::Dictionary;
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;

/// Group words by their shape restricted to `letters`
///
/// Groups appear in order of their first member and keep the order of `subset`
/// inside each group. Words in one group are indistinguishable after guessing `letters`.
#[must_use]
pub fn group_words(dictionary: &Dictionary, subset: &[usize], letters: &[usize]) -> Vec<Vec<usize>> {
    let mut slots: FxHashMap<Vec<&[usize]>, usize> = FxHashMap::default();
    let mut groups: Vec<Vec<usize>> = Vec::new();

    for &id in subset {
        let shape = dictionary.shape(id);
        let key: Vec<&[usize]> = letters.iter().map(|&letter| shape.positions(letter)).collect();

        match slots.entry(key) {
            Entry::Occupied(slot) => groups[*slot.get()].push(id),
            Entry::Vacant(slot) => {
                slot.insert(groups.len());
                groups.push(vec![id]);
            }
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Alphabet;

    fn dictionary() -> Dictionary {
        Dictionary::new(&["aba", "Aaa", "ACa"], Alphabet::new("abcd").unwrap()).unwrap()
    }

    #[test]
    fn group_by_several_letters() {
        assert_eq!(
            group_words(&dictionary(), &[0, 1, 2], &[0, 1]),
            vec![vec![0], vec![1], vec![2]]
        );
    }

    #[test]
    fn group_by_one_letter() {
        assert_eq!(
            group_words(&dictionary(), &[0, 1, 2], &[0]),
            vec![vec![0, 2], vec![1]]
        );
        assert_eq!(
            group_words(&dictionary(), &[0, 1, 2], &[0, 3]),
            vec![vec![0, 2], vec![1]]
        );
    }

    #[test]
    fn absent_letter_keeps_everything_together() {
        assert_eq!(
            group_words(&dictionary(), &[0, 1, 2], &[3]),
            vec![vec![0, 1, 2]]
        );
        assert_eq!(group_words(&dictionary(), &[0], &[3]), vec![vec![0]]);
    }

    #[test]
    fn no_letters_is_one_group() {
        assert_eq!(
            group_words(&dictionary(), &[2, 0], &[]),
            vec![vec![2, 0]]
        );
        assert!(group_words(&dictionary(), &[], &[0]).is_empty());
    }
}
