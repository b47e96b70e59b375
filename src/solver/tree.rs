//! Memoized minimax search over hangman game states
//!
//! For a set of candidate words and the letters guessed so far, the search finds the
//! guess that minimizes the number of wrong guesses in the worst case.
//!
//! # Strategy
//! - If every unused letter of every candidate is shared by all candidates, guess them
//!   all at once: the game is over without a single miss.
//! - Otherwise, if some unused letters are shared by all candidates, guess those. A
//!   letter present in every candidate can never miss, so guessing it first is never
//!   worse than guessing it later.
//! - Otherwise, try every letter that splits the candidates and keep the one whose worst
//!   group is best. A group without the letter costs one wrong guess.
//!
//! # Pruning
//! - Results are memoized by [`StateKey`]: the order of guesses does not matter, only
//!   which letters were guessed and which words remain.
//! - Once some letter achieves a worst case of `n`, any other letter is abandoned as soon
//!   as one of its groups reaches `n`. Large groups are solved first since they tend to be
//!   the worst ones, and frequent letters are tried first since they tend to split well.
//! - A search cut short only proves a lower bound. Lower bounds live in a separate table
//!   and are reused only while they still exceed the caller's threshold.

use super::grouping::group_words;
use super::state::{Outcome, StateKey, sorted_letters};
use crate::core::{Alphabet, Dictionary, LetterSet};
use crate::error::SolverError;
use rustc_hash::FxHashMap;
use std::cmp::Reverse;

/// Words of one game together with the search tables
///
/// The tables only grow while solving and are never invalidated.
#[derive(Debug, Clone)]
pub struct GameStateTree {
    dictionary: Dictionary,
    memo: FxHashMap<StateKey, Outcome>,
    killed: FxHashMap<StateKey, u32>,
    dependency: FxHashMap<StateKey, Vec<StateKey>>,
}

impl GameStateTree {
    /// Create a tree for `words` over `alphabet`
    ///
    /// # Errors
    /// Returns `SolverError` if the alphabet is invalid or a word uses a letter outside it.
    pub fn new<S: AsRef<str>>(words: &[S], alphabet: &str) -> Result<Self, SolverError> {
        let alphabet = Alphabet::new(alphabet)?;
        Ok(Self::from_dictionary(Dictionary::new(words, alphabet)?))
    }

    #[must_use]
    pub fn from_dictionary(dictionary: Dictionary) -> Self {
        Self {
            dictionary,
            memo: FxHashMap::default(),
            killed: FxHashMap::default(),
            dependency: FxHashMap::default(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Solve the game for every word with no letters guessed
    pub fn solve_all(&mut self) -> Outcome {
        let ids: Vec<usize> = self.dictionary.ids().collect();
        let outcome = self.search(&ids, LetterSet::EMPTY, None);
        log::debug!(
            "solved {} words: {} exact states, {} bounded states, {} dependencies",
            ids.len(),
            self.memo.len(),
            self.killed.len(),
            self.dependency.len()
        );
        outcome
    }

    /// Solve the game for `subset`, the words consistent with `used_letters`
    ///
    /// The subset is trusted as given; it is not filtered against the evidence.
    pub fn solve(&mut self, subset: &[usize], used_letters: &str) -> Outcome {
        let used = self.dictionary.letter_set(used_letters);
        self.search(subset, used, None)
    }

    /// Like [`solve`](Self::solve), but give up once the answer is known to reach `kill_after`
    ///
    /// A result with `errors < kill_after` is exact. Anything else is only a lower bound
    /// and carries no letters.
    pub fn solve_bounded(&mut self, subset: &[usize], used_letters: &str, kill_after: u32) -> Outcome {
        let used = self.dictionary.letter_set(used_letters);
        self.search(subset, used, Some(kill_after))
    }

    /// Collect the decisions reachable from `root` when following the solved strategy
    ///
    /// # Errors
    /// Returns `SolverError::PreconditionNotMet` if nothing has been solved yet, and
    /// `SolverError::InconsistentLookup` if `root` was never solved exactly.
    pub fn extract_strategy(&self, root: &StateKey) -> Result<FxHashMap<StateKey, String>, SolverError> {
        if self.memo.is_empty() {
            return Err(SolverError::PreconditionNotMet);
        }

        let mut strategy = FxHashMap::default();
        let mut pending = vec![root.clone()];

        while let Some(key) = pending.pop() {
            if strategy.contains_key(&key) {
                continue;
            }
            let outcome = self
                .memo
                .get(&key)
                .ok_or_else(|| SolverError::InconsistentLookup {
                    used_letters: key.used_letters().to_string(),
                    min_id: key.min_id(),
                })?;
            if let Some(children) = self.dependency.get(&key) {
                pending.extend(children.iter().rev().cloned());
            }
            strategy.insert(key, outcome.letters.clone());
        }

        Ok(strategy)
    }

    /// Exact result for a state, if it has been solved
    #[must_use]
    pub fn outcome(&self, key: &StateKey) -> Option<&Outcome> {
        self.memo.get(key)
    }

    /// Best known lower bound for a state whose search was cut short
    #[must_use]
    pub fn lower_bound(&self, key: &StateKey) -> Option<u32> {
        self.killed.get(key).copied()
    }

    /// States played after the decision at `key`
    #[must_use]
    pub fn dependencies(&self, key: &StateKey) -> Option<&[StateKey]> {
        self.dependency.get(key).map(Vec::as_slice)
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.memo.is_empty()
    }

    fn key(&self, used: LetterSet, subset: &[usize]) -> Option<StateKey> {
        StateKey::for_subset(&self.dictionary.alphabet().spell(used), subset)
    }

    fn search(&mut self, subset: &[usize], used: LetterSet, kill_after: Option<u32>) -> Outcome {
        let Some(key) = self.key(used, subset) else {
            return Outcome::default();
        };

        if let Some(outcome) = self.memo.get(&key) {
            return outcome.clone();
        }

        if let Some(bound) = kill_after {
            if bound == 0 {
                self.killed.entry(key).or_insert(0);
                return Outcome::default();
            }
            if let Some(&known) = self.killed.get(&key)
                && known >= bound
            {
                return Outcome::new(known, "");
            }
        }

        let (outcome, children) = self.evaluate(subset, used, kill_after);

        match kill_after {
            Some(bound) if outcome.errors >= bound => {
                let known = self.killed.entry(key).or_insert(0);
                *known = (*known).max(outcome.errors);
            }
            _ => {
                if let Some(children) = children {
                    self.dependency.insert(key.clone(), children);
                }
                self.memo.insert(key, outcome.clone());
            }
        }

        outcome
    }

    /// Solve one state; also returns the states the chosen guess leads to
    fn evaluate(
        &mut self,
        subset: &[usize],
        used: LetterSet,
        kill_after: Option<u32>,
    ) -> (Outcome, Option<Vec<StateKey>>) {
        let alphabet = self.dictionary.alphabet();
        let unused = alphabet.all().difference(used);
        let kill_after = kill_after.unwrap_or(unused.len() as u32 + 1);

        let shared = subset
            .iter()
            .fold(unused, |acc, &id| acc.intersection(self.dictionary.letters(id)));
        let shared_letters = sorted_letters(&alphabet.spell(shared));

        // Every missing letter is in every word: guess them all
        if subset.iter().all(|&id| {
            self.dictionary
                .letters(id)
                .intersection(unused)
                .is_subset(shared)
        }) {
            return (Outcome::new(0, shared_letters), None);
        }

        // Letters in every word cannot miss, so guess them first
        if !shared.is_empty() {
            let letters: Vec<usize> = shared.iter().collect();
            let next = used.union(shared);
            let mut worst = 0;
            let mut children = Vec::new();

            for group in group_words(&self.dictionary, subset, &letters) {
                let outcome = self.search(&group, next, Some(kill_after));
                worst = worst.max(outcome.errors);
                children.extend(self.key(next, &group));
            }

            return (Outcome::new(worst, shared_letters), Some(children));
        }

        // Letters whose positions differ between the candidates
        let first = self.dictionary.shape(subset[0]);
        let mut usable: Vec<usize> = unused
            .iter()
            .filter(|&letter| {
                subset
                    .iter()
                    .any(|&id| self.dictionary.shape(id).positions(letter) != first.positions(letter))
            })
            .collect();

        if usable.is_empty() {
            return (Outcome::default(), None);
        }

        usable.sort_by_key(|&letter| Reverse(self.dictionary.frequency(subset, letter)));

        let mut best = Outcome::new((unused.len() as u32 + 1).min(kill_after), "");
        let mut best_children = None;

        for letter in usable {
            let mut groups = group_words(&self.dictionary, subset, &[letter]);
            groups.sort_by_key(|group| Reverse(group.len()));

            let next = used.with(letter);
            let mut worst = 0;

            for group in &groups {
                // Every word in a group has the same positions for the letter
                let penalty = u32::from(self.dictionary.shape(group[0]).positions(letter).is_empty());
                let outcome = self.search(group, next, Some(best.errors.saturating_sub(penalty)));
                worst = worst.max(outcome.errors + penalty);
                if worst >= best.errors {
                    break;
                }
            }

            if worst < best.errors {
                best = Outcome::new(worst, self.dictionary.alphabet().letter(letter).to_string());
                best_children = Some(groups.iter().filter_map(|group| self.key(next, group)).collect());
            }
        }

        (best, best_children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::{BTreeMap, BTreeSet};

    fn solved(words: &[&str], alphabet: &str) -> GameStateTree {
        let mut tree = GameStateTree::new(words, alphabet).unwrap();
        tree.solve_all();
        tree
    }

    #[test]
    fn new_tree_is_unsolved() {
        let tree = GameStateTree::new(&["abc", "Aaa", "aCa"], "abcd").unwrap();
        assert!(!tree.is_solved());
        assert_eq!(tree.dictionary().original_words(), &["abc", "Aaa", "aCa"]);
        assert_eq!(tree.dictionary().words(), &["abc", "aaa", "aca"]);
    }

    #[test]
    fn empty_subset_is_free() {
        let mut tree = GameStateTree::new(&["abc"], "abc").unwrap();
        assert_eq!(tree.solve(&[], ""), Outcome::default());
        assert!(!tree.is_solved());
    }

    #[test]
    fn singleton_reveals_remaining_letters() {
        let mut tree = GameStateTree::new(&["abc", "dab", "bcd"], "abcd").unwrap();
        assert_eq!(tree.solve(&[0], ""), Outcome::new(0, "abc"));
        assert_eq!(tree.solve(&[1], "b"), Outcome::new(0, "ad"));
        assert_eq!(tree.solve(&[2], "dbc"), Outcome::new(0, ""));
    }

    #[test]
    fn shared_letters_cost_nothing() {
        let mut tree = GameStateTree::new(&["abc", "bac", "cab"], "abcd").unwrap();
        assert_eq!(tree.solve_all(), Outcome::new(0, "abc"));
    }

    #[test]
    fn disjoint_words_cost_one_less_than_their_count() {
        let mut tree = GameStateTree::new(&["aa", "bb", "cc", "dd"], "abcd").unwrap();
        assert_eq!(tree.solve_all(), Outcome::new(3, "a"));
    }

    #[test]
    fn identical_words_cost_nothing() {
        let mut tree = GameStateTree::new(&["ab", "AB"], "ab").unwrap();
        assert_eq!(tree.solve_all(), Outcome::new(0, "ab"));
    }

    #[test]
    fn partially_shared_letters_are_guessed_first() {
        let mut tree = GameStateTree::new(&["baa", "bbb", "ccb", "ddb"], "abcd").unwrap();
        assert_eq!(tree.solve_all(), Outcome::new(1, "b"));
        assert_eq!(
            tree.dependencies(&StateKey::root()),
            Some(
                &[
                    StateKey::new("b", 0),
                    StateKey::new("b", 1),
                    StateKey::new("b", 2)
                ][..]
            )
        );
    }

    #[test]
    fn extract_requires_solving() {
        let tree = GameStateTree::new(&["abc", "abd"], "abcd").unwrap();
        assert_eq!(
            tree.extract_strategy(&StateKey::root()),
            Err(SolverError::PreconditionNotMet)
        );
    }

    #[test]
    fn extract_follows_played_states() {
        let tree = solved(&["baa", "bbb", "ccb", "ddb"], "abcd");
        let expected: FxHashMap<StateKey, String> = [
            (StateKey::new("", 0), "b"),
            (StateKey::new("b", 0), "a"),
            (StateKey::new("b", 1), ""),
            (StateKey::new("b", 2), "c"),
            (StateKey::new("bc", 2), ""),
            (StateKey::new("bc", 3), "d"),
        ]
        .into_iter()
        .map(|(key, letters)| (key, letters.to_string()))
        .collect();

        assert_eq!(tree.extract_strategy(&StateKey::root()).unwrap(), expected);
    }

    #[test]
    fn extract_from_inner_root() {
        let tree = solved(&["baa", "bbb", "ccb", "ddb"], "abcd");
        let strategy = tree.extract_strategy(&StateKey::new("b", 2)).unwrap();
        assert_eq!(strategy.len(), 3);
        assert_eq!(strategy[&StateKey::new("b", 2)], "c");
    }

    #[test]
    fn extract_unknown_root_is_inconsistent() {
        let tree = solved(&["baa", "bbb", "ccb", "ddb"], "abcd");
        assert!(matches!(
            tree.extract_strategy(&StateKey::new("xyz", 9)),
            Err(SolverError::InconsistentLookup { .. })
        ));
    }

    #[test]
    fn zero_bound_is_recorded_but_not_memoized() {
        let mut tree = GameStateTree::new(&["aa", "bb"], "ab").unwrap();
        assert_eq!(tree.solve_bounded(&[0, 1], "", 0), Outcome::default());
        assert_eq!(tree.lower_bound(&StateKey::root()), Some(0));
        assert_eq!(tree.outcome(&StateKey::root()), None);
    }

    #[test]
    fn bounded_solve_stores_lower_bound_only() {
        let mut tree = GameStateTree::new(&["aa", "bb", "cc", "dd"], "abcd").unwrap();
        let bounded = tree.solve_bounded(&[0, 1, 2, 3], "", 2);
        assert!(bounded.errors >= 2);
        assert_eq!(tree.outcome(&StateKey::root()), None);
        assert!(tree.lower_bound(&StateKey::root()).is_some_and(|bound| bound >= 2));

        // A looser bound recomputes the exact value
        assert_eq!(tree.solve_bounded(&[0, 1, 2, 3], "", 10), Outcome::new(3, "a"));
        assert_eq!(tree.outcome(&StateKey::root()), Some(&Outcome::new(3, "a")));
    }

    #[test]
    fn bounded_solve_above_value_is_exact() {
        let mut bounded = GameStateTree::new(&["aab", "abb", "bcc", "ddc"], "abcd").unwrap();
        let mut unbounded = bounded.clone();
        let exact = unbounded.solve_all();
        assert_eq!(bounded.solve_bounded(&[0, 1, 2, 3], "", exact.errors + 1), exact);
    }

    #[test]
    fn frequent_letters_win_ties() {
        // Every letter misses one of the words; 'c' occurs most often
        let mut tree = GameStateTree::new(&["abb", "ccc"], "abc").unwrap();
        assert_eq!(tree.solve_all(), Outcome::new(1, "c"));

        // Equal frequencies fall back to alphabet order
        let mut tree = GameStateTree::new(&["ccd", "aab"], "abcd").unwrap();
        assert_eq!(tree.solve_all(), Outcome::new(1, "a"));
    }

    /// Exhaustive minimax over every letter that splits the words, with no pruning
    fn brute_force(words: &[Vec<char>]) -> u32 {
        if words.len() <= 1 {
            return 0;
        }

        let letters: BTreeSet<char> = words.iter().flatten().copied().collect();
        letters
            .into_iter()
            .filter_map(|letter| {
                let mut groups: BTreeMap<Vec<usize>, Vec<Vec<char>>> = BTreeMap::new();
                for word in words {
                    let positions = word
                        .iter()
                        .enumerate()
                        .filter(|&(_, &c)| c == letter)
                        .map(|(i, _)| i)
                        .collect();
                    groups.entry(positions).or_default().push(word.clone());
                }

                (groups.len() > 1).then(|| {
                    groups
                        .iter()
                        .map(|(positions, group)| u32::from(positions.is_empty()) + brute_force(group))
                        .max()
                        .unwrap_or(0)
                })
            })
            .min()
            .unwrap_or(0)
    }

    fn word_sets() -> impl Strategy<Value = Vec<String>> {
        prop::collection::btree_set("[abcd]{3}", 1..7).prop_map(|words| words.into_iter().collect())
    }

    proptest! {
        #[test]
        fn solve_all_is_minimax_optimal(words in word_sets()) {
            let chars: Vec<Vec<char>> = words.iter().map(|w| w.chars().collect()).collect();
            let mut tree = GameStateTree::new(&words, "abcd").unwrap();
            prop_assert_eq!(tree.solve_all().errors, brute_force(&chars));
        }

        #[test]
        fn bounded_and_unbounded_agree(words in word_sets(), bound in 0u32..5) {
            let mut unbounded = GameStateTree::new(&words, "abcd").unwrap();
            let exact = unbounded.solve_all();

            let mut bounded = GameStateTree::new(&words, "abcd").unwrap();
            let ids: Vec<usize> = (0..words.len()).collect();
            let outcome = bounded.solve_bounded(&ids, "", bound);
            if exact.errors < bound {
                prop_assert_eq!(&outcome, &exact);
            } else {
                prop_assert!(outcome.errors >= bound);
            }

            // Lower bounds left behind do not change the exact answer
            prop_assert_eq!(bounded.solve_all(), exact);
        }
    }
}
