use std::{io::Write, path::Path};

use derive_more::Display;
use rustc_hash::FxHashSet;

use crate::{draw::DrawError, random::Roller, roster};

/// Which of the three name collections to inspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ListView {
    #[display("all names")]
    All,
    #[display("remaining names")]
    Remaining,
    #[display("drawn names")]
    Drawn,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    /// Non-empty lines received.
    pub accepted: usize,
    /// Entries that were new to the roster.
    pub added: usize,
    /// Pool size after the load.
    pub pool_len: usize,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ListStatus {
    pub total: usize,
    pub remaining: usize,
    pub drawn: usize,
}

/// Draws names from a roster without replacement.
///
/// The roster only grows. The pool is the undrawn part of the roster, in
/// roster order minus whatever has been drawn. The history records draws
/// in the order they happened, until the next reset.
#[derive(Debug, Default, Clone)]
pub struct ListDraw {
    roster: Vec<String>,
    index: FxHashSet<String>,
    pool: Vec<String>,
    history: Vec<String>,
}

impl ListDraw {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds names from raw lines. Lines are trimmed and blank ones skipped;
    /// a name already on the roster is ignored, so the first occurrence wins.
    ///
    /// A repeated name that has already been drawn stays out of the pool
    /// until the next reset.
    pub fn load<I, S>(&mut self, lines: I) -> LoadSummary
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut summary = LoadSummary::default();

        for line in lines {
            let name = line.as_ref().trim();
            if name.is_empty() {
                continue;
            }
            summary.accepted += 1;

            if self.index.insert(name.to_string()) {
                self.roster.push(name.to_string());
                self.pool.push(name.to_string());
                summary.added += 1;
            }
        }

        summary.pool_len = self.pool.len();
        log::info!(
            "Loaded {} names ({} new), {} in pool",
            summary.accepted,
            summary.added,
            summary.pool_len
        );
        summary
    }

    /// Loads names from a file with one name per line.
    /// Nothing is applied unless the whole file could be read.
    pub fn load_file(&mut self, path: &Path) -> Result<LoadSummary, DrawError> {
        let lines = roster::read_lines(path)?;
        Ok(self.load(lines))
    }

    /// Draws one name uniformly from the pool and moves it to the history.
    pub fn draw_one(&mut self, roller: &mut Roller) -> Result<String, DrawError> {
        let idx = roller.index(self.pool.len()).ok_or(DrawError::EmptyPool)?;
        let name = self.pool.remove(idx);
        log::debug!("Drew {name:?} at index {idx}, {} left", self.pool.len());
        self.history.push(name.clone());
        Ok(name)
    }

    /// Puts every drawn name back. The roster is untouched.
    pub fn reset(&mut self) {
        self.pool = self.roster.clone();
        self.history.clear();
        log::info!("List draw reset, {} in pool", self.pool.len());
    }

    pub fn view(&self, view: ListView) -> &[String] {
        match view {
            ListView::All => &self.roster,
            ListView::Remaining => &self.pool,
            ListView::Drawn => &self.history,
        }
    }

    pub fn roster(&self) -> &[String] {
        &self.roster
    }

    pub fn remaining(&self) -> &[String] {
        &self.pool
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn status(&self) -> ListStatus {
        ListStatus {
            total: self.roster.len(),
            remaining: self.pool.len(),
            drawn: self.history.len(),
        }
    }

    /// Writes the history as `index,name` rows, overwriting `path`.
    /// Returns the number of rows written.
    pub fn export_history(&self, path: &Path) -> Result<usize, DrawError> {
        roster::export_history(path, &self.history)?;
        log::info!(
            "Exported {} drawn names to {}",
            self.history.len(),
            path.display()
        );
        Ok(self.history.len())
    }

    pub fn write_history_csv(&self, writer: impl Write) -> std::io::Result<()> {
        roster::write_history_csv(writer, &self.history)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn loaded(names: &[&str]) -> ListDraw {
        let mut list = ListDraw::new();
        list.load(names.iter().copied());
        list
    }

    #[test]
    fn test_load_dedups_and_trims() {
        let mut list = ListDraw::new();
        let summary = list.load(["Alice", "Bob", "Alice", " Bob "]);
        assert_eq!(list.roster(), ["Alice", "Bob"]);
        assert_eq!(list.remaining(), ["Alice", "Bob"]);
        assert_eq!(
            summary,
            LoadSummary {
                accepted: 4,
                added: 2,
                pool_len: 2
            }
        );
    }

    #[test]
    fn test_load_skips_blank_lines() {
        let list = loaded(&["", "   ", "\tCarol\r", ""]);
        assert_eq!(list.roster(), ["Carol"]);
    }

    #[test]
    fn test_load_accumulates_across_calls() {
        let mut list = loaded(&["Alice", "Bob"]);
        let summary = list.load(["Bob", "Carol"]);
        assert_eq!(list.roster(), ["Alice", "Bob", "Carol"]);
        assert_eq!(summary.added, 1);
        assert_eq!(summary.pool_len, 3);
    }

    #[test]
    fn test_reloading_drawn_name_keeps_it_out_of_pool() {
        let mut list = loaded(&["Alice"]);
        let mut roller = Roller::test_rng();
        assert_eq!(list.draw_one(&mut roller).unwrap(), "Alice");
        list.load(["Alice"]);
        assert!(list.remaining().is_empty());
        assert!(matches!(
            list.draw_one(&mut roller),
            Err(DrawError::EmptyPool)
        ));
    }

    #[test]
    fn test_draw_from_empty_pool() {
        let mut list = ListDraw::new();
        let mut roller = Roller::test_rng();
        assert!(matches!(
            list.draw_one(&mut roller),
            Err(DrawError::EmptyPool)
        ));
        assert_eq!(list.status(), ListStatus::default());
    }

    #[test]
    fn test_draw_moves_name_to_history() {
        let mut list = loaded(&["Alice", "Bob", "Carol"]);
        let mut roller = Roller::test_rng();
        let name = list.draw_one(&mut roller).unwrap();
        assert_eq!(list.history(), [name.clone()]);
        assert!(!list.remaining().contains(&name));
        assert_eq!(list.remaining().len(), 2);
        assert_eq!(list.roster().len(), 3);
    }

    #[test]
    fn test_remaining_keeps_roster_order() {
        let mut list = loaded(&["a", "b", "c", "d", "e"]);
        let mut roller = Roller::test_rng();
        list.draw_one(&mut roller).unwrap();
        list.draw_one(&mut roller).unwrap();
        let expected: Vec<&String> = list
            .roster()
            .iter()
            .filter(|name| !list.history().contains(name))
            .collect();
        let actual: Vec<&String> = list.remaining().iter().collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_exhaust_then_reset() {
        let mut list = loaded(&["Alice", "Bob", "Carol"]);
        let mut roller = Roller::test_rng();
        for _ in 0..3 {
            list.draw_one(&mut roller).unwrap();
        }
        assert!(list.draw_one(&mut roller).is_err());
        assert_eq!(list.history().len(), 3);

        list.reset();
        assert_eq!(list.remaining(), list.roster());
        assert!(list.history().is_empty());
    }

    #[test]
    fn test_view_selects_collection() {
        let mut list = loaded(&["Alice", "Bob"]);
        let mut roller = Roller::test_rng();
        let drawn = list.draw_one(&mut roller).unwrap();
        assert_eq!(list.view(ListView::All).len(), 2);
        assert_eq!(list.view(ListView::Remaining).len(), 1);
        assert_eq!(list.view(ListView::Drawn), [drawn]);
    }

    #[test]
    fn test_every_name_is_drawn_roughly_equally() {
        let mut roller = Roller::test_rng();
        let mut firsts = rustc_hash::FxHashMap::default();
        for _ in 0..3000 {
            let mut list = loaded(&["a", "b", "c"]);
            let name = list.draw_one(&mut roller).unwrap();
            *firsts.entry(name).or_insert(0usize) += 1;
        }
        for name in ["a", "b", "c"] {
            let count = firsts.get(name).copied().unwrap_or(0);
            assert!((800..=1200).contains(&count), "{name} drawn {count} times");
        }
    }

    #[test]
    fn test_unreadable_file_leaves_roster_untouched() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("names.txt");
        std::fs::write(&path, b"Dave\n\xff\n")?;

        let mut list = loaded(&["Alice"]);
        let err = list.load_file(&path).unwrap_err();
        assert!(matches!(err, DrawError::FileRead { .. }));
        assert_eq!(list.roster(), ["Alice"]);
        assert_eq!(list.remaining(), ["Alice"]);
        Ok(())
    }

    #[test]
    fn test_write_history_csv() {
        let mut list = ListDraw::new();
        list.history = vec!["X".to_string(), "Y".to_string()];
        let mut buf = Vec::new();
        list.write_history_csv(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "1,X\n2,Y\n");
    }

    proptest! {
        #[test]
        fn prop_draws_never_repeat_and_conserve(
            names in proptest::collection::vec("[a-e]{1,3}", 0..24),
            draws in 0usize..30,
            seed in any::<u64>(),
        ) {
            let mut list = ListDraw::new();
            list.load(&names);
            let mut roller = Roller::from_seed(seed);

            for _ in 0..draws {
                let _ = list.draw_one(&mut roller);
                prop_assert_eq!(
                    list.remaining().len() + list.history().len(),
                    list.roster().len()
                );
            }

            let unique: FxHashSet<&String> = list.history().iter().collect();
            prop_assert_eq!(unique.len(), list.history().len());
            prop_assert!(list.remaining().iter().all(|n| list.roster().contains(n)));
        }

        #[test]
        fn prop_reset_is_idempotent(
            names in proptest::collection::vec("[a-z]{1,4}", 0..16),
            draws in 0usize..16,
            seed in any::<u64>(),
        ) {
            let mut list = ListDraw::new();
            list.load(&names);
            let mut roller = Roller::from_seed(seed);
            for _ in 0..draws {
                let _ = list.draw_one(&mut roller);
            }

            list.reset();
            let once = (list.remaining().to_vec(), list.history().to_vec());
            list.reset();
            let twice = (list.remaining().to_vec(), list.history().to_vec());
            prop_assert_eq!(&once, &twice);
            prop_assert_eq!(once.0.as_slice(), list.roster());
            prop_assert!(once.1.is_empty());
        }
    }
}
