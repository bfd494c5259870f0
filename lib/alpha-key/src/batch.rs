use crate::{
    transform::{self, TransformOutcome},
    white_key::WhiteKeyConfig,
};
use std::path::PathBuf;

/// Assets keyed in place when no paths are given
pub const DEFAULT_ASSETS: [&str; 2] = ["assets/hero_chibi.png", "assets/monster_slime.png"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPair {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl PathPair {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }

    pub fn in_place(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            output: path.clone(),
            input: path,
        }
    }
}

pub fn default_pairs() -> Vec<PathPair> {
    DEFAULT_ASSETS.iter().map(|path| PathPair::in_place(*path)).collect()
}

/// Process every pair in order. A failed pair never stops the ones after it.
pub fn process_all(pairs: &[PathPair], config: &WhiteKeyConfig) -> Vec<TransformOutcome> {
    let outcomes = pairs
        .iter()
        .map(|pair| transform::run(pair, config))
        .collect::<Vec<_>>();

    let summary = BatchSummary::from_outcomes(&outcomes);
    log::info!(
        "Processed {} file(s): {} succeeded, {} failed",
        summary.total(),
        summary.succeeded,
        summary.failed
    );

    outcomes
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn from_outcomes(outcomes: &[TransformOutcome]) -> Self {
        let succeeded = outcomes.iter().filter(|o| o.is_success()).count();
        Self {
            succeeded,
            failed: outcomes.len() - succeeded,
        }
    }

    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pairs_are_in_place() {
        let pairs = default_pairs();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0], PathPair::in_place("assets/hero_chibi.png"));
        assert_eq!(pairs[1].input, pairs[1].output);
        assert_eq!(pairs[1].input, PathBuf::from("assets/monster_slime.png"));
    }

    #[test]
    fn test_summary() {
        let outcomes = vec![
            TransformOutcome::Failure {
                input: PathBuf::from("a.png"),
                reason: "missing".to_string(),
            },
            TransformOutcome::Failure {
                input: PathBuf::from("b.png"),
                reason: "missing".to_string(),
            },
        ];
        let summary = BatchSummary::from_outcomes(&outcomes);
        assert_eq!(summary.succeeded, 0);
        assert_eq!(summary.failed, 2);
        assert_eq!(summary.total(), 2);
    }
}
