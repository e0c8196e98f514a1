//! Measurement probabilities
//!
//! A [`ProbabilityMap`] is derived once from a final [`StateMap`]: each
//! stored label gets the square of its amplitude. Labels absent from the
//! state are never materialized and read as probability 0.

use crate::error::{Result, StateError};
use crate::label::BasisLabel;
use crate::state_map::StateMap;
use ahash::AHashMap;

/// Map from basis label to measurement probability in `[0, 1]`
#[derive(Clone, Debug, PartialEq)]
pub struct ProbabilityMap {
    num_qubits: usize,
    probabilities: AHashMap<BasisLabel, f64>,
}

impl ProbabilityMap {
    /// Project a state onto the computational basis
    pub fn from_state(state: &StateMap) -> Self {
        let probabilities = state.iter().map(|(&label, &amp)| (label, amp * amp)).collect();
        Self {
            num_qubits: state.num_qubits(),
            probabilities,
        }
    }

    /// Build a probability map from explicit entries
    ///
    /// # Errors
    /// - `LabelWidthMismatch` if a label is not `num_qubits` wide
    /// - `InvalidProbability` if a value lies outside `[0, 1]`
    pub fn from_entries<I>(num_qubits: usize, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (BasisLabel, f64)>,
    {
        BasisLabel::zeros(num_qubits)?;
        let mut probabilities = AHashMap::new();
        for (label, p) in entries {
            if label.width() != num_qubits {
                return Err(StateError::LabelWidthMismatch {
                    expected: num_qubits,
                    actual: label.width(),
                });
            }
            if !(0.0..=1.0).contains(&p) {
                return Err(StateError::InvalidProbability(p));
            }
            probabilities.insert(label, p);
        }
        Ok(Self {
            num_qubits,
            probabilities,
        })
    }

    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Number of labels with a stored probability
    #[inline]
    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }

    /// Probability of `label` (0.0 if absent)
    pub fn get(&self, label: &BasisLabel) -> f64 {
        self.probabilities.get(label).copied().unwrap_or(0.0)
    }

    /// Probability of a label given as a bit-string
    ///
    /// # Errors
    /// Returns error if `bits` is not a valid label of this register's width
    pub fn probability(&self, bits: &str) -> Result<f64> {
        let label: BasisLabel = bits.parse()?;
        if label.width() != self.num_qubits {
            return Err(StateError::LabelWidthMismatch {
                expected: self.num_qubits,
                actual: label.width(),
            });
        }
        Ok(self.get(&label))
    }

    /// Iterate entries in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&BasisLabel, &f64)> {
        self.probabilities.iter()
    }

    /// Entries in lexicographic label order
    pub fn sorted(&self) -> Vec<(BasisLabel, f64)> {
        let mut entries: Vec<_> = self.probabilities.iter().map(|(&l, &p)| (l, p)).collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }

    /// Sum over all stored probabilities
    pub fn total(&self) -> f64 {
        self.probabilities.values().sum()
    }

    /// Check if the total is within `tolerance` of 1.0
    pub fn is_normalized(&self, tolerance: f64) -> bool {
        (self.total() - 1.0).abs() <= tolerance
    }

    /// The most probable label, lowest label first on ties
    pub fn most_likely(&self) -> Option<(BasisLabel, f64)> {
        self.sorted()
            .into_iter()
            .fold(None, |best, (label, p)| match best {
                Some((_, best_p)) if best_p >= p => best,
                _ => Some((label, p)),
            })
    }

    /// Marginal probability that `qubit` reads 1
    pub fn qubit_probability(&self, qubit: usize) -> Result<f64> {
        if qubit >= self.num_qubits {
            return Err(StateError::InvalidQubitIndex {
                index: qubit,
                num_qubits: self.num_qubits,
            });
        }
        Ok(self
            .probabilities
            .iter()
            .filter(|(label, _)| label.bit(qubit))
            .map(|(_, p)| p)
            .sum())
    }
}

impl From<&StateMap> for ProbabilityMap {
    fn from(state: &StateMap) -> Self {
        Self::from_state(state)
    }
}
