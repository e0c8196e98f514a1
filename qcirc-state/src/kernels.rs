//! Gate kernels over sparse amplitude maps
//!
//! Each kernel reads an amplitude map and builds a fresh one; inputs are
//! never modified. Labels absent from a map have amplitude zero.

use crate::label::BasisLabel;
use ahash::AHashMap;
use std::f64::consts::FRAC_1_SQRT_2;

/// Sparse amplitude storage keyed by basis label
pub type Amplitudes = AHashMap<BasisLabel, f64>;

/// Squared amplitudes at or below this are dropped from kernel output
pub const PRUNE_EPSILON: f64 = 1e-14;

/// Hadamard on `qubit`
///
/// `|0⟩ → (|0⟩ + |1⟩)/√2` and `|1⟩ → (|0⟩ - |1⟩)/√2`. Contributions to the
/// same output label are summed, so opposite-sign terms cancel.
pub fn hadamard(amplitudes: &Amplitudes, qubit: usize) -> Amplitudes {
    let mut out = Amplitudes::with_capacity(amplitudes.len() * 2);

    for (&label, &amp) in amplitudes {
        let scaled = amp * FRAC_1_SQRT_2;
        let sign = if label.bit(qubit) { -1.0 } else { 1.0 };

        *out.entry(label.with_bit(qubit, false)).or_insert(0.0) += scaled;
        *out.entry(label.with_bit(qubit, true)).or_insert(0.0) += sign * scaled;
    }

    out.retain(|_, amp| *amp * *amp > PRUNE_EPSILON);
    out
}

/// Pauli-X on `qubit`: flips the bit of every label
pub fn pauli_x(amplitudes: &Amplitudes, qubit: usize) -> Amplitudes {
    amplitudes
        .iter()
        .map(|(&label, &amp)| (label.flipped(qubit), amp))
        .collect()
}

/// CNOT: flips `target` on every label whose `control` bit is set
pub fn cnot(amplitudes: &Amplitudes, control: usize, target: usize) -> Amplitudes {
    amplitudes
        .iter()
        .map(|(&label, &amp)| {
            let label = if label.bit(control) {
                label.flipped(target)
            } else {
                label
            };
            (label, amp)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn map(entries: &[(&str, f64)]) -> Amplitudes {
        entries
            .iter()
            .map(|(s, a)| (s.parse::<BasisLabel>().unwrap(), *a))
            .collect()
    }

    fn amp(amplitudes: &Amplitudes, label: &str) -> f64 {
        amplitudes
            .get(&label.parse::<BasisLabel>().unwrap())
            .copied()
            .unwrap_or(0.0)
    }

    #[test]
    fn test_hadamard_on_zero() {
        let out = hadamard(&map(&[("0", 1.0)]), 0);
        assert_eq!(out.len(), 2);
        assert_abs_diff_eq!(amp(&out, "0"), FRAC_1_SQRT_2, epsilon = 1e-12);
        assert_abs_diff_eq!(amp(&out, "1"), FRAC_1_SQRT_2, epsilon = 1e-12);
    }

    #[test]
    fn test_hadamard_on_one_has_negative_branch() {
        let out = hadamard(&map(&[("1", 1.0)]), 0);
        assert_abs_diff_eq!(amp(&out, "0"), FRAC_1_SQRT_2, epsilon = 1e-12);
        assert_abs_diff_eq!(amp(&out, "1"), -FRAC_1_SQRT_2, epsilon = 1e-12);
    }

    #[test]
    fn test_hadamard_interference_cancels() {
        let plus = hadamard(&map(&[("0", 1.0)]), 0);
        let back = hadamard(&plus, 0);
        assert_eq!(back.len(), 1);
        assert_abs_diff_eq!(amp(&back, "0"), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_hadamard_targets_one_qubit() {
        let out = hadamard(&map(&[("10", 1.0)]), 1);
        assert_abs_diff_eq!(amp(&out, "10"), FRAC_1_SQRT_2, epsilon = 1e-12);
        assert_abs_diff_eq!(amp(&out, "11"), FRAC_1_SQRT_2, epsilon = 1e-12);
        assert_eq!(amp(&out, "00"), 0.0);
    }

    #[test]
    fn test_pauli_x_is_bijection() {
        let input = map(&[("00", 0.6), ("01", -0.8)]);
        let out = pauli_x(&input, 0);
        assert_eq!(amp(&out, "10"), 0.6);
        assert_eq!(amp(&out, "11"), -0.8);
        assert_eq!(pauli_x(&out, 0), input);
    }

    #[test]
    fn test_cnot_respects_control() {
        let input = map(&[("00", 0.6), ("10", 0.8)]);
        let out = cnot(&input, 0, 1);
        assert_eq!(amp(&out, "00"), 0.6);
        assert_eq!(amp(&out, "11"), 0.8);
        assert_eq!(out.len(), 2);
    }
}
