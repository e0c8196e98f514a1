//! Basis-state labels
//!
//! A label is a fixed-width bit-string with one character per qubit; the
//! character at index `i` is the value of qubit `i`. Internally the bits
//! are packed into a `u64` with qubit `i` at bit `i`.

use crate::error::{Result, StateError};
use qcirc_core::MAX_QUBITS;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Fixed-width basis-state label
///
/// Ordering is lexicographic over the rendered bit-string, so qubit 0 is
/// the most significant position when sorting.
///
/// # Example
/// ```
/// use qcirc_state::BasisLabel;
///
/// let label: BasisLabel = "01".parse().unwrap();
/// assert!(!label.bit(0));
/// assert!(label.bit(1));
/// assert_eq!(label.flipped(0).to_string(), "11");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BasisLabel {
    bits: u64,
    width: u8,
}

impl BasisLabel {
    /// The all-zero label of the given width
    ///
    /// # Errors
    /// Returns `InvalidDimension` if `width` is 0 or above [`MAX_QUBITS`]
    pub fn zeros(width: usize) -> Result<Self> {
        check_width(width)?;
        Ok(Self {
            bits: 0,
            width: width as u8,
        })
    }

    /// Label from packed bits, qubit `i` at bit `i`
    pub fn from_bits(bits: u64, width: usize) -> Result<Self> {
        check_width(width)?;
        if bits >> width != 0 {
            return Err(StateError::LabelWidthMismatch {
                expected: width,
                actual: (u64::BITS - bits.leading_zeros()) as usize,
            });
        }
        Ok(Self {
            bits,
            width: width as u8,
        })
    }

    /// Number of qubits the label describes
    #[inline]
    pub fn width(&self) -> usize {
        self.width as usize
    }

    /// Packed bits, qubit `i` at bit `i`
    #[inline]
    pub fn bits(&self) -> u64 {
        self.bits
    }

    /// Value of qubit `qubit`
    #[inline]
    pub fn bit(&self, qubit: usize) -> bool {
        debug_assert!(qubit < self.width());
        (self.bits >> qubit) & 1 == 1
    }

    /// Copy of the label with qubit `qubit` forced to `value`
    #[inline]
    pub fn with_bit(self, qubit: usize, value: bool) -> Self {
        debug_assert!(qubit < self.width());
        let mask = 1u64 << qubit;
        let bits = if value {
            self.bits | mask
        } else {
            self.bits & !mask
        };
        Self { bits, ..self }
    }

    /// Copy of the label with qubit `qubit` inverted
    #[inline]
    pub fn flipped(self, qubit: usize) -> Self {
        debug_assert!(qubit < self.width());
        Self {
            bits: self.bits ^ (1u64 << qubit),
            ..self
        }
    }
}

fn check_width(width: usize) -> Result<()> {
    if width == 0 || width > MAX_QUBITS {
        return Err(StateError::InvalidDimension {
            num_qubits: width,
            max: MAX_QUBITS,
        });
    }
    Ok(())
}

impl Ord for BasisLabel {
    fn cmp(&self, other: &Self) -> Ordering {
        let common = self.width.min(other.width) as usize;
        (0..common)
            .map(|q| self.bit(q).cmp(&other.bit(q)))
            .find(|ord| ord.is_ne())
            .unwrap_or_else(|| self.width.cmp(&other.width))
    }
}

impl PartialOrd for BasisLabel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for BasisLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for q in 0..self.width() {
            f.write_str(if self.bit(q) { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for BasisLabel {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self> {
        check_width(s.len())?;
        let mut bits = 0u64;
        for (q, c) in s.chars().enumerate() {
            match c {
                '0' => {}
                '1' => bits |= 1u64 << q,
                _ => return Err(StateError::InvalidLabel(s.to_string())),
            }
        }
        Ok(Self {
            bits,
            width: s.len() as u8,
        })
    }
}
