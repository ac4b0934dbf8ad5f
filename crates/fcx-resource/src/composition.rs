//! Isotopic compositions.
//!
//! # Design
//!
//! A composition is an immutable, normalized map from nuclide to fraction.
//! Normalization happens once at construction; consumers can then mix
//! compositions by mass without re-scaling.  Compositions are shared by
//! cloning — they are small (a handful of nuclides for most recipes) and the
//! exchange never mutates them.

use std::fmt;

use crate::{ResourceError, ResourceResult};

// ── Nuclide ───────────────────────────────────────────────────────────────────

/// A nuclide in ZAI form: `Z * 10_000_000 + A * 10_000 + state`.
///
/// U-235 is `922350000`, Pu-239 is `942390000`.  The encoding is carried
/// verbatim from scenario recipes; the simulator never decomposes it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Nuclide(pub u32);

impl fmt::Display for Nuclide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Basis ─────────────────────────────────────────────────────────────────────

/// Whether recipe fractions are given per unit mass or per atom count.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Basis {
    #[default]
    Mass,
    Atom,
}

// ── Composition ───────────────────────────────────────────────────────────────

/// A normalized set of nuclide fractions.
///
/// Entries are kept sorted by nuclide so two compositions built from the same
/// recipe in different orders compare equal.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Composition {
    basis: Basis,
    fractions: Vec<(Nuclide, f64)>,
}

impl Composition {
    /// Build a composition from raw `(nuclide, amount)` pairs.
    ///
    /// Amounts need not sum to one — they are normalized here.  Duplicate
    /// nuclide entries are summed.  Fails if the list is empty or any amount
    /// is non-positive.
    pub fn new(basis: Basis, entries: Vec<(Nuclide, f64)>) -> ResourceResult<Self> {
        if entries.is_empty() {
            return Err(ResourceError::EmptyComposition);
        }

        let mut merged: Vec<(Nuclide, f64)> = Vec::with_capacity(entries.len());
        for (nuc, amt) in entries {
            if amt <= 0.0 {
                return Err(ResourceError::NonPositiveFraction {
                    nuclide: nuc.0,
                    fraction: amt,
                });
            }
            match merged.iter_mut().find(|(n, _)| *n == nuc) {
                Some((_, existing)) => *existing += amt,
                None => merged.push((nuc, amt)),
            }
        }
        merged.sort_by_key(|(n, _)| *n);

        let total: f64 = merged.iter().map(|(_, a)| a).sum();
        for (_, a) in &mut merged {
            *a /= total;
        }

        Ok(Self {
            basis,
            fractions: merged,
        })
    }

    /// Single-nuclide composition, useful in tests and simple recipes.
    pub fn single(basis: Basis, nuclide: Nuclide) -> Self {
        Self {
            basis,
            fractions: vec![(nuclide, 1.0)],
        }
    }

    /// Weighted mix of two compositions, e.g. by the masses they describe.
    ///
    /// Keeps this composition's basis.  Both weights must be positive —
    /// callers merging inventories guarantee that by skipping empty
    /// operands, which is what keeps this infallible.
    pub fn blend(&self, self_weight: f64, other: &Composition, other_weight: f64) -> Composition {
        let mut merged: Vec<(Nuclide, f64)> = self
            .fractions
            .iter()
            .map(|&(n, f)| (n, f * self_weight))
            .collect();
        for &(nuc, f) in &other.fractions {
            let amt = f * other_weight;
            match merged.iter_mut().find(|(n, _)| *n == nuc) {
                Some((_, existing)) => *existing += amt,
                None => merged.push((nuc, amt)),
            }
        }
        merged.sort_by_key(|(n, _)| *n);

        let total: f64 = merged.iter().map(|(_, a)| a).sum();
        for (_, a) in &mut merged {
            *a /= total;
        }

        Composition {
            basis: self.basis,
            fractions: merged,
        }
    }

    pub fn basis(&self) -> Basis {
        self.basis
    }

    /// Normalized `(nuclide, fraction)` pairs, sorted by nuclide.
    pub fn fractions(&self) -> &[(Nuclide, f64)] {
        &self.fractions
    }

    /// The fraction of `nuclide`, or 0 if absent.
    pub fn fraction(&self, nuclide: Nuclide) -> f64 {
        self.fractions
            .iter()
            .find(|(n, _)| *n == nuclide)
            .map(|(_, f)| *f)
            .unwrap_or(0.0)
    }
}
