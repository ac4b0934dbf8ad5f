//! Materials — quantities with an isotopic composition.

use fcx_core::num;

use crate::{Composition, ResourceError, ResourceResult};

/// A mass of material with a known isotopic composition.
///
/// Quantity is in kilograms.  Materials are the payload of most trades; the
/// exchange core only reads [`quantity`][Self::quantity] and calls
/// [`extract`][Self::extract], everything else is for facility bookkeeping.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Material {
    qty: f64,
    comp: Composition,
}

impl Material {
    /// Create `qty` kilograms of material with composition `comp`.
    pub fn new(qty: f64, comp: Composition) -> ResourceResult<Self> {
        if qty < 0.0 {
            return Err(ResourceError::NegativeQuantity(qty));
        }
        Ok(Self { qty, comp })
    }

    /// Like [`new`][Self::new], but clamps negative quantities to zero
    /// instead of failing.  Convenience for default trait impls.
    pub fn clamped(qty: f64, comp: Composition) -> Self {
        Self {
            qty: qty.max(0.0),
            comp,
        }
    }

    pub fn quantity(&self) -> f64 {
        self.qty
    }

    pub fn composition(&self) -> &Composition {
        &self.comp
    }

    /// Remove `qty` from this material and return it as a new material with
    /// the same composition.
    ///
    /// A request within tolerance of the whole inventory takes the whole
    /// inventory, so repeated extract-everything calls don't strand
    /// rounding-noise remnants.  Requests beyond that fail.
    pub fn extract(&mut self, qty: f64) -> ResourceResult<Material> {
        if num::is_neg(self.qty - qty) {
            return Err(ResourceError::ExtractExceedsInventory {
                want: qty,
                have: self.qty,
            });
        }
        let taken = if num::is_zero(self.qty - qty) {
            std::mem::replace(&mut self.qty, 0.0)
        } else {
            self.qty -= qty;
            qty
        };
        Ok(Material {
            qty: taken,
            comp: self.comp.clone(),
        })
    }

    /// Combine `other` into this material by mass-weighted mixing.
    ///
    /// The result keeps this material's basis; fractions are merged in mass
    /// proportion.  Absorbing an empty material is a no-op; absorbing into
    /// an empty material takes the other wholesale.
    pub fn absorb(&mut self, other: Material) {
        if other.qty == 0.0 {
            return;
        }
        if self.qty == 0.0 {
            *self = other;
            return;
        }
        self.comp = self.comp.blend(self.qty, &other.comp, other.qty);
        self.qty += other.qty;
    }
}
