//! Products — quantities of an untracked good.

use fcx_core::num;

use crate::{ResourceError, ResourceResult};

/// A quantity of some good with no isotopic state, distinguished only by a
/// free-form quality label ("power", "swu", …).
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Product {
    qty: f64,
    quality: String,
}

impl Product {
    pub fn new(qty: f64, quality: impl Into<String>) -> ResourceResult<Self> {
        if qty < 0.0 {
            return Err(ResourceError::NegativeQuantity(qty));
        }
        Ok(Self {
            qty,
            quality: quality.into(),
        })
    }

    /// Like [`new`][Self::new], but clamps negative quantities to zero
    /// instead of failing.  Convenience for default trait impls.
    pub fn clamped(qty: f64, quality: impl Into<String>) -> Self {
        Self {
            qty: qty.max(0.0),
            quality: quality.into(),
        }
    }

    pub fn quantity(&self) -> f64 {
        self.qty
    }

    pub fn quality(&self) -> &str {
        &self.quality
    }

    /// Combine `other` into this product.
    ///
    /// Quantities sum; the quality label stays this product's, except that
    /// absorbing into an empty product takes the other wholesale (mirroring
    /// [`Material::absorb`][crate::Material::absorb]'s empty-operand rules).
    pub fn absorb(&mut self, other: Product) {
        if other.qty == 0.0 {
            return;
        }
        if self.qty == 0.0 {
            *self = other;
            return;
        }
        self.qty += other.qty;
    }

    /// Remove `qty` from this product; same tolerance rules as
    /// [`Material::extract`][crate::Material::extract].
    pub fn extract(&mut self, qty: f64) -> ResourceResult<Product> {
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
        Ok(Product {
            qty: taken,
            quality: self.quality.clone(),
        })
    }
}
