//! The `Resource` sum type consumed by the exchange.

use crate::{Material, Product, ResourceError, ResourceResult};

/// Either kind of tradable resource.
///
/// The exchange core treats resources opaquely — it reads quantities and
/// splits them; only facilities look inside.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Resource {
    Material(Material),
    Product(Product),
}

impl Resource {
    pub fn quantity(&self) -> f64 {
        match self {
            Resource::Material(m) => m.quantity(),
            Resource::Product(p) => p.quantity(),
        }
    }

    /// Remove `qty` from this resource, returning it as a new resource of
    /// the same kind.  Tolerance rules follow the concrete types' `extract`.
    pub fn split(&mut self, qty: f64) -> ResourceResult<Resource> {
        match self {
            Resource::Material(m) => m.extract(qty).map(Resource::Material),
            Resource::Product(p) => p.extract(qty).map(Resource::Product),
        }
    }

    /// Merge `other` into this resource.
    ///
    /// Same-kind resources always merge (materials mix compositions by
    /// mass, products sum quantities); mixing kinds is a `KindMismatch`
    /// error.  Callers that must not lose the operand should check
    /// [`is_same_kind`][Self::is_same_kind] first.
    pub fn absorb(&mut self, other: Resource) -> ResourceResult<()> {
        match (self, other) {
            (Resource::Material(have), Resource::Material(got)) => {
                have.absorb(got);
                Ok(())
            }
            (Resource::Product(have), Resource::Product(got)) => {
                have.absorb(got);
                Ok(())
            }
            (have, got) => Err(ResourceError::KindMismatch {
                have: have.kind_name(),
                got: got.kind_name(),
            }),
        }
    }

    /// `true` if both resources are the same variant (and so will absorb).
    pub fn is_same_kind(&self, other: &Resource) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    fn kind_name(&self) -> &'static str {
        match self {
            Resource::Material(_) => "material",
            Resource::Product(_) => "product",
        }
    }
}

impl From<Material> for Resource {
    fn from(m: Material) -> Self {
        Resource::Material(m)
    }
}

impl From<Product> for Resource {
    fn from(p: Product) -> Self {
        Resource::Product(p)
    }
}
