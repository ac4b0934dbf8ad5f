//! Capacity constraints and resource converters.

use fcx_resource::Resource;

/// Maps a resource to the amount of some constraint dimension consumed per
/// unit of that resource traded.
///
/// Converters must be pure and return nonnegative values — they are evaluated
/// during graph translation and their results become unit-capacity
/// coefficients.  Any `Fn(&Resource) -> f64` closure is a converter:
///
/// ```rust,ignore
/// // One SWU-equivalent per kilogram, scaled by enrichment.
/// let c = CapacityConstraint::new(1_000.0, Box::new(|r: &Resource| swu_per_kg(r)));
/// ```
pub trait Converter {
    fn convert(&self, resource: &Resource) -> f64;
}

impl<F> Converter for F
where
    F: Fn(&Resource) -> f64,
{
    fn convert(&self, resource: &Resource) -> f64 {
        self(resource)
    }
}

/// The identity rate: one unit of budget per unit of flow, regardless of the
/// resource.  Turns a constraint into a plain quantity cap.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrivialConverter;

impl Converter for TrivialConverter {
    fn convert(&self, _resource: &Resource) -> f64 {
        1.0
    }
}

/// A pooled budget plus the rate at which flows consume it.
///
/// The budget (`capacity`) becomes one entry in the owning node set's
/// capacity vector; the converter supplies each arc's coefficient for that
/// dimension.
pub struct CapacityConstraint {
    capacity: f64,
    converter: Box<dyn Converter>,
}

impl CapacityConstraint {
    pub fn new(capacity: f64, converter: Box<dyn Converter>) -> Self {
        Self {
            capacity,
            converter,
        }
    }

    /// A plain quantity cap: at most `capacity` units of flow in total.
    pub fn trivial(capacity: f64) -> Self {
        Self::new(capacity, Box::new(TrivialConverter))
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// The per-unit rate this constraint charges for trading `resource`.
    pub fn convert(&self, resource: &Resource) -> f64 {
        self.converter.convert(resource)
    }
}

impl std::fmt::Debug for CapacityConstraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CapacityConstraint")
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}
