//! `fcx-resource` — typed resources traded through the exchange.
//!
//! Two concrete resource kinds exist:
//!
//! | Kind         | Carries                          | Typical use            |
//! |--------------|----------------------------------|------------------------|
//! | [`Material`] | isotopic [`Composition`] + mass  | fuel, separated streams|
//! | [`Product`]  | opaque quality label + quantity  | power, swu, services   |
//!
//! The exchange core only consumes quantity arithmetic ([`Resource::quantity`],
//! [`Resource::split`]); compositions ride along unchanged so facilities can
//! inspect what they received.

pub mod composition;
pub mod error;
pub mod material;
pub mod product;
pub mod resource;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use composition::{Basis, Composition, Nuclide};
pub use error::{ResourceError, ResourceResult};
pub use material::Material;
pub use product::Product;
pub use resource::Resource;
