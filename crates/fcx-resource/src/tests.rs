//! Unit tests for the resource model.

use crate::{Basis, Composition, Material, Nuclide, Product, Resource, ResourceError};

const U235: Nuclide = Nuclide(922350000);
const U238: Nuclide = Nuclide(922380000);

fn leu() -> Composition {
    // 4% enriched uranium by mass.
    Composition::new(Basis::Mass, vec![(U235, 0.04), (U238, 0.96)]).unwrap()
}

#[cfg(test)]
mod composition {
    use super::*;

    #[test]
    fn normalizes_to_one() {
        let c = Composition::new(Basis::Mass, vec![(U235, 1.0), (U238, 3.0)]).unwrap();
        assert_eq!(c.fraction(U235), 0.25);
        assert_eq!(c.fraction(U238), 0.75);
    }

    #[test]
    fn duplicate_nuclides_summed() {
        let c = Composition::new(Basis::Atom, vec![(U235, 1.0), (U235, 1.0), (U238, 2.0)]).unwrap();
        assert_eq!(c.fraction(U235), 0.5);
    }

    #[test]
    fn entry_order_does_not_matter() {
        let a = Composition::new(Basis::Mass, vec![(U235, 0.04), (U238, 0.96)]).unwrap();
        let b = Composition::new(Basis::Mass, vec![(U238, 0.96), (U235, 0.04)]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn empty_rejected() {
        assert!(matches!(
            Composition::new(Basis::Mass, vec![]),
            Err(ResourceError::EmptyComposition)
        ));
    }

    #[test]
    fn non_positive_fraction_rejected() {
        let err = Composition::new(Basis::Mass, vec![(U235, -0.1)]).unwrap_err();
        assert!(matches!(err, ResourceError::NonPositiveFraction { .. }));
    }

    #[test]
    fn absent_nuclide_is_zero() {
        assert_eq!(leu().fraction(Nuclide(942390000)), 0.0);
    }
}

#[cfg(test)]
mod material {
    use super::*;

    #[test]
    fn extract_partial() {
        let mut m = Material::new(10.0, leu()).unwrap();
        let taken = m.extract(4.0).unwrap();
        assert_eq!(taken.quantity(), 4.0);
        assert_eq!(m.quantity(), 6.0);
        assert_eq!(taken.composition(), m.composition());
    }

    #[test]
    fn extract_whole_within_tolerance() {
        // Asking for a hair more than the inventory still drains it fully.
        let mut m = Material::new(1.0, leu()).unwrap();
        let taken = m.extract(1.0 + 1e-9).unwrap();
        assert_eq!(taken.quantity(), 1.0);
        assert_eq!(m.quantity(), 0.0);
    }

    #[test]
    fn extract_beyond_tolerance_fails() {
        let mut m = Material::new(1.0, leu()).unwrap();
        let err = m.extract(1.1).unwrap_err();
        assert!(matches!(err, ResourceError::ExtractExceedsInventory { .. }));
        assert_eq!(m.quantity(), 1.0, "failed extract must not mutate");
    }

    #[test]
    fn negative_quantity_rejected() {
        assert!(Material::new(-1.0, leu()).is_err());
    }

    #[test]
    fn absorb_mixes_by_mass() {
        let mut a = Material::new(1.0, Composition::single(Basis::Mass, U235)).unwrap();
        let b = Material::new(3.0, Composition::single(Basis::Mass, U238)).unwrap();
        a.absorb(b);
        assert_eq!(a.quantity(), 4.0);
        assert_eq!(a.composition().fraction(U235), 0.25);
        assert_eq!(a.composition().fraction(U238), 0.75);
    }

    #[test]
    fn absorb_into_empty_takes_other() {
        let mut a = Material::new(0.0, Composition::single(Basis::Mass, U238)).unwrap();
        let b = Material::new(2.0, leu()).unwrap();
        a.absorb(b.clone());
        assert_eq!(a, b);
    }

    #[test]
    fn absorb_empty_is_a_no_op() {
        let mut a = Material::new(2.0, leu()).unwrap();
        let before = a.clone();
        a.absorb(Material::new(0.0, Composition::single(Basis::Mass, U235)).unwrap());
        assert_eq!(a, before);
    }
}

#[cfg(test)]
mod product {
    use super::*;

    #[test]
    fn extract_and_quality() {
        let mut p = Product::new(100.0, "power").unwrap();
        let taken = p.extract(30.0).unwrap();
        assert_eq!(taken.quantity(), 30.0);
        assert_eq!(taken.quality(), "power");
        assert_eq!(p.quantity(), 70.0);
    }

    #[test]
    fn absorb_sums_and_keeps_quality() {
        let mut p = Product::new(2.0, "power").unwrap();
        p.absorb(Product::new(3.0, "heat").unwrap());
        assert_eq!(p.quantity(), 5.0);
        assert_eq!(p.quality(), "power");
    }

    #[test]
    fn absorb_into_empty_takes_other() {
        let mut p = Product::new(0.0, "power").unwrap();
        p.absorb(Product::new(3.0, "heat").unwrap());
        assert_eq!(p.quantity(), 3.0);
        assert_eq!(p.quality(), "heat");
    }
}

#[cfg(test)]
mod resource {
    use super::*;

    #[test]
    fn quantity_dispatches() {
        let m: Resource = Material::new(2.5, leu()).unwrap().into();
        let p: Resource = Product::new(7.0, "swu").unwrap().into();
        assert_eq!(m.quantity(), 2.5);
        assert_eq!(p.quantity(), 7.0);
    }

    #[test]
    fn split_preserves_kind() {
        let mut r: Resource = Material::new(5.0, leu()).unwrap().into();
        let taken = r.split(2.0).unwrap();
        assert!(matches!(taken, Resource::Material(_)));
        assert_eq!(r.quantity(), 3.0);
    }

    #[test]
    fn absorb_merges_same_kind() {
        let mut r: Resource = Material::new(1.0, Composition::single(Basis::Mass, U235))
            .unwrap()
            .into();
        let other: Resource = Material::new(3.0, Composition::single(Basis::Mass, U238))
            .unwrap()
            .into();
        r.absorb(other).unwrap();
        assert_eq!(r.quantity(), 4.0);
        let Resource::Material(m) = &r else {
            panic!("absorb changed the resource kind");
        };
        assert_eq!(m.composition().fraction(U238), 0.75);
    }

    #[test]
    fn absorb_rejects_mixed_kinds() {
        let mut r: Resource = Material::new(1.0, leu()).unwrap().into();
        let other: Resource = Product::new(1.0, "power").unwrap().into();
        assert!(!r.is_same_kind(&other));
        let err = r.absorb(other).unwrap_err();
        assert!(matches!(err, ResourceError::KindMismatch { .. }));
        assert_eq!(r.quantity(), 1.0, "failed absorb must not mutate");
    }
}
