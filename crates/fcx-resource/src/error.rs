use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("cannot extract {want} from a resource holding {have}")]
    ExtractExceedsInventory { want: f64, have: f64 },

    #[error("composition has no nuclides")]
    EmptyComposition,

    #[error("nuclide {nuclide} has non-positive fraction {fraction}")]
    NonPositiveFraction { nuclide: u32, fraction: f64 },

    #[error("negative resource quantity {0}")]
    NegativeQuantity(f64),

    #[error("cannot absorb a {got} into a {have}")]
    KindMismatch {
        have: &'static str,
        got: &'static str,
    },
}

pub type ResourceResult<T> = Result<T, ResourceError>;
