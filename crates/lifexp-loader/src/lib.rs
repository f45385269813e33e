pub mod errors;
pub mod formats;
pub mod model;
mod registry;

pub use errors::LoaderError;
pub use model::{
    LifeExpectancyRecord, AGE, CANONICAL_COLUMNS, METADATA_COLUMNS, REGION, SEX, UNIT, VALUE,
    YEAR,
};
pub use registry::{load_table, DataLoader, LoaderRegistry};
