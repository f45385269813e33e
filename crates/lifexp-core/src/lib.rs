pub mod cleaning;
pub mod country;
pub mod error;
pub mod filter;
pub mod normalize;
pub mod outputs;
pub mod pipeline;

pub use country::{Country, UnknownCountry};
pub use error::{PipelineError, Result, Stage};
pub use pipeline::{clean_data, run, run_with};
