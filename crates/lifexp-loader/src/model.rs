use serde::{Deserialize, Serialize};

pub const UNIT: &str = "unit";
pub const SEX: &str = "sex";
pub const AGE: &str = "age";
pub const REGION: &str = "region";
pub const YEAR: &str = "year";
pub const VALUE: &str = "value";

/// Column order of a canonical long-format table.
pub const CANONICAL_COLUMNS: [&str; 6] = [UNIT, SEX, AGE, REGION, YEAR, VALUE];

/// The four metadata fields packed into the composed key of the wide layout.
pub const METADATA_COLUMNS: [&str; 4] = [UNIT, SEX, AGE, REGION];

/// One cleaned observation. Field order matches [`CANONICAL_COLUMNS`], which is
/// also the header order serde produces when writing CSV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifeExpectancyRecord {
    pub unit: String,
    pub sex: String,
    pub age: String,
    pub region: String,
    pub year: i64,
    pub value: f64,
}

impl LifeExpectancyRecord {
    pub fn new(
        unit: impl Into<String>,
        sex: impl Into<String>,
        age: impl Into<String>,
        region: impl Into<String>,
        year: i64,
        value: f64,
    ) -> Self {
        Self {
            unit: unit.into(),
            sex: sex.into(),
            age: age.into(),
            region: region.into(),
            year,
            value,
        }
    }
}
