use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown country code '{0}'")]
pub struct UnknownCountry(pub String);

/// Country codes as they appear in the `region` field of Eurostat
/// life-expectancy exports. Greece is `EL`, not the ISO `GR`.
///
/// Filtering and output naming only ever look at [`Country::code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Country {
    Albania,
    Armenia,
    Austria,
    Azerbaijan,
    Belgium,
    Bulgaria,
    Belarus,
    Switzerland,
    Cyprus,
    Czechia,
    Germany,
    Denmark,
    Estonia,
    Greece,
    Spain,
    Finland,
    France,
    Georgia,
    Croatia,
    Hungary,
    Ireland,
    Iceland,
    Italy,
    Liechtenstein,
    Lithuania,
    Luxembourg,
    Latvia,
    Moldova,
    Montenegro,
    NorthMacedonia,
    Malta,
    Netherlands,
    Norway,
    Poland,
    Portugal,
    Romania,
    Serbia,
    Sweden,
    Slovenia,
    Slovakia,
    Turkey,
    Ukraine,
    UnitedKingdom,
    Kosovo,
}

impl Country {
    pub const ALL: [Country; 44] = [
        Country::Albania,
        Country::Armenia,
        Country::Austria,
        Country::Azerbaijan,
        Country::Belgium,
        Country::Bulgaria,
        Country::Belarus,
        Country::Switzerland,
        Country::Cyprus,
        Country::Czechia,
        Country::Germany,
        Country::Denmark,
        Country::Estonia,
        Country::Greece,
        Country::Spain,
        Country::Finland,
        Country::France,
        Country::Georgia,
        Country::Croatia,
        Country::Hungary,
        Country::Ireland,
        Country::Iceland,
        Country::Italy,
        Country::Liechtenstein,
        Country::Lithuania,
        Country::Luxembourg,
        Country::Latvia,
        Country::Moldova,
        Country::Montenegro,
        Country::NorthMacedonia,
        Country::Malta,
        Country::Netherlands,
        Country::Norway,
        Country::Poland,
        Country::Portugal,
        Country::Romania,
        Country::Serbia,
        Country::Sweden,
        Country::Slovenia,
        Country::Slovakia,
        Country::Turkey,
        Country::Ukraine,
        Country::UnitedKingdom,
        Country::Kosovo,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Country::Albania => "AL",
            Country::Armenia => "AM",
            Country::Austria => "AT",
            Country::Azerbaijan => "AZ",
            Country::Belgium => "BE",
            Country::Bulgaria => "BG",
            Country::Belarus => "BY",
            Country::Switzerland => "CH",
            Country::Cyprus => "CY",
            Country::Czechia => "CZ",
            Country::Germany => "DE",
            Country::Denmark => "DK",
            Country::Estonia => "EE",
            Country::Greece => "EL",
            Country::Spain => "ES",
            Country::Finland => "FI",
            Country::France => "FR",
            Country::Georgia => "GE",
            Country::Croatia => "HR",
            Country::Hungary => "HU",
            Country::Ireland => "IE",
            Country::Iceland => "IS",
            Country::Italy => "IT",
            Country::Liechtenstein => "LI",
            Country::Lithuania => "LT",
            Country::Luxembourg => "LU",
            Country::Latvia => "LV",
            Country::Moldova => "MD",
            Country::Montenegro => "ME",
            Country::NorthMacedonia => "MK",
            Country::Malta => "MT",
            Country::Netherlands => "NL",
            Country::Norway => "NO",
            Country::Poland => "PL",
            Country::Portugal => "PT",
            Country::Romania => "RO",
            Country::Serbia => "RS",
            Country::Sweden => "SE",
            Country::Slovenia => "SI",
            Country::Slovakia => "SK",
            Country::Turkey => "TR",
            Country::Ukraine => "UA",
            Country::UnitedKingdom => "UK",
            Country::Kosovo => "XK",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|country| country.code() == code)
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Country {
    type Err = UnknownCountry;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| UnknownCountry(s.to_string()))
    }
}

impl TryFrom<&str> for Country {
    type Error = UnknownCountry;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}
