use phonenumber::country;
use roster_model::CountryCode;

/// Inputs a validator needs besides the cell itself.
#[derive(Debug, Clone)]
pub struct ValidationContext {
    country: CountryCode,
    region: Option<country::Id>,
}

impl ValidationContext {
    pub fn new(country: CountryCode) -> Self {
        let region = country.as_str().parse::<country::Id>().ok();
        if region.is_none() {
            tracing::debug!(
                country = %country,
                "no phone metadata for country, only international numbers will validate"
            );
        }
        Self { country, region }
    }

    pub fn country(&self) -> &CountryCode {
        &self.country
    }

    /// Phone numbering region for national-format numbers.
    pub(crate) fn phone_region(&self) -> Option<country::Id> {
        self.region
    }
}
