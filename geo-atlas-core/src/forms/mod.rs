//! Editable form state for the create/edit dialogs
//!
//! Forms hold the raw text the user typed. `to_request` validates presence of the
//! required fields and converts the text into a request body.

mod city;
mod country;
mod landmark;
mod parse;
mod region;

pub use city::CityForm;
pub use country::CountryForm;
pub use landmark::LandmarkForm;
pub use parse::{format_optional, non_blank, parse_nullable_int, parse_nullable_number};
pub use region::RegionForm;

use geo_atlas_client::Entity;

use crate::error::{CoreError, CoreResult};

/// A dialog form that produces a request for one collection.
pub trait EntityForm {
    type Target: Entity;

    /// Checks the required fields.
    fn validate(&self) -> CoreResult<()>;

    /// Validates and builds the request body.
    fn to_request(&self) -> CoreResult<<Self::Target as Entity>::Request>;
}

fn require(present: bool, field: &str) -> CoreResult<()> {
    if present {
        Ok(())
    } else {
        Err(CoreError::Validation(format!("{field} is required")))
    }
}
