use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// 1-indexed page number
    #[serde(default = "default_page")]
    pub page: u32,
}

fn default_page() -> u32 {
    1
}

impl PageParams {
    pub fn validate(&self) -> Result<(), String> {
        if self.page < 1 {
            return Err("page must be >= 1".to_string());
        }
        Ok(())
    }
}

/// Shared rule for latitude fields, in decimal degrees.
pub(crate) fn validate_latitude(latitude: f64) -> Result<(), validator::ValidationError> {
    if latitude.is_finite() && latitude.abs() <= 90.0 {
        Ok(())
    } else {
        let mut error = validator::ValidationError::new("invalid_latitude");
        error.message = Some("Latitude must be between -90 and 90".into());
        Err(error)
    }
}

/// Shared rule for longitude fields, in decimal degrees.
pub(crate) fn validate_longitude(longitude: f64) -> Result<(), validator::ValidationError> {
    if longitude.is_finite() && longitude.abs() <= 180.0 {
        Ok(())
    } else {
        let mut error = validator::ValidationError::new("invalid_longitude");
        error.message = Some("Longitude must be between -180 and 180".into());
        Err(error)
    }
}
