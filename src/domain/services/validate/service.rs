//! Service validator

use super::{not_in_future, ValidationContext};
use crate::domain::entities::Service;
use crate::error::ValidationErrors;

pub fn validate_service(service: &Service, ctx: &ValidationContext) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    not_in_future(&mut errors, "service_date", service.service_date, ctx);
    errors
}
