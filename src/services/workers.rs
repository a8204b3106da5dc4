use std::borrow::Cow;

use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use serde::Deserialize;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use super::non_empty;
use crate::entities::worker::{self, ServiceCategory, WorkerStatus};
use crate::error::{AppError, AppResult};

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct RegisterWorkerRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 32))]
    pub phone: String,
    #[validate(length(min = 1, max = 255))]
    pub email: String,
    #[validate(custom(function = "validate_service"))]
    pub service: String,
    #[validate(length(min = 1, max = 255))]
    pub location: String,
    #[validate(length(min = 1, message = "is required"))]
    pub full_address: String,
    #[validate(custom(function = "validate_pincode"))]
    pub pincode: String,
    #[validate(length(max = 255))]
    pub experience: Option<String>,
    #[validate(
        required(message = "is required"),
        range(exclusive_min = 0.0, message = "must be a positive number")
    )]
    pub per_day_charges: Option<f64>,
    pub description: Option<String>,
}

/// Exactly six ASCII digits.
pub fn is_valid_pincode(pincode: &str) -> bool {
    pincode.len() == 6 && pincode.bytes().all(|b| b.is_ascii_digit())
}

fn validate_pincode(pincode: &str) -> Result<(), ValidationError> {
    if is_valid_pincode(pincode) {
        Ok(())
    } else {
        Err(ValidationError::new("pincode").with_message(Cow::Borrowed("must be 6 digits")))
    }
}

fn validate_service(service: &str) -> Result<(), ValidationError> {
    service
        .parse::<ServiceCategory>()
        .map(|_| ())
        .map_err(|_| ValidationError::new("service").with_message(Cow::Borrowed("is not a known service")))
}

/// Register a worker in `pending` status. Nothing is written unless every
/// field passes validation.
pub async fn register_worker(
    db: &DatabaseConnection,
    payload: RegisterWorkerRequest,
) -> AppResult<Uuid> {
    payload.validate()?;

    let service: ServiceCategory = payload.service.parse().map_err(AppError::Validation)?;
    let per_day_charges = payload
        .per_day_charges
        .filter(|c| c.is_finite() && *c > 0.0)
        .ok_or_else(|| AppError::Validation("Per day charges must be a positive number".to_string()))?;

    let worker_id = Uuid::new_v4();
    let new_worker = worker::ActiveModel {
        id: Set(worker_id),
        name: Set(payload.name),
        phone: Set(payload.phone),
        email: Set(payload.email),
        service: Set(service),
        location: Set(payload.location),
        full_address: Set(payload.full_address),
        pincode: Set(payload.pincode),
        experience: Set(non_empty(payload.experience)),
        per_day_charges: Set(per_day_charges),
        description: Set(non_empty(payload.description)),
        status: Set(WorkerStatus::Pending),
        created_at: Set(Utc::now().into()),
    };

    let worker = new_worker.insert(db).await?;

    tracing::info!(worker_id = %worker.id, service = %worker.service, pincode = %worker.pincode, "Worker registered");
    Ok(worker.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ravi() -> RegisterWorkerRequest {
        RegisterWorkerRequest {
            name: "Ravi".into(),
            phone: "9999999999".into(),
            email: "ravi@x.com".into(),
            service: "plumber".into(),
            location: "Pune".into(),
            full_address: "12 MG Road, Pune".into(),
            pincode: "411001".into(),
            experience: None,
            per_day_charges: Some(500.0),
            description: None,
        }
    }

    #[test]
    fn pincode_must_be_six_ascii_digits() {
        assert!(is_valid_pincode("411001"));
        assert!(!is_valid_pincode("1234"));
        assert!(!is_valid_pincode("12345a"));
        assert!(!is_valid_pincode("4110011"));
        assert!(!is_valid_pincode("४११००१"));
    }

    #[test]
    fn complete_request_validates() {
        assert!(ravi().validate().is_ok());
    }

    #[test]
    fn bad_pincode_fails_validation() {
        let request = RegisterWorkerRequest {
            pincode: "12345a".into(),
            ..ravi()
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn non_positive_charges_fail_validation() {
        for charges in [0.0, -1.0] {
            let request = RegisterWorkerRequest {
                per_day_charges: Some(charges),
                ..ravi()
            };
            assert!(request.validate().is_err(), "{} should be rejected", charges);
        }
    }

    #[test]
    fn missing_charges_fail_validation() {
        let request = RegisterWorkerRequest {
            per_day_charges: None,
            ..ravi()
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn unknown_service_fails_validation() {
        let request = RegisterWorkerRequest {
            service: "astrologer".into(),
            ..ravi()
        };
        assert!(request.validate().is_err());
    }
}
