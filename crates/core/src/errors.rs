use thiserror::Error;

use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::domain::FaceShape;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ClassificationError {
    #[error("landmark set has {found} points but at least {required} are required")]
    MissingLandmarks { required: usize, found: usize },
    #[error("degenerate face geometry: {measurement} is {value}, ratios would be undefined")]
    DegenerateGeometry { measurement: &'static str, value: f64 },
    #[error("measurement {measurement} must be a finite non-negative number, got {value}")]
    InvalidMeasurement { measurement: &'static str, value: f64 },
    #[error("precomputed confidence {0} is outside 0..=100")]
    InvalidConfidence(f64),
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RecommendationError {
    #[error("no suitable hairstyles found for the {shape} face shape")]
    NoSuitableStyles { shape: FaceShape },
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum DomainError {
    #[error(transparent)]
    Classification(#[from] ClassificationError),
    #[error(transparent)]
    Recommendation(#[from] RecommendationError),
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("catalog failure: {0}")]
    Catalog(String),
    #[error("configuration failure: {0}")]
    Configuration(String),
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InterfaceError {
    #[error("bad request: {message}")]
    BadRequest { message: String, correlation_id: String },
    #[error("not found: {message}")]
    NotFound { message: String, correlation_id: String },
    #[error("internal error: {message}")]
    Internal { message: String, correlation_id: String },
}

impl InterfaceError {
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::BadRequest { .. } => {
                "The face could not be analyzed. Try a clearer, front-facing photo."
            }
            Self::NotFound { .. } => "No hairstyles in the catalog match this face shape yet.",
            Self::Internal { .. } => "An unexpected internal error occurred.",
        }
    }
}

impl ApplicationError {
    pub fn into_interface(self, correlation_id: impl Into<String>) -> InterfaceError {
        let correlation_id = correlation_id.into();
        let mut mapped = InterfaceError::from(self);
        match &mut mapped {
            InterfaceError::BadRequest { correlation_id: id, .. }
            | InterfaceError::NotFound { correlation_id: id, .. }
            | InterfaceError::Internal { correlation_id: id, .. } => *id = correlation_id,
        }
        mapped
    }
}

impl From<ApplicationError> for InterfaceError {
    fn from(value: ApplicationError) -> Self {
        let unassigned = || "unassigned".to_owned();
        match value {
            ApplicationError::Domain(DomainError::Recommendation(error)) => {
                Self::NotFound { message: error.to_string(), correlation_id: unassigned() }
            }
            ApplicationError::Domain(error) => {
                Self::BadRequest { message: error.to_string(), correlation_id: unassigned() }
            }
            ApplicationError::Catalog(message) | ApplicationError::Configuration(message) => {
                Self::Internal { message, correlation_id: unassigned() }
            }
        }
    }
}

impl From<ClassificationError> for ApplicationError {
    fn from(value: ClassificationError) -> Self {
        Self::Domain(value.into())
    }
}

impl From<RecommendationError> for ApplicationError {
    fn from(value: RecommendationError) -> Self {
        Self::Domain(value.into())
    }
}

impl From<CatalogError> for ApplicationError {
    fn from(value: CatalogError) -> Self {
        Self::Catalog(value.to_string())
    }
}

impl From<ConfigError> for ApplicationError {
    fn from(value: ConfigError) -> Self {
        Self::Configuration(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::FaceShape;
    use crate::errors::{
        ApplicationError, ClassificationError, InterfaceError, RecommendationError,
    };

    #[test]
    fn classification_error_maps_to_bad_request() {
        let interface = ApplicationError::from(ClassificationError::MissingLandmarks {
            required: 366,
            found: 12,
        })
        .into_interface("req-1");

        assert!(matches!(
            interface,
            InterfaceError::BadRequest {
                ref correlation_id,
                ..
            } if correlation_id == "req-1"
        ));
        assert_eq!(
            interface.user_message(),
            "The face could not be analyzed. Try a clearer, front-facing photo."
        );
    }

    #[test]
    fn empty_catalog_match_maps_to_not_found() {
        let interface =
            ApplicationError::from(RecommendationError::NoSuitableStyles {
                shape: FaceShape::Diamond,
            })
            .into_interface("req-2");

        assert!(matches!(
            interface,
            InterfaceError::NotFound { ref message, .. } if message.contains("diamond")
        ));
    }

    #[test]
    fn configuration_error_maps_to_internal() {
        let interface = ApplicationError::Configuration("free_limit out of range".to_owned())
            .into_interface("req-3");

        assert!(matches!(interface, InterfaceError::Internal { .. }));
        assert_eq!(interface.user_message(), "An unexpected internal error occurred.");
    }
}
