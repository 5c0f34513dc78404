//! Dashboard error types

use thiserror::Error;

/// Errors raised by the dashboard layer
///
/// Missing KPI data is not an error; it surfaces as `ViewModel::Empty`.
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Selection referred to an id outside the catalog
    #[error("Unknown integration: {0}")]
    UnknownIntegration(String),

    /// The catalog has no entries to select from
    #[error("Integration catalog is empty")]
    EmptyCatalog,

    /// Rendering the view as JSON failed
    #[error("Render error: {0}")]
    Render(#[from] serde_json::Error),
}

/// Result type alias for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DashboardError::UnknownIntegration("pipedrive".to_string());
        assert_eq!(err.to_string(), "Unknown integration: pipedrive");

        assert_eq!(
            DashboardError::EmptyCatalog.to_string(),
            "Integration catalog is empty"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: DashboardError = json_err.into();
        assert!(matches!(err, DashboardError::Render(_)));
        assert!(err.to_string().starts_with("Render error: "));
    }
}
