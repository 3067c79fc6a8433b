use derive_more::{Display, From};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Display, From)]
pub enum Error {
    #[from]
    Io(std::io::Error),

    #[display("Repository search failed: {msg}")]
    RepositorySearch { msg: String },

    #[display("Report generation failed: {msg}")]
    ReportGeneration { msg: String },

    #[display("Invalid input: {msg}")]
    InputCoercion { msg: String },

    #[display("Configuration error: {msg}")]
    Config { msg: String },
}

impl std::error::Error for Error {}

// Every failure is fatal to the request; only the message differs.
impl axum::response::IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let message = match &self {
            Error::RepositorySearch { msg } => {
                // Upstream bodies may echo the query or rate-limit details
                tracing::error!("Repository search failed: {}", msg);
                "Repository search failed".to_string()
            }
            Error::ReportGeneration { msg } => {
                tracing::error!("Report generation failed: {}", msg);
                "Report generation failed".to_string()
            }
            Error::InputCoercion { msg } => {
                // Safe to expose - describes the caller's own input
                tracing::warn!("Rejected request input: {}", msg);
                format!("Invalid input: {}", msg)
            }
            Error::Io(e) => {
                tracing::error!("IO error: {}", e);
                "Internal server error".to_string()
            }
            Error::Config { msg } => {
                tracing::error!("Configuration error: {}", msg);
                "Configuration error".to_string()
            }
        };

        let body = axum::Json(serde_json::json!({
            "error": message,
        }));

        (axum::http::StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
