//! Client side of the two HR forms: form state containers and the HTTP
//! transport that talks to this server's `/api` routes.

pub mod form_state;
pub mod transport;

pub use form_state::{FormState, SubmissionOutcome, SubmissionStatus, SubmitError, SubmitForm};
pub use transport::{ApiClient, ClientError, GeneratedPdf, OfferLetterOutcome};

/// Shown when a request fails before any response envelope is received.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";
