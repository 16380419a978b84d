pub mod credentials;
pub mod event;
pub mod failure;
pub mod field;
pub mod form_state;
pub mod mode;

// Re-export commonly used types
pub use credentials::Credentials;
pub use event::ScreenEvent;
pub use failure::SubmissionFailure;
pub use field::FieldKey;
pub use form_state::{FieldUpdate, FormState};
pub use mode::Mode;
