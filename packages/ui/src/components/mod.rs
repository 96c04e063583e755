mod error_alert;
pub use error_alert::ErrorAlert;

mod note_skeleton;
pub use note_skeleton::NoteSkeleton;

mod spinner;
pub use spinner::Spinner;

mod toast;
pub use toast::{use_toast, ToastOptions, ToastProvider};
