mod protected_layout;
pub use protected_layout::ProtectedLayoutView;

mod login;
pub use login::LoginView;

mod signup;
pub use signup::SignupView;

mod notes;
pub use notes::NotesView;

mod edit_note;
pub use edit_note::EditNoteView;

mod not_found;
pub use not_found::NotFoundView;
