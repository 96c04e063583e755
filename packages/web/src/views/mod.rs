mod protected;
pub use protected::Protected;

mod login;
pub use login::Login;

mod signup;
pub use signup::Signup;

mod notes;
pub use notes::Notes;

mod edit_note;
pub use edit_note::EditNote;

mod not_found;
pub use not_found::NotFound;
