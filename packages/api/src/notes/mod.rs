//! Notes flows: the authenticated [`Notebook`] service and the list view's
//! [`NotesBoard`] state.

mod board;
mod notebook;

pub use board::{BoardView, Listing, NotesBoard, RowState};
pub use notebook::{Notebook, Refreshed};
