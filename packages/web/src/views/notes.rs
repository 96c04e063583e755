use api::NoteId;
use dioxus::prelude::*;
use crate::Route;

#[component]
pub fn Notes() -> Element {
    let nav = use_navigator();

    let navigate_edit = move |id: NoteId| {
        nav.push(Route::EditNote { id: id.to_string() });
    };

    rsx! {
        ui::views::NotesView { on_edit_note: navigate_edit }
    }
}
