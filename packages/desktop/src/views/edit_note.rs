use dioxus::prelude::*;
use crate::Route;

#[component]
pub fn EditNote(id: String) -> Element {
    let nav = use_navigator();

    let navigate_notes = move |_: ()| {
        nav.push(Route::Notes {});
    };

    rsx! {
        ui::views::EditNoteView {
            note_id: id,
            on_navigate_notes: navigate_notes,
        }
    }
}
