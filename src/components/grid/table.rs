//! Grid table: header and the rows of the current page.

use leptos::prelude::*;
use leptos_icons::Icon;

use dirgrid_core::models::{DisplayRow, EntryKind};

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::utils::format::{name_cell, path_cell, size_cell, type_cell};

stylance::import_crate_style!(css, "src/components/grid/grid.module.css");

#[component]
pub fn GridTable() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let grid = ctx.grid;

    // Hidden while loading; an empty subdirectory still shows its up-row
    let show_rows = Signal::derive(move || {
        grid.listing
            .with(|l| !l.is_loading() && grid.session.with(|s| s.has_visible_rows(l.page())))
    });

    view! {
        <table class=css::table>
            <thead>
                <tr>
                    <th>"Path"</th>
                    <th class=css::alignRight>"Name"</th>
                    <th class=css::alignRight>"Type"</th>
                    <th class=css::alignRight>"Size"</th>
                </tr>
            </thead>
            <tbody>
                <Show when=move || show_rows.get()>
                    <For
                        each=move || grid.rows()
                        key=|row| row.key()
                        children=move |row| view! { <GridRow row=row /> }
                    />
                </Show>
            </tbody>
        </table>
    }
}

#[component]
fn GridRow(row: DisplayRow) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let grid = ctx.grid;

    let icon = match &row {
        DisplayRow::UpDir { .. } => Some(ic::UP_DIR),
        DisplayRow::Entry(entry) if entry.kind == EntryKind::Directory => Some(ic::ENTER_DIR),
        DisplayRow::Entry(_) => None,
    };
    let disabled = !row.is_navigable();
    let (path, name, kind, size) = (path_cell(&row), name_cell(&row), type_cell(&row), size_cell(&row));

    let on_click = move |_: leptos::ev::MouseEvent| grid.activate_row(&row);

    view! {
        <tr>
            <th scope="row">
                <button class=css::pathButton disabled=disabled on:click=on_click>
                    {icon.map(|icon| view! { <span class=css::pathIcon><Icon icon=icon /></span> })}
                    {path}
                </button>
            </th>
            <td class=css::alignRight>{name}</td>
            <td class=css::alignRight>{kind}</td>
            <td class=css::alignRight>{size}</td>
        </tr>
    }
}
