//! Main grid component.

use leptos::prelude::*;

use super::pager::Pager;
use super::status::StatusLine;
use super::table::GridTable;
use super::toolbar::Toolbar;

stylance::import_crate_style!(css, "src/components/grid/grid.module.css");

/// Paginated, filterable directory grid.
#[component]
pub fn DataGrid() -> impl IntoView {
    view! {
        <section class=css::grid>
            <Toolbar />
            <div class=css::tableContainer>
                <GridTable />
                <StatusLine />
            </div>
            <Pager />
        </section>
    }
}
