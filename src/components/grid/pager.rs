//! Pager: row range label with previous/next buttons. Page size is fixed.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::utils::format::page_label;

stylance::import_crate_style!(css, "src/components/grid/grid.module.css");

#[component]
pub fn Pager() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let grid = ctx.grid;

    let row_count = Memo::new(move |_| grid.row_count());
    let page = Signal::derive(move || grid.session.with(|s| s.page()));
    let label = Signal::derive(move || {
        let count = row_count.get();
        grid.session.with(|s| page_label(s.page_window(count), count))
    });
    let has_previous = Signal::derive(move || grid.session.with(|s| s.has_previous_page()));
    let has_next = Signal::derive(move || {
        let count = row_count.get();
        grid.session.with(|s| s.has_next_page(count))
    });

    view! {
        <nav class=css::pager aria-label="pagination">
            <span class=css::pagerLabel>{label}</span>
            <button
                class=css::pagerButton
                aria-label="Previous page"
                disabled=move || !has_previous.get()
                on:click=move |_| grid.set_page(page.get_untracked().saturating_sub(1))
            >
                <Icon icon=ic::CHEVRON_LEFT />
            </button>
            <button
                class=css::pagerButton
                aria-label="Next page"
                disabled=move || !has_next.get()
                on:click=move |_| grid.set_page(page.get_untracked() + 1)
            >
                <Icon icon=ic::CHEVRON_RIGHT />
            </button>
        </nav>
    }
}
