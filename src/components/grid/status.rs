//! Status line under the table: empty result, loading and error messages.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::utils::format::error_message;

stylance::import_crate_style!(css, "src/components/grid/grid.module.css");

#[component]
pub fn StatusLine() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let grid = ctx.grid;

    let loading = Signal::derive(move || grid.listing.with(|l| l.is_loading()));
    let empty = Signal::derive(move || grid.row_count() == 0);
    let error = Signal::derive(move || grid.listing.with(|l| l.error().map(|e| e.to_string())));

    view! {
        <Show when=move || empty.get() || loading.get() || error.with(Option::is_some)>
            <div class=css::status role="status">
                <Show when=move || empty.get() && !loading.get()>
                    <p>"No results found...."</p>
                </Show>
                <Show when=move || loading.get()>
                    <span class=css::spinner><Icon icon=ic::LOADING /></span>
                    <p>"Loading....."</p>
                </Show>
                {move || error.get().map(|message| view! {
                    <p class=css::error>{error_message(&message)}</p>
                })}
            </div>
        </Show>
    }
}
