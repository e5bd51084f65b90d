//! Grid toolbar: location, search field, active filter chips and the filter menu.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::chip::Chip;
use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/grid/grid.module.css");

/// Toolbar above the table.
#[component]
pub fn Toolbar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let grid = ctx.grid;

    let (menu_open, set_menu_open) = signal(false);

    let location = Signal::derive(move || grid.session.with(|s| s.current_path().to_string()));
    let active = Signal::derive(move || grid.session.with(|s| s.active_filters().to_vec()));
    let available = Signal::derive(move || grid.session.with(|s| s.available_filters()));

    let on_search = move |ev: leptos::ev::Event| {
        grid.set_name_search(&event_target_value(&ev));
    };

    view! {
        <div class=css::toolbar>
            <span class=css::location title="Current directory">{location}</span>

            <label class=css::search>
                <span class=css::searchIcon><Icon icon=ic::SEARCH /></span>
                <input type="search" placeholder="Search" on:input=on_search />
            </label>

            <div class=css::chips>
                <For
                    each=move || active.get()
                    key=|kind| *kind
                    children=move |kind| view! { <Chip kind=kind /> }
                />
            </div>

            // Filter menu (only lists filters not already shown)
            <div class=css::menuAnchor>
                <button
                    class=css::filterButton
                    aria-label="filter"
                    disabled=move || available.get().is_empty()
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    <Icon icon=ic::FILTER />
                </button>
                <Show when=move || menu_open.get() && !available.get().is_empty()>
                    <ul class=css::menu role="menu">
                        <For
                            each=move || available.get()
                            key=|kind| *kind
                            children=move |kind| {
                                let title = kind.chip().map(|c| c.title).unwrap_or_default();
                                view! {
                                    <li
                                        class=css::menuItem
                                        role="menuitem"
                                        on:click=move |_| {
                                            grid.add_filter(kind);
                                            set_menu_open.set(false);
                                        }
                                    >
                                        {title}
                                    </li>
                                }
                            }
                        />
                    </ul>
                </Show>
            </div>
        </div>
    }
}
