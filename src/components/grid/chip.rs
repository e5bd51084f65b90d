//! Filter chip with an inline input.
//!
//! Supports numeric (KB) and dropdown inputs. Removing the chip clears its
//! value from the query.

use leptos::prelude::*;
use leptos_icons::Icon;

use dirgrid_core::models::{ChipInput, EntryKind, FilterKind, FilterValue};

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/grid/grid.module.css");

#[component]
pub fn Chip(kind: FilterKind) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let grid = ctx.grid;

    let Some(chip) = kind.chip() else {
        return ().into_any();
    };

    let input = match chip.input {
        ChipInput::Number => view! {
            <input
                class=css::chipInput
                type="number"
                aria-label=chip.title
                on:input=move |ev| grid.set_size_input(kind, &event_target_value(&ev))
            />
        }
        .into_any(),
        ChipInput::Dropdown(choices) => view! {
            <select
                class=css::chipInput
                aria-label=chip.title
                on:change=move |ev| {
                    let selected = event_target_value(&ev).parse::<EntryKind>().ok();
                    grid.set_filter_value(FilterValue::TypeEquals(selected));
                }
            >
                <option value="">""</option>
                {choices
                    .iter()
                    .map(|choice| view! { <option value=choice.as_str()>{choice.as_str()}</option> })
                    .collect_view()}
            </select>
        }
        .into_any(),
    };

    view! {
        <span class=css::chip>
            <span class=css::chipLabel>{chip.title}</span>
            {input}
            <button
                class=css::chipClose
                aria-label="Remove filter"
                on:click=move |_| grid.remove_filter(kind)
            >
                <Icon icon=ic::CLOSE />
            </button>
        </span>
    }
    .into_any()
}
