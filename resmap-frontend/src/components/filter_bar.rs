use leptos::*;

use resmap_core::{AppState, Msg};

use crate::Controller;

#[component]
pub fn FilterBar(controller: Controller) -> impl IntoView {
    let search_input = create_memo(move |_| controller.with(|s| s.search_input().to_owned()));
    let category = create_memo(move |_| controller.with(|s| s.filter().category.clone()));
    let categories = create_memo(move |_| controller.with(AppState::categories));

    view! {
      <div class="filter-bar">
        <input
          type="search"
          class="search-input"
          placeholder="Search by name or address"
          prop:value=move || search_input.get()
          on:input=move |ev| controller.dispatch(Msg::SearchInput(event_target_value(&ev)))
          on:keyup=move |ev| {
            ev.stop_propagation();
            if ev.key() == "Enter" {
              controller.dispatch(Msg::SearchSubmitted);
            }
          }
        />
        <button on:click=move |_| controller.dispatch(Msg::SearchSubmitted)>"Search"</button>
        <select
          class="category-select"
          prop:value=move || category.get()
          on:change=move |ev| controller.dispatch(Msg::CategorySelected(event_target_value(&ev)))
        >
          <option value="">"All categories"</option>
          <For
            each=move || categories.get()
            key=|category| category.clone()
            let:category
          >
            <option value=category.clone()>{ category }</option>
          </For>
        </select>
        <button on:click=move |_| controller.dispatch(Msg::ClearFilters)>"Clear filters"</button>
        <button title="Show my location" on:click=move |_| controller.dispatch(Msg::Locate)>"Locate me"</button>
        <button class="primary" on:click=move |_| controller.dispatch(Msg::OpenAddResource(None))>
          "Add resource"
        </button>
      </div>
    }
}

#[component]
pub fn ResultCount(controller: Controller) -> impl IntoView {
    let count = create_memo(move |_| controller.with(AppState::result_count));
    move || {
        count.get().map(|n| {
            let noun = if n == 1 { "result" } else { "results" };
            view! { <p class="result-count">{ format!("{n} {noun}") }</p> }
        })
    }
}
