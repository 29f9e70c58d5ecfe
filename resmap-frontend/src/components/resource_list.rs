use leptos::*;

use resmap_core::{
    view::{ListView, ResourceCard},
    AppState, Msg,
};

use crate::{Controller, Stars};

#[component]
pub fn ResourceList(controller: Controller) -> impl IntoView {
    let list = create_memo(move |_| controller.with(AppState::list_view));
    let refreshing = create_memo(move |_| controller.with(AppState::is_refreshing));

    view! {
      <div class="resource-list" class:refreshing=move || refreshing.get()>
        { move || match list.get() {
            ListView::Cards(cards) => view! {
              <ul>
                { cards.into_iter().map(|card| view! { <ResourceCardItem card controller /> }).collect_view() }
              </ul>
            }.into_view(),
            placeholder => view! {
              <p class="placeholder">{ placeholder.placeholder() }</p>
            }.into_view(),
          }
        }
      </div>
    }
}

#[component]
fn ResourceCardItem(card: ResourceCard, controller: Controller) -> impl IntoView {
    let ResourceCard {
        id,
        name,
        category,
        address,
        verified,
        rating,
        position,
    } = card;

    let on_card_click = {
        let id = id.clone();
        move |_: ev::MouseEvent| controller.dispatch(Msg::CardClicked(id.clone()))
    };
    let action = move |msg: fn(String) -> Msg| {
        let id = id.clone();
        move |ev: ev::MouseEvent| {
            ev.stop_propagation();
            controller.dispatch(msg(id.clone()));
        }
    };

    view! {
      <li class="resource-card" class:unmappable=position.is_none() on:click=on_card_click>
        <div class="resource-card-title">
          <strong>{ name }</strong>
          { verified.then(|| view! { <span class="badge verified">"Verified"</span> }) }
        </div>
        <div class="resource-card-category">{ category }</div>
        { address.map(|address| view! { <div class="resource-card-address">{ address }</div> }) }
        { rating.map(|rating| view! { <Stars rating /> }) }
        <div class="resource-card-actions">
          <button on:click=action(Msg::OpenReviews)>"Reviews"</button>
          <button on:click=action(Msg::OpenEvents)>"Events"</button>
          <button on:click=action(Msg::Verify)>"Verify"</button>
          <button class="danger" on:click=action(Msg::Delete)>"Delete"</button>
        </div>
      </li>
    }
}
