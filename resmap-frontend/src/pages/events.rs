use leptos::*;

use resmap_core::{AppState, Msg};

use crate::{components::EventPanel, Controller};

#[component]
pub fn UpcomingEvents(controller: Controller) -> impl IntoView {
    let days = controller.with_untracked(|s| s.config().upcoming_event_days);
    let events = create_memo(move |_| controller.with(AppState::upcoming_events));

    controller.dispatch(Msg::LoadUpcomingEvents);

    view! {
      <section class="upcoming-events">
        <h1>{ format!("Events in the next {days} days") }</h1>
        <EventPanel events />
      </section>
    }
}
