use leptos::*;

use resmap_core::{
    form::{EventField, ResourceField, ReviewField},
    view::{EventView, PanelView, ReviewView},
    AppState, Dialog, Msg,
};

use super::form::{Modal, TextArea, TextField};
use crate::{Controller, Stars};

#[component]
pub fn Dialogs(controller: Controller) -> impl IntoView {
    let dialog = create_memo(move |_| controller.with(AppState::dialog));
    move || match dialog.get() {
        Some(Dialog::AddResource) => view! { <AddResourceDialog controller /> }.into_view(),
        Some(Dialog::Reviews) => view! { <ReviewsDialog controller /> }.into_view(),
        Some(Dialog::Events) => view! { <EventsDialog controller /> }.into_view(),
        None => ().into_view(),
    }
}

fn close(controller: Controller) -> Callback<()> {
    Callback::new(move |()| controller.dispatch(Msg::CloseDialog))
}

/// Title of a dialog that belongs to a single resource.
fn resource_title(
    controller: Controller,
    prefix: &'static str,
    active: fn(&AppState) -> Option<&str>,
) -> Signal<String> {
    create_memo(move |_| {
        controller.with(|s| {
            let name = active(s).and_then(|id| s.resource_name(id));
            name.map_or_else(|| prefix.to_owned(), |name| format!("{prefix}: {name}"))
        })
    })
    .into()
}

// -- add resource -- //

#[component]
fn AddResourceDialog(controller: Controller) -> impl IntoView {
    let field = move |label: &'static str, field: ResourceField| {
        let value = Signal::derive(move || controller.with(|s| s.resource_form().get(field).to_owned()));
        let on_input = Callback::new(move |v| controller.dispatch(Msg::EditResource(field, v)));
        view! { <TextField label value on_input /> }
    };
    let description = Signal::derive(move || {
        controller.with(|s| s.resource_form().get(ResourceField::Description).to_owned())
    });

    view! {
      <Modal
        title="Add resource".to_owned()
        on_close=close(controller)
        docked=Dialog::AddResource.keeps_map_interactive()
      >
        <form on:submit=move |ev| {
          ev.prevent_default();
          controller.dispatch(Msg::SubmitResource);
        }>
          { field("Name *", ResourceField::Name) }
          { field("Category", ResourceField::Category) }
          { field("Address", ResourceField::Address) }
          <p class="hint">"Click on the map to pick the position."</p>
          { field("Latitude *", ResourceField::Latitude) }
          { field("Longitude *", ResourceField::Longitude) }
          { field("Contact", ResourceField::Contact) }
          <TextArea
            label="Description"
            value=description
            on_input=Callback::new(move |v| controller.dispatch(Msg::EditResource(ResourceField::Description, v)))
          />
          <div class="form-actions">
            <button type="button" on:click=move |_| controller.dispatch(Msg::CloseDialog)>"Cancel"</button>
            <button type="submit" class="primary">"Add"</button>
          </div>
        </form>
      </Modal>
    }
}

// -- reviews -- //

#[component]
fn ReviewsDialog(controller: Controller) -> impl IntoView {
    let reviews = create_memo(move |_| controller.with(AppState::reviews));
    let review_field = move |field: ReviewField| {
        Signal::derive(move || controller.with(|s| s.review_form().get(field).to_owned()))
    };
    let edit = move |field: ReviewField| {
        Callback::new(move |v| controller.dispatch(Msg::EditReview(field, v)))
    };
    let rating = review_field(ReviewField::Rating);

    view! {
      <Modal
        title=resource_title(controller, "Reviews", AppState::review_resource)
        on_close=close(controller)
      >
        <div class="panel">
          { move || match reviews.get() {
              PanelView::Loading => view! { <p class="placeholder">"Loading reviews ..."</p> }.into_view(),
              PanelView::Failed => view! { <p class="placeholder">"Failed to load reviews"</p> }.into_view(),
              PanelView::Empty => view! { <p class="placeholder">"No reviews yet"</p> }.into_view(),
              PanelView::Items(reviews) => reviews
                  .into_iter()
                  .map(|review| view! { <ReviewItem review /> })
                  .collect_view(),
            }
          }
        </div>
        <form on:submit=move |ev| {
          ev.prevent_default();
          controller.dispatch(Msg::SubmitReview);
        }>
          <label class="field">
            <span class="field-label">"Rating"</span>
            <select
              prop:value=move || rating.get()
              on:change=move |ev| controller.dispatch(Msg::EditReview(ReviewField::Rating, event_target_value(&ev)))
            >
              { (1..=5).rev().map(|n| view! { <option value=n.to_string()>{ n }</option> }).collect_view() }
            </select>
          </label>
          <TextArea label="Comment" value=review_field(ReviewField::Comment) on_input=edit(ReviewField::Comment) />
          <TextField label="Your name" value=review_field(ReviewField::UserName) on_input=edit(ReviewField::UserName) placeholder="Anonymous" />
          <div class="form-actions">
            <button type="submit" class="primary">"Add review"</button>
          </div>
        </form>
      </Modal>
    }
}

#[component]
fn ReviewItem(review: ReviewView) -> impl IntoView {
    let ReviewView {
        author,
        created,
        rating,
        comment,
    } = review;
    view! {
      <div class="review">
        <div class="review-header">
          <strong>{ author }</strong>
          <time class="review-created">{ created }</time>
        </div>
        <Stars rating />
        <p class="review-comment">{ comment }</p>
      </div>
    }
}

// -- events -- //

#[component]
fn EventsDialog(controller: Controller) -> impl IntoView {
    let events = create_memo(move |_| controller.with(AppState::events));
    let event_field = move |field: EventField| {
        Signal::derive(move || controller.with(|s| s.event_form().get(field).to_owned()))
    };
    let edit = move |field: EventField| {
        Callback::new(move |v| controller.dispatch(Msg::EditEvent(field, v)))
    };

    view! {
      <Modal
        title=resource_title(controller, "Events", AppState::event_resource)
        on_close=close(controller)
      >
        <div class="panel">
          <EventPanel events />
        </div>
        <form on:submit=move |ev| {
          ev.prevent_default();
          controller.dispatch(Msg::SubmitEvent);
        }>
          <TextField label="Title *" value=event_field(EventField::Title) on_input=edit(EventField::Title) />
          <TextField label="Date *" input_type="date" value=event_field(EventField::Date) on_input=edit(EventField::Date) />
          <TextField label="Time" input_type="time" value=event_field(EventField::Time) on_input=edit(EventField::Time) />
          <TextArea label="Description" value=event_field(EventField::Description) on_input=edit(EventField::Description) />
          <div class="form-actions">
            <button type="submit" class="primary">"Add event"</button>
          </div>
        </form>
      </Modal>
    }
}

/// Events with loading, failure and empty placeholders.
#[component]
pub fn EventPanel(#[prop(into)] events: Signal<PanelView<EventView>>) -> impl IntoView {
    move || match events.get() {
        PanelView::Loading => view! { <p class="placeholder">"Loading events ..."</p> }.into_view(),
        PanelView::Failed => view! { <p class="placeholder">"Failed to load events"</p> }.into_view(),
        PanelView::Empty => view! { <p class="placeholder">"No events"</p> }.into_view(),
        PanelView::Items(events) => view! {
          <ul class="events">
            { events.into_iter().map(|event| view! { <EventItem event /> }).collect_view() }
          </ul>
        }
        .into_view(),
    }
}

#[component]
fn EventItem(event: EventView) -> impl IntoView {
    let EventView {
        title,
        date: _,
        when,
        description,
    } = event;
    view! {
      <li class="event">
        <strong>{ title }</strong>
        <div class="event-when">{ when }</div>
        { (!description.is_empty()).then(|| view! { <p class="event-description">{ description }</p> }) }
      </li>
    }
}
