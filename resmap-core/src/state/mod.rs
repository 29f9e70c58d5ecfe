use resmap_boundary::{Acknowledgement, Event, NewEvent, NewResource, NewReview, Resource, Review};

use crate::{
    config::ClientConfig,
    debounce::{Debouncer, Ticket},
    error::{Failure, LocateError},
    event,
    filter::{self, FilterState},
    form::{
        AdminToken, EventField, EventForm, FormError, ResourceField, ResourceForm, ReviewField,
        ReviewForm,
    },
    geo::{MapPoint, Mappable, Viewport},
    view::{self, EventView, ListView, MarkerView, PanelView, ReviewView},
};

#[cfg(test)]
mod tests;

const ADMIN_TOKEN_REQUIRED: &str = "Admin token required";

#[derive(Debug, Clone, PartialEq)]
pub enum Loadable<T> {
    Loading,
    Failed,
    Loaded(T),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreStatus {
    NotLoaded,
    Loaded,
    Failed,
}

/// The modal dialog that is currently open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialog {
    AddResource,
    Reviews,
    Events,
}

impl Dialog {
    /// Whether the map stays clickable while the dialog is open.
    ///
    /// Clicks on the map fill the position of a new resource.
    #[must_use]
    pub const fn keeps_map_interactive(self) -> bool {
        matches!(self, Self::AddResource)
    }
}

/// Actions that require the shared admin token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminAction {
    Verify,
    Delete,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Refresh,
    ResourcesLoaded(Result<Vec<Resource>, Failure>),

    // -- filter -- //
    SearchInput(String),
    SearchSettled(Ticket),
    SearchSubmitted,
    CategorySelected(String),
    ClearFilters,

    // -- map & list -- //
    MapClicked(MapPoint),
    MapPopupClosed,
    CardClicked(String),
    Locate,
    Located(Result<MapPoint, LocateError>),

    // -- add resource -- //
    OpenAddResource(Option<MapPoint>),
    EditResource(ResourceField, String),
    SubmitResource,
    ResourceCreated(Result<Acknowledgement, Failure>),

    // -- reviews -- //
    OpenReviews(String),
    ReviewsLoaded {
        resource_id: String,
        result: Result<Vec<Review>, Failure>,
    },
    EditReview(ReviewField, String),
    SubmitReview,
    ReviewCreated(Result<Acknowledgement, Failure>),

    // -- events -- //
    OpenEvents(String),
    EventsLoaded {
        resource_id: String,
        result: Result<Vec<Event>, Failure>,
    },
    EditEvent(EventField, String),
    SubmitEvent,
    EventCreated {
        resource_id: String,
        result: Result<Acknowledgement, Failure>,
    },

    CloseDialog,

    // -- admin -- //
    Verify(String),
    Delete(String),
    DeleteConfirmed {
        resource_id: String,
        confirmed: bool,
    },
    AdminTokenEntered {
        action: AdminAction,
        resource_id: String,
        input: Option<String>,
    },
    Verified {
        resource_id: String,
        result: Result<Acknowledgement, Failure>,
    },
    Deleted {
        resource_id: String,
        result: Result<Acknowledgement, Failure>,
    },

    // -- upcoming events -- //
    LoadUpcomingEvents,
    /// `today` as `YYYY-MM-DD`, earlier events are dropped.
    UpcomingEventsLoaded {
        today: String,
        result: Result<Vec<Event>, Failure>,
    },
}

/// Side effects requested by the handlers.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Replace the whole resource collection.
    FetchResources,
    /// Send [`Msg::SearchSettled`] after the delay.
    ScheduleSearch {
        ticket: Ticket,
        delay_ms: u32,
    },
    CenterMap(Viewport),
    LocateUser,
    CreateResource(NewResource),
    FetchReviews(String),
    CreateReview {
        resource_id: String,
        review: NewReview,
    },
    FetchEvents(String),
    CreateEvent {
        resource_id: String,
        event: NewEvent,
    },
    /// Blocking confirmation, answered by [`Msg::DeleteConfirmed`].
    ConfirmDelete {
        resource_id: String,
        question: String,
    },
    /// Blocking prompt, answered by [`Msg::AdminTokenEntered`].
    PromptAdminToken {
        action: AdminAction,
        resource_id: String,
        message: String,
    },
    VerifyResource {
        resource_id: String,
        token: AdminToken,
    },
    DeleteResource {
        resource_id: String,
        token: AdminToken,
    },
    FetchUpcomingEvents {
        days: u32,
    },
    /// Blocking message to the user.
    Alert(String),
}

#[derive(Debug, Clone)]
pub struct AppState {
    config: ClientConfig,

    // -- resource store -- //
    resources: Vec<Resource>,
    status: StoreStatus,
    pending_refreshes: usize,

    // -- filter -- //
    filter: FilterState,
    search_input: String,
    search_debounce: Debouncer,

    // -- dialogs -- //
    dialog: Option<Dialog>,
    map_popup: Option<MapPoint>,
    resource_form: ResourceForm,
    review_resource: Option<String>,
    reviews: Loadable<Vec<Review>>,
    review_form: ReviewForm,
    event_resource: Option<String>,
    events: Loadable<Vec<Event>>,
    event_form: EventForm,

    upcoming_events: Loadable<Vec<Event>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

impl AppState {
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            resources: vec![],
            status: StoreStatus::NotLoaded,
            pending_refreshes: 0,
            filter: FilterState::default(),
            search_input: String::new(),
            search_debounce: Debouncer::default(),
            dialog: None,
            map_popup: None,
            resource_form: ResourceForm::default(),
            review_resource: None,
            reviews: Loadable::Loading,
            review_form: ReviewForm::default(),
            event_resource: None,
            events: Loadable::Loading,
            event_form: EventForm::default(),
            upcoming_events: Loadable::Loading,
        }
    }

    // -- read access -- //

    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    #[must_use]
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    #[must_use]
    pub fn resource(&self, id: &str) -> Option<&Resource> {
        self.resources.iter().find(|r| r.id == id)
    }

    #[must_use]
    pub const fn status(&self) -> StoreStatus {
        self.status
    }

    #[must_use]
    pub const fn is_refreshing(&self) -> bool {
        self.pending_refreshes > 0
    }

    #[must_use]
    pub const fn filter(&self) -> &FilterState {
        &self.filter
    }

    #[must_use]
    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    /// Resources that pass the current filter, in the order received.
    #[must_use]
    pub fn visible(&self) -> Vec<&Resource> {
        self.filter.apply(&self.resources)
    }

    /// Number of visible resources once something has been loaded.
    #[must_use]
    pub fn result_count(&self) -> Option<usize> {
        (self.status == StoreStatus::Loaded).then(|| self.visible().len())
    }

    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        filter::categories(&self.resources)
    }

    #[must_use]
    pub fn list_view(&self) -> ListView {
        match self.status {
            StoreStatus::NotLoaded => ListView::Loading,
            StoreStatus::Failed => ListView::Failed,
            StoreStatus::Loaded => view::cards(self.visible()),
        }
    }

    /// Markers of the visible resources.
    #[must_use]
    pub fn markers(&self) -> Vec<MarkerView> {
        view::markers(self.visible())
    }

    #[must_use]
    pub const fn dialog(&self) -> Option<Dialog> {
        self.dialog
    }

    #[must_use]
    pub const fn map_popup(&self) -> Option<MapPoint> {
        self.map_popup
    }

    #[must_use]
    pub const fn resource_form(&self) -> &ResourceForm {
        &self.resource_form
    }

    #[must_use]
    pub fn review_resource(&self) -> Option<&str> {
        self.review_resource.as_deref()
    }

    #[must_use]
    pub const fn review_form(&self) -> &ReviewForm {
        &self.review_form
    }

    #[must_use]
    pub fn reviews(&self) -> PanelView<ReviewView> {
        match &self.reviews {
            Loadable::Loading => PanelView::Loading,
            Loadable::Failed => PanelView::Failed,
            Loadable::Loaded(reviews) => view::reviews(reviews),
        }
    }

    #[must_use]
    pub fn event_resource(&self) -> Option<&str> {
        self.event_resource.as_deref()
    }

    #[must_use]
    pub const fn event_form(&self) -> &EventForm {
        &self.event_form
    }

    #[must_use]
    pub fn events(&self) -> PanelView<EventView> {
        panel_of_events(&self.events)
    }

    #[must_use]
    pub fn upcoming_events(&self) -> PanelView<EventView> {
        panel_of_events(&self.upcoming_events)
    }

    /// Display name of a resource in the store.
    #[must_use]
    pub fn resource_name(&self, id: &str) -> Option<String> {
        self.resource(id)
            .map(|r| view::ResourceCard::from(r).name)
    }

    // -- handlers -- //

    pub fn update(&mut self, msg: Msg) -> Vec<Effect> {
        match msg {
            Msg::Refresh => vec![self.refresh()],
            Msg::ResourcesLoaded(result) => {
                self.on_resources_loaded(result);
                vec![]
            }
            Msg::SearchInput(text) => {
                self.search_input = text;
                let ticket = self.search_debounce.schedule();
                vec![Effect::ScheduleSearch {
                    ticket,
                    delay_ms: self.config.search_debounce_ms,
                }]
            }
            Msg::SearchSettled(ticket) => {
                if self.search_debounce.settle(ticket) {
                    self.filter.query.clone_from(&self.search_input);
                } else {
                    log::trace!("Superseded search input: {ticket:?}");
                }
                vec![]
            }
            Msg::SearchSubmitted => {
                self.search_debounce.cancel();
                self.filter.query.clone_from(&self.search_input);
                vec![]
            }
            Msg::CategorySelected(category) => {
                self.filter.category = category;
                vec![]
            }
            Msg::ClearFilters => {
                self.search_debounce.cancel();
                self.search_input.clear();
                self.filter = FilterState::default();
                vec![]
            }
            Msg::MapClicked(point) => {
                if self.dialog == Some(Dialog::AddResource) {
                    self.resource_form.set_position(point);
                    self.map_popup = None;
                } else {
                    self.map_popup = Some(point);
                }
                vec![]
            }
            Msg::MapPopupClosed => {
                self.map_popup = None;
                vec![]
            }
            Msg::CardClicked(id) => {
                let Some(center) = self.resource(&id).and_then(Mappable::position) else {
                    log::debug!("Resource {id} has no position");
                    return vec![];
                };
                vec![Effect::CenterMap(Viewport {
                    center,
                    zoom: self.config.focus_zoom,
                })]
            }
            Msg::Locate => vec![Effect::LocateUser],
            Msg::Located(result) => match result {
                Ok(center) => vec![Effect::CenterMap(Viewport {
                    center,
                    zoom: self.config.locate_zoom,
                })],
                Err(err) => {
                    if let LocateError::Failed(reason) = &err {
                        log::warn!("Unable to locate user: {reason}");
                    }
                    vec![Effect::Alert(err.to_string())]
                }
            },
            Msg::OpenAddResource(point) => {
                self.open_dialog(Dialog::AddResource);
                if let Some(point) = point {
                    self.resource_form.set_position(point);
                }
                vec![]
            }
            Msg::EditResource(field, value) => {
                self.resource_form.set(field, value);
                vec![]
            }
            Msg::SubmitResource => match self.resource_form.to_new_resource() {
                Ok(new_resource) => vec![Effect::CreateResource(new_resource)],
                Err(err) => vec![Effect::Alert(err.to_string())],
            },
            Msg::ResourceCreated(result) => match result {
                Ok(_) => {
                    self.close_dialog();
                    self.resource_form = ResourceForm::default();
                    vec![self.refresh()]
                }
                Err(err) => vec![alert_failure(
                    &err,
                    "Failed to add resource",
                    "Network error while adding resource",
                )],
            },
            Msg::OpenReviews(id) => {
                self.open_dialog(Dialog::Reviews);
                self.review_resource = Some(id.clone());
                self.reviews = Loadable::Loading;
                self.review_form = ReviewForm::default();
                vec![Effect::FetchReviews(id)]
            }
            Msg::ReviewsLoaded {
                resource_id,
                result,
            } => {
                if self.review_resource.as_deref() != Some(resource_id.as_str()) {
                    log::debug!("Discard reviews of inactive resource {resource_id}");
                    return vec![];
                }
                self.reviews = loadable(result, "reviews");
                vec![]
            }
            Msg::EditReview(field, value) => {
                self.review_form.set(field, value);
                vec![]
            }
            Msg::SubmitReview => {
                let Some(resource_id) = self.review_resource.clone() else {
                    return vec![Effect::Alert(FormError::NoResourceForReview.to_string())];
                };
                match self.review_form.to_new_review() {
                    Ok(review) => vec![Effect::CreateReview {
                        resource_id,
                        review,
                    }],
                    Err(err) => vec![Effect::Alert(err.to_string())],
                }
            }
            Msg::ReviewCreated(result) => match result {
                Ok(_) => {
                    self.close_dialog();
                    self.review_form = ReviewForm::default();
                    vec![self.refresh()]
                }
                Err(err) => vec![alert_failure(
                    &err,
                    "Failed to add review",
                    "Network error while adding review",
                )],
            },
            Msg::OpenEvents(id) => {
                self.open_dialog(Dialog::Events);
                self.event_resource = Some(id.clone());
                self.events = Loadable::Loading;
                self.event_form = EventForm::default();
                vec![Effect::FetchEvents(id)]
            }
            Msg::EventsLoaded {
                resource_id,
                result,
            } => {
                if self.event_resource.as_deref() != Some(resource_id.as_str()) {
                    log::debug!("Discard events of inactive resource {resource_id}");
                    return vec![];
                }
                self.events = sorted_events(result, "events");
                vec![]
            }
            Msg::EditEvent(field, value) => {
                self.event_form.set(field, value);
                vec![]
            }
            Msg::SubmitEvent => {
                let Some(resource_id) = self.event_resource.clone() else {
                    return vec![Effect::Alert(FormError::NoResourceForEvent.to_string())];
                };
                match self.event_form.to_new_event() {
                    Ok(event) => vec![Effect::CreateEvent { resource_id, event }],
                    Err(err) => vec![Effect::Alert(err.to_string())],
                }
            }
            Msg::EventCreated {
                resource_id,
                result,
            } => match result {
                Ok(_) => {
                    self.event_form = EventForm::default();
                    let mut effects = vec![];
                    if self.event_resource.as_deref() == Some(resource_id.as_str()) {
                        self.events = Loadable::Loading;
                        effects.push(Effect::FetchEvents(resource_id));
                    }
                    effects.push(self.refresh());
                    effects
                }
                Err(err) => vec![alert_failure(
                    &err,
                    "Failed to add event",
                    "Network error while adding event",
                )],
            },
            Msg::CloseDialog => {
                self.close_dialog();
                vec![]
            }
            Msg::Verify(resource_id) => vec![Effect::PromptAdminToken {
                action: AdminAction::Verify,
                resource_id,
                message: "Enter admin token to verify this resource".to_owned(),
            }],
            Msg::Delete(resource_id) => {
                let name = self
                    .resource_name(&resource_id)
                    .map_or_else(|| "this resource".to_owned(), |n| format!("\"{n}\""));
                vec![Effect::ConfirmDelete {
                    resource_id,
                    question: format!("Delete {name}? This cannot be undone."),
                }]
            }
            Msg::DeleteConfirmed {
                resource_id,
                confirmed,
            } => {
                if !confirmed {
                    return vec![];
                }
                vec![Effect::PromptAdminToken {
                    action: AdminAction::Delete,
                    resource_id,
                    message: "Enter admin token to delete this resource".to_owned(),
                }]
            }
            Msg::AdminTokenEntered {
                action,
                resource_id,
                input,
            } => {
                let Some(token) = AdminToken::from_prompt(input) else {
                    return match action {
                        AdminAction::Verify => {
                            log::debug!("Verification of {resource_id} cancelled");
                            vec![]
                        }
                        AdminAction::Delete => {
                            vec![Effect::Alert(ADMIN_TOKEN_REQUIRED.to_owned())]
                        }
                    };
                };
                match action {
                    AdminAction::Verify => vec![Effect::VerifyResource { resource_id, token }],
                    AdminAction::Delete => vec![Effect::DeleteResource { resource_id, token }],
                }
            }
            Msg::Verified {
                resource_id,
                result,
            } => match result {
                Ok(_) => {
                    log::info!("Verified resource {resource_id}");
                    vec![self.refresh()]
                }
                Err(err) => {
                    log::warn!("Unable to verify resource {resource_id}: {err}");
                    vec![Effect::Alert(format!(
                        "Verification failed: {}",
                        err.message_or("Unauthorized")
                    ))]
                }
            },
            Msg::Deleted {
                resource_id,
                result,
            } => match result {
                Ok(ack) => {
                    log::info!("Deleted resource {resource_id}");
                    if self.review_resource.as_deref() == Some(resource_id.as_str())
                        || self.event_resource.as_deref() == Some(resource_id.as_str())
                    {
                        self.close_dialog();
                    }
                    let message = ack
                        .message
                        .filter(|m| !m.trim().is_empty())
                        .unwrap_or_else(|| "Deleted".to_owned());
                    vec![Effect::Alert(message), self.refresh()]
                }
                Err(err) => {
                    log::warn!("Unable to delete resource {resource_id}: {err}");
                    vec![Effect::Alert(err.message_or("Failed to delete resource"))]
                }
            },
            Msg::LoadUpcomingEvents => {
                self.upcoming_events = Loadable::Loading;
                vec![Effect::FetchUpcomingEvents {
                    days: self.config.upcoming_event_days,
                }]
            }
            Msg::UpcomingEventsLoaded { today, result } => {
                let result = result.map(|events| {
                    events
                        .into_iter()
                        .filter(|e| e.date.as_str() >= today.as_str())
                        .collect()
                });
                self.upcoming_events = sorted_events(result, "upcoming events");
                vec![]
            }
        }
    }

    fn refresh(&mut self) -> Effect {
        log::debug!("Refresh resources");
        self.pending_refreshes += 1;
        Effect::FetchResources
    }

    fn on_resources_loaded(&mut self, result: Result<Vec<Resource>, Failure>) {
        self.pending_refreshes = self.pending_refreshes.saturating_sub(1);
        match result {
            Ok(resources) => {
                log::debug!("Loaded {} resources", resources.len());
                self.resources = resources;
                self.status = StoreStatus::Loaded;
                if !self.filter.category_available(&self.resources) {
                    log::debug!("Category '{}' is gone", self.filter.category);
                    self.filter.category.clear();
                }
            }
            Err(err) => {
                log::error!("Unable to load resources: {err}");
                self.resources.clear();
                self.status = StoreStatus::Failed;
            }
        }
    }

    fn open_dialog(&mut self, dialog: Dialog) {
        log::debug!("Open dialog {dialog:?}");
        self.close_dialog();
        self.dialog = Some(dialog);
    }

    fn close_dialog(&mut self) {
        self.dialog = None;
        self.map_popup = None;
        self.review_resource = None;
        self.event_resource = None;
    }
}

fn loadable<T>(result: Result<T, Failure>, what: &str) -> Loadable<T> {
    match result {
        Ok(items) => Loadable::Loaded(items),
        Err(err) => {
            log::warn!("Unable to load {what}: {err}");
            Loadable::Failed
        }
    }
}

fn sorted_events(result: Result<Vec<Event>, Failure>, what: &str) -> Loadable<Vec<Event>> {
    let mut events = loadable(result, what);
    if let Loadable::Loaded(events) = &mut events {
        event::sort_by_date(events);
    }
    events
}

fn panel_of_events(events: &Loadable<Vec<Event>>) -> PanelView<EventView> {
    match events {
        Loadable::Loading => PanelView::Loading,
        Loadable::Failed => PanelView::Failed,
        Loadable::Loaded(events) => view::events(events),
    }
}

fn alert_failure(err: &Failure, rejected: &str, transport: &str) -> Effect {
    let message = match err {
        Failure::Transport(reason) => {
            log::error!("{transport}: {reason}");
            transport.to_owned()
        }
        Failure::Rejected(_) => err.message_or(rejected),
    };
    Effect::Alert(message)
}
