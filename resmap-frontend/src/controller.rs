use gloo_timers::callback::Timeout;
use leptos::*;

use resmap_core::{
    config::ClientConfig, geo::Viewport, timestamp, AppState, Effect, Failure, Msg,
};
use resmap_frontend_api::{self as api, AdminApi, PublicApi, ResourceQuery};

use crate::browser;

/// Runs [`AppState::update`] and carries out the returned effects.
#[derive(Clone, Copy)]
pub struct Controller {
    state: RwSignal<AppState>,
    viewport: RwSignal<Viewport>,
    api: PublicApi,
}

impl Controller {
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        let viewport = RwSignal::new(Viewport {
            center: config.map_center,
            zoom: config.map_zoom,
        });
        let api = PublicApi::new(config.api_url);
        let state = RwSignal::new(AppState::new(config));
        Self {
            state,
            viewport,
            api,
        }
    }

    /// Reads the state and subscribes the calling scope.
    pub fn with<T>(&self, f: impl FnOnce(&AppState) -> T) -> T {
        self.state.with(f)
    }

    pub fn with_untracked<T>(&self, f: impl FnOnce(&AppState) -> T) -> T {
        self.state.with_untracked(f)
    }

    #[must_use]
    pub const fn viewport(&self) -> RwSignal<Viewport> {
        self.viewport
    }

    pub fn refresh(self) {
        self.dispatch(Msg::Refresh);
    }

    pub fn dispatch(self, msg: Msg) {
        let effects = self
            .state
            .try_update(|state| state.update(msg))
            .unwrap_or_default();
        for effect in effects {
            self.run(effect);
        }
    }

    #[allow(clippy::too_many_lines)]
    fn run(self, effect: Effect) {
        let Self { api, .. } = self;
        match effect {
            Effect::FetchResources => {
                spawn_local(async move {
                    let result = api.resources(&ResourceQuery::default()).await;
                    self.dispatch(Msg::ResourcesLoaded(result.map_err(failure)));
                });
            }
            Effect::ScheduleSearch { ticket, delay_ms } => {
                Timeout::new(delay_ms, move || {
                    self.dispatch(Msg::SearchSettled(ticket));
                })
                .forget();
            }
            Effect::CenterMap(viewport) => {
                self.viewport.set(viewport);
            }
            Effect::LocateUser => {
                browser::locate(move |result| self.dispatch(Msg::Located(result)));
            }
            Effect::CreateResource(new_resource) => {
                spawn_local(async move {
                    let result = api.create_resource(&new_resource).await;
                    self.dispatch(Msg::ResourceCreated(result.map_err(failure)));
                });
            }
            Effect::FetchReviews(resource_id) => {
                spawn_local(async move {
                    let result = api.reviews(&resource_id).await.map_err(failure);
                    self.dispatch(Msg::ReviewsLoaded {
                        resource_id,
                        result,
                    });
                });
            }
            Effect::CreateReview {
                resource_id,
                review,
            } => {
                spawn_local(async move {
                    let result = api.create_review(&resource_id, &review).await;
                    self.dispatch(Msg::ReviewCreated(result.map_err(failure)));
                });
            }
            Effect::FetchEvents(resource_id) => {
                spawn_local(async move {
                    let result = api.events(&resource_id).await.map_err(failure);
                    self.dispatch(Msg::EventsLoaded {
                        resource_id,
                        result,
                    });
                });
            }
            Effect::CreateEvent { resource_id, event } => {
                spawn_local(async move {
                    let result = api.create_event(&resource_id, &event).await.map_err(failure);
                    self.dispatch(Msg::EventCreated {
                        resource_id,
                        result,
                    });
                });
            }
            Effect::ConfirmDelete {
                resource_id,
                question,
            } => {
                let confirmed = browser::confirm(&question).unwrap_or_else(|err| {
                    log::warn!("Unable to ask for confirmation: {err}");
                    false
                });
                self.dispatch(Msg::DeleteConfirmed {
                    resource_id,
                    confirmed,
                });
            }
            Effect::PromptAdminToken {
                action,
                resource_id,
                message,
            } => {
                let input = browser::prompt(&message).unwrap_or_else(|err| {
                    log::warn!("Unable to prompt for the admin token: {err}");
                    None
                });
                self.dispatch(Msg::AdminTokenEntered {
                    action,
                    resource_id,
                    input,
                });
            }
            Effect::VerifyResource { resource_id, token } => {
                let admin_api = AdminApi::new(api, token.as_str().to_owned());
                spawn_local(async move {
                    let result = admin_api.verify_resource(&resource_id).await.map_err(failure);
                    self.dispatch(Msg::Verified {
                        resource_id,
                        result,
                    });
                });
            }
            Effect::DeleteResource { resource_id, token } => {
                let admin_api = AdminApi::new(api, token.as_str().to_owned());
                spawn_local(async move {
                    let result = admin_api.delete_resource(&resource_id).await.map_err(failure);
                    self.dispatch(Msg::Deleted {
                        resource_id,
                        result,
                    });
                });
            }
            Effect::FetchUpcomingEvents { days } => {
                let today = timestamp::format_unix_date(js_sys::Date::now() / 1000.0);
                spawn_local(async move {
                    let result = api.upcoming_events(days).await.map_err(failure);
                    self.dispatch(Msg::UpcomingEventsLoaded { today, result });
                });
            }
            Effect::Alert(message) => {
                if let Err(err) = browser::alert(&message) {
                    log::warn!("Unable to show alert '{message}': {err}");
                }
            }
        }
    }
}

fn failure(err: api::Error) -> Failure {
    match err {
        api::Error::Fetch(reason) => Failure::Transport(reason),
        api::Error::Api(err) => Failure::Rejected(err),
    }
}
