use gloo_net::http::Request;

use resmap_boundary::{Acknowledgement, Event, NewEvent, NewResource, NewReview, Resource, Review};

use crate::{encode, into_ack, into_json, Result};

/// Public API of the resource map backend.
#[derive(Debug, Clone, Copy)]
pub struct PublicApi {
    url: &'static str,
}

/// Server side filter of the resource list.
#[derive(Debug, Clone, Default)]
pub struct ResourceQuery {
    pub text: Option<String>,
    pub category: Option<String>,
}

impl ResourceQuery {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        let Self { text, category } = self;
        text.as_deref().map_or(true, |t| t.trim().is_empty())
            && category.as_deref().map_or(true, |c| c.trim().is_empty())
    }
}

impl PublicApi {
    #[must_use]
    pub const fn new(url: &'static str) -> Self {
        Self { url }
    }

    #[must_use]
    pub const fn url(&self) -> &'static str {
        self.url
    }

    pub async fn resources(&self, query: &ResourceQuery) -> Result<Vec<Resource>> {
        let url = self.resources_url(query);
        let response = Request::get(&url).send().await?;
        into_json(response).await
    }

    pub async fn resource(&self, id: &str) -> Result<Resource> {
        let url = self.resource_url(id);
        let response = Request::get(&url).send().await?;
        into_json(response).await
    }

    pub async fn create_resource(&self, resource: &NewResource) -> Result<Acknowledgement> {
        let url = format!("{}/resource", self.url);
        let request = Request::post(&url).json(resource)?;
        let response = request.send().await?;
        into_ack(response).await
    }

    pub async fn reviews(&self, resource_id: &str) -> Result<Vec<Review>> {
        let url = format!("{}/reviews", self.resource_url(resource_id));
        let response = Request::get(&url).send().await?;
        into_json(response).await
    }

    pub async fn create_review(
        &self,
        resource_id: &str,
        review: &NewReview,
    ) -> Result<Acknowledgement> {
        let url = format!("{}/review", self.resource_url(resource_id));
        let request = Request::post(&url).json(review)?;
        let response = request.send().await?;
        into_ack(response).await
    }

    pub async fn events(&self, resource_id: &str) -> Result<Vec<Event>> {
        let url = format!("{}/events", self.resource_url(resource_id));
        let response = Request::get(&url).send().await?;
        into_json(response).await
    }

    pub async fn create_event(&self, resource_id: &str, event: &NewEvent) -> Result<Acknowledgement> {
        let url = format!("{}/event", self.resource_url(resource_id));
        let request = Request::post(&url).json(event)?;
        let response = request.send().await?;
        into_ack(response).await
    }

    /// Events of all resources within the next `days` days.
    pub async fn upcoming_events(&self, days: u32) -> Result<Vec<Event>> {
        let url = format!("{}/events?days={days}", self.url);
        let response = Request::get(&url).send().await?;
        into_json(response).await
    }

    fn resources_url(&self, query: &ResourceQuery) -> String {
        let url = format!("{}/resources", self.url);
        if query.is_empty() {
            return url;
        }
        let ResourceQuery { text, category } = query;
        let params = [("q", text), ("category", category)]
            .into_iter()
            .filter_map(|(key, value)| {
                let value = value.as_deref()?.trim();
                (!value.is_empty()).then(|| format!("{key}={}", encode(value)))
            })
            .collect::<Vec<_>>()
            .join("&");
        format!("{url}?{params}")
    }

    pub(crate) fn resource_url(&self, id: &str) -> String {
        format!("{}/resource/{}", self.url, encode(id))
    }
}
