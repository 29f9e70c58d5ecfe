use gloo_net::http::Request;

use resmap_boundary::Acknowledgement;

use crate::{into_ack, PublicApi, Result};

pub const ADMIN_TOKEN_HEADER: &str = "X-ADMIN-TOKEN";

/// Moderation API, authorized by the shared admin token.
///
/// The token is held only for as long as this value lives.
#[derive(Clone)]
pub struct AdminApi {
    public: PublicApi,
    token: String,
}

impl AdminApi {
    #[must_use]
    pub const fn new(public: PublicApi, token: String) -> Self {
        Self { public, token }
    }

    pub async fn verify_resource(&self, id: &str) -> Result<Acknowledgement> {
        let url = format!("{}/verify", self.public.resource_url(id));
        let request = Request::post(&url).header(ADMIN_TOKEN_HEADER, &self.token);
        let response = request.send().await?;
        into_ack(response).await
    }

    pub async fn delete_resource(&self, id: &str) -> Result<Acknowledgement> {
        let url = self.public.resource_url(id);
        let request = Request::delete(&url).header(ADMIN_TOKEN_HEADER, &self.token);
        let response = request.send().await?;
        into_ack(response).await
    }
}

impl std::fmt::Debug for AdminApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminApi")
            .field("url", &self.public.url())
            .finish_non_exhaustive()
    }
}
