use leptos::*;
use leptos_router::*;

use resmap_core::config::ClientConfig;

mod browser;
mod controller;

mod pages;
use pages::*;

mod components;
use components::*;

pub use self::controller::Controller;

#[component]
#[must_use]
pub fn App() -> impl IntoView {
    let controller = Controller::new(ClientConfig::default());

    // -- init -- //

    controller.refresh();

    view! {
      <Router>
        <NavBar />
        <main>
          <Routes>
            <Route
              path=Page::Home.path()
              view=move || view! { <Home controller /> }
            />
            <Route
              path=Page::Events.path()
              view=move || view! { <UpcomingEvents controller /> }
            />
          </Routes>
        </main>
      </Router>
    }
}
