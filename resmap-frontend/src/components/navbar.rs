use leptos::*;
use leptos_router::*;

use crate::Page;

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
      <nav class="navbar">
        <div class="navbar-brand">
          <A href=Page::Home.path()>"Community Resource Map"</A>
        </div>
        <menu class="navbar-menu">
          <MenuItem page=Page::Home label="Map" />
          <MenuItem page=Page::Events label="Upcoming events" />
        </menu>
      </nav>
    }
}

#[component]
fn MenuItem(page: Page, label: &'static str) -> impl IntoView {
    view! {
      <A href=page.path() exact=true>{ label }</A>
    }
}
