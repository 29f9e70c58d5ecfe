use leptos::*;

use crate::{components::*, Controller};

#[component]
pub fn Home(controller: Controller) -> impl IntoView {
    view! {
      <section class="home">
        <FilterBar controller />
        <div class="layout">
          <aside class="sidebar">
            <ResultCount controller />
            <ResourceList controller />
          </aside>
          <div class="map-wrapper">
            <Map controller />
            <MapClickPopup controller />
          </div>
        </div>
        <Dialogs controller />
      </section>
    }
}
