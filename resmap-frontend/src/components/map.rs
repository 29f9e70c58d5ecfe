use leaflet::LatLng;
use leptos::*;
use leptos_leaflet::{position, MapContainer, MapEvents, Marker, Popup, Position, TileLayer};

use resmap_core::{
    geo::{MapPoint, Viewport},
    view::MarkerView,
    AppState, Msg,
};

use crate::Controller;

#[component]
pub fn Map(controller: Controller) -> impl IntoView {
    let map = RwSignal::<Option<leaflet::Map>>::new(None);
    let markers = create_memo(move |_| controller.with(AppState::markers));
    let (tile_layer_url, attribution) =
        controller.with_untracked(|s| (s.config().tile_layer_url, s.config().map_attribution));

    let events = MapEvents::new();
    events.clone().mouse_click(move |ev: leaflet::MouseEvent| {
        let lat_lng = ev.lat_lng();
        let point = MapPoint::new(lat_lng.lat(), lat_lng.lng());
        controller.dispatch(Msg::MapClicked(point));
    });

    Effect::new(move |_| {
        let Viewport { center, zoom } = controller.viewport().get();
        let Some(map) = map.get_untracked() else {
            log::debug!("No leaflet map found");
            return;
        };
        map.set_view(&LatLng::new(center.lat, center.lng), zoom);
    });

    let Viewport { center, zoom } = controller.viewport().get_untracked();
    let center = Position::new(center.lat, center.lng);

    view! {
      <MapContainer
        class="map"
        center
        zoom
        map=map.write_only()
        set_view=true
        events
      >
        <TileLayer url=tile_layer_url attribution />
        <For
          each=move || markers.get()
          key=marker_key
          let:marker
        >
          <ResourceMarker marker controller />
        </For>
      </MapContainer>
    }
}

/// Markers are re-created whenever anything shown in the popup changes.
fn marker_key(marker: &MarkerView) -> String {
    let MarkerView {
        id,
        position,
        name,
        address,
        rating,
    } = marker;
    format!(
        "{id}|{}|{}|{name}|{address}|{rating}",
        position.lat_field(),
        position.lng_field()
    )
}

#[component]
fn ResourceMarker(marker: MarkerView, controller: Controller) -> impl IntoView {
    let MarkerView {
        id,
        position: MapPoint { lat, lng },
        name,
        address,
        rating,
    } = marker;
    let reviews_id = id.clone();
    let events_id = id;

    view! {
      <Marker position=position!(lat, lng)>
        <Popup>
          <strong>{ name }</strong>
          <br />
          { address }
          <br />
          { rating }
          <div class="popup-actions">
            <button on:click=move |_| controller.dispatch(Msg::OpenReviews(reviews_id.clone()))>
              "Reviews"
            </button>
            <button on:click=move |_| controller.dispatch(Msg::OpenEvents(events_id.clone()))>
              "Events"
            </button>
          </div>
        </Popup>
      </Marker>
    }
}

/// Offers to add a resource at the point the user clicked on.
#[component]
pub fn MapClickPopup(controller: Controller) -> impl IntoView {
    let popup = create_memo(move |_| controller.with(AppState::map_popup));
    move || {
        popup.get().map(|point| {
            let label = format!("{}, {}", point.lat_field(), point.lng_field());
            view! {
              <div class="map-click-popup">
                <span>"Add a resource at " <code>{ label }</code> "?"</span>
                <button class="primary" on:click=move |_| controller.dispatch(Msg::OpenAddResource(Some(point)))>
                  "Add resource here"
                </button>
                <button title="Close" on:click=move |_| controller.dispatch(Msg::MapPopupClosed)>"×"</button>
              </div>
            }
        })
    }
}
