use leptos::*;

use resmap_core::rating::StarRating;

#[component]
pub fn Stars(rating: StarRating) -> impl IntoView {
    let StarRating { stars, label } = rating;
    view! {
      <span class="stars">
        { stars.into_iter().map(|star| view! {
            <span class=star.css_class()>{ star.glyph() }</span>
          }).collect_view()
        }
        <span class="rating-label">{ label }</span>
      </span>
    }
}
