use leptos::*;

#[component]
pub fn TextField(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    view! {
      <label class="field">
        <span class="field-label">{ label }</span>
        <input
          type=input_type
          placeholder=placeholder
          prop:value=move || value.get()
          on:input=move |ev| on_input.call(event_target_value(&ev))
        />
      </label>
    }
}

#[component]
pub fn TextArea(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
      <label class="field">
        <span class="field-label">{ label }</span>
        <textarea
          rows="3"
          prop:value=move || value.get()
          on:input=move |ev| on_input.call(event_target_value(&ev))
        ></textarea>
      </label>
    }
}

/// Overlay with a title bar and a close button.
///
/// A `docked` modal sits at the side and lets clicks through to the map.
#[component]
pub fn Modal(
    #[prop(into)] title: MaybeSignal<String>,
    on_close: Callback<()>,
    #[prop(optional)] docked: bool,
    children: Children,
) -> impl IntoView {
    view! {
      <div class="modal-backdrop" class:docked=docked>
        <div class="modal" role="dialog">
          <header class="modal-header">
            <h2>{ move || title.get() }</h2>
            <button class="modal-close" title="Close" on:click=move |_| on_close.call(())>"×"</button>
          </header>
          <div class="modal-body">
            { children() }
          </div>
        </div>
      </div>
    }
}
