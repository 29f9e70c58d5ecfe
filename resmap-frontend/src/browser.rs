//! Blocking dialogs and geolocation of the browser window.

use anyhow::anyhow;
use leptos::window;
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{Position, PositionError};

use resmap_core::{geo::MapPoint, LocateError};

fn js_error(err: &JsValue) -> anyhow::Error {
    anyhow!(err
        .as_string()
        .unwrap_or_else(|| "unknown JS error".to_string()))
}

pub fn alert(message: &str) -> anyhow::Result<()> {
    window()
        .alert_with_message(message)
        .map_err(|err| js_error(&err))
}

pub fn confirm(question: &str) -> anyhow::Result<bool> {
    window()
        .confirm_with_message(question)
        .map_err(|err| js_error(&err))
}

/// `None` if the prompt was dismissed.
pub fn prompt(message: &str) -> anyhow::Result<Option<String>> {
    window()
        .prompt_with_message(message)
        .map_err(|err| js_error(&err))
}

/// Asks the browser for the current position.
///
/// `on_result` is called exactly once, possibly synchronously.
pub fn locate<F>(on_result: F)
where
    F: Fn(Result<MapPoint, LocateError>) + Clone + 'static,
{
    let navigator = window().navigator();
    let supported = js_sys::Reflect::has(&navigator, &JsValue::from_str("geolocation"))
        .unwrap_or(false);
    let geolocation = match navigator.geolocation() {
        Ok(geolocation) if supported => geolocation,
        _ => {
            on_result(Err(LocateError::Unsupported));
            return;
        }
    };
    let on_success = {
        let on_result = on_result.clone();
        Closure::once_into_js(move |position: Position| {
            let coords = position.coords();
            on_result(Ok(MapPoint::new(coords.latitude(), coords.longitude())));
        })
    };
    let on_error = {
        let on_result = on_result.clone();
        Closure::once_into_js(move |err: PositionError| {
            on_result(Err(LocateError::Failed(err.message())));
        })
    };
    if let Err(err) = geolocation
        .get_current_position_with_error_callback(on_success.unchecked_ref(), Some(on_error.unchecked_ref()))
    {
        on_result(Err(LocateError::Failed(js_error(&err).to_string())));
    }
}
