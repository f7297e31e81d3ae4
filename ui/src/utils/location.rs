//! Browser address bar integration.
//!
//! On the web the initial route comes from `location.pathname` and every navigation pushes a
//! history entry. Native builds have no address bar and always start on the login page.

use userdesk_business::Route;

#[cfg(target_arch = "wasm32")]
pub fn initial_route() -> Route {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .map(|path| Route::from_path(&path))
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn initial_route() -> Route {
    Route::default()
}

#[cfg(target_arch = "wasm32")]
pub fn push_route(route: Route) {
    let Some(history) = web_sys::window().and_then(|window| window.history().ok()) else {
        return;
    };
    if let Err(e) =
        history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(route.path()))
    {
        log::warn!("Failed to push {} to history: {e:?}", route.path());
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn push_route(route: Route) {
    log::debug!("Navigated to {}", route.path());
}
