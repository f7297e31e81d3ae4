//! Platform task spawning.
//!
//! Native builds hand futures to the ambient Tokio runtime, so the binary (or the test)
//! must have entered one. The web build runs them on the browser event loop.

use std::future::Future;

use crate::Error;

/// Spawns `future` on the current Tokio runtime.
#[cfg(not(target_arch = "wasm32"))]
pub fn spawn<F>(task: &'static str, future: F) -> Result<(), Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    let handle = tokio::runtime::Handle::try_current().map_err(|err| {
        log::error!("Cannot spawn {task}: {err}");
        Error::NoRuntime { task }
    })?;
    drop(handle.spawn(future));
    Ok(())
}

/// Spawns `future` on the browser event loop.
#[cfg(target_arch = "wasm32")]
pub fn spawn<F>(task: &'static str, future: F) -> Result<(), Error>
where
    F: Future<Output = ()> + 'static,
{
    log::debug!("Spawning {task} on the JS event loop");
    wasm_bindgen_futures::spawn_local(future);
    Ok(())
}
