//! Delivers finished CSV exports to the user.
//!
//! # Platform Support
//!
//! - **Native**: a save dialog via `rfd`, then the file is written to the chosen path.
//! - **Web (WASM)**: a `Blob` object URL clicked through a temporary anchor element.

use std::sync::{Arc, Mutex};

use userdesk_business::CsvExport;

/// Hands a finished export to the platform. Tests swap in [`RecordingDownloadHandler`].
pub trait DownloadHandler {
    fn deliver(&self, export: CsvExport);
}

/// Default handler for the current platform.
#[derive(Default)]
pub struct SystemDownloadHandler;

#[cfg(not(target_arch = "wasm32"))]
impl DownloadHandler for SystemDownloadHandler {
    fn deliver(&self, export: CsvExport) {
        use rfd::FileDialog;

        let Some(path) = FileDialog::new()
            .set_title("Save CSV export")
            .set_file_name(&export.file_name)
            .add_filter("CSV", &["csv"])
            .save_file()
        else {
            log::info!("Export {} dismissed", export.file_name);
            return;
        };

        match std::fs::write(&path, export.contents.as_bytes()) {
            Ok(()) => log::info!("Saved {} rows to {path:?}", export.row_count),
            Err(e) => log::error!("Failed to write export to {path:?}: {e}"),
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl DownloadHandler for SystemDownloadHandler {
    fn deliver(&self, export: CsvExport) {
        if let Err(e) = trigger_browser_download(&export) {
            log::error!("Failed to start download of {}: {e:?}", export.file_name);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn trigger_browser_download(export: &CsvExport) -> Result<(), wasm_bindgen::JsValue> {
    use wasm_bindgen::{JsCast as _, JsValue};
    use web_sys::js_sys::Array;
    use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let parts = Array::of1(&JsValue::from_str(&export.contents));
    let options = BlobPropertyBag::new();
    options.set_type("text/csv;charset=utf-8;");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(&export.file_name);
    anchor.click();

    Url::revoke_object_url(&url)
}

/// Keeps every delivered export in memory.
#[derive(Clone, Default)]
pub struct RecordingDownloadHandler {
    delivered: Arc<Mutex<Vec<CsvExport>>>,
}

impl RecordingDownloadHandler {
    pub fn delivered(&self) -> Vec<CsvExport> {
        self.delivered
            .lock()
            .map(|exports| exports.clone())
            .unwrap_or_default()
    }
}

impl DownloadHandler for RecordingDownloadHandler {
    fn deliver(&self, export: CsvExport) {
        if let Ok(mut exports) = self.delivered.lock() {
            exports.push(export);
        }
    }
}
