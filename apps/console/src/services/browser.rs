//! Thin wrappers over the browser APIs the report page needs.

use anyhow::Result;

#[cfg(target_arch = "wasm32")]
mod web {
    use anyhow::{anyhow, Context, Result};
    use wasm_bindgen::{JsCast, JsValue};

    fn js_error(err: JsValue) -> anyhow::Error {
        anyhow!("{err:?}")
    }

    pub fn open_in_new_tab(url: &str) -> Result<()> {
        let window = web_sys::window().context("no browser window")?;
        window
            .open_with_url_and_target(url, "_blank")
            .map_err(js_error)?;
        Ok(())
    }

    pub fn download_text(filename: &str, content: &str, mime: &str) -> Result<()> {
        let window = web_sys::window().context("no browser window")?;
        let document = window.document().context("no document")?;

        let parts = js_sys::Array::of1(&JsValue::from_str(content));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(mime);
        let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)
            .map_err(js_error)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_error)?;

        let anchor = document
            .create_element("a")
            .map_err(js_error)?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| anyhow!("created element is not an anchor"))?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.click();

        web_sys::Url::revoke_object_url(&url).map_err(js_error)?;
        Ok(())
    }
}

/// Opens `url` in a new browsing context.
#[cfg(target_arch = "wasm32")]
pub fn open_in_new_tab(url: &str) -> Result<()> {
    web::open_in_new_tab(url)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn open_in_new_tab(url: &str) -> Result<()> {
    tracing::info!(%url, "open in new tab (native build)");
    Ok(())
}

/// Saves `content` as a file download named `filename`.
#[cfg(target_arch = "wasm32")]
pub fn download_text(filename: &str, content: &str, mime: &str) -> Result<()> {
    web::download_text(filename, content, mime)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn download_text(filename: &str, content: &str, mime: &str) -> Result<()> {
    tracing::info!(%filename, %mime, bytes = content.len(), "download (native build)");
    Ok(())
}
