//! Image loading: resolve a source URL to its natural pixel size.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlImageElement;

use crate::error::ViewerError;
use crate::state::Size;

/// Load `src` through an off-screen `<img>` and report its natural size.
///
/// The returned future cannot abort the transfer; callers that lose interest
/// simply drop the result.
pub async fn load_natural_size(src: &str) -> Result<Size, ViewerError> {
    let load_error = || ViewerError::ImageLoad { src: src.to_string() };
    let img = Rc::new(HtmlImageElement::new().map_err(|_| load_error())?);
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let img_onload = img.clone();
        let onload = Closure::once(move || {
            let result = js_sys::Array::new();
            result.push(&JsValue::from_f64(img_onload.natural_width() as f64));
            result.push(&JsValue::from_f64(img_onload.natural_height() as f64));
            let _ = resolve.call1(&JsValue::NULL, &result);
        });
        let onerror = Closure::once(move || {
            let _ = reject.call1(&JsValue::NULL, &JsValue::from_str("image_load_failed"));
        });
        img.set_onload(Some(onload.as_ref().unchecked_ref()));
        img.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        img.set_src(src);
        onload.forget();
        onerror.forget();
    });
    let value = wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map_err(|_| load_error())?;
    let array = js_sys::Array::from(&value);
    let width = array.get(0).as_f64().unwrap_or(0.0);
    let height = array.get(1).as_f64().unwrap_or(0.0);
    let size = Size::new(width, height);
    if size.is_empty() {
        return Err(ViewerError::InvalidImage { src: src.to_string() });
    }
    Ok(size)
}
