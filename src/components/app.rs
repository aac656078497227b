use super::image_viewer::ImageViewer;
use crate::config::ViewerConfig;
use crate::error::ViewerError;
use web_sys::HtmlInputElement;
use yew::prelude::*;

pub const DEFAULT_SRC: &str =
    "https://gd-hbimg.huaban.com/2d2024f66eb38ff770f2d29aedd935ab03eb94194e322-hWH3rf";
const CONFIG_KEY: &str = "image_viewer_config";

// Optional override stored as JSON under CONFIG_KEY; bad values are ignored.
fn load_config() -> ViewerConfig {
    let raw = web_sys::window()
        .and_then(|win| win.local_storage().ok().flatten())
        .and_then(|store| store.get_item(CONFIG_KEY).ok().flatten());
    match raw {
        Some(raw) => ViewerConfig::from_json(&raw).unwrap_or_else(|err| {
            log::warn!("{err}; using defaults");
            ViewerConfig::default()
        }),
        None => ViewerConfig::default(),
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let src = use_state(|| AttrValue::from(DEFAULT_SRC));
    let config = use_state(load_config);
    let error = use_state(|| None::<String>);
    let input_ref = use_node_ref();

    let apply = {
        let src = src.clone();
        let error = error.clone();
        let input_ref = input_ref.clone();
        Callback::from(move |_| {
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                let value = input.value().trim().to_string();
                if !value.is_empty() {
                    error.set(None);
                    src.set(AttrValue::from(value));
                }
            }
        })
    };
    let on_load_error = {
        let error = error.clone();
        Callback::from(move |err: ViewerError| error.set(Some(err.to_string())))
    };

    html! {
        <div style="position:fixed; inset:0; display:flex; flex-direction:column; background:#0e1116; color:#c9d1d9; font-family:sans-serif;">
            <div id="top-bar" style="display:flex; gap:8px; align-items:center; padding:8px 12px; border-bottom:1px solid #30363d;">
                <input ref={input_ref} type="text" value={(*src).clone()} style="flex:1; padding:4px 8px;" />
                <button onclick={apply}>{"Open"}</button>
                { if let Some(msg) = &*error { html!{ <span style="color:#f85149; font-size:12px;">{ msg.clone() }</span> } } else { html!{} } }
            </div>
            <div style="flex:1; position:relative; min-height:0;">
                <ImageViewer src={(*src).clone()} config={(*config).clone()} {on_load_error} />
            </div>
        </div>
    }
}
