use std::cell::Cell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Event, HtmlElement, HtmlInputElement, KeyboardEvent, MouseEvent, WheelEvent};
use yew::prelude::*;

use crate::config::ViewerConfig;
use crate::controller::WheelInput;
use crate::engine;
use crate::error::ViewerError;
use crate::loader::load_natural_size;
use crate::model::{LoadStatus, ViewerAction, ViewerState};
use crate::state::{Point, Size};
use crate::util::{px, rotation_label};

use super::{viewer_toolbar::ViewerToolbar, zoom_readout::ZoomReadout};

#[derive(Properties, PartialEq, Clone)]
pub struct ImageViewerProps {
    pub src: AttrValue,
    #[prop_or_default]
    pub config: ViewerConfig,
    /// Fired once per failed source.
    #[prop_or_default]
    pub on_load_error: Callback<ViewerError>,
}

fn measure(el: &HtmlElement) -> Size {
    Size::new(el.client_width() as f64, el.client_height() as f64)
}

fn local_point(el: &Element, client_x: i32, client_y: i32) -> Point {
    let rect = el.get_bounding_client_rect();
    Point::new(client_x as f64 - rect.left(), client_y as f64 - rect.top())
}

/// Window resize, drag tracking and the non-passive wheel listener. The
/// guards unregister themselves when dropped.
fn attach_listeners(
    container_ref: &NodeRef,
    dispatcher: UseReducerDispatcher<ViewerState>,
) -> Result<Vec<EventListener>, ViewerError> {
    let window = web_sys::window().ok_or_else(|| ViewerError::Dom("no global `window`".into()))?;
    let container: HtmlElement = container_ref
        .cast::<HtmlElement>()
        .ok_or_else(|| ViewerError::Dom("viewer container not mounted".into()))?;

    dispatcher.dispatch(ViewerAction::Resize {
        container: measure(&container),
    });

    let resize = {
        let container = container.clone();
        let dispatcher = dispatcher.clone();
        EventListener::new(&window, "resize", move |_| {
            dispatcher.dispatch(ViewerAction::Resize {
                container: measure(&container),
            });
        })
    };
    let mousemove = {
        let dispatcher = dispatcher.clone();
        EventListener::new(&window, "mousemove", move |event: &Event| {
            if let Some(e) = event.dyn_ref::<MouseEvent>() {
                dispatcher.dispatch(ViewerAction::PointerMove {
                    x: e.client_x() as f64,
                    y: e.client_y() as f64,
                });
            }
        })
    };
    let mouseup = {
        let dispatcher = dispatcher.clone();
        EventListener::new(&window, "mouseup", move |_| {
            dispatcher.dispatch(ViewerAction::PointerUp);
        })
    };
    let wheel = {
        let el: Element = container.clone().into();
        let options = EventListenerOptions {
            phase: EventListenerPhase::Bubble,
            passive: false,
        };
        EventListener::new_with_options(&container, "wheel", options, move |event: &Event| {
            let Some(e) = event.dyn_ref::<WheelEvent>() else {
                return;
            };
            e.prevent_default();
            let p = local_point(&el, e.client_x(), e.client_y());
            dispatcher.dispatch(ViewerAction::Wheel(WheelInput {
                x: p.x,
                y: p.y,
                delta_x: e.delta_x(),
                delta_y: e.delta_y(),
                delta_mode: e.delta_mode(),
                pan_modifier: e.ctrl_key() || e.meta_key(),
            }));
        })
    };
    Ok(vec![resize, mousemove, mouseup, wheel])
}

fn key_action(key: &str) -> Option<ViewerAction> {
    match key {
        "0" => Some(ViewerAction::ToggleFit { anchor: None }),
        "f" | "F" => Some(ViewerAction::FitToWindow),
        "+" | "=" => Some(ViewerAction::ZoomIn),
        "-" => Some(ViewerAction::ZoomOut),
        "r" | "R" => Some(ViewerAction::Rotate),
        "b" | "B" => Some(ViewerAction::CycleBackground),
        _ => None,
    }
}

fn attach_keyboard(dispatcher: UseReducerDispatcher<ViewerState>) -> Result<EventListener, ViewerError> {
    let window = web_sys::window().ok_or_else(|| ViewerError::Dom("no global `window`".into()))?;
    Ok(EventListener::new(&window, "keydown", move |event: &Event| {
        let Some(e) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if e.repeat() || e.ctrl_key() || e.meta_key() || e.alt_key() {
            return;
        }
        let typing = e
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            .is_some();
        if typing {
            return;
        }
        if let Some(action) = key_action(&e.key()) {
            e.prevent_default();
            dispatcher.dispatch(action);
        }
    }))
}

#[function_component(ImageViewer)]
pub fn image_viewer(props: &ImageViewerProps) -> Html {
    let container_ref = use_node_ref();
    let initial_config = props.config.clone();
    let state = use_reducer(move || ViewerState::new(initial_config));

    // Config changes from the host
    {
        let dispatcher = state.dispatcher();
        use_effect_with(props.config.clone(), move |config| {
            dispatcher.dispatch(ViewerAction::SetConfig(config.clone()));
            || ()
        });
    }

    // Load on every src change; a stale load is discarded, not aborted.
    {
        let dispatcher = state.dispatcher();
        let on_load_error = props.on_load_error.clone();
        use_effect_with(props.src.clone(), move |src| {
            let src = src.to_string();
            let cancelled = Rc::new(Cell::new(false));
            dispatcher.dispatch(ViewerAction::BeginLoad { src: src.clone() });
            {
                let cancelled = cancelled.clone();
                spawn_local(async move {
                    let result = load_natural_size(&src).await;
                    if cancelled.get() {
                        log::debug!("dropping result for replaced source {src}");
                        return;
                    }
                    match result {
                        Ok(natural) => dispatcher.dispatch(ViewerAction::ImageLoaded { src, natural }),
                        Err(error) => {
                            on_load_error.emit(error.clone());
                            dispatcher.dispatch(ViewerAction::ImageFailed { src, error });
                        }
                    }
                });
            }
            move || cancelled.set(true)
        });
    }

    // Listeners live for the component's lifetime.
    {
        let container_ref = container_ref.clone();
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            let listeners = attach_listeners(&container_ref, dispatcher).unwrap_or_else(|err| {
                log::warn!("{err}");
                Vec::new()
            });
            move || drop(listeners)
        });
    }

    // Shortcuts only while there is an image to act on.
    {
        let dispatcher = state.dispatcher();
        use_effect_with(state.is_loaded(), move |loaded| {
            let listener = if *loaded {
                attach_keyboard(dispatcher)
                    .map_err(|err| log::warn!("{err}"))
                    .ok()
            } else {
                None
            };
            move || drop(listener)
        });
    }

    let on_mouse_down = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: MouseEvent| {
            if e.button() != 0 {
                return;
            }
            e.prevent_default();
            dispatcher.dispatch(ViewerAction::PointerDown {
                x: e.client_x() as f64,
                y: e.client_y() as f64,
            });
        })
    };
    let on_image_click = {
        let dispatcher = state.dispatcher();
        let container_ref = container_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(el) = container_ref.cast::<Element>() else {
                return;
            };
            let p = local_point(&el, e.client_x(), e.client_y());
            dispatcher.dispatch(ViewerAction::Click {
                x: p.x,
                y: p.y,
                detail: e.detail(),
            });
        })
    };
    let emit = |action: ViewerAction| {
        let dispatcher = state.dispatcher();
        Callback::from(move |()| dispatcher.dispatch(action.clone()))
    };

    let g = state.geometry;
    let cursor = if state.is_dragging() {
        "grabbing"
    } else if state.is_loaded() {
        "grab"
    } else {
        "default"
    };
    let container_style = format!(
        "position:relative; width:100%; height:100%; overflow:hidden; user-select:none; cursor:{}; {}",
        cursor,
        state.background.css()
    );
    let label_style = "position:absolute; top:50%; left:50%; transform:translate(-50%, -50%); padding:6px 12px; border-radius:6px; background:rgba(22,27,34,0.9); color:#c9d1d9; font-size:14px;";

    let content = match &state.status {
        LoadStatus::Loaded => {
            let p = g.placement;
            let b = engine::image_box(&g);
            let wrapper_style = format!(
                "position:absolute; left:0; top:0; transform:translate({}, {}); width:{}; height:{};",
                px(p.left),
                px(p.top),
                px(p.width),
                px(p.height)
            );
            let img_style = format!(
                "position:absolute; left:50%; top:50%; max-width:none; width:{}; height:{}; transform:translate(-50%, -50%) rotate({}deg);",
                px(b.width),
                px(b.height),
                b.rotation
            );
            html! {
                <>
                    <div onclick={on_image_click} style={wrapper_style}>
                        <img src={props.src.clone()} alt="image" draggable="false" style={img_style} />
                    </div>
                    <ViewerToolbar
                        toggle_label={state.toggle_label()}
                        rotation_label={rotation_label(g.display_rotation())}
                        background_name={state.background.name()}
                        on_toggle_fit={emit(ViewerAction::ToggleFit { anchor: None })}
                        on_zoom_in={emit(ViewerAction::ZoomIn)}
                        on_zoom_out={emit(ViewerAction::ZoomOut)}
                        on_rotate={emit(ViewerAction::Rotate)}
                        on_cycle_background={emit(ViewerAction::CycleBackground)}
                    />
                    <ZoomReadout
                        percent={state.zoom_percent()}
                        on_toggle_fit={emit(ViewerAction::ToggleFit { anchor: None })}
                    />
                </>
            }
        }
        LoadStatus::Failed(err) => html! { <span style={label_style}>{ err.to_string() }</span> },
        LoadStatus::Idle | LoadStatus::Loading => html! { <span style={label_style}>{"Loading..."}</span> },
    };

    html! {
        <div ref={container_ref} class={classes!("image-viewer", state.is_dragging().then_some("dragging"))} style={container_style} onmousedown={on_mouse_down}>
            { content }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortcut_keys_map_to_actions() {
        assert_eq!(key_action("0"), Some(ViewerAction::ToggleFit { anchor: None }));
        assert_eq!(key_action("f"), Some(ViewerAction::FitToWindow));
        assert_eq!(key_action("="), Some(ViewerAction::ZoomIn));
        assert_eq!(key_action("-"), Some(ViewerAction::ZoomOut));
        assert_eq!(key_action("R"), Some(ViewerAction::Rotate));
        assert_eq!(key_action("b"), Some(ViewerAction::CycleBackground));
        assert_eq!(key_action("x"), None);
    }
}
