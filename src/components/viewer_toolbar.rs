use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ViewerToolbarProps {
    pub toggle_label: AttrValue,
    pub rotation_label: String,
    pub background_name: AttrValue,
    pub on_toggle_fit: Callback<()>,
    pub on_zoom_in: Callback<()>,
    pub on_zoom_out: Callback<()>,
    pub on_rotate: Callback<()>,
    pub on_cycle_background: Callback<()>,
}

#[function_component(ViewerToolbar)]
pub fn viewer_toolbar(props: &ViewerToolbarProps) -> Html {
    let tf = {
        let cb = props.on_toggle_fit.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let zi = {
        let cb = props.on_zoom_in.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let zo = {
        let cb = props.on_zoom_out.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let rot = {
        let cb = props.on_rotate.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let bg = {
        let cb = props.on_cycle_background.clone();
        Callback::from(move |_| cb.emit(()))
    };
    // Presses on the toolbar must not arm a drag on the viewer underneath.
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());
    html! {<div onmousedown={stop.clone()} onclick={stop} style="position:absolute; left:12px; bottom:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; display:flex; gap:6px; align-items:center; color:#c9d1d9; font-size:13px;">
        <button onclick={tf} title="Toggle fit / actual size (0)">{ props.toggle_label.clone() }</button>
        <span style="width:8px;"></span>
        <button onclick={zo} title="Zoom out (-)"> {"-"} </button>
        <button onclick={zi} title="Zoom in (+)"> {"+"} </button>
        <span style="width:8px;"></span>
        <button onclick={rot} title="Rotate (R)">{ props.rotation_label.clone() }</button>
        <button onclick={bg} title="Background (B)">{ format!("Background: {}", props.background_name) }</button>
    </div>}
}
