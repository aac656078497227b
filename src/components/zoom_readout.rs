use crate::util::format_percent;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ZoomReadoutProps {
    pub percent: u32,
    pub on_toggle_fit: Callback<()>,
}

#[function_component(ZoomReadout)]
pub fn zoom_readout(props: &ZoomReadoutProps) -> Html {
    let toggle_cb = {
        let cb = props.on_toggle_fit.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit(())
        })
    };
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());
    html! {<div onmousedown={stop} onclick={toggle_cb} title="Toggle fit / actual size" style="position:absolute; top:12px; right:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:4px 10px; font-size:16px; font-weight:600; font-variant-numeric:tabular-nums; color:#c9d1d9; cursor:pointer;">
        { format_percent(props.percent) }
    </div>}
}
