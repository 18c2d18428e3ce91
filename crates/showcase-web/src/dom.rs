use showcase_core::{CursorStyle, PickEvent};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{id}"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("#{id} is not a canvas: {:?}", e))
}

/// Writes the hover affordance onto `document.body`.
pub fn apply_cursor(cursor: CursorStyle) {
    let Some(body) = window_document().and_then(|d| d.body()) else {
        return;
    };
    if let Err(e) = body.style().set_property("cursor", cursor.as_css()) {
        log::warn!("[dom] cursor update failed: {:?}", e);
    }
}

/// Dispatches `ev` on `window` as a `CustomEvent` whose detail is
/// `{ id, kind, name, description }`.
pub fn dispatch_pick_event(ev: &PickEvent) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let notice = ev.notice();

    let detail = js_sys::Object::new();
    let fields: [(&str, JsValue); 4] = [
        ("id", JsValue::from_f64(notice.id.0 as f64)),
        ("kind", JsValue::from_str(&notice.kind)),
        ("name", JsValue::from_str(&notice.name)),
        ("description", JsValue::from_str(&notice.description)),
    ];
    for (key, value) in fields {
        js_sys::Reflect::set(&detail, &JsValue::from_str(key), &value)
            .map_err(|e| anyhow::anyhow!("detail.{key}: {:?}", e))?;
    }

    let init = web::CustomEventInit::new();
    init.set_detail(&detail);
    let event = web::CustomEvent::new_with_event_init_dict(ev.event_name(), &init)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    window
        .dispatch_event(&event)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}
