use crate::frame::{self, ShowcaseState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn pointer_canvas_css(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> [f32; 4] {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    [x_css, y_css, rect.width() as f32, rect.height() as f32]
}

pub fn wire_input_handlers(canvas: &web::HtmlCanvasElement, state: &Rc<RefCell<ShowcaseState>>) {
    wire_pointermove(canvas, state);
    wire_click(canvas, state);
}

fn wire_pointermove(canvas: &web::HtmlCanvasElement, state: &Rc<RefCell<ShowcaseState>>) {
    let state = state.clone();
    let canvas_for_move = canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let [x, y, w, h] = pointer_canvas_css(&ev, &canvas_for_move);
        state.borrow_mut().update_pointer_client(x, y, w, h);
    }) as Box<dyn FnMut(_)>);

    _ = canvas.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_click(canvas: &web::HtmlCanvasElement, state: &Rc<RefCell<ShowcaseState>>) {
    let state = state.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        frame::click(&state);
    }) as Box<dyn FnMut(_)>);

    _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
