//! DOM listeners owned for the lifetime of a game handle

use std::cell::RefCell;
use std::rc::Rc;

use game_core::GameSimulation;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, EventTarget, HtmlCanvasElement, KeyboardEvent, MouseEvent};

use crate::error::ClientError;
use crate::input::pointer_click;

/// Registered click and key listeners; removed again on drop
pub struct EventListeners {
    canvas: HtmlCanvasElement,
    document: Document,
    click: Closure<dyn FnMut(MouseEvent)>,
    key_down: Closure<dyn FnMut(KeyboardEvent)>,
    key_up: Closure<dyn FnMut(KeyboardEvent)>,
}

impl EventListeners {
    pub fn attach(
        canvas: &HtmlCanvasElement,
        document: &Document,
        sim: Rc<RefCell<GameSimulation>>,
    ) -> Result<Self, ClientError> {
        let click = {
            let sim = sim.clone();
            let canvas = canvas.clone();
            Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
                let click = pointer_click(&event, &canvas);
                sim.borrow_mut().click(click);
            })
        };

        let key_down = {
            let sim = sim.clone();
            Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
                if sim.borrow_mut().key_down(&event.key()) {
                    // Space would otherwise scroll the page
                    event.prevent_default();
                }
            })
        };

        let key_up = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            sim.borrow_mut().key_up(&event.key());
        });

        let listeners = Self {
            canvas: canvas.clone(),
            document: document.clone(),
            click,
            key_down,
            key_up,
        };

        add(&listeners.canvas, "click", listeners.click.as_ref())?;
        add(&listeners.document, "keydown", listeners.key_down.as_ref())?;
        add(&listeners.document, "keyup", listeners.key_up.as_ref())?;

        Ok(listeners)
    }
}

impl Drop for EventListeners {
    fn drop(&mut self) {
        let removed = [
            remove(&self.canvas, "click", self.click.as_ref()),
            remove(&self.document, "keydown", self.key_down.as_ref()),
            remove(&self.document, "keyup", self.key_up.as_ref()),
        ];
        for result in removed {
            if let Err(err) = result {
                log::warn!("Failed to remove listener: {err}");
            }
        }
        log::debug!("Event listeners removed");
    }
}

fn add(target: &EventTarget, kind: &str, callback: &JsValue) -> Result<(), ClientError> {
    target
        .add_event_listener_with_callback(kind, callback.unchecked_ref())
        .map_err(ClientError::dom)
}

fn remove(target: &EventTarget, kind: &str, callback: &JsValue) -> Result<(), ClientError> {
    target
        .remove_event_listener_with_callback(kind, callback.unchecked_ref())
        .map_err(ClientError::dom)
}
