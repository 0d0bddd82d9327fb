use std::cell::RefCell;
use std::rc::Rc;

use flashdeck::{FlashcardController, widget_roots};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, Event};

use super::browser::{BrowserDom, MathRandom};

type Controller = FlashcardController<BrowserDom, MathRandom>;

/// Mount a controller on every widget root in the document.
///
/// A root that fails to mount is logged and skipped; the others still work.
pub fn mount_all() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        leptos::logging::warn!("[flashcards] no document, nothing to mount");
        return;
    };
    let Some(scope) = document.document_element() else {
        return;
    };
    let dom = BrowserDom::new(document);

    let mut mounted = 0;
    for (index, root) in widget_roots(&dom, &scope).into_iter().enumerate() {
        match FlashcardController::mount(dom.clone(), root, index, MathRandom) {
            Ok(controller) => {
                wire(Rc::new(RefCell::new(controller)));
                mounted += 1;
            }
            Err(e) => leptos::logging::warn!("[flashcards] widget #{} not mounted: {}", index, e),
        }
    }
    leptos::logging::log!("[flashcards] mounted {} widget(s)", mounted);
}

/// One `change` listener per mode selector, one delegated `click` listener on
/// the card list. Widgets live as long as the page, so the closures are leaked.
fn wire(controller: Rc<RefCell<Controller>>) {
    let (selectors, list) = {
        let c = controller.borrow();
        (c.mode_selectors().to_vec(), c.card_list().clone())
    };

    for selector in selectors {
        let controller = controller.clone();
        let on_change = Closure::wrap(Box::new(move |_: Event| {
            // Handlers never overlap; a held borrow means re-entry, so skip it.
            if let Ok(mut controller) = controller.try_borrow_mut() {
                controller.handle_mode_change();
            }
        }) as Box<dyn FnMut(Event)>);
        if let Err(e) = selector.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref()) {
            leptos::logging::warn!("[flashcards] change listener not attached: {:?}", e);
        }
        on_change.forget();
    }

    let on_click = Closure::wrap(Box::new(move |event: Event| {
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        if let Ok(controller) = controller.try_borrow() {
            controller.handle_click(&target);
        }
    }) as Box<dyn FnMut(Event)>);
    if let Err(e) = list.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref()) {
        leptos::logging::warn!("[flashcards] click listener not attached: {:?}", e);
    }
    on_click.forget();
}
