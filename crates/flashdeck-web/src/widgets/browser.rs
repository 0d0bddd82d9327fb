//! `flashdeck::Dom` over the real document.

use flashdeck::Dom;
use rand::RngCore;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, FocusOptions, HtmlElement, HtmlInputElement};

#[derive(Debug, Clone)]
pub struct BrowserDom {
    document: Document,
}

impl BrowserDom {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl Dom for BrowserDom {
    type Element = Element;

    fn children(&self, parent: &Element) -> Vec<Element> {
        let children = parent.children();
        (0..children.length()).filter_map(|i| children.item(i)).collect()
    }

    fn parent(&self, element: &Element) -> Option<Element> {
        element.parent_element()
    }

    fn next_sibling(&self, element: &Element) -> Option<Element> {
        element.next_element_sibling()
    }

    fn attribute(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn set_attribute(&self, element: &Element, name: &str, value: &str) {
        let _ = element.set_attribute(name, value);
    }

    fn remove_attribute(&self, element: &Element, name: &str) {
        let _ = element.remove_attribute(name);
    }

    fn has_class(&self, element: &Element, class: &str) -> bool {
        element.class_list().contains(class)
    }

    fn set_class(&self, element: &Element, class: &str, enabled: bool) {
        let _ = element.class_list().toggle_with_force(class, enabled);
    }

    fn set_text(&self, element: &Element, text: &str) {
        element.set_text_content(Some(text));
    }

    fn is_checked(&self, element: &Element) -> bool {
        element
            .dyn_ref::<HtmlInputElement>()
            .map(|input| input.checked())
            .unwrap_or(false)
    }

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn remove_child(&self, parent: &Element, child: &Element) {
        let _ = parent.remove_child(child);
    }

    fn append_child(&self, parent: &Element, child: &Element) {
        let _ = parent.append_child(child);
    }

    fn active_element(&self) -> Option<Element> {
        self.document.active_element()
    }

    fn focus(&self, element: &Element, prevent_scroll: bool) {
        let Some(element) = element.dyn_ref::<HtmlElement>() else {
            return;
        };
        let options = FocusOptions::new();
        options.set_prevent_scroll(prevent_scroll);
        let _ = element.focus_with_options(&options);
    }

    fn contains(&self, ancestor: &Element, element: &Element) -> bool {
        let node: &web_sys::Node = element;
        ancestor.contains(Some(node))
    }

    fn descendants_with_class(&self, root: &Element, class: &str) -> Vec<Element> {
        let Ok(nodes) = root.query_selector_all(&format!(".{}", class)) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }
}

/// `Math.random()` as a `rand` source, so the wasm build needs no getrandom.
#[derive(Debug, Clone, Copy, Default)]
pub struct MathRandom;

impl RngCore for MathRandom {
    fn next_u32(&mut self) -> u32 {
        // Math.random() is in [0, 1); clamp anyway so rounding can't overflow.
        let scaled = js_sys::Math::random() * 4_294_967_296.0;
        scaled.min(f64::from(u32::MAX)) as u32
    }

    fn next_u64(&mut self) -> u64 {
        (u64::from(self.next_u32()) << 32) | u64::from(self.next_u32())
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}
