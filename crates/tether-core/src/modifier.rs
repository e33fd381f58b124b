use std::rc::Rc;

use crate::Color;

/// Presentation and behavior attached to a view node.
///
/// Everything here ends up on the DOM element the host creates: classes,
/// attributes, inline style declarations and event handlers.
#[derive(Clone, Default)]
pub struct Modifier {
    pub classes: Vec<String>,
    pub attrs: Vec<(String, String)>,
    pub style: Vec<(String, String)>,
    pub node_ref: Option<String>,
    pub on_click: Option<Rc<dyn Fn()>>,
    pub semantics: Option<crate::Semantics>,
}

impl std::fmt::Debug for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Modifier")
            .field("classes", &self.classes)
            .field("attrs", &self.attrs)
            .field("style", &self.style)
            .field("node_ref", &self.node_ref)
            .field("on_click", &self.on_click.as_ref().map(|_| "..."))
            .field("semantics", &self.semantics)
            .finish()
    }
}

impl Modifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one or more whitespace separated classes.
    pub fn class(mut self, class: impl AsRef<str>) -> Self {
        for c in class.as_ref().split_whitespace() {
            if !self.classes.iter().any(|existing| existing == c) {
                self.classes.push(c.to_string());
            }
        }
        self
    }

    /// Sets an attribute, replacing a previous value with the same name.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        let property = property.into();
        let value = value.into();
        match self.style.iter_mut().find(|(p, _)| *p == property) {
            Some(slot) => slot.1 = value,
            None => self.style.push((property, value)),
        }
        self
    }

    pub fn background(self, color: Color) -> Self {
        self.style("background-color", color.to_hex())
    }

    pub fn color(self, color: Color) -> Self {
        self.style("color", color.to_hex())
    }

    pub fn border(self, width: f32, color: Color, radius: f32) -> Self {
        self.style("border", format!("{width}px solid {}", color.to_hex()))
            .style("border-radius", format!("{radius}px"))
    }

    pub fn padding(self, v: f32) -> Self {
        self.style("padding", format!("{v}px"))
    }

    pub fn margin_bottom(self, v: f32) -> Self {
        self.style("margin-bottom", format!("{v}px"))
    }

    pub fn hidden(self, hidden: bool) -> Self {
        if hidden { self.style("display", "none") } else { self }
    }

    /// Names this node so hooks can address it through a `ViewHandle`.
    pub fn node_ref(mut self, name: impl Into<String>) -> Self {
        self.node_ref = Some(name.into());
        self
    }

    pub fn on_click(mut self, f: impl Fn() + 'static) -> Self {
        self.on_click = Some(Rc::new(f));
        self
    }

    pub fn semantics(mut self, s: crate::Semantics) -> Self {
        self.semantics = Some(s);
        self
    }

    /// Attribute value by name.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}
