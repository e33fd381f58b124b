#![allow(non_snake_case)]
//! Widgets built on the tether contract, plus the view helpers their layouts use.
//!
//! Every widget here is a thin configuration of [`tether_core::Widget`]:
//!
//! | widget | state | output | host calls |
//! |--------|-------|--------|------------|
//! | [`Alert`] | `text` | `text` | `alert` |
//! | [`Confirm`] | `text`, `function`, `value` | `value` | `confirm` |
//! | [`Highlight`] | `value` | `value` | `write_text`, `highlight` |
//! | [`Latex`] | `value` | `value` | `typeset_init`, `typeset_update` |
//! | [`Notifications`] | `list` | `list` | `rerender` |
//! | [`Accordion`] | `index`, `options` | `index` | `rerender` |
//!
//! [`build`] constructs any of them from a [`WidgetSpec`].

pub mod accordion;
pub mod alert;
pub mod confirm;
pub mod factory;
pub mod highlight;
pub mod latex;
pub mod notifications;
mod tests;

pub use accordion::{Accordion, AccordionOption, OptionRecord, Selection};
pub use alert::Alert;
pub use confirm::{Confirm, ConfirmCall, ConfirmCallback};
pub use factory::{Element, WidgetSpec, build};
pub use highlight::Highlight;
pub use latex::Latex;
pub use notifications::{Notice, NoticeKey, Notifications};

use tether_core::*;

pub fn Box(modifier: Modifier) -> View {
    View::element("div").modifier(modifier)
}

pub fn Row(modifier: Modifier) -> View {
    View::element("div").modifier(
        modifier
            .style("display", "flex")
            .style("flex-direction", "row"),
    )
}

pub fn Column(modifier: Modifier) -> View {
    View::element("div").modifier(
        modifier
            .style("display", "flex")
            .style("flex-direction", "column"),
    )
}

pub fn Text(text: impl Into<String>) -> View {
    View::text(text)
}

pub fn Span(modifier: Modifier, text: impl Into<String>) -> View {
    View::element("span")
        .modifier(modifier)
        .child(Text(text))
}

pub fn Button(modifier: Modifier, label: impl Into<String>, on_click: impl Fn() + 'static) -> View {
    View::element("button")
        .modifier(
            modifier
                .attr("type", "button")
                .on_click(on_click),
        )
        .child(Text(label))
}

/// `<pre><code>` block; the code element carries `node_ref`.
pub fn CodeBlock(modifier: Modifier, node_ref: &str, language: &str) -> View {
    View::element("pre").modifier(modifier).child(
        View::element("code").modifier(
            Modifier::new()
                .class(format!("language-{language}"))
                .node_ref(node_ref)
                .semantics(Semantics::new(Role::Code)),
        ),
    )
}

/// Pre-rendered markup, inserted as is.
pub fn Markup(html: impl Into<String>) -> View {
    View::markup(html)
}

/// Extension trait for child building
pub trait ViewExt: Sized {
    fn child(self, children: impl IntoChildren) -> Self;
}

impl ViewExt for View {
    fn child(self, children: impl IntoChildren) -> Self {
        self.with_children(children.into_children())
    }
}

pub trait IntoChildren {
    fn into_children(self) -> Vec<View>;
}

impl IntoChildren for View {
    fn into_children(self) -> Vec<View> {
        vec![self]
    }
}

impl IntoChildren for Vec<View> {
    fn into_children(self) -> Vec<View> {
        self
    }
}

impl<const N: usize> IntoChildren for [View; N] {
    fn into_children(self) -> Vec<View> {
        self.into()
    }
}

macro_rules! impl_into_children_tuple {
    ($($idx:tt $t:ident),+) => {
        impl<$($t: IntoChildren),+> IntoChildren for ($($t,)+) {
            fn into_children(self) -> Vec<View> {
                let mut v = Vec::new();
                $(v.extend(self.$idx.into_children());)+
                v
            }
        }
    };
}

impl_into_children_tuple!(0 A, 1 B);
impl_into_children_tuple!(0 A, 1 B, 2 C);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D);
