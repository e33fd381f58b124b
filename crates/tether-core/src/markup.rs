//! Static HTML serialization of view fragments.
//!
//! Used to pre-render content that is shipped as a plain string (accordion
//! panels) and by headless hosts to record what a node would show.
//! Event handlers are not serialized.

use std::fmt::Write;

use crate::{View, ViewKind};

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn to_html(view: &View) -> String {
    let mut out = String::new();
    write_view(&mut out, view);
    out
}

fn write_view(out: &mut String, view: &View) {
    match &view.kind {
        ViewKind::Text { text } => out.push_str(&escape(text)),
        ViewKind::Markup { html } => out.push_str(html),
        ViewKind::Element { tag } => {
            open_tag(out, tag, view, &[]);
            write_children(out, view);
            let _ = write!(out, "</{tag}>");
        }
        ViewKind::Scope(scope) => {
            let id = scope.id().to_string();
            open_tag(out, "div", view, &[("data-scope", id.as_str())]);
            write_view(out, &scope.template());
            write_children(out, view);
            out.push_str("</div>");
        }
    }
}

fn write_children(out: &mut String, view: &View) {
    for child in &view.children {
        write_view(out, child);
    }
}

fn open_tag(out: &mut String, tag: &str, view: &View, extra: &[(&str, &str)]) {
    let m = &view.modifier;
    let _ = write!(out, "<{tag}");
    if !m.classes.is_empty() {
        let _ = write!(out, " class=\"{}\"", escape(&m.classes.join(" ")));
    }
    for (name, value) in extra.iter().copied() {
        let _ = write!(out, " {name}=\"{}\"", escape(value));
    }
    for (name, value) in &m.attrs {
        let _ = write!(out, " {name}=\"{}\"", escape(value));
    }
    if let Some(r) = &m.node_ref {
        let _ = write!(out, " data-ref=\"{}\"", escape(r));
    }
    if let Some(sem) = &m.semantics {
        let _ = write!(out, " role=\"{}\"", sem.role.aria());
        if let Some(label) = &sem.label {
            let _ = write!(out, " aria-label=\"{}\"", escape(label));
        }
        if let Some(expanded) = sem.expanded {
            let _ = write!(out, " aria-expanded=\"{expanded}\"");
        }
    }
    if !m.style.is_empty() {
        let style: Vec<String> = m.style.iter().map(|(p, v)| format!("{p}: {v}")).collect();
        let _ = write!(out, " style=\"{}\"", escape(&style.join("; ")));
    }
    out.push('>');
}
