//! Accordion: labelled panels, opened one at a time or several at once.
//!
//! The mode is fixed at construction by the shape of the initial
//! [`Selection`]. Panel content is pre-rendered to static markup, and the
//! panels are shipped to the host as [`OptionRecord`]s.

use std::collections::BTreeSet;

use serde::Serialize;
use tether_core::*;

use crate::{Box, Button, Column, Markup, ViewExt};

const PANELS: &str = "panels";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    /// Exactly one open panel.
    Single(usize),
    /// Any number of open panels.
    Multiple(BTreeSet<usize>),
}

impl Selection {
    pub fn contains(&self, i: usize) -> bool {
        match self {
            Selection::Single(active) => *active == i,
            Selection::Multiple(set) => set.contains(&i),
        }
    }

    pub fn is_multiple(&self) -> bool {
        matches!(self, Selection::Multiple(_))
    }

    /// Single mode replaces the open panel; multiple mode flips membership.
    pub fn toggled(&self, i: usize) -> Selection {
        match self {
            Selection::Single(_) => Selection::Single(i),
            Selection::Multiple(set) => {
                let mut set = set.clone();
                if !set.remove(&i) {
                    set.insert(i);
                }
                Selection::Multiple(set)
            }
        }
    }

    /// Drops positions that no longer exist among `len` options.
    pub fn clamped(&self, len: usize) -> Selection {
        match self {
            Selection::Single(i) => Selection::Single((*i).min(len.saturating_sub(1))),
            Selection::Multiple(set) => {
                Selection::Multiple(set.iter().copied().filter(|i| *i < len).collect())
            }
        }
    }

    fn fits(&self, len: usize) -> bool {
        *self == self.clamped(len)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AccordionOption {
    pub label: String,
    /// Static markup of the panel body.
    pub content: String,
}

impl AccordionOption {
    pub fn new(label: impl Into<String>, content: &View) -> Self {
        Self {
            label: label.into(),
            content: markup::to_html(content),
        }
    }

    pub fn from_markup(label: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            content: html.into(),
        }
    }
}

/// One panel as handed to the host's declarative binding.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OptionRecord {
    pub i: usize,
    pub label: String,
    pub content: String,
    pub active: bool,
}

pub struct Accordion {
    widget: Widget,
    options: Signal<Vec<AccordionOption>>,
    index: Signal<Selection>,
}

impl Accordion {
    pub fn new(options: Vec<AccordionOption>, index: Selection, theme: &Theme) -> Result<Self> {
        if !index.fits(options.len()) {
            return Err(WidgetError::InvalidConfig(format!(
                "accordion selection {index:?} is out of range for {} option(s)",
                options.len()
            )));
        }
        let options = signal(options);
        let index = signal(index);

        // Keep the selection valid when options are replaced from outside.
        options.subscribe({
            let index = index.clone();
            move |opts: &Vec<AccordionOption>| {
                let current = index.get();
                let clamped = current.clamped(opts.len());
                if clamped != current {
                    log::warn!("accordion: selection {current:?} clamped to {clamped:?}");
                    index.set(clamped);
                }
            }
        });

        let scope = Scope::new(
            vec![],
            Box(Modifier::new()
                .class(theme.class("accordion"))
                .node_ref(PANELS)
                .semantics(Semantics::new(Role::Group))),
        );
        scope.bind("index", &index)?;
        scope.bind("options", &options)?;

        let redraw = {
            let options = options.downgrade();
            let index = index.downgrade();
            let theme = theme.clone();
            move |view: &ViewHandle| -> Result<()> {
                let (Some(options), Some(index)) = (options.upgrade(), index.upgrade()) else {
                    return Ok(());
                };
                let panels = panels_view(&records(&options, &index), &options, &index, &theme);
                Ok(view.rerender(PANELS, &panels)?)
            }
        };
        scope.on_import(redraw.clone());
        scope.on_change("index", {
            let redraw = redraw.clone();
            move |view, _: &Selection| redraw(view)
        })?;
        scope.on_change("options", move |view, _: &Vec<AccordionOption>| redraw(view))?;

        let widget = Widget::new(
            "accordion",
            State::new()
                .observable("index", &index)
                .observable("options", &options),
            scope,
            Some("index"),
            scope_layout(),
        )?;
        Ok(Self {
            widget,
            options,
            index,
        })
    }

    /// Single mode, first panel open.
    pub fn single(options: Vec<AccordionOption>, theme: &Theme) -> Result<Self> {
        Self::new(options, Selection::Single(0), theme)
    }

    /// Multiple mode, everything closed.
    pub fn multiple(options: Vec<AccordionOption>, theme: &Theme) -> Result<Self> {
        Self::new(options, Selection::Multiple(BTreeSet::new()), theme)
    }

    pub fn index(&self) -> Signal<Selection> {
        self.index.clone()
    }

    pub fn options(&self) -> Signal<Vec<AccordionOption>> {
        self.options.clone()
    }

    /// Click handler of panel `i`. Unknown positions are ignored.
    pub fn toggle(&self, i: usize) -> bool {
        toggle(&self.options, &self.index, i)
    }

    /// Replaces the options; the selection is clamped to the new length.
    pub fn set_options(&self, options: Vec<AccordionOption>) {
        self.options.set(options);
    }

    pub fn records(&self) -> Vec<OptionRecord> {
        records(&self.options, &self.index)
    }

    /// The panels as the host shows them, headers clickable.
    pub fn panels_view(&self, theme: &Theme) -> View {
        panels_view(&self.records(), &self.options, &self.index, theme)
    }

    pub fn widget(&self) -> &Widget {
        &self.widget
    }

    pub fn render(&self) -> View {
        self.widget.render()
    }
}

impl Invoke for Accordion {
    type Payload = Selection;

    /// Sets the selection; it must keep the mode and fit the options.
    fn invoke(&self, selection: Selection) -> Result<()> {
        let len = self.options.with(Vec::len);
        if selection.is_multiple() != self.index.with(Selection::is_multiple) || !selection.fits(len) {
            return Err(WidgetError::InvalidConfig(format!(
                "selection {selection:?} does not fit this accordion"
            )));
        }
        self.widget.set("index", selection)
    }

    fn trigger(&self) -> Result<()> {
        self.widget.trigger("index")
    }
}

fn toggle(options: &Signal<Vec<AccordionOption>>, index: &Signal<Selection>, i: usize) -> bool {
    let len = options.with(Vec::len);
    if i >= len {
        log::warn!("accordion: no panel {i} (len {len})");
        return false;
    }
    let next = index.with(|sel| sel.toggled(i));
    index.set(next);
    true
}

fn records(options: &Signal<Vec<AccordionOption>>, index: &Signal<Selection>) -> Vec<OptionRecord> {
    let selection = index.get();
    options.with(|opts| {
        opts.iter()
            .enumerate()
            .map(|(i, o)| OptionRecord {
                i,
                label: o.label.clone(),
                content: o.content.clone(),
                active: selection.contains(i),
            })
            .collect()
    })
}

/// Headers resolve their position against the options current at click time.
fn panels_view(
    records: &[OptionRecord],
    options: &Signal<Vec<AccordionOption>>,
    index: &Signal<Selection>,
    theme: &Theme,
) -> View {
    Column(Modifier::new()).child(
        records
            .iter()
            .map(|r| {
                let options = options.downgrade();
                let index = index.downgrade();
                let i = r.i;
                let header_mod = Modifier::new()
                    .class(theme.class("accordion-header"))
                    .semantics(Semantics::new(Role::Button).expanded(r.active));
                let header_mod = if r.active {
                    header_mod.background(theme.primary).color(theme.on_primary)
                } else {
                    header_mod
                };
                Box(Modifier::new().class(theme.class("accordion-item"))).child((
                    Button(header_mod, r.label.clone(), move || {
                        if let (Some(options), Some(index)) = (options.upgrade(), index.upgrade()) {
                            toggle(&options, &index, i);
                        }
                    }),
                    Box(theme
                        .surface_box()
                        .class(theme.class("accordion-body"))
                        .semantics(Semantics::new(Role::Region))
                        .hidden(!r.active))
                    .child(Markup(r.content.clone())),
                ))
            })
            .collect::<Vec<_>>(),
    )
}
