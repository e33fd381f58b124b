//! Construction of any widget variant from a closed description.

use std::collections::BTreeSet;

use tether_core::*;

use crate::{
    Accordion, AccordionOption, Alert, Confirm, ConfirmCallback, Highlight, Latex, Notifications,
    Selection,
};

/// What to build. Theme and asset paths come from the [`Config`] passed to [`build`].
#[derive(Clone)]
pub enum WidgetSpec {
    Alert {
        text: String,
    },
    Confirm {
        text: String,
        callback: ConfirmCallback,
    },
    Highlight {
        text: String,
        language: String,
    },
    Latex {
        source: String,
    },
    Notifications {
        items: Vec<View>,
    },
    Accordion {
        options: Vec<AccordionOption>,
        /// Several panels open at once, all closed initially.
        multiple: bool,
    },
}

/// A built widget of any variant.
pub enum Element {
    Alert(Alert),
    Confirm(Confirm),
    Highlight(Highlight),
    Latex(Latex),
    Notifications(Notifications),
    Accordion(Accordion),
}

impl Element {
    pub fn widget(&self) -> &Widget {
        match self {
            Element::Alert(w) => w.widget(),
            Element::Confirm(w) => w.widget(),
            Element::Highlight(w) => w.widget(),
            Element::Latex(w) => w.widget(),
            Element::Notifications(w) => w.widget(),
            Element::Accordion(w) => w.widget(),
        }
    }

    pub fn kind(&self) -> &'static str {
        self.widget().kind()
    }

    pub fn render(&self) -> View {
        self.widget().render()
    }

    pub fn trigger(&self) -> Result<()> {
        match self {
            Element::Alert(w) => w.trigger(),
            Element::Confirm(w) => w.trigger(),
            Element::Highlight(w) => w.trigger(),
            Element::Latex(w) => w.trigger(),
            Element::Notifications(w) => w.trigger(),
            Element::Accordion(w) => w.trigger(),
        }
    }
}

pub fn build(spec: WidgetSpec, config: &Config) -> Result<Element> {
    let theme = &config.theme;
    let assets = &config.assets;
    Ok(match spec {
        WidgetSpec::Alert { text } => Element::Alert(Alert::new(text, theme)?),
        WidgetSpec::Confirm { text, callback } => {
            Element::Confirm(Confirm::new(move |answer| callback(answer), text, theme)?)
        }
        WidgetSpec::Highlight { text, language } => {
            Element::Highlight(Highlight::new(text, language, theme, assets)?)
        }
        WidgetSpec::Latex { source } => Element::Latex(Latex::new(source, theme, assets)?),
        WidgetSpec::Notifications { items } => {
            Element::Notifications(Notifications::new(items, theme)?)
        }
        WidgetSpec::Accordion { options, multiple } => {
            let selection = if multiple {
                Selection::Multiple(BTreeSet::new())
            } else {
                Selection::Single(0)
            };
            Element::Accordion(Accordion::new(options, selection, theme)?)
        }
    })
}
