use tether_core::*;

use crate::Box;

const CONTAINER: &str = "container";

/// Math rendered by the host's typesetting engine.
pub struct Latex {
    widget: Widget,
    value: Signal<String>,
}

impl Latex {
    pub fn new(source: impl Into<String>, theme: &Theme, assets: &AssetPaths) -> Result<Self> {
        let value = signal(source.into());

        let scope = Scope::new(
            assets.katex(),
            Box(Modifier::new()
                .class(theme.class("latex"))
                .node_ref(CONTAINER)),
        );
        scope.bind("value", &value)?;
        scope.on_import({
            let value = value.clone();
            move |view| {
                view.typeset_init(CONTAINER)?;
                view.typeset_update(CONTAINER, &value.get())?;
                Ok(())
            }
        });
        scope.on_change("value", |view, source: &String| {
            Ok(view.typeset_update(CONTAINER, source)?)
        })?;

        let widget = Widget::new(
            "latex",
            State::new().observable("value", &value),
            scope,
            None,
            scope_layout(),
        )?;
        Ok(Self { widget, value })
    }

    pub fn value(&self) -> Signal<String> {
        self.value.clone()
    }

    pub fn widget(&self) -> &Widget {
        &self.widget
    }

    pub fn render(&self) -> View {
        self.widget.render()
    }
}

impl Invoke for Latex {
    type Payload = String;

    fn invoke(&self, source: String) -> Result<()> {
        self.widget.set("value", source)
    }

    fn trigger(&self) -> Result<()> {
        self.widget.trigger("value")
    }
}
