use tether_core::*;

use crate::CodeBlock;

const CODE: &str = "code";

/// Syntax highlighted code block. The language is fixed at construction.
pub struct Highlight {
    widget: Widget,
    value: Signal<String>,
    language: String,
}

impl Highlight {
    pub fn new(
        text: impl Into<String>,
        language: impl Into<String>,
        theme: &Theme,
        assets: &AssetPaths,
    ) -> Result<Self> {
        let value = signal(text.into());
        let language = language.into();
        if language.trim().is_empty() {
            return Err(WidgetError::InvalidConfig(
                "highlight needs a language".to_string(),
            ));
        }

        let scope = Scope::new(
            assets.highlight(),
            CodeBlock(Modifier::new().class(theme.class("highlight")), CODE, &language),
        );
        scope.bind("value", &value)?;
        scope.on_import({
            let value = value.clone();
            let language = language.clone();
            move |view| paint(view, &value.get(), &language)
        });
        scope.on_change("value", {
            let language = language.clone();
            move |view, text: &String| paint(view, text, &language)
        })?;

        let widget = Widget::new(
            "highlight",
            State::new().observable("value", &value),
            scope,
            None,
            scope_layout(),
        )?;
        Ok(Self {
            widget,
            value,
            language,
        })
    }

    pub fn value(&self) -> Signal<String> {
        self.value.clone()
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn widget(&self) -> &Widget {
        &self.widget
    }

    pub fn render(&self) -> View {
        self.widget.render()
    }
}

fn paint(view: &ViewHandle, text: &str, language: &str) -> Result<()> {
    view.write_text(CODE, text)?;
    view.highlight(CODE, language)?;
    Ok(())
}

impl Invoke for Highlight {
    type Payload = String;

    fn invoke(&self, text: String) -> Result<()> {
        self.widget.set("value", text)
    }

    fn trigger(&self) -> Result<()> {
        self.widget.trigger("value")
    }
}
