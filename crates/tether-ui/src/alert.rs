use tether_core::*;

use crate::Box;

/// Native alert dialog. Setting the text pops the dialog with it.
///
/// ```rust
/// use std::rc::Rc;
/// use tether_core::*;
/// use tether_ui::Alert;
///
/// let host = Rc::new(HeadlessHost::new());
/// let mut page = Page::new(host.clone());
/// let alert = Alert::new("Error!", &Theme::default()).unwrap();
/// page.mount(alert.widget()).unwrap();
///
/// alert.invoke("Disk full".into()).unwrap();
/// alert.trigger().unwrap();
/// assert_eq!(host.alerts(), vec!["Disk full", "Disk full"]);
/// ```
pub struct Alert {
    widget: Widget,
    text: Signal<String>,
}

impl Alert {
    pub fn new(text: impl Into<String>, theme: &Theme) -> Result<Self> {
        let text = signal(text.into());

        // Nothing to show in the page itself; the dialog is native.
        let scope = Scope::new(
            vec![],
            Box(Modifier::new().class(theme.class("alert")).hidden(true)),
        );
        scope.bind("text", &text)?;
        scope.on_change("text", |view, t: &String| Ok(view.alert(t)?))?;

        let widget = Widget::new(
            "alert",
            State::new().observable("text", &text),
            scope,
            Some("text"),
            scope_layout(),
        )?;
        Ok(Self { widget, text })
    }

    pub fn text(&self) -> Signal<String> {
        self.text.clone()
    }

    pub fn widget(&self) -> &Widget {
        &self.widget
    }

    pub fn render(&self) -> View {
        self.widget.render()
    }
}

impl Invoke for Alert {
    type Payload = String;

    fn invoke(&self, text: String) -> Result<()> {
        self.widget.set("text", text)
    }

    fn trigger(&self) -> Result<()> {
        self.widget.trigger("text")
    }
}
