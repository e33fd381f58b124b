use std::cell::RefCell;
use std::rc::Rc;

use tether_core::*;

use crate::Box;

pub type ConfirmCallback = Rc<dyn Fn(bool)>;

/// Arguments of a confirm call: new text, a new callback, or both.
///
/// Built from either argument order, so `(text, callback)` and
/// `(callback, text)` mean the same thing.
#[derive(Clone, Default)]
pub struct ConfirmCall {
    pub text: Option<String>,
    pub callback: Option<ConfirmCallback>,
}

impl ConfirmCall {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            callback: None,
        }
    }

    pub fn callback(f: impl Fn(bool) + 'static) -> Self {
        Self {
            text: None,
            callback: Some(Rc::new(f)),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_callback(mut self, f: impl Fn(bool) + 'static) -> Self {
        self.callback = Some(Rc::new(f));
        self
    }
}

impl From<String> for ConfirmCall {
    fn from(text: String) -> Self {
        Self::text(text)
    }
}

impl From<&str> for ConfirmCall {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

impl From<ConfirmCallback> for ConfirmCall {
    fn from(callback: ConfirmCallback) -> Self {
        Self {
            text: None,
            callback: Some(callback),
        }
    }
}

macro_rules! impl_from_pair {
    ($($text:ty),+) => {
        $(
            impl From<($text, ConfirmCallback)> for ConfirmCall {
                fn from((text, callback): ($text, ConfirmCallback)) -> Self {
                    Self {
                        text: Some(text.into()),
                        callback: Some(callback),
                    }
                }
            }

            impl From<(ConfirmCallback, $text)> for ConfirmCall {
                fn from((callback, text): (ConfirmCallback, $text)) -> Self {
                    Self {
                        text: Some(text.into()),
                        callback: Some(callback),
                    }
                }
            }
        )+
    };
}

impl_from_pair!(String, &str);

/// Native confirmation dialog.
///
/// Setting the text opens the dialog; the answer is written to the output
/// signal, and every answer is handed to the stored callback.
pub struct Confirm {
    widget: Widget,
    text: Signal<String>,
    value: Signal<bool>,
    callback: Rc<RefCell<ConfirmCallback>>,
}

impl Confirm {
    pub fn new(
        callback: impl Fn(bool) + 'static,
        text: impl Into<String>,
        theme: &Theme,
    ) -> Result<Self> {
        let text = signal(text.into());
        let value = signal(false);
        let callback: ConfirmCallback = Rc::new(callback);
        let callback = Rc::new(RefCell::new(callback));

        let scope = Scope::new(
            vec![],
            Box(Modifier::new().class(theme.class("confirm")).hidden(true)),
        );
        scope.bind("text", &text)?;
        scope.bind("value", &value)?;
        scope.on_change("text", {
            let value = value.clone();
            move |view, t: &String| {
                let answer = view.confirm(t)?;
                log::debug!("confirm: answered {answer}");
                value.set(answer);
                Ok(())
            }
        })?;

        // Lives as long as the signal, independent of the scope.
        value.subscribe({
            let callback = callback.clone();
            move |answer| {
                let f = callback.borrow().clone();
                f(*answer);
            }
        });

        let widget = Widget::new(
            "confirm",
            State::new()
                .observable("text", &text)
                .value("function", callback.clone())
                .observable("value", &value),
            scope,
            Some("value"),
            scope_layout(),
        )?;
        Ok(Self {
            widget,
            text,
            value,
            callback,
        })
    }

    pub fn text(&self) -> Signal<String> {
        self.text.clone()
    }

    /// Last answer.
    pub fn value(&self) -> Signal<bool> {
        self.value.clone()
    }

    pub fn set_callback(&self, f: impl Fn(bool) + 'static) {
        *self.callback.borrow_mut() = Rc::new(f);
    }

    pub fn widget(&self) -> &Widget {
        &self.widget
    }

    pub fn render(&self) -> View {
        self.widget.render()
    }
}

impl Invoke for Confirm {
    type Payload = ConfirmCall;

    /// Swaps the callback first, so a dialog opened by the new text reports to it.
    fn invoke(&self, call: ConfirmCall) -> Result<()> {
        if let Some(callback) = call.callback {
            *self.callback.borrow_mut() = callback;
        }
        if let Some(text) = call.text {
            self.widget.set("text", text)?;
        }
        Ok(())
    }

    fn trigger(&self) -> Result<()> {
        self.widget.trigger("text")
    }
}
