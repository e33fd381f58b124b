//! The widget contract: named state, a scope, an output and a layout.

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use crate::error::{Result, WidgetError};
use crate::scope::Scope;
use crate::signal::{AnySignal, Signal};
use crate::view::View;

pub const DEFAULT_OUTPUT: &str = "value";

#[derive(Clone)]
pub enum StateEntry {
    Observable(Rc<dyn AnySignal>),
    /// Plain values and callbacks, e.g. confirm's stored handler.
    Value(Rc<dyn Any>),
}

impl fmt::Debug for StateEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateEntry::Observable(obs) => write!(f, "Observable<{}>", obs.type_name()),
            StateEntry::Value(_) => write!(f, "Value"),
        }
    }
}

/// Ordered name -> entry map owned by a widget.
#[derive(Clone, Debug, Default)]
pub struct State {
    entries: Vec<(String, StateEntry)>,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observable<T: Clone + 'static>(self, name: impl Into<String>, obs: &Signal<T>) -> Self {
        self.insert(name.into(), StateEntry::Observable(Rc::new(obs.clone())))
    }

    pub fn value<V: 'static>(self, name: impl Into<String>, value: V) -> Self {
        self.insert(name.into(), StateEntry::Value(Rc::new(value)))
    }

    fn insert(mut self, name: String, entry: StateEntry) -> Self {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = entry,
            None => self.entries.push((name, entry)),
        }
        self
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn entry(&self, name: &str) -> Result<&StateEntry> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, e)| e)
            .ok_or_else(|| WidgetError::Unbound(name.to_string()))
    }

    fn any_signal(&self, name: &str) -> Result<&Rc<dyn AnySignal>> {
        match self.entry(name)? {
            StateEntry::Observable(obs) => Ok(obs),
            StateEntry::Value(_) => Err(WidgetError::NotObservable(name.to_string())),
        }
    }

    /// The observable stored under `name`; a clone of the same shared handle.
    pub fn get_observable<T: Clone + 'static>(&self, name: &str) -> Result<Signal<T>> {
        let obs = self.any_signal(name)?;
        obs.as_any()
            .downcast_ref::<Signal<T>>()
            .cloned()
            .ok_or_else(|| WidgetError::TypeMismatch {
                name: name.to_string(),
                expected: std::any::type_name::<T>(),
                found: obs.type_name(),
            })
    }

    pub fn get_value<V: 'static>(&self, name: &str) -> Result<Rc<V>> {
        match self.entry(name)? {
            StateEntry::Value(v) => v.clone().downcast::<V>().map_err(|_| WidgetError::TypeMismatch {
                name: name.to_string(),
                expected: std::any::type_name::<V>(),
                found: "another value type",
            }),
            StateEntry::Observable(obs) => Err(WidgetError::TypeMismatch {
                name: name.to_string(),
                expected: std::any::type_name::<V>(),
                found: obs.type_name(),
            }),
        }
    }
}

pub type Layout = Rc<dyn Fn(&Widget) -> View>;

/// Layout that renders the scope's mount node and nothing else.
pub fn scope_layout() -> Layout {
    Rc::new(|w: &Widget| View::scope(w.scope().clone()))
}

pub struct Widget {
    kind: &'static str,
    state: State,
    scope: Scope,
    output: String,
    layout: Layout,
}

impl fmt::Debug for Widget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Widget")
            .field("kind", &self.kind)
            .field("state", &self.state)
            .field("scope", &self.scope)
            .field("output", &self.output)
            .finish_non_exhaustive()
    }
}

impl Widget {
    /// `output` names the state entry observed from outside; `None` means `"value"`.
    pub fn new(
        kind: &'static str,
        state: State,
        scope: Scope,
        output: Option<&str>,
        layout: Layout,
    ) -> Result<Self> {
        let output = output.unwrap_or(DEFAULT_OUTPUT).to_string();
        state.any_signal(&output)?;
        log::debug!("{kind}: widget over {} with output `{output}`", scope.id());
        Ok(Self {
            kind,
            state,
            scope,
            output,
            layout,
        })
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn output_name(&self) -> &str {
        &self.output
    }

    pub fn output<T: Clone + 'static>(&self) -> Result<Signal<T>> {
        self.state.get_observable(&self.output)
    }

    pub fn render(&self) -> View {
        (self.layout)(self)
    }

    /// State-setting call: stores `value` under `name`, notifying its subscribers.
    pub fn set<T: Clone + 'static>(&self, name: &str, value: T) -> Result<()> {
        self.state.get_observable::<T>(name)?.set(value);
        Ok(())
    }

    /// Trigger call: re-sets `name` to its own value so its change hooks run again.
    pub fn trigger(&self, name: &str) -> Result<()> {
        self.state.any_signal(name)?.renotify();
        Ok(())
    }
}

/// The two invocation shapes every concrete widget supports.
pub trait Invoke {
    type Payload;

    /// Pushes new data into the widget's primary state.
    fn invoke(&self, payload: Self::Payload) -> Result<()>;

    /// Re-runs the widget's action against its current state.
    fn trigger(&self) -> Result<()>;
}

impl AsRef<Widget> for Widget {
    fn as_ref(&self) -> &Widget {
        self
    }
}
