//! Binding between observables and a rendered view fragment.
//!
//! A [`Scope`] owns a template, the assets it needs, a set of named
//! observables and two kinds of hooks:
//!
//! - the import hook, run exactly once when the scope is attached to a host,
//!   after every asset has loaded;
//! - change hooks, run on every `set` of the observable bound under a name,
//!   but only once the import hook has run.
//!
//! The import hook reads the observables it captured, so a freshly attached
//! view starts from the present state rather than from a replay of changes.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use crate::effects::Dispose;
use crate::error::{Result, WidgetError};
use crate::host::{Asset, Host, ViewHandle};
use crate::signal::{AnySignal, Signal};
use crate::view::View;

thread_local! {
    static NEXT_SCOPE_ID: Cell<u64> = const { Cell::new(1) };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScopeId(u64);

impl ScopeId {
    fn next() -> Self {
        NEXT_SCOPE_ID.with(|n| {
            let id = n.get();
            n.set(id + 1);
            ScopeId(id)
        })
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scope-{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScopeState {
    Detached,
    Attached,
    Failed,
    Disposed,
}

type ImportHook = Box<dyn FnOnce(&ViewHandle) -> Result<()>>;

pub struct Scope {
    inner: Rc<ScopeInner>,
}

struct ScopeInner {
    id: ScopeId,
    imports: Vec<Asset>,
    template: View,
    bound: RefCell<Vec<(String, Rc<dyn AnySignal>)>>,
    on_import: RefCell<Option<ImportHook>>,
    view: RefCell<Option<ViewHandle>>,
    state: Cell<ScopeState>,
    disposers: RefCell<Vec<Dispose>>,
}

impl ScopeInner {
    fn fail(&self, view: &ViewHandle, err: &WidgetError) {
        log::error!("{}: {err}", self.id);
        view.host().report_failure(self.id, err);
    }
}

impl Scope {
    pub fn new(imports: Vec<Asset>, template: View) -> Self {
        let id = ScopeId::next();
        log::debug!("{id}: created with {} import(s)", imports.len());
        Self {
            inner: Rc::new(ScopeInner {
                id,
                imports,
                template,
                bound: RefCell::new(Vec::new()),
                on_import: RefCell::new(None),
                view: RefCell::new(None),
                state: Cell::new(ScopeState::Detached),
                disposers: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn id(&self) -> ScopeId {
        self.inner.id
    }

    pub fn imports(&self) -> &[Asset] {
        &self.inner.imports
    }

    pub fn template(&self) -> View {
        self.inner.template.clone()
    }

    pub fn state(&self) -> ScopeState {
        self.inner.state.get()
    }

    /// The handle hooks run against, once attached.
    pub fn view(&self) -> Option<ViewHandle> {
        self.inner.view.borrow().clone()
    }

    pub fn bind<T: Clone + 'static>(&self, name: impl Into<String>, obs: &Signal<T>) -> Result<()> {
        let name = name.into();
        let mut bound = self.inner.bound.borrow_mut();
        if bound.iter().any(|(n, _)| *n == name) {
            return Err(WidgetError::AlreadyBound(name));
        }
        bound.push((name, Rc::new(obs.clone())));
        Ok(())
    }

    pub fn bound_names(&self) -> Vec<String> {
        self.inner
            .bound
            .borrow()
            .iter()
            .map(|(n, _)| n.clone())
            .collect()
    }

    pub fn observable<T: Clone + 'static>(&self, name: &str) -> Result<Signal<T>> {
        let bound = self.inner.bound.borrow();
        let (_, obs) = bound
            .iter()
            .find(|(n, _)| n == name)
            .ok_or_else(|| WidgetError::Unbound(name.to_string()))?;
        obs.as_any()
            .downcast_ref::<Signal<T>>()
            .cloned()
            .ok_or_else(|| WidgetError::TypeMismatch {
                name: name.to_string(),
                expected: std::any::type_name::<T>(),
                found: obs.type_name(),
            })
    }

    /// Registers the one-time initialization hook, replacing any earlier one.
    pub fn on_import(&self, f: impl FnOnce(&ViewHandle) -> Result<()> + 'static) {
        if self.inner.on_import.borrow_mut().replace(Box::new(f)).is_some() {
            log::debug!("{}: import hook replaced", self.inner.id);
        }
    }

    /// Registers `f` to run on every `set` of the observable bound as `name`.
    ///
    /// The subscription is taken now, so hooks keep their registration order
    /// relative to other subscribers, but they stay silent until attached.
    pub fn on_change<T: Clone + 'static>(
        &self,
        name: &str,
        f: impl Fn(&ViewHandle, &T) -> Result<()> + 'static,
    ) -> Result<()> {
        let obs = self.observable::<T>(name)?;
        let weak: Weak<ScopeInner> = Rc::downgrade(&self.inner);
        let name_owned = name.to_string();
        let handle = obs.subscribe(move |v| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            let view = inner.view.borrow().clone();
            let Some(view) = view else {
                log::trace!("{}: `{name_owned}` changed before import", inner.id);
                return;
            };
            if let Err(err) = f(&view, v) {
                inner.fail(&view, &err);
            }
        });
        self.add_disposer(Dispose::subscription(&obs, handle));
        Ok(())
    }

    pub fn add_disposer(&self, disposer: Dispose) {
        self.inner.disposers.borrow_mut().push(disposer);
    }

    /// Loads the imports through `host`, then runs the import hook.
    ///
    /// Attaching an already attached scope does nothing.
    pub fn attach(&self, host: Rc<dyn Host>) -> Result<()> {
        let id = self.inner.id;
        match self.inner.state.get() {
            ScopeState::Attached => {
                log::debug!("{id}: already attached");
                return Ok(());
            }
            ScopeState::Failed => return Err(WidgetError::ScopeFailed(id)),
            ScopeState::Disposed => return Err(WidgetError::ScopeDisposed(id)),
            ScopeState::Detached => {}
        }

        let view = ViewHandle::new(id, host);
        let result = self.run_import(&view);
        if let Err(err) = &result {
            self.inner.state.set(ScopeState::Failed);
            self.inner.fail(&view, err);
            return result;
        }

        *self.inner.view.borrow_mut() = Some(view);
        self.inner.state.set(ScopeState::Attached);
        log::debug!("{id}: attached");
        Ok(())
    }

    fn run_import(&self, view: &ViewHandle) -> Result<()> {
        for asset in &self.inner.imports {
            view.host().load_asset(asset)?;
        }
        let hook = self.inner.on_import.borrow_mut().take();
        if let Some(hook) = hook {
            hook(view)?;
        }
        Ok(())
    }

    /// Drops every hook subscription and detaches from the host.
    pub fn dispose(&self) {
        let disposers = std::mem::take(&mut *self.inner.disposers.borrow_mut());
        for disposer in disposers {
            disposer.run();
        }
        self.inner.view.borrow_mut().take();
        self.inner.state.set(ScopeState::Disposed);
        log::debug!("{}: disposed", self.inner.id);
    }
}

impl Clone for Scope {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope")
            .field("id", &self.inner.id)
            .field("state", &self.inner.state.get())
            .field("imports", &self.inner.imports)
            .field("bound", &self.bound_names())
            .finish()
    }
}

impl Drop for ScopeInner {
    fn drop(&mut self) {
        let disposers = std::mem::take(&mut *self.disposers.borrow_mut());
        for disposer in disposers {
            disposer.run();
        }
    }
}
