use std::rc::Rc;

use slotmap::SlotMap;

use crate::error::{Result, error_boundary};
use crate::host::Host;
use crate::{Modifier, Scope, ScopeId, ScopeState, View, Widget};

slotmap::new_key_type! {
    /// Handle to a fragment mounted on a [`Page`].
    pub struct MountId;
}

struct Mounted {
    label: String,
    view: View,
    scopes: Vec<Scope>,
}

/// The hosting UI root: lays widgets out and ties their scopes to one host.
pub struct Page {
    host: Rc<dyn Host>,
    mounted: SlotMap<MountId, Mounted>,
    order: Vec<MountId>,
}

impl Page {
    pub fn new(host: Rc<dyn Host>) -> Self {
        Self {
            host,
            mounted: SlotMap::with_key(),
            order: Vec::new(),
        }
    }

    pub fn host(&self) -> Rc<dyn Host> {
        self.host.clone()
    }

    /// Renders `widget` through its layout and attaches every scope it contains.
    pub fn mount(&mut self, widget: &Widget) -> Result<MountId> {
        let kind = widget.kind();
        let view = error_boundary(
            kind,
            |info| {
                View::element("div")
                    .modifier(Modifier::new().class("tether-error"))
                    .with_children(vec![View::text(format!(
                        "{} failed: {}",
                        info.component, info.message
                    ))])
            },
            || widget.render(),
        );
        self.mount_view(kind, view)
    }

    /// Mounts an arbitrary fragment, which may nest any number of widget scopes.
    ///
    /// Scopes are attached in document order. If one fails, the ones this call
    /// attached before it are disposed and the error is returned. Scopes that
    /// were already attached by an earlier mount are left alone.
    pub fn mount_view(&mut self, label: &str, view: View) -> Result<MountId> {
        let scopes = view.scopes();
        let mut fresh: Vec<&Scope> = Vec::new();
        for scope in &scopes {
            let detached = scope.state() == ScopeState::Detached;
            if let Err(err) = scope.attach(self.host.clone()) {
                for attached in fresh {
                    attached.dispose();
                }
                return Err(err);
            }
            if detached {
                fresh.push(scope);
            }
        }
        log::debug!("page: mounted {label} with {} scope(s)", scopes.len());
        let id = self.mounted.insert(Mounted {
            label: label.to_string(),
            view,
            scopes,
        });
        self.order.push(id);
        Ok(id)
    }

    /// Removes a fragment and disposes the scopes no other fragment still shows.
    /// Returns `false` for unknown ids.
    pub fn unmount(&mut self, id: MountId) -> bool {
        let Some(m) = self.mounted.remove(id) else {
            return false;
        };
        self.order.retain(|o| *o != id);
        for scope in &m.scopes {
            if self.is_mounted(scope.id()) {
                log::debug!("page: {} still mounted elsewhere", scope.id());
                continue;
            }
            scope.dispose();
        }
        log::debug!("page: unmounted {}", m.label);
        true
    }

    fn is_mounted(&self, scope: ScopeId) -> bool {
        self.mounted
            .values()
            .any(|m| m.scopes.iter().any(|s| s.id() == scope))
    }

    pub fn view(&self, id: MountId) -> Option<&View> {
        self.mounted.get(id).map(|m| &m.view)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Static markup of everything mounted, in mount order.
    pub fn markup(&self) -> String {
        self.order
            .iter()
            .filter_map(|id| self.mounted.get(*id))
            .map(|m| crate::markup::to_html(&m.view))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Drop for Page {
    fn drop(&mut self) {
        for (_, m) in self.mounted.drain() {
            for scope in &m.scopes {
                scope.dispose();
            }
        }
    }
}
