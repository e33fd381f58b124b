pub use crate::color::Color;
pub use crate::config::{AssetPaths, Config};
pub use crate::effects::{Dispose, observe};
pub use crate::error::{ConfigError, HostError, Result, WidgetError, error_boundary};
pub use crate::headless::{HeadlessHost, HostCall};
pub use crate::host::{Asset, AssetKind, Host, NodeRef, ViewHandle};
pub use crate::modifier::Modifier;
pub use crate::page::{MountId, Page};
pub use crate::scope::{Scope, ScopeId, ScopeState};
pub use crate::semantics::{Role, Semantics};
pub use crate::signal::{Signal, SubscriptionHandle, WeakSignal, signal};
pub use crate::theme::Theme;
pub use crate::view::{View, ViewKind};
pub use crate::widget::{Invoke, Layout, State, StateEntry, Widget, scope_layout};
