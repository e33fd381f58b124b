//! # Observables, Scopes, and Widgets
//!
//! tether couples server-side state to fragments of a page rendered by a
//! host (a browser behind some transport). There are three main pieces:
//!
//! - `Signal<T>`: observable value with ordered subscribers.
//! - `Scope`: binds named signals to a view template through a one-time
//!   import hook and per-change hooks.
//! - `Widget`: named state + a scope + an output signal + a layout.
//!
//! ## Signals
//!
//! ```rust
//! use tether_core::*;
//!
//! let count = signal(0);
//! let seen = signal(Vec::new());
//! count.subscribe({
//!     let seen = seen.clone();
//!     move |v| seen.update(|s| s.push(*v))
//! });
//! count.set(1);
//! count.set(1);
//! assert_eq!(seen.get(), vec![1, 1]);
//! ```
//!
//! Writing an unchanged value still notifies. Widgets rely on this for their
//! trigger call, which re-sets a signal to itself to re-run its view hooks.
//!
//! ## Scopes
//!
//! ```rust
//! use std::rc::Rc;
//! use tether_core::*;
//!
//! let text = signal("hello".to_string());
//! let scope = Scope::new(vec![], View::element("pre").modifier(Modifier::new().node_ref("out")));
//! scope.bind("text", &text).unwrap();
//! scope.on_import({
//!     let text = text.clone();
//!     move |view| Ok(view.write_text("out", &text.get())?)
//! });
//! scope
//!     .on_change("text", |view, t: &String| Ok(view.write_text("out", t)?))
//!     .unwrap();
//!
//! let host = Rc::new(HeadlessHost::new());
//! scope.attach(host.clone()).unwrap();
//! text.set("world".into());
//! assert_eq!(host.content(&NodeRef { scope: scope.id(), name: "out".into() }).as_deref(), Some("world"));
//! ```
//!
//! ## Widgets and pages
//!
//! A `Widget` is rendered through its layout; mounting it on a `Page`
//! attaches every scope found in the rendered tree. Concrete widgets live in
//! `tether-ui`.

pub mod color;
pub mod config;
pub mod effects;
pub mod error;
pub mod headless;
pub mod host;
pub mod markup;
pub mod modifier;
pub mod page;
pub mod prelude;
pub mod scope;
pub mod semantics;
pub mod signal;
pub mod theme;
pub mod view;
pub mod widget;

pub use color::*;
pub use config::*;
pub use effects::*;
pub use error::*;
pub use headless::*;
pub use host::*;
pub use modifier::*;
pub use page::*;
pub use scope::*;
pub use semantics::*;
pub use signal::*;
pub use theme::*;
pub use view::*;
pub use widget::*;
