//! Dismissible notification list.
//!
//! Each element gets a stable [`NoticeKey`] when it enters the list. The close
//! button of a rendered box captures that key and resolves it to a position
//! when clicked, so a list edited between render and click still loses the
//! right element. A key that is gone by then is ignored.

use std::cell::Cell;
use std::rc::Rc;

use tether_core::*;

use crate::{Box, Button, Column, ViewExt};

const LIST: &str = "list";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NoticeKey(u64);

#[derive(Clone, Debug)]
pub struct Notice {
    pub key: NoticeKey,
    pub content: View,
}

pub struct Notifications {
    widget: Widget,
    list: Signal<Vec<Notice>>,
    next_key: Rc<Cell<u64>>,
}

impl Notifications {
    pub fn new(items: Vec<View>, theme: &Theme) -> Result<Self> {
        let next_key = Rc::new(Cell::new(0));
        let list = signal(keyed(&next_key, items));

        let scope = Scope::new(
            vec![],
            Box(Modifier::new()
                .class(theme.class("notifications"))
                .node_ref(LIST)
                .semantics(Semantics::new(Role::Status))),
        );
        scope.bind(LIST, &list)?;
        scope.on_import({
            let list = list.downgrade();
            let theme = theme.clone();
            move |view| {
                let Some(list) = list.upgrade() else {
                    return Ok(());
                };
                let boxes = list.with(|items| list_view(items, &list.downgrade(), &theme));
                Ok(view.rerender(LIST, &boxes)?)
            }
        });
        scope.on_change(LIST, {
            let weak = list.downgrade();
            let theme = theme.clone();
            move |view, items: &Vec<Notice>| Ok(view.rerender(LIST, &list_view(items, &weak, &theme))?)
        })?;

        let widget = Widget::new(
            "notifications",
            State::new().observable(LIST, &list),
            scope,
            Some(LIST),
            scope_layout(),
        )?;
        Ok(Self {
            widget,
            list,
            next_key,
        })
    }

    pub fn list(&self) -> Signal<Vec<Notice>> {
        self.list.clone()
    }

    /// Appends an element and republishes the list.
    pub fn push(&self, content: View) -> NoticeKey {
        let key = next(&self.next_key);
        self.list.update(|items| items.push(Notice { key, content }));
        key
    }

    /// Removes the element currently at `index`. Out of range is a no-op.
    pub fn dismiss(&self, index: usize) -> bool {
        remove_at(&self.list, index)
    }

    /// Removes the element with `key`, wherever it is now.
    pub fn dismiss_key(&self, key: NoticeKey) -> bool {
        remove_key(&self.list, key)
    }

    /// The boxes as the host shows them, close buttons included.
    pub fn list_view(&self, theme: &Theme) -> View {
        self.list
            .with(|items| list_view(items, &self.list.downgrade(), theme))
    }

    pub fn widget(&self) -> &Widget {
        &self.widget
    }

    pub fn render(&self) -> View {
        self.widget.render()
    }
}

impl Invoke for Notifications {
    type Payload = Vec<View>;

    /// Replaces the whole list; every element gets a fresh key.
    fn invoke(&self, items: Vec<View>) -> Result<()> {
        self.widget.set(LIST, keyed(&self.next_key, items))
    }

    fn trigger(&self) -> Result<()> {
        self.widget.trigger(LIST)
    }
}

fn next(counter: &Cell<u64>) -> NoticeKey {
    let k = counter.get();
    counter.set(k + 1);
    NoticeKey(k)
}

fn keyed(counter: &Cell<u64>, items: Vec<View>) -> Vec<Notice> {
    items
        .into_iter()
        .map(|content| Notice {
            key: next(counter),
            content,
        })
        .collect()
}

fn remove_at(list: &Signal<Vec<Notice>>, index: usize) -> bool {
    let mut items = list.get();
    if index >= items.len() {
        log::warn!("notifications: no element at {index} (len {})", items.len());
        return false;
    }
    items.remove(index);
    list.set(items);
    true
}

fn remove_key(list: &Signal<Vec<Notice>>, key: NoticeKey) -> bool {
    match list.with(|items| items.iter().position(|n| n.key == key)) {
        Some(index) => remove_at(list, index),
        None => {
            log::warn!("notifications: {key:?} already dismissed");
            false
        }
    }
}

fn list_view(items: &[Notice], list: &WeakSignal<Vec<Notice>>, theme: &Theme) -> View {
    Column(Modifier::new()).child(
        items
            .iter()
            .map(|notice| notice_box(notice, list.clone(), theme))
            .collect::<Vec<_>>(),
    )
}

fn notice_box(notice: &Notice, list: WeakSignal<Vec<Notice>>, theme: &Theme) -> View {
    let key = notice.key;
    Box(theme
        .surface_box()
        .class(theme.class("notification"))
        .margin_bottom(theme.spacing)
        .semantics(Semantics::new(Role::Alert)))
    .child((
        Button(
            Modifier::new()
                .class(theme.class("delete"))
                .semantics(Semantics::new(Role::Button).label("Dismiss")),
            "×",
            move || {
                if let Some(list) = list.upgrade() {
                    remove_key(&list, key);
                }
            },
        ),
        notice.content.clone(),
    ))
}
