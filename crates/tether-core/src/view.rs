use crate::{Modifier, Scope};

#[derive(Clone, Debug)]
pub enum ViewKind {
    Element {
        tag: String,
    },
    Text {
        text: String,
    },
    /// Pre-rendered static markup, inserted verbatim.
    Markup {
        html: String,
    },
    /// Mount point of a scope; its template is rendered as this node's content.
    Scope(Scope),
}

/// A view fragment: the tree handed to the host's rendering engine.
#[derive(Clone, Debug)]
pub struct View {
    pub kind: ViewKind,
    pub modifier: Modifier,
    pub children: Vec<View>,
}

impl View {
    pub fn new(kind: ViewKind) -> Self {
        View {
            kind,
            modifier: Modifier::default(),
            children: vec![],
        }
    }
    pub fn element(tag: impl Into<String>) -> Self {
        Self::new(ViewKind::Element { tag: tag.into() })
    }
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(ViewKind::Text { text: text.into() })
    }
    pub fn markup(html: impl Into<String>) -> Self {
        Self::new(ViewKind::Markup { html: html.into() })
    }
    pub fn scope(scope: Scope) -> Self {
        Self::new(ViewKind::Scope(scope))
    }
    pub fn modifier(mut self, m: Modifier) -> Self {
        self.modifier = m;
        self
    }
    pub fn with_children(mut self, kids: Vec<View>) -> Self {
        self.children.extend(kids);
        self
    }

    /// Pre-order walk; a scope's template is visited before the node's own children.
    pub fn visit(&self, f: &mut dyn FnMut(&View)) {
        self.walk(f)
    }

    fn walk(&self, f: &mut dyn FnMut(&View)) {
        f(self);
        if let ViewKind::Scope(scope) = &self.kind {
            let template = scope.template();
            template.walk(f);
        }
        for c in &self.children {
            c.walk(f);
        }
    }

    /// Every scope mounted in this tree, in document order.
    pub fn scopes(&self) -> Vec<Scope> {
        let mut out = Vec::new();
        self.walk(&mut |v: &View| {
            if let ViewKind::Scope(s) = &v.kind {
                out.push(s.clone());
            }
        });
        out
    }

    /// First node (in document order) carrying `node_ref == name`.
    pub fn find_ref(&self, name: &str) -> Option<View> {
        let mut found = None;
        self.walk(&mut |v: &View| {
            if found.is_none() && v.modifier.node_ref.as_deref() == Some(name) {
                found = Some(v.clone());
            }
        });
        found
    }

    /// Nodes with a click handler, in document order.
    pub fn clickables(&self) -> Vec<View> {
        let mut out = Vec::new();
        self.walk(&mut |v: &View| {
            if v.modifier.on_click.is_some() {
                out.push(v.clone());
            }
        });
        out
    }

    /// Fires this node's click handler. Returns `false` if it has none.
    pub fn click(&self) -> bool {
        match &self.modifier.on_click {
            Some(f) => {
                f();
                true
            }
            None => false,
        }
    }

    /// Concatenated text content of the subtree.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.walk(&mut |v: &View| {
            if let ViewKind::Text { text } = &v.kind {
                out.push_str(text);
            }
        });
        out
    }
}
