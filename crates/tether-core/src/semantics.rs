/// High‑level semantic role of a view, rendered as an ARIA `role`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Alert,
    AlertDialog,
    Button,
    Code,
    Group,
    Region,
    Status,
    Tab,
    TabPanel,
}

impl Role {
    pub fn aria(self) -> &'static str {
        match self {
            Role::Alert => "alert",
            Role::AlertDialog => "alertdialog",
            Role::Button => "button",
            Role::Code => "code",
            Role::Group => "group",
            Role::Region => "region",
            Role::Status => "status",
            Role::Tab => "tab",
            Role::TabPanel => "tabpanel",
        }
    }
}

/// Semantics attached to a `View`, emitted as ARIA attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct Semantics {
    pub role: Role,
    /// Announced name (`aria-label`).
    pub label: Option<String>,
    /// For toggles such as accordion headers (`aria-expanded`).
    pub expanded: Option<bool>,
}

impl Semantics {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            label: None,
            expanded: None,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn expanded(mut self, expanded: bool) -> Self {
        self.expanded = Some(expanded);
        self
    }
}
