//! Navigation panes of the configurator front-end.
//!
//! Only the route table lives here; views are bound by the front-end.

use serde::Serialize;

/// A top-level navigation pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pane {
    /// Stable pane key
    pub key: &'static str,
    /// Route path
    pub path: &'static str,
    /// Tab title
    pub title: &'static str,
}

/// All panes, in tab order. The first pane is the default route.
pub const PANES: &[Pane] = &[
    Pane {
        key: "default",
        path: "/",
        title: "Configure",
    },
    Pane {
        key: "test",
        path: "/test",
        title: "Key Tester",
    },
    Pane {
        key: "design",
        path: "/design",
        title: "Design",
    },
    Pane {
        key: "settings",
        path: "/settings",
        title: "Settings",
    },
    Pane {
        key: "debug",
        path: "/debug",
        title: "Debug",
    },
];

/// Returns all panes in tab order.
#[must_use]
pub fn panes() -> &'static [Pane] {
    PANES
}

/// Finds a pane by key.
#[must_use]
pub fn pane_by_key(key: &str) -> Option<&'static Pane> {
    PANES.iter().find(|p| p.key == key)
}

/// Finds the pane routed at `path`. A trailing slash is ignored.
#[must_use]
pub fn pane_for_path(path: &str) -> Option<&'static Pane> {
    let trimmed = path.trim_end_matches('/');
    let path = if trimmed.is_empty() { "/" } else { trimmed };
    PANES.iter().find(|p| p.path == path)
}
