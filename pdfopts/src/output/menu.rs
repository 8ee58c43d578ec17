//! Menu entries built from catalogs.

use serde::Serialize;

use crate::catalog::{Catalog, OutlinePolicy, PdfVersion, Rotation};

/// Human-readable label for a catalog member.
pub trait MenuLabel: Catalog {
    /// Label shown next to the canonical name.
    fn label(self) -> String;
}

impl MenuLabel for PdfVersion {
    fn label(self) -> String {
        format!("PDF {}", self.version_str())
    }
}

impl MenuLabel for OutlinePolicy {
    fn label(self) -> String {
        self.description().to_string()
    }
}

impl MenuLabel for Rotation {
    fn label(self) -> String {
        match self {
            Rotation::Degrees0 => "No rotation".to_string(),
            other => format!("{} degrees clockwise", other.degrees()),
        }
    }
}

/// One selectable line of a menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    /// Ordinal of the member in its catalog.
    pub ordinal: usize,
    /// Canonical name.
    pub name: String,
    /// Human-readable label.
    pub label: String,
}

impl MenuEntry {
    /// 1-based position for display.
    pub fn position(&self) -> usize {
        self.ordinal + 1
    }
}

/// Menu entries for every member of a catalog, in definition order.
pub fn menu_entries<C: MenuLabel>() -> Vec<MenuEntry> {
    C::values()
        .iter()
        .copied()
        .map(|member| MenuEntry {
            ordinal: member.ordinal(),
            name: member.name().to_string(),
            label: member.label(),
        })
        .collect()
}
