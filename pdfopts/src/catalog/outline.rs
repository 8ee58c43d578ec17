//! Bookmark (outline) retention policies for merge operations.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, IntoStaticStr, VariantArray, VariantNames};

use super::impl_catalog;

/// What happens to the source documents' outlines when merging.
///
/// `RETAIN` and `DISCARD` are always offered by merge menus and must stay in
/// the catalog; further policies may be appended.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumCount,
    IntoStaticStr,
    VariantArray,
    VariantNames,
    Serialize,
    Deserialize,
)]
#[serde(into = "&'static str", try_from = "String")]
pub enum OutlinePolicy {
    /// Keep every source outline.
    #[default]
    #[strum(to_string = "RETAIN")]
    Retain,
    /// Drop all outlines.
    #[strum(to_string = "DISCARD")]
    Discard,
    /// Replace outlines with one entry per merged document.
    #[strum(to_string = "ONE_ENTRY_EACH_DOC")]
    OneEntryEachDoc,
    /// Keep source outlines, nested under one entry per merged document.
    #[strum(to_string = "RETAIN_AS_ONE_ENTRY")]
    RetainAsOneEntry,
}

impl_catalog!(OutlinePolicy, "OutlinePolicy");

const _: () = assert!(<OutlinePolicy as EnumCount>::COUNT >= 2);

impl OutlinePolicy {
    /// Label shown next to the canonical name in selection menus.
    pub fn description(self) -> &'static str {
        match self {
            Self::Retain => "Retain bookmarks",
            Self::Discard => "Discard bookmarks",
            Self::OneEntryEachDoc => "Create one entry for each merged document",
            Self::RetainAsOneEntry => "Retain bookmarks as one entry for each merged document",
        }
    }

    /// Check whether any outline survives the merge.
    pub fn keeps_outline(self) -> bool {
        !matches!(self, Self::Discard)
    }
}
