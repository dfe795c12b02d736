use std::fmt::{Display, Formatter};
use std::str::FromStr;

use strum::{AsRefStr, EnumCount, EnumIter, EnumString, IntoStaticStr, VariantNames};
use thiserror::Error;

/// Page sections in document order, top to bottom.
///
/// The lowercase names are the element ids in the markup and double as the
/// in-page anchors (`#about`, `#bitart`, ...), so they must not change.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumCount,
    EnumIter,
    EnumString,
    IntoStaticStr,
    AsRefStr,
    VariantNames,
)]
#[strum(serialize_all = "lowercase")]
pub enum SectionId {
    Hero,
    Features,
    About,
    BitArt,
    Events,
    Community,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: SectionId,
    pub order: usize,
}

pub const SECTIONS: [Section; SectionId::COUNT] = [
    Section {
        id: SectionId::Hero,
        order: 0,
    },
    Section {
        id: SectionId::Features,
        order: 1,
    },
    Section {
        id: SectionId::About,
        order: 2,
    },
    Section {
        id: SectionId::BitArt,
        order: 3,
    },
    Section {
        id: SectionId::Events,
        order: 4,
    },
    Section {
        id: SectionId::Community,
        order: 5,
    },
];

#[derive(Error, Debug, PartialEq)]
pub enum SectionIdErr {
    #[error("unknown section id: {0:?}")]
    Unknown(String),
}

impl SectionId {
    pub fn id(&self) -> &'static str {
        self.into()
    }

    pub fn anchor(&self) -> String {
        format!("#{}", self.id())
    }

    pub fn order(&self) -> usize {
        *self as usize
    }

    pub fn from_order(order: usize) -> Option<SectionId> {
        SECTIONS.get(order).map(|section| section.id)
    }

    /// Accepts both `about` and `#about`.
    pub fn from_anchor(anchor: &str) -> Result<SectionId, SectionIdErr> {
        let id = anchor.strip_prefix('#').unwrap_or(anchor);
        SectionId::from_str(id).map_err(|_| SectionIdErr::Unknown(anchor.to_string()))
    }
}

impl Display for SectionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn ids_match_markup() {
        let ids: Vec<&str> = SECTIONS.iter().map(|s| s.id.id()).collect();
        assert_eq!(
            ids,
            ["hero", "features", "about", "bitart", "events", "community"]
        );
        assert_eq!(SectionId::VARIANTS, ids.as_slice());
    }

    #[test]
    fn ids_unique_and_ordered() {
        let unique: HashSet<SectionId> = SECTIONS.iter().map(|s| s.id).collect();
        assert_eq!(unique.len(), SECTIONS.len());

        for (i, (section, id)) in SECTIONS.iter().zip(SectionId::iter()).enumerate() {
            assert_eq!(section.order, i);
            assert_eq!(section.id, id);
            assert_eq!(id.order(), i);
            assert_eq!(SectionId::from_order(i), Some(id));
        }
        assert_eq!(SectionId::from_order(SECTIONS.len()), None);
    }

    #[test]
    fn anchors() {
        assert_eq!(SectionId::About.anchor(), "#about");
        assert_eq!(SectionId::BitArt.to_string(), "bitart");
        assert_eq!(SectionId::from_anchor("#bitart"), Ok(SectionId::BitArt));
        assert_eq!(SectionId::from_anchor("events"), Ok(SectionId::Events));
        assert_eq!(
            SectionId::from_anchor("#gallery"),
            Err(SectionIdErr::Unknown(String::from("#gallery")))
        );
    }
}
