//! Static copy, links and asset locations for the page.

use std::fmt::{Display, Formatter};

use crate::motion::Motion;
use crate::section::SectionId;

pub mod assets {
    pub const ORIGIN: &str = "https://ext.same-assets.com/4158576384";
    pub const LOGO: &str = "https://ext.same-assets.com/4158576384/3859852827.svg";
    pub const FAVICON: &str = "https://ext.same-assets.com/4158576384/4212929537.ico";
    pub const COVER: &str = "https://ext.same-assets.com/4158576384/4252825699.png";
    pub const X_ICON: &str = "https://ext.same-assets.com/4158576384/3546197030.svg";
    pub const INSTAGRAM_ICON: &str = "https://ext.same-assets.com/4158576384/3938482489.svg";
}

pub mod meta {
    pub const TITLE: &str = "Bitcoin Art Society | Art Belongs on Bitcoin";
    pub const DESCRIPTION: &str = "Bitcoin Art Society is a curator-led initiative dedicated to elevating Bitcoin-native art and culture. Discover, collect, and preserve meaningful art on Bitcoin.";
    pub const KEYWORDS: &str = "Bitcoin Art,Ordinals,NFT,Bitcoin,Digital Art,Blockchain Art";
    pub const OG_DESCRIPTION: &str = "Discover, collect, and preserve meaningful art on Bitcoin.";
}

pub const BRAND: &str = "Bitcoin Art Society";
pub const TAGLINE: &str = "Art Belongs on Bitcoin";
pub const COPYRIGHT: &str = "© 2025 Bitcoin Art Society. All rights reserved.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub target: SectionId,
}

impl NavLink {
    pub fn href(&self) -> String {
        self.target.anchor()
    }
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        name: "About",
        target: SectionId::About,
    },
    NavLink {
        name: "BitArt",
        target: SectionId::BitArt,
    },
    NavLink {
        name: "Events",
        target: SectionId::Events,
    },
    NavLink {
        name: "Community",
        target: SectionId::Community,
    },
];

pub const JOIN_TARGET: SectionId = SectionId::Community;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

pub const HERO_LINES: [&str; 2] = ["ART BELONGS", "ON BITCOIN"];
pub const HERO_SUBTITLE: &str = "Bitcoin Art Society is a curator-led initiative dedicated to elevating Bitcoin\u{2011}native art and culture.";

pub const GLANCE_STATS: [Stat; 6] = [
    Stat {
        label: "Focus",
        value: "Bitcoin\u{2011}native art",
    },
    Stat {
        label: "Approach",
        value: "Curated Releases, Artist Support, Global Lens",
    },
    Stat {
        label: "Provenance",
        value: "On\u{2011}chain (Ordinals)",
    },
    Stat {
        label: "Experience",
        value: "Culture-First",
    },
    Stat {
        label: "Founded",
        value: "2025",
    },
    Stat {
        label: "Community",
        value: "Artists • Collectors • Curators",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardColor {
    Purple,
    Cream,
    Green,
    Dark,
    Orange,
}

impl CardColor {
    pub fn class(&self) -> &'static str {
        match self {
            CardColor::Purple => "card-purple",
            CardColor::Cream => "card-cream",
            CardColor::Green => "card-green",
            CardColor::Dark => "card-dark",
            CardColor::Orange => "card-orange",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub description: Option<&'static str>,
    pub color: CardColor,
    pub is_center: bool,
}

impl Feature {
    pub fn class(&self) -> String {
        let size = if self.is_center {
            "col-span-1 row-span-2 flex flex-col items-center justify-center text-center"
        } else {
            "col-span-1"
        };
        format!("feature-card {} {}", self.color.class(), size)
    }
}

pub const FEATURES: [Feature; 5] = [
    Feature {
        title: "Curated Releases",
        subtitle: Some("Artist Support"),
        description: Some("Discover meaningful art with lasting cultural significance"),
        color: CardColor::Purple,
        is_center: false,
    },
    Feature {
        title: "THE BITCOIN\nART PLATFORM",
        subtitle: None,
        description: None,
        color: CardColor::Cream,
        is_center: true,
    },
    Feature {
        title: "Global Events",
        subtitle: Some("Exhibitions Worldwide"),
        description: Some("Join our community at exclusive art gatherings"),
        color: CardColor::Green,
        is_center: false,
    },
    Feature {
        title: "On-Chain Provenance",
        subtitle: Some("Ordinals"),
        description: Some("Permanent artwork ownership secured by Bitcoin"),
        color: CardColor::Dark,
        is_center: false,
    },
    Feature {
        title: "Earn Rewards",
        subtitle: Some("Collector Benefits"),
        description: Some("Participate and earn through curation"),
        color: CardColor::Orange,
        is_center: false,
    },
];

pub const ABOUT_PARAGRAPHS: [&str; 3] = [
    "Bitcoin Art Society is a curator-led initiative dedicated to elevating Bitcoin-native art and culture.",
    "We bring together artists, collectors, and institutions to create, exhibit, and preserve work whose provenance and story live on Bitcoin.",
    "Our mission is to highlight meaningful art, support creators, and make collecting on Bitcoin accessible and rewarding for a global audience.",
];

pub const ABOUT_BADGES: [Stat; 2] = [
    Stat {
        label: "Founded",
        value: "2025",
    },
    Stat {
        label: "Community",
        value: "Global",
    },
];

pub const BITART_QUESTION: &str = "What if Bitcoin has been generating art all along, and we simply haven't learned how to see it?";
pub const MINT_URL: &str = "https://www.ord-x.com/mosaic";

pub const MOSAIC_IMAGES: [&str; 6] = [
    "https://ext.same-assets.com/4158576384/352656661.png",
    "https://ext.same-assets.com/4158576384/2554264262.png",
    "https://ext.same-assets.com/4158576384/3814769048.png",
    "https://ext.same-assets.com/4158576384/808432457.png",
    "https://ext.same-assets.com/4158576384/2812838837.png",
    "https://ext.same-assets.com/4158576384/1818456682.png",
];

/// The marquee shows the images twice so the loop has no gap.
pub fn mosaic_strip() -> impl Iterator<Item = (usize, &'static str)> {
    MOSAIC_IMAGES.into_iter().chain(MOSAIC_IMAGES).enumerate()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Enter {
    Left,
    Up,
    Right,
}

impl Enter {
    /// Fade in from `distance` px off to the side the card enters from.
    pub fn motion(&self, distance: f64, duration_ms: u32, delay_ms: u32) -> Motion {
        match self {
            Enter::Left => Motion::fade_x(-distance, duration_ms, delay_ms),
            Enter::Up => Motion::fade_up(distance, duration_ms, delay_ms),
            Enter::Right => Motion::fade_x(distance, duration_ms, delay_ms),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoCard {
    pub title: &'static str,
    pub body: &'static str,
    pub color: Option<CardColor>,
    pub enter: Enter,
}

pub const BITART_CARDS: [InfoCard; 2] = [
    InfoCard {
        title: "The Mosaic Reveals",
        body: "Bitcoin's blockchain contains an embedded visual language, waiting to be decoded. Every transaction, every UTXO, every individual satoshi carries visual information encoded within its mathematical properties.",
        color: None,
        enter: Enter::Left,
    },
    InfoCard {
        title: "Collaborative Creation",
        body: "Community members contribute Sats as a collaborative crowd-sourced effort to build a generative mosaic. Each satoshi is a tile, building inscriptions that become coordinates in a larger digital Mosaic.",
        color: None,
        enter: Enter::Right,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    Upcoming,
    Past,
}

impl EventStatus {
    pub fn badge_class(&self) -> &'static str {
        match self {
            EventStatus::Upcoming => "bg-[#ec7f30]/20 text-[#ec7f30]",
            EventStatus::Past => "bg-white/10 text-white/60",
        }
    }
}

impl Display for EventStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EventStatus::Upcoming => "Upcoming",
            EventStatus::Past => "Past",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub title: &'static str,
    pub date: &'static str,
    pub location: &'static str,
    pub status: EventStatus,
    pub description: &'static str,
    pub image: Option<&'static str>,
}

pub const EVENTS: [Event; 3] = [
    Event {
        title: "Digital Art Residency",
        date: "TBD, 2025",
        location: "Los Angeles",
        status: EventStatus::Upcoming,
        description: "Join BitArt and the BAS Team for a deep dive into the artist practice on Bitcoin.",
        image: None,
    },
    Event {
        title: "BAS at Bitcoin MENA",
        date: "TBD, 2025",
        location: "Qatar",
        status: EventStatus::Upcoming,
        description: "The Bitcoin Art Society team will be on the ground in Qatar for Bitcoin MENA.",
        image: None,
    },
    Event {
        title: "Ordinals Buenos Aires",
        date: "Nov 13, 2025",
        location: "Buenos Aires",
        status: EventStatus::Past,
        description: "Bitcoin Art Society and OnChainMonkey present Ordinals Buenos Aires.",
        image: Some("https://ext.same-assets.com/4158576384/2717550421.avif"),
    },
];

pub const COMMUNITY_TAGLINE: &str = "The first billion dollar catalyst for Bitcoin L1 assets";

pub const COMMUNITY_STATS: [Stat; 4] = [
    Stat {
        label: "Focus",
        value: "Bitcoin-native art",
    },
    Stat {
        label: "Approach",
        value: "Curated Releases",
    },
    Stat {
        label: "Provenance",
        value: "On-chain (Ordinals)",
    },
    Stat {
        label: "Experience",
        value: "Culture-First",
    },
];

pub const COMMUNITY_CARDS: [InfoCard; 3] = [
    InfoCard {
        title: "Curation",
        body: "We focus on artists who explore the cultural and technical elements of Bitcoin to create works with lasting significance.",
        color: Some(CardColor::Purple),
        enter: Enter::Left,
    },
    InfoCard {
        title: "Digital Artist Residency",
        body: "A tailored experience designed to foster collaboration between Bitcoin artists and established art institutions worldwide.",
        color: Some(CardColor::Orange),
        enter: Enter::Up,
    },
    InfoCard {
        title: "Real World Assets",
        body: "Onchain provenance and public ledgers provide a durable and permanent solution to digital assets and physical RWAs.",
        color: Some(CardColor::Dark),
        enter: Enter::Right,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExternalLink {
    pub name: &'static str,
    pub href: &'static str,
    pub icon: Option<&'static str>,
}

pub const SOCIAL_LINKS: [ExternalLink; 2] = [
    ExternalLink {
        name: "X/Twitter",
        href: "https://x.com/BtcArtSociety",
        icon: Some(assets::X_ICON),
    },
    ExternalLink {
        name: "Instagram",
        href: "https://www.instagram.com/bitcoinartsociety/",
        icon: Some(assets::INSTAGRAM_ICON),
    },
];

pub const LEGAL_LINKS: [ExternalLink; 2] = [
    ExternalLink {
        name: "Privacy Policy",
        href: "https://app.termly.io/policy-viewer/policy.html?policyUUID=a5ebb08a-a5a5-47e9-9aca-8f4abc7e12c7",
        icon: None,
    },
    ExternalLink {
        name: "Terms",
        href: "https://app.termly.io/policy-viewer/policy.html?policyUUID=5f454a12-b8d0-4b37-adc9-87588ed820a9",
        icon: None,
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn nav_links_point_at_sections() {
        let hrefs: Vec<String> = NAV_LINKS.iter().map(|l| l.href()).collect();
        assert_eq!(hrefs, ["#about", "#bitart", "#events", "#community"]);
        for href in hrefs {
            assert!(SectionId::from_anchor(&href).is_ok(), "{}", href);
        }
        assert_eq!(JOIN_TARGET.anchor(), "#community");
    }

    #[test]
    fn exactly_one_center_feature() {
        let centers: Vec<&Feature> = FEATURES.iter().filter(|f| f.is_center).collect();
        assert_eq!(centers.len(), 1);
        assert!(centers[0].class().contains("row-span-2"));
        assert!(centers[0].subtitle.is_none());

        let titles: HashSet<&str> = FEATURES.iter().map(|f| f.title).collect();
        assert_eq!(titles.len(), FEATURES.len());
    }

    #[test]
    fn external_urls_are_absolute() {
        let urls = MOSAIC_IMAGES
            .iter()
            .copied()
            .chain(EVENTS.iter().filter_map(|e| e.image))
            .chain([
                assets::LOGO,
                assets::FAVICON,
                assets::COVER,
                assets::X_ICON,
                assets::INSTAGRAM_ICON,
            ]);
        for url in urls {
            assert!(url.starts_with(assets::ORIGIN), "{}", url);
        }
        for link in SOCIAL_LINKS.iter().chain(LEGAL_LINKS.iter()) {
            assert!(link.href.starts_with("https://"), "{}", link.href);
        }
        assert!(MINT_URL.starts_with("https://"));
    }

    #[test]
    fn mosaic_strip_repeats() {
        let strip: Vec<(usize, &str)> = mosaic_strip().collect();
        assert_eq!(strip.len(), MOSAIC_IMAGES.len() * 2);
        assert_eq!(strip[0].1, strip[MOSAIC_IMAGES.len()].1);
        assert_eq!(strip.last().map(|(i, _)| *i), Some(11));
    }

    #[test]
    fn cards_enter_from_their_side() {
        let left = Enter::Left.motion(50.0, 600, 200);
        assert_eq!(left.initial.x, Some(-50.0));
        assert_eq!(left.transition.delay_ms, 200);

        let up = Enter::Up.motion(50.0, 600, 300);
        assert_eq!(up.initial.y, Some(50.0));
        assert_eq!(up.initial.x, None);

        let right = Enter::Right.motion(50.0, 600, 400);
        assert_eq!(right.initial.x, Some(50.0));
        assert_eq!(right.initial.opacity, Some(0.0));
    }

    #[test]
    fn events() {
        let upcoming = EVENTS
            .iter()
            .filter(|e| e.status == EventStatus::Upcoming)
            .count();
        assert_eq!(upcoming, 2);
        assert_eq!(EventStatus::Past.to_string(), "Past");
        assert!(EVENTS
            .iter()
            .all(|e| e.image.is_none() || e.status == EventStatus::Past));
    }
}
