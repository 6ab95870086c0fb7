//! Static roster data. Built once on first access and never mutated.

use std::sync::LazyLock;

use crate::domain::{RosterId, RosterItem, RosterKind, SocialLinks};

pub const EVENT_TITLE: &str = "Moroccan Rap Tournament 2025";

/// Contestants shown with a highlight.
const FEATURED_CONTESTANTS: [RosterId; 2] = [RosterId(1), RosterId(2)];

/// (name, image, instagram, youtube)
const CONTESTANT_ROWS: &[(&str, &str, &str, &str)] = &[
    (
        "Aessa",
        "https://i.postimg.cc/HkSrqsrH/channels4-profile.jpg",
        "https://www.instagram.com/aessa.17/",
        "https://www.youtube.com/@Aessa",
    ),
    (
        "Kraken",
        "https://i.postimg.cc/GtkBVFyS/channels4-profile.jpg",
        "https://www.instagram.com/eyokrak3n/",
        "https://www.youtube.com/@krak3nofficiel",
    ),
    (
        "TheTwama",
        "https://i.postimg.cc/MGTQHfCv/twama.jpg",
        "https://instagram.com/tagne",
        "https://youtube.com/tagne",
    ),
    (
        "Shaoline",
        "https://i.postimg.cc/MGNvGP0F/487381472-685538813947176-1669292170279316275-n.jpg",
        "https://www.instagram.com/shaolineee1/",
        "https://www.youtube.com/@Shaolineee",
    ),
    (
        "Merv48",
        "https://i.postimg.cc/13T90ggg/merv.jpg",
        "https://www.instagram.com/mirv48/",
        "https://www.youtube.com/channel/UCNLrkJhiaNR24ikmOmntxCw",
    ),
    (
        "K- THUG",
        "https://i.postimg.cc/k5KdxT3Z/dd.jpg",
        "https://www.instagram.com/@KTHUG",
        "https://www.youtube.com/@KTHUG",
    ),
    (
        "RedaGoathis",
        "https://i.postimg.cc/RhsrM8K3/reda.webp",
        "https://www.instagram.com/redagoathis/",
        "",
    ),
    (
        "ASSAM",
        "https://i.postimg.cc/W4RBb0F7/rrr.jpg",
        "",
        "https://www.youtube.com/@samimellalpro",
    ),
    (
        "the little biggy",
        "https://i.postimg.cc/B64R2sCL/dddd.jpg",
        "https://www.instagram.com/tlbiggy/",
        "https://www.youtube.com/@tlbiggy",
    ),
    (
        "Outis",
        "https://i.postimg.cc/wTZP0DVd/ddq.jpg",
        "https://www.instagram.com/outis_az/",
        "https://www.youtube.com/@OUTIS_Az",
    ),
    (
        "BIG A",
        "https://i.postimg.cc/3wCc8VHK/b.webp",
        "https://www.instagram.com/callme_big_a/",
        "https://www.youtube.com/@BIG_A_off",
    ),
    (
        "ROUIKOS",
        "https://i.postimg.cc/NMsP5DgR/a.jpg",
        "https://www.instagram.com/rouikos/",
        "https://www.youtube.com/@rouikos1510",
    ),
    (
        "Ndrophin",
        "https://i.postimg.cc/x1Ls5h8K/dddd.webp",
        "https://www.instagram.com/ndrophin.off/",
        "https://www.youtube.com/@Ndrophin_off",
    ),
    (
        "Romalisa",
        "https://i.postimg.cc/hjZMhqZq/r.jpg",
        "https://www.instagram.com/romalisaa/",
        "https://www.youtube.com/@romalisaa",
    ),
    (
        "Zeta7",
        "https://i.postimg.cc/XNhQb4yf/a.jpg",
        "https://www.instagram.com/zeta7__/",
        "https://www.youtube.com/@zeta.7x",
    ),
];

/// (name, role, image, kick, instagram)
const GUEST_ROWS: &[(&str, &str, &str, &str, &str)] = &[
    (
        "Nahoule82",
        "Streamer",
        "https://i.postimg.cc/pVp3mYKt/images.jpg",
        "https://kick.com/nahoule82",
        "https://www.instagram.com/nahoule82",
    ),
    (
        "vodkafunky",
        "Streamer",
        "https://i.postimg.cc/Bvxsj5Fg/f6ab5e3a-f016-433a-b78f-8efaae1fb57b.png",
        "https://kick.com/vodkafunky",
        "https://www.instagram.com/vodkafunky",
    ),
    (
        "Bougassa",
        "Streamer",
        "https://i.postimg.cc/43TRRK0h/images.jpg",
        "https://kick.com/bougassa",
        "https://www.instagram.com/bougassa",
    ),
    (
        "DanasTV",
        "Streamer",
        "https://i.postimg.cc/Pr87fXYb/images-1.jpg",
        "https://kick.com/danastv",
        "https://www.instagram.com/danastv",
    ),
    (
        "Ahmed Sabiri",
        "Streamer",
        "https://i.postimg.cc/1z5hzx99/images-2.jpg",
        "https://kick.com/ahmedsabiri",
        "https://www.instagram.com/ahmedsabiri",
    ),
    (
        "7liwa",
        "Rapper",
        "https://i.postimg.cc/hPs7YSF0/1c7432e8b00300d6eaa3f4e2c697d3d7.jpg",
        "https://kick.com/ahmedsabiri",
        "https://www.instagram.com/ahmedsabiri",
    ),
];

/// (name, image, instagram, kick)
const ORGANIZER_ROWS: &[(&str, &str, &str, &str)] = &[
    (
        "Elgrande Toto",
        "https://i.postimg.cc/prvtxw7J/toto.jpg",
        "https://www.instagram.com/elgrandetoto/",
        "https://kick.com/elgrandetotoff",
    ),
    (
        "Ilyas Elmaliki",
        "https://i.postimg.cc/jd7n5PLg/92e4422d-0448-4324-b37d-2f451d2454ba-fullsize.webp",
        "https://www.instagram.com/ilyas.elmaliki.921/",
        "https://kick.com/ilyaselmaliki",
    ),
];

static CONTESTANTS: LazyLock<Vec<RosterItem>> = LazyLock::new(|| {
    CONTESTANT_ROWS
        .iter()
        .enumerate()
        .map(|(index, (name, image, instagram, youtube))| RosterItem {
            id: sequential_id(index),
            name: (*name).to_string(),
            role: None,
            image_url: (*image).to_string(),
            links: SocialLinks::new(instagram, youtube, ""),
            featured: FEATURED_CONTESTANTS.contains(&sequential_id(index)),
        })
        .collect()
});

static GUESTS: LazyLock<Vec<RosterItem>> = LazyLock::new(|| {
    GUEST_ROWS
        .iter()
        .enumerate()
        .map(|(index, (name, role, image, kick, instagram))| RosterItem {
            id: sequential_id(index),
            name: (*name).to_string(),
            role: Some((*role).to_string()),
            image_url: (*image).to_string(),
            links: SocialLinks::new(instagram, "", kick),
            featured: false,
        })
        .collect()
});

static ORGANIZERS: LazyLock<Vec<RosterItem>> = LazyLock::new(|| {
    ORGANIZER_ROWS
        .iter()
        .enumerate()
        .map(|(index, (name, image, instagram, kick))| RosterItem {
            id: sequential_id(index),
            name: (*name).to_string(),
            role: None,
            image_url: (*image).to_string(),
            links: SocialLinks::new(instagram, "", kick),
            featured: false,
        })
        .collect()
});

fn sequential_id(index: usize) -> RosterId {
    RosterId(index as i64 + 1)
}

pub fn contestants() -> &'static [RosterItem] {
    &CONTESTANTS
}

pub fn guests() -> &'static [RosterItem] {
    &GUESTS
}

pub fn organizers() -> &'static [RosterItem] {
    &ORGANIZERS
}

pub fn roster(kind: RosterKind) -> &'static [RosterItem] {
    match kind {
        RosterKind::Contestants => contestants(),
        RosterKind::Guests => guests(),
        RosterKind::Organizers => organizers(),
    }
}
