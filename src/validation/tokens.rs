//! Closed vocabularies for every enumerated card and set field.
//!
//! Each table is a plain membership set. Accepting a new printed value means
//! adding it here; the validators never special-case individual tokens.

use std::collections::HashSet;

use once_cell::sync::Lazy;

pub type TokenTable = Lazy<HashSet<&'static str>>;

// ---------------------------------------------------------------------------
// Card presentation
// ---------------------------------------------------------------------------

pub static LAYOUTS: TokenTable = Lazy::new(|| {
    HashSet::from([
        "normal",
        "split",
        "flip",
        "transform",
        "meld",
        "leveler",
        "planar",
        "scheme",
        "vanguard",
        "token",
        "double_faced_token",
        "emblem",
        "augment",
        "host",
    ])
});

pub static RARITIES: TokenTable =
    Lazy::new(|| HashSet::from(["common", "uncommon", "rare", "mythic"]));

pub static FRAMES: TokenTable =
    Lazy::new(|| HashSet::from(["1993", "1997", "2003", "2015", "future"]));

pub static BORDER_COLORS: TokenTable =
    Lazy::new(|| HashSet::from(["black", "borderless", "gold", "silver", "white"]));

pub static WATERMARKS: TokenTable = Lazy::new(|| {
    HashSet::from([
        // guilds
        "azorius",
        "boros",
        "dimir",
        "golgari",
        "gruul",
        "izzet",
        "orzhov",
        "rakdos",
        "selesnya",
        "simic",
        // clans and dragonlords
        "abzan",
        "jeskai",
        "mardu",
        "sultai",
        "temur",
        "atarka",
        "dromoka",
        "kolaghan",
        "ojutai",
        "silumgar",
        // factions
        "mirran",
        "phyrexian",
        // Unstable factions
        "agentsofsneak",
        "crossbreedlabs",
        "goblinexplosioneers",
        "leagueofdastardlydoom",
        "orderofthewidget",
        // colors
        "white",
        "blue",
        "black",
        "red",
        "green",
        "colorpie",
        // programs and events
        "arena",
        "conspiracy",
        "dci",
        "fnm",
        "grandprix",
        "hero",
        "junior",
        "mps",
        "nerf",
        "planeswalker",
        "protour",
        "set",
        "wotc",
    ])
});

// ---------------------------------------------------------------------------
// Card stats and costs
// ---------------------------------------------------------------------------

pub static COLORS: TokenTable = Lazy::new(|| HashSet::from(["W", "U", "B", "R", "G"]));

pub static POWER_TOUGHNESS: TokenTable = Lazy::new(|| {
    HashSet::from([
        "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "13", "14", "15",
        "16", "17", "99", "-1", "-0", "+0", "+1", "+2", "+3", "+4", ".5", "1.5", "2.5", "3.5",
        "*", "1+*", "2+*", "7-*", "*²", "∞", "?",
    ])
});

pub static LOYALTIES: TokenTable = Lazy::new(|| {
    HashSet::from([
        "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "20", "X", "*",
    ])
});

pub static MANA_SYMBOLS: TokenTable = Lazy::new(|| {
    HashSet::from([
        // colored, colorless, snow
        "{W}", "{U}", "{B}", "{R}", "{G}", "{C}", "{S}",
        // variable
        "{X}", "{Y}", "{Z}",
        // generic
        "{0}", "{1}", "{2}", "{3}", "{4}", "{5}", "{6}", "{7}", "{8}", "{9}", "{10}",
        "{11}", "{12}", "{13}", "{14}", "{15}", "{16}", "{17}", "{18}", "{19}", "{20}",
        "{100}", "{1000000}", "{½}", "{∞}",
        // half mana
        "{HW}", "{HR}",
        // hybrid
        "{W/U}", "{W/B}", "{U/B}", "{U/R}", "{B/R}", "{B/G}", "{R/W}", "{R/G}", "{G/W}",
        "{G/U}",
        // monocolored hybrid
        "{2/W}", "{2/U}", "{2/B}", "{2/R}", "{2/G}",
        // Phyrexian
        "{P}", "{W/P}", "{U/P}", "{B/P}", "{R/P}", "{G/P}",
    ])
});

// ---------------------------------------------------------------------------
// Sets and play formats
// ---------------------------------------------------------------------------

pub static SET_TYPES: TokenTable = Lazy::new(|| {
    HashSet::from([
        "core",
        "expansion",
        "masters",
        "masterpiece",
        "from_the_vault",
        "spellbook",
        "premium_deck",
        "duel_deck",
        "commander",
        "planechase",
        "conspiracy",
        "archenemy",
        "vanguard",
        "funny",
        "starter",
        "box",
        "promo",
        "token",
        "memorabilia",
    ])
});

/// Play formats in the order their legality flags are checked.
pub const FORMATS: [&str; 11] = [
    "standard",
    "future",
    "frontier",
    "modern",
    "legacy",
    "pauper",
    "vintage",
    "penny",
    "commander",
    "one_v_one",
    "duel",
];

pub fn is_format(name: &str) -> bool {
    FORMATS.contains(&name)
}
