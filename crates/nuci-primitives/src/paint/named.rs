//! Catalogue of predefined colours.
//!
//! Every entry is fully opaque except [`Colour::TRANSPARENT`]. Each colour is
//! available as an associated const on [`Colour`] and through [`lookup`] by name.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::Colour;

/// Where a catalogue entry comes from.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Palette {
    Special,
    /// Web/X11 names.
    Web,
    /// House colours.
    Nuci,
    /// Pantone colours of the year.
    Pantone,
    /// Material Design primary palette.
    Material,
}

/// One catalogue entry.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct NamedColour {
    pub name: &'static str,
    pub palette: Palette,
    pub colour: Colour,
}

macro_rules! catalogue {
    ($($palette:ident { $($konst:ident = $name:literal ($r:literal, $g:literal, $b:literal $(, $a:literal)?);)+ })+) => {
        impl Colour {
            $($(
                #[doc = concat!("`", $name, "`")]
                pub const $konst: Colour = catalogue!(@colour $r, $g, $b $(, $a)?);
            )+)+
        }

        /// All predefined colours, in catalogue order.
        pub static NAMED_COLOURS: &[NamedColour] = &[
            $($(
                NamedColour { name: $name, palette: Palette::$palette, colour: Colour::$konst },
            )+)+
        ];
    };
    (@colour $r:literal, $g:literal, $b:literal) => { Colour::rgb($r, $g, $b) };
    (@colour $r:literal, $g:literal, $b:literal, $a:literal) => { Colour::rgba($r, $g, $b, $a) };
}

catalogue! {
    Special {
        TRANSPARENT = "Transparent" (0, 0, 0, 0);
    }
    Web {
        ALICE_BLUE = "AliceBlue" (240, 248, 255);
        ANTIQUE_WHITE = "AntiqueWhite" (250, 235, 215);
        AQUA = "Aqua" (0, 255, 255);
        AQUAMARINE = "Aquamarine" (127, 255, 212);
        BISQUE = "Bisque" (255, 228, 196);
        BLACK = "Black" (0, 0, 0);
        BLUE = "Blue" (0, 0, 255);
        CHOCOLATE = "Chocolate" (210, 105, 30);
        CORNFLOWER_BLUE = "CornflowerBlue" (100, 149, 237);
        CORNSILK = "Cornsilk" (255, 248, 220);
        CRIMSON = "Crimson" (220, 20, 60);
        DARK_GREEN = "DarkGreen" (0, 100, 0);
        DARK_RED = "DarkRed" (139, 0, 0);
        DIM_GRAY = "DimGray" (105, 105, 105);
        DODGER_BLUE = "DodgerBlue" (30, 144, 255);
        GOLD = "Gold" (255, 215, 0);
        GREEN = "Green" (0, 255, 0);
        OLIVE = "Olive" (128, 128, 0);
        OLIVE_DRAB = "OliveDrab" (107, 142, 45);
        ORANGE = "Orange" (255, 165, 0);
        RED = "Red" (255, 0, 0);
        ROYAL_BLUE = "RoyalBlue" (65, 105, 255);
        SALMON = "Salmon" (250, 128, 114);
        SEA_GREEN = "SeaGreen" (46, 139, 87);
        SKY_BLUE = "SkyBlue" (135, 206, 235);
        SNOW = "Snow" (255, 250, 250);
        TAN = "Tan" (210, 180, 140);
        TEAL = "Teal" (0, 128, 128);
        THISTLE = "Thistle" (216, 191, 216);
        TOMATO = "Tomato" (255, 99, 71);
        TURQUOISE = "Turquoise" (64, 224, 208);
        VIOLET = "Violet" (238, 130, 238);
        WHEAT = "Wheat" (245, 222, 179);
        WHITE = "White" (255, 255, 255);
        WHITE_SMOKE = "WhiteSmoke" (245, 245, 245);
        YELLOW = "Yellow" (255, 255, 0);
        YELLOW_GREEN = "YellowGreen" (154, 205, 50);
    }
    Nuci {
        COBALT_BLUE = "CobaltBlue" (0, 43, 127);
        CHROME_YELLOW = "ChromeYellow" (252, 209, 22);
        PERSIAN_RED = "PersianRed" (200, 29, 17);
        VERMILION = "Vermilion" (227, 66, 52);
        VERMILION_RED = "VermilionRed" (206, 17, 38);
    }
    Pantone {
        GREENERY = "Greenery" (136, 176, 75);
        HONEYSUCKLE = "Honeysuckle" (217, 79, 112);
        TANGERINE = "Tangerine" (248, 143, 88);
        TANGERINE_TANGO = "TangerineTango" (221, 65, 36);
        ULTRA_VIOLET = "UltraViolet" (95, 75, 139);
    }
    Material {
        MATERIAL_RED = "MaterialRed" (244, 67, 54);
        MATERIAL_PINK = "MaterialPink" (233, 30, 99);
        MATERIAL_PURPLE = "MaterialPurple" (103, 58, 183);
        MATERIAL_INDIGO = "MaterialIndigo" (63, 81, 181);
        MATERIAL_BLUE = "MaterialBlue" (33, 150, 243);
        MATERIAL_LIGHT_BLUE = "MaterialLightBlue" (3, 169, 244);
        MATERIAL_CYAN = "MaterialCyan" (0, 188, 212);
        MATERIAL_TEAL = "MaterialTeal" (0, 150, 136);
        MATERIAL_GREEN = "MaterialGreen" (76, 175, 80);
        MATERIAL_LIGHT_GREEN = "MaterialLightGreen" (139, 195, 74);
        MATERIAL_LIME = "MaterialLime" (205, 220, 57);
        MATERIAL_YELLOW = "MaterialYellow" (255, 235, 59);
        MATERIAL_AMBER = "MaterialAmber" (255, 193, 7);
        MATERIAL_ORANGE = "MaterialOrange" (255, 152, 0);
        MATERIAL_DEEP_ORANGE = "MaterialDeepOrange" (255, 87, 34);
        MATERIAL_BROWN = "MaterialBrown" (121, 85, 72);
        MATERIAL_GREY = "MaterialGrey" (158, 158, 158);
        MATERIAL_BLUE_GREY = "MaterialBlueGrey" (96, 125, 139);
    }
}

/// Older spellings still accepted by [`lookup`].
const ALIASES: &[(&str, Colour)] = &[("Turqoise", Colour::TURQUOISE)];

static BY_KEY: LazyLock<HashMap<String, Colour>> = LazyLock::new(|| {
    let entries = NAMED_COLOURS.iter().map(|n| (n.name, n.colour));
    let mut map: HashMap<String, Colour> = HashMap::with_capacity(NAMED_COLOURS.len() + ALIASES.len());
    for (name, colour) in entries.chain(ALIASES.iter().copied()) {
        map.entry(normalise(name)).or_insert(colour);
    }
    map
});

/// Lowercases and drops spaces, underscores and hyphens: `"Alice Blue"` -> `"aliceblue"`.
///
/// This is the key [`lookup`] matches on.
pub fn normalise(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Finds a predefined colour by name.
///
/// Matching ignores case, spaces, underscores and hyphens, so `"alice_blue"`,
/// `"Alice Blue"` and `"ALICEBLUE"` all resolve to [`Colour::ALICE_BLUE`].
pub fn lookup(name: &str) -> Option<Colour> {
    let found = BY_KEY.get(&normalise(name)).copied();
    if found.is_none() {
        log::trace!("no catalogue colour named {name:?}");
    }
    found
}

/// First catalogue name whose value equals `colour`.
pub fn name_of(colour: Colour) -> Option<&'static str> {
    NAMED_COLOURS.iter().find(|n| n.colour == colour).map(|n| n.name)
}
