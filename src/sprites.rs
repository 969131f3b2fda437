//! Sprite catalogue
//!
//! The simulation only ever names sprites; turning a glyph into pixels is the
//! host's job. Each glyph is a list of rows where `#` marks a lit pixel.

use serde::{Deserialize, Serialize};

/// Logical sprite identifier (one per animation frame)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpriteId {
    Octopus0,
    Octopus1,
    Crab0,
    Crab1,
    Squid0,
    Squid1,
    Shooter,
    Explosion,
    Zap0,
    Zap1,
    Cross,
}

impl SpriteId {
    /// Glyph rows for this sprite
    pub fn glyph(self) -> &'static [&'static str] {
        match self {
            SpriteId::Octopus0 => OCTOPUS_0,
            SpriteId::Octopus1 => OCTOPUS_1,
            SpriteId::Crab0 => CRAB_0,
            SpriteId::Crab1 => CRAB_1,
            SpriteId::Squid0 => SQUID_0,
            SpriteId::Squid1 => SQUID_1,
            SpriteId::Shooter => SHOOTER,
            SpriteId::Explosion => EXPLOSION,
            SpriteId::Zap0 => ZAP_0,
            SpriteId::Zap1 => ZAP_1,
            SpriteId::Cross => CROSS,
        }
    }

    /// Width of the widest glyph row
    pub fn width(self) -> usize {
        self.glyph().iter().map(|row| row.len()).max().unwrap_or(0)
    }

    pub fn height(self) -> usize {
        self.glyph().len()
    }

    /// Lit pixel offsets `(x, y)` relative to the sprite origin
    pub fn lit_pixels(self) -> impl Iterator<Item = (usize, usize)> {
        self.glyph().iter().enumerate().flat_map(|(y, row)| {
            row.bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'#')
                .map(move |(x, _)| (x, y))
        })
    }
}

const OCTOPUS_0: &[&str] = &[
    "    ####    ",
    " ########## ",
    "############",
    "###  ##  ###",
    "############",
    "  ###  ###  ",
    " ##  ##  ## ",
    "  ##    ##  ",
];

const OCTOPUS_1: &[&str] = &[
    "    ####    ",
    " ########## ",
    "############",
    "###  ##  ###",
    "############",
    "   ##  ##   ",
    "  ## ## ##  ",
    "##        ##",
];

const CRAB_0: &[&str] = &[
    "  #     #   ",
    "   #   #    ",
    "  #######   ",
    " ## ### ##  ",
    "########### ",
    "########### ",
    "# #     # # ",
    "   ## ##    ",
];

const CRAB_1: &[&str] = &[
    "  #     #   ",
    "#  #   #  # ",
    "# ####### # ",
    "### ### ### ",
    "########### ",
    " #########  ",
    "  #     #   ",
    " #       #  ",
];

const SQUID_0: &[&str] = &[
    "     ##     ",
    "    ####    ",
    "   ######   ",
    "  ## ## ##  ",
    "  ########  ",
    "   # ## #   ",
    "  #      #  ",
    "   #    #   ",
];

const SQUID_1: &[&str] = &[
    "     ##     ",
    "    ####    ",
    "   ######   ",
    "  ## ## ##  ",
    "  ########  ",
    "    #  #    ",
    "   # ## #   ",
    "  # #  # #  ",
];

const SHOOTER: &[&str] = &[
    "       #       ",
    "      ###      ",
    "      ###      ",
    " ############# ",
    "###############",
    "###############",
    "###############",
    "###############",
];

const EXPLOSION: &[&str] = &[
    "     #      ",
    " #   #  #   ",
    "  #     #  #",
    "   #   #  # ",
    "##          ",
    "          ##",
    " #  #   #   ",
    "#  #     #  ",
    "   #  #   # ",
    "      #     ",
];

const ZAP_0: &[&str] = &[" # ", "  #", " # ", "#  ", " # "];

const ZAP_1: &[&str] = &[" # ", "#  ", " # ", "  #", " # "];

const CROSS: &[&str] = &[" # ", "###", " # ", " # ", " # "];
