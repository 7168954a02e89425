//! Tile frequency table
//!
//! Weights are English letter frequencies in thousandths of a percent. `Q`
//! only ever appears as the `QU` tile.

/// Every tile the generator can place, with its relative weight
pub const LETTER_FREQUENCIES: [(&str, u32); 26] = [
    ("A", 8167),
    ("B", 1492),
    ("C", 2782),
    ("D", 4253),
    ("E", 12702),
    ("F", 2228),
    ("G", 2015),
    ("H", 6094),
    ("I", 6966),
    ("J", 153),
    ("K", 772),
    ("L", 4025),
    ("M", 2406),
    ("N", 6749),
    ("O", 7507),
    ("P", 1929),
    ("QU", 95),
    ("R", 5987),
    ("S", 6327),
    ("T", 9056),
    ("U", 2758),
    ("V", 978),
    ("W", 2360),
    ("X", 150),
    ("Y", 1974),
    ("Z", 74),
];
