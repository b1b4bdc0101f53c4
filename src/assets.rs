// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Pawhaven Contributors

//! Bundled image assets
//!
//! The terminal has no image pipeline, so bundled "images" are small blocks
//! of ASCII art keyed by the identifiers the catalog references. Unknown
//! identifiers resolve to a neutral placeholder rather than an error.

const PET_BUDDY: &str = r#" /^ ^\
( o.o )
 > ^ <
 /| |\"#;

const PET_MILO: &str = r#"  ,_,
 (o,o)
 {`"'}
 -"-"-"#;

const PET_BELLA: &str = r#" /\_/\
( ^.^ )
 (>o<)
  " ""#;

const PET_TIMO: &str = r#"  __
o-''|\
   \_\
   |__|"#;

const BANNER: &str = r#". . :  pawhaven  : . .
 .  : adopt a friend :  ."#;

const PLACEHOLDER: &str = r#" ____
|    |
| ?? |
|____|"#;

/// Resolves bundled image identifiers to renderable art.
pub trait AssetLoader: Send + Sync {
    /// Art for the identifier, or None if it is unknown
    fn resolve(&self, image: &str) -> Option<&'static str>;

    /// Art for the identifier, falling back to a placeholder
    fn resolve_or_placeholder(&self, image: &str) -> &'static str {
        self.resolve(image).unwrap_or(PLACEHOLDER)
    }
}

/// Assets compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledAssets;

impl AssetLoader for BundledAssets {
    fn resolve(&self, image: &str) -> Option<&'static str> {
        match image {
            "pet-buddy" => Some(PET_BUDDY),
            "pet-milo" => Some(PET_MILO),
            "pet-bella" => Some(PET_BELLA),
            "pet-timo" => Some(PET_TIMO),
            "banner" => Some(BANNER),
            _ => None,
        }
    }
}

/// Height in lines of the tallest pet art; tiles reserve this much space
pub const PET_ART_HEIGHT: u16 = 4;
