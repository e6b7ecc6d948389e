// ABOUTME: Dietary restriction keyword classification
// ABOUTME: Scans free text once and produces the flags the plan generator branches on
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::DietaryFlags;

const PLANT_BASED_KEYWORDS: [&str; 2] = ["vegetarian", "vegan"];
const GLUTEN_KEYWORD: &str = "gluten";

/// Classify dietary restriction text by case-insensitive substring match
///
/// Any mention of gluten sets `gluten_free`, including phrases such as
/// "gluten is fine".
#[must_use]
pub fn classify(text: &str) -> DietaryFlags {
    let lowered = text.to_lowercase();
    DietaryFlags {
        plant_based: PLANT_BASED_KEYWORDS.iter().any(|k| lowered.contains(k)),
        gluten_free: lowered.contains(GLUTEN_KEYWORD),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vegan_is_plant_based() {
        assert!(classify("Strict VEGAN").plant_based);
        assert!(classify("mostly vegetarian").plant_based);
    }

    #[test]
    fn test_gluten_mention() {
        let flags = classify("Gluten-free, lactose intolerant");
        assert!(flags.gluten_free);
        assert!(!flags.plant_based);
    }

    #[test]
    fn test_empty_text_has_no_flags() {
        assert_eq!(classify(""), DietaryFlags::default());
    }
}
