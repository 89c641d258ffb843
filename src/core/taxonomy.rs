//! Taxonomy domains and their keyword lists.
//!
//! Tables are ordered by domain code ascending; classifiers rely on that
//! order to break confidence ties deterministically.

/// A taxonomy domain with the keywords that signal it
#[derive(Debug, Clone, Copy)]
pub struct DomainKeywords {
    pub code: &'static str,
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}

/// Production keyword table (five retail domains)
pub const ONDC_DOMAINS: &[DomainKeywords] = &[
    DomainKeywords {
        code: "RET10",
        name: "Grocery",
        keywords: &[
            "grocery", "kirana", "rice", "dal", "flour", "spice", "atta", "oil",
            "sugar", "tea", "masala", "provision", "staple", "grain", "pulse",
        ],
    },
    DomainKeywords {
        code: "RET12",
        name: "Fashion",
        keywords: &[
            "cloth", "garment", "textile", "saree", "kurta", "fabric", "stitch",
            "tailor", "fashion", "apparel", "dress", "wear", "cotton", "silk",
        ],
    },
    DomainKeywords {
        code: "RET14",
        name: "Electronics",
        keywords: &[
            "electronic", "mobile", "phone", "computer", "laptop", "repair",
            "electric", "wire", "cable", "led", "bulb", "fan", "appliance",
        ],
    },
    DomainKeywords {
        code: "RET16",
        name: "Home & Kitchen",
        keywords: &[
            "furniture", "kitchen", "utensil", "steel", "vessel", "wooden",
            "craft", "pottery", "home", "décor", "mat", "basket", "bamboo",
        ],
    },
    DomainKeywords {
        code: "RET18",
        name: "Health & Wellness",
        keywords: &[
            "ayurved", "herbal", "medicine", "health", "wellness", "organic",
            "yoga", "pharma", "supplement", "honey", "natural", "beauty",
        ],
    },
];

/// Shorter rule table used only by the benchmarking baseline
pub const BASELINE_RULES: &[DomainKeywords] = &[
    DomainKeywords {
        code: "RET10",
        name: "Grocery",
        keywords: &["grocery", "kirana", "rice", "dal", "flour", "spice", "atta", "oil", "sugar", "tea"],
    },
    DomainKeywords {
        code: "RET12",
        name: "Fashion",
        keywords: &["cloth", "garment", "textile", "saree", "kurta", "fabric", "fashion", "cotton", "silk"],
    },
    DomainKeywords {
        code: "RET14",
        name: "Electronics",
        keywords: &["electronic", "mobile", "phone", "computer", "laptop", "repair", "led", "fan"],
    },
    DomainKeywords {
        code: "RET16",
        name: "Home & Kitchen",
        keywords: &["furniture", "kitchen", "utensil", "steel", "wooden", "craft", "pottery", "bamboo"],
    },
    DomainKeywords {
        code: "RET18",
        name: "Health & Wellness",
        keywords: &["ayurved", "herbal", "medicine", "health", "organic", "yoga", "honey", "natural"],
    },
];

/// Display name for a domain code, if known
pub fn domain_name(code: &str) -> Option<&'static str> {
    ONDC_DOMAINS.iter().find(|d| d.code == code).map(|d| d.name)
}
