//! Face asset variants: local suffix and wiki filename template.

/// One kind of face art a unit can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceVariant {
    /// Appended to the sanitized display name for the local file.
    pub local_suffix: &'static str,
    /// Appended to the raw display name for the wiki file.
    pub wiki_suffix: &'static str,
}

pub const STANDARD_FACE: FaceVariant = FaceVariant {
    local_suffix: ".webp",
    wiki_suffix: "_Face_FC.webp",
};

pub const RESPLENDENT_FACE: FaceVariant = FaceVariant {
    local_suffix: "_Resplendent.webp",
    wiki_suffix: "_Resplendent_Face_FC.webp",
};

impl FaceVariant {
    pub fn local_filename(&self, safe_name: &str) -> String {
        format!("{safe_name}{}", self.local_suffix)
    }

    pub fn wiki_filename(&self, display_name: &str) -> String {
        format!("{display_name}{}", self.wiki_suffix)
    }
}
