//! Bundled template sets, one header/source pair per variant

use crate::models::Variant;

const FINAL_HEADER: &str = include_str!("../../templates/final.h.tpl");
const FINAL_SOURCE: &str = include_str!("../../templates/final.c.tpl");
const DERIVABLE_HEADER: &str = include_str!("../../templates/derivable.h.tpl");
const DERIVABLE_SOURCE: &str = include_str!("../../templates/derivable.c.tpl");

/// Header and source templates for one variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateSet {
    /// Template for the `.h` file
    pub header: &'static str,
    /// Template for the `.c` file
    pub source: &'static str,
}

impl TemplateSet {
    /// Non-subclassable type: instance struct lives in the source file
    pub const FINAL: TemplateSet = TemplateSet {
        header: FINAL_HEADER,
        source: FINAL_SOURCE,
    };

    /// Subclassable type: public class struct plus private instance data
    pub const DERIVABLE: TemplateSet = TemplateSet {
        header: DERIVABLE_HEADER,
        source: DERIVABLE_SOURCE,
    };

    /// Select the template set for a variant
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Final => Self::FINAL,
            Variant::Derivable => Self::DERIVABLE,
        }
    }
}
