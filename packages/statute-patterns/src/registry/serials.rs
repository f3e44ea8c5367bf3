//! Curated serial patterns, one per category with a reliable serial form.
//!
//! Ambiguity-prone categories restrict their serials to an enumerated
//! allow-list instead of the generic numeric grammar: unconstrained
//! matching on bare small numbers produces unacceptably many false
//! positives (there are too many "Executive Order No. 1"s across
//! different administrations to resolve from text alone).

use crate::category::StatuteSerialCategory;
use crate::error::Result;
use crate::pattern::{
    add_blg, add_num, ltr, set_digits, NON_ACT_INDICATORS, SerialPattern, SerialPatternCollection,
};

fn republic_act() -> SerialPattern {
    SerialPattern::new(
        StatuteSerialCategory::RepublicAct,
        [
            add_num(&ltr(&["R", "A"])),
            add_num(r"Rep(?:ublic|\.)?\s+Act(?:\s*\((?:\bR\.?\s*A\.?)\))?"),
        ],
        [set_digits()],
    )
    .with_matches([
        "R.A. 386",
        "Rep Act No. 386",
        "Republic Act No. 386, 1114, and 11000",
        "RA Nos. 965 and 2630",
    ])
    .with_excludes(["Republic Act"])
}

fn commonwealth_act() -> SerialPattern {
    SerialPattern::new(
        StatuteSerialCategory::CommonwealthAct,
        [
            add_num(&ltr(&["C", "A"])),
            add_num(r"Com(?:monwealth|\.)?\s+Act(?:\s*\((?:\bC\.?\s*A\.?)\))?"),
        ],
        [r"\d{1,3}(?:-[AB])?"],
    )
    .with_matches(["CA 613", "Commonwealth Act (C.A.) No. 613"])
}

fn act() -> SerialPattern {
    // Guarded: "Act" preceded by Republic / Commonwealth / "An" phrasing is
    // not a legacy Act of congress.
    SerialPattern::new(
        StatuteSerialCategory::Act,
        [add_num(r"Acts?")],
        [r"\d{1,4}"],
    )
    .with_matches(["Act No. 3015", "Act Nos. 124"])
    .with_excludes(["An Act"])
    .with_excluded_preceders(NON_ACT_INDICATORS)
}

fn executive_order() -> SerialPattern {
    SerialPattern::new(
        StatuteSerialCategory::ExecutiveOrder,
        [
            add_num(&ltr(&["E", "O"])),
            add_num(r"Exec(?:utive|\.)?\s+Order(?:\s*\((?:\bE\.?\s*O\.?)\))?"),
        ],
        [
            // popular based on opinions
            "(?:292|209|229|228|14|1008|648|129-a|226|227|91)",
            // used in codifications
            "(?:214|59|191|272|187|62|33|111|47|233)",
        ],
    )
    .with_matches(["E.O. 292", "EO 47"])
    .with_excludes(["EO 1"])
}

fn presidential_decree() -> SerialPattern {
    SerialPattern::new(
        StatuteSerialCategory::PresidentialDecree,
        [
            add_num(&ltr(&["P", "D"])),
            add_num(r"Pres(?:idential|\.)?\s+Dec(?:ree|\.)?(?:\s*\((?:\bP\.?\s*D\.?)\))?"),
        ],
        [r"\d{1,4}(?:-[AB])?"],
    )
    .with_matches(["Presidential Decree No. 1474-B", "P.D. No. 971"])
}

fn batas_pambansa() -> SerialPattern {
    SerialPattern::new(
        StatuteSerialCategory::BatasPambansa,
        [
            add_blg(&ltr(&["B", "P"])),
            add_blg(r"Batas\s+Pambansa(?:\s*\((?:\bB\.?\s*P\.?)\))?"),
        ],
        [r"\d{1,3}(?:-[AB])?"],
    )
    .with_matches(["B.  P.   22", "Batas Pambansa Blg. 22"])
}

fn letter_of_instruction() -> SerialPattern {
    SerialPattern::new(
        StatuteSerialCategory::LetterOfInstruction,
        [
            add_num(&ltr(&["L", "O", "I"])),
            add_num(r"Letters?\s+of\s+Instruction"),
        ],
        // popular based on opinions
        ["(?:474|729|97|270|926|1295|19|174|273|767|1416|713|968)"],
    )
    .with_matches(["LOI 474", "Letter of Instruction No. 1295"])
    .with_excludes(["Letter of Instruction No. 1"])
}

fn veto_message() -> SerialPattern {
    // This format is limited to codification histories, e.g. the veto
    // message on R.A. 11534 (tax code).
    SerialPattern::new(
        StatuteSerialCategory::VetoMessage,
        [r"Veto\sMessage\s-\s"],
        [r"\d{5,}"],
    )
    .with_matches(["Veto Message - 11534"])
    .with_excludes(["Veto Message"])
}

fn administrative_matter() -> SerialPattern {
    SerialPattern::new(
        StatuteSerialCategory::AdministrativeMatter,
        [
            add_num(&ltr(&["A", "M"])),
            add_num(r"Adm(?:in)?\.?\s+Matter"),
            add_num(r"Administrative\s+Matter"),
        ],
        [r"(?:\d{1,2}-){3}SC\b", r"99-10-05-0\b"],
    )
    .with_matches(["A.M. No. 02-11-10-SC", "Admin Matter No. 99-10-05-0"])
    .with_excludes(["A.M. 141241", "Administrative Matter No. 12-12-12"])
}

fn bar_matter() -> SerialPattern {
    SerialPattern::new(
        StatuteSerialCategory::BarMatter,
        [add_num(&ltr(&["B", "M"])), add_num(r"Bar\s+Matter")],
        [
            // popular based on opinions
            "(?:803|1922|1645|850|287|1132|1755|1960|209|1153)",
            // used in codifications
            "(?:411|356)",
        ],
    )
    .with_matches(["Bar Matter No.803", "B.M. 1922"])
    .with_excludes(["BM 100"])
}

fn circular_sc() -> SerialPattern {
    SerialPattern::new(
        StatuteSerialCategory::CircularSC,
        [add_num(r"SC\s+Circular")],
        [r"19"],
    )
    .with_matches(["SC Circular No. 19"])
    .with_excludes(["SC Circular No. 1"])
}

fn circular_oca() -> SerialPattern {
    SerialPattern::new(
        StatuteSerialCategory::CircularOCA,
        [add_num(r"OCA\s+Circular")],
        [r"39-02"],
    )
    .with_matches(["OCA Circular No. 39-02"])
    .with_excludes(["SC Circular No. 39"])
}

fn resolution_en_banc() -> SerialPattern {
    SerialPattern::new(
        StatuteSerialCategory::ResolutionEnBanc,
        [r"Resolution\s+of\s+the\s+Court\s+En\s+Banc\s+dated"],
        [r"10-15-1991"],
    )
    .with_matches(["Resolution of the Court En Banc dated 10-15-1991"])
}

/// Build the serial registry.
///
/// List order is the ambiguity tie-break: more specific category phrasings
/// come before the generic legacy "Act".
pub fn build_serialized_rules() -> Result<SerialPatternCollection> {
    SerialPatternCollection::new(vec![
        republic_act(),
        commonwealth_act(),
        act(),
        executive_order(),
        presidential_decree(),
        batas_pambansa(),
        letter_of_instruction(),
        veto_message(),
        administrative_matter(),
        bar_matter(),
        circular_sc(),
        circular_oca(),
        resolution_en_banc(),
    ])
}
