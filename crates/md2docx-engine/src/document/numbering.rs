//! List numbering definitions.
//!
//! Two fixed definitions cover the whole document: decimal for ordered
//! items, bullets for unordered. Nested-list numbering beyond one level is
//! out of scope, so only level 0 is defined.

use docx_rs::{
    AbstractNumbering, Docx, Level, LevelJc, LevelText, NumberFormat, Numbering,
    SpecialIndentType, Start,
};

pub const ORDERED_NUM_ID: usize = 1;
pub const UNORDERED_NUM_ID: usize = 2;

pub fn register_numbering(docx: Docx) -> Docx {
    let ordered = AbstractNumbering::new(ORDERED_NUM_ID)
        .add_level(list_level("decimal", "%1.", false));
    let unordered = AbstractNumbering::new(UNORDERED_NUM_ID)
        .add_level(list_level("bullet", "•", true));

    docx.add_abstract_numbering(ordered)
        .add_numbering(Numbering::new(ORDERED_NUM_ID, ORDERED_NUM_ID))
        .add_abstract_numbering(unordered)
        .add_numbering(Numbering::new(UNORDERED_NUM_ID, UNORDERED_NUM_ID))
}

fn list_level(format: &str, text: &str, is_bullet: bool) -> Level {
    let hanging = if is_bullet { 360 } else { 420 };
    Level::new(
        0,
        Start::new(1),
        NumberFormat::new(format),
        LevelText::new(text),
        LevelJc::new("left"),
    )
    .indent(Some(720), Some(SpecialIndentType::Hanging(hanging)), None, None)
}
