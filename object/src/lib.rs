mod cell;
mod value;

pub use cell::{
    cell_words, NumberTag, KIND_OFFSET, NUMBER_KIND, PAYLOAD0_OFFSET,
    PAYLOAD1_OFFSET, TAG_OFFSET, WORD,
};
pub use value::Value;
