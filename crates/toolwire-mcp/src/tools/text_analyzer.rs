//! Tool: text_analyzer — Character, word, and sentence statistics.

use crate::schema::{Arguments, ParamSpec, ParamType};

use super::{InvocationResult, ToolDescriptor, ToolOutput};

pub fn descriptor() -> ToolDescriptor {
    ToolDescriptor::new("text_analyzer", "Analyze text and provide statistics")
        .param(ParamSpec::required("text", ParamType::String))
        .output("{character_count, character_count_no_spaces, word_count, sentence_count, average_word_length, most_common_word}")
}

pub fn execute(args: &Arguments) -> InvocationResult {
    ToolOutput::json(&toolwire::analyze_text(args.str("text")?))
}
