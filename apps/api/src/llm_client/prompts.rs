// Prompt text for the enhancement calls. One system prompt, one user prompt
// template per field kind.

use super::enhance::EnhanceKind;

/// System prompt shared by all enhancement calls.
pub const ENHANCE_SYSTEM: &str = "You are an expert copywriter who polishes portfolio text. \
    Respond with the rewritten text only. \
    Do NOT add quotes, headings, markdown, or explanations. \
    Do NOT invent employers, numbers, awards, or technologies that are not in the input.";

/// Builds the user prompt for rewriting `text` as the given kind of field.
pub fn enhance_prompt(text: &str, kind: EnhanceKind) -> String {
    let instruction = match kind {
        EnhanceKind::Bio => {
            "Rewrite the following professional bio so it is engaging, confident and concise. \
             Keep it in the first person and under 80 words."
        }
        EnhanceKind::Description => {
            "Rewrite the following project or role description so it highlights impact and \
             the technologies used. Keep it to one or two sentences."
        }
        EnhanceKind::Tagline => {
            "Rewrite the following tagline so it is short, punchy and memorable. \
             Keep it under 12 words."
        }
    };

    format!("{instruction}\n\n<text>\n{}\n</text>", text.trim())
}
