//! Prompt template sent to the model.

use crate::models::GenerationRequest;

/// Longest affirmation the model is asked to produce, in characters.
pub const MAX_AFFIRMATION_CHARS: usize = 120;

/// Renders the fixed instruction for `request`.
pub fn build_prompt(request: &GenerationRequest) -> String {
    format!(
        "Generate {count} unique, positive, and concise affirmations about \"{theme}\".\n\
         Each affirmation must:\n\
         - Be {max} characters or less.\n\
         - Start with a capital letter.\n\
         - Not contain any special symbols or emojis.\n\
         - Be empowering, varied, and suitable for all ages.\n\
         - Be listed on a separate line.\n\
         \n\
         Example for 'confidence': I am worthy of success and happiness.\n",
        count = request.count,
        theme = request.theme,
        max = MAX_AFFIRMATION_CHARS,
    )
}
