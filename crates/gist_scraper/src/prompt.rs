use gist_core::PromptTurn;

pub const SYSTEM_PERSONA: &str = "You are a helpful assistant.";
pub const INTENT: &str = "Can you help create documentation and sample code of the following url?";
pub const OUTPUT_FORMAT: &str = "The documentation is formatted as markdown.";

/// Builds the fixed five-turn prompt: persona, intent, output format, title,
/// then the article body. Turn order matters to the model.
pub fn build_prompt(title: &str, body: &str) -> Vec<PromptTurn> {
    vec![
        PromptTurn::system(SYSTEM_PERSONA),
        PromptTurn::user(INTENT),
        PromptTurn::user(OUTPUT_FORMAT),
        PromptTurn::user(format!("The title of the article is {}.", title)),
        PromptTurn::user(format!("The article is as follows: \n{}", body)),
    ]
}
