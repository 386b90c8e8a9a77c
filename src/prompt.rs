//! Prompt construction for the two request flows.

use crate::chat::Msg;
use crate::fix::DELIMITER;

/// Free-form question, single turn.
pub fn ask_messages(question: &str) -> Vec<Msg> {
    vec![Msg::system("You are a helpful assistant."), Msg::user(question)]
}

/// Fix request: the model is told to return corrected code, then the
/// delimiter, then a Japanese explanation.
pub fn fix_messages(code: &str) -> Vec<Msg> {
    let instruction = format!(
        "Here is a Python code snippet. Please find any mistakes and suggest corrections. \
         Provide the corrected code followed by an explanation in Japanese. \
         Use \"{DELIMITER}\" as a delimiter between the corrected code and the explanation.\
         \n\n```python\n{code}\n```"
    );
    vec![
        Msg::system("You are a helpful assistant that provides code fix suggestions."),
        Msg::user(instruction),
    ]
}
