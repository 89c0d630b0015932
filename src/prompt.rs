//! Message lists for narrating a reading through a language model.
//!
//! Only the messages are built here; sending them is up to the caller.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::model::DivinationResult;

pub const DEFAULT_SYSTEM_PROMPT: &str =
    "你是一位精通梅花易数的占卜专家，擅长将传统卦象与现代生活结合，使用自然的中文解释结果。";

const DEFAULT_FOCUS: &str = "请结合卦象给出整体判断、关键启示以及可执行建议。";
const SNAPSHOT_ACK: &str = "已记录卦象要点，后续对话将据此给出建议。";
const FINGERPRINT_LEN: usize = 24;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PromptError {
    #[error("chat input is empty")]
    EmptyInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptMessage {
    pub role: Role,
    pub content: String,
}

impl PromptMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// One earlier exchange in a chat about a reading.
pub type ChatTurn = PromptMessage;

/// A system message and one request for a structured reading.
///
/// A blank `question` asks for a general judgement.
pub fn insight_messages(
    result: &DivinationResult,
    question: Option<&str>,
    system_prompt: &str,
) -> Vec<PromptMessage> {
    let p = &result.primary;
    let mut context = vec![
        format!("主卦：{} {} ({})", p.number, p.name, p.symbol),
        format!("主卦含义：{}", p.meaning),
        format!("主卦描述：{}", p.description),
        format!("动爻位置：第{}爻", result.changing_line),
    ];
    if let Some(m) = &result.mutual {
        context.push(format!("互卦：{} {} - {}", m.number, m.name, m.meaning));
    }
    if let Some(c) = &result.changing {
        context.push(format!("变卦：{} {} ({})", c.number, c.name, c.symbol));
        context.push(format!("变卦含义：{}", c.meaning));
    }
    context.push(format!("系统内置解释：{}", result.interpretation));

    let focus = question
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .unwrap_or(DEFAULT_FOCUS);

    let user = [
        "以下是一次梅花易数起卦的结果，请依据信息进行专业解读：".to_string(),
        context.join("\n"),
        String::new(),
        "输出格式要求：".to_string(),
        "1. 《卦象概览》：简述主卦主旨与整体走势（约80字以内）。".to_string(),
        "2. 《动爻洞察》：解释动爻与互卦/变卦的关系，强调变化信号。".to_string(),
        "3. 《实用建议》：给出3条结合现代生活场景的建议，使用编号列表。".to_string(),
        format!("4. 《针对性提示》：{focus}"),
    ]
    .join("\n");

    vec![
        PromptMessage::new(Role::System, system_prompt),
        PromptMessage::new(Role::User, user),
    ]
}

/// Messages for continuing a conversation about a reading.
///
/// The reading is recorded once as a snapshot and acknowledged, then
/// `history` is replayed and `input` appended.
pub fn chat_messages(
    result: &DivinationResult,
    history: &[ChatTurn],
    input: &str,
    system_prompt: &str,
) -> Result<Vec<PromptMessage>, PromptError> {
    if input.trim().is_empty() {
        return Err(PromptError::EmptyInput);
    }

    let p = &result.primary;
    let snapshot = [
        format!("主卦：{} {} ({})", p.number, p.name, p.symbol),
        result.changing.as_ref().map_or_else(
            || "变卦：无（或未形成）".to_string(),
            |c| format!("变卦：{} {}", c.number, c.name),
        ),
        result.mutual.as_ref().map_or_else(
            || "互卦：无".to_string(),
            |m| format!("互卦：{} {}", m.number, m.name),
        ),
        format!("动爻：第{}爻", result.changing_line),
        format!("系统解读：{}", result.interpretation),
    ]
    .join("\n");

    let mut messages = Vec::with_capacity(history.len() + 4);
    messages.push(PromptMessage::new(Role::System, system_prompt));
    messages.push(PromptMessage::new(
        Role::User,
        format!("记录当前卦象关键信息，后续对话无需重复描述，仅在需要时引用：\n{snapshot}"),
    ));
    messages.push(PromptMessage::new(Role::Assistant, SNAPSHOT_ACK));
    messages.extend(history.iter().cloned());
    messages.push(PromptMessage::new(Role::User, input));
    Ok(messages)
}

/// A short stable identifier for a message list.
pub fn fingerprint(messages: &[PromptMessage]) -> String {
    let mut hasher = Sha256::new();
    for message in messages {
        hasher.update(message.role.as_str());
        hasher.update("::");
        hasher.update(&message.content);
        hasher.update("\n");
    }
    let mut hex = hex::encode(hasher.finalize());
    hex.truncate(FINGERPRINT_LEN);
    hex
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::cast::testing::clock;
    use crate::divination::Diviner;
    use crate::lunar::TableCalendar;
    use crate::model::DivinationInput;

    fn reading() -> DivinationResult {
        let clock = clock();
        Diviner::new(&clock, &TableCalendar)
            .divine(&DivinationInput::Number {
                numbers: vec![3, 7],
            })
            .unwrap()
    }

    #[test]
    fn insight_has_system_then_user() {
        let messages = insight_messages(&reading(), None, DEFAULT_SYSTEM_PROMPT);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[0].content, DEFAULT_SYSTEM_PROMPT);
        assert_eq!(messages[1].role, Role::User);
        assert!(messages[1].content.contains("动爻位置：第4爻"));
        assert!(messages[1].content.contains("互卦："));
        assert!(messages[1].content.ends_with(DEFAULT_FOCUS));
    }

    #[test]
    fn insight_uses_the_question_when_given() {
        let messages = insight_messages(&reading(), Some("  工作如何？ "), "persona");
        assert_eq!(messages[0].content, "persona");
        assert!(messages[1].content.ends_with("4. 《针对性提示》：工作如何？"));

        let blank = insight_messages(&reading(), Some("   "), "persona");
        assert!(blank[1].content.ends_with(DEFAULT_FOCUS));
    }

    #[test]
    fn chat_replays_history_after_the_snapshot() {
        let history = vec![
            ChatTurn::new(Role::User, "先问一句"),
            ChatTurn::new(Role::Assistant, "答一句"),
        ];
        let messages =
            chat_messages(&reading(), &history, "再问一句", DEFAULT_SYSTEM_PROMPT).unwrap();

        let roles: Vec<Role> = messages.iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![
                Role::System,
                Role::User,
                Role::Assistant,
                Role::User,
                Role::Assistant,
                Role::User
            ]
        );
        assert!(messages[1].content.contains("动爻：第4爻"));
        assert_eq!(messages[2].content, SNAPSHOT_ACK);
        assert_eq!(messages[5].content, "再问一句");
    }

    #[test]
    fn chat_without_changing_hexagram_says_so() {
        let mut result = reading();
        result.changing = None;
        result.mutual = None;
        let messages = chat_messages(&result, &[], "问", "p").unwrap();
        assert!(messages[1].content.contains("变卦：无（或未形成）"));
        assert!(messages[1].content.contains("互卦：无"));
    }

    #[test]
    fn empty_chat_input_is_rejected() {
        assert_eq!(
            chat_messages(&reading(), &[], "  ", "p"),
            Err(PromptError::EmptyInput)
        );
    }

    #[test]
    fn fingerprint_is_short_and_stable() {
        let messages = insight_messages(&reading(), None, DEFAULT_SYSTEM_PROMPT);
        let a = fingerprint(&messages);
        assert_eq!(a.len(), 24);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(a, fingerprint(&messages));

        let other = insight_messages(&reading(), Some("别的问题"), DEFAULT_SYSTEM_PROMPT);
        assert_ne!(a, fingerprint(&other));
    }

    #[test]
    fn fingerprint_of_nothing_is_the_empty_digest_prefix() {
        assert_eq!(fingerprint(&[]), "e3b0c44298fc1c149afbf4c8");
    }

    #[test]
    fn roles_serialize_lowercase() {
        let json = serde_json::to_string(&PromptMessage::new(Role::Assistant, "x")).unwrap();
        assert_eq!(json, r#"{"role":"assistant","content":"x"}"#);
    }
}
