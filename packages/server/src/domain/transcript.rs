//! Plain-text transcript export of a room.

use super::{entity::ChatMessage, value_object::RoomName};

/// A rendered transcript ready to be offered as a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    pub file_name: String,
    pub body: String,
}

impl Transcript {
    /// Build the transcript of `room` from its messages.
    pub fn new(room: &RoomName, messages: &[ChatMessage]) -> Self {
        Self {
            file_name: download_file_name(room),
            body: render_transcript(messages),
        }
    }
}

/// `{room}_messages.txt`, safe to quote in a `Content-Disposition` header.
///
/// Quotes, backslashes and control characters become `_`.
fn download_file_name(room: &RoomName) -> String {
    let stem: String = room
        .as_str()
        .chars()
        .map(|c| match c {
            '"' | '\\' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    format!("{stem}_messages.txt")
}

/// Render messages as `timestamp | sender: text` lines joined by `\n`.
pub fn render_transcript(messages: &[ChatMessage]) -> String {
    messages
        .iter()
        .map(|message| {
            format!(
                "{} | {}: {}",
                message.timestamp, message.sender, message.text
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MessageText, SenderName, Timestamp};
    use chrono::NaiveDate;

    fn message(second: u32, sender: SenderName, text: &str) -> ChatMessage {
        ChatMessage::new(
            RoomName::default_room(),
            sender,
            MessageText::new(text).unwrap(),
            Timestamp::new(
                NaiveDate::from_ymd_opt(2025, 6, 1)
                    .unwrap()
                    .and_hms_opt(9, 0, second)
                    .unwrap(),
            ),
        )
    }

    #[test]
    fn test_render_transcript_lines_in_order() {
        // テスト項目: メッセージが順番どおり "timestamp | sender: text" の行になる
        // given (前提条件):
        let messages = vec![
            message(1, SenderName::new("A").unwrap(), "hi"),
            message(2, SenderName::bot(), "hello"),
        ];

        // when (操作):
        let body = render_transcript(&messages);

        // then (期待する結果):
        let lines: Vec<&str> = body.lines().collect();
        assert_eq!(
            lines,
            vec![
                "2025-06-01 09:00:01 | A: hi",
                "2025-06-01 09:00:02 | Bot: hello"
            ]
        );
        assert!(!body.ends_with('\n'));
    }

    #[test]
    fn test_render_transcript_empty_room() {
        // テスト項目: メッセージがなければ空文字列になる
        // when (操作):
        let body = render_transcript(&[]);

        // then (期待する結果):
        assert_eq!(body, "");
    }

    #[test]
    fn test_transcript_file_name() {
        // テスト項目: ダウンロード用のファイル名は "{room}_messages.txt"
        // when (操作):
        let transcript = Transcript::new(&RoomName::new("lobby").unwrap(), &[]);

        // then (期待する結果):
        assert_eq!(transcript.file_name, "lobby_messages.txt");
    }

    #[test]
    fn test_transcript_file_name_replaces_unsafe_characters() {
        // テスト項目: 引用符・バックスラッシュ・制御文字はファイル名で "_" に置き換えられる
        // given (前提条件):
        let quoted = RoomName::new(r#"say "hi""#).unwrap();
        let control = RoomName::new("line\u{1}x").unwrap();
        let backslash = RoomName::new(r"a\b").unwrap();

        // when (操作):
        let quoted = Transcript::new(&quoted, &[]);
        let control = Transcript::new(&control, &[]);
        let backslash = Transcript::new(&backslash, &[]);

        // then (期待する結果):
        assert_eq!(quoted.file_name, "say _hi__messages.txt");
        assert_eq!(control.file_name, "line_x_messages.txt");
        assert_eq!(backslash.file_name, "a_b_messages.txt");
    }
}
