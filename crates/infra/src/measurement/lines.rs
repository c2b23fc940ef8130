//! 行カウント
//!
//! Go の `//` 行コメントと `/* */` ブロックコメント (ネスト非対応) を除外し、
//! コードを含む物理行だけを数えます。文字列・rune・raw 文字列 (backtick) の中の
//! コメント記号はコメントとして扱いません。

/// Number of `\n` bytes. A trailing line without a terminator is not counted.
pub fn count_newlines(source: &[u8]) -> usize {
    bytecount::count(source, b'\n')
}

/// Physical lines carrying at least one byte of code.
pub fn count_code_lines(source: &str) -> usize {
    let mut classifier = GoLineClassifier::new();
    source.split('\n').map(|line| classifier.process(line)).sum()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Code,
    BlockComment,
    RawString,
}

/// Line-by-line classifier; state carries across lines for block comments and
/// raw strings.
pub struct GoLineClassifier {
    mode: Mode,
}

impl Default for GoLineClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl GoLineClassifier {
    pub fn new() -> Self {
        Self { mode: Mode::Code }
    }

    /// 行を処理し、コード行なら 1、そうでなければ 0 を返す
    pub fn process(&mut self, line: &str) -> usize {
        let bytes = line.as_bytes();
        // raw 文字列の途中から始まる行はコード行
        let mut has_code = self.mode == Mode::RawString;
        let mut i = 0;

        while i < bytes.len() {
            let b = bytes[i];
            match self.mode {
                Mode::BlockComment => {
                    if b == b'*' && bytes.get(i + 1) == Some(&b'/') {
                        self.mode = Mode::Code;
                        i += 2;
                        continue;
                    }
                }
                Mode::RawString => {
                    if b == b'`' {
                        self.mode = Mode::Code;
                    }
                }
                Mode::Code => match b {
                    b'/' if bytes.get(i + 1) == Some(&b'/') => break,
                    b'/' if bytes.get(i + 1) == Some(&b'*') => {
                        self.mode = Mode::BlockComment;
                        i += 2;
                        continue;
                    }
                    b'"' | b'\'' => {
                        has_code = true;
                        i = skip_quoted(bytes, i);
                        continue;
                    }
                    b'`' => {
                        has_code = true;
                        self.mode = Mode::RawString;
                    }
                    _ if b.is_ascii_whitespace() => {}
                    _ => has_code = true,
                },
            }
            i += 1;
        }

        usize::from(has_code)
    }

    /// ブロックコメント内かどうか（テスト用）
    #[cfg(test)]
    fn is_in_block_comment(&self) -> bool {
        self.mode == Mode::BlockComment
    }
}

/// Index just past the closing quote of the literal opening at `start`, or the
/// end of the line when it is unterminated.
fn skip_quoted(bytes: &[u8], start: usize) -> usize {
    let quote = bytes[start];
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b if b == quote => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unterminated_last_line_is_not_a_newline() {
        assert_eq!(count_newlines(b"package a"), 0);
        assert_eq!(count_newlines(b"package a\n"), 1);
        assert_eq!(count_newlines(b"package a\n\nfunc f() {}"), 2);
        assert_eq!(count_newlines(b""), 0);
    }

    #[test]
    fn unterminated_last_line_is_still_code() {
        assert_eq!(count_code_lines("package a"), 1);
        assert_eq!(count_code_lines("package a\n"), 1);
    }

    #[test]
    fn blank_and_comment_lines_are_not_code() {
        let src = "// Package a does things.\npackage a\n\n   \t\n/*\n multi\n*/\nvar x = 1 // trailing\n";
        assert_eq!(count_code_lines(src), 2);
    }

    #[test]
    fn code_around_block_comments() {
        let mut c = GoLineClassifier::new();
        assert_eq!(c.process("x := 1 /* start"), 1);
        assert!(c.is_in_block_comment());
        assert_eq!(c.process("still comment"), 0);
        assert_eq!(c.process("end */ y := 2"), 1);
        assert!(!c.is_in_block_comment());
        assert_eq!(c.process("/* a */ /* b */"), 0);
        assert_eq!(c.process("/* a */ z()"), 1);
    }

    #[test]
    fn comment_markers_inside_literals() {
        assert_eq!(count_code_lines(r#"s := "http://example.com""#), 1);
        assert_eq!(count_code_lines("r := '/'\n"), 1);

        // 文字列内の /* はブロックコメントを開始しない
        let src = "a := \"/*\"\nb := 2\n";
        assert_eq!(count_code_lines(src), 2);

        let escaped = "a := \"\\\"//\"\nb := 3\n";
        assert_eq!(count_code_lines(escaped), 2);
    }

    #[test]
    fn raw_string_lines_count_as_code() {
        let src = "q := `\n// not a comment\n\n/* nor this */\n`\n// real comment\n";
        // q line, three raw lines (incl. the blank one), closing line
        assert_eq!(count_code_lines(src), 5);
    }

    #[test]
    fn crlf_endings() {
        assert_eq!(count_code_lines("package a\r\n\r\n// c\r\nvar x int\r\n"), 2);
        assert_eq!(count_newlines(b"package a\r\n\r\n"), 2);
    }
}
