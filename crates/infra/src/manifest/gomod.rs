//! `go.mod` の読み込みとパース
//!
//! Recognised directives: `module`, `go`, `require` (line and block form).
//! `toolchain`, `godebug`, `replace`, `exclude`, `retract`, `tool` and `ignore`
//! are accepted and skipped.

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use gostats_domain::{ManifestFacts, Requirement};
use gostats_ports::ManifestReader;
use gostats_shared_kernel::{InfrastructureError, ModulePath, Result};
use log::debug;

use crate::persistence::FileReader;

pub const MANIFEST_FILE: &str = "go.mod";

const SKIPPED_DIRECTIVES: &[&str] = &["toolchain", "godebug", "replace", "exclude", "retract", "tool", "ignore"];

/// Reads `<root>/go.mod`.
#[derive(Debug, Default, Clone, Copy)]
pub struct GoModReader;

impl GoModReader {
    pub fn new() -> Self {
        Self
    }
}

impl ManifestReader for GoModReader {
    fn read(&self, root: &Path) -> Result<ManifestFacts> {
        let path = root.join(MANIFEST_FILE);
        let content = FileReader::read_to_string(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => InfrastructureError::ManifestNotFound { path: path.clone() },
            _ => InfrastructureError::ManifestUnreadable { path: path.clone(), source },
        })?;

        let facts = parse_go_mod(&content).map_err(|err| err.into_infra(path))?;
        debug!("parsed {MANIFEST_FILE}: module {}", facts.module);
        Ok(facts)
    }
}

/// Grammar violation with its 1-based line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestSyntaxError {
    pub line: usize,
    pub reason: String,
}

impl ManifestSyntaxError {
    fn new(line: usize, reason: impl Into<String>) -> Self {
        Self { line, reason: reason.into() }
    }

    fn into_infra(self, path: PathBuf) -> InfrastructureError {
        InfrastructureError::ManifestParse { path, line: self.line, reason: self.reason }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Block {
    Require,
    Skipped,
}

/// Parse manifest text.
pub fn parse_go_mod(content: &str) -> std::result::Result<ManifestFacts, ManifestSyntaxError> {
    let mut module: Option<String> = None;
    let mut go_version = None;
    let mut requirements = Vec::new();
    let mut open: Option<(Block, usize)> = None;
    let mut last_line = 0;

    for (idx, raw) in content.lines().enumerate() {
        let line_no = idx + 1;
        last_line = line_no;
        let (code, comment) = split_comment(raw);
        let code = code.trim();
        if code.is_empty() {
            continue;
        }

        // ブロック内
        if let Some((block, _)) = open {
            if code == ")" {
                open = None;
            } else if block == Block::Require {
                requirements.push(parse_requirement(code, comment, line_no)?);
            }
            continue;
        }

        if code == ")" {
            return Err(ManifestSyntaxError::new(line_no, "unexpected ')' outside a block"));
        }

        // `(` ends the verb as a token of its own: `require(` opens a block
        let (verb, rest) = match code.find(|c: char| c == '(' || c.is_whitespace()) {
            Some(at) => (&code[..at], code[at..].trim()),
            None => (code, ""),
        };

        match verb {
            "module" => {
                if module.is_some() {
                    return Err(ManifestSyntaxError::new(line_no, "repeated module directive"));
                }
                if rest.is_empty() {
                    return Err(ManifestSyntaxError::new(line_no, "module directive without a path"));
                }
                module = Some(unquote(rest).to_string());
            }
            "go" => {
                if rest.is_empty() {
                    return Err(ManifestSyntaxError::new(line_no, "go directive without a version"));
                }
                go_version = Some(rest.to_string());
            }
            "require" if rest == "(" => open = Some((Block::Require, line_no)),
            "require" => requirements.push(parse_requirement(rest, comment, line_no)?),
            other if SKIPPED_DIRECTIVES.contains(&other) => {
                if rest == "(" {
                    open = Some((Block::Skipped, line_no));
                }
            }
            other => {
                return Err(ManifestSyntaxError::new(line_no, format!("unknown directive '{other}'")));
            }
        }
    }

    if let Some((_, start)) = open {
        return Err(ManifestSyntaxError::new(start, "block is never closed"));
    }

    let module = module.ok_or_else(|| ManifestSyntaxError::new(last_line.max(1), "missing module directive"))?;
    Ok(ManifestFacts { module: ModulePath::new(module), go_version, requirements })
}

fn parse_requirement(
    code: &str,
    comment: Option<&str>,
    line_no: usize,
) -> std::result::Result<Requirement, ManifestSyntaxError> {
    let mut fields = code.split_whitespace();
    let path = fields.next().map(unquote).unwrap_or_default();
    let Some(version) = fields.next() else {
        return Err(ManifestSyntaxError::new(line_no, format!("require '{path}' has no version")));
    };
    if let Some(extra) = fields.next() {
        return Err(ManifestSyntaxError::new(line_no, format!("unexpected '{extra}' after require version")));
    }

    Ok(Requirement {
        path: path.to_string(),
        version: unquote(version).to_string(),
        indirect: comment.is_some_and(is_indirect_marker),
    })
}

/// Exactly `// indirect`, or `// indirect;` followed by anything.
fn is_indirect_marker(comment: &str) -> bool {
    let mut fields = comment.split_whitespace();
    match fields.next() {
        Some("indirect") => fields.next().is_none(),
        Some(first) => first == "indirect;",
        None => false,
    }
}

/// Split `code // comment`, ignoring `//` inside quoted strings.
fn split_comment(line: &str) -> (&str, Option<&str>) {
    let bytes = line.as_bytes();
    let mut quote: Option<u8> = None;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        match quote {
            Some(q) => {
                if b == b'\\' && q == b'"' {
                    i += 1;
                } else if b == q {
                    quote = None;
                }
            }
            None => {
                if b == b'"' || b == b'`' {
                    quote = Some(b);
                } else if b == b'/' && bytes.get(i + 1) == Some(&b'/') {
                    return (&line[..i], Some(&line[i + 2..]));
                }
            }
        }
        i += 1;
    }
    (line, None)
}

fn unquote(token: &str) -> &str {
    for q in ['"', '`'] {
        if let Some(inner) = token.strip_prefix(q).and_then(|t| t.strip_suffix(q)) {
            return inner;
        }
    }
    token
}
