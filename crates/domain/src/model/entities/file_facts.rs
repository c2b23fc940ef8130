use serde::{Deserialize, Serialize};

use crate::model::Metric;

/// Structural measurement of one Go source file.
///
/// `lines` counts `\n` bytes, so a final line without a terminator is not
/// included. `code_lines` counts physical lines carrying anything other than
/// whitespace or comments, including an unterminated last line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileFacts {
    pub name: String,
    pub name_chars: usize,
    pub bytes: usize,
    pub lines: usize,
    pub code_lines: usize,
    pub types: usize,
    pub functions: usize,
    pub methods: usize,
    pub global_variables: usize,
    pub consts: usize,
    pub imports: usize,
    pub public_types: usize,
    pub public_functions: usize,
    pub public_methods: usize,
}

impl FileFacts {
    pub fn builder(name: impl Into<String>) -> FileFactsBuilder {
        FileFactsBuilder::new(name)
    }

    /// Value of `metric` for this file. A file always contributes exactly one to `Files`.
    pub fn value(&self, metric: Metric) -> usize {
        match metric {
            Metric::NameChars => self.name_chars,
            Metric::Files => 1,
            Metric::Bytes => self.bytes,
            Metric::Lines => self.lines,
            Metric::CodeLines => self.code_lines,
            Metric::Types => self.types,
            Metric::Functions => self.functions,
            Metric::Methods => self.methods,
            Metric::GlobalVariables => self.global_variables,
            Metric::Consts => self.consts,
            Metric::Imports => self.imports,
            Metric::PublicTypes => self.public_types,
            Metric::PublicFunctions => self.public_functions,
            Metric::PublicMethods => self.public_methods,
        }
    }
}

/// Builder used by extractors and tests; unset counts stay zero.
#[derive(Debug, Clone)]
pub struct FileFactsBuilder {
    facts: FileFacts,
}

impl FileFactsBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let name_chars = name.chars().count();
        Self { facts: FileFacts { name, name_chars, ..FileFacts::default() } }
    }

    pub fn bytes(mut self, bytes: usize) -> Self {
        self.facts.bytes = bytes;
        self
    }

    pub fn lines(mut self, lines: usize) -> Self {
        self.facts.lines = lines;
        self
    }

    pub fn code_lines(mut self, code_lines: usize) -> Self {
        self.facts.code_lines = code_lines;
        self
    }

    pub fn types(mut self, total: usize, public: usize) -> Self {
        self.facts.types = total;
        self.facts.public_types = public;
        self
    }

    pub fn functions(mut self, total: usize, public: usize) -> Self {
        self.facts.functions = total;
        self.facts.public_functions = public;
        self
    }

    pub fn methods(mut self, total: usize, public: usize) -> Self {
        self.facts.methods = total;
        self.facts.public_methods = public;
        self
    }

    pub fn global_variables(mut self, count: usize) -> Self {
        self.facts.global_variables = count;
        self
    }

    pub fn consts(mut self, count: usize) -> Self {
        self.facts.consts = count;
        self
    }

    pub fn imports(mut self, count: usize) -> Self {
        self.facts.imports = count;
        self
    }

    pub fn build(self) -> FileFacts {
        self.facts
    }
}
