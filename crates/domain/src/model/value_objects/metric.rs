use std::fmt;

use serde::{Deserialize, Serialize};

/// Every quantity tracked per source file (and `Files`, tracked per package).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    NameChars,
    Files,
    Bytes,
    Lines,
    CodeLines,
    Types,
    Functions,
    Methods,
    GlobalVariables,
    Consts,
    Imports,
    PublicTypes,
    PublicFunctions,
    PublicMethods,
}

impl Metric {
    /// Metrics observed on each individual file.
    pub const FILE: [Metric; 13] = [
        Metric::NameChars,
        Metric::Bytes,
        Metric::Lines,
        Metric::CodeLines,
        Metric::Types,
        Metric::Functions,
        Metric::Methods,
        Metric::GlobalVariables,
        Metric::Consts,
        Metric::Imports,
        Metric::PublicTypes,
        Metric::PublicFunctions,
        Metric::PublicMethods,
    ];

    /// Metrics observed on each package: the file metrics plus the package's file count.
    pub const PACKAGE: [Metric; 14] = [
        Metric::NameChars,
        Metric::Files,
        Metric::Bytes,
        Metric::Lines,
        Metric::CodeLines,
        Metric::Types,
        Metric::Functions,
        Metric::Methods,
        Metric::GlobalVariables,
        Metric::Consts,
        Metric::Imports,
        Metric::PublicTypes,
        Metric::PublicFunctions,
        Metric::PublicMethods,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NameChars => "name_chars",
            Self::Files => "files",
            Self::Bytes => "bytes",
            Self::Lines => "lines",
            Self::CodeLines => "code_lines",
            Self::Types => "types",
            Self::Functions => "functions",
            Self::Methods => "methods",
            Self::GlobalVariables => "global_variables",
            Self::Consts => "consts",
            Self::Imports => "imports",
            Self::PublicTypes => "public_types",
            Self::PublicFunctions => "public_functions",
            Self::PublicMethods => "public_methods",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
