use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

pub const EXAMPLE_GO_MOD: &str = "module example.mod

go 1.22

require (
	github.com/a/one v1.0.0
	github.com/b/two v0.3.1
	github.com/c/three v2.1.0+incompatible
	golang.org/x/sys v0.20.0 // indirect
	golang.org/x/text v0.15.0 // indirect
)
";

/// 5 code lines, 1 function.
pub const A_GO: &str = "package a

// Hello greets.
func Hello() string {
	msg := \"hi\"
	return msg
}
";

/// 3 code lines, 1 function.
pub const B1_GO: &str = "package b

func one() {
}
";

/// 7 code lines, 2 functions.
pub const B2_GO: &str = "package b

import \"fmt\"

var counter = 0

func Two() {
	fmt.Println(\"two\", counter)
}

func three() {}
";

/// Temporary Go module on disk.
pub struct GoModule {
    dir: TempDir,
}

#[allow(dead_code)]
impl GoModule {
    pub fn empty() -> Self {
        Self { dir: tempfile::tempdir().unwrap() }
    }

    /// Root without sources plus packages `a` (one file) and `b` (two files).
    pub fn example() -> Self {
        let module = Self::empty();
        module.write("go.mod", EXAMPLE_GO_MOD);
        module.write("a/a.go", A_GO);
        module.write("b/b1.go", B1_GO);
        module.write("b/b2.go", B2_GO);
        module
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }
}
