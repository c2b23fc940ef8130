// crates/infra/src/filesystem.rs
use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex, PoisonError},
};

use globset::{Glob, GlobMatcher};
use gostats_ports::{PackageDirDto, SourceEntryDto, SourceEnumerator, SourceTree, WalkPlan};
use gostats_shared_kernel::{InfrastructureError, PackageKey, Result, path::dir_name, path::logical_absolute};
use ignore::{DirEntry, WalkBuilder, WalkState};
use log::{debug, warn};

/// Directories the Go toolchain never treats as part of the module's own packages,
/// plus VCS metadata.
const DEFAULT_PRUNE_DIRS: &[&str] = &[".git", ".hg", ".svn", "vendor", "testdata", "node_modules"];

// Shared threshold for flushing per-thread collectors
const FLUSH_THRESHOLD: usize = 64;

/// Walks a module root with the `ignore` crate's parallel walker and groups
/// `.go` files by their parent directory.
#[derive(Debug, Default, Clone, Copy)]
pub struct GoSourceEnumerator;

impl GoSourceEnumerator {
    pub fn new() -> Self {
        Self
    }
}

impl SourceEnumerator for GoSourceEnumerator {
    fn enumerate(&self, plan: &WalkPlan) -> Result<SourceTree> {
        let root = logical_absolute(&plan.root);
        if !root.is_dir() {
            return Err(InfrastructureError::Walk { path: root, details: "not a directory".into() }.into());
        }

        let matcher = Arc::new(PlanMatcher::new(plan, &root)?);
        let mut items = walk(&root, plan, &matcher);

        let mut tree = SourceTree::default();
        for item in items.drain(..) {
            match item {
                WalkItem::Dir(dir) => tree.packages.push(dir),
                WalkItem::File(file) => tree.files.push(file),
            }
        }
        tree.packages.sort_by(|a, b| a.path.cmp(&b.path));
        tree.files.sort_by(|a, b| (&a.package, &a.name).cmp(&(&b.package, &b.name)));

        debug!(
            "walked {}: {} directories, {} source files",
            root.display(),
            tree.packages.len(),
            tree.files.len()
        );
        Ok(tree)
    }
}

#[derive(Debug)]
enum WalkItem {
    Dir(PackageDirDto),
    File(SourceEntryDto),
}

fn walk(root: &Path, plan: &WalkPlan, matcher: &Arc<PlanMatcher>) -> Vec<WalkItem> {
    let mut builder = WalkBuilder::new(root);
    builder.follow_links(plan.follow_links);
    builder.hidden(!plan.include_hidden);
    builder.git_ignore(plan.respect_gitignore);
    builder.git_global(plan.respect_gitignore);
    builder.git_exclude(plan.respect_gitignore);
    builder.ignore(plan.respect_gitignore);
    // .gitignore applies even when the module is not inside a git checkout
    builder.require_git(false);

    let matcher_for_dirs = Arc::clone(matcher);
    builder.filter_entry(move |entry| {
        let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
        if is_dir { matcher_for_dirs.should_visit_dir(entry.path()) } else { true }
    });

    // Use a thread-local buffer to reduce mutex contention: collect items in a
    // local Vec and flush them to the shared vector in batches.
    let shared: Arc<Mutex<Vec<WalkItem>>> = Arc::new(Mutex::new(Vec::new()));
    let shared_for_walk = Arc::clone(&shared);
    let root_for_walk = root.to_path_buf();
    let matcher_for_files = Arc::clone(matcher);

    builder.build_parallel().run(move || {
        let matcher = Arc::clone(&matcher_for_files);
        let root = root_for_walk.clone();
        let mut collector = LocalCollector::new(Arc::clone(&shared_for_walk));
        Box::new(move |result| {
            match result {
                Ok(entry) => {
                    if let Some(item) = classify(&root, &entry, &matcher) {
                        collector.push(item);
                    }
                }
                Err(err) => warn!("walk error: {err}"),
            }
            WalkState::Continue
        })
    });

    let mut guard = shared.lock().unwrap_or_else(PoisonError::into_inner);
    std::mem::take(&mut *guard)
}

fn classify(root: &Path, entry: &DirEntry, matcher: &PlanMatcher) -> Option<WalkItem> {
    let file_type = entry.file_type()?;
    let path = entry.path();

    if file_type.is_dir() {
        let key = PackageKey::from_dir(root, path)?;
        let name = dir_name(path);
        return Some(WalkItem::Dir(PackageDirDto { key, name, path: path.to_path_buf() }));
    }
    if !file_type.is_file() || !matcher.matches_file(path) {
        return None;
    }

    let package = PackageKey::from_dir(root, path.parent()?)?;
    Some(WalkItem::File(SourceEntryDto { path: path.to_path_buf(), package, name: dir_name(path) }))
}

// Per-thread buffer to batch appends into the global shared vector.
struct LocalCollector {
    buf: Vec<WalkItem>,
    shared: Arc<Mutex<Vec<WalkItem>>>,
}

impl LocalCollector {
    fn new(shared: Arc<Mutex<Vec<WalkItem>>>) -> Self {
        Self { buf: Vec::with_capacity(FLUSH_THRESHOLD), shared }
    }

    fn push(&mut self, item: WalkItem) {
        self.buf.push(item);
        if self.buf.len() >= FLUSH_THRESHOLD {
            self.flush();
        }
    }

    fn flush(&mut self) {
        let mut guard = self.shared.lock().unwrap_or_else(PoisonError::into_inner);
        guard.append(&mut self.buf);
    }
}

impl Drop for LocalCollector {
    fn drop(&mut self) {
        if !self.buf.is_empty() {
            self.flush();
        }
    }
}

/// Directory pruning and file selection for one walk.
struct PlanMatcher {
    root: PathBuf,
    extension: String,
    test_suffix: String,
    include_tests: bool,
    include_hidden: bool,
    no_default_prune: bool,
    excludes: Vec<(GlobMatcher, bool)>,
}

impl PlanMatcher {
    fn new(plan: &WalkPlan, root: &Path) -> Result<Self> {
        let extension = plan.extension.trim_start_matches('.').to_string();
        Ok(Self {
            root: root.to_path_buf(),
            test_suffix: format!("_test.{extension}"),
            extension,
            include_tests: plan.include_tests,
            include_hidden: plan.include_hidden,
            no_default_prune: plan.no_default_prune,
            excludes: compile_patterns(&plan.exclude_patterns)?,
        })
    }

    fn should_visit_dir(&self, path: &Path) -> bool {
        if !self.include_hidden && is_hidden(path) {
            return false;
        }

        if !self.no_default_prune
            && let Some(name) = path.file_name().and_then(|n| n.to_str())
            && DEFAULT_PRUNE_DIRS.contains(&name)
        {
            return false;
        }

        !self.is_excluded(path)
    }

    fn matches_file(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        let ext_ok = path.extension().and_then(|e| e.to_str()) == Some(self.extension.as_str());
        if !ext_ok {
            return false;
        }
        if !self.include_tests && name.ends_with(&self.test_suffix) {
            return false;
        }
        !self.is_excluded(path)
    }

    /// Patterns containing `/` match the root-relative path, others the final name.
    fn is_excluded(&self, path: &Path) -> bool {
        if self.excludes.is_empty() {
            return false;
        }
        let rel = path.strip_prefix(&self.root).unwrap_or(path);
        let name = path.file_name().map(Path::new).unwrap_or(rel);
        self.excludes
            .iter()
            .any(|(glob, path_like)| if *path_like { glob.is_match(rel) } else { glob.is_match(name) })
    }
}

fn compile_patterns(patterns: &[String]) -> Result<Vec<(GlobMatcher, bool)>> {
    patterns
        .iter()
        .map(|raw| {
            #[cfg(windows)]
            let pattern = raw.replace('\\', "/");
            #[cfg(not(windows))]
            let pattern = raw.clone();

            Glob::new(&pattern)
                .map(|glob| (glob.compile_matcher(), pattern.contains('/')))
                .map_err(|err| InfrastructureError::InvalidPattern { pattern: raw.clone(), details: err.to_string() })
        })
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(Into::into)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name().and_then(|name| name.to_str()).is_some_and(|name| name.starts_with('.'))
}
