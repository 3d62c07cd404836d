//! Hygiene: source-level rules checked at test time.
//!
//! Scans production files under `src/` (sibling `*_test.rs` files excluded).
//! Budgets only ever go down.

use std::fs;
use std::path::{Path, PathBuf};

struct SourceFile {
    path: PathBuf,
    content: String,
}

impl SourceFile {
    fn display(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }
}

/// Pattern, budget, and what goes wrong when it appears.
const BUDGETS: &[(&str, usize, &str)] = &[
    (".unwrap()", 0, "panics abort every listener on the page"),
    (".expect(", 0, "panics abort every listener on the page"),
    ("panic!(", 0, "panics abort every listener on the page"),
    ("unreachable!(", 0, "panics abort every listener on the page"),
    ("todo!(", 0, "stubs must not ship"),
    ("unimplemented!(", 0, "stubs must not ship"),
    ("let _ =", 0, "DOM and storage results must be reported, not dropped"),
    (".ok()", 0, "DOM and storage results must be reported, not dropped"),
    ("#[allow(dead_code)]", 0, "dead code should be deleted"),
    ("set_inner_html", 0, "labels are user-visible text; build nodes instead"),
];

/// Modules that must build and test without a browser.
const BROWSER_FREE: &[&str] = &["src/state", "src/controller.rs", "src/config.rs", "src/error.rs", "src/util/style.rs"];

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    files
}

fn collect(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(&path, out);
            continue;
        }
        let is_rs = path.extension().is_some_and(|e| e == "rs");
        let is_test = path.to_string_lossy().ends_with("_test.rs");
        if !is_rs || is_test {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path, content });
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .map(|file| (file.display(), file.content.lines().filter(|l| l.contains(pattern)).count()))
        .filter(|(_, count)| *count > 0)
        .collect()
}

#[test]
fn scan_finds_production_sources() {
    let files = source_files();
    assert!(files.iter().any(|f| f.display().ends_with("controller.rs")));
    assert!(files.iter().all(|f| !f.display().ends_with("_test.rs")));
}

#[test]
fn pattern_budgets_hold() {
    let files = source_files();
    let mut failures = Vec::new();
    for (pattern, max, why) in BUDGETS {
        let found = hits(&files, pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > *max {
            let detail: Vec<String> = found.iter().map(|(path, c)| format!("    {path}: {c}")).collect();
            failures.push(format!("{pattern} found {count}, max {max} ({why})\n{}", detail.join("\n")));
        }
    }
    assert!(failures.is_empty(), "budgets exceeded:\n{}", failures.join("\n"));
}

#[test]
fn browser_free_modules_do_not_touch_web_apis() {
    let files = source_files();
    let offenders: Vec<String> = files
        .iter()
        .filter(|f| {
            let path = f.path.to_string_lossy().replace('\\', "/");
            BROWSER_FREE.iter().any(|prefix| path.starts_with(prefix))
        })
        .filter(|f| f.content.contains("web_sys") || f.content.contains("wasm_bindgen"))
        .map(SourceFile::display)
        .collect();
    assert!(offenders.is_empty(), "web APIs used in browser-free modules: {offenders:?}");
}

/// Event features reached only through `leptos::ev` typed listeners.
const INDIRECT_EVENT_FEATURES: &[&str] = &["MouseEvent"];

fn web_sys_features(manifest: &str) -> Vec<String> {
    let Some(start) = manifest.find("web-sys = {") else {
        return Vec::new();
    };
    let block = &manifest[start..];
    let block = &block[..block.find("] }").unwrap_or(block.len())];
    block
        .lines()
        .skip(1)
        .map(|line| line.trim().trim_end_matches(',').trim_matches('"').to_owned())
        .filter(|name| !name.is_empty())
        .collect()
}

#[test]
fn web_sys_event_features_are_used() {
    let manifest = fs::read_to_string("Cargo.toml").unwrap_or_default();
    let features = web_sys_features(&manifest);
    assert!(features.iter().any(|f| f == "KeyboardEvent"), "web-sys feature list not found");

    let files = source_files();
    let unused: Vec<&String> = features
        .iter()
        .filter(|f| f.ends_with("Event") && f.as_str() != "Event")
        .filter(|f| !INDIRECT_EVENT_FEATURES.contains(&f.as_str()))
        .filter(|f| !files.iter().any(|file| file.content.contains(f.as_str())))
        .collect();
    assert!(unused.is_empty(), "web-sys event features with no use in src: {unused:?}");
}
