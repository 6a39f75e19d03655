//! Hygiene checks for the editor core.
//!
//! Scans `src/` (test files excluded) for constructs that can crash the
//! editor mid-gesture, swallow an error, or bypass `tracing`. Every budget is
//! zero and stays zero.

use std::fs;
use std::path::Path;

struct Budget {
    pattern: &'static str,
    max: usize,
    why: &'static str,
}

const UNWRAP: Budget = Budget { pattern: ".unwrap()", max: 0, why: "panics" };
const EXPECT: Budget = Budget { pattern: ".expect(", max: 0, why: "panics" };
const PANIC: Budget = Budget { pattern: "panic!(", max: 0, why: "panics" };
const UNREACHABLE: Budget = Budget { pattern: "unreachable!(", max: 0, why: "panics" };
const TODO: Budget = Budget { pattern: "todo!(", max: 0, why: "unfinished stub" };
const UNIMPLEMENTED: Budget = Budget { pattern: "unimplemented!(", max: 0, why: "unfinished stub" };
const SILENT_DISCARD: Budget = Budget { pattern: "let _ =", max: 0, why: "drops a result unread" };
const DOT_OK: Budget = Budget { pattern: ".ok()", max: 0, why: "drops an error unread" };
const ALLOW_DEAD_CODE: Budget = Budget { pattern: "#[allow(dead_code)]", max: 0, why: "hides unused code" };
const PRINTLN: Budget = Budget { pattern: "println!(", max: 0, why: "use tracing" };
const EPRINTLN: Budget = Budget { pattern: "eprintln!(", max: 0, why: "use tracing" };
const DBG: Budget = Budget { pattern: "dbg!(", max: 0, why: "debug leftover" };

struct SourceFile {
    path: String,
    content: String,
}

/// Production `.rs` files under `src/`.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    assert!(!files.is_empty(), "no sources found; run from the crate root");
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn check(budget: &Budget) {
    let hits: Vec<(String, usize)> = source_files()
        .into_iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(budget.pattern)).count();
            (count > 0).then_some((file.path, count))
        })
        .collect();
    let count: usize = hits.iter().map(|(_, c)| c).sum();
    let listing = hits
        .iter()
        .map(|(path, c)| format!("  {path}: {c}"))
        .collect::<Vec<_>>()
        .join("\n");
    assert!(
        count <= budget.max,
        "`{}` ({}) budget exceeded: found {count}, max {}.\n{listing}",
        budget.pattern,
        budget.why,
        budget.max,
    );
}

// =============================================================
// Panics
// =============================================================

#[test]
fn unwrap_budget() {
    check(&UNWRAP);
}

#[test]
fn expect_budget() {
    check(&EXPECT);
}

#[test]
fn panic_budget() {
    check(&PANIC);
}

#[test]
fn unreachable_budget() {
    check(&UNREACHABLE);
}

#[test]
fn todo_budget() {
    check(&TODO);
}

#[test]
fn unimplemented_budget() {
    check(&UNIMPLEMENTED);
}

// =============================================================
// Silent loss
// =============================================================

#[test]
fn silent_discard_budget() {
    check(&SILENT_DISCARD);
}

#[test]
fn dot_ok_budget() {
    check(&DOT_OK);
}

// =============================================================
// Style
// =============================================================

#[test]
fn allow_dead_code_budget() {
    check(&ALLOW_DEAD_CODE);
}

#[test]
fn stdout_budget() {
    check(&PRINTLN);
    check(&EPRINTLN);
    check(&DBG);
}
