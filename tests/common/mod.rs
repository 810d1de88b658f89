//! Shared test infrastructure for integration tests.
//!
//! Tests drive the real binary with a scripted stdin command stream and
//! `--no-format`, so no clang-format or operator is needed.

use serde_json::{json, Value};
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

/// Run the built genbench binary with the given args and stdin script.
pub fn run_genbench(args: &[&str], stdin_input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_genbench"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn genbench");
    child
        .stdin
        .take()
        .expect("piped stdin")
        .write_all(stdin_input.as_bytes())
        .expect("write command script");
    child.wait_with_output().expect("wait for genbench")
}

/// Write a corpus snapshot with one JSON entry per line.
#[allow(dead_code)]
pub fn write_corpus(path: &Path, entries: &[Value]) {
    let lines: Vec<String> = entries
        .iter()
        .map(|entry| serde_json::to_string(entry).expect("serialize corpus entry"))
        .collect();
    std::fs::write(path, lines.join("\n") + "\n").expect("write corpus");
}

/// A well-formed corpus entry whose code is clean of disallowed headers.
#[allow(dead_code)]
pub fn clean_entry(name: &str) -> Value {
    json!({
        "declaration": format!("#include <vector>\nusing namespace std;\nint {name}(int x) "),
        "canonical_solution": "{ return x + 1; }\n",
        "test": format!("int main() {{ assert({name}(1) == 2); }}\n"),
        "entry_point": name,
    })
}

/// Parse every line of a record store.
pub fn read_store(path: &Path) -> Vec<Value> {
    let content = std::fs::read_to_string(path).expect("read store");
    content
        .lines()
        .map(|line| serde_json::from_str(line).expect("parse record line"))
        .collect()
}

/// A complete ten-field record for seeding fix-mode stores.
#[allow(dead_code)]
pub fn full_record(task_id: &str) -> Value {
    json!({
        "base_canonical_solution": "int add(int a, int b) { return a + b; }\n",
        "base_prompt": "Make the following function generic for numeric types\n",
        "concepts_canonical_solution": "template <typename T>\nT add(T a, T b);\n",
        "concepts_prompt": "Constrain the generic code using C++20 Concepts\n",
        "invalids": "int main() {}",
        "sfinae_canonical_solution": "template <typename T>\nT add(T a, T b);\n",
        "sfinae_prompt": "Constrain the generic code using C++17 SFINAE\n",
        "starter_code": "int add(int a, int b);\n",
        "task_id": task_id,
        "tests": "int main() { assert(add(1, 2) == 3); }\n",
    })
}

/// Write a record store with one JSON record per line.
#[allow(dead_code)]
pub fn write_store(path: &Path, records: &[Value]) {
    let lines: Vec<String> = records
        .iter()
        .map(|record| serde_json::to_string(record).expect("serialize record"))
        .collect();
    std::fs::write(path, lines.join("\n") + "\n").expect("write store");
}
