//! Static HTML report writer
//!
//! Renders the structured case results into a single self-contained HTML
//! file, one table row per case. Rendering works from `CaseResult`s rather
//! than captured console text, so the report never depends on terminal
//! escape codes or output interleaving.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::common::Result;

use super::runner::{CaseResult, RunSummary};

/// Render the report document for a finished run.
pub fn render(results: &[CaseResult], started_at: DateTime<Local>) -> String {
    let summary = RunSummary::of(results);
    let verdict = if summary.all_passed() {
        r#"<span class="pass">PASSED</span>"#.to_string()
    } else {
        format!(r#"<span class="fail">FAILED ({} of {})</span>"#, summary.failed, summary.total)
    };

    let mut rows = String::new();
    for result in results {
        let (class, status) = if result.passed {
            ("pass", "pass")
        } else {
            ("fail", "fail")
        };
        let detail = match &result.error {
            Some(message) => format!("<pre>{}</pre>", escape(message)),
            None => String::new(),
        };
        rows.push_str(&format!(
            "    <tr class=\"{class}\">\
             <td>{name}</td><td>{description}</td><td>{status}</td>\
             <td>{millis}&nbsp;ms</td><td>{detail}</td></tr>\n",
            name = escape(result.name),
            description = escape(result.description),
            millis = result.duration.as_millis(),
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>hh.ru API checks</title>
<style>
  body {{ font-family: sans-serif; margin: 2em; }}
  table {{ border-collapse: collapse; width: 100%; }}
  th, td {{ border: 1px solid #ccc; padding: 0.4em 0.8em; text-align: left; vertical-align: top; }}
  tr.pass td {{ background: #eaf7ea; }}
  tr.fail td {{ background: #fbeaea; }}
  span.pass {{ color: #1a7f1a; font-weight: bold; }}
  span.fail {{ color: #b01212; font-weight: bold; }}
  pre {{ margin: 0; white-space: pre-wrap; }}
</style>
</head>
<body>
<h1>hh.ru API checks</h1>
<p>Started {started}: {verdict}</p>
<table>
  <thead>
    <tr><th>Case</th><th>Description</th><th>Status</th><th>Duration</th><th>Detail</th></tr>
  </thead>
  <tbody>
{rows}  </tbody>
</table>
</body>
</html>
"#,
        started = started_at.format("%Y-%m-%d %H:%M:%S"),
    )
}

/// Write the report into `dir`, creating the directory when needed.
/// Returns the path of the written file.
pub fn write_report(
    dir: &Path,
    results: &[CaseResult],
    started_at: DateTime<Local>,
) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let file = dir.join(format!(
        "report-{}.html",
        started_at.format("%Y-%m-%d_%H-%M-%S")
    ));
    std::fs::write(&file, render(results, started_at))?;
    Ok(file)
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn sample_results() -> Vec<CaseResult> {
        vec![
            CaseResult {
                name: "areas-schema",
                description: "GET /areas matches the areas schema",
                passed: true,
                error: None,
                duration: Duration::from_millis(120),
            },
            CaseResult {
                name: "areas-delete",
                description: "DELETE /areas is rejected as method_not_allowed",
                passed: false,
                error: Some("expected {\"errors\":...}, got <nothing>".to_string()),
                duration: Duration::from_millis(45),
            },
        ]
    }

    #[test]
    fn report_lists_every_case_and_failure_message() {
        let html = render(&sample_results(), Local::now());
        assert!(html.contains("areas-schema"));
        assert!(html.contains("areas-delete"));
        assert!(html.contains("FAILED (1 of 2)"));
        // The failure message is escaped, not dropped
        assert!(html.contains("&lt;nothing&gt;"));
        assert!(!html.contains("<nothing>"));
    }

    #[test]
    fn all_green_run_renders_a_pass_verdict() {
        let mut results = sample_results();
        results.truncate(1);
        let html = render(&results, Local::now());
        assert!(html.contains("PASSED"));
        assert!(!html.contains("FAILED"));
    }

    #[test]
    fn report_file_lands_in_the_requested_directory() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("test_logs");
        let path = write_report(&target, &sample_results(), Local::now()).unwrap();
        assert!(path.starts_with(&target));
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn escape_covers_markup_characters() {
        assert_eq!(escape(r#"<a href="x">&"#), "&lt;a href=&quot;x&quot;&gt;&amp;");
    }
}
