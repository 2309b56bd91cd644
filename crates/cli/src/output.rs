use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::eval::Evaluation;

/// Render an evaluation as JSON text.
pub fn render(eval: &Evaluation, pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(eval)?
    } else {
        serde_json::to_string(eval)?
    };
    Ok(text)
}

/// Write rendered JSON to `path`, creating parent directories as needed.
pub fn write_json<P: AsRef<Path>>(path: P, text: &str) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = text.len(), "wrote output");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use tempfile::tempdir;

    fn sample() -> Evaluation {
        Evaluation {
            op: "pow",
            inputs: json!({ "base": "2", "exp": 10 }),
            result: json!(1024),
        }
    }

    #[test]
    fn render_compact_and_pretty() {
        let compact = render(&sample(), false).unwrap();
        assert!(!compact.contains('\n'));
        let pretty = render(&sample(), true).unwrap();
        assert!(pretty.contains('\n'));
        let a: Value = serde_json::from_str(&compact).unwrap();
        let b: Value = serde_json::from_str(&pretty).unwrap();
        assert_eq!(a, b);
        assert_eq!(a["op"], "pow");
        assert_eq!(a["result"], 1024);
    }

    #[test]
    fn write_json_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/deeper/out.json");
        let text = render(&sample(), true).unwrap();
        write_json(&path, &text).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(parsed["inputs"]["exp"], 10);
    }
}
