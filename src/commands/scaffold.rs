//! Scaffold command: drives the generator phases and narrates progress.

use crate::manifest::PROJECT_ROOT;
use crate::scaffold::{create_dirs, ensure_root, write_files};
use anyhow::Result;
use std::path::Path;

/// Literal summary of the generated tree, printed after a successful run.
/// `test_tree_summary_names_every_manifest_entry` keeps this in sync with
/// the manifest.
const TREE_SUMMARY: &str = r#"diff-analyser/
├── README.md
├── requirements.txt
├── .env.example
├── .gitignore
├── Dockerfile
├── docker-compose.yml
├── app/
│   ├── __init__.py
│   ├── main.py
│   ├── config.py
│   ├── models.py
│   ├── github_client.py
│   ├── diff_parser.py
│   ├── webhook_handler.py
│   └── utils.py
├── tests/
│   ├── __init__.py
│   ├── test_diff_parser.py
│   └── sample_data.json
├── scripts/
│   └── run_dev.py
└── logs/"#;

const NEXT_STEPS: &str = r#"Next steps:
  1. cd diff-analyser
  2. Pin your dependencies in requirements.txt
  3. Copy .env.example to .env and add your GitHub token
  4. Work through the TODOs in app/
  5. Wire up scripts/run_dev.py to start the dev server"#;

/// Run the scaffold command rooted at `parent`.
///
/// Executes the three generator phases in order, printing a status line
/// as each completes, then the tree summary and the next-steps checklist.
/// The first failing filesystem operation aborts the run; earlier output
/// stays on disk.
pub fn scaffold_command(parent: &Path) -> Result<()> {
    println!("🚀 Scaffolding {} project structure...", PROJECT_ROOT);

    let (root, existed) = ensure_root(parent)?;
    if existed {
        println!("📂 Reusing existing {}/", PROJECT_ROOT);
    } else {
        println!("📂 Created {}/", PROJECT_ROOT);
    }

    let dirs = create_dirs(&root)?;
    println!("📁 Directories ready ({})", dirs);

    let files = write_files(&root)?;
    println!("📝 Placeholder files written ({})", files);

    println!("✅ Scaffold complete!");
    println!();
    println!("{}", TREE_SUMMARY);
    println!();
    println!("{}", NEXT_STEPS);

    Ok(())
}
