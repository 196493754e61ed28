/// Name of the project directory the scaffold is rooted at.
pub const PROJECT_ROOT: &str = "diff-analyser";

/// Ordered directory manifest. Created before any file is written.
pub const DIRS: &[&str] = &["app", "tests", "scripts", "logs"];

/// A single entry of the file manifest: a path relative to the project
/// root paired with the exact bytes written to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileSpec {
    pub path: &'static str,
    pub contents: &'static str,
}

/// Ordered file manifest. Root-level files first, then one block per
/// subdirectory, matching the order the generator narrates them.
pub const FILES: &[FileSpec] = &[
    FileSpec {
        path: "README.md",
        contents: r#"# Diff Analyser

Webhook-driven diff analysis service for GitHub pull requests.

Receives pull request webhooks, fetches and parses the associated code
diffs, and prepares structured payloads for the downstream AI analysis
pipeline.
"#,
    },
    FileSpec {
        path: "requirements.txt",
        contents: "# Python dependencies for the diff service\n",
    },
    FileSpec {
        path: ".env.example",
        contents: "# Environment variables for the diff service\n",
    },
    FileSpec {
        path: ".gitignore",
        contents: "# Ignore patterns for the diff service\n",
    },
    FileSpec {
        path: "Dockerfile",
        contents: "# Container image for the diff service\n",
    },
    FileSpec {
        path: "docker-compose.yml",
        contents: "# Compose stack for the diff service\n",
    },
    FileSpec {
        path: "app/__init__.py",
        contents: "\"\"\"Diff service application package.\"\"\"\n",
    },
    FileSpec {
        path: "app/main.py",
        contents: r#""""
FastAPI application entry point for diff service.
"""

# TODO: Implement FastAPI app and entry point
"#,
    },
    FileSpec {
        path: "app/config.py",
        contents: r#""""
Configuration management for diff service.
"""

# TODO: Implement settings and configuration loading
"#,
    },
    FileSpec {
        path: "app/models.py",
        contents: r#""""
All data models for diff service.
"""

# TODO: Implement data models
"#,
    },
    FileSpec {
        path: "app/github_client.py",
        contents: r#""""
GitHub API client for diff service.
"""

# TODO: Implement GitHub API client
"#,
    },
    FileSpec {
        path: "app/diff_parser.py",
        contents: r#""""
Core diff parsing logic for diff service.
"""

# TODO: Implement diff parsing logic
"#,
    },
    FileSpec {
        path: "app/webhook_handler.py",
        contents: r#""""
Webhook processing for diff service.
"""

# TODO: Implement webhook processing
"#,
    },
    FileSpec {
        path: "app/utils.py",
        contents: r#""""
Utility functions for diff service.
"""

# TODO: Implement utility functions
"#,
    },
    FileSpec {
        path: "tests/__init__.py",
        contents: "\"\"\"Tests for the diff service.\"\"\"\n",
    },
    FileSpec {
        path: "tests/test_diff_parser.py",
        contents: r#""""
Tests for diff parser.
"""

# TODO: Implement diff parser tests
"#,
    },
    FileSpec {
        path: "tests/sample_data.json",
        contents: "{\"comment\": \"Sample PR webhook payloads for diff parser tests\"}\n",
    },
    FileSpec {
        path: "scripts/run_dev.py",
        contents: r#""""Development runner script."""

# TODO: Implement development runner
"#,
    },
];

/// Directory component of a manifest path, if it has one.
///
/// Manifest paths are at most one level deep, so this is the text before
/// the first `/`. Root-level files return `None`.
pub fn parent_dir(path: &str) -> Option<&str> {
    path.split_once('/').map(|(dir, _)| dir)
}

/// Look up a manifest entry by its relative path.
pub fn file_spec(path: &str) -> Option<&'static FileSpec> {
    FILES.iter().find(|spec| spec.path == path)
}
