//! Orchestration for `snapshot`: walk, filter, aggregate.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{debug, info, instrument};

use crate::core::denylist::Denylists;
use crate::core::types::ReadFailure;
use crate::io::aggregate::Aggregator;
use crate::io::filter::ExclusionFilter;
use crate::io::walker::TreeWalker;

/// Inputs for a single snapshot run.
#[derive(Debug, Clone)]
pub struct CollectOptions {
    pub root: PathBuf,
    pub output: PathBuf,
    pub denylists: Denylists,
}

impl CollectOptions {
    /// Options with the built-in denylists.
    pub fn new(root: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            output: output.into(),
            denylists: Denylists::default(),
        }
    }
}

/// What a snapshot run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectSummary {
    /// Output path as given in the options.
    pub output: PathBuf,
    /// Relative paths written, in output order.
    pub written: Vec<PathBuf>,
    /// Candidate files rejected by the exclusion filter.
    pub excluded: usize,
    pub read_failures: Vec<ReadFailure>,
}

/// Write the snapshot of `options.root` into `options.output`.
///
/// The output file is truncated before the walk starts. When it lives under
/// the root it is skipped, so repeated runs do not ingest earlier output.
#[instrument(skip_all, fields(root = %options.root.display(), output = %options.output.display()))]
pub fn collect_project(options: &CollectOptions) -> Result<CollectSummary> {
    let root = resolve_root(&options.root)?;

    let file = File::create(&options.output)
        .with_context(|| format!("create output {}", options.output.display()))?;
    let output_canonical = options.output.canonicalize().ok();

    let mut walker = TreeWalker::new(&root, &options.denylists);
    if let Some(path) = output_canonical {
        walker = walker.skip_path(path);
    }
    let filter = ExclusionFilter::new(&options.denylists);
    let mut aggregator = Aggregator::new(&root, BufWriter::new(file));

    let mut excluded = 0usize;
    for path in walker.candidates() {
        if let Some(reason) = filter.exclusion(&path) {
            debug!(path = %path.display(), %reason, "excluded");
            excluded += 1;
            continue;
        }
        aggregator.append(&path)?;
    }
    let report = aggregator
        .finish()
        .with_context(|| format!("finish output {}", options.output.display()))?;

    info!(
        root = %walker.root().display(),
        written = report.written.len(),
        excluded,
        read_failures = report.read_failures.len(),
        "snapshot complete"
    );

    Ok(CollectSummary {
        output: options.output.clone(),
        written: report.written,
        excluded,
        read_failures: report.read_failures,
    })
}

fn resolve_root(root: &Path) -> Result<PathBuf> {
    let resolved = root
        .canonicalize()
        .with_context(|| format!("resolve root directory {}", root.display()))?;
    if !resolved.is_dir() {
        bail!("root {} is not a directory", root.display());
    }
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FixtureTree, PNG_SIGNATURE};
    use std::fs;

    fn run(tree: &FixtureTree, output: &Path) -> (CollectSummary, String) {
        let summary =
            collect_project(&CollectOptions::new(tree.path(), output)).expect("collect");
        let text = fs::read_to_string(output).expect("read output");
        (summary, text)
    }

    #[test]
    fn collects_text_and_skips_binary_and_git() {
        let tree = FixtureTree::new().expect("fixture");
        tree.write("a.txt", "hello").expect("write");
        tree.write("b.png", PNG_SIGNATURE).expect("write");
        tree.write(".git/config", "[core]\n\tbare = false\n").expect("write");
        let out_dir = FixtureTree::new().expect("out dir");
        let output = out_dir.path().join("out.txt");

        let (summary, text) = run(&tree, &output);

        assert_eq!(
            text,
            "\n==================== a.txt ====================\nhello"
        );
        assert_eq!(summary.written, vec![PathBuf::from("a.txt")]);
        assert_eq!(summary.excluded, 1);
        assert!(summary.read_failures.is_empty());
    }

    #[test]
    fn mixed_line_endings_are_normalized() {
        let tree = FixtureTree::new().expect("fixture");
        tree.write("win.txt", b"a\r\nb\rc\n").expect("write");
        let out_dir = FixtureTree::new().expect("out dir");
        let output = out_dir.path().join("out.txt");

        let (_, text) = run(&tree, &output);

        assert_eq!(
            text,
            "\n==================== win.txt ====================\na\nb\nc\n"
        );
    }

    #[test]
    fn lockfile_is_excluded_by_name() {
        let tree = FixtureTree::new().expect("fixture");
        tree.write("locked/yarn.lock", "# yarn lockfile v1\n").expect("write");
        tree.write("locked/README.md", "docs\n").expect("write");
        let out_dir = FixtureTree::new().expect("out dir");
        let output = out_dir.path().join("out.txt");

        let (summary, text) = run(&tree, &output);

        assert!(!text.contains("yarn.lock"));
        assert!(!text.contains("yarn lockfile"));
        assert_eq!(summary.written, vec![Path::new("locked").join("README.md")]);
    }

    #[test]
    fn nul_prefix_excludes_regardless_of_extension() {
        let tree = FixtureTree::new().expect("fixture");
        tree.write("data.rs", b"\0\0\0\x01").expect("write");
        tree.write("ok.rs", "fn ok() {}\n").expect("write");
        let out_dir = FixtureTree::new().expect("out dir");
        let output = out_dir.path().join("out.txt");

        let (summary, _) = run(&tree, &output);

        assert_eq!(summary.written, vec![PathBuf::from("ok.rs")]);
    }

    #[test]
    fn each_header_appears_once_followed_by_contents() {
        let tree = FixtureTree::new().expect("fixture");
        tree.write("one.txt", "first\n").expect("write");
        tree.write("two.txt", "second\n").expect("write");
        let out_dir = FixtureTree::new().expect("out dir");
        let output = out_dir.path().join("out.txt");

        let (_, text) = run(&tree, &output);

        for (name, body) in [("one.txt", "first\n"), ("two.txt", "second\n")] {
            let header = format!("\n==================== {name} ====================\n");
            assert_eq!(text.matches(&header).count(), 1);
            assert!(text.contains(&format!("{header}{body}")));
        }
        assert!(text.find("one.txt").expect("one") < text.find("two.txt").expect("two"));
    }

    #[test]
    fn rerun_with_output_inside_root_is_idempotent() {
        let tree = FixtureTree::new().expect("fixture");
        tree.write("src/lib.rs", "pub fn lib() {}\n").expect("write");
        tree.write("README.md", "# demo\n").expect("write");
        let output = tree.path().join("project_contents.txt");

        let (first_summary, first) = run(&tree, &output);
        let (_, second) = run(&tree, &output);

        assert_eq!(first, second);
        assert_eq!(first_summary.written.len(), 2);
        assert!(!first.contains("project_contents.txt"));
    }

    #[test]
    fn output_is_truncated() {
        let tree = FixtureTree::new().expect("fixture");
        tree.write("a.txt", "a").expect("write");
        let out_dir = FixtureTree::new().expect("out dir");
        let output = out_dir.write("out.txt", "stale content from before").expect("write");

        let (_, text) = run(&tree, &output);

        assert!(!text.contains("stale"));
    }

    #[test]
    fn custom_denylists_prune_and_filter() {
        let tree = FixtureTree::new().expect("fixture");
        tree.write("vendor/dep.rs", "dep").expect("write");
        tree.write("build/gen.rs", "gen").expect("write");
        tree.write("app.log", "log").expect("write");
        let out_dir = FixtureTree::new().expect("out dir");
        let output = out_dir.path().join("out.txt");
        let options = CollectOptions {
            denylists: Denylists::new(["vendor"], [".log"], Vec::<&str>::new()),
            ..CollectOptions::new(tree.path(), &output)
        };

        let summary = collect_project(&options).expect("collect");

        assert_eq!(summary.written, vec![Path::new("build").join("gen.rs")]);
        assert_eq!(summary.excluded, 1);
    }

    #[test]
    fn missing_root_is_fatal_and_leaves_output_untouched() {
        let tree = FixtureTree::new().expect("fixture");
        let output = tree.path().join("out.txt");
        let err = collect_project(&CollectOptions::new(tree.path().join("absent"), &output))
            .expect_err("missing root");
        assert!(format!("{err:#}").contains("resolve root directory"));
        assert!(!output.exists());
    }

    #[test]
    fn root_that_is_a_file_is_fatal() {
        let tree = FixtureTree::new().expect("fixture");
        let file = tree.write("file.txt", "x").expect("write");
        let output = tree.path().join("out.txt");
        let err = collect_project(&CollectOptions::new(&file, &output)).expect_err("file root");
        assert!(err.to_string().contains("is not a directory"));
    }

    #[test]
    fn unopenable_output_is_fatal() {
        let tree = FixtureTree::new().expect("fixture");
        tree.write("a.txt", "a").expect("write");
        let output = tree.path().join("no_such_dir").join("out.txt");
        let err = collect_project(&CollectOptions::new(tree.path(), &output))
            .expect_err("bad output");
        assert!(format!("{err:#}").contains("create output"));
    }
}
