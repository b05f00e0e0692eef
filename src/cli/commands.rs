//! CLI command implementations

use anyhow::{bail, Context, Result};
use log::{debug, error, info};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::Config;
use crate::parser::{parse_file, ParseOptions};
use crate::quiz::to_source;
use crate::render::assets::SAMPLE_QUIZ;
use crate::render::{load_assets, render_page, write_stylesheet_if_absent, PageAssets};

const QUIZ_EXTENSION: &str = "quiz";

/// Flags of the `build` command
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    pub randomize: bool,
    pub seed: Option<u64>,
    pub output: Option<PathBuf>,
    pub assets_dir: Option<PathBuf>,
}

/// Build an HTML page for every quiz file
pub fn build(paths: &[PathBuf], options: &BuildOptions, config: &Config, work_dir: &Path) -> Result<()> {
    let files = collect_quiz_files(paths);

    if options.output.is_some() && files.len() != 1 {
        bail!("--output can only be used with a single quiz file ({} given)", files.len());
    }

    let assets_dir = match &options.assets_dir {
        Some(dir) => dir.clone(),
        None => config.assets_dir(work_dir),
    };
    let assets = load_assets(&assets_dir)?;

    let parse_options = ParseOptions {
        randomize: options.randomize || config.randomize,
        seed: options.seed.or(config.seed),
    };

    let mut failures = 0;
    for file in &files {
        let output = options
            .output
            .clone()
            .unwrap_or_else(|| file.with_extension("html"));

        match build_file(file, &output, &parse_options, &assets, &assets_dir, config) {
            Ok(()) => println!("✓ {}", output.display()),
            Err(e) => {
                // Each file stands alone; keep going with the rest
                error!("{}: {:#}", file.display(), e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        bail!("{} of {} quiz file(s) failed to build", failures, files.len());
    }

    Ok(())
}

fn build_file(
    file: &Path,
    output: &Path,
    parse_options: &ParseOptions,
    assets: &PageAssets,
    assets_dir: &Path,
    config: &Config,
) -> Result<()> {
    let quiz = parse_file(file, parse_options)?;
    let page = render_page(&quiz, assets, &config.labels, &config.stylesheet)?;

    // The page is written last so a failed file leaves no page behind
    let out_dir = match output.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    write_stylesheet_if_absent(out_dir, assets_dir, &config.stylesheet)?;

    std::fs::write(output, page)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    info!("Wrote {}", output.display());

    Ok(())
}

/// Parse quiz files without writing anything
pub fn check(paths: &[PathBuf]) -> Result<()> {
    let files = collect_quiz_files(paths);
    let mut errors = 0;

    for file in &files {
        match parse_file(file, &ParseOptions::default()) {
            Ok(quiz) => {
                let stats = quiz.stats();
                println!(
                    "✓ {}: {} group(s), {} question(s) ({} single choice, {} multiple choice)",
                    file.display(),
                    stats.group_count,
                    stats.question_count,
                    stats.single_choice,
                    stats.multiple_choice
                );
            }
            Err(e) => {
                println!("ERROR: {} - {}", file.display(), e);
                errors += 1;
            }
        }
    }

    println!();
    if errors == 0 {
        println!("No issues found in {} file(s).", files.len());
        Ok(())
    } else {
        bail!("Found {} invalid quiz file(s) out of {}", errors, files.len())
    }
}

/// Print a parsed quiz as JSON
pub fn dump(path: &Path) -> Result<()> {
    let quiz = parse_file(&with_quiz_extension(path), &ParseOptions::default())?;
    let json = serde_json::to_string_pretty(&quiz)?;
    println!("{}", json);
    Ok(())
}

/// Print the canonical source of a quiz
pub fn fmt(path: &Path) -> Result<()> {
    let quiz = parse_file(&with_quiz_extension(path), &ParseOptions::default())?;
    print!("{}", to_source(&quiz));
    Ok(())
}

/// Write the sample quiz unless the file already exists
pub fn sample(path: &Path) -> Result<()> {
    if path.exists() {
        println!("A file called {} already exists!", path.display());
        return Ok(());
    }

    std::fs::write(path, SAMPLE_QUIZ)
        .with_context(|| format!("Failed to write sample quiz: {}", path.display()))?;

    println!("✓ Created {}", path.display());
    println!("Take a look at it to see how a quiz is written.");
    Ok(())
}

/// Expand directories into the `.quiz` files below them
fn collect_quiz_files(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            let mut found: Vec<PathBuf> = WalkDir::new(path)
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| {
                    e.file_type().is_file()
                        && e.path().extension().map_or(false, |ext| ext == QUIZ_EXTENSION)
                })
                .map(|e| e.into_path())
                .collect();
            found.sort();
            debug!("Found {} quiz file(s) under {}", found.len(), path.display());
            files.extend(found);
        } else {
            files.push(with_quiz_extension(path));
        }
    }

    files
}

/// `lecture1` => `lecture1.quiz`
fn with_quiz_extension(path: &Path) -> PathBuf {
    if path.extension().map_or(false, |ext| ext == QUIZ_EXTENSION) {
        return path.to_path_buf();
    }
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(".");
    name.push(QUIZ_EXTENSION);
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_with_quiz_extension() {
        assert_eq!(with_quiz_extension(Path::new("index")), PathBuf::from("index.quiz"));
        assert_eq!(with_quiz_extension(Path::new("a/b.quiz")), PathBuf::from("a/b.quiz"));
        assert_eq!(with_quiz_extension(Path::new("v1.2")), PathBuf::from("v1.2.quiz"));
    }

    #[test]
    fn test_collect_walks_directories() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("week2")).unwrap();
        std::fs::write(dir.path().join("b.quiz"), "== B\n").unwrap();
        std::fs::write(dir.path().join("week2/a.quiz"), "== A\n").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "").unwrap();

        let files = collect_quiz_files(&[dir.path().to_path_buf()]);

        assert_eq!(
            files,
            vec![dir.path().join("b.quiz"), dir.path().join("week2/a.quiz")]
        );
    }

    #[test]
    fn test_build_continues_after_failure() {
        let dir = tempdir().unwrap();
        let good = dir.path().join("good.quiz");
        let bad = dir.path().join("bad.quiz");
        std::fs::write(&good, "== Good\n[G]\nQ\n*= A\n").unwrap();
        std::fs::write(&bad, "Not a title line\n").unwrap();

        let result = build(
            &[bad.clone(), good.clone()],
            &BuildOptions::default(),
            &Config::default(),
            dir.path(),
        );

        assert!(result.is_err());
        assert!(dir.path().join("good.html").exists());
        assert!(!dir.path().join("bad.html").exists());
        assert!(dir.path().join("quiz.css").exists());
    }

    #[test]
    fn test_missing_file_does_not_stop_the_others() {
        let dir = tempdir().unwrap();
        let good = dir.path().join("good.quiz");
        std::fs::write(&good, "== Good\n[G]\nQ\n*= A\n").unwrap();

        let result = build(
            &[dir.path().join("missing.quiz"), good],
            &BuildOptions::default(),
            &Config::default(),
            dir.path(),
        );

        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("1 of 2"));
        assert!(dir.path().join("good.html").exists());
        assert!(!dir.path().join("missing.html").exists());
    }

    #[test]
    fn test_no_page_when_stylesheet_cannot_be_written() {
        let dir = tempdir().unwrap();
        let assets = dir.path().join("theme");
        // A directory where the stylesheet should be makes copying it fail
        std::fs::create_dir_all(assets.join("quiz.css")).unwrap();
        let quiz = dir.path().join("demo.quiz");
        std::fs::write(&quiz, "== Demo\n[G]\nQ\n*= A\n").unwrap();

        let options = BuildOptions {
            assets_dir: Some(assets),
            ..BuildOptions::default()
        };
        let result = build(&[quiz], &options, &Config::default(), dir.path());

        assert!(result.is_err());
        assert!(!dir.path().join("demo.html").exists());
    }
}
