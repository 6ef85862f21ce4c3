//! Context ingestion
//!
//! Builds the run [`Context`] from whichever source the CLI provided:
//! an inline JSON blob, an inline text snippet, or a file. JSON input
//! is validated; `.json` files that fail to parse are still forwarded
//! to the model, labeled as invalid, instead of aborting the run.

use crate::cli::Cli;
use escriba_domain::Context;
use std::io;
use std::path::Path;

/// Resolve the context from the CLI arguments.
///
/// Source priority mirrors the argument specificity: explicit file,
/// then inline JSON, then inline text, then the sentinel default.
pub fn load_context(cli: &Cli) -> io::Result<Context> {
    if let Some(path) = &cli.context_file {
        return context_from_file(path);
    }
    if let Some(json) = &cli.json {
        return Ok(Context::from_json_str(json));
    }
    if let Some(text) = &cli.text_context {
        return Ok(Context::text(text.clone()));
    }
    Ok(Context::default())
}

fn context_from_file(path: &Path) -> io::Result<Context> {
    let raw = std::fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if is_json {
        Ok(Context::from_json_str(&raw))
    } else {
        Ok(Context::text(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        let mut full = vec!["escriba"];
        full.extend_from_slice(args);
        Cli::parse_from(full)
    }

    #[test]
    fn test_no_context_yields_sentinel() {
        let context = load_context(&cli(&["meta"])).unwrap();
        assert!(context.is_sentinel());
    }

    #[test]
    fn test_inline_text_context() {
        let context = load_context(&cli(&["-t", "dados brutos", "meta"])).unwrap();
        assert_eq!(context.content(), "dados brutos");
    }

    #[test]
    fn test_inline_json_is_validated() {
        let context = load_context(&cli(&["-j", r#"{"a":1}"#, "meta"])).unwrap();
        assert!(context.content().starts_with("Dados JSON fornecidos:"));
    }

    #[test]
    fn test_file_takes_priority_over_inline() {
        let dir = std::env::temp_dir();
        let path = dir.join("escriba-input-test.txt");
        std::fs::write(&path, "do arquivo").unwrap();

        let path_str = path.to_str().unwrap();
        let context =
            load_context(&cli(&["-f", path_str, "-t", "inline", "meta"])).unwrap();
        assert_eq!(context.content(), "do arquivo");

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = load_context(&cli(&["-f", "/nonexistent/escriba.txt", "meta"]));
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_json_file_is_forwarded_labeled() {
        let dir = std::env::temp_dir();
        let path = dir.join("escriba-invalid-test.json");
        std::fs::write(&path, "{broken").unwrap();

        let path_str = path.to_str().unwrap();
        let context = load_context(&cli(&["-f", path_str, "meta"])).unwrap();
        assert!(context.content().starts_with("Arquivo JSON inválido."));

        std::fs::remove_file(&path).ok();
    }
}
