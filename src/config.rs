//! Runtime configuration for the demo binary.
//!
//! Loaded from a JSON file or assembled from command-line flags; either
//! way the result is one explicit [`RuntimeConfig`] value passed down the
//! pipeline. Nothing here is global or mutable after parsing.

use crate::corpus::CorpusParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Default, Deserialize)]
pub struct OutputConfig {
    /// Training-table CSV destination; `data.csv` when unset.
    pub csv_out: Option<PathBuf>,
    /// Optional pretty-JSON dump of the label → mean-vector map.
    pub means_json: Option<PathBuf>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RuntimeConfig {
    pub corpus_dir: PathBuf,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub params: CorpusParams,
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config: RuntimeConfig = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    Ok(config)
}

fn usage(program: &str) -> String {
    format!(
        "Usage: {program} <config.json>\n       \
         {program} --dir <path> [--grid-size N] [--no-crop] [--labels CHARS] \
         [--csv PATH] [--means-json PATH]"
    )
}

/// Parse command-line arguments into a [`RuntimeConfig`].
///
/// A single positional argument is a JSON config path; otherwise flags
/// assemble the config directly, with `--dir` required.
pub fn parse_cli(program: &str) -> Result<RuntimeConfig, String> {
    parse_args(program, std::env::args().skip(1))
}

fn parse_args<I>(program: &str, args: I) -> Result<RuntimeConfig, String>
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();
    match args.first() {
        None => return Err(usage(program)),
        Some(first) if !first.starts_with("--") => {
            if args.len() > 1 {
                return Err(usage(program));
            }
            return load_config(Path::new(first));
        }
        Some(_) => {}
    }

    let mut corpus_dir = None;
    let mut params = CorpusParams::default();
    let mut output = OutputConfig::default();
    let mut args = args.into_iter();
    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--dir" => corpus_dir = Some(PathBuf::from(value(&mut args, "--dir", program)?)),
            "--grid-size" => {
                let raw = value(&mut args, "--grid-size", program)?;
                params.grid_size = raw
                    .parse()
                    .map_err(|e| format!("bad --grid-size '{raw}': {e}"))?;
            }
            "--no-crop" => params.crop = false,
            "--labels" => params.labels = value(&mut args, "--labels", program)?,
            "--csv" => output.csv_out = Some(PathBuf::from(value(&mut args, "--csv", program)?)),
            "--means-json" => {
                output.means_json = Some(PathBuf::from(value(&mut args, "--means-json", program)?))
            }
            other => return Err(format!("unknown flag '{other}'\n{}", usage(program))),
        }
    }
    let corpus_dir = corpus_dir.ok_or_else(|| format!("--dir is required\n{}", usage(program)))?;
    Ok(RuntimeConfig {
        corpus_dir,
        output,
        params,
    })
}

fn value(
    args: &mut impl Iterator<Item = String>,
    flag: &str,
    program: &str,
) -> Result<String, String> {
    args.next()
        .ok_or_else(|| format!("{flag} needs a value\n{}", usage(program)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn flags_assemble_a_config() {
        let config = parse_args(
            "corpus_demo",
            strings(&[
                "--dir",
                "img",
                "--grid-size",
                "12",
                "--no-crop",
                "--labels",
                "abc",
                "--csv",
                "out.csv",
            ]),
        )
        .unwrap();
        assert_eq!(config.corpus_dir, PathBuf::from("img"));
        assert_eq!(config.params.grid_size, 12);
        assert!(!config.params.crop);
        assert_eq!(config.params.labels, "abc");
        assert_eq!(config.output.csv_out, Some(PathBuf::from("out.csv")));
        assert_eq!(config.output.means_json, None);
    }

    #[test]
    fn defaults_fill_unset_fields() {
        let config = parse_args("corpus_demo", strings(&["--dir", "img"])).unwrap();
        assert_eq!(config.params.grid_size, 20);
        assert!(config.params.crop);
        assert_eq!(config.params.labels, "0123456789");
    }

    #[test]
    fn missing_dir_and_unknown_flags_fail() {
        assert!(parse_args("corpus_demo", strings(&["--grid-size", "4"])).is_err());
        assert!(parse_args("corpus_demo", strings(&["--dir", "img", "--bogus"])).is_err());
        assert!(parse_args("corpus_demo", std::iter::empty::<String>()).is_err());
    }

    #[test]
    fn json_config_parses_with_partial_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{ "corpus_dir": "img", "params": { "grid_size": 8 } }"#,
        )
        .unwrap();
        let config = load_config(&path).unwrap();
        assert_eq!(config.corpus_dir, PathBuf::from("img"));
        assert_eq!(config.params.grid_size, 8);
        assert!(config.params.crop); // serde default
        assert!(config.output.csv_out.is_none());
    }
}
