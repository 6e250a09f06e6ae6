//! CLI for imgff: report the real image format of files, ignoring their extensions.

#![cfg(feature = "cli")]

use clap::Parser;
use imgff::{inspect_path, ExtensionCheck, Inspection, Outcome};
use indexmap::IndexMap;
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

#[derive(Parser)]
#[command(name = "imgff")]
#[command(about = "Identify image formats (JPEG, PNG, BMP, GIF) from magic bytes", long_about = None)]
struct Args {
    /// Path to a file or directory to inspect (use -d/--directory to scan a whole directory)
    path: Option<String>,

    /// Scan a whole directory (optionally with -r to recurse into subdirectories)
    #[arg(short = 'd', long = "directory", value_name = "DIR")]
    directory: Option<String>,

    /// When scanning a directory, recurse into subdirectories
    #[arg(short, long)]
    recursive: bool,

    /// File extensions to inspect (comma-separated). Files without an extension are always inspected. Use --all to ignore the filter.
    #[arg(short, long, default_value = "jpg,jpeg,jpe,png,bmp,gif,avif,webp")]
    extensions: String,

    /// Inspect all files regardless of extension
    #[arg(long)]
    all: bool,

    /// Output JSON per file (one line per file unless --pretty)
    #[arg(long)]
    json: bool,

    /// Pretty-print JSON (use with --json)
    #[arg(long)]
    pretty: bool,

    /// Quiet: only print unknown, unreadable or mislabeled files
    #[arg(short, long)]
    quiet: bool,

    /// Include the SHA-256 of each file (reads the whole file)
    #[arg(long)]
    sha256: bool,
}

#[derive(Default)]
struct Totals {
    files: u64,
    unknown: u64,
    unreadable: u64,
    mismatched: u64,
}

impl Totals {
    fn record(&mut self, inspection: &Inspection) {
        self.files += 1;
        match inspection.outcome {
            Outcome::Unknown => self.unknown += 1,
            Outcome::Unreadable => self.unreadable += 1,
            Outcome::Detected => {}
        }
        if inspection.extension_check == ExtensionCheck::Mismatch {
            self.mismatched += 1;
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();
    let exts: HashSet<String> = args
        .extensions
        .split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();

    let path_str = args
        .directory
        .as_ref()
        .or(args.path.as_ref())
        .ok_or("Missing path: give a file/directory as argument or use -d/--directory <DIR>")?;
    let path = Path::new(path_str.as_str());

    if !path.exists() {
        eprintln!("Not found: {}", path.display());
        std::process::exit(1);
    }

    let mut totals = Totals::default();
    if path.is_file() {
        if args.directory.is_some() {
            eprintln!("--directory expects a directory, not a file: {}", path.display());
            std::process::exit(1);
        }
        scan_file(path, &args, &exts, &mut totals)?;
    } else if path.is_dir() {
        if !args.quiet {
            eprintln!("Scanning directory: {} {}", path.display(), if args.recursive { "(recursive)" } else { "" });
        }
        scan_dir(path, &args, &exts, &mut totals)?;
        if !args.quiet {
            eprintln!(
                "Inspected {} files, {} unknown, {} unreadable, {} mislabeled",
                totals.files, totals.unknown, totals.unreadable, totals.mismatched
            );
        }
    } else {
        eprintln!("Not a file or directory: {}", path.display());
        std::process::exit(1);
    }

    if totals.unreadable > 0 {
        std::process::exit(2);
    }
    Ok(())
}

/// Skip only when: not --all, the file has an extension, and it is not in the list.
fn wanted(path: &Path, args: &Args, exts: &HashSet<String>) -> bool {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    args.all || ext.is_empty() || exts.is_empty() || exts.contains(&ext)
}

fn scan_file(
    path: &Path,
    args: &Args,
    exts: &HashSet<String>,
    totals: &mut Totals,
) -> Result<(), Box<dyn std::error::Error>> {
    if !wanted(path, args, exts) {
        if !args.quiet {
            eprintln!("Skip (extension): {}", path.display());
        }
        return Ok(());
    }
    let inspection = inspect_path(path);
    totals.record(&inspection);
    print_inspection(path, &inspection, args)
}

fn scan_dir(
    dir: &Path,
    args: &Args,
    exts: &HashSet<String>,
    totals: &mut Totals,
) -> Result<(), Box<dyn std::error::Error>> {
    let walker = if args.recursive {
        WalkDir::new(dir).into_iter()
    } else {
        WalkDir::new(dir).max_depth(1).into_iter()
    };

    let hidden = |e: &walkdir::DirEntry| {
        e.depth() > 0 && e.file_name().to_str().map_or(false, |s| s.starts_with('.'))
    };

    for entry in walker.filter_entry(|e| !hidden(e)) {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type().is_file() || !wanted(path, args, exts) {
            continue;
        }
        let inspection = inspect_path(path);
        totals.record(&inspection);
        print_inspection(path, &inspection, args)?;
    }
    Ok(())
}

fn print_inspection(
    path: &Path,
    inspection: &Inspection,
    args: &Args,
) -> Result<(), Box<dyn std::error::Error>> {
    if args.quiet && !inspection.is_suspicious() {
        return Ok(());
    }
    let sha256 = if args.sha256 {
        fs::read(path).ok().map(|bytes| sha256_hex(&bytes))
    } else {
        None
    };

    if args.json {
        let mut out = IndexMap::<String, serde_json::Value>::new();
        out.insert("path".to_string(), serde_json::Value::String(path.display().to_string()));
        out.insert("format".to_string(), serde_json::to_value(inspection.format)?);
        out.insert("outcome".to_string(), serde_json::to_value(inspection.outcome)?);
        out.insert("extension".to_string(), serde_json::to_value(&inspection.extension)?);
        out.insert("extension_check".to_string(), serde_json::to_value(inspection.extension_check)?);
        out.insert("error".to_string(), serde_json::to_value(&inspection.error)?);
        if args.sha256 {
            out.insert("sha256".to_string(), serde_json::to_value(&sha256)?);
        }
        let json_str = if args.pretty {
            serde_json::to_string_pretty(&out)?
        } else {
            serde_json::to_string(&out)?
        };
        println!("{}", json_str);
        return Ok(());
    }

    println!("{} {}", inspection.label().to_uppercase(), path.display());
    if let Some(ref hash) = sha256 {
        println!("  sha256: {}", hash);
    }
    if let Some(ref err) = inspection.error {
        println!("  error: {}", err);
    }
    match inspection.extension_check {
        ExtensionCheck::Mismatch => println!(
            "  warning: extension .{} does not match content",
            inspection.extension.as_deref().unwrap_or("")
        ),
        ExtensionCheck::Missing if !args.quiet => println!("  guessed from content (no extension)"),
        _ => {}
    }
    if !args.quiet {
        if let Some(f) = inspection.format {
            println!("  mime: {}", f.mime_type());
        }
    }
    Ok(())
}
