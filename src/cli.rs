use clap::{CommandFactory, Parser};
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "compress-image",
    about = "Resize and re-encode an image as JPEG to reduce its size",
    long_about = "compress-image reads one image, optionally shrinks it to fit a maximum width and/or height \
                  (aspect ratio preserved, never enlarged), flattens transparency onto white and writes a \
                  size-optimized JPEG at the requested quality.",
    override_usage = "compress-image <input> [options]",
    disable_help_flag = true,
    disable_version_flag = true,
    after_help = "EXAMPLES:\n  \
    compress-image photo.jpg\n  \
    compress-image photo.jpg -q 70\n  \
    compress-image photo.jpg -w 1920 -h 1080\n  \
    compress-image photo.jpg -o small.jpg -q 60 -w 800"
)]
pub struct Args {
    #[arg(
        value_parser = clap::value_parser!(OsString),
        help = "Input image file path"
    )]
    pub input: OsString,

    #[arg(
        short = 'o',
        long,
        allow_hyphen_values = true,
        help = "Output file path (default: <input-base>_compressed.jpg)"
    )]
    pub output: Option<PathBuf>,

    #[arg(
        short = 'q',
        long,
        allow_hyphen_values = true,
        help = "JPEG quality 1-100 (default: 85)"
    )]
    pub quality: Option<i32>,

    #[arg(
        short = 'w',
        long,
        allow_hyphen_values = true,
        help = "Maximum width in pixels"
    )]
    pub width: Option<u32>,

    #[arg(
        short = 'h',
        long,
        allow_hyphen_values = true,
        help = "Maximum height in pixels"
    )]
    pub height: Option<u32>,

    #[arg(short = 'v', long, help = "Print each processing stage")]
    pub verbose: bool,
}

/// Flags that take a value, as `(short, long)`.
const VALUE_FLAGS: [(&str, &str); 4] = [
    ("-o", "--output"),
    ("-q", "--quality"),
    ("-w", "--width"),
    ("-h", "--height"),
];

/// Rewrites raw process arguments into a form clap accepts without complaint.
///
/// The first token after the program name is always the input path, whatever
/// it looks like. After it, known flags followed by a value are kept (the last
/// occurrence wins), `-v`/`--verbose` is kept, and everything else is dropped:
/// unknown flags, stray positionals and a trailing flag with no value.
/// An empty output value counts as no output, so the default path is used.
///
/// Returns `None` when there is no input path at all.
pub fn normalize_args<I, T>(raw: I) -> Option<Vec<OsString>>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let raw: Vec<OsString> = raw.into_iter().map(Into::into).collect();
    if raw.len() < 2 {
        return None;
    }

    let mut values: [Option<&OsStr>; VALUE_FLAGS.len()] = [None; VALUE_FLAGS.len()];
    let mut verbose = false;

    let mut i = 2;
    while i < raw.len() {
        let arg = raw[i].to_str().unwrap_or_default();
        let slot = VALUE_FLAGS
            .iter()
            .position(|(short, long)| arg == *short || arg == *long);

        match slot {
            Some(slot) if i + 1 < raw.len() => {
                values[slot] = Some(&raw[i + 1]);
                i += 2;
            }
            _ => {
                if arg == "-v" || arg == "--verbose" {
                    verbose = true;
                }
                i += 1;
            }
        }
    }

    let mut args = vec![raw[0].clone()];
    for (&(_, long), value) in VALUE_FLAGS.iter().zip(values) {
        if let Some(value) = value.filter(|v| !(long == "--output" && v.is_empty())) {
            args.push(OsString::from(long));
            args.push(value.to_os_string());
        }
    }
    if verbose {
        args.push(OsString::from("--verbose"));
    }
    args.push(OsString::from("--"));
    args.push(raw[1].clone());

    Some(args)
}

pub fn print_usage() {
    let mut cmd = Args::command();
    if let Err(e) = cmd.print_help() {
        eprintln!("{}", e);
    }
}
