use clap::Parser;
use img_compress::cli::{normalize_args, print_usage, Args};
use img_compress::logger::set_verbose_mode;
use img_compress::{compress_image, CompressionOptions};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    let Some(argv) = normalize_args(std::env::args_os()) else {
        print_usage();
        return ExitCode::from(1);
    };

    // Malformed numbers end the process here, before any file is touched.
    let args = Args::parse_from(argv);
    set_verbose_mode(args.verbose);

    let options = CompressionOptions::new(args.quality, args.width, args.height);
    // A failed compression is reported on stdout but is not an abnormal exit.
    compress_image(Path::new(&args.input), args.output.as_deref(), &options);

    ExitCode::SUCCESS
}
