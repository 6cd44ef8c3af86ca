use argh::FromArgs;
use inksep::io::ImageFormat;
use inksep::{
    LogSink, SeparateError, SeparateOptions, SeparateResult, separate_rgb, show_separation,
    write_separation,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(FromArgs)]
/// Split a line-art image into one binary mask per ink color.
/// Masks are written as <letter>.png into the current directory.
struct Args {
    /// path to the input image
    #[argh(positional)]
    image_path: Vec<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args: Args = argh::from_env();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> SeparateResult<()> {
    let [path] = args.image_path.as_slice() else {
        return Err(SeparateError::InvalidArgumentCount(args.image_path.len()));
    };

    let rgb = inksep::io::read_image(path).map_err(|e| SeparateError::ImageDecodeFailure {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    log::info!("{}: {}x{}", path.display(), rgb.width(), rgb.height());

    let separation = separate_rgb(&rgb, &SeparateOptions::default())?;
    write_separation(&separation, ".", ImageFormat::Png)?;
    show_separation(&separation, &mut LogSink);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, argh::EarlyExit> {
        Args::from_args(&["inksep"], args)
    }

    #[test]
    fn test_single_positional() {
        let args = parse(&["page.png"]).unwrap();
        assert_eq!(args.image_path, vec![PathBuf::from("page.png")]);
    }

    #[test]
    fn test_flags_rejected() {
        assert!(parse(&["page.png", "--labels", "out.png"]).is_err());
        assert!(parse(&["page.png", "--seed", "3"]).is_err());
    }

    #[test]
    fn test_argument_count() {
        for argv in [&[][..], &["a.png", "b.png"][..]] {
            let args = parse(argv).unwrap();
            assert!(matches!(
                run(&args),
                Err(SeparateError::InvalidArgumentCount(n)) if n == argv.len()
            ));
        }
    }
}
