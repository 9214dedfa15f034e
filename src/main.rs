use std::io::{self, Read, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};
use unstyle::{Options, UnstyleError, convert, convert_file, read_document, write_document};

const DEFAULT_SVG: &str = "aasha_medix/assets/images/logo.svg";

const DONE_MESSAGE: &str = "SVG converted: <style> block removed and classes converted to inline styles";

#[derive(Parser)]
#[command(name = "unstyle")]
#[command(about = "Inline an SVG's class styles and drop its <style> block", long_about = None)]
struct Cli {
    /// Input file (use - for stdin)
    #[arg(default_value = DEFAULT_SVG)]
    input: PathBuf,

    /// Output file, defaults to rewriting the input in place (use - for stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Leave the <style> block in the document
    #[arg(long)]
    keep_style_block: bool,

    /// Do not replace class references with inline styles
    #[arg(long)]
    no_inline: bool,

    /// Print class and replacement counts
    #[arg(short, long)]
    stats: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let cli = Cli::parse();

    let output_path = cli.output.clone().unwrap_or_else(|| cli.input.clone());
    let from_stdin = cli.input.as_os_str() == "-";
    let to_stdout = output_path.as_os_str() == "-";

    let options = Options {
        remove_style_block: !cli.keep_style_block,
        inline_classes: !cli.no_inline,
    };

    let conversion = if from_stdin || to_stdout {
        // Read input
        let input = if from_stdin {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(UnstyleError::Stdio)?;
            buf
        } else {
            read_document(&cli.input)?
        };

        let conversion = convert(&input, &options);

        // Write output
        if to_stdout {
            io::stdout()
                .write_all(conversion.svg.as_bytes())
                .map_err(UnstyleError::Stdio)?;
        } else {
            write_document(&output_path, &conversion.svg)?;
        }
        conversion
    } else {
        convert_file(&cli.input, &output_path, &options)?
    };

    if !conversion.style_block_removed && options.remove_style_block {
        tracing::warn!(input = %cli.input.display(), "no <style> block found");
    }

    if cli.stats {
        eprintln!(
            "{} classes, {} references inlined",
            conversion.classes, conversion.replacements
        );
    }

    if to_stdout {
        eprintln!("{}", DONE_MESSAGE);
    } else {
        println!("{}", DONE_MESSAGE);
    }

    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = fmt().with_env_filter(filter).with_writer(io::stderr);
    let _ = subscriber.try_init();
}
