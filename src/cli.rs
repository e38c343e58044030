use bytefy::{ConversionRequest, Converter};
use clap::Parser;
use std::path::PathBuf;

/// Embed an image file in a Go source file as a []byte variable
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Go package name for the generated file
    #[arg(short, long = "package")]
    package_name: String,
    /// Input image file
    #[arg(short = 'f', long = "file")]
    input: PathBuf,
    /// Output Go file ("" writes <input name>.go in the current directory)
    #[arg(short, long)]
    output: String,
    /// Identifier for the byte array (must be a valid Go identifier)
    #[arg(short, long = "id")]
    identifier: String,
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn run(self) -> Result<(), bytefy::Error> {
        let request = self.request();
        Converter::with_defaults().convert(&request)?;
        Ok(())
    }

    fn request(&self) -> ConversionRequest {
        ConversionRequest::new(
            self.input.clone(),
            Some(PathBuf::from(&self.output)),
            self.package_name.clone(),
            self.identifier.clone(),
        )
    }
}
