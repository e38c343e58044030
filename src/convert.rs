//! The conversion pipeline: validate, read, render, write.

use crate::error::{Error, Result};
use crate::fs::{DIR_MODE, FILE_MODE, FileAccessor, OsFileSystem};
use crate::ident::is_valid_identifier;
use crate::template::{
    GO_SOURCE_TEMPLATE, GO_SOURCE_TEMPLATE_NAME, JinjaEngine, RenderContext, TemplateEngine,
};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Extension given to derived output files.
pub const SOURCE_EXTENSION: &str = "go";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    pub input: PathBuf,
    /// Where to write the generated file. `None` derives one with
    /// [`default_output_path`]; [`ConversionRequest::new`] maps an empty path
    /// to `None`.
    pub output: Option<PathBuf>,
    pub package_name: String,
    pub identifier: String,
}

impl ConversionRequest {
    pub fn new(
        input: impl Into<PathBuf>,
        output: Option<PathBuf>,
        package_name: impl Into<String>,
        identifier: impl Into<String>,
    ) -> Self {
        Self {
            input: input.into(),
            output: output.filter(|p| !p.as_os_str().is_empty()),
            package_name: package_name.into(),
            identifier: identifier.into(),
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.input))
    }
}

/// Output path used when none is given: the input's file stem with a `.go`
/// extension, in the current directory. The input's directory is dropped.
pub fn default_output_path(input: &Path) -> PathBuf {
    let mut name = input
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| "output".into());
    name.push(".");
    name.push(SOURCE_EXTENSION);
    PathBuf::from(name)
}

/// Runs conversions against a file system and a template engine.
pub struct Converter<F, T> {
    fs: F,
    engine: T,
}

impl Converter<OsFileSystem, JinjaEngine> {
    pub fn with_defaults() -> Self {
        Converter::new(OsFileSystem, JinjaEngine)
    }
}

impl<F: FileAccessor, T: TemplateEngine> Converter<F, T> {
    pub fn new(fs: F, engine: T) -> Self {
        Self { fs, engine }
    }

    /// Converts `request.input` into a Go source file and returns the path
    /// that was written. Nothing is written unless every earlier step succeeds.
    pub fn convert(&self, request: &ConversionRequest) -> Result<PathBuf> {
        if !is_valid_identifier(&request.identifier) {
            return Err(Error::InvalidIdentifier(request.identifier.clone()));
        }

        let output = request.output_path();
        debug!(input = %request.input.display(), output = %output.display(), "converting");

        let bytes = self.read_input(&request.input)?;
        debug!(len = bytes.len(), "read input");

        let ctx = RenderContext {
            package_name: request.package_name.clone(),
            identifier: request.identifier.clone(),
            bytes,
        };

        let executor = self
            .engine
            .parse(GO_SOURCE_TEMPLATE_NAME, GO_SOURCE_TEMPLATE)
            .map_err(Error::TemplateParse)?;
        let mut rendered = Vec::new();
        executor
            .execute(&mut rendered, &ctx)
            .map_err(Error::TemplateExecution)?;
        debug!(len = rendered.len(), "rendered source");

        let dir = output_dir(&output);
        self.fs
            .mkdir_all(dir, DIR_MODE)
            .map_err(|source| Error::CreateDirectory {
                path: dir.to_path_buf(),
                source,
            })?;
        self.fs
            .write_file(&output, &rendered, FILE_MODE)
            .map_err(|source| Error::Write {
                path: output.clone(),
                source,
            })?;

        info!(
            bytes = ctx.bytes.len(),
            output = %output.display(),
            "wrote {}",
            ctx.identifier
        );
        Ok(output)
    }

    fn read_input(&self, path: &Path) -> Result<Vec<u8>> {
        let mut reader = self.fs.open(path).map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|source| Error::Read {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(bytes)
    }
}

fn output_dir(output: &Path) -> &Path {
    match output.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    }
}

/// Converts `input` into a Go file on the real file system. An empty
/// `output` derives the path from the input's name.
pub fn convert(
    input: &str,
    output: &str,
    package_name: &str,
    identifier: &str,
) -> Result<PathBuf> {
    let output = (!output.is_empty()).then(|| PathBuf::from(output));
    let request = ConversionRequest::new(input, output, package_name, identifier);
    Converter::with_defaults().convert(&request)
}
