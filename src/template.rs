//! Rendering of the generated Go source.
//!
//! Rendering is split in two phases, [`TemplateEngine::parse`] and
//! [`TemplateExecutor::execute`], so a failure can be attributed to the
//! template itself or to the data it was run against.

use minijinja::Environment;
use serde::Serialize;
use std::io::Write;
use thiserror::Error;

/// Fixed template for the generated Go file. Bytes are laid out sixteen per
/// line, each one written as `0x` followed by two lowercase hex digits.
///
/// Every byte goes through the template loop and the `hex` filter, so render
/// time grows linearly with the input at a few hundred nanoseconds per byte.
/// Inputs of several megabytes take seconds to convert.
pub const GO_SOURCE_TEMPLATE: &str = "\
// Code generated by bytefy. DO NOT EDIT.

package {{ package_name }}

var {{ identifier }} = []byte{
{%- for row in bytes|batch(16) %}
\t{% for b in row %}0x{{ b|hex }},{% if not loop.last %} {% endif %}{% endfor %}
{%- endfor %}
}
";

/// Name the fixed template is registered under.
pub const GO_SOURCE_TEMPLATE_NAME: &str = "go_source";

/// Data fed to the template: names for the declarations plus the file content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderContext {
    pub package_name: String,
    pub identifier: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Error)]
#[error("{message}")]
pub struct TemplateError {
    message: String,
}

impl TemplateError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<minijinja::Error> for TemplateError {
    fn from(err: minijinja::Error) -> Self {
        TemplateError::new(err.to_string())
    }
}

pub trait TemplateEngine {
    /// Compiles `source` into something that can be executed.
    fn parse(&self, name: &str, source: &str) -> Result<Box<dyn TemplateExecutor>, TemplateError>;
}

pub trait TemplateExecutor {
    /// Renders `ctx` into `out`.
    fn execute(&self, out: &mut dyn Write, ctx: &RenderContext) -> Result<(), TemplateError>;
}

/// [`TemplateEngine`] built on minijinja.
#[derive(Debug, Default, Clone, Copy)]
pub struct JinjaEngine;

struct JinjaExecutor {
    env: Environment<'static>,
    name: String,
}

impl TemplateEngine for JinjaEngine {
    fn parse(&self, name: &str, source: &str) -> Result<Box<dyn TemplateExecutor>, TemplateError> {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.add_filter("hex", hex_byte);
        env.add_template_owned(name.to_owned(), source.to_owned())?;
        Ok(Box::new(JinjaExecutor {
            env,
            name: name.to_owned(),
        }))
    }
}

impl TemplateExecutor for JinjaExecutor {
    fn execute(&self, out: &mut dyn Write, ctx: &RenderContext) -> Result<(), TemplateError> {
        let template = self.env.get_template(&self.name)?;
        template.render_to_write(ctx, out)?;
        Ok(())
    }
}

fn hex_byte(value: u8) -> String {
    format!("{:02x}", value)
}
