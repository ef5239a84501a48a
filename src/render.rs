use std::path::PathBuf;

use derive_more::{Display, From};
use serde::Serialize;
use tera::{Context, Tera};

use crate::model::attendance::AttendanceRecord;

/// Data behind the index page: the full list, plus the record loaded into
/// the form when editing.
#[derive(Debug, Serialize)]
pub struct IndexView {
    pub records: Vec<AttendanceRecord>,
    pub edit: Option<AttendanceRecord>,
}

#[derive(Debug, Display, From)]
pub enum RenderError {
    #[display(fmt = "failed to read template: {}", _0)]
    Load(std::io::Error),
    #[display(fmt = "template error: {:?}", _0)]
    Template(tera::Error),
}

/// Loads `<dir>/<name>.html` on every call, so template edits show up without
/// a restart.
#[derive(Debug, Clone)]
pub struct Renderer {
    dir: PathBuf,
}

impl Renderer {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, RenderError> {
        // the .html suffix turns on tera's autoescaping
        let file_name = format!("{name}.html");
        let source = std::fs::read_to_string(self.dir.join(&file_name))?;

        let mut tera = Tera::default();
        tera.add_raw_template(&file_name, &source)?;
        let context = Context::from_serialize(data)?;

        Ok(tera.render(&file_name, &context)?)
    }
}
