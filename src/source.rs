use std::{collections::HashMap, fs::File, io::Read, path::{Path, PathBuf}};

use serde_json::Value;
use url::Url;

use crate::{dtos::InputMode, error::{ConvertioError, Result}, util::random::generate_hex_token};

const URL_SCHEMES: [&str; 4] = ["http", "https", "ftp", "ftps"];

/// What to convert. Decided once when the value is built, never re-inspected.
pub enum Source {
    /// Fetched by the service itself, no local I/O.
    Url(String),
    /// Local file, opened and uploaded after the job is created.
    Path(PathBuf),
    /// Already open byte stream, uploaded after the job is created.
    Reader { reader: Box<dyn Read + Send>, name: Option<String> },
}

impl Source {
    /// Treats `value` as a URL when it is a well-formed remote URL, as a local path otherwise.
    pub fn parse(value: &str) -> Self {
        if is_remote_url(value) {
            Source::Url(value.to_string())
        } else {
            Source::Path(PathBuf::from(value))
        }
    }

    pub fn reader(reader: impl Read + Send + 'static) -> Self {
        Source::Reader { reader: Box::new(reader), name: None }
    }

    pub fn named_reader(reader: impl Read + Send + 'static, name: impl Into<String>) -> Self {
        Source::Reader { reader: Box::new(reader), name: Some(name.into()) }
    }

    pub(crate) fn prepare(self, filename: Option<&str>) -> Result<PreparedSource> {
        let (input, file, name, upload) = match self {
            Source::Url(url) => (InputMode::Url, Some(url), None, None),
            Source::Path(path) => {
                if !path.is_file() {
                    return Err(ConvertioError::InvalidSource(path));
                }
                let file = File::open(&path)?;
                let length = file.metadata()?.len();
                let upload = Upload { reader: Box::new(file), length: Some(length) };
                (InputMode::Upload, None, base_name(&path), Some(upload))
            }
            Source::Reader { reader, name } => {
                let upload = Upload { reader, length: None };
                (InputMode::Upload, None, name.and_then(|name| base_name(Path::new(&name))), Some(upload))
            }
        };
        let filename = match filename {
            Some(filename) => filename.to_string(),
            None => name.unwrap_or_else(generate_hex_token),
        };
        Ok(PreparedSource { input, file, filename, upload })
    }
}

impl From<&str> for Source {
    fn from(value: &str) -> Self {
        Source::parse(value)
    }
}

impl From<String> for Source {
    fn from(value: String) -> Self {
        Source::parse(&value)
    }
}

impl From<PathBuf> for Source {
    fn from(path: PathBuf) -> Self {
        Source::Path(path)
    }
}

impl From<&Path> for Source {
    fn from(path: &Path) -> Self {
        Source::Path(path.to_path_buf())
    }
}

impl From<Url> for Source {
    fn from(url: Url) -> Self {
        Source::Url(url.into())
    }
}

impl std::fmt::Debug for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Url(url) => f.debug_tuple("Url").field(url).finish(),
            Source::Path(path) => f.debug_tuple("Path").field(path).finish(),
            Source::Reader { name, .. } => f.debug_struct("Reader").field("name", name).finish_non_exhaustive(),
        }
    }
}

/// Optional settings for a new conversion.
#[derive(Debug, Default, Clone)]
pub struct ConvertOptions {
    /// Replaces the name the input is uploaded under.
    pub filename: Option<String>,
    /// Forwarded verbatim to the service, e.g. `callback_url`.
    pub options: HashMap<String, Value>,
}

impl ConvertOptions {
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }
}

pub(crate) struct PreparedSource {
    pub input: InputMode,
    pub file: Option<String>,
    pub filename: String,
    pub upload: Option<Upload>,
}

pub(crate) struct Upload {
    pub reader: Box<dyn Read + Send>,
    pub length: Option<u64>,
}

pub fn is_remote_url(value: &str) -> bool {
    match Url::parse(value) {
        Ok(url) => URL_SCHEMES.contains(&url.scheme()) && url.host_str().map_or(false, |host| !host.is_empty()),
        Err(_) => false,
    }
}

fn base_name(path: &Path) -> Option<String> {
    path.file_name().map(|name| name.to_string_lossy().into_owned())
}
