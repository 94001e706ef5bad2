use std::{fs::{self, File}, io::{ErrorKind, Read, Write}, path::{Path, PathBuf}};

use reqwest::blocking::Client;
use tracing::info;
use url::Url;

use crate::{consts::CHUNK_SIZE, error::{ConvertioError, Result}, models::Output, util::routes::output_file_route};

/// Where a finished conversion is written.
pub enum Destination<'a> {
    /// A file, or an existing directory receiving one file per output.
    Path(PathBuf),
    Writer(&'a mut dyn Write),
}

impl<'a> Destination<'a> {
    pub fn writer(writer: &'a mut dyn Write) -> Self {
        Destination::Writer(writer)
    }
}

impl From<PathBuf> for Destination<'_> {
    fn from(path: PathBuf) -> Self {
        Destination::Path(path)
    }
}

impl From<&Path> for Destination<'_> {
    fn from(path: &Path) -> Self {
        Destination::Path(path.to_path_buf())
    }
}

impl From<&str> for Destination<'_> {
    fn from(path: &str) -> Self {
        Destination::Path(PathBuf::from(path))
    }
}

impl std::fmt::Debug for Destination<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Destination::Path(path) => f.debug_tuple("Path").field(path).finish(),
            Destination::Writer(_) => f.write_str("Writer"),
        }
    }
}

pub(crate) fn download_output(client: &Client, output: &Output, destination: Option<Destination<'_>>, conversion_id: &str) -> Result<()> {
    let url = Url::parse(&output.url)?;
    match destination {
        None => save_to_file(client, &url, Path::new(&url_file_name(&url, conversion_id))),
        Some(Destination::Writer(writer)) => save(client, &url, writer).map(|_| ()),
        Some(Destination::Path(path)) if path.is_dir() => match output.multiple_files() {
            Some(files) => {
                let mut targets = Vec::with_capacity(files.len());
                for file in files {
                    let target = local_output_path(&path, file).ok_or_else(|| ConvertioError::InvalidOutputName {
                        id: conversion_id.to_string(),
                        name: file.to_string(),
                    })?;
                    targets.push((output_file_route(&url, file)?, target));
                }
                for (file_url, target) in targets {
                    if let Some(parent) = target.parent() {
                        fs::create_dir_all(parent)?;
                    }
                    save_to_file(client, &file_url, &target)?;
                }
                Ok(())
            }
            None => save_to_file(client, &url, &path.join(url_file_name(&url, conversion_id))),
        },
        Some(Destination::Path(path)) => save_to_file(client, &url, &path),
    }
}

fn save_to_file(client: &Client, url: &Url, path: &Path) -> Result<()> {
    info!("Downloading {} to {}", url, path.display());
    let mut file = File::create(path)?;
    save(client, url, &mut file)?;
    Ok(())
}

/// Copies the body at `url` into `output` chunk by chunk.
pub(crate) fn save(client: &Client, url: &Url, output: &mut dyn Write) -> Result<u64> {
    let mut response = client.get(url.clone()).send()?.error_for_status()?;
    let mut buffer = [0u8; CHUNK_SIZE];
    let mut written = 0u64;
    loop {
        let read = match response.read(&mut buffer) {
            Ok(0) => break,
            Ok(read) => read,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(err.into()),
        };
        output.write_all(&buffer[..read])?;
        written += read as u64;
    }
    output.flush()?;
    Ok(written)
}

/// `file` as a path below `directory`, keeping its `/`-separated subdirectories.
/// `None` when a segment is empty, `.`, `..` or carries a platform separator.
fn local_output_path(directory: &Path, file: &str) -> Option<PathBuf> {
    let mut target = directory.to_path_buf();
    for segment in file.split('/') {
        if segment.is_empty() || segment == "." || segment == ".." || segment.contains('\\') || segment.contains(':') {
            return None;
        }
        target.push(segment);
    }
    Some(target)
}

/// Last path segment of `url`, or the conversion id when the path has none.
fn url_file_name(url: &Url, conversion_id: &str) -> String {
    url.path_segments()
        .and_then(|mut segments| segments.next_back())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| conversion_id.to_string())
}
