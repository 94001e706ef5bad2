use url::Url;

use crate::error::{ConvertioError, Result};

pub fn balance_route(host: &Url) -> Result<Url> {
    route(host, &["balance"])
}

pub fn convert_route(host: &Url) -> Result<Url> {
    route(host, &["convert"])
}

pub fn list_route(host: &Url) -> Result<Url> {
    route(host, &["convert", "list"])
}

pub fn conversion_route(host: &Url, conversion_id: &str) -> Result<Url> {
    route(host, &["convert", conversion_id])
}

pub fn status_route(host: &Url, conversion_id: &str) -> Result<Url> {
    route(host, &["convert", conversion_id, "status"])
}

pub fn upload_route(host: &Url, conversion_id: &str, filename: &str) -> Result<Url> {
    route(host, &["convert", conversion_id, filename])
}

/// `{url}/{file}` for one entry of a multi-file output; `file` may hold `/`.
pub fn output_file_route(url: &Url, file: &str) -> Result<Url> {
    let segments: Vec<&str> = file.split('/').collect();
    route(url, &segments)
}

fn route(base: &Url, segments: &[&str]) -> Result<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| ConvertioError::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
