use std::{path::Path, str::FromStr};

use mime::Mime;

pub fn get_content_type(filename: &str) -> Mime {
    if let Some(extension) = Path::new(filename).extension() {
        if let Some(extension) = extension.to_str() {
            let extension = extension.to_ascii_lowercase();
            return match extension.as_str() {
                "pdf" => mime::APPLICATION_PDF,
                "png" => mime::IMAGE_PNG,
                "jpg" | "jpeg" => mime::IMAGE_JPEG,
                "gif" => mime::IMAGE_GIF,
                "bmp" => mime::IMAGE_BMP,
                "svg" => mime::IMAGE_SVG,
                "txt" => mime::TEXT_PLAIN,
                "csv" => mime::TEXT_CSV,
                "html" | "htm" => mime::TEXT_HTML,
                "json" => mime::APPLICATION_JSON,
                "doc" => from_static("application/msword"),
                "docx" => from_static("application/vnd.openxmlformats-officedocument.wordprocessingml.document"),
                "xlsx" => from_static("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"),
                "pptx" => from_static("application/vnd.openxmlformats-officedocument.presentationml.presentation"),
                "epub" => from_static("application/epub+zip"),
                "zip" => from_static("application/zip"),
                _ => mime::APPLICATION_OCTET_STREAM,
            };
        }
    }
    mime::APPLICATION_OCTET_STREAM
}

fn from_static(content_type: &str) -> Mime {
    Mime::from_str(content_type).unwrap_or(mime::APPLICATION_OCTET_STREAM)
}

#[cfg(test)]
mod tests {
    use super::get_content_type;

    #[test]
    fn known_extensions_ignore_case() {
        assert_eq!(get_content_type("scan.PDF"), mime::APPLICATION_PDF);
        assert_eq!(get_content_type("photo.jpeg"), mime::IMAGE_JPEG);
        assert_eq!(get_content_type("novel.epub").essence_str(), "application/epub+zip");
    }

    #[test]
    fn unknown_or_missing_extension_is_octet_stream() {
        assert_eq!(get_content_type("archive.xyz"), mime::APPLICATION_OCTET_STREAM);
        assert_eq!(get_content_type("3f1c0e5b9a7d4e2f8b6a1c3d5e7f9a0b"), mime::APPLICATION_OCTET_STREAM);
    }
}
