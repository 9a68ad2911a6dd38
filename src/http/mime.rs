//! Content-type inference
//!
//! Maps a file path to a Content-Type header value by extension.

use std::path::Path;

/// Infer the MIME Content-Type for a file path from its extension.
///
/// Extensions are matched case-insensitively; anything unrecognized is
/// `application/octet-stream`.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use spadev::http::mime::content_type_for;
/// assert_eq!(content_type_for(Path::new("index.html")), "text/html; charset=utf-8");
/// assert_eq!(content_type_for(Path::new("app.wasm")), "application/wasm");
/// assert_eq!(content_type_for(Path::new("LICENSE")), "application/octet-stream");
/// ```
pub fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        // Documents
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("txt" | "md") => "text/plain; charset=utf-8",
        Some("xml") => "application/xml",
        Some("pdf") => "application/pdf",

        // Scripts and bundler output
        Some("js" | "mjs") => "application/javascript",
        Some("json" | "map") => "application/json",
        Some("wasm") => "application/wasm",

        // Images
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("avif") => "image/avif",
        Some("ico") => "image/x-icon",

        // Fonts
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("otf") => "font/otf",

        // Media
        Some("mp4") => "video/mp4",
        Some("webm") => "video/webm",
        Some("mp3") => "audio/mpeg",
        Some("ogg") => "audio/ogg",
        Some("wav") => "audio/wav",

        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spa_build_output() {
        assert_eq!(
            content_type_for(Path::new("dist/index.html")),
            "text/html; charset=utf-8"
        );
        assert_eq!(
            content_type_for(Path::new("assets/app.abc123.js")),
            "application/javascript"
        );
        assert_eq!(content_type_for(Path::new("assets/app.abc123.css")), "text/css");
        assert_eq!(content_type_for(Path::new("assets/app.js.map")), "application/json");
        assert_eq!(content_type_for(Path::new("favicon.ico")), "image/x-icon");
        assert_eq!(content_type_for(Path::new("fonts/inter.woff2")), "font/woff2");
    }

    #[test]
    fn extension_case_is_ignored() {
        assert_eq!(content_type_for(Path::new("logo.PNG")), "image/png");
        assert_eq!(content_type_for(Path::new("Index.HTML")), "text/html; charset=utf-8");
    }

    #[test]
    fn unknown_or_missing_extension() {
        assert_eq!(
            content_type_for(Path::new("archive.xyz")),
            "application/octet-stream"
        );
        assert_eq!(content_type_for(Path::new("Makefile")), "application/octet-stream");
        assert_eq!(content_type_for(Path::new(".env")), "application/octet-stream");
    }
}
