use crate::builder::{build, BUILD_DIR};
use owo_colors::{OwoColorize as _, Stream};
use std::path::{Component, Path, PathBuf};
use tiny_http::{Header, Request, Response};
use tracing::{debug, warn};

pub const DEFAULT_PORT: u16 = 8080;

pub struct DevArgs<'a, W: std::io::Write> {
    pub working_dir: PathBuf,
    pub port: Option<u16>,
    pub stdout: &'a mut W,
}

/// Builds the theme and serves the build directory until interrupted.
pub fn run<W: std::io::Write>(args: DevArgs<W>) -> crate::Result<()> {
    let port = args.port.unwrap_or(DEFAULT_PORT);
    let build_dir = args.working_dir.join(BUILD_DIR);

    writeln!(args.stdout, "Building theme...")?;
    build(args.stdout, &args.working_dir, &build_dir)?;

    let server = tiny_http::Server::http(format!("localhost:{}", port))
        .map_err(|e| crate::Error::General(format!("Failed to start server: {}", e)))?;

    writeln!(
        args.stdout,
        "Preview running on {}",
        format!("http://localhost:{}", port).if_supports_color(Stream::Stdout, |s| s.bold())
    )?;

    loop {
        let request = server
            .recv()
            .map_err(|e| crate::Error::General(format!("Failed to receive request: {}", e)))?;

        let response = handle_request(&request, &build_dir);
        if let Err(e) = request.respond(response) {
            warn!(error = %e, "failed to send response");
        }
    }
}

fn handle_request(request: &Request, build_dir: &Path) -> Response<std::io::Cursor<Vec<u8>>> {
    let url = request.url();
    debug!(url, "serving");

    let content = resolve_path(url, build_dir).and_then(|path| {
        std::fs::read(&path)
            .ok()
            .map(|content| (content, content_type_for_path(&path)))
    });

    match content {
        Some((content, content_type)) => with_content_type(Response::from_data(content), content_type),
        None => with_content_type(
            Response::from_data(b"404 Not Found".to_vec()).with_status_code(404),
            "text/plain; charset=utf-8",
        ),
    }
}

fn with_content_type(
    response: Response<std::io::Cursor<Vec<u8>>>,
    content_type: &str,
) -> Response<std::io::Cursor<Vec<u8>>> {
    match Header::from_bytes(&b"Content-Type"[..], content_type.as_bytes()) {
        Ok(header) => response.with_header(header),
        Err(_) => response,
    }
}

/// Maps a request url to a file in `build_dir`. Urls escaping the build
/// directory resolve to nothing.
fn resolve_path(url: &str, build_dir: &Path) -> Option<PathBuf> {
    let clean_url = url
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim_start_matches('/');

    if clean_url.is_empty() {
        return Some(build_dir.join("index.html"));
    }

    let relative = Path::new(clean_url);
    if relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_)))
    {
        return None;
    }

    let path = build_dir.join(relative);
    if path.is_dir() {
        return Some(path.join("index.html"));
    }

    Some(path)
}

fn content_type_for_path(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()).unwrap_or("") {
        "html" => "text/html; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "json" => "application/json; charset=utf-8",
        _ => "text/plain; charset=utf-8",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use temp_dir::TempDir;

    #[test]
    fn root_serves_the_preview() {
        let build_dir = TempDir::new().unwrap();

        assert_eq!(
            resolve_path("/", build_dir.path()),
            Some(build_dir.path().join("index.html"))
        );
        assert_eq!(
            resolve_path("/?mode=dark", build_dir.path()),
            Some(build_dir.path().join("index.html"))
        );
    }

    #[test]
    fn resolves_build_artifacts() {
        let build_dir = TempDir::new().unwrap();
        fs::write(build_dir.path().join("theme.css"), ":root {}").unwrap();

        assert_eq!(
            resolve_path("/theme.css", build_dir.path()),
            Some(build_dir.path().join("theme.css"))
        );
    }

    #[test]
    fn directories_serve_their_index() {
        let build_dir = TempDir::new().unwrap();
        fs::create_dir(build_dir.path().join("nested")).unwrap();

        assert_eq!(
            resolve_path("/nested", build_dir.path()),
            Some(build_dir.path().join("nested/index.html"))
        );
    }

    #[test]
    fn refuses_to_leave_the_build_directory() {
        let build_dir = TempDir::new().unwrap();

        assert_eq!(resolve_path("/../brandkit.yaml", build_dir.path()), None);
        assert_eq!(resolve_path("/a/../../secret", build_dir.path()), None);
    }

    #[test]
    fn content_types() {
        assert_eq!(
            content_type_for_path(Path::new("index.html")),
            "text/html; charset=utf-8"
        );
        assert_eq!(
            content_type_for_path(Path::new("theme.css")),
            "text/css; charset=utf-8"
        );
        assert_eq!(
            content_type_for_path(Path::new("theme.json")),
            "application/json; charset=utf-8"
        );
        assert_eq!(
            content_type_for_path(Path::new("README")),
            "text/plain; charset=utf-8"
        );
    }
}
