//! Blocking HTTP fetcher for the release page and the archive asset.

use std::path::Path;

use reqwest::blocking::Client;
use reqwest::blocking::Response;
use tracing::debug;
use tracing::info;

use crate::DownloadReport;
use crate::FetchConfig;
use crate::ProgressCallback;
use crate::Result;
use crate::UpdateError;
use crate::copy::CopyBuffer;
use crate::copy::CopyError;
use crate::copy::copy_with_progress;
use crate::locate::file_name_from_url;

/// HTTP GET client. One attempt per request, no retries.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Builds the underlying client from `config`.
    ///
    /// # Errors
    ///
    /// Returns `UpdateError::Network` if the TLS backend cannot be set up.
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()
            .map_err(|source| UpdateError::Network {
                url: String::from("<client setup>"),
                source,
            })?;
        Ok(Self { client })
    }

    /// Fetches `url` and returns the body as text.
    ///
    /// # Errors
    ///
    /// Returns `Network` on connection or body failures and `HttpStatus` on a
    /// non-success status.
    pub fn fetch_text(&self, url: &str) -> Result<String> {
        info!(url, "loading");
        let response = self.get(url)?;
        response.text().map_err(|source| UpdateError::Network {
            url: url.to_string(),
            source,
        })
    }

    /// Streams the body of `url` into `dir`, naming the file after the URL's
    /// final path segment.
    ///
    /// The body is written to a temporary file in `dir` first and renamed
    /// into place once complete, so a failed download leaves no file under
    /// the final name. An existing file of that name is replaced.
    ///
    /// # Errors
    ///
    /// Returns `Network`, `BodyRead` or `HttpStatus` for transfer failures and
    /// `Io` when the local file cannot be written or the URL has no file name.
    pub fn download(
        &self,
        url: &str,
        dir: &Path,
        progress: &mut dyn ProgressCallback,
    ) -> Result<DownloadReport> {
        let file_name = file_name_from_url(url);
        if file_name.is_empty() {
            return Err(UpdateError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("URL has no file name: {url}"),
            )));
        }

        info!(url, "downloading");
        let mut response = self.get(url)?;
        progress.on_download_start(url, response.content_length());

        let mut partial = tempfile::Builder::new()
            .prefix(".gfxpack-")
            .suffix(".part")
            .tempfile_in(dir)?;

        let bytes_written = copy_with_progress(
            &mut response,
            partial.as_file_mut(),
            &mut CopyBuffer::new(),
            progress,
        )
        .map_err(|err| match err {
            CopyError::Read(source) => UpdateError::BodyRead {
                url: url.to_string(),
                source,
            },
            CopyError::Write(e) => UpdateError::Io(e),
        })?;
        partial.as_file().sync_all()?;

        let path = dir.join(file_name);
        partial.persist(&path).map_err(|e| UpdateError::Io(e.error))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644))?;
        }

        progress.on_complete();
        debug!(path = %path.display(), bytes_written, "download complete");

        Ok(DownloadReport {
            url: url.to_string(),
            file_name: file_name.to_string(),
            path,
            bytes_written,
        })
    }

    /// Sends a GET and rejects non-success statuses.
    fn get(&self, url: &str) -> Result<Response> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|source| UpdateError::Network {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpdateError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::NoopProgress;
    use crate::test_utils::CannedResponse;
    use crate::test_utils::serve;
    use std::fs;
    use tempfile::TempDir;

    fn fetcher() -> Fetcher {
        Fetcher::new(&FetchConfig::default()).expect("client builds")
    }

    #[test]
    fn test_fetch_text() {
        let (base, server) = serve(vec![CannedResponse::ok("<html>release</html>")]);

        let body = fetcher().fetch_text(&format!("{base}/latest")).unwrap();

        assert_eq!(body, "<html>release</html>");
        let requests = server.join().unwrap();
        assert_eq!(requests, ["GET /latest HTTP/1.1"]);
    }

    #[test]
    fn test_fetch_text_error_status() {
        let (base, server) = serve(vec![CannedResponse::status(404)]);

        let result = fetcher().fetch_text(&format!("{base}/latest"));

        assert!(matches!(result, Err(UpdateError::HttpStatus { status: 404, .. })));
        server.join().unwrap();
    }

    #[test]
    fn test_fetch_connection_refused() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = fetcher().fetch_text(&format!("http://{addr}/latest"));
        let err = result.expect_err("nothing is listening");
        assert!(err.is_network());
    }

    #[test]
    fn test_download_writes_file() {
        let temp = TempDir::new().unwrap();
        let payload = vec![7u8; 200_000];
        let (base, server) = serve(vec![CannedResponse::ok(payload.clone())]);

        let report = fetcher()
            .download(
                &format!("{base}/download/v1/graphicPacks1.zip"),
                temp.path(),
                &mut NoopProgress,
            )
            .unwrap();

        assert_eq!(report.file_name, "graphicPacks1.zip");
        assert_eq!(report.bytes_written, 200_000);
        assert_eq!(report.path, temp.path().join("graphicPacks1.zip"));
        assert_eq!(fs::read(&report.path).unwrap(), payload);
        server.join().unwrap();

        let leftovers: Vec<_> = fs::read_dir(temp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(leftovers.len(), 1, "no partial file left: {leftovers:?}");
    }

    #[test]
    fn test_download_error_status_leaves_nothing() {
        let temp = TempDir::new().unwrap();
        let (base, server) = serve(vec![CannedResponse::status(500)]);

        let result = fetcher().download(
            &format!("{base}/download/v1/graphicPacks1.zip"),
            temp.path(),
            &mut NoopProgress,
        );

        assert!(matches!(result, Err(UpdateError::HttpStatus { status: 500, .. })));
        assert!(!temp.path().join("graphicPacks1.zip").exists());
        server.join().unwrap();
    }

    #[test]
    fn test_download_without_file_name() {
        let temp = TempDir::new().unwrap();
        let result = fetcher().download("http://127.0.0.1:1/", temp.path(), &mut NoopProgress);
        assert!(matches!(result, Err(UpdateError::Io(_))));
    }
}
