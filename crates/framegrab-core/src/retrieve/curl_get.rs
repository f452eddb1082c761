//! Blocking HTTP GET via libcurl (the `curl` crate).
//!
//! Every request sends `Cache-Control: no-cache` and `Pragma: no-cache`.
//! The cookie engine is never enabled.

use super::{temp_path, RetrieveError, Retriever};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

/// Request options shared by every transfer of one retriever.
#[derive(Debug, Clone)]
pub struct CurlOptions {
    /// `User-Agent` header; libcurl sends none when unset.
    pub user_agent: Option<String>,
    /// Connect timeout. There is no total transfer timeout.
    pub connect_timeout: Duration,
}

impl Default for CurlOptions {
    fn default() -> Self {
        Self {
            user_agent: None,
            connect_timeout: Duration::from_secs(30),
        }
    }
}

/// [`Retriever`] backed by a fresh curl `Easy` handle per request.
#[derive(Debug, Clone, Default)]
pub struct CurlRetriever {
    options: CurlOptions,
}

impl CurlRetriever {
    pub fn new(options: CurlOptions) -> Self {
        Self { options }
    }

    /// Runs the GET, streaming the body into `file`. Returns bytes written.
    fn get_into(&self, url: &str, file: &mut File) -> Result<u64, RetrieveError> {
        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.connect_timeout(self.options.connect_timeout)?;
        if let Some(ua) = &self.options.user_agent {
            easy.useragent(ua)?;
        }

        let mut list = curl::easy::List::new();
        list.append("Cache-Control: no-cache")?;
        list.append("Pragma: no-cache")?;
        easy.http_headers(list)?;

        let mut written = 0u64;
        let mut write_err: Option<io::Error> = None;
        let performed = {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| match file.write_all(data) {
                Ok(()) => {
                    written += data.len() as u64;
                    Ok(data.len())
                }
                Err(e) => {
                    write_err = Some(e);
                    Ok(0) // abort transfer
                }
            })?;
            transfer.perform()
        };

        if let Some(e) = write_err {
            return Err(RetrieveError::Storage(e));
        }
        performed?;

        let code = easy.response_code()?;
        if !(200..300).contains(&code) {
            return Err(RetrieveError::Http(code));
        }
        file.flush().map_err(RetrieveError::Storage)?;
        Ok(written)
    }
}

impl Retriever for CurlRetriever {
    fn fetch_to_path(&self, url: &str, dest: &Path) -> Result<u64, RetrieveError> {
        let part = temp_path(dest);
        let mut file = File::create(&part).map_err(RetrieveError::Storage)?;

        match self.get_into(url, &mut file) {
            Ok(n) => {
                drop(file);
                fs::rename(&part, dest).map_err(RetrieveError::Storage)?;
                tracing::debug!(url, bytes = n, path = %dest.display(), "retrieved");
                Ok(n)
            }
            Err(e) => {
                drop(file);
                if let Err(rm) = fs::remove_file(&part) {
                    tracing::debug!("could not remove {}: {}", part.display(), rm);
                }
                Err(e)
            }
        }
    }
}
