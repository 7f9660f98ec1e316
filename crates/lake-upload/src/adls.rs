//! Azure Data Lake Storage Gen2 uploader using the DFS REST endpoint

use crate::Uploader;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::CONTENT_LENGTH;
use reqwest::{Method, RequestBuilder, Url};
use std::path::Path;

/// REST API version sent with every request
const STORAGE_API_VERSION: &str = "2023-11-03";

/// Uploads files into one container of a storage account, authorised by a
/// SAS token.
///
/// A file is uploaded in three calls:
/// 1. `PUT ?resource=file` creates (or truncates) the path
/// 2. `PATCH ?action=append&position=0` sends the content
/// 3. `PATCH ?action=flush&position=<len>` commits it
pub struct AdlsUploader {
    client: reqwest::Client,
    endpoint: Url,
    container: String,
    sas_token: String,
}

impl AdlsUploader {
    /// Create an uploader for `https://<account_name>.dfs.core.windows.net`.
    ///
    /// The SAS token may be given with or without its leading `?`.
    pub fn new(account_name: &str, container: impl Into<String>, sas_token: &str) -> Result<Self> {
        let endpoint = Url::parse(&format!("https://{account_name}.dfs.core.windows.net"))
            .with_context(|| format!("Invalid storage account name: {account_name}"))?;

        Ok(Self {
            client: reqwest::Client::new(),
            endpoint,
            container: container.into(),
            sas_token: sas_token.trim_start_matches('?').to_string(),
        })
    }

    /// Use a different service endpoint, e.g. an emulator or test server.
    pub fn with_endpoint(mut self, endpoint: &str) -> Result<Self> {
        self.endpoint =
            Url::parse(endpoint).with_context(|| format!("Invalid endpoint URL: {endpoint}"))?;
        Ok(self)
    }

    /// URL of `directory/file_name` with the SAS token and `params` as query.
    fn file_url(&self, directory: &str, file_name: &str, params: &[(&str, &str)]) -> Result<Url> {
        let mut url = self.endpoint.clone();

        url.path_segments_mut()
            .map_err(|_| anyhow::anyhow!("Endpoint cannot be a base URL: {}", self.endpoint))?
            .pop_if_empty()
            .push(&self.container)
            .push(directory)
            .push(file_name);

        if !self.sas_token.is_empty() {
            url.set_query(Some(&self.sas_token));
        }
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }

        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.client
            .request(method, url)
            .header("x-ms-version", STORAGE_API_VERSION)
    }

    /// Send a request and fail on any non-success status.
    async fn send(&self, request: RequestBuilder, operation: &str, remote_path: &str) -> Result<()> {
        let response = request
            .send()
            .await
            .with_context(|| format!("Failed to {operation} {remote_path}"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("ADLS {operation} failed with status {status} for {remote_path}: {body}");
        }

        tracing::debug!("ADLS {} {} -> {}", operation, remote_path, status);
        Ok(())
    }
}

#[async_trait]
impl Uploader for AdlsUploader {
    async fn upload(&self, directory: &str, file_name: &str, local_path: &Path) -> Result<()> {
        let data = tokio::fs::read(local_path)
            .await
            .with_context(|| format!("Failed to read file: {}", local_path.display()))?;
        let length = data.len().to_string();
        let remote_path = format!("{}/{directory}/{file_name}", self.container);

        // Creating without If-None-Match overwrites an existing file
        let create = self.file_url(directory, file_name, &[("resource", "file")])?;
        self.send(
            self.request(Method::PUT, create).header(CONTENT_LENGTH, 0),
            "create",
            &remote_path,
        )
        .await?;

        if !data.is_empty() {
            let append = self.file_url(
                directory,
                file_name,
                &[("action", "append"), ("position", "0")],
            )?;
            self.send(
                self.request(Method::PATCH, append).body(data),
                "append",
                &remote_path,
            )
            .await?;
        }

        let flush = self.file_url(
            directory,
            file_name,
            &[("action", "flush"), ("position", length.as_str())],
        )?;
        self.send(
            self.request(Method::PATCH, flush).header(CONTENT_LENGTH, 0),
            "flush",
            &remote_path,
        )
        .await?;

        tracing::info!("Uploaded {} bytes to {}", length, remote_path);
        Ok(())
    }

    fn describe(&self) -> String {
        format!(
            "adls {}/{}",
            self.endpoint.as_str().trim_end_matches('/'),
            self.container
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uploader(sas: &str) -> AdlsUploader {
        AdlsUploader::new("salesacct", "landing", sas).unwrap()
    }

    #[test]
    fn test_default_endpoint() {
        let url = uploader("sv=2022&sig=abc")
            .file_url("north", "North_Sales_2024-03-07.csv", &[("resource", "file")])
            .unwrap();

        assert_eq!(
            url.as_str(),
            "https://salesacct.dfs.core.windows.net/landing/north/North_Sales_2024-03-07.csv?sv=2022&sig=abc&resource=file"
        );
    }

    #[test]
    fn test_leading_question_mark_stripped() {
        let url = uploader("?sv=2022&sig=abc")
            .file_url("south", "a.csv", &[])
            .unwrap();
        assert_eq!(url.query(), Some("sv=2022&sig=abc"));
    }

    #[test]
    fn test_empty_sas_token() {
        let url = uploader("")
            .file_url("west", "a.csv", &[("action", "flush"), ("position", "10")])
            .unwrap();
        assert_eq!(url.query(), Some("action=flush&position=10"));
    }

    #[test]
    fn test_custom_endpoint() {
        let url = uploader("sig=x")
            .with_endpoint("http://127.0.0.1:10000/devaccount")
            .unwrap()
            .file_url("north", "a.csv", &[])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:10000/devaccount/landing/north/a.csv?sig=x"
        );
    }

    #[test]
    fn test_file_name_is_escaped() {
        let url = uploader("").file_url("north", "a b.csv", &[]).unwrap();
        assert_eq!(url.path(), "/landing/north/a%20b.csv");
    }

    #[test]
    fn test_invalid_endpoint() {
        assert!(uploader("").with_endpoint("not a url").is_err());
    }

    #[test]
    fn test_describe_hides_token() {
        let description = uploader("sig=secret").describe();
        assert!(!description.contains("secret"));
        assert!(description.contains("landing"));
    }
}
