use std::{thread, time::{Duration, Instant}};

use reqwest::blocking::{multipart::{Form, Part}, RequestBuilder};
use serde::de::{DeserializeOwned, IgnoredAny};
use tracing::{debug, info, warn};
use url::Url;

use crate::{
    consts::{NAME, VERSION},
    conversion::Conversion,
    download::{download_output, Destination},
    dtos::{ApiKeyDto, CreateConversionDto, ListConversionsDto},
    error::{ConvertioError, Result},
    models::{Balance, ConversionStatus, ConversionSummary, CreatedConversion, Envelope, Step},
    settings::ClientSettings,
    source::{ConvertOptions, Source, Upload},
    util::{mime::get_content_type, routes},
};

/// Authenticated handle on the conversion API.
///
/// Holds nothing but the credential and connection settings, so clones can be
/// moved to other threads freely. All calls block the current thread.
#[derive(Clone)]
pub struct Client {
    api_key: String,
    api_host: Url,
    poll_interval: Duration,
    http: reqwest::blocking::Client,
}

impl Client {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::build(ClientSettings::new(api_key))
    }

    pub fn from_env() -> Result<Self> {
        Self::build(ClientSettings::from_env()?)
    }

    pub fn build(settings: ClientSettings) -> Result<Self> {
        let api_host = Url::parse(&settings.api_host)?;
        let http = reqwest::blocking::Client::builder()
            .user_agent(format!("{}/{}", NAME, VERSION))
            .timeout(settings.request_timeout)
            .build()?;
        Ok(Client {
            api_key: settings.api_key,
            api_host,
            poll_interval: settings.poll_interval,
            http,
        })
    }

    /// Handle on a job created earlier, e.g. one returned by [`Client::list_conversions`].
    pub fn conversion(&self, conversion_id: impl Into<String>) -> Conversion<'_> {
        Conversion::new(self, conversion_id.into())
    }

    fn request<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send()?.error_for_status()?;
        let envelope: Envelope = response.json()?;
        envelope.into_data()
    }

    #[tracing::instrument(skip(self))]
    pub fn get_balance(&self) -> Result<f64> {
        let body = ApiKeyDto { apikey: &self.api_key };
        let balance: Balance = self.request(self.http.post(routes::balance_route(&self.api_host)?).json(&body))?;
        Ok(balance.minutes_left)
    }

    /// Starts converting `source` to `output_format`.
    ///
    /// URL sources are fetched by the service. Local files and readers are
    /// uploaded in a second request once the job exists; if that upload fails
    /// the job stays on the service without input and the error is returned.
    #[tracing::instrument(skip(self, source, options))]
    pub fn convert(&self, source: impl Into<Source>, output_format: &str, options: ConvertOptions) -> Result<Conversion<'_>> {
        let prepared = source.into().prepare(options.filename.as_deref())?;
        let body = CreateConversionDto {
            apikey: &self.api_key,
            outputformat: output_format,
            input: prepared.input,
            file: prepared.file.as_deref(),
            filename: &prepared.filename,
            options: if options.options.is_empty() { None } else { Some(&options.options) },
        };
        let created: CreatedConversion = self.request(self.http.post(routes::convert_route(&self.api_host)?).json(&body))?;
        info!("Created conversion {} of '{}' to {}", &created.id, &prepared.filename, output_format);

        if let Some(upload) = prepared.upload {
            self.upload(&created.id, &prepared.filename, upload)?;
        }
        Ok(Conversion::new(self, created.id))
    }

    fn upload(&self, conversion_id: &str, filename: &str, upload: Upload) -> Result<()> {
        let part = match upload.length {
            Some(length) => Part::reader_with_length(upload.reader, length),
            None => Part::reader(upload.reader),
        };
        let part = part.file_name(filename.to_string()).mime_str(get_content_type(filename).as_ref())?;
        let form = Form::new().part(filename.to_string(), part);
        info!("Uploading '{}' for conversion {}", filename, conversion_id);
        self.request::<IgnoredAny>(self.http.put(routes::upload_route(&self.api_host, conversion_id, filename)?).multipart(form))?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub fn list_conversions(&self, count: u32, status: &str) -> Result<Vec<ConversionSummary>> {
        let body = ListConversionsDto { apikey: &self.api_key, count, status };
        self.request(self.http.post(routes::list_route(&self.api_host)?).json(&body))
    }

    pub fn get_status(&self, conversion_id: &str) -> Result<ConversionStatus> {
        self.request(self.http.get(routes::status_route(&self.api_host, conversion_id)?))
    }

    #[tracing::instrument(skip(self))]
    pub fn delete(&self, conversion_id: &str) -> Result<()> {
        self.request::<IgnoredAny>(self.http.delete(routes::conversion_route(&self.api_host, conversion_id)?))?;
        info!("Deleted conversion {}", conversion_id);
        Ok(())
    }

    /// Polls until the job reaches the `finish` step.
    ///
    /// `None` waits without bound. Any other step, `failed` included, counts as
    /// not ready yet; a failed job therefore runs into the timeout.
    #[tracing::instrument(skip(self))]
    pub fn wait(&self, conversion_id: &str, timeout: Option<Duration>) -> Result<()> {
        let start = Instant::now();
        if self.is_finished(conversion_id)? {
            return Ok(());
        }
        loop {
            thread::sleep(self.poll_interval);
            if self.is_finished(conversion_id)? {
                return Ok(());
            }
            if let Some(timeout) = timeout {
                let waited = start.elapsed();
                if waited >= timeout {
                    return Err(ConvertioError::Timeout { id: conversion_id.to_string(), waited });
                }
            }
        }
    }

    fn is_finished(&self, conversion_id: &str) -> Result<bool> {
        let status = self.get_status(conversion_id)?;
        debug!("Conversion {} is at step {:?}", conversion_id, &status.step);
        if status.step == Step::Failed {
            warn!("Conversion {} reports the failed step", conversion_id);
        }
        Ok(status.step.is_finished())
    }

    /// Waits for the job, then writes its output to `destination`.
    ///
    /// Without a destination the primary output lands in the working directory,
    /// named after the last segment of the output URL. A directory destination
    /// receives one file per listed output file, or the primary output.
    #[tracing::instrument(skip(self, destination), fields(destination = ?destination))]
    pub fn download(&self, conversion_id: &str, destination: Option<Destination<'_>>, timeout: Option<Duration>) -> Result<Conversion<'_>> {
        self.wait(conversion_id, timeout)?;
        let status = self.get_status(conversion_id)?;
        let output = status.output.ok_or_else(|| ConvertioError::MissingOutput(conversion_id.to_string()))?;
        download_output(&self.http, &output, destination, conversion_id)?;
        Ok(self.conversion(conversion_id))
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("api_key", &"<redacted>")
            .field("api_host", &self.api_host.as_str())
            .field("poll_interval", &self.poll_interval)
            .finish()
    }
}
