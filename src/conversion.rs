use std::time::Duration;

use crate::{client::Client, download::Destination, error::Result, models::ConversionStatus};

/// A job on the service, identified by the id it was assigned on creation.
///
/// Dropping the handle leaves the remote job untouched; use [`Conversion::delete`].
#[derive(Debug, Clone)]
pub struct Conversion<'a> {
    id: String,
    client: &'a Client,
}

impl<'a> Conversion<'a> {
    pub(crate) fn new(client: &'a Client, id: String) -> Self {
        Conversion { id, client }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn get_status(&self) -> Result<ConversionStatus> {
        self.client.get_status(&self.id)
    }

    pub fn wait(&self, timeout: Option<Duration>) -> Result<&Self> {
        self.client.wait(&self.id, timeout)?;
        Ok(self)
    }

    pub fn download(&self, destination: Option<Destination<'_>>, timeout: Option<Duration>) -> Result<&Self> {
        self.client.download(&self.id, destination, timeout)?;
        Ok(self)
    }

    pub fn delete(&self) -> Result<()> {
        self.client.delete(&self.id)
    }
}
