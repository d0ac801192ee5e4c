//! REDCap API client and operation surface
//!
//! [`RedcapClient`] owns the immutable configuration (endpoint URL and
//! project token) and a [`Transport`]. Every public operation is an
//! independent, stateless request/response unit: it resolves format
//! options, extracts filter token lists, assembles the payload and awaits
//! the single transport round trip. Concurrent calls on one client are
//! safe because no call mutates shared state.
//!
//! # Example
//!
//! ```rust,no_run
//! use redcap_client::client::RedcapClient;
//! use redcap_client::config::RedcapConfig;
//! use redcap_client::domain::ExportFormat;
//!
//! # async fn example() -> redcap_client::domain::Result<()> {
//! let config = RedcapConfig::new("https://redcap.example.org/api/", "ABC123");
//! let client = RedcapClient::new(config)?;
//!
//! let metadata = client
//!     .export_metadata(None, None, Some(ExportFormat::Csv), None)
//!     .await?;
//! println!("{metadata}");
//! # Ok(())
//! # }
//! ```

use crate::adapters::{HttpTransport, Transport};
use crate::config::RedcapConfig;
use crate::core::format::resolve_formats;
use crate::core::{extract, flatten, Payload, DEFAULT_DELIMITERS};
use crate::domain::{
    ArmOverride, DataShape, ExportFormat, ImportRecord, OverwriteBehavior, RedcapError, Result,
    ReturnContent, ReturnFormat,
};
use secrecy::ExposeSecret;
use serde::Serialize;
use std::sync::Arc;

/// Async client for one REDCap project
///
/// The client is cheap to share behind an `Arc`; all operations take
/// `&self`.
pub struct RedcapClient {
    config: RedcapConfig,
    transport: Arc<dyn Transport>,
}

impl RedcapClient {
    /// Create a client with the default HTTP transport
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP
    /// client cannot be built.
    pub fn new(config: RedcapConfig) -> Result<Self> {
        config
            .validate()
            .map_err(RedcapError::Configuration)?;

        let transport = Arc::new(HttpTransport::new(&config)?);
        Ok(Self { config, transport })
    }

    /// Create a client with a caller-supplied transport
    ///
    /// Used by tests to capture the assembled form body without a
    /// network round trip.
    pub fn with_transport(config: RedcapConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    /// The configured API endpoint URL
    pub fn api_url(&self) -> &str {
        &self.config.api_url
    }

    fn token(&self) -> &str {
        self.config.token.expose_secret().as_ref()
    }

    /// Hand the assembled payload to the transport
    async fn execute(&self, payload: Payload) -> Result<String> {
        tracing::debug!(
            content = payload.get("content").unwrap_or("?"),
            params = payload.pairs().len(),
            "Executing REDCap API request"
        );
        self.transport.post(payload.pairs()).await
    }

    // ---- version ----------------------------------------------------

    /// Export the REDCap instance version (`content=version`)
    ///
    /// The response body is the bare version string, e.g. `11.1.5`.
    pub async fn export_version(
        &self,
        format: Option<ExportFormat>,
        data_shape: Option<DataShape>,
    ) -> Result<String> {
        let resolved = resolve_formats(format, None, data_shape);

        let mut payload = Payload::new(self.token(), "version");
        payload
            .set("format", resolved.format)
            .set("type", resolved.data_shape);

        self.execute(payload).await
    }

    // ---- metadata ---------------------------------------------------

    /// Export the project's data dictionary (`content=metadata`)
    ///
    /// `fields` and `forms` are delimiter-separated filter strings; each
    /// is attached only when it yields at least one token.
    pub async fn export_metadata(
        &self,
        fields: Option<&str>,
        forms: Option<&str>,
        format: Option<ExportFormat>,
        return_format: Option<ReturnFormat>,
    ) -> Result<String> {
        let resolved = resolve_formats(format, return_format, None);
        let fields = extract(fields, DEFAULT_DELIMITERS);
        let forms = extract(forms, DEFAULT_DELIMITERS);

        let mut payload = Payload::new(self.token(), "metadata");
        payload
            .set("format", resolved.format)
            .set("returnFormat", resolved.return_format)
            .set_tokens("fields", &fields)
            .set_tokens("forms", &forms);

        self.execute(payload).await
    }

    // ---- records ----------------------------------------------------

    /// Export every record in the project (`content=record`)
    ///
    /// Unlike [`export_records`](Self::export_records) no record
    /// identifiers are required; `fields`, `forms` and `events` filters
    /// remain optional.
    pub async fn export_all_records(
        &self,
        fields: Option<&str>,
        forms: Option<&str>,
        events: Option<&str>,
        format: Option<ExportFormat>,
        data_shape: Option<DataShape>,
        return_format: Option<ReturnFormat>,
    ) -> Result<String> {
        let resolved = resolve_formats(format, return_format, data_shape);
        let fields = extract(fields, DEFAULT_DELIMITERS);
        let forms = extract(forms, DEFAULT_DELIMITERS);
        let events = extract(events, DEFAULT_DELIMITERS);

        let mut payload = Payload::new(self.token(), "record");
        payload
            .set("format", resolved.format)
            .set("type", resolved.data_shape)
            .set("returnFormat", resolved.return_format)
            .set_tokens("fields", &fields)
            .set_tokens("forms", &forms)
            .set_tokens("events", &events);

        self.execute(payload).await
    }

    /// Export specific records (`content=record`)
    ///
    /// `records` must yield at least one identifier after extraction with
    /// `delimiters` (comma and space when `None`).
    ///
    /// # Errors
    ///
    /// Returns [`RedcapError::MissingRequired`] without invoking the
    /// transport when no record identifier can be extracted.
    #[allow(clippy::too_many_arguments)]
    pub async fn export_records(
        &self,
        records: &str,
        fields: Option<&str>,
        forms: Option<&str>,
        events: Option<&str>,
        format: Option<ExportFormat>,
        data_shape: Option<DataShape>,
        return_format: Option<ReturnFormat>,
        delimiters: Option<&[char]>,
    ) -> Result<String> {
        let delimiters = delimiters.unwrap_or(DEFAULT_DELIMITERS);
        let records = extract(Some(records), delimiters);
        if records.is_empty() {
            tracing::error!("Record export called without record identifiers");
            return Err(RedcapError::MissingRequired("record identifiers"));
        }

        let resolved = resolve_formats(format, return_format, data_shape);
        let fields = extract(fields, DEFAULT_DELIMITERS);
        let forms = extract(forms, DEFAULT_DELIMITERS);
        let events = extract(events, DEFAULT_DELIMITERS);

        let mut payload = Payload::new(self.token(), "record");
        payload
            .set("format", resolved.format)
            .set("type", resolved.data_shape)
            .set("returnFormat", resolved.return_format)
            .set_tokens("records", &records)
            .set_tokens("fields", &fields)
            .set_tokens("forms", &forms)
            .set_tokens("events", &events);

        self.execute(payload).await
    }

    /// Import records (`content=record`)
    ///
    /// `data` is serialized as-is into the `data` wire parameter.
    /// Supplying `data` is what makes this an import on the wire; no
    /// `action` key is sent.
    ///
    /// # Errors
    ///
    /// Returns [`RedcapError::MissingRequired`] without invoking the
    /// transport when `data` is empty, and
    /// [`RedcapError::Serialization`] when it cannot be serialized.
    #[allow(clippy::too_many_arguments)]
    pub async fn import_records<T: Serialize>(
        &self,
        data: &[T],
        format: Option<ExportFormat>,
        data_shape: Option<DataShape>,
        overwrite_behavior: Option<OverwriteBehavior>,
        return_content: Option<ReturnContent>,
        date_format: Option<&str>,
        return_format: Option<ReturnFormat>,
    ) -> Result<String> {
        if data.is_empty() {
            tracing::error!("Record import called without records");
            return Err(RedcapError::MissingRequired("records to import"));
        }

        let serialized = serde_json::to_string(data)?;
        self.import_records_payload(
            serialized,
            format,
            data_shape,
            overwrite_behavior,
            return_content,
            date_format,
            return_format,
        )
        .await
    }

    /// Import one record through its field-descriptor table
    ///
    /// The record is flattened into a field map (lower-cased names,
    /// explicit blanks kept as nulls) before serialization into the
    /// `data` parameter.
    #[allow(clippy::too_many_arguments)]
    pub async fn import_record_flat<T: ImportRecord>(
        &self,
        record: &T,
        format: Option<ExportFormat>,
        data_shape: Option<DataShape>,
        overwrite_behavior: Option<OverwriteBehavior>,
        return_content: Option<ReturnContent>,
        date_format: Option<&str>,
        return_format: Option<ReturnFormat>,
    ) -> Result<String> {
        let map = flatten(Some(record));
        if map.is_empty() {
            tracing::error!("Record import called with an empty field table");
            return Err(RedcapError::MissingRequired("records to import"));
        }

        let serialized = serde_json::to_string(&[map])?;
        self.import_records_payload(
            serialized,
            format,
            data_shape,
            overwrite_behavior,
            return_content,
            date_format,
            return_format,
        )
        .await
    }

    #[allow(clippy::too_many_arguments)]
    async fn import_records_payload(
        &self,
        data: String,
        format: Option<ExportFormat>,
        data_shape: Option<DataShape>,
        overwrite_behavior: Option<OverwriteBehavior>,
        return_content: Option<ReturnContent>,
        date_format: Option<&str>,
        return_format: Option<ReturnFormat>,
    ) -> Result<String> {
        let resolved = resolve_formats(format, return_format, data_shape);

        let mut payload = Payload::new(self.token(), "record");
        payload
            .set("format", resolved.format)
            .set("type", resolved.data_shape)
            .set("returnFormat", resolved.return_format)
            .set(
                "returnContent",
                return_content.unwrap_or_default().as_str(),
            )
            .set("data", data);

        // Attached only when the caller asked for them
        if let Some(behavior) = overwrite_behavior {
            payload.set("overwriteBehavior", behavior.as_str());
        }
        payload.set_optional("dateFormat", date_format);

        self.execute(payload).await
    }

    // ---- events -----------------------------------------------------

    /// Export events for a longitudinal project (`content=event`)
    pub async fn export_events(
        &self,
        arms: Option<&str>,
        format: Option<ExportFormat>,
        return_format: Option<ReturnFormat>,
    ) -> Result<String> {
        let resolved = resolve_formats(format, return_format, None);
        let arms = extract(arms, DEFAULT_DELIMITERS);

        let mut payload = Payload::new(self.token(), "event");
        payload
            .set("format", resolved.format)
            .set("returnFormat", resolved.return_format)
            .set_tokens("arms", &arms);

        self.execute(payload).await
    }

    // ---- arms -------------------------------------------------------

    /// Export arms (`content=arm`)
    pub async fn export_arms(
        &self,
        arms: Option<&str>,
        format: Option<ExportFormat>,
        return_format: Option<ReturnFormat>,
    ) -> Result<String> {
        let resolved = resolve_formats(format, return_format, None);
        let arms = extract(arms, DEFAULT_DELIMITERS);

        let mut payload = Payload::new(self.token(), "arm");
        payload
            .set("format", resolved.format)
            .set("returnFormat", resolved.return_format)
            .set_tokens("arms", &arms);

        self.execute(payload).await
    }

    /// Import arms (`content=arm`, `action=import`)
    ///
    /// # Errors
    ///
    /// Returns [`RedcapError::MissingRequired`] without invoking the
    /// transport when `data` is empty.
    pub async fn import_arms<T: Serialize>(
        &self,
        data: &[T],
        override_existing: Option<ArmOverride>,
        format: Option<ExportFormat>,
        return_format: Option<ReturnFormat>,
    ) -> Result<String> {
        if data.is_empty() {
            tracing::error!("Arm import called without arms");
            return Err(RedcapError::MissingRequired("arms to import"));
        }

        let resolved = resolve_formats(format, return_format, None);
        let serialized = serde_json::to_string(data)?;

        let mut payload = Payload::new(self.token(), "arm");
        payload
            .set("action", "import")
            .set("format", resolved.format)
            .set("returnFormat", resolved.return_format)
            .set("data", serialized);

        if let Some(override_existing) = override_existing {
            payload.set("override", override_existing.as_str());
        }

        self.execute(payload).await
    }

    /// Delete arms (`content=arm`, `action=delete`)
    ///
    /// `arms` is a delimiter-separated list of arm numbers and must yield
    /// at least one token.
    pub async fn delete_arms(&self, arms: &str) -> Result<String> {
        let arms = extract(Some(arms), DEFAULT_DELIMITERS);
        if arms.is_empty() {
            tracing::error!("Arm delete called without arm numbers");
            return Err(RedcapError::MissingRequired("arm numbers"));
        }

        let mut payload = Payload::new(self.token(), "arm");
        payload.set("action", "delete").set_tokens("arms", &arms);

        self.execute(payload).await
    }

    // ---- users ------------------------------------------------------

    /// Export the project's users (`content=user`)
    pub async fn export_users(
        &self,
        format: Option<ExportFormat>,
        return_format: Option<ReturnFormat>,
    ) -> Result<String> {
        let resolved = resolve_formats(format, return_format, None);

        let mut payload = Payload::new(self.token(), "user");
        payload
            .set("format", resolved.format)
            .set("returnFormat", resolved.return_format);

        self.execute(payload).await
    }

    // ---- declared but unimplemented operations ----------------------
    //
    // These are part of the REDCap API surface but not implemented by
    // this client. Each fails immediately and deterministically; a
    // caller must never mistake missing functionality for an empty
    // response body.

    /// Rename an arm. Not implemented.
    pub async fn rename_arms(&self) -> Result<String> {
        Err(RedcapError::Unsupported("rename_arms"))
    }

    /// Export a file field's contents. Not implemented.
    pub async fn export_file(&self) -> Result<String> {
        Err(RedcapError::Unsupported("export_file"))
    }

    /// Upload a file field's contents. Not implemented.
    pub async fn import_file(&self) -> Result<String> {
        Err(RedcapError::Unsupported("import_file"))
    }

    /// Delete a file field's contents. Not implemented.
    pub async fn delete_file(&self) -> Result<String> {
        Err(RedcapError::Unsupported("delete_file"))
    }

    /// Export the project's instruments. Not implemented.
    pub async fn export_instruments(&self) -> Result<String> {
        Err(RedcapError::Unsupported("export_instruments"))
    }

    /// Export a participant's survey link. Not implemented.
    pub async fn export_survey_link(&self) -> Result<String> {
        Err(RedcapError::Unsupported("export_survey_link"))
    }

    /// Create a new project. Not implemented.
    pub async fn create_project(&self) -> Result<String> {
        Err(RedcapError::Unsupported("create_project"))
    }

    /// Export project info. Not implemented.
    pub async fn export_project_info(&self) -> Result<String> {
        Err(RedcapError::Unsupported("export_project_info"))
    }

    /// Import users into the project. Not implemented.
    pub async fn import_users(&self) -> Result<String> {
        Err(RedcapError::Unsupported("import_users"))
    }

    /// Generate the next auto-numbered record name. Not implemented.
    pub async fn generate_next_record_name(&self) -> Result<String> {
        Err(RedcapError::Unsupported("generate_next_record_name"))
    }
}
