use crate::dns::{RecordOperation, validate_record};
use crate::error::{RegistrarError, RegistrarResult};
use crate::models::{Credentials, Environment, Params, endpoints};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;

/// Timeout applied to every request unless overridden
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Internet.bs API client
///
/// Every operation sends exactly one GET request. Operations with a boolean
/// form report upstream failures as `false`; their `_raw` twins hand back the
/// decoded JSON untouched.
#[derive(Clone)]
pub struct InternetBsClient {
    pub(crate) client: Client,
    base_url: String,
    credentials: Credentials,
    environment: Environment,
}

impl InternetBsClient {
    /// Create a client from optional credentials.
    ///
    /// Unless both key and password are given, the sandbox pair and sandbox
    /// endpoint are used.
    pub fn new(api_key: Option<&str>, password: Option<&str>) -> RegistrarResult<Self> {
        let (credentials, environment) = Credentials::resolve(api_key, password);
        if environment == Environment::Sandbox {
            tracing::info!("No complete credentials supplied, using Internet.bs sandbox");
        }

        Ok(Self {
            client: build_http_client(DEFAULT_TIMEOUT)?,
            base_url: environment.base_url().to_string(),
            credentials,
            environment,
        })
    }

    /// Create with custom base URL
    pub fn with_url(credentials: Credentials, base_url: impl Into<String>) -> RegistrarResult<Self> {
        let environment = if credentials == Credentials::sandbox() {
            Environment::Sandbox
        } else {
            Environment::Production
        };
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self {
            client: build_http_client(DEFAULT_TIMEOUT)?,
            base_url,
            credentials,
            environment,
        })
    }

    /// Replace the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> RegistrarResult<Self> {
        self.client = build_http_client(timeout)?;
        Ok(self)
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Send one GET request and decode the JSON body.
    ///
    /// Later entries win: format marker, credentials, then `params`.
    async fn get(&self, endpoint: &str, params: Params) -> RegistrarResult<Value> {
        let mut full_params = Params::new();
        full_params.insert("ResponseFormat".to_string(), "JSON".to_string());
        full_params.insert("ApiKey".to_string(), self.credentials.api_key.clone());
        full_params.insert("Password".to_string(), self.credentials.password.clone());
        full_params.extend(params);

        let url = format!("{}{}", self.base_url, endpoint);

        tracing::debug!(
            "Querying Internet.bs: {} with {:?}",
            endpoint,
            full_params.keys().collect::<Vec<_>>()
        );

        let response = self.client.get(&url).query(&full_params).send().await?;
        let status = response.status();

        tracing::debug!("Internet.bs {} responded {}", endpoint, status);

        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Internet.bs {} failed with HTTP {}", endpoint, status);
            return Err(RegistrarError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Check whether a domain can be registered. Costs nothing.
    pub async fn domain_check(&self, domain: &str) -> RegistrarResult<bool> {
        let response = self.domain_check_raw(domain).await?;
        Ok(status_is(&response, "AVAILABLE"))
    }

    pub async fn domain_check_raw(&self, domain: &str) -> RegistrarResult<Value> {
        self.get(endpoints::DOMAIN_CHECK, domain_params(domain, None, None))
            .await
    }

    /// Register a new domain
    pub async fn domain_create(
        &self,
        domain: &str,
        contact_info: &Params,
        extra: &Params,
    ) -> RegistrarResult<bool> {
        let response = self.domain_create_raw(domain, contact_info, extra).await?;
        Ok(product_succeeded(&response))
    }

    pub async fn domain_create_raw(
        &self,
        domain: &str,
        contact_info: &Params,
        extra: &Params,
    ) -> RegistrarResult<Value> {
        self.get(
            endpoints::DOMAIN_CREATE,
            domain_params(domain, Some(contact_info), Some(extra)),
        )
        .await
    }

    /// Update a domain's contacts, locks, auth info, name servers and so on.
    ///
    /// Takes the same parameters as [`domain_create`](Self::domain_create) but
    /// only the domain is mandatory.
    pub async fn domain_update(
        &self,
        domain: &str,
        contact_info: &Params,
        extra: &Params,
    ) -> RegistrarResult<bool> {
        let response = self.domain_update_raw(domain, contact_info, extra).await?;
        Ok(product_succeeded(&response))
    }

    pub async fn domain_update_raw(
        &self,
        domain: &str,
        contact_info: &Params,
        extra: &Params,
    ) -> RegistrarResult<Value> {
        self.get(
            endpoints::DOMAIN_UPDATE,
            domain_params(domain, Some(contact_info), Some(extra)),
        )
        .await
    }

    /// Full details of a domain: contacts, lock status, name servers
    pub async fn domain_info(&self, domain: &str) -> RegistrarResult<Value> {
        self.get(endpoints::DOMAIN_INFO, domain_params(domain, None, None))
            .await
    }

    /// Create a host (name server) under the registry of its parent domain
    pub async fn host_create(&self, host: &str, ip_list: &[&str]) -> RegistrarResult<bool> {
        let response = self.host_create_raw(host, ip_list).await?;
        Ok(status_is(&response, "SUCCESS"))
    }

    pub async fn host_create_raw(&self, host: &str, ip_list: &[&str]) -> RegistrarResult<Value> {
        self.get(endpoints::HOST_CREATE, host_params(host, Some(ip_list)))
            .await
    }

    pub async fn host_info(&self, host: &str) -> RegistrarResult<Value> {
        self.get(endpoints::HOST_INFO, host_params(host, None)).await
    }

    /// Delete a host. The registrar refuses while any domain still uses it.
    pub async fn host_delete(&self, host: &str) -> RegistrarResult<Value> {
        self.get(endpoints::HOST_DELETE, host_params(host, None))
            .await
    }

    /// Replace the IP addresses of an existing host
    pub async fn host_update(&self, host: &str, ip_list: &[&str]) -> RegistrarResult<bool> {
        let response = self.host_update_raw(host, ip_list).await?;
        Ok(status_is(&response, "SUCCESS"))
    }

    pub async fn host_update_raw(&self, host: &str, ip_list: &[&str]) -> RegistrarResult<Value> {
        self.get(endpoints::HOST_UPDATE, host_params(host, Some(ip_list)))
            .await
    }

    /// Add a DNS record to a zone.
    ///
    /// DYNAMIC records need `DynDnsLogin` and `DynDnsPassword` in `extra`;
    /// every other type needs a value.
    pub async fn dns_add(
        &self,
        full_record_name: &str,
        record_type: &str,
        value: Option<&str>,
        extra: &Params,
    ) -> RegistrarResult<bool> {
        let response = self
            .dns_add_raw(full_record_name, record_type, value, extra)
            .await?;
        Ok(status_is(&response, "SUCCESS"))
    }

    pub async fn dns_add_raw(
        &self,
        full_record_name: &str,
        record_type: &str,
        value: Option<&str>,
        extra: &Params,
    ) -> RegistrarResult<Value> {
        let params = dns_params(
            RecordOperation::Add,
            full_record_name,
            record_type,
            value,
            extra,
        )?;
        self.get(endpoints::DNS_ADD, params).await
    }

    /// Remove DNS records.
    ///
    /// Without a value (or other disambiguating options) every record of the
    /// given type under the name is removed.
    pub async fn dns_remove(
        &self,
        full_record_name: &str,
        record_type: &str,
        value: Option<&str>,
        extra: &Params,
    ) -> RegistrarResult<bool> {
        let response = self
            .dns_remove_raw(full_record_name, record_type, value, extra)
            .await?;
        Ok(status_is(&response, "SUCCESS"))
    }

    pub async fn dns_remove_raw(
        &self,
        full_record_name: &str,
        record_type: &str,
        value: Option<&str>,
        extra: &Params,
    ) -> RegistrarResult<Value> {
        let params = dns_params(
            RecordOperation::Remove,
            full_record_name,
            record_type,
            value,
            extra,
        )?;
        self.get(endpoints::DNS_REMOVE, params).await
    }

    /// Update an existing DNS record. Pass as many options as possible when
    /// several records share a name, or the wrong one may change.
    pub async fn dns_update(
        &self,
        full_record_name: &str,
        record_type: &str,
        value: Option<&str>,
        extra: &Params,
    ) -> RegistrarResult<bool> {
        let response = self
            .dns_update_raw(full_record_name, record_type, value, extra)
            .await?;
        Ok(status_is(&response, "SUCCESS"))
    }

    pub async fn dns_update_raw(
        &self,
        full_record_name: &str,
        record_type: &str,
        value: Option<&str>,
        extra: &Params,
    ) -> RegistrarResult<Value> {
        let params = dns_params(
            RecordOperation::Update,
            full_record_name,
            record_type,
            value,
            extra,
        )?;
        self.get(endpoints::DNS_UPDATE, params).await
    }
}

fn build_http_client(timeout: Duration) -> RegistrarResult<Client> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| RegistrarError::Internal(format!("Failed to build HTTP client: {}", e)))
}

fn status_is(response: &Value, expected: &str) -> bool {
    response.get("status").and_then(Value::as_str) == Some(expected)
}

fn product_succeeded(response: &Value) -> bool {
    response.pointer("/product/0/status").and_then(Value::as_str) == Some("SUCCESS")
}

fn domain_params(domain: &str, contact_info: Option<&Params>, extra: Option<&Params>) -> Params {
    let mut params = Params::new();
    params.insert("Domain".to_string(), domain.to_string());
    for map in [contact_info, extra].into_iter().flatten() {
        params.extend(map.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
    params
}

fn host_params(host: &str, ip_list: Option<&[&str]>) -> Params {
    let mut params = Params::new();
    params.insert("Host".to_string(), host.to_string());
    if let Some(ips) = ip_list {
        params.insert("IP_List".to_string(), ips.join(","));
    }
    params
}

fn dns_params(
    operation: RecordOperation,
    full_record_name: &str,
    record_type: &str,
    value: Option<&str>,
    extra: &Params,
) -> RegistrarResult<Params> {
    let record_type = validate_record(operation, record_type, value, extra)?;

    let mut params = Params::new();
    params.insert("FullRecordName".to_string(), full_record_name.to_string());
    params.insert("Type".to_string(), record_type.to_string());
    params.extend(extra.iter().map(|(k, v)| (k.clone(), v.clone())));

    if let Some(value) = value.filter(|v| !v.is_empty()) {
        params.insert("Value".to_string(), value.to_string());
    }

    Ok(params)
}
