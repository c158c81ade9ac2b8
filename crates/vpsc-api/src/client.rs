//! Asynchronous VPS API client.
//!
//! Every method is a pure declaration: it builds a [`RequestDescriptor`]
//! for one endpoint and hands it to the dispatcher matching the expected
//! response shape. No method catches or reinterprets dispatcher errors;
//! they propagate unchanged to the caller.

use reqwest::Method;
use vpsc_core::config::ApiConfig;
use vpsc_core::dispatch::{Dispatcher, HttpConfig, RequestDescriptor};
use vpsc_core::error::Result;

use crate::models::{
    ApiKey, CreateApiKey, CreateRole, CreateSwitch, Limitation, NfsServer, NfsServerPowerStatus,
    Permission, Ptr, Role, Server, ServerPowerStatus, ShutdownServer, Switch, UpdateApiKey,
    UpdateHost, UpdateNfsServer, UpdateNfsServerIpv4, UpdateRole, UpdateServer, UpdateSwitch,
};

/// Asynchronous client for the Sakura VPS cloud API.
///
/// Cheap to clone; all clones share one underlying HTTP transport.
#[derive(Clone)]
pub struct VpscClient {
    dispatcher: Dispatcher,
}

impl VpscClient {
    /// Create a client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the host URL is invalid or the
    /// HTTP transport cannot be built.
    pub fn new(config: ApiConfig) -> Result<Self> {
        Ok(Self {
            dispatcher: Dispatcher::new(config)?,
        })
    }

    /// Create a client with explicit transport settings.
    ///
    /// # Errors
    ///
    /// Same conditions as [`VpscClient::new`].
    pub fn with_http_config(config: ApiConfig, http_config: HttpConfig) -> Result<Self> {
        Ok(Self {
            dispatcher: Dispatcher::with_http_config(config, http_config)?,
        })
    }

    /// Create a client from the environment (`VPS_API_KEY`, `VPS_HOST`,
    /// `~/.vpsc`).
    ///
    /// # Errors
    ///
    /// Returns a configuration error when no API key can be resolved.
    pub fn from_env() -> Result<Self> {
        Self::new(ApiConfig::from_env()?)
    }

    /// The configured base URL.
    #[must_use]
    pub fn host(&self) -> &str {
        self.dispatcher.host()
    }

    // -- Servers ----------------------------------------------------------

    /// List all servers.
    pub async fn list_servers(&self) -> Result<Vec<Server>> {
        self.dispatcher
            .execute_collection(RequestDescriptor::new(Method::GET, "/servers"))
            .await
    }

    /// Fetch a single server.
    pub async fn get_server(&self, server_id: i64) -> Result<Server> {
        self.dispatcher
            .execute_single(RequestDescriptor::new(
                Method::GET,
                format!("/servers/{server_id}"),
            ))
            .await
    }

    /// Update a server's name and description.
    pub async fn update_server(&self, server_id: i64, data: &UpdateServer) -> Result<Server> {
        self.dispatcher
            .execute_single(
                RequestDescriptor::new(Method::PUT, format!("/servers/{server_id}"))
                    .with_body(data),
            )
            .await
    }

    /// Fetch the live power state of a server.
    pub async fn server_power_status(&self, server_id: i64) -> Result<ServerPowerStatus> {
        self.dispatcher
            .execute_single(RequestDescriptor::new(
                Method::GET,
                format!("/servers/{server_id}/power-status"),
            ))
            .await
    }

    /// Power a server on.
    pub async fn power_on_server(&self, server_id: i64) -> Result<()> {
        self.dispatcher
            .execute_none(RequestDescriptor::new(
                Method::POST,
                format!("/servers/{server_id}/power-on"),
            ))
            .await
    }

    /// Shut a server down, optionally forcing it.
    pub async fn shutdown_server(&self, server_id: i64, force: bool) -> Result<()> {
        let data = ShutdownServer { force };
        self.dispatcher
            .execute_none(
                RequestDescriptor::new(Method::POST, format!("/servers/{server_id}/shutdown"))
                    .with_body(&data),
            )
            .await
    }

    /// Force-reboot a server.
    pub async fn force_reboot_server(&self, server_id: i64) -> Result<()> {
        self.dispatcher
            .execute_none(RequestDescriptor::new(
                Method::POST,
                format!("/servers/{server_id}/force-reboot"),
            ))
            .await
    }

    /// Set the IPv4 reverse-lookup hostname of a server.
    pub async fn update_server_ipv4_ptr(&self, server_id: i64, data: &UpdateHost) -> Result<Ptr> {
        self.dispatcher
            .execute_single(
                RequestDescriptor::new(Method::PUT, format!("/servers/{server_id}/ipv4-ptr"))
                    .with_body(data),
            )
            .await
    }

    /// Set the IPv6 reverse-lookup hostname of a server.
    pub async fn update_server_ipv6_ptr(&self, server_id: i64, data: &UpdateHost) -> Result<Ptr> {
        self.dispatcher
            .execute_single(
                RequestDescriptor::new(Method::PUT, format!("/servers/{server_id}/ipv6-ptr"))
                    .with_body(data),
            )
            .await
    }

    /// Fetch the traffic restriction applied to a server.
    pub async fn server_limitation(&self, server_id: i64) -> Result<Limitation> {
        self.dispatcher
            .execute_single(RequestDescriptor::new(
                Method::GET,
                format!("/servers/{server_id}/limitation"),
            ))
            .await
    }

    // -- NFS appliances ---------------------------------------------------

    /// List all NFS appliances.
    pub async fn list_nfs_servers(&self) -> Result<Vec<NfsServer>> {
        self.dispatcher
            .execute_collection(RequestDescriptor::new(Method::GET, "/nfs-servers"))
            .await
    }

    /// Fetch a single NFS appliance.
    pub async fn get_nfs_server(&self, nfs_server_id: i64) -> Result<NfsServer> {
        self.dispatcher
            .execute_single(RequestDescriptor::new(
                Method::GET,
                format!("/nfs-servers/{nfs_server_id}"),
            ))
            .await
    }

    /// Update an NFS appliance's name and description.
    pub async fn update_nfs_server(
        &self,
        nfs_server_id: i64,
        data: &UpdateNfsServer,
    ) -> Result<NfsServer> {
        self.dispatcher
            .execute_single(
                RequestDescriptor::new(Method::PUT, format!("/nfs-servers/{nfs_server_id}"))
                    .with_body(data),
            )
            .await
    }

    /// Reconfigure the IPv4 interface of an NFS appliance.
    pub async fn update_nfs_server_ipv4(
        &self,
        nfs_server_id: i64,
        data: &UpdateNfsServerIpv4,
    ) -> Result<()> {
        self.dispatcher
            .execute_none(
                RequestDescriptor::new(
                    Method::PUT,
                    format!("/nfs-servers/{nfs_server_id}/ipv4"),
                )
                .with_body(data),
            )
            .await
    }

    /// Fetch the live power state of an NFS appliance.
    pub async fn nfs_server_power_status(
        &self,
        nfs_server_id: i64,
    ) -> Result<NfsServerPowerStatus> {
        self.dispatcher
            .execute_single(RequestDescriptor::new(
                Method::GET,
                format!("/nfs-servers/{nfs_server_id}/power-status"),
            ))
            .await
    }

    // -- Switches ---------------------------------------------------------

    /// Create a switch.
    pub async fn create_switch(&self, data: &CreateSwitch) -> Result<Switch> {
        self.dispatcher
            .execute_single(RequestDescriptor::new(Method::POST, "/switches").with_body(data))
            .await
    }

    /// List all switches.
    pub async fn list_switches(&self) -> Result<Vec<Switch>> {
        self.dispatcher
            .execute_collection(RequestDescriptor::new(Method::GET, "/switches"))
            .await
    }

    /// Fetch a single switch.
    pub async fn get_switch(&self, switch_id: i64) -> Result<Switch> {
        self.dispatcher
            .execute_single(RequestDescriptor::new(
                Method::GET,
                format!("/switches/{switch_id}"),
            ))
            .await
    }

    /// Update a switch's name and description.
    pub async fn update_switch(&self, switch_id: i64, data: &UpdateSwitch) -> Result<Switch> {
        self.dispatcher
            .execute_single(
                RequestDescriptor::new(Method::PUT, format!("/switches/{switch_id}"))
                    .with_body(data),
            )
            .await
    }

    /// Delete a switch.
    pub async fn delete_switch(&self, switch_id: i64) -> Result<()> {
        self.dispatcher
            .execute_none(RequestDescriptor::new(
                Method::DELETE,
                format!("/switches/{switch_id}"),
            ))
            .await
    }

    // -- API keys ---------------------------------------------------------

    /// List all API keys.
    pub async fn list_api_keys(&self) -> Result<Vec<ApiKey>> {
        self.dispatcher
            .execute_collection(RequestDescriptor::new(Method::GET, "/api-keys"))
            .await
    }

    /// Fetch a single API key.
    pub async fn get_api_key(&self, key_id: i64) -> Result<ApiKey> {
        self.dispatcher
            .execute_single(RequestDescriptor::new(
                Method::GET,
                format!("/api-keys/{key_id}"),
            ))
            .await
    }

    /// Create an API key.
    pub async fn create_api_key(&self, data: &CreateApiKey) -> Result<ApiKey> {
        self.dispatcher
            .execute_single(RequestDescriptor::new(Method::POST, "/api-keys").with_body(data))
            .await
    }

    /// Update an API key.
    pub async fn update_api_key(&self, key_id: i64, data: &UpdateApiKey) -> Result<ApiKey> {
        self.dispatcher
            .execute_single(
                RequestDescriptor::new(Method::PUT, format!("/api-keys/{key_id}"))
                    .with_body(data),
            )
            .await
    }

    /// Rotate the token of an API key.
    ///
    /// A body-less PUT on the key resource; the response carries the new
    /// token.
    pub async fn rotate_api_key(&self, key_id: i64) -> Result<ApiKey> {
        self.dispatcher
            .execute_single(RequestDescriptor::new(
                Method::PUT,
                format!("/api-keys/{key_id}"),
            ))
            .await
    }

    /// Delete an API key.
    pub async fn delete_api_key(&self, key_id: i64) -> Result<()> {
        self.dispatcher
            .execute_none(RequestDescriptor::new(
                Method::DELETE,
                format!("/api-keys/{key_id}"),
            ))
            .await
    }

    // -- Roles ------------------------------------------------------------

    /// Create a role.
    pub async fn create_role(&self, data: &CreateRole) -> Result<Role> {
        self.dispatcher
            .execute_single(RequestDescriptor::new(Method::POST, "/roles").with_body(data))
            .await
    }

    /// Fetch a single role.
    pub async fn get_role(&self, role_id: i64) -> Result<Role> {
        self.dispatcher
            .execute_single(RequestDescriptor::new(
                Method::GET,
                format!("/roles/{role_id}"),
            ))
            .await
    }

    /// Update a role.
    pub async fn update_role(&self, role_id: i64, data: &UpdateRole) -> Result<Role> {
        self.dispatcher
            .execute_single(
                RequestDescriptor::new(Method::PUT, format!("/roles/{role_id}")).with_body(data),
            )
            .await
    }

    /// Delete a role.
    pub async fn delete_role(&self, role_id: i64) -> Result<()> {
        self.dispatcher
            .execute_none(RequestDescriptor::new(
                Method::DELETE,
                format!("/roles/{role_id}"),
            ))
            .await
    }

    // -- Permissions ------------------------------------------------------

    /// List all grantable permissions.
    pub async fn list_permissions(&self) -> Result<Vec<Permission>> {
        self.dispatcher
            .execute_collection(RequestDescriptor::new(Method::GET, "/permissions"))
            .await
    }
}
