//! Domain models for the VPS API.
//!
//! Response records decode permissively: unknown fields in API responses
//! are ignored, so additions on the server side never break decoding.
//! Request payloads encode to compact JSON omitting any optional field
//! that was never set, because the API treats an omitted field
//! differently from one explicitly reset to an empty value.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Availability zone identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneCode {
    /// Tokyo #1.
    Tk1,
    /// Tokyo #2.
    Tk2,
    /// Tokyo #3.
    Tk3,
    /// Osaka #1.
    Os1,
    /// Osaka #2.
    Os2,
    /// Osaka #3.
    Os3,
    /// Ishikari #1.
    Is1,
}

/// Availability zone of a resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    /// Zone identifier.
    pub code: ZoneCode,
    /// Human-readable zone name.
    pub name: String,
}

/// Storage medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageKind {
    /// Solid-state drive.
    Ssd,
    /// Hard disk drive.
    Hdd,
}

/// One storage device attached to a server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerStorage {
    /// Device port number.
    pub port: i64,
    /// Storage medium.
    #[serde(rename = "type")]
    pub kind: StorageKind,
    /// Capacity in GiB.
    pub size_gibibytes: i64,
}

/// IPv4 interface configuration of a server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ipv4 {
    /// Address.
    pub address: String,
    /// Subnet mask.
    pub netmask: String,
    /// Gateway address.
    pub gateway: String,
    /// Nameserver addresses.
    pub nameservers: Vec<String>,
    /// Standard hostname.
    pub hostname: String,
    /// Reverse-lookup hostname.
    pub ptr: String,
}

/// IPv6 interface configuration of a server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ipv6 {
    /// Address.
    pub address: String,
    /// Prefix length.
    pub prefixlen: i64,
    /// Gateway address.
    pub gateway: String,
    /// Nameserver addresses.
    pub nameservers: Vec<String>,
    /// Standard hostname.
    pub hostname: String,
    /// Reverse-lookup hostname.
    pub ptr: String,
}

/// Contract details behind a resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    /// Plan code.
    pub plan_code: i64,
    /// Plan name.
    pub plan_name: String,
    /// Service code.
    pub service_code: String,
}

/// Guest operating system family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    /// Linux guest.
    Linux,
    /// Windows guest.
    Windows,
}

/// Service status of a server contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceStatus {
    /// Trial period.
    OnTrial,
    /// Trial period, suspended.
    LinkDownOnTrial,
    /// In use.
    InUse,
    /// Suspended.
    LinkDown,
}

/// Power state of a server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerState {
    /// Powered on.
    PowerOn,
    /// Shutting down.
    InShutdown,
    /// Powered off.
    PowerOff,
    /// OS installation in progress.
    Installing,
    /// Scale-up in progress.
    InScaleup,
    /// Being migrated.
    Migration,
    /// State could not be determined.
    Unknown,
}

/// A virtual server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Server {
    /// Resource id.
    pub id: i64,
    /// Name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Guest OS family.
    pub service_type: ServiceType,
    /// Contract service status.
    pub service_status: ServiceStatus,
    /// CPU core count.
    pub cpu_cores: i64,
    /// Memory in MiB.
    pub memory_mebibytes: i64,
    /// Attached storage devices.
    pub storage: Vec<ServerStorage>,
    /// Availability zone.
    pub zone: Zone,
    /// Optional add-on software.
    pub options: Vec<String>,
    /// Plan generation, e.g. `v5`.
    pub version: String,
    /// IPv4 configuration.
    pub ipv4: Ipv4,
    /// IPv6 configuration.
    pub ipv6: Ipv6,
    /// Contract details.
    pub contract: Contract,
    /// Cached power state; for an authoritative answer use the
    /// power-status endpoint.
    pub power_status: PowerState,
}

/// Live power state of a server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerPowerStatus {
    /// Current power state.
    pub status: PowerState,
}

/// Traffic restriction currently applied to a server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limitation {
    /// Cap on outbound bandwidth in Mbps, when restricted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_upstream_megabits: Option<i64>,
    /// Whether a restriction is currently in effect.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restricted: Option<bool>,
}

/// Service status of an NFS appliance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NfsServiceStatus {
    /// Being prepared.
    InPreparation,
    /// Trial period.
    OnTrial,
    /// Trial period, suspended.
    LinkDownOnTrial,
    /// In use.
    InUse,
    /// Suspended.
    LinkDown,
}

/// Configuration rollout state of an NFS appliance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingStatus {
    /// Settings applied.
    Done,
    /// Update in progress.
    InUpdate,
    /// Last update failed.
    Failed,
}

/// Power state of an NFS appliance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NfsPowerState {
    /// Powered on.
    PowerOn,
    /// Shutting down.
    InShutdown,
    /// Powered off.
    PowerOff,
    /// State could not be determined.
    Unknown,
}

/// One storage device of an NFS appliance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NfsStorage {
    /// Storage medium.
    #[serde(rename = "type")]
    pub kind: StorageKind,
    /// Capacity in GiB.
    pub size_gibibytes: i64,
}

/// IPv4 configuration of an NFS appliance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NfsIpv4 {
    /// Address.
    pub address: String,
    /// Subnet mask.
    pub netmask: String,
}

/// An NFS storage appliance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NfsServer {
    /// Resource id.
    pub id: i64,
    /// Name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Contract service status.
    pub service_status: NfsServiceStatus,
    /// Configuration rollout state.
    pub setting_status: SettingStatus,
    /// Attached storage devices.
    pub storage: Vec<NfsStorage>,
    /// Availability zone.
    pub zone: Zone,
    /// IPv4 configuration.
    pub ipv4: NfsIpv4,
    /// Contract details.
    pub contract: Contract,
    /// Cached power state.
    pub power_status: NfsPowerState,
}

/// Live power state of an NFS appliance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NfsServerPowerStatus {
    /// Current power state.
    pub status: NfsPowerState,
}

/// External connection method of a switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExternalConnectionKind {
    /// Sakura cloud interconnect.
    Cloud,
    /// Dedicated-line service.
    Sales,
    /// Local router.
    Localrouter,
    /// AWS Direct Connect.
    Awsdxcon,
}

/// One service reachable through an external connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchService {
    /// Service category, e.g. `cloud`.
    pub service_category: String,
    /// Service name.
    pub service_name: String,
    /// Switch code on the remote side.
    pub switch_code: String,
}

/// External connection attached to a switch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalConnection {
    /// Service code.
    pub service_code: String,
    /// Connection method.
    #[serde(rename = "type")]
    pub kind: ExternalConnectionKind,
    /// Connected services.
    pub services: Vec<SwitchService>,
}

/// A local network switch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Switch {
    /// Resource id.
    pub id: i64,
    /// Name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Switch code.
    pub switch_code: String,
    /// Availability zone.
    pub zone: Zone,
    /// Interface ids of connected servers.
    pub server_interfaces: Vec<i64>,
    /// Interface ids of connected NFS appliances.
    pub nfs_server_interfaces: Vec<i64>,
    /// External connection, when one is attached.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_connection: Option<ExternalConnection>,
}

/// An API key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiKey {
    /// Resource id.
    pub id: i64,
    /// Name.
    pub name: String,
    /// Id of the role granting this key its permissions.
    pub role: i64,
    /// Bearer token; returned only on creation and rotation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last-update timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Whether a role restricts permissions or resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilteringMode {
    /// Restriction active.
    Enabled,
    /// No restriction.
    Disabled,
}

/// Resources a role grants access to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowedResources {
    /// Accessible server ids.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servers: Option<Vec<i64>>,
    /// Accessible switch ids.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub switches: Option<Vec<i64>>,
    /// Accessible NFS appliance ids.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nfs_servers: Option<Vec<i64>>,
}

/// An access-control role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Resource id.
    pub id: i64,
    /// Name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Whether usable permissions are restricted.
    pub permission_filtering: FilteringMode,
    /// Permission codes usable under this role.
    #[serde(default)]
    pub allowed_permissions: Vec<String>,
    /// Whether accessible resources are restricted.
    pub resource_filtering: FilteringMode,
    /// Accessible resources, when resource filtering is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_resources: Option<AllowedResources>,
}

/// A grantable permission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    /// Permission code, e.g. `get-server-list`.
    pub code: String,
    /// Human-readable name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Collection paging envelope.
///
/// Declared by the API for list endpoints; traversal is not implemented
/// here and collections are returned exactly as the server sends them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Total number of items.
    pub count: i64,
    /// URL of the next page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    /// URL of the previous page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
}

// ---------------------------------------------------------------------------
// Request payloads

/// Payload for updating a server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateServer {
    /// New name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Payload for shutting a server down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShutdownServer {
    /// Force the shutdown instead of signalling the guest.
    pub force: bool,
}

/// Payload for setting a reverse-lookup hostname.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateHost {
    /// Hostname, e.g. `example.jp`.
    pub hostname: String,
}

/// A reverse-lookup hostname, as returned by the PTR endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ptr {
    /// Reverse-lookup hostname.
    pub ptr: String,
}

/// Payload for updating an NFS appliance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateNfsServer {
    /// New name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Payload for reconfiguring the IPv4 interface of an NFS appliance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateNfsServerIpv4 {
    /// Address.
    pub address: String,
    /// Subnet mask.
    pub netmask: String,
}

/// Zones accepting new switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwitchZoneCode {
    /// Tokyo #2.
    Tk2,
    /// Tokyo #3.
    Tk3,
    /// Osaka #3.
    Os3,
    /// Ishikari #1.
    Is1,
}

impl SwitchZoneCode {
    /// The wire representation of the zone code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tk2 => "tk2",
            Self::Tk3 => "tk3",
            Self::Os3 => "os3",
            Self::Is1 => "is1",
        }
    }
}

impl fmt::Display for SwitchZoneCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SwitchZoneCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tk2" => Ok(Self::Tk2),
            "tk3" => Ok(Self::Tk3),
            "os3" => Ok(Self::Os3),
            "is1" => Ok(Self::Is1),
            other => Err(format!("unknown switch zone code `{other}`")),
        }
    }
}

/// Payload for creating a switch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSwitch {
    /// Name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Zone to create the switch in.
    pub zone_code: SwitchZoneCode,
}

/// Payload for updating a switch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateSwitch {
    /// New name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Payload for creating an API key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateApiKey {
    /// Name, at most 100 characters.
    pub name: String,
    /// Id of the role granting the key its permissions.
    pub role: i64,
}

/// Payload for updating an API key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateApiKey {
    /// New name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New role id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<i64>,
}

/// Payload for creating a role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRole {
    /// Name, at most 100 characters.
    pub name: String,
    /// Description, at most 512 characters.
    pub description: String,
    /// Whether usable permissions are restricted.
    pub permission_filtering: FilteringMode,
    /// Permission codes usable under this role; only meaningful when
    /// permission filtering is enabled.
    pub allowed_permissions: Vec<String>,
    /// Whether accessible resources are restricted.
    pub resource_filtering: FilteringMode,
    /// Accessible resources; only meaningful when resource filtering is
    /// enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_resources: Option<AllowedResources>,
}

/// Payload for updating a role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateRole {
    /// New name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether usable permissions are restricted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permission_filtering: Option<FilteringMode>,
    /// Permission codes usable under this role.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_permissions: Option<Vec<String>>,
    /// Whether accessible resources are restricted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_filtering: Option<FilteringMode>,
    /// Accessible resources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_resources: Option<AllowedResources>,
}

// ---------------------------------------------------------------------------
// Sort declarations

/// Sort keys declared by the server-list endpoint.
///
/// Declared extension point only: sort parameters are not yet applied to
/// outbound requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerSortKey {
    /// By service code.
    ServiceCode,
    /// By name.
    Name,
    /// By total storage size.
    StorageSizeGibibytes,
    /// By memory size.
    MemoryMebibytes,
    /// By CPU core count.
    CpuCores,
    /// By IPv4 hostname.
    Hostname,
    /// By IPv6 hostname.
    Ipv6Hostname,
    /// By IPv4 address.
    Ipv4Address,
    /// By IPv6 address.
    Ipv6Address,
    /// By zone code.
    ZoneCode,
    /// By IPv4 reverse-lookup hostname.
    Ipv4Ptr,
    /// By IPv6 reverse-lookup hostname.
    Ipv6Ptr,
}

impl ServerSortKey {
    /// The wire representation of the key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ServiceCode => "service_code",
            Self::Name => "name",
            Self::StorageSizeGibibytes => "storage_size_gibibytes",
            Self::MemoryMebibytes => "memory_mebibytes",
            Self::CpuCores => "cpu_cores",
            Self::Hostname => "hostname",
            Self::Ipv6Hostname => "ipv6_hostname",
            Self::Ipv4Address => "ipv4_address",
            Self::Ipv6Address => "ipv6_address",
            Self::ZoneCode => "zone_code",
            Self::Ipv4Ptr => "ipv4_ptr",
            Self::Ipv6Ptr => "ipv6_ptr",
        }
    }
}

/// A sort ordering for server listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerSort {
    /// Key to sort by.
    pub key: ServerSortKey,
    /// Sort in descending order.
    pub descending: bool,
}

impl ServerSort {
    /// Ascending ordering by the given key.
    #[must_use]
    pub const fn ascending(key: ServerSortKey) -> Self {
        Self {
            key,
            descending: false,
        }
    }

    /// Descending ordering by the given key.
    #[must_use]
    pub const fn descending(key: ServerSortKey) -> Self {
        Self {
            key,
            descending: true,
        }
    }

    /// The query-string value, e.g. `name` or `-name`.
    #[must_use]
    pub fn query_value(&self) -> String {
        if self.descending {
            format!("-{}", self.key.as_str())
        } else {
            self.key.as_str().to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_api_key_encodes_exactly_the_set_fields() {
        let payload = CreateApiKey {
            name: "X".into(),
            role: 1,
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(json, r#"{"name":"X","role":1}"#);
    }

    #[test]
    fn partial_update_omits_unset_fields() {
        let payload = UpdateApiKey {
            name: Some("renamed".into()),
            ..UpdateApiKey::default()
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(json, r#"{"name":"renamed"}"#);

        let empty = serde_json::to_string(&UpdateApiKey::default()).unwrap();
        assert_eq!(empty, "{}");
    }

    #[test]
    fn explicitly_cleared_field_is_still_sent() {
        // An empty string is a set value, distinct from an unset field.
        let payload = UpdateServer {
            name: Some(String::new()),
            description: None,
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(json, r#"{"name":""}"#);
    }

    #[test]
    fn shutdown_always_carries_the_force_flag() {
        let json = serde_json::to_string(&ShutdownServer { force: false }).unwrap();
        assert_eq!(json, r#"{"force":false}"#);
    }

    #[test]
    fn api_key_decode_ignores_unknown_fields() {
        let key: ApiKey = serde_json::from_str(
            r#"{"id":0,"name":"ci","role":3,"brand_new_field":{"nested":true}}"#,
        )
        .unwrap();
        assert_eq!(key.id, 0);
        assert_eq!(key.role, 3);
        assert!(key.token.is_none());
    }

    #[test]
    fn power_state_uses_snake_case_wire_values() {
        let status: ServerPowerStatus =
            serde_json::from_str(r#"{"status":"in_shutdown"}"#).unwrap();
        assert_eq!(status.status, PowerState::InShutdown);
        assert_eq!(
            serde_json::to_string(&PowerState::PowerOn).unwrap(),
            r#""power_on""#
        );
    }

    #[test]
    fn switch_zone_code_round_trips() {
        assert_eq!("os3".parse::<SwitchZoneCode>().unwrap(), SwitchZoneCode::Os3);
        assert_eq!(SwitchZoneCode::Tk2.to_string(), "tk2");
        assert!("tk1".parse::<SwitchZoneCode>().is_err());
    }

    #[test]
    fn server_sort_query_values() {
        assert_eq!(
            ServerSort::ascending(ServerSortKey::Name).query_value(),
            "name"
        );
        assert_eq!(
            ServerSort::descending(ServerSortKey::MemoryMebibytes).query_value(),
            "-memory_mebibytes"
        );
    }

    #[test]
    fn create_role_with_resource_filter() {
        let payload = CreateRole {
            name: "ops".into(),
            description: "operators".into(),
            permission_filtering: FilteringMode::Enabled,
            allowed_permissions: vec!["get-server-list".into(), "get-server".into()],
            resource_filtering: FilteringMode::Enabled,
            allowed_resources: Some(AllowedResources {
                servers: Some(vec![1, 2, 3]),
                ..AllowedResources::default()
            }),
        };

        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(
            json,
            r#"{"name":"ops","description":"operators","permission_filtering":"enabled","allowed_permissions":["get-server-list","get-server"],"resource_filtering":"enabled","allowed_resources":{"servers":[1,2,3]}}"#
        );
    }
}
