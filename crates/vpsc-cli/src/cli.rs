//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use vpsc_api::models::SwitchZoneCode;

/// Manage Sakura VPS resources from the command line.
///
/// Credentials come from `VPS_API_KEY` or the `~/.vpsc` file.
#[derive(Parser, Debug)]
#[command(name = "vpsc", version)]
pub struct Cli {
    /// Override the API base URL.
    #[arg(long, global = true, value_name = "URL")]
    pub host: Option<String>,
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level resource groups.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Operate on virtual servers.
    #[command(subcommand)]
    Server(ServerCommand),
    /// Operate on NFS appliances.
    #[command(subcommand, name = "nfs-server")]
    NfsServer(NfsServerCommand),
    /// Operate on local network switches.
    #[command(subcommand)]
    Switch(SwitchCommand),
    /// Operate on API keys.
    #[command(subcommand, name = "api-key")]
    ApiKey(ApiKeyCommand),
    /// Operate on access-control roles.
    #[command(subcommand)]
    Role(RoleCommand),
    /// Inspect grantable permissions.
    #[command(subcommand)]
    Permission(PermissionCommand),
}

/// Server operations.
#[derive(Subcommand, Debug)]
pub enum ServerCommand {
    /// List all servers.
    List,
    /// Show one server.
    Get {
        /// Server id.
        id: i64,
    },
    /// Change a server's name or description.
    Update {
        /// Server id.
        id: i64,
        /// New name.
        #[arg(long)]
        name: Option<String>,
        /// New description.
        #[arg(long)]
        description: Option<String>,
    },
    /// Show the live power state.
    PowerStatus {
        /// Server id.
        id: i64,
    },
    /// Power the server on.
    PowerOn {
        /// Server id.
        id: i64,
    },
    /// Shut the server down.
    Shutdown {
        /// Server id.
        id: i64,
        /// Cut power instead of signalling the guest OS.
        #[arg(long)]
        force: bool,
    },
    /// Force-reboot the server.
    ForceReboot {
        /// Server id.
        id: i64,
    },
    /// Set the IPv4 reverse-lookup hostname.
    Ipv4Ptr {
        /// Server id.
        id: i64,
        /// Hostname to register.
        hostname: String,
    },
    /// Set the IPv6 reverse-lookup hostname.
    Ipv6Ptr {
        /// Server id.
        id: i64,
        /// Hostname to register.
        hostname: String,
    },
    /// Show the current traffic restriction.
    Limitation {
        /// Server id.
        id: i64,
    },
}

/// NFS appliance operations.
#[derive(Subcommand, Debug)]
pub enum NfsServerCommand {
    /// List all NFS appliances.
    List,
    /// Show one NFS appliance.
    Get {
        /// Appliance id.
        id: i64,
    },
    /// Change an appliance's name or description.
    Update {
        /// Appliance id.
        id: i64,
        /// New name.
        #[arg(long)]
        name: Option<String>,
        /// New description.
        #[arg(long)]
        description: Option<String>,
    },
    /// Reconfigure the IPv4 interface.
    UpdateIpv4 {
        /// Appliance id.
        id: i64,
        /// Address.
        #[arg(long)]
        address: String,
        /// Subnet mask.
        #[arg(long)]
        netmask: String,
    },
    /// Show the live power state.
    PowerStatus {
        /// Appliance id.
        id: i64,
    },
}

/// Switch operations.
#[derive(Subcommand, Debug)]
pub enum SwitchCommand {
    /// Create a switch.
    Create {
        /// Name.
        #[arg(long)]
        name: String,
        /// Description.
        #[arg(long, default_value = "")]
        description: String,
        /// Zone to create the switch in (tk2, tk3, os3 or is1).
        #[arg(long)]
        zone: SwitchZoneCode,
    },
    /// List all switches.
    List,
    /// Show one switch.
    Get {
        /// Switch id.
        id: i64,
    },
    /// Change a switch's name or description.
    Update {
        /// Switch id.
        id: i64,
        /// New name.
        #[arg(long)]
        name: Option<String>,
        /// New description.
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a switch.
    Delete {
        /// Switch id.
        id: i64,
    },
}

/// API key operations.
#[derive(Subcommand, Debug)]
pub enum ApiKeyCommand {
    /// List all API keys.
    List,
    /// Show one API key.
    Get {
        /// Key id.
        id: i64,
    },
    /// Create an API key; the response carries its token.
    Create {
        /// Name.
        #[arg(long)]
        name: String,
        /// Id of the role granting the key its permissions.
        #[arg(long)]
        role: i64,
    },
    /// Change an API key's name or role.
    Update {
        /// Key id.
        id: i64,
        /// New name.
        #[arg(long)]
        name: Option<String>,
        /// New role id.
        #[arg(long)]
        role: Option<i64>,
    },
    /// Rotate the key's token; the response carries the new token.
    Rotate {
        /// Key id.
        id: i64,
    },
    /// Delete an API key.
    Delete {
        /// Key id.
        id: i64,
    },
}

/// Role operations.
#[derive(Subcommand, Debug)]
pub enum RoleCommand {
    /// Create a role.
    ///
    /// Permission filtering is enabled when at least one `--permission`
    /// is given; resource filtering when at least one `--allow-*` is.
    Create {
        /// Name.
        #[arg(long)]
        name: String,
        /// Description.
        #[arg(long, default_value = "")]
        description: String,
        /// Permission code usable under this role; repeatable.
        #[arg(long = "permission", value_name = "CODE")]
        permissions: Vec<String>,
        /// Server id this role may access; repeatable.
        #[arg(long = "allow-server", value_name = "ID")]
        allow_servers: Vec<i64>,
        /// Switch id this role may access; repeatable.
        #[arg(long = "allow-switch", value_name = "ID")]
        allow_switches: Vec<i64>,
        /// NFS appliance id this role may access; repeatable.
        #[arg(long = "allow-nfs-server", value_name = "ID")]
        allow_nfs_servers: Vec<i64>,
    },
    /// Show one role.
    Get {
        /// Role id.
        id: i64,
    },
    /// Change a role's name or description.
    Update {
        /// Role id.
        id: i64,
        /// New name.
        #[arg(long)]
        name: Option<String>,
        /// New description.
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a role.
    Delete {
        /// Role id.
        id: i64,
    },
}

/// Permission operations.
#[derive(Subcommand, Debug)]
pub enum PermissionCommand {
    /// List all grantable permission codes.
    List,
}
