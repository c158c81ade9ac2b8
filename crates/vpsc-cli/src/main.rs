//! `vpsc` — command-line interface for the Sakura VPS cloud API.
//!
//! Responses are printed as pretty JSON on stdout. API errors are printed
//! on stderr as `CODE: message` and exit with a non-zero status. Logging
//! goes to stderr and is controlled with `RUST_LOG`.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]

mod cli;

use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use vpsc_api::models::{
    AllowedResources, CreateApiKey, CreateRole, CreateSwitch, FilteringMode, UpdateApiKey,
    UpdateHost, UpdateNfsServer, UpdateNfsServerIpv4, UpdateRole, UpdateServer, UpdateSwitch,
};
use vpsc_api::{ApiConfig, VpscClient};

use cli::{
    ApiKeyCommand, Cli, Command, NfsServerCommand, PermissionCommand, RoleCommand, ServerCommand,
    SwitchCommand,
};

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Some(api_err) = err.downcast_ref::<vpsc_api::Error>() {
                eprintln!("{}: {api_err}", api_err.error_code());
            } else {
                eprintln!("error: {err:#}");
            }
            ExitCode::FAILURE
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = ApiConfig::from_env()?;
    if let Some(host) = cli.host {
        config = config.with_host(host);
    }
    let client = VpscClient::new(config)?;

    match cli.command {
        Command::Server(command) => run_server(&client, command).await,
        Command::NfsServer(command) => run_nfs_server(&client, command).await,
        Command::Switch(command) => run_switch(&client, command).await,
        Command::ApiKey(command) => run_api_key(&client, command).await,
        Command::Role(command) => run_role(&client, command).await,
        Command::Permission(command) => run_permission(&client, command).await,
    }
}

async fn run_server(client: &VpscClient, command: ServerCommand) -> anyhow::Result<()> {
    match command {
        ServerCommand::List => print_json(&client.list_servers().await?),
        ServerCommand::Get { id } => print_json(&client.get_server(id).await?),
        ServerCommand::Update {
            id,
            name,
            description,
        } => {
            let data = UpdateServer { name, description };
            print_json(&client.update_server(id, &data).await?)
        }
        ServerCommand::PowerStatus { id } => print_json(&client.server_power_status(id).await?),
        ServerCommand::PowerOn { id } => Ok(client.power_on_server(id).await?),
        ServerCommand::Shutdown { id, force } => Ok(client.shutdown_server(id, force).await?),
        ServerCommand::ForceReboot { id } => Ok(client.force_reboot_server(id).await?),
        ServerCommand::Ipv4Ptr { id, hostname } => {
            let data = UpdateHost { hostname };
            print_json(&client.update_server_ipv4_ptr(id, &data).await?)
        }
        ServerCommand::Ipv6Ptr { id, hostname } => {
            let data = UpdateHost { hostname };
            print_json(&client.update_server_ipv6_ptr(id, &data).await?)
        }
        ServerCommand::Limitation { id } => print_json(&client.server_limitation(id).await?),
    }
}

async fn run_nfs_server(client: &VpscClient, command: NfsServerCommand) -> anyhow::Result<()> {
    match command {
        NfsServerCommand::List => print_json(&client.list_nfs_servers().await?),
        NfsServerCommand::Get { id } => print_json(&client.get_nfs_server(id).await?),
        NfsServerCommand::Update {
            id,
            name,
            description,
        } => {
            let data = UpdateNfsServer { name, description };
            print_json(&client.update_nfs_server(id, &data).await?)
        }
        NfsServerCommand::UpdateIpv4 {
            id,
            address,
            netmask,
        } => {
            let data = UpdateNfsServerIpv4 { address, netmask };
            Ok(client.update_nfs_server_ipv4(id, &data).await?)
        }
        NfsServerCommand::PowerStatus { id } => {
            print_json(&client.nfs_server_power_status(id).await?)
        }
    }
}

async fn run_switch(client: &VpscClient, command: SwitchCommand) -> anyhow::Result<()> {
    match command {
        SwitchCommand::Create {
            name,
            description,
            zone,
        } => {
            let data = CreateSwitch {
                name,
                description,
                zone_code: zone,
            };
            print_json(&client.create_switch(&data).await?)
        }
        SwitchCommand::List => print_json(&client.list_switches().await?),
        SwitchCommand::Get { id } => print_json(&client.get_switch(id).await?),
        SwitchCommand::Update {
            id,
            name,
            description,
        } => {
            let data = UpdateSwitch { name, description };
            print_json(&client.update_switch(id, &data).await?)
        }
        SwitchCommand::Delete { id } => Ok(client.delete_switch(id).await?),
    }
}

async fn run_api_key(client: &VpscClient, command: ApiKeyCommand) -> anyhow::Result<()> {
    match command {
        ApiKeyCommand::List => print_json(&client.list_api_keys().await?),
        ApiKeyCommand::Get { id } => print_json(&client.get_api_key(id).await?),
        ApiKeyCommand::Create { name, role } => {
            let data = CreateApiKey { name, role };
            print_json(&client.create_api_key(&data).await?)
        }
        ApiKeyCommand::Update { id, name, role } => {
            let data = UpdateApiKey { name, role };
            print_json(&client.update_api_key(id, &data).await?)
        }
        ApiKeyCommand::Rotate { id } => print_json(&client.rotate_api_key(id).await?),
        ApiKeyCommand::Delete { id } => Ok(client.delete_api_key(id).await?),
    }
}

async fn run_role(client: &VpscClient, command: RoleCommand) -> anyhow::Result<()> {
    match command {
        RoleCommand::Create {
            name,
            description,
            permissions,
            allow_servers,
            allow_switches,
            allow_nfs_servers,
        } => {
            let permission_filtering = if permissions.is_empty() {
                FilteringMode::Disabled
            } else {
                FilteringMode::Enabled
            };
            let allowed_resources = allowed_resources_from(
                allow_servers,
                allow_switches,
                allow_nfs_servers,
            );
            let resource_filtering = if allowed_resources.is_some() {
                FilteringMode::Enabled
            } else {
                FilteringMode::Disabled
            };
            let data = CreateRole {
                name,
                description,
                permission_filtering,
                allowed_permissions: permissions,
                resource_filtering,
                allowed_resources,
            };
            print_json(&client.create_role(&data).await?)
        }
        RoleCommand::Get { id } => print_json(&client.get_role(id).await?),
        RoleCommand::Update {
            id,
            name,
            description,
        } => {
            let data = UpdateRole {
                name,
                description,
                ..UpdateRole::default()
            };
            print_json(&client.update_role(id, &data).await?)
        }
        RoleCommand::Delete { id } => Ok(client.delete_role(id).await?),
    }
}

async fn run_permission(client: &VpscClient, command: PermissionCommand) -> anyhow::Result<()> {
    match command {
        PermissionCommand::List => print_json(&client.list_permissions().await?),
    }
}

fn allowed_resources_from(
    servers: Vec<i64>,
    switches: Vec<i64>,
    nfs_servers: Vec<i64>,
) -> Option<AllowedResources> {
    if servers.is_empty() && switches.is_empty() && nfs_servers.is_empty() {
        return None;
    }
    let non_empty = |ids: Vec<i64>| if ids.is_empty() { None } else { Some(ids) };
    Some(AllowedResources {
        servers: non_empty(servers),
        switches: non_empty(switches),
        nfs_servers: non_empty(nfs_servers),
    })
}
