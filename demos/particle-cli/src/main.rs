use clap::{Parser, Subcommand};

use futures_util::StreamExt;

use particle_cloud::client::Client;
use particle_cloud::config::{ClientOptions, DEFAULT_API_HOST};
use particle_cloud::error::Error;
use particle_cloud::models::{Device, Variable};
use particle_cloud::response::Response;

use serde_json::Value;

use tracing::{Level, info, warn};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Access token.
    #[arg(long, env = "PARTICLE_ACCESS_TOKEN", hide_env_values = true)]
    token: String,

    /// API version.
    #[arg(long, env = "PARTICLE_API_VERSION", default_value_t = 1)]
    api_version: u32,

    /// API host.
    #[arg(long, env = "PARTICLE_API_HOST", default_value = DEFAULT_API_HOST)]
    api_host: String,

    /// Log composed urls and call arguments.
    #[arg(long)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Lists all access tokens.
    Tokens,
    /// Lists all devices.
    Devices,
    /// Shows the details of a device.
    Info {
        /// Device identifier.
        id: String,
    },
    /// Reads a device variable.
    Get {
        /// Device identifier.
        id: String,
        /// Variable name.
        variable: String,
    },
    /// Calls a device function.
    Call {
        /// Device identifier.
        id: String,
        /// Function name.
        function: String,
        /// Function argument.
        #[arg(default_value = "")]
        arg: String,
    },
    /// Renames a device.
    Rename {
        /// Device identifier.
        id: String,
        /// New device name.
        name: String,
    },
    /// Publishes an event.
    Publish {
        /// Event name.
        name: String,
        /// Event data, as `JSON` or as plain text.
        #[arg(long)]
        data: Option<String>,
        /// Publishes a private event.
        #[arg(long)]
        private: bool,
        /// Event time to live, in seconds.
        #[arg(long)]
        ttl: Option<u32>,
    },
    /// Follows an event stream until Ctrl-C is pressed.
    Events {
        /// Follows only the events of this device.
        #[arg(long)]
        device: Option<String>,
        /// Follows only the events of the user devices.
        #[arg(long, conflicts_with = "device")]
        mine: bool,
        /// Event name prefix.
        prefix: Option<String>,
    },
    /// Lists all organizations.
    Orgs,
}

async fn print_json(response: Response) -> Result<(), Error> {
    if !response.is_success() {
        warn!("The server answered with {}", response.status());
    }
    println!("{:#}", response.json().await?);
    Ok(())
}

async fn follow(response: Response) -> Result<(), Error> {
    if !response.is_success() {
        return print_json(response).await;
    }

    let mut stream = Box::pin(response.open_stream());
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("Stop following the event stream");
                break;
            }
            chunk = stream.next() => {
                match chunk {
                    Some(chunk) => print!("{}", String::from_utf8_lossy(&chunk?)),
                    None => {
                        info!("The event stream has been closed");
                        break;
                    }
                }
            }
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let cli = Cli::parse();

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).init();

    let mut client = Client::new(
        ClientOptions::token(cli.token)
            .version(cli.api_version)
            .api_host(cli.api_host)
            .debug(cli.debug),
    );

    match cli.command {
        Command::Tokens => print_json(client.auth().list().await?).await,
        Command::Devices => {
            let devices: Vec<Device> = client.devices().list().await?.parse_body().await?;
            for device in devices {
                println!(
                    "{} {} [{}]",
                    device.id,
                    device.name.as_deref().unwrap_or("<unnamed>"),
                    if device.connected { "online" } else { "offline" }
                );
            }
            Ok(())
        }
        Command::Info { id } => print_json(client.devices().get_info(&id).await?).await,
        Command::Get { id, variable } => {
            let variable: Variable = client
                .devices()
                .get(&id, &variable)
                .await?
                .parse_body()
                .await?;
            println!("{} = {}", variable.name, variable.result);
            Ok(())
        }
        Command::Call { id, function, arg } => {
            print_json(client.devices().call(&id, &function, &arg).await?).await
        }
        Command::Rename { id, name } => {
            print_json(client.firmware().rename(&id, &name).await?).await
        }
        Command::Publish {
            name,
            data,
            private,
            ttl,
        } => {
            let data = data.map(|data| {
                serde_json::from_str::<Value>(&data).unwrap_or(Value::String(data))
            });
            print_json(client.events().publish(&name, data, private, ttl).await?).await
        }
        Command::Events {
            device,
            mine,
            prefix,
        } => {
            let prefix = prefix.as_deref();
            let response = match device {
                Some(id) => client.events().get_device_stream(&id, prefix).await?,
                None if mine => client.events().get_devices_stream(prefix).await?,
                None => client.events().get_stream(prefix).await?,
            };
            follow(response).await
        }
        Command::Orgs => print_json(client.orgs().list().await?).await,
    }
}
