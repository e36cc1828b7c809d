use anyhow::Result;
use log::info;

mod client;
mod config;
mod feature;

fn main() -> Result<()> {
    config::init_logger();
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async_main())
}

async fn async_main() -> Result<()> {
    let config = config::Config::from_env()?;
    info!("Target guild : {}", config.guild_id);
    let client = client::discord::DiscordClient::new(config);
    client.run().await?;
    Ok(())
}
