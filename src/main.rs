mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

use futures::StreamExt;
use music_server_web::breakpoint::BreakpointObserver;
use music_server_web::config::Config;
use music_server_web::init_tracing;
use music_server_web::view::{render, Presenter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::new()?;
    init_tracing(&config.log)?;
    tracing::info!(version = built_info::PKG_VERSION, profile = built_info::PROFILE);
    tracing::debug!("{config:#?}");

    let mut observer = BreakpointObserver::new(config.viewport);
    let presenter = Presenter::new((&config.client).into(), &mut observer);
    let is_handset = presenter.is_handset().get();
    tracing::info!(base_url = presenter.client().base_url(), is_handset, "fetching albums");

    let mut albums = presenter.albums();
    while let Some(albums) = albums.next().await {
        render(&mut std::io::stdout().lock(), presenter.client(), &albums?, is_handset)?;
    }
    Ok(())
}
