use super::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use leasedesk_runtime::Config;
use std::path::Path;

pub fn show(data_dir: &Path, ctx: &HandlerContext) -> Result<()> {
    let config = Config::load_from(&Config::path_in(data_dir))?;
    ctx.render(presenters::present_config(data_dir, &config, false))
}

pub fn set_url(data_dir: &Path, url: &str, ctx: &HandlerContext) -> Result<()> {
    let path = Config::path_in(data_dir);
    let mut config = Config::load_from(&path)?;
    config.set_base_url(url)?;
    config.save_to(&path)?;

    tracing::info!("Backend URL set to {}", config.api.base_url);
    ctx.render(presenters::present_config(data_dir, &config, true))
}
