//! `stockflow articles`

use anyhow::Result;
use sf_client::ApiClient;
use sf_contracts::{ArticleForm, Form};
use sf_services::Dashboard;

use super::{finish, loaded, show, validated};
use crate::render;
use crate::ArticleCommands;

pub async fn cmd_articles<C: ApiClient + ?Sized>(
    dashboard: &Dashboard<C>,
    command: ArticleCommands,
) -> Result<()> {
    let view = dashboard.articles();

    match command {
        ArticleCommands::List => loaded(view.refresh().await, view.list())?,
        ArticleCommands::Names => {
            let names = dashboard.article_names();
            let status = names
                .refresh(|| dashboard.actions().list_article_names())
                .await;
            loaded(status, &names)?;
            show(&names, render::article_names);
            return Ok(());
        }
        ArticleCommands::Add { name, qty } => {
            let payload = validated(ArticleForm::new(name, qty).submit())?;
            finish(view.create(&payload).await)?;
        }
        ArticleCommands::Update { id, name, qty } => {
            let payload = validated(ArticleForm::new(name, qty).submit())?;
            finish(view.update(id, &payload).await)?;
        }
        ArticleCommands::Delete { id } => finish(view.delete(id).await)?,
    }

    show(view.list(), render::articles);
    Ok(())
}
