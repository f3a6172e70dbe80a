//! `stockflow workforce`

use anyhow::Result;
use sf_client::ApiClient;
use sf_contracts::{Form, WorkforceForm};
use sf_services::Dashboard;

use super::{finish, loaded, show, validated};
use crate::render;
use crate::WorkforceCommands;

pub async fn cmd_workforce<C: ApiClient + ?Sized>(
    dashboard: &Dashboard<C>,
    command: WorkforceCommands,
) -> Result<()> {
    match command {
        WorkforceCommands::List { production_id } => {
            let view = dashboard.workforce(production_id);
            loaded(view.refresh().await, view.list())?;
            show(view.list(), render::workforce);
        }
        WorkforceCommands::Add {
            production_id,
            workers,
            price_per_head,
        } => {
            let payload =
                validated(WorkforceForm::new(production_id, workers, price_per_head).submit())?;
            let view = dashboard.workforce(production_id);
            finish(view.create(&payload).await)?;
            show(view.list(), render::workforce);
        }
        WorkforceCommands::Update {
            production_id,
            id,
            workers,
            price_per_head,
        } => {
            let payload =
                validated(WorkforceForm::new(production_id, workers, price_per_head).submit())?;
            let view = dashboard.workforce(production_id);
            finish(view.update(id, &payload).await)?;
            show(view.list(), render::workforce);
        }
        WorkforceCommands::Delete { production_id, id } => {
            let view = dashboard.workforce(production_id);
            loaded(view.refresh().await, view.list())?;
            finish(view.delete(id).await)?;
            show(view.list(), render::workforce);
        }
    }
    Ok(())
}
