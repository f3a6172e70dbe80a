//! `stockflow allocations`

use anyhow::Result;
use sf_client::ApiClient;
use sf_contracts::{AllocationForm, Form};
use sf_services::Dashboard;

use super::{finish, loaded, show, validated};
use crate::render;
use crate::AllocationCommands;

pub async fn cmd_allocations<C: ApiClient + ?Sized>(
    dashboard: &Dashboard<C>,
    command: AllocationCommands,
) -> Result<()> {
    match command {
        AllocationCommands::List { production_id } => {
            let view = dashboard.allocations(production_id);
            loaded(view.refresh().await, view.list())?;
            show(view.list(), render::allocations);
        }
        AllocationCommands::Add {
            production_id,
            article,
            qty,
            unit_price,
        } => {
            let mut payload =
                validated(AllocationForm::new(production_id, article, qty, unit_price).submit())?;
            let view = dashboard.allocations(production_id);

            // The name is informative only; a failed lookup does not block the create.
            view.refresh_article_names().await;
            if let Some(name) = view.article_name(payload.article_id) {
                payload.article_name = name;
            }

            finish(view.create(&payload).await)?;
            show(view.list(), render::allocations);
        }
        AllocationCommands::Update {
            production_id,
            id,
            article,
            qty,
            unit_price,
        } => {
            let payload = validated(
                AllocationForm::new(production_id, article, qty, unit_price).submit_update(id),
            )?;
            let view = dashboard.allocations(production_id);
            finish(view.update(&payload).await)?;
            show(view.list(), render::allocations);
        }
        AllocationCommands::Delete { production_id, id } => {
            let view = dashboard.allocations(production_id);
            loaded(view.refresh().await, view.list())?;
            finish(view.delete(id).await)?;
            show(view.list(), render::allocations);
        }
    }
    Ok(())
}
