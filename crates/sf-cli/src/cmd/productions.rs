//! `stockflow productions`

use anyhow::{anyhow, Result};
use sf_client::ApiClient;
use sf_contracts::{Form, ProductionForm};
use sf_services::Dashboard;

use super::{finish, loaded, show, validated};
use crate::render;
use crate::ProductionCommands;

pub async fn cmd_productions<C: ApiClient + ?Sized>(
    dashboard: &Dashboard<C>,
    command: ProductionCommands,
) -> Result<()> {
    let view = dashboard.productions();

    match command {
        ProductionCommands::List => loaded(view.refresh().await, view.list())?,
        ProductionCommands::Add { date, qty, title } => {
            let payload = validated(ProductionForm::new(date, qty, title).submit())?;
            finish(view.create(&payload).await)?;
        }
        ProductionCommands::Summary { production_id } => {
            let summary = dashboard
                .production_summary(production_id)
                .await
                .ok_or_else(|| anyhow!("Could not load production {}", production_id))?;
            print!("{}", render::summary(&summary));
            return Ok(());
        }
    }

    show(view.list(), render::productions);
    Ok(())
}
