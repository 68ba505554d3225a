//! Command-line front end.
//!
//! Each subcommand drives the same controllers and services a graphical front end would, and
//! renders the result as plain text.

pub mod render;

#[cfg(test)]
mod tests;

use clap::{Parser, Subcommand};
use entity::{Entity, EntityKind, FundMaster, LegalEntity, ManagementEntity, ShareClass, SubFund};

use crate::{
    api::{ApiClient, CatalogClient, InsightsClient},
    config::Config,
    controller::{ListController, Navigator},
    error::Error,
    service::{next_id, InsightsService, StatsService},
};

/// Calls `$func::<E>(args..)` for the record type `E` of a runtime [`EntityKind`].
macro_rules! for_kind {
    ($kind:expr, $func:ident($($arg:expr),* $(,)?)) => {
        match $kind {
            EntityKind::LegalEntity => $func::<LegalEntity>($($arg),*).await,
            EntityKind::ManagementEntity => $func::<ManagementEntity>($($arg),*).await,
            EntityKind::FundMaster => $func::<FundMaster>($($arg),*).await,
            EntityKind::SubFund => $func::<SubFund>($($arg),*).await,
            EntityKind::ShareClass => $func::<ShareClass>($($arg),*).await,
        }
    };
}

#[derive(Parser, Debug)]
#[command(
    name = "fundbank",
    version,
    about = "Browse the fund back-office catalog and its AI insights."
)]
pub struct Cli {
    /// Log requests and ignored completions.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List records of a kind (e.g. `funds`, `share_classes`, `Legal Entity`).
    List {
        kind: EntityKind,
        /// Case-insensitive text matched against the kind's searchable fields.
        #[arg(long)]
        search: Option<String>,
        /// Exact filter in the form FIELD=VALUE.
        #[arg(long, value_parser = parse_pin)]
        pin: Option<(String, String)>,
        /// Status facet: ALL, ACTIVE or CLOSED.
        #[arg(long)]
        status: Option<String>,
        /// Numeric field to sort by, largest first.
        #[arg(long)]
        sort: Option<String>,
    },
    /// Show one record.
    Get { kind: EntityKind, id: String },
    /// Propose the id the next record of a kind would get.
    NextId { kind: EntityKind },
    /// Follow a key field of one kind to the related records.
    Navigate {
        from: EntityKind,
        field: String,
        value: String,
        /// Target kind; defaults to the kind the foreign key references.
        #[arg(long)]
        to: Option<EntityKind>,
    },
    /// Show insights for one fund, or the portfolio overview without a fund id.
    Insights {
        fund_id: Option<String>,
        /// Risk detail of the fund, or the portfolio risk analysis without a fund id.
        #[arg(long, conflicts_with = "predictions")]
        risk: bool,
        /// NAV predictions across all funds.
        #[arg(long, conflicts_with = "fund_id")]
        predictions: bool,
    },
    /// Show catalog statistics.
    Stats,
    /// Check that the backend is up.
    Health,
}

fn parse_pin(raw: &str) -> Result<(String, String), String> {
    let (field, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got {:?}", raw))?;

    let field = field.trim();
    if field.is_empty() {
        return Err("field name must not be empty".to_string());
    }

    Ok((field.to_string(), value.trim().to_string()))
}

#[derive(Debug, Default)]
struct ListOptions<'a> {
    search: Option<&'a str>,
    pin: Option<(&'a str, &'a str)>,
    status: Option<&'a str>,
    sort: Option<&'a str>,
}

/// Runs `command` and returns the text to print.
pub async fn execute(command: Command, api: ApiClient, config: &Config) -> Result<String, Error> {
    match command {
        Command::List {
            kind,
            search,
            pin,
            status,
            sort,
        } => {
            let options = ListOptions {
                search: search.as_deref(),
                pin: pin.as_ref().map(|(field, value)| (field.as_str(), value.as_str())),
                status: status.as_deref(),
                sort: sort.as_deref(),
            };
            for_kind!(kind, list(api, &options))
        }
        Command::Get { kind, id } => for_kind!(kind, get(api, &id)),
        Command::NextId { kind } => for_kind!(kind, propose_id(api)),
        Command::Navigate {
            from,
            field,
            value,
            to,
        } => {
            let mut navigator = Navigator::new(api);
            let route = match to {
                Some(target) => navigator.navigate_to(from, &field, &value, target)?,
                None => navigator.navigate(from, &field, &value)?,
            };

            let table = for_kind!(route.kind, show(&mut navigator))?;
            Ok(format!("{}\n{}", render::route(&route), table))
        }
        Command::Insights {
            fund_id,
            risk,
            predictions,
        } => {
            let view = match (fund_id, risk, predictions) {
                (Some(fund_id), true, _) => InsightsView::FundRisk(fund_id),
                (Some(fund_id), false, _) => InsightsView::Fund(fund_id),
                (None, _, true) => InsightsView::Predictions,
                (None, true, false) => InsightsView::Risk,
                (None, false, false) => InsightsView::Overview,
            };
            insights(api, config, view).await
        }
        Command::Stats => {
            let (legal_entities, funds, share_classes) = (
                CatalogClient::new(api.clone()),
                CatalogClient::new(api.clone()),
                CatalogClient::new(api),
            );
            let stats = StatsService::new(&legal_entities, &funds, &share_classes)
                .load()
                .await?;

            Ok(render::stats(&stats))
        }
        Command::Health => {
            let ack = api.health().await?;

            Ok(ack.message().unwrap_or("ok").to_string())
        }
    }
}

/// Which insights screen to show.
enum InsightsView {
    Fund(String),
    FundRisk(String),
    Overview,
    Predictions,
    Risk,
}

async fn insights(api: ApiClient, config: &Config, view: InsightsView) -> Result<String, Error> {
    let client = InsightsClient::new(api);
    let service = InsightsService::new(&client);

    let out = match view {
        InsightsView::Fund(fund_id) => render::fund_lookup(&service.lookup_fund(&fund_id).await?),
        InsightsView::FundRisk(fund_id) => render::fund_risk(&service.fund_risk(&fund_id).await?),
        InsightsView::Overview => {
            render::overview(&service.overview(config.recommendation_count).await?)
        }
        InsightsView::Predictions => render::predictions(&service.predictions().await?),
        InsightsView::Risk => render::risk(&service.risk().await?),
    };

    Ok(out)
}

async fn list<E: Entity>(api: ApiClient, options: &ListOptions<'_>) -> Result<String, Error> {
    let mut controller = ListController::<E>::new(CatalogClient::new(api));
    controller.load().await?;

    if let Some((field, value)) = options.pin {
        controller.set_pinned(field, value)?;
    }
    if let Some(status) = options.status {
        controller.set_status(Some(status))?;
    }
    if let Some(search) = options.search {
        controller.set_free_text(search);
    }
    if let Some(field) = options.sort {
        controller.sort_by(field)?;
    }

    Ok(render::table(controller.visible()))
}

async fn get<E: Entity>(api: ApiClient, id: &str) -> Result<String, Error> {
    let record = CatalogClient::<E>::new(api).get(id).await?;

    Ok(render::record(&record))
}

async fn propose_id<E: Entity>(api: ApiClient) -> Result<String, Error> {
    let records = CatalogClient::<E>::new(api).list().await?;

    Ok(next_id(&records))
}

/// Loads the screen a navigation landed on, as the presentation layer would on display.
async fn show<E: Entity>(navigator: &mut Navigator) -> Result<String, Error> {
    let controller = navigator.controller::<E>()?;
    controller.load().await?;

    Ok(render::table(controller.visible()))
}
