//! Command execution against the API

use super::command::Command;
use anyhow::Result;
use scholar_client::{
    AuthSession, NewsQuery, PageParams, ScholarApi, ScholarQuery, SearchOptions, TagListQuery,
    UserQuery,
};
use serde_json::{json, Value};
use tracing::info;

fn page(page: Option<u32>) -> PageParams {
    PageParams {
        page,
        page_size: None,
    }
}

/// Run `command` and return its result as JSON for printing
pub async fn run_command(api: &ScholarApi, command: Command) -> Result<Value> {
    let value = match command {
        Command::Scholars { page: p } => {
            let query = ScholarQuery {
                page: page(p),
                ..Default::default()
            };
            serde_json::to_value(api.list_scholars(&query).await?)?
        }
        Command::Scholar { id } => serde_json::to_value(api.get_scholar(&id).await?)?,
        Command::Tags => serde_json::to_value(api.list_tags(&TagListQuery::default()).await?)?,
        Command::Identities => serde_json::to_value(api.list_identities().await?)?,
        Command::News { page: p } => {
            let query = NewsQuery {
                page: page(p),
                scholar_id: None,
            };
            serde_json::to_value(api.list_news(&query).await?)?
        }
        Command::LoginUrl => json!({ "loginUrl": api.login_url().as_str() }),
        Command::Session { access, refresh } => {
            api.establish_session(&AuthSession {
                access_token: access,
                refresh_token: refresh,
            })?;
            json!({ "session": "stored" })
        }
        Command::Refresh => {
            api.refresh().await?;
            info!("Access token refreshed");
            json!({ "refreshed": true })
        }
        Command::Logout => serde_json::to_value(api.logout().await?)?,
        Command::Users { page: p } => {
            let query = UserQuery {
                page: page(p),
                ..Default::default()
            };
            serde_json::to_value(api.list_users(&query).await?)?
        }
        Command::Search { query } => {
            serde_json::to_value(api.rag_search(&SearchOptions::new(query)).await?)?
        }
    };

    Ok(value)
}
