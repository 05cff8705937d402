//! Console command parsing

use anyhow::{bail, Context, Result};

pub const USAGE: &str = "\
Usage: scholar-cli <command> [args]

Commands:
  scholars [page]              List visible scholars
  scholar <id>                 Show one scholar
  tags                         List tags with their scholars
  identities                   List identities
  news [page]                  List news
  login-url                    Print the login entry point
  session <access> <refresh>   Store tokens from the login callback
  refresh                      Exchange the refresh token for a new access token
  logout                       End the session
  users [page]                 List users (admin)
  search <query...>            Semantic search over scholars (admin)";

/// One console invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Scholars { page: Option<u32> },
    Scholar { id: String },
    Tags,
    Identities,
    News { page: Option<u32> },
    LoginUrl,
    Session { access: String, refresh: String },
    Refresh,
    Logout,
    Users { page: Option<u32> },
    Search { query: String },
}

fn page_arg(args: &[String]) -> Result<Option<u32>> {
    args.first()
        .map(|raw| {
            raw.parse::<u32>()
                .with_context(|| format!("page must be a number, got {:?}", raw))
        })
        .transpose()
}

impl Command {
    /// Parse arguments (program name excluded)
    pub fn parse(args: &[String]) -> Result<Self> {
        let Some((name, rest)) = args.split_first() else {
            bail!("missing command\n\n{}", USAGE);
        };

        let command = match name.as_str() {
            "scholars" => Command::Scholars { page: page_arg(rest)? },
            "scholar" => match rest.first() {
                Some(id) => Command::Scholar { id: id.clone() },
                None => bail!("scholar needs an id"),
            },
            "tags" => Command::Tags,
            "identities" => Command::Identities,
            "news" => Command::News { page: page_arg(rest)? },
            "login-url" => Command::LoginUrl,
            "session" => match rest {
                [access, refresh] => Command::Session {
                    access: access.clone(),
                    refresh: refresh.clone(),
                },
                _ => bail!("session needs <access> <refresh>"),
            },
            "refresh" => Command::Refresh,
            "logout" => Command::Logout,
            "users" => Command::Users { page: page_arg(rest)? },
            "search" => {
                let query = rest.join(" ");
                if query.trim().is_empty() {
                    bail!("search needs a query");
                }
                Command::Search { query }
            }
            other => bail!("unknown command {:?}\n\n{}", other, USAGE),
        };

        Ok(command)
    }
}
