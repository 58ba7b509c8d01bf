use anyhow::Result;
use tracing::{debug, info};

use crate::branch::validate_branch;
use crate::git;
use crate::github::auth::load_token;
use crate::github::client::GitHubClient;

/// The backport flow, strictly sequential: parse and validate both
/// arguments before any file or network I/O, then fetch, then report.
pub async fn run(url: &str, branch: &str) -> Result<()> {
    let pr_ref = GitHubClient::parse_pr_url(url)?;
    debug!(
        owner = %pr_ref.owner,
        repo = %pr_ref.repo,
        number = pr_ref.number,
        "parsed pull request URL"
    );

    validate_branch(branch)?;

    let token = load_token()?;
    let client = GitHubClient::new(token);

    info!(pr = %pr_ref.url(), "fetching pull request");
    let (pr, rate) = client.get_pr(&pr_ref).await?;
    debug!(
        number = pr.number,
        author = pr.author.as_ref().map(|a| a.login.as_str()).unwrap_or(""),
        state = %pr.state,
        head = %pr.head.ref_field,
        base = %pr.base.ref_field,
        "fetched pull request"
    );

    println!("{rate}");
    println!("{}", pr.title.as_deref().unwrap_or(""));

    let status = git::git(&["status"])?;
    println!("{status}");

    println!("backported {url:?}");
    Ok(())
}
