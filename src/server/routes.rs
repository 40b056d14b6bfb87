use crate::api::GitHubClient;
use crate::cli::AppConfig;
use crate::error::{AppError, Result};
use crate::models::TrendQuery;
use crate::trends::{self, TrendAggregator};
use actix_web::{get, web, HttpResponse};
use serde::Deserialize;
use tracing::debug;

pub const GREETING: &str = "Greetings from Valaxy Technologies";

/// Query parameters for GET /trends
#[derive(Debug, Deserialize)]
pub struct TrendsParams {
    /// Location identifier (a WOEID, e.g. 2459115 for New York)
    pub placeid: Option<String>,

    /// Maximum number of trends to return, as sent by the caller
    pub count: Option<String>,
}

/// GET / - builds the GitHub client as a credentials check, then greets.
#[get("/")]
async fn greeting(config: web::Data<AppConfig>) -> Result<HttpResponse> {
    let github = GitHubClient::new(&config.github)?;
    let search = github.search_repositories().q("stars:>1000").sort("stars");
    debug!("Prepared repository search: {}", search.url());

    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(GREETING))
}

/// GET /trends?placeid={id}&count={n}
#[get("/trends")]
async fn get_trends(
    config: web::Data<AppConfig>,
    params: web::Query<TrendsParams>,
) -> Result<HttpResponse> {
    let params = params.into_inner();
    let placeid = params
        .placeid
        .ok_or_else(|| AppError::BadRequest("missing query parameter: placeid".to_string()))?;
    let count = params
        .count
        .ok_or_else(|| AppError::BadRequest("missing query parameter: count".to_string()))?;
    let query = TrendQuery::parse(&placeid, &count)?;

    let creds = trends::resolve(&config.twitter);
    let aggregator = TrendAggregator::new(&config.twitter, config.fetch_timeout);
    let result = aggregator.fetch_trends(&query, &creds).await;

    Ok(HttpResponse::Ok().json(result))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(greeting).service(get_trends);
}
