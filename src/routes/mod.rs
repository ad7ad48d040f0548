//! Request routing
//!
//! Routes are matched on the path alone, in a fixed priority order. The
//! method token is never consulted: `POST /stats` and `GET /stats` are the
//! same request.
//!
//! | Path                 | Route                      |
//! |----------------------|----------------------------|
//! | `/static/<name>`     | [`Route::Static`]          |
//! | `/stats`             | [`Route::Stats`]           |
//! | `/calc...`           | [`Route::Calc`]            |
//! | anything else        | [`Route::NotFound`]        |

pub mod calc;
pub mod static_files;
pub mod stats;

use crate::config::Config;
use crate::http::request::Request;
use crate::http::response::Response;
use crate::stats::StatsRegistry;

pub use static_files::StaticContent;

/// Outcome of matching a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route<'a> {
    /// Served sub-path, keeping its leading slash (`/static/a.txt` -> `/a.txt`)
    Static(&'a str),
    Stats,
    /// The full path, query included
    Calc(&'a str),
    NotFound,
}

impl<'a> Route<'a> {
    pub fn resolve(path: &'a str) -> Self {
        if path.starts_with("/static/") {
            Route::Static(&path["/static".len()..])
        } else if path == "/stats" {
            Route::Stats
        } else if path.starts_with("/calc") {
            Route::Calc(path)
        } else {
            Route::NotFound
        }
    }
}

/// Everything a connection task needs to answer a request.
#[derive(Debug, Clone)]
pub struct Router {
    stats: StatsRegistry,
    static_content: StaticContent,
}

impl Router {
    pub fn new(stats: StatsRegistry, static_content: StaticContent) -> Self {
        Self {
            stats,
            static_content,
        }
    }

    pub fn from_config(cfg: &Config, stats: StatsRegistry) -> Self {
        Self::new(stats, StaticContent::from_config(&cfg.static_files))
    }

    pub fn stats(&self) -> &StatsRegistry {
        &self.stats
    }

    /// Builds the response for `req`. Never fails: every error maps to a status.
    pub async fn respond(&self, req: &Request) -> Response {
        match Route::resolve(&req.path) {
            Route::Static(sub_path) => self.static_content.serve(sub_path).await,
            Route::Stats => stats::render(self.stats.snapshot().await),
            Route::Calc(path) => calc::respond(path),
            Route::NotFound => Response::not_found(),
        }
    }
}
