//! Terminal endpoints.

use axum::{extract::rejection::JsonRejection, Json};
use serde::Deserialize;

use super::{success, ApiResult};
use crate::terminal::{self, TerminalReply, WELCOME};

#[derive(Debug, Deserialize)]
pub struct TerminalCommand {
    pub command: String,
}

/// GET /api/terminal - Banner lines shown when the terminal opens.
pub async fn terminal_banner() -> ApiResult<[&'static str; 2]> {
    success(WELCOME)
}

/// POST /api/terminal - Run one command.
pub async fn run_terminal_command(
    payload: Result<Json<TerminalCommand>, JsonRejection>,
) -> ApiResult<TerminalReply> {
    let Json(request) = payload?;
    success(terminal::run(&request.command)?)
}
