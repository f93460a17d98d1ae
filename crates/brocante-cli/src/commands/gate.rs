use anyhow::Result;
use brocante_core::gate::{GateDecision, ProtectedAction};
use brocante_infrastructure::ConfigService;
use serde_json::json;

use super::utils::{open_context, print_json};
use crate::GlobalOpts;

pub fn run(
    global: &GlobalOpts,
    service: &ConfigService,
    action: ProtectedAction,
    logged_out: bool,
) -> Result<()> {
    let mut ctx = open_context(global, service)?;
    if logged_out {
        ctx.session_mut().logout();
    }

    let decision = match ctx.route(action) {
        GateDecision::Proceed => "proceed",
        GateDecision::RedirectToLogin => "redirect-to-login",
    };

    if global.json {
        return print_json(&json!({
            "action": action,
            "authenticated": ctx.session().is_authenticated(),
            "decision": decision,
        }));
    }

    println!("{}: {}", action, decision);
    Ok(())
}
