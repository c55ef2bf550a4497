//! Interactive console shell: a thin line-oriented front over the session
//! store and access guard, used by dispatch-office staff and by manual
//! testing. Commands mirror the view transitions of the web shell.

use std::io::{self, Write};
use std::sync::Arc;

use anyhow::Result;

use crate::identity::{AccessGuard, Credentials, NavigationDecision, Permission, SessionStore};
use crate::navigation::{find_route, home_redirect, ROUTES};
use crate::notify::Notifier;

pub fn print_help() {
    println!(
        "Commands:\n  login <username> <password>   open a session\n  logout                        close the current session\n  whoami                        show the authenticated identity and role\n  goto <path>                   attempt a navigation, e.g. goto /fuel\n  can <permission>              point permission query, e.g. can can_manage_fuel\n  routes                        list known destinations and their metadata\n  help                          show this help\n  quit | exit                   leave the console"
    );
}

fn describe_meta(meta: &crate::identity::RouteMeta) -> String {
    let mut parts = Vec::new();
    if meta.requires_auth {
        parts.push("auth".to_string());
    }
    if meta.requires_guest {
        parts.push("guest-only".to_string());
    }
    if let Some(p) = meta.requires_permission {
        parts.push(p.to_string());
    }
    if parts.is_empty() { "open".to_string() } else { parts.join(", ") }
}

fn handle_goto(guard: &AccessGuard, path: &str) {
    // "/" is a shell-level redirect; the guard then rules on the target.
    let effective = if path == "/" { home_redirect() } else { path };
    let route = find_route(effective);
    match guard.authorize_navigation(&route.meta) {
        NavigationDecision::Allow => println!("-> {} ({})", route.path, route.name),
        NavigationDecision::Redirect(target) => {
            println!("-> redirected to {}", target);
        }
    }
}

/// Run the interactive loop until EOF or an exit command.
pub fn run(
    session: Arc<SessionStore>,
    guard: &AccessGuard,
    notifier: &dyn Notifier,
) -> Result<()> {
    if let Some(identity) = session.identity() {
        println!("Restored session for {}", identity.username);
    }
    println!("Type 'help' for the command list.");

    let stdin = io::stdin();
    loop {
        print!("khtrm> ");
        io::stdout().flush().ok();
        let mut line = String::new();
        if stdin.read_line(&mut line).is_err() {
            break;
        }
        if line.is_empty() {
            // EOF
            break;
        }
        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            [] => continue,
            ["quit"] | ["exit"] => break,
            ["help"] => print_help(),
            ["login", username, password] => {
                let creds = Credentials {
                    username: (*username).to_string(),
                    password: (*password).to_string(),
                };
                match session.login(&creds) {
                    Ok(()) => {
                        let role = session.role().map(|r| r.display_name).unwrap_or_default();
                        notifier.success(&format!("Logged in as {} ({})", username, role));
                    }
                    Err(e) => notifier.error(&format!("Login failed: {}", e.message())),
                }
            }
            ["login", ..] => println!("usage: login <username> <password>"),
            ["logout"] => {
                session.logout();
                notifier.info("Logged out");
            }
            ["whoami"] => match session.identity() {
                Some(identity) => {
                    let role = session
                        .role()
                        .map(|r| format!("{} ({})", r.name, r.display_name))
                        .unwrap_or_default();
                    println!("{} <{}> role: {}", identity.username, identity.email, role);
                }
                None => println!("not authenticated"),
            },
            ["goto", path] => handle_goto(guard, path),
            ["goto", ..] => println!("usage: goto <path>"),
            ["can", permission] => match permission.parse::<Permission>() {
                Ok(p) => println!("{}", if guard.has_permission(p) { "yes" } else { "no" }),
                Err(e) => println!("{}", e),
            },
            ["can", ..] => println!("usage: can <permission>"),
            ["routes"] => {
                for r in ROUTES {
                    println!("{:<14} {:<12} [{}]", r.path, r.name, describe_meta(&r.meta));
                }
            }
            _ => println!("unknown command; type 'help'"),
        }
    }
    Ok(())
}
