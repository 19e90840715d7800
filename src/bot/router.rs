//! Dispatch of parsed commands to the calculator and the role store.

use super::command::Command;
use super::report::render_report;
use crate::error::CalcError;
use crate::models::{calculate_with_mask, parse_mask, parse_quad, split_cidr, NetworkInfo};
use crate::roles::RoleStore;

const HELP_TEXT: &str = "HELP\n\n\
    /help - view available commands.\n\
    /calc <address> <netmask> - calculate network infos, netmask dotted or as prefix length.\n\
    /calc <address>/<prefix> - same, CIDR notation.";

const ADMIN_HELP_TEXT: &str = "\n\nADMIN\n\n\
    /ping - send a test message.\n\
    /admin <id> - make a user an admin.\n\
    /unadmin <id> - remove an admin.\n\
    /ban <id> - ban a user from the bot.\n\
    /unban <id> - unban a user.\n\
    /roles - list admins and banned users.";

const CALC_USAGE: &str = "Invalid input, usage: /calc <address> <netmask> or /calc <address>/<prefix>";

/// Answer to a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Error(String),
}

/// Routes command lines from a sender to their handlers.
pub struct Router<'a> {
    roles: &'a RoleStore,
}

impl<'a> Router<'a> {
    pub fn new(roles: &'a RoleStore) -> Router<'a> {
        Router { roles }
    }

    /// Handle one line of text sent by `sender`.
    ///
    /// Returns `None` for plain text and unknown commands.
    pub fn handle(&self, sender: i64, line: &str) -> Option<Reply> {
        let command = Command::parse(line)?;
        log::debug!("handle sender={sender} command={command:?}");

        if self.roles.is_banned(sender) {
            log::warn!("Ignoring /{} from banned user {sender}", command.name);
            return Some(Reply::Error("You have been banned from this bot!".to_string()));
        }

        match command.name.as_str() {
            "help" => Some(self.help(sender)),
            "calc" => Some(calc(&command.args)),
            "ping" | "admin" | "unadmin" | "ban" | "unban" | "roles" => {
                if !self.roles.is_admin(sender) {
                    log::warn!("User {sender} tried admin command /{}", command.name);
                    return Some(Reply::Error(
                        "This command is reserved to admins.".to_string(),
                    ));
                }
                Some(self.admin_command(sender, &command))
            }
            _ => None,
        }
    }

    fn help(&self, sender: i64) -> Reply {
        if self.roles.is_admin(sender) {
            Reply::Text(format!("{HELP_TEXT}{ADMIN_HELP_TEXT}"))
        } else {
            Reply::Text(HELP_TEXT.to_string())
        }
    }

    fn admin_command(&self, sender: i64, command: &Command) -> Reply {
        if command.name == "ping" {
            return Reply::Text("pong".to_string());
        }
        if command.name == "roles" {
            let roles = self.roles.snapshot();
            return Reply::Text(format!(
                "Admins: {:?}\nBanned: {:?}",
                roles.admins, roles.banned
            ));
        }

        let id = match command.args.first().map(|arg| arg.parse::<i64>()) {
            Some(Ok(id)) => id,
            _ => {
                return Reply::Error(format!(
                    "You are using this command in the wrong way! Usage: /{} <user id>",
                    command.name
                ))
            }
        };

        let (result, done, unchanged) = match command.name.as_str() {
            "admin" => (self.roles.add_admin(id), "is now an admin", "is already an admin"),
            "unadmin" => (
                self.roles.remove_admin(id),
                "is no longer an admin",
                "is not an admin",
            ),
            "ban" => (self.roles.add_ban(id), "is now banned", "is already banned"),
            _ => (
                self.roles.remove_ban(id),
                "is no longer banned",
                "is not banned",
            ),
        };

        match result {
            Ok(true) => {
                log::info!(
                    target: "netcalc::audit",
                    "User {id} {done}, command issued by {sender}"
                );
                Reply::Text(format!("User {id} {done}!"))
            }
            Ok(false) => Reply::Text(format!("User {id} {unchanged}.")),
            Err(e) => Reply::Error(format!("ERROR: {e}.")),
        }
    }
}

fn calc(args: &[String]) -> Reply {
    let parsed = match args {
        [address, netmask, ..] => calculate_args(address, netmask),
        [cidr] => match split_cidr(cidr) {
            (address, Some(prefix)) => calculate_args(address, prefix),
            (_, None) => return Reply::Error(CALC_USAGE.to_string()),
        },
        [] => return Reply::Error(CALC_USAGE.to_string()),
    };

    match parsed {
        Ok(info) => Reply::Text(render_report(&info)),
        Err(e) => {
            log::warn!("calc {args:?} failed: {e}");
            Reply::Error(format!("ERROR: {e}"))
        }
    }
}

fn calculate_args(address: &str, netmask: &str) -> Result<NetworkInfo, CalcError> {
    let address = parse_quad(address)?;
    let netmask = parse_mask(netmask)?;
    calculate_with_mask(address, netmask)
}
