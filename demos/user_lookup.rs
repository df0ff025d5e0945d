//! User Lookup Example
//!
//! Looks a user up in an in-memory "database" and handles each kind of
//! failure differently:
//! - expected failures are classified with `is` and reported with their fields
//! - unexpected failures dump the stack and escalate with `fatal!`
//!
//! Run with: cargo run --example user_lookup -- <username>
//!
//! Try `laureen` (found), `harrison` (inactive), `nobody` (not found) and
//! `stephen` (the database goes down).

use std::collections::BTreeMap;
use std::process::ExitCode;

use chained_error::prelude::*;

const ERR_USER_NOT_FOUND: Kind = Kind::from_static("user not found");
const ERR_USER_INACTIVE: Kind = Kind::from_static("user is inactive");

#[derive(Debug, Clone)]
struct User {
    name: &'static str,
    email: &'static str,
    active: bool,
}

fn users() -> BTreeMap<&'static str, User> {
    let user = |name, email, active| User { name, email, active };
    BTreeMap::from([
        ("laureen", user("Laureen I. Eason", "dilaureen8@yopmail.com", true)),
        ("harrison", user("Harrison F. Perreault", "ifperreault5@yopmail.com", false)),
        ("stephen", user("Stephen I. Hasty", "distephen8@yopmail.com", true)),
    ])
}

/// Stands in for a third-party driver error.
#[derive(Debug)]
struct ConnectionLost;

impl std::fmt::Display for ConnectionLost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("database went down, oh no")
    }
}

impl std::error::Error for ConnectionLost {}

fn query(username: &str) -> std::result::Result<(), ConnectionLost> {
    if username == "stephen" {
        return Err(ConnectionLost);
    }
    Ok(())
}

fn get_user(username: &str) -> Result<User> {
    let Some(user) = users().remove(username) else {
        return Err(err!(ERR_USER_NOT_FOUND).with_field("username", username));
    };

    if !user.active {
        return Err(err!(ERR_USER_INACTIVE).with_field("username", username));
    }

    query(username)
        .wrap_err(["errors without a kind should probably always be handled"])
        .map_err(|err| err.with_field("username", username))?;

    Ok(user)
}

fn print_error_fields(err: &Error) {
    for (key, value) in fields(err).into_iter().flat_map(|map| map.into_owned()) {
        println!("- {:?}: {}", key, value);
    }
}

fn main() -> ExitCode {
    let Some(username) = std::env::args().nth(1).filter(|name| !name.is_empty()) else {
        eprintln!("No username provided, exiting...");
        return ExitCode::FAILURE;
    };

    match get_user(&username) {
        Ok(user) => {
            println!("{:#?}", user);
            ExitCode::SUCCESS
        },
        Err(err) if err.is(ERR_USER_NOT_FOUND) => {
            println!("User not found:");
            print_error_fields(&err);
            ExitCode::FAILURE
        },
        Err(err) if err.is(ERR_USER_INACTIVE) => {
            println!("User is inactive:");
            print_error_fields(&err);
            ExitCode::FAILURE
        },
        Err(err) => {
            match serde_json::to_string_pretty(&err.stack()) {
                Ok(json) => println!("{}", json),
                Err(e) => eprintln!("failed to serialize stack: {}", e),
            }
            fatal!(&err);
            ExitCode::FAILURE
        },
    }
}
