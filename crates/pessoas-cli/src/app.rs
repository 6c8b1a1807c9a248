use crate::auth_commands::AuthCommands;
use crate::person_commands::{AddressArgs, PersonCommands};
use crate::{Cli, CliError, CliResult, commands::Commands, logger};

use pessoas_client::{
    ActionOutcome, ApiClient, ClientError, Notification, PersonDialog, PersonDirectory,
};
use pessoas_config::Config;
use pessoas_core::validation::{validate_credentials, validate_registration};
use pessoas_core::{Credentials, Registration, SchemaVersion};
use pessoas_session::{FileStore, SessionStore, UserInfo};

use std::process::ExitCode;
use std::sync::Arc;

use chrono::Utc;
use log::debug;
use serde::Serialize;
use serde_json::{Value, json};

/// What a command produced: JSON for stdout and a notification for stderr.
#[derive(Debug)]
pub(crate) struct Report {
    pub(crate) succeeded: bool,
    pub(crate) output: Option<Value>,
    pub(crate) notification: Option<Notification>,
}

impl Report {
    fn output(value: impl Serialize) -> CliResult<Self> {
        Ok(Self {
            succeeded: true,
            output: Some(serde_json::to_value(value).map_err(CliError::output)?),
            notification: None,
        })
    }

    fn success(output: Option<Value>, notification: Notification) -> Self {
        Self {
            succeeded: true,
            output,
            notification: Some(notification),
        }
    }

    fn failure(context: &str, err: &ClientError) -> Self {
        Self {
            succeeded: false,
            output: None,
            notification: Some(Notification::from_error(context, err)),
        }
    }

    fn from_outcome<T: Serialize>(outcome: ActionOutcome<T>) -> CliResult<Self> {
        let output = outcome
            .value
            .map(serde_json::to_value)
            .transpose()
            .map_err(CliError::output)?;
        Ok(Self {
            succeeded: outcome.succeeded,
            output,
            notification: Some(outcome.notification),
        })
    }

    fn emit(self, pretty: bool) -> ExitCode {
        if let Some(notification) = &self.notification {
            eprintln!("{notification}");
        }

        if let Some(value) = &self.output {
            let rendered = if pretty {
                serde_json::to_string_pretty(value)
            } else {
                serde_json::to_string(value)
            };
            match rendered {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    eprintln!("Error serializing response: {e}");
                    return ExitCode::FAILURE;
                }
            }
        }

        if self.succeeded {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

/// Session status as shown by `whoami`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SessionView {
    pub(crate) authenticated: bool,
    #[serde(flatten)]
    pub(crate) user: Option<UserInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) expires_in: Option<String>,
}

impl SessionView {
    pub(crate) fn from_user(user: Option<UserInfo>, authenticated: bool) -> Self {
        let expires_in = user
            .as_ref()
            .filter(|_| authenticated)
            .and_then(|user| (user.expires_at - Utc::now()).to_std().ok())
            .map(|remaining| {
                let whole_seconds = std::time::Duration::from_secs(remaining.as_secs());
                humantime::format_duration(whole_seconds).to_string()
            });

        Self {
            authenticated,
            user,
            expires_in,
        }
    }
}

/// Run one CLI invocation and map the result to an exit code.
pub async fn run(cli: Cli) -> ExitCode {
    let pretty = cli.pretty;
    match execute(cli).await {
        Ok(report) => report.emit(pretty),
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn execute(cli: Cli) -> CliResult<Report> {
    let config = load_config(&cli)?;

    let log_file = match &config.logging.file {
        Some(file) => Some(Config::config_dir()?.join(file)),
        None => None,
    };
    logger::initialize(config.logging.level, log_file, config.logging.colored)?;
    config.log_summary();

    let session = Arc::new(SessionStore::new(FileStore::new(config.session_path()?)));
    let api = ApiClient::new(&config.api.base_url, session);

    match cli.command {
        Commands::Auth(command) => run_auth(&api, command).await,
        Commands::Person { action } => run_person(&api, config.api.version, action).await,
    }
}

/// Config file and environment first, then command-line flags.
pub(crate) fn load_config(cli: &Cli) -> CliResult<Config> {
    let mut config = Config::load()?;
    if let Some(url) = &cli.api_url {
        config.api.base_url.clone_from(url);
    }
    if let Some(version) = cli.api_version {
        config.api.version = version;
    }
    config.validate()?;
    Ok(config)
}

async fn run_auth(api: &ApiClient, command: AuthCommands) -> CliResult<Report> {
    match command {
        AuthCommands::Login { username, password } => {
            const CONTEXT: &str = "Could not log in";
            let credentials = Credentials { username, password };
            if let Err(errors) = validate_credentials(&credentials) {
                return Ok(Report::failure(CONTEXT, &ClientError::validation(errors)));
            }

            match api.login(&credentials).await {
                Ok(auth) => {
                    let view = SessionView::from_user(api.session().user_info()?, true);
                    Ok(Report::success(
                        Some(serde_json::to_value(view).map_err(CliError::output)?),
                        Notification::success(format!("Logged in as {}", auth.username)),
                    ))
                }
                Err(e) => Ok(Report::failure(CONTEXT, &e)),
            }
        }

        AuthCommands::Register {
            username,
            email,
            password,
            confirm_password,
        } => {
            const CONTEXT: &str = "Could not register";
            let registration = Registration {
                username,
                email,
                password,
            };
            if let Err(errors) = validate_registration(&registration, &confirm_password) {
                return Ok(Report::failure(CONTEXT, &ClientError::validation(errors)));
            }

            match api.register(&registration).await {
                Ok(_) => Ok(Report::success(
                    Some(json!({
                        "username": registration.username,
                        "email": registration.email,
                    })),
                    Notification::success("Account created. Log in to continue."),
                )),
                Err(e) => Ok(Report::failure(CONTEXT, &e)),
            }
        }

        AuthCommands::Logout => match api.logout() {
            Ok(()) => Ok(Report::success(None, Notification::info("Logged out"))),
            Err(e) => Ok(Report::failure("Could not log out", &e)),
        },

        AuthCommands::Whoami => {
            let session = api.session();
            Report::output(SessionView::from_user(
                session.user_info()?,
                session.is_authenticated(),
            ))
        }
    }
}

async fn run_person(
    api: &ApiClient,
    default_version: SchemaVersion,
    command: PersonCommands,
) -> CliResult<Report> {
    if let Err(e) = api.require_session() {
        return Ok(Report::failure("Person commands need a session", &e));
    }

    let directory = PersonDirectory::new(api.clone());

    match command {
        PersonCommands::List { search } => match directory.refresh().await {
            Ok(people) => match search.as_deref() {
                Some(query) => Report::output(directory.search(query)),
                None => Report::output(people.as_slice()),
            },
            Err(e) => Ok(Report::failure("Could not load people", &e)),
        },

        PersonCommands::Get { id, schema } => {
            let version = schema.unwrap_or(default_version);
            match directory.get(id, version).await {
                Ok(person) => Report::output(person),
                Err(e) => Ok(Report::failure("Could not load person", &e)),
            }
        }

        PersonCommands::Create {
            fields,
            address,
            with_address,
        } => {
            let mut dialog = PersonDialog::new();
            let form = dialog.open_create()?;
            fields.apply(form);
            address.apply(form);
            form.include_address = with_address || !address.is_empty();

            Report::from_outcome(directory.submit(&mut dialog).await)
        }

        PersonCommands::Edit {
            id,
            schema,
            fields,
            address,
            with_address,
            without_address,
        } => {
            let person = match directory.get(id, schema).await {
                Ok(person) => person,
                Err(e) => return Ok(Report::failure("Could not load person", &e)),
            };

            let mut dialog = PersonDialog::new();
            let form = dialog.open_edit(&person)?;
            fields.apply(form);
            address.apply(form);
            form.include_address =
                address_toggle(form.include_address, with_address, without_address, &address);
            debug!("Editing {schema} person {id}, include address: {}", form.include_address);

            Report::from_outcome(directory.submit(&mut dialog).await)
        }

        PersonCommands::Delete { id, schema } => {
            let outcome = directory.remove(id, schema).await;
            let output = outcome
                .succeeded
                .then(|| json!({ "deleted": id, "schema": schema }));
            Ok(Report {
                succeeded: outcome.succeeded,
                output,
                notification: Some(outcome.notification),
            })
        }
    }
}

/// Explicit flags win; otherwise giving any address field switches the
/// address on, and the staged value stays as it was.
pub(crate) fn address_toggle(
    staged: bool,
    with_address: bool,
    without_address: bool,
    address: &AddressArgs,
) -> bool {
    if with_address {
        true
    } else if without_address {
        false
    } else {
        staged || !address.is_empty()
    }
}
