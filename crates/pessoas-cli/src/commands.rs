use crate::{auth_commands::AuthCommands, person_commands::PersonCommands};

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    #[command(flatten)]
    Auth(AuthCommands),

    /// Person operations (require a session)
    Person {
        #[command(subcommand)]
        action: PersonCommands,
    },
}
