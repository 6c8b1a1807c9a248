use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub(crate) enum AuthCommands {
    /// Log in and store the session
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account (does not log in)
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm_password: String,
    },
    /// Drop the stored session
    Logout,
    /// Show the stored session
    Whoami,
}
