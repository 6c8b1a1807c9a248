use pessoas_client::PersonForm;
use pessoas_core::SchemaVersion;

use clap::{Args, Subcommand};

#[derive(Subcommand, Debug)]
pub(crate) enum PersonCommands {
    /// List people from both schemas, newest first
    List {
        /// Filter by name, e-mail or CPF
        #[arg(long)]
        search: Option<String>,
    },
    /// Get a person by ID
    Get {
        id: i64,
        /// Collection to read (defaults to the configured API version)
        #[arg(long)]
        schema: Option<SchemaVersion>,
    },
    /// Create a person (v2 when an address is given, else v1)
    Create {
        #[command(flatten)]
        fields: PersonArgs,
        #[command(flatten)]
        address: AddressArgs,
        /// Store an address with the person
        #[arg(long)]
        with_address: bool,
    },
    /// Edit a person; toggling the address moves it between schemas
    Edit {
        id: i64,
        /// Collection the person currently lives in
        #[arg(long)]
        schema: SchemaVersion,
        #[command(flatten)]
        fields: PersonArgs,
        #[command(flatten)]
        address: AddressArgs,
        #[arg(long, conflicts_with = "without_address")]
        with_address: bool,
        #[arg(long)]
        without_address: bool,
    },
    /// Delete a person
    Delete {
        id: i64,
        #[arg(long)]
        schema: SchemaVersion,
    },
}

#[derive(Args, Debug, Default)]
pub(crate) struct PersonArgs {
    #[arg(long)]
    pub(crate) nome: Option<String>,
    #[arg(long)]
    pub(crate) sexo: Option<String>,
    #[arg(long)]
    pub(crate) email: Option<String>,
    /// Birth date, YYYY-MM-DD
    #[arg(long)]
    pub(crate) data_nascimento: Option<String>,
    #[arg(long)]
    pub(crate) naturalidade: Option<String>,
    #[arg(long)]
    pub(crate) nacionalidade: Option<String>,
    /// CPF, with or without punctuation
    #[arg(long)]
    pub(crate) cpf: Option<String>,
}

impl PersonArgs {
    /// Overwrite the form fields that were given on the command line.
    pub(crate) fn apply(&self, form: &mut PersonForm) {
        let text_fields = [
            (&self.nome, &mut form.nome),
            (&self.sexo, &mut form.sexo),
            (&self.email, &mut form.email),
            (&self.data_nascimento, &mut form.data_nascimento),
            (&self.naturalidade, &mut form.naturalidade),
            (&self.nacionalidade, &mut form.nacionalidade),
        ];
        for (arg, field) in text_fields {
            if let Some(value) = arg {
                field.clone_from(value);
            }
        }
        if let Some(cpf) = &self.cpf {
            form.set_cpf(cpf);
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct AddressArgs {
    #[arg(long)]
    pub(crate) rua: Option<String>,
    #[arg(long)]
    pub(crate) numero: Option<String>,
    #[arg(long)]
    pub(crate) cidade: Option<String>,
    #[arg(long)]
    pub(crate) estado: Option<String>,
    /// CEP, with or without punctuation
    #[arg(long)]
    pub(crate) cep: Option<String>,
}

impl AddressArgs {
    pub(crate) fn is_empty(&self) -> bool {
        [&self.rua, &self.numero, &self.cidade, &self.estado, &self.cep]
            .iter()
            .all(|arg| arg.is_none())
    }

    pub(crate) fn apply(&self, form: &mut PersonForm) {
        let address = form.address_mut();
        let text_fields = [
            (&self.rua, &mut address.rua),
            (&self.numero, &mut address.numero),
            (&self.cidade, &mut address.cidade),
            (&self.estado, &mut address.estado),
        ];
        for (arg, field) in text_fields {
            if let Some(value) = arg {
                field.clone_from(value);
            }
        }
        if let Some(cep) = &self.cep {
            form.set_cep(cep);
        }
    }
}
