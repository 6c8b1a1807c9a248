use pessoas_core::validation::{PersonFields, validate_address, validate_person_fields};
use pessoas_core::{
    Address, BirthDate, PersonPayload, PersonV2Payload, UnifiedPerson, ValidationErrors,
    format_cep, format_cpf, strip_non_digits,
};

use serde::Serialize;

/// Working copy of a person while the dialog is open.
///
/// Holds the text as the user sees it: CPF and CEP punctuated, birth date as
/// `YYYY-MM-DD`. Punctuation is stripped again when a payload is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonForm {
    pub nome: String,
    pub sexo: String,
    pub email: String,
    pub data_nascimento: String,
    pub naturalidade: String,
    pub nacionalidade: String,
    cpf: String,
    pub include_address: bool,
    endereco: Address,
}

impl PersonForm {
    /// Empty form for a new person. The address section starts switched off.
    pub fn blank() -> Self {
        Self::default()
    }

    /// Seed the form from an existing record. The address toggle starts on
    /// only when the record has a non-blank address.
    pub fn from_person(person: &UnifiedPerson) -> Self {
        let fields = &person.person;
        let mut form = Self {
            nome: fields.nome.clone(),
            sexo: fields.sexo.clone().unwrap_or_default(),
            email: fields.email.clone().unwrap_or_default(),
            data_nascimento: fields.data_nascimento.to_string(),
            naturalidade: fields.naturalidade.clone().unwrap_or_default(),
            nacionalidade: fields.nacionalidade.clone().unwrap_or_default(),
            cpf: format_cpf(&fields.cpf),
            include_address: person.has_address(),
            endereco: person.endereco.clone().unwrap_or_default(),
        };
        form.endereco.cep = format_cep(&form.endereco.cep);
        form
    }

    pub fn cpf(&self) -> &str {
        &self.cpf
    }

    /// Store the CPF with display punctuation, whatever was typed.
    pub fn set_cpf(&mut self, input: &str) {
        self.cpf = format_cpf(input);
    }

    pub fn address(&self) -> &Address {
        &self.endereco
    }

    /// Replace the address. The CEP is stored with display punctuation.
    pub fn set_address(&mut self, address: Address) {
        self.endereco = address;
        self.endereco.cep = format_cep(&self.endereco.cep);
    }

    pub fn address_mut(&mut self) -> &mut Address {
        &mut self.endereco
    }

    pub fn set_cep(&mut self, input: &str) {
        self.endereco.cep = format_cep(input);
    }

    /// Check every field; address fields only when the toggle is on.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        validate_person_fields(
            &PersonFields {
                nome: &self.nome,
                cpf: &self.cpf,
                email: &self.email,
                data_nascimento: &self.data_nascimento,
            },
            &mut errors,
        );
        if self.include_address {
            validate_address(&self.endereco, &mut errors);
        }
        errors.into_result()
    }

    /// Validated v1 payload with CPF digits only.
    pub fn to_payload(&self) -> Result<PersonPayload, ValidationErrors> {
        self.validate()?;
        self.person_payload()
    }

    /// Validated v2 payload with CPF and CEP digits only.
    pub fn to_v2_payload(&self) -> Result<PersonV2Payload, ValidationErrors> {
        self.validate()?;
        Ok(PersonV2Payload {
            person: self.person_payload()?,
            endereco: Address {
                rua: self.endereco.rua.trim().to_string(),
                numero: self.endereco.numero.trim().to_string(),
                cidade: self.endereco.cidade.trim().to_string(),
                estado: self.endereco.estado.trim().to_string(),
                cep: strip_non_digits(&self.endereco.cep),
            },
        })
    }

    fn person_payload(&self) -> Result<PersonPayload, ValidationErrors> {
        let data_nascimento = self
            .data_nascimento
            .trim()
            .parse::<BirthDate>()
            .map_err(|_| {
                let mut errors = ValidationErrors::new();
                errors.push("dataNascimento", "Birth date must be a valid date (YYYY-MM-DD)");
                errors
            })?;

        Ok(PersonPayload {
            nome: self.nome.trim().to_string(),
            sexo: optional(&self.sexo),
            email: optional(&self.email),
            data_nascimento,
            naturalidade: optional(&self.naturalidade),
            nacionalidade: optional(&self.nacionalidade),
            cpf: strip_non_digits(&self.cpf),
        })
    }
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
