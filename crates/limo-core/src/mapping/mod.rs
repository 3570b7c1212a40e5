//! Mapping of extracted lead fields onto the reservation system's web forms.
//!
//! The output is a list of browser automation commands (`click`, `type`,
//! `select`, `open`) in the JSON shape UI.Vision macros use.

mod standardize;

pub use standardize::{standardize_email, standardize_phone, standardize_state, standardize_zip};

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ExtractionError;
use crate::models::config::MappingConfig;
use crate::models::lead::{ExtractionResult, Field};

/// Target form in the reservation system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormType {
    /// New customer account.
    AccountCreation,
    /// Reservation entry. No fields are mapped yet.
    Reservation,
}

impl FormType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AccountCreation => "accountCreation",
            Self::Reservation => "reservation",
        }
    }
}

impl fmt::Display for FormType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormType {
    type Err = ExtractionError;

    /// Accepts both `accountCreation` and `account-creation` spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', '_'], "").as_str() {
            "accountcreation" => Ok(Self::AccountCreation),
            "reservation" => Ok(Self::Reservation),
            _ => Err(ExtractionError::UnknownFormType(s.to_string())),
        }
    }
}

/// Kind of form control a field is entered into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Checkbox,
    Select,
}

/// Where a form value comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSource {
    /// Text of an extracted field.
    Extracted(Field),
    /// Fixed default.
    Default(&'static str),
    /// Configured payment method.
    PaymentMethod,
}

/// One form control and how to fill it.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// Control name, used in logs.
    pub name: &'static str,
    /// Candidate selectors; only the first is emitted.
    pub selectors: &'static [&'static str],
    pub kind: InputKind,
    pub source: ValueSource,
    /// Skip the control (with a warning) when its value is empty.
    pub required: bool,
}

const ACCOUNT_CREATION_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "firstName",
        selectors: &["id=contN1T1", "name=contFName"],
        kind: InputKind::Text,
        source: ValueSource::Extracted(Field::FirstName),
        required: true,
    },
    FieldSpec {
        name: "lastName",
        selectors: &["id=contN2T1", "name=contLName"],
        kind: InputKind::Text,
        source: ValueSource::Extracted(Field::LastName),
        required: true,
    },
    FieldSpec {
        name: "contactType1",
        selectors: &["name=contType1"],
        kind: InputKind::Checkbox,
        source: ValueSource::Default("true"),
        required: false,
    },
    FieldSpec {
        name: "contactType2",
        selectors: &["name=contType2"],
        kind: InputKind::Checkbox,
        source: ValueSource::Default("true"),
        required: false,
    },
    FieldSpec {
        name: "address",
        selectors: &["name=contAddr1"],
        kind: InputKind::Text,
        source: ValueSource::Extracted(Field::Address),
        required: false,
    },
    FieldSpec {
        name: "city",
        selectors: &["name=contCity"],
        kind: InputKind::Text,
        source: ValueSource::Extracted(Field::City),
        required: false,
    },
    FieldSpec {
        name: "state",
        selectors: &["name=contState"],
        kind: InputKind::Select,
        source: ValueSource::Extracted(Field::State),
        required: false,
    },
    FieldSpec {
        name: "zipCode",
        selectors: &["name=contZip"],
        kind: InputKind::Text,
        source: ValueSource::Extracted(Field::ZipCode),
        required: false,
    },
    FieldSpec {
        name: "phone",
        selectors: &[r#"xpath=//*[@id="AutoNumber6"]/tbody/tr[3]/td/div/input"#],
        kind: InputKind::Text,
        source: ValueSource::Extracted(Field::Phone),
        required: false,
    },
    FieldSpec {
        name: "email",
        selectors: &["id=emailValue1", "name=emailValue1"],
        kind: InputKind::Text,
        source: ValueSource::Extracted(Field::Email),
        required: false,
    },
    FieldSpec {
        name: "emailProp1",
        selectors: &[r#"xpath=//*[@id="divWithEmailProp"]/div/label/input"#],
        kind: InputKind::Checkbox,
        source: ValueSource::Default("true"),
        required: false,
    },
    FieldSpec {
        name: "emailProp2",
        selectors: &["name=emailProp1"],
        kind: InputKind::Checkbox,
        source: ValueSource::Default("true"),
        required: false,
    },
    FieldSpec {
        name: "paymentMethod",
        selectors: &["name=contPaymentMethod"],
        kind: InputKind::Select,
        source: ValueSource::PaymentMethod,
        required: false,
    },
];

/// A single browser automation step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomationCommand {
    #[serde(rename = "Command")]
    pub command: String,
    #[serde(rename = "Target")]
    pub target: String,
    #[serde(rename = "Value")]
    pub value: String,
}

impl AutomationCommand {
    pub fn new(command: &str, target: &str, value: impl Into<String>) -> Self {
        Self {
            command: command.to_string(),
            target: target.to_string(),
            value: value.into(),
        }
    }

    pub fn click(target: &str) -> Self {
        Self::new("click", target, "")
    }

    pub fn select(target: &str, label: &str) -> Self {
        Self::new("select", target, format!("label={}", label))
    }
}

/// A complete macro: open the start page, then fill the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Macro {
    #[serde(rename = "Name")]
    pub name: String,
    /// `YYYY-MM-DD`.
    #[serde(rename = "CreationDate")]
    pub creation_date: String,
    #[serde(rename = "Commands")]
    pub commands: Vec<AutomationCommand>,
}

/// Turns extraction results into form-filling commands.
#[derive(Debug, Clone)]
pub struct FieldMapper {
    start_url: String,
    payment_method: String,
}

impl FieldMapper {
    /// Create a mapper with the default start page and payment method.
    pub fn new() -> Self {
        Self::from_config(&MappingConfig::default())
    }

    pub fn from_config(config: &MappingConfig) -> Self {
        Self {
            start_url: config.start_url.clone(),
            payment_method: config.payment_method.clone(),
        }
    }

    /// Field table for a form.
    pub fn mappings(form: FormType) -> &'static [FieldSpec] {
        match form {
            FormType::AccountCreation => ACCOUNT_CREATION_FIELDS,
            FormType::Reservation => &[],
        }
    }

    fn resolve_value(&self, spec: &FieldSpec, result: &ExtractionResult) -> String {
        let raw = match spec.source {
            ValueSource::Extracted(field) => result.get(field).text.clone(),
            ValueSource::Default(value) => value.to_string(),
            ValueSource::PaymentMethod => self.payment_method.clone(),
        };

        match spec.source {
            ValueSource::Extracted(Field::State) => standardize_state(&raw),
            ValueSource::Extracted(Field::Phone) => standardize_phone(&raw),
            ValueSource::Extracted(Field::Email) => standardize_email(&raw),
            ValueSource::Extracted(Field::ZipCode) => standardize_zip(&raw),
            _ => raw,
        }
    }

    /// Build the commands that fill `form` from `result`.
    pub fn create_form_commands(
        &self,
        form: FormType,
        result: &ExtractionResult,
    ) -> Vec<AutomationCommand> {
        let mut commands = Vec::new();

        for spec in Self::mappings(form) {
            let Some(selector) = spec.selectors.first() else {
                continue;
            };

            let value = self.resolve_value(spec, result);
            if spec.required && value.is_empty() {
                warn!("Required field {} is empty", spec.name);
                continue;
            }

            match spec.kind {
                InputKind::Text => {
                    commands.push(AutomationCommand::click(selector));
                    commands.push(AutomationCommand::new("type", selector, value));
                }
                InputKind::Checkbox => {
                    if is_truthy(&value) {
                        commands.push(AutomationCommand::click(selector));
                    }
                }
                InputKind::Select => {
                    commands.push(AutomationCommand::select(selector, &value));
                }
            }
        }

        if form == FormType::AccountCreation {
            commands.push(AutomationCommand::click("linkText=Financial Data"));
            commands.push(AutomationCommand::select(
                "name=contPaymentMethod",
                &self.payment_method,
            ));
            commands.push(AutomationCommand::click("linkText=Account Info"));
        }

        debug!("Created {} commands for {}", commands.len(), form);
        commands
    }

    /// Wrap the form commands in a named macro dated `date`.
    pub fn generate_macro(
        &self,
        form: FormType,
        result: &ExtractionResult,
        date: NaiveDate,
    ) -> Macro {
        let mut commands = vec![AutomationCommand::new("open", &self.start_url, "")];
        commands.extend(self.create_form_commands(form, result));

        Macro {
            name: format!("LimoAnywhere_{}_AutoFill", form),
            creation_date: date.format("%Y-%m-%d").to_string(),
            commands,
        }
    }
}

impl Default for FieldMapper {
    fn default() -> Self {
        Self::new()
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value, "true" | "1" | "on")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_result() -> ExtractionResult {
        let mut result = ExtractionResult::new();
        result.first_name.set("Sarah", 0.9);
        result.last_name.set("Connor", 0.9);
        result.state.set("massachusetts", 0.85);
        result.phone.set("508.555.0199", 0.9);
        result.email.set("Sarah@Example.com", 0.95);
        result
    }

    #[test]
    fn test_form_type_parsing() {
        assert_eq!("accountCreation".parse::<FormType>(), Ok(FormType::AccountCreation));
        assert_eq!("account-creation".parse::<FormType>(), Ok(FormType::AccountCreation));
        assert_eq!("Reservation".parse::<FormType>(), Ok(FormType::Reservation));
        assert_eq!(
            "invoice".parse::<FormType>(),
            Err(ExtractionError::UnknownFormType("invoice".to_string()))
        );
    }

    #[test]
    fn test_account_creation_commands() {
        let commands = FieldMapper::new()
            .create_form_commands(FormType::AccountCreation, &sample_result());

        assert_eq!(commands[0], AutomationCommand::click("id=contN1T1"));
        assert_eq!(commands[1], AutomationCommand::new("type", "id=contN1T1", "Sarah"));
        assert_eq!(commands[4], AutomationCommand::click("name=contType1"));

        let state = commands
            .iter()
            .find(|c| c.target == "name=contState")
            .unwrap();
        assert_eq!(state.value, "label=MA");

        let email = commands
            .iter()
            .find(|c| c.target == "id=emailValue1" && c.command == "type")
            .unwrap();
        assert_eq!(email.value, "sarah@example.com");

        let tail: Vec<&str> = commands.iter().rev().take(3).map(|c| c.target.as_str()).collect();
        assert_eq!(
            tail,
            vec!["linkText=Account Info", "name=contPaymentMethod", "linkText=Financial Data"]
        );
    }

    #[test]
    fn test_required_field_skipped_when_empty() {
        let mut result = sample_result();
        result.first_name.clear_text();

        let commands = FieldMapper::new().create_form_commands(FormType::AccountCreation, &result);
        assert!(commands.iter().all(|c| c.target != "id=contN1T1"));
        assert_eq!(commands[0].target, "id=contN2T1");
    }

    #[test]
    fn test_reservation_has_no_commands() {
        let commands = FieldMapper::new().create_form_commands(FormType::Reservation, &sample_result());
        assert!(commands.is_empty());
    }

    #[test]
    fn test_generate_macro() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let mapper = FieldMapper::new();
        let m = mapper.generate_macro(FormType::AccountCreation, &sample_result(), date);

        assert_eq!(m.name, "LimoAnywhere_accountCreation_AutoFill");
        assert_eq!(m.creation_date, "2025-06-01");
        assert_eq!(m.commands[0].command, "open");

        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["Commands"][1]["Command"], "click");
        assert_eq!(json["Commands"][1]["Target"], "id=contN1T1");
    }

    #[test]
    fn test_configured_payment_method() {
        let config = MappingConfig {
            payment_method: "Cash".to_string(),
            ..MappingConfig::default()
        };
        let commands = FieldMapper::from_config(&config)
            .create_form_commands(FormType::AccountCreation, &ExtractionResult::new());
        let payments: Vec<_> = commands
            .iter()
            .filter(|c| c.target == "name=contPaymentMethod")
            .map(|c| c.value.as_str())
            .collect();
        assert_eq!(payments, vec!["label=Cash", "label=Cash"]);
    }
}
