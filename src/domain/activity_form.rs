use serde::Deserialize;
use thiserror::Error;
use crate::domain::activity::ActivityDraft;

pub const INPUT_WARNING: &str = "Please enter valid values for all fields.";

#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("Please enter valid values for all fields (missing {0})")]
    MissingField(&'static str)
}

/// Raw submission of the add or edit form. Fields are absent if the form did not send them.
#[derive(Clone, Deserialize, Debug, Default)]
pub struct ActivityForm {
    pub name: Option<String>,
    pub duration: Option<String>,
    pub calories: Option<String>
}

impl TryFrom<ActivityForm> for ActivityDraft {
    type Error = InputError;

    fn try_from(form: ActivityForm) -> Result<Self, Self::Error> {
        Ok(Self {
            name: required(form.name, "name")?,
            duration: required(form.duration, "duration")?,
            calories: required(form.calories, "calories")?
        })
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, InputError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(InputError::MissingField(field))
    }
}
