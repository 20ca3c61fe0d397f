use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("Unrecognized elemental type: {0:?}")]
    InvalidType(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Team coverage requires at least one roster member")]
    EmptyRoster,
}
